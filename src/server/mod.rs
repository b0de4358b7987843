//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Caller identity arrives through a server-side session written by the external
//! authentication service.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database and session initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the caller, converts DTOs to params, calls service
//! 3. **Service** checks ownership and runs writes inside a transaction
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
