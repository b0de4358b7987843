//! HTTP request handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, convert DTOs into parameter
//! models, call a service and convert the result back into a DTO. They hold no
//! business logic of their own.

pub mod auth;
pub mod club;
pub mod meeting;
pub mod notification;
pub mod subscription;
