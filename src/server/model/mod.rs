//! Server-side domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary; controllers convert them into wire DTOs. Parameter structs carry the
//! validated input of a single operation.

pub mod club;
pub mod meeting;
pub mod notification;
pub mod subscription;
pub mod user;
