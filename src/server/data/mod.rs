//! Database repository layer for all domain entities.
//!
//! Repositories borrow any SeaORM connection (`DatabaseConnection` or an open
//! `DatabaseTransaction`) so services can compose several of them inside one
//! transaction. They return server domain models, never entity models.

pub mod club;
pub mod meeting;
pub mod notification;
pub mod subscription;
pub mod user;
