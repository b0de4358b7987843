//! Business logic layer.
//!
//! Services orchestrate repositories for one domain each. Every operation takes the
//! authenticated caller id as an explicit argument where it matters; nothing is read
//! from ambient state. Writes that span several statements, or that depend on an
//! ownership check, run inside a single database transaction.

pub mod club;
pub mod meeting;
pub mod notification;
pub mod ownership;
pub mod subscription;
pub mod transaction;

#[cfg(test)]
mod test;
