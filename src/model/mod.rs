//! Request and response bodies of the HTTP API.
//!
//! These types define the JSON contract with API consumers. Keys are camelCase on the
//! wire. Server-side domain models convert into these at the controller boundary.

pub mod api;
pub mod club;
pub mod meeting;
pub mod notification;
pub mod subscription;
pub mod user;
