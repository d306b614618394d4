//! Core entity definitions for the todo service.
//!
//! This crate defines the records held by the task store (tasks and users)
//! together with the input shapes callers use to create and patch them.

mod task;
mod user;

pub use task::*;
pub use user::*;
