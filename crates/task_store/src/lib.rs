//! Task and user storage for the todo service.
//!
//! This crate provides a storage abstraction for tasks and users. Callers
//! depend on the [`TaskStore`] trait; [`MemoryTaskStore`] keeps everything in
//! process memory and is the only backend so far.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
