//! Model repositories and the load-once cache in front of them.

pub mod cache;
pub mod file;
pub mod in_memory;
