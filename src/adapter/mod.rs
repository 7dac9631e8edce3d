//! Concrete implementations of the crate's ports.

pub mod sqlite;
