//! Route handlers, one module per concern

pub mod api;
pub mod assets;
pub mod page;
