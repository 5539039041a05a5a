//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod asset_store;

pub use asset_store::RealAssetStore;

#[cfg(test)]
mod tests;
