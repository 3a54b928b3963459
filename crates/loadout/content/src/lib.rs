//! Data-driven game catalogs and loaders.
//!
//! This crate houses the catalog data shipped with loadout and the loaders
//! that read additional catalogs from RON files:
//! - Built-in catalogs embedded at compile time ([`builtin_registry`])
//! - Game definitions loaded from a data directory (`loaders` feature)
//!
//! Catalogs are consumed through `loadout_core::CatalogOracle` and are never
//! mutated after the registry is built.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{LOL, builtin_definitions, builtin_registry};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContentFactory};
