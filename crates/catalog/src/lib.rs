//! shelfcard-catalog: catalog backends for previews and tests.
//!
//! Real deployments read categories through the host's e-commerce extension.
//! This crate provides the [`Catalog`](shelfcard_core::Catalog)
//! implementations used when no such extension is around: an in-memory
//! catalog for tests, and a JSON snapshot loader for the preview binary.

mod file;
mod memory;

pub use file::{CatalogFile, CategoryEntry};
pub use memory::MemoryCatalog;
