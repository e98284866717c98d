#[cfg(feature = "desktop")]
pub mod commands;
pub mod registry;

pub use registry::{decode_neighbors, encode_neighbors, NeighborRegistry, STORAGE_KEY};
