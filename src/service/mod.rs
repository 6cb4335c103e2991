//! Service layer module.
//!
//! Contains the secret generation logic: class pool validation, constrained
//! composition, shuffling, app key segmentation, and UUID construction.

pub mod compose;
pub mod entropy;
pub mod generator;
pub mod guid;
pub mod pool;
pub mod segment;

pub use entropy::EntropySource;
pub use generator::{generate, generate_with};
pub use pool::{ClassPool, PoolEntry};
