//! Storage layer for forest files.
//!
//! # Directory layout
//!
//! By convention the default root is `~/.ancestry/`:
//!
//! ```text
//! ~/.ancestry/
//! └── forest.json
//! ```
//!
//! # Modules
//!
//! - [`forest_file`] — versioned JSON save/load for a [`Forest`](crate::Forest).

pub mod forest_file;

pub use forest_file::{
    load_forest, read_forest, save_forest, write_forest, ForestFile, NodeRecord,
};
