//! Input/output operations and error handling
//!
//! This module contains the peripheral glue around the codec:
//! - Command-line interface and user-facing output
//! - Constants and file-naming conventions
//! - Error types shared across the crate
//! - One-time tile-sheet slicing for catalog setup

/// Command-line interface with encipher, decipher, and slice subcommands
pub mod cli;
/// Codec constants and file-naming conventions
pub mod configuration;
/// Error types for catalog, codec, and filesystem operations
pub mod error;
/// Tile-sheet slicing for one-time catalog setup
pub mod slicer;
