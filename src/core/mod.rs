//! Core module - data model, errors, path handling and rendering
//!
//! This module provides:
//! - Result model (ScoreRecord, ResultSet)
//! - Error taxonomy with exit codes
//! - Path resolution utilities
//! - Rendering for the output formats
//! - File reading for text algorithms

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
