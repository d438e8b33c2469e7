//! Exit codes shared by every tool following the convention

/// All files processed
pub const OK: i32 = 0;

/// General processing error
pub const GENERAL: i32 = 1;

/// Invalid input (bad arguments, unknown algorithm, no files)
pub const INVALID_INPUT: i32 = 2;

/// An input file does not exist
pub const NOT_FOUND: i32 = 3;

/// An input file cannot be read
pub const PERMISSION: i32 = 4;
