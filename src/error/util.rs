//! Utility functions for error handling
//!
//! This module provides pre-flight filesystem checks that turn the common
//! failure modes into errors a human can act on.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CleanError, Result};

/// Safely open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    // Check if the path exists
    if !path.exists() {
        return Err(CleanError::LoadError(format!(
            "File not found: {} (needed for: {purpose})",
            path.display()
        )));
    }

    // Check if the path is a file
    if !path.is_file() {
        return Err(CleanError::LoadError(format!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        )));
    }

    // Try to open the file
    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            io::ErrorKind::NotFound => "File not found - it may have been deleted during operation",
            _ => "Failed to open file",
        };
        CleanError::LoadError(format!("{context}: {} ({purpose}): {e}", path.display()))
    })
}

/// Create (or truncate) a file for writing with rich error information
///
/// # Arguments
/// * `path` - The path to the file to create
/// * `purpose` - Why the file is being created (for error context)
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(CleanError::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Path is a directory: {} (expected a writable file for: {purpose})",
                path.display()
            ),
        )));
    }

    fs::File::create(path).map_err(|e| {
        CleanError::IoError(io::Error::new(
            e.kind(),
            format!("Failed to create {} ({purpose}): {e}", path.display()),
        ))
    })
}
