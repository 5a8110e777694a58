//! Utility modules for column access and console output

pub mod arrow_utils;
pub mod console;
