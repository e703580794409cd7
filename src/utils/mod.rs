//! Utility modules for the command line front end

pub mod exit_codes;
pub mod options;

// Re-export commonly used functions
pub use exit_codes::{exit_code_for, get_exit_code_description};
pub use options::{parse_custom_option, parse_custom_options};
