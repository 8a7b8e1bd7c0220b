//! Exit codes for the dtn-config CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.

use dtn_common::Error;

/// Exit codes for dtn-config operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    /// A parameter failed validation
    InvalidConfiguration = 10,

    /// Config file could not be located or parsed
    ConfigError = 11,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.code() {
            10 => ExitCode::InvalidConfiguration,
            11..=19 => ExitCode::ConfigError,
            60..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // All codes fit in a u8.
        std::process::ExitCode::from(code.as_i32() as u8)
    }
}
