//! Exit codes for the rk CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0-6: Success/operational outcomes
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

/// Exit codes for rk operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    // ========================================================================
    // Success / Operational Outcomes (0-6)
    // ========================================================================
    /// Success: export or check completed cleanly
    Clean = 0,

    /// Export completed but some best-effort entries were skipped
    PartialExport = 1,

    // ========================================================================
    // User / Environment Errors (10-19)
    // ========================================================================
    /// Invalid arguments
    ArgsError = 10,

    /// Input file failed validation (type or size)
    ValidationError = 11,

    /// Input file missing or unreadable
    InputError = 12,

    /// No usable system font for PDF rendering
    FontError = 13,

    /// Analysis backend declined or failed
    BackendError = 14,

    /// No clipboard tool available on this host
    ClipboardError = 15,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success (codes 0-6).
    pub fn is_success(self) -> bool {
        (self as i32) < 10
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Check if this exit code is an internal error (codes 20+).
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::PartialExport => "OK_PARTIAL",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ValidationError => "ERR_VALIDATION",
            ExitCode::InputError => "ERR_INPUT",
            ExitCode::FontError => "ERR_FONT",
            ExitCode::BackendError => "ERR_BACKEND",
            ExitCode::ClipboardError => "ERR_CLIPBOARD",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&rk_common::Error> for ExitCode {
    fn from(err: &rk_common::Error) -> Self {
        use rk_common::ErrorCategory;
        match err.category() {
            ErrorCategory::Validation => ExitCode::ValidationError,
            ErrorCategory::Render => match err {
                rk_common::Error::FontUnavailable(_) => ExitCode::FontError,
                _ => ExitCode::InternalError,
            },
            ErrorCategory::Packaging => ExitCode::InternalError,
            ErrorCategory::Session => match err {
                rk_common::Error::AnalysisFailed(_) => ExitCode::BackendError,
                _ => ExitCode::ArgsError,
            },
            ErrorCategory::Backend => ExitCode::BackendError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_ranges() {
        assert!(ExitCode::Clean.is_success());
        assert!(ExitCode::PartialExport.is_success());
        assert!(ExitCode::ValidationError.is_user_error());
        assert!(ExitCode::FontError.is_user_error());
        assert!(ExitCode::ClipboardError.is_user_error());
        assert!(!ExitCode::ClipboardError.is_internal_error());
        assert!(ExitCode::InternalError.is_internal_error());
        assert!(!ExitCode::Clean.is_user_error());
    }

    #[test]
    fn test_error_mapping() {
        let err = rk_common::Error::FileTooLarge {
            bytes: 11 << 20,
            max: 10 << 20,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        let err = rk_common::Error::FontUnavailable("no sans-serif".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::FontError);

        let err = rk_common::Error::Render("slice failed".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::InternalError);
    }
}
