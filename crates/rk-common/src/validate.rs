//! Upload validation gates and size formatting.
//!
//! Validation errors stop an export before it starts; nothing here retries.

use crate::{Error, Result};

/// Default upload allow-list.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

/// Default upload size limit: 10 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Case-insensitive suffix match against an extension allow-list.
pub fn validate_file_type(name: &str, allowed: &[&str]) -> bool {
    let lower = name.to_lowercase();
    allowed
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Byte-count comparison against a limit (inclusive).
pub fn validate_file_size(size_bytes: u64, max_bytes: u64) -> bool {
    size_bytes <= max_bytes
}

/// Run both gates with the given limits, producing a structured error on
/// the first failure.
pub fn validate_upload(name: &str, size_bytes: u64, allowed: &[&str], max_bytes: u64) -> Result<()> {
    if !validate_file_type(name, allowed) {
        return Err(Error::UnsupportedFileType {
            name: name.to_string(),
        });
    }
    if !validate_file_size(size_bytes, max_bytes) {
        return Err(Error::FileTooLarge {
            bytes: size_bytes,
            max: max_bytes,
        });
    }
    Ok(())
}

/// Convert a byte count to a human string using base-1024 units.
///
/// Two decimal places with trailing zeros trimmed: `0 Bytes`, `1 KB`,
/// `1.5 KB`. Units stop at GB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut formatted = format!("{:.2}", value);
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }

    format!("{} {}", formatted, UNITS[exponent])
}
