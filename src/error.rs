use thiserror::Error;

/// Win32 error codes the native boundary commonly reports.
///
/// Only the codes the default mapping cares about are named here; everything
/// else travels through [`NativeErrorKind::Other`] untouched.
pub mod codes {
    pub const ERROR_FILE_NOT_FOUND: u32 = 2;
    pub const ERROR_PATH_NOT_FOUND: u32 = 3;
    pub const ERROR_ACCESS_DENIED: u32 = 5;
    pub const ERROR_NOT_ENOUGH_MEMORY: u32 = 8;
    pub const ERROR_SHARING_VIOLATION: u32 = 32;
    pub const ERROR_INSUFFICIENT_BUFFER: u32 = 122;
    pub const ERROR_INVALID_NAME: u32 = 123;
    pub const ERROR_ENVVAR_NOT_FOUND: u32 = 203;
    pub const ERROR_FILENAME_EXCED_RANGE: u32 = 206;
    pub const ERROR_MORE_DATA: u32 = 234;
}

/// Domain interpretation of a failed native call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeErrorKind {
    NotFound,
    AccessDenied,
    PathTooLong,
    SharingViolation,
    InvalidName,
    /// Unmapped code, re-raised as-is.
    Other,
}

impl NativeErrorKind {
    /// Default translation of a last-error code into the domain taxonomy.
    pub fn from_code(code: u32) -> Self {
        match code {
            codes::ERROR_FILE_NOT_FOUND | codes::ERROR_PATH_NOT_FOUND => NativeErrorKind::NotFound,
            codes::ERROR_ACCESS_DENIED => NativeErrorKind::AccessDenied,
            codes::ERROR_FILENAME_EXCED_RANGE => NativeErrorKind::PathTooLong,
            codes::ERROR_SHARING_VIOLATION => NativeErrorKind::SharingViolation,
            codes::ERROR_INVALID_NAME => NativeErrorKind::InvalidName,
            _ => NativeErrorKind::Other,
        }
    }
}

impl std::fmt::Display for NativeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NativeErrorKind::NotFound => "not found",
            NativeErrorKind::AccessDenied => "access denied",
            NativeErrorKind::PathTooLong => "path too long",
            NativeErrorKind::SharingViolation => "sharing violation",
            NativeErrorKind::InvalidName => "invalid name",
            NativeErrorKind::Other => "native failure",
        };
        f.write_str(s)
    }
}

/// The primary error type for the crate.
///
/// Consolidates every failure the path engine and the buffer layer can
/// produce. "Too small" replies from native calls are never represented
/// here; the invocation adapter consumes them locally by growing the buffer.
#[derive(Debug, Error)]
pub enum PathError {
    /// The classifier could not determine a root for the given string.
    #[error("invalid path: {0:?}")]
    InvalidPath(String),
    /// The allocator refused a buffer growth request. Fatal for the call,
    /// never retried.
    #[error("buffer allocation of {requested} bytes failed")]
    BufferAllocationFailure { requested: u64 },
    /// A wrapped native call failed with a code that is not "buffer too
    /// small"; `kind` is the default domain translation of `code`.
    #[error("native call failed: {kind} (code {code})")]
    NativeCallFailure { code: u32, kind: NativeErrorKind },
    /// Programming error in how the API was used (empty required argument
    /// and the like). Surfaces during development, never retried.
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

impl PathError {
    pub fn native(code: u32) -> Self {
        PathError::NativeCallFailure { code, kind: NativeErrorKind::from_code(code) }
    }
}

/// A type alias for `Result<T, PathError>`, used throughout the crate.
pub type PathResult<T> = Result<T, PathError>;

/// A module containing helper functions for argument validation.
pub mod validation {
    use super::*;

    /// Validates a path argument before it reaches the classifier or a
    /// native call: rejects empty strings and embedded NULs.
    pub fn validate_path_arg(path: &str) -> PathResult<()> {
        if path.is_empty() {
            return Err(PathError::ContractViolation("path must not be empty".to_string()));
        }
        if path.contains('\0') {
            return Err(PathError::ContractViolation("path contains NUL characters".to_string()));
        }
        Ok(())
    }
}
