//! Store error types
//!
//! Error codes:
//! - DIR_STORE_IO_ERROR (ERROR severity)
//! - DIR_STORE_WRITE_FAILED (ERROR severity)
//! - DIR_STORE_READ_FAILED (ERROR severity)
//! - DIR_DATA_CORRUPTION (FATAL severity)
//!
//! ERROR-severity failures surface to the caller as HTTP 500 and the process
//! keeps serving. FATAL means the data file can no longer be trusted.

use std::fmt;
use std::io;

/// Severity of a store error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, process continues serving
    Error,
    /// The data file is untrustworthy
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Store-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Disk I/O failure outside a read or write of a record
    DirStoreIoError,
    /// Record append failed
    DirStoreWriteFailed,
    /// Record read failed
    DirStoreReadFailed,
    /// Frame checksum failure or malformed frame
    DirDataCorruption,
}

impl StoreErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::DirStoreIoError => "DIR_STORE_IO_ERROR",
            StoreErrorCode::DirStoreWriteFailed => "DIR_STORE_WRITE_FAILED",
            StoreErrorCode::DirStoreReadFailed => "DIR_STORE_READ_FAILED",
            StoreErrorCode::DirDataCorruption => "DIR_DATA_CORRUPTION",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::DirStoreIoError => Severity::Error,
            StoreErrorCode::DirStoreWriteFailed => Severity::Error,
            StoreErrorCode::DirStoreReadFailed => Severity::Error,
            StoreErrorCode::DirDataCorruption => Severity::Fatal,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with code, message, and optional I/O source.
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DirStoreIoError,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DirStoreWriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::DirStoreWriteFailed,
            message: message.into(),
            source: None,
        }
    }

    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DirStoreReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn corruption(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::DirDataCorruption,
            message: message.into(),
            source: None,
        }
    }

    /// Corruption error carrying the byte offset of the bad frame.
    pub fn corruption_at_offset(offset: u64, reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::DirDataCorruption,
            message: format!("{} (byte_offset: {})", reason.into(), offset),
            source: None,
        }
    }

    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
