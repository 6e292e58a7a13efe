//! Error types and definitions for depwalker
//!
//! Per-file problems (unreadable, unsupported or malformed manifests) are
//! carried inside parse outcomes and never abort a scan. Configuration and
//! output problems are critical and stop the process before or after the
//! pipeline runs.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for depwalker operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// JSON manifest parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML manifest parsing errors with file context
    #[error("YAML parsing error in {file}: {source}")]
    YamlParse {
        file: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A path reached extraction without a matching ecosystem
    #[error("unsupported file type: {path}")]
    UnsupportedManifest { path: PathBuf },

    /// A manifest could not be read between discovery and extraction
    #[error("Error reading manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid manifest
    #[error("Invalid manifest structure in {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Version string that is not a semantic version
    #[error("Invalid semantic version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Rendered output was not valid UTF-8
    #[error("Output encoding error: {source}")]
    Utf8 {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Worker pool or thread coordination failure
    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl ScanError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            ScanError::PermissionDenied { .. } => ErrorSeverity::Warning,
            ScanError::DirectoryTraversal { .. } => ErrorSeverity::Warning,
            ScanError::UnsupportedManifest { .. } => ErrorSeverity::Warning,
            ScanError::InvalidVersion { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ScanError::Config { .. } => ErrorSeverity::Critical,
            ScanError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ScanError::ConfigRead { .. } => ErrorSeverity::Critical,
            ScanError::ConfigParse { .. } => ErrorSeverity::Critical,
            ScanError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            ScanError::OutputWrite { .. } => ErrorSeverity::Critical,
            ScanError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ScanError::Pipeline { .. } => ErrorSeverity::Critical,

            // Regular errors - current file fails but the scan continues
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ScanError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied.", path.display())
            }
            ScanError::JsonParse { file, source } => {
                format!("Invalid JSON in '{}': {}.", file.display(), source)
            }
            ScanError::YamlParse { file, source } => {
                format!("Invalid YAML in '{}': {}.", file.display(), source)
            }
            ScanError::ManifestRead { path, source } => {
                format!("Could not read '{}': {}.", path.display(), source)
            }
            ScanError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Suggest a fix for errors the user can act on
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ScanError::Config { .. } => Some("Run with --help to see the accepted options"),
            ScanError::ConfigNotFound { .. } => {
                Some("Create one with --init or point --config at an existing file")
            }
            ScanError::ConfigParse { .. } => Some("Check the TOML syntax of the configuration file"),
            ScanError::PermissionDenied { .. } => Some("Check file permissions"),
            ScanError::OutputWrite { .. } => {
                Some("Check that the output directory exists and is writable")
            }
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        ScanError::Io { source }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ScanError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a YAML parse error with file context
    pub fn yaml_parse_error(file: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        ScanError::YamlParse {
            file: file.into(),
            source,
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ScanError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        ScanError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a pipeline coordination error
    pub fn pipeline_error(message: impl Into<String>) -> Self {
        ScanError::Pipeline {
            message: message.into(),
        }
    }

    /// Re-attach a file path to a parse error raised without one
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            ScanError::JsonParse { source, .. } => ScanError::JsonParse { file: path, source },
            ScanError::YamlParse { source, .. } => ScanError::YamlParse { file: path, source },
            ScanError::InvalidManifest { message, .. } => ScanError::InvalidManifest { path, message },
            other => other,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::io_error(err)
    }
}

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        ScanError::Csv { source: err }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::JsonSerialize { source: err }
    }
}

impl From<std::string::FromUtf8Error> for ScanError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ScanError::Utf8 { source: err }
    }
}

/// Result type alias for depwalker operations
pub type Result<T> = std::result::Result<T, ScanError>;
