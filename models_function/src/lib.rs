#![deny(missing_docs)]
//! Shared record types for a provisioned serverless function: the declared
//! configuration the host framework hands over, and the state observed on
//! the remote platform.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Memory ceiling applied when the declared configuration leaves `memory_size` unset
pub const DEFAULT_MEMORY_SIZE_MB: i32 = 128;

/// Execution deadline applied when the declared configuration leaves `timeout` unset
pub const DEFAULT_TIMEOUT_SECONDS: i32 = 3;

/// Runtime identifier applied when the declared configuration leaves `runtime` unset
pub const DEFAULT_RUNTIME: &str = "nodejs";

/// Declared state of a single serverless function.
///
/// `function_name` is the resource identity and is immutable once the
/// function exists remotely; changing it means replacing the function.
/// Server-computed values never appear here, they only exist on
/// [RemoteFunction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Local path of the code archive to upload
    pub filename: PathBuf,
    /// Resource identity on the remote platform
    pub function_name: String,
    /// Entry point inside the code archive
    pub handler: String,
    /// Execution role the function assumes
    pub role: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Memory ceiling in megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<i32>,
    /// Runtime identifier understood by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Execution deadline in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
}

impl FunctionConfig {
    /// Declared memory ceiling, falling back to the platform default
    pub fn memory_size(&self) -> i32 {
        self.memory_size.unwrap_or(DEFAULT_MEMORY_SIZE_MB)
    }

    /// Declared execution deadline, falling back to the platform default
    pub fn timeout(&self) -> i32 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Declared runtime identifier, falling back to the platform default
    pub fn runtime(&self) -> &str {
        self.runtime.as_deref().unwrap_or(DEFAULT_RUNTIME)
    }

    /// Rejects a configuration that must not reach the remote platform.
    ///
    /// The surrounding host framework is expected to have validated the
    /// record already; this is the last check before a remote call.
    pub fn validate(&self) -> Result<(), ConfigErr> {
        if self.function_name.is_empty() {
            return Err(ConfigErr::MissingField("function_name"));
        }
        if self.filename.as_os_str().is_empty() {
            return Err(ConfigErr::MissingField("filename"));
        }
        if self.handler.is_empty() {
            return Err(ConfigErr::MissingField("handler"));
        }
        if self.role.is_empty() {
            return Err(ConfigErr::MissingField("role"));
        }
        Ok(())
    }
}

/// A declared configuration that cannot be sent to the platform
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigErr {
    /// a required field is missing or empty
    #[error("required field {0} is missing or empty")]
    MissingField(&'static str),
}

/// Server-observed state of a function, produced only by reads of the
/// remote API.
///
/// `arn`, `last_modified` and `code_sha256` are computed by the platform
/// and are never part of a request payload. `code_sha256` is the
/// base64-encoded SHA-256 of the deployed archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteFunction {
    /// Resource identity on the remote platform
    pub function_name: String,
    /// Platform-assigned resource identifier
    pub arn: String,
    /// Free-form description, if one is set
    pub description: Option<String>,
    /// Entry point inside the deployed archive
    pub handler: String,
    /// Memory ceiling in megabytes
    pub memory_size: i32,
    /// Execution role the function assumes
    pub role: String,
    /// Runtime identifier
    pub runtime: String,
    /// Execution deadline in seconds
    pub timeout: i32,
    /// Platform timestamp of the last modification
    pub last_modified: String,
    /// Base64-encoded SHA-256 digest of the deployed archive
    pub code_sha256: String,
}
