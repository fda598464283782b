//! Ports required and exposed by the function resource domain

use models_function::{ConfigErr, FunctionConfig, RemoteFunction};
use std::path::PathBuf;
use thiserror::Error;

/// The ways a lifecycle verb can fail.
///
/// Remote absence is never an error: `read` expresses it as `Ok(None)` and
/// `delete` swallows it, so a host only ever sees this type for failures it
/// must act on.
#[derive(Debug, Error)]
pub enum ProvisionErr {
    /// the declared configuration must not be sent to the platform
    #[error("invalid configuration for function {function_name}: {source}")]
    Invalid {
        /// declared resource identity
        function_name: String,
        /// the rejected field
        source: ConfigErr,
    },
    /// the local code archive could not be read
    #[error("could not read code archive {}: {source}", .path.display())]
    Archive {
        /// declared archive path
        path: PathBuf,
        /// underlying filesystem error
        source: std::io::Error,
    },
    /// renaming a function cannot be expressed as an update; the host must
    /// delete and recreate
    #[error("function_name changed from {current} to {desired}, which requires replacement")]
    NameChanged {
        /// identity of the existing remote function
        current: String,
        /// newly declared identity
        desired: String,
    },
    /// the platform rejected a remote call
    #[error("{operation} failed for function {function_name}: {cause}")]
    Platform {
        /// remote operation that failed
        operation: &'static str,
        /// resource identity the call addressed
        function_name: String,
        /// underlying platform error
        cause: anyhow::Error,
    },
}

/// Outbound port over the platform's function API.
///
/// Implementations translate these calls into the remote control plane.
/// Absence is expressed in the return types, never as an error: a missing
/// function is `Ok(None)` on get and plain success on delete.
pub trait FunctionPlatform: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Send + 'static;

    /// provision a new function from the declared configuration and the raw
    /// archive bytes
    fn create_function(
        &self,
        config: &FunctionConfig,
        archive: Vec<u8>,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;

    /// fetch the authoritative remote state; `None` when the function does
    /// not exist
    fn get_function(
        &self,
        function_name: &str,
    ) -> impl Future<Output = Result<Option<RemoteFunction>, Self::Err>> + Send;

    /// push the declared configuration fields to the existing function
    fn update_function_configuration(
        &self,
        config: &FunctionConfig,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;

    /// upload a new code archive to the existing function
    fn update_function_code(
        &self,
        function_name: &str,
        archive: Vec<u8>,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;

    /// remove the function; absence must already count as success
    fn delete_function(
        &self,
        function_name: &str,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// The narrow lifecycle interface a host engine drives, implemented once per
/// resource kind.
///
/// The host owns identity bookkeeping: it records the identity after a
/// successful `create`, clears it when `read` returns `None` or `delete`
/// succeeds, and serializes verbs per identity. Each verb here is a single
/// synchronous pass of remote calls with no internal retries.
pub trait FunctionLifecycle: Send + Sync + 'static {
    /// provision the declared function and return the observed record,
    /// server-computed fields included
    fn create(
        &self,
        config: &FunctionConfig,
    ) -> impl Future<Output = Result<RemoteFunction, ProvisionErr>> + Send;

    /// refresh the observed record from the remote platform; `Ok(None)`
    /// signals absence, not failure
    fn read(
        &self,
        function_name: &str,
    ) -> impl Future<Output = Result<Option<RemoteFunction>, ProvisionErr>> + Send;

    /// converge the existing function onto the declared configuration and
    /// return the refreshed record
    fn update(
        &self,
        observed: &RemoteFunction,
        desired: &FunctionConfig,
    ) -> impl Future<Output = Result<RemoteFunction, ProvisionErr>> + Send;

    /// remove the function; remote absence counts as success
    fn delete(
        &self,
        function_name: &str,
    ) -> impl Future<Output = Result<(), ProvisionErr>> + Send;
}
