//! Lifecycle service implementations exposed by this crate

use models_function::{FunctionConfig, RemoteFunction};

use crate::archive;
use crate::domain::models::FunctionDrift;
use crate::domain::ports::{FunctionLifecycle, FunctionPlatform, ProvisionErr};


/// Reconciles one declared function against the remote platform.
///
/// Holds no state beyond the injected platform client: each verb is a single
/// pass of remote calls, and the host engine owns identity bookkeeping,
/// per-identity serialization and retry policy.
#[derive(Clone)]
pub struct FunctionProvisioner<P> {
    platform: P,
}

impl<P> FunctionProvisioner<P>
where
    P: FunctionPlatform,
    anyhow::Error: From<P::Err>,
{
    /// create a new instance over the injected platform client
    pub fn new(platform: P) -> Self {
        FunctionProvisioner { platform }
    }

    fn platform_err(operation: &'static str, function_name: &str, err: P::Err) -> ProvisionErr {
        ProvisionErr::Platform {
            operation,
            function_name: function_name.to_string(),
            cause: anyhow::Error::from(err),
        }
    }

    fn validated(config: &FunctionConfig) -> Result<(), ProvisionErr> {
        config.validate().map_err(|source| ProvisionErr::Invalid {
            function_name: config.function_name.clone(),
            source,
        })
    }

    fn read_archive(config: &FunctionConfig) -> Result<Vec<u8>, ProvisionErr> {
        archive::read_archive(&config.filename).map_err(|source| ProvisionErr::Archive {
            path: config.filename.clone(),
            source,
        })
    }

    /// Read back after a write so the record a caller receives always
    /// carries the platform's authoritative, server-computed values.
    async fn refresh(
        &self,
        function_name: &str,
        operation: &'static str,
    ) -> Result<RemoteFunction, ProvisionErr> {
        self.platform
            .get_function(function_name)
            .await
            .map_err(|e| Self::platform_err("GetFunction", function_name, e))?
            .ok_or_else(|| ProvisionErr::Platform {
                operation,
                function_name: function_name.to_string(),
                cause: anyhow::anyhow!("function disappeared before it could be read back"),
            })
    }
}

impl<P> FunctionLifecycle for FunctionProvisioner<P>
where
    P: FunctionPlatform,
    anyhow::Error: From<P::Err>,
{
    #[tracing::instrument(err, skip(self, config), fields(function_name = %config.function_name))]
    async fn create(&self, config: &FunctionConfig) -> Result<RemoteFunction, ProvisionErr> {
        Self::validated(config)?;
        let archive = Self::read_archive(config)?;

        self.platform
            .create_function(config, archive)
            .await
            .map_err(|e| Self::platform_err("CreateFunction", &config.function_name, e))?;

        self.refresh(&config.function_name, "CreateFunction").await
    }

    #[tracing::instrument(err, skip(self))]
    async fn read(&self, function_name: &str) -> Result<Option<RemoteFunction>, ProvisionErr> {
        self.platform
            .get_function(function_name)
            .await
            .map_err(|e| Self::platform_err("GetFunction", function_name, e))
    }

    #[tracing::instrument(err, skip(self, observed, desired), fields(function_name = %observed.function_name))]
    async fn update(
        &self,
        observed: &RemoteFunction,
        desired: &FunctionConfig,
    ) -> Result<RemoteFunction, ProvisionErr> {
        if desired.function_name != observed.function_name {
            return Err(ProvisionErr::NameChanged {
                current: observed.function_name.clone(),
                desired: desired.function_name.clone(),
            });
        }
        Self::validated(desired)?;

        let archive = Self::read_archive(desired)?;
        let drift = FunctionDrift::detect(desired, observed, &archive::code_sha256(&archive));

        if drift.is_converged() {
            tracing::trace!("function already matches the declared configuration");
            return Ok(observed.clone());
        }

        if drift.configuration {
            self.platform
                .update_function_configuration(desired)
                .await
                .map_err(|e| {
                    Self::platform_err(
                        "UpdateFunctionConfiguration",
                        &desired.function_name,
                        e,
                    )
                })?;
        }

        if drift.code {
            self.platform
                .update_function_code(&desired.function_name, archive)
                .await
                .map_err(|e| {
                    Self::platform_err("UpdateFunctionCode", &desired.function_name, e)
                })?;
        }

        self.refresh(&desired.function_name, "UpdateFunction").await
    }

    #[tracing::instrument(err, skip(self))]
    async fn delete(&self, function_name: &str) -> Result<(), ProvisionErr> {
        self.platform
            .delete_function(function_name)
            .await
            .map_err(|e| Self::platform_err("DeleteFunction", function_name, e))
    }
}
