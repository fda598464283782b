#[cfg(test)]
pub use MockLambdaClient as Lambda;
#[cfg(not(test))]
pub use LambdaClient as Lambda;
use aws_config::SdkConfig;
use aws_sdk_lambda as lambda;
#[allow(unused_imports)]
use mockall::automock;
use models_function::{FunctionConfig, RemoteFunction};
use thiserror::Error;

mod create_function;
mod delete_function;
mod get_function;
mod update_function_code;
mod update_function_configuration;

/// Typed wrapper over the Lambda control-plane operations used to manage
/// function resources.
#[derive(Clone, Debug)]
pub struct LambdaClient {
    inner: lambda::Client,
}

#[derive(Debug, Error)]
pub enum LambdaErr {
    #[error("{0:?}")]
    AwsErr(#[from] lambda::Error),
}

#[cfg_attr(test, automock)]
impl LambdaClient {
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self::new_from_client(lambda::Client::new(aws_config))
    }

    pub fn new_from_client(inner: lambda::Client) -> Self {
        Self { inner }
    }

    /// Provisions a new function from the declared configuration and the raw
    /// archive bytes
    #[tracing::instrument(skip(self, config, archive), fields(function_name = %config.function_name))]
    pub async fn create_function(
        &self,
        config: &FunctionConfig,
        archive: Vec<u8>,
    ) -> Result<(), LambdaErr> {
        create_function::create_function(&self.inner, config, archive).await
    }

    /// Fetches the current remote configuration; `None` when the function
    /// does not exist
    #[tracing::instrument(skip(self))]
    pub async fn get_function(
        &self,
        function_name: &str,
    ) -> Result<Option<RemoteFunction>, LambdaErr> {
        get_function::get_function(&self.inner, function_name).await
    }

    /// Pushes the declared configuration fields to an existing function
    #[tracing::instrument(skip(self, config), fields(function_name = %config.function_name))]
    pub async fn update_function_configuration(
        &self,
        config: &FunctionConfig,
    ) -> Result<(), LambdaErr> {
        update_function_configuration::update_function_configuration(&self.inner, config).await
    }

    /// Uploads a new code archive to an existing function
    #[tracing::instrument(skip(self, archive))]
    pub async fn update_function_code(
        &self,
        function_name: &str,
        archive: Vec<u8>,
    ) -> Result<(), LambdaErr> {
        update_function_code::update_function_code(&self.inner, function_name, archive).await
    }

    /// Deletes the function; a function that is already gone counts as
    /// deleted
    #[tracing::instrument(skip(self))]
    pub async fn delete_function(&self, function_name: &str) -> Result<(), LambdaErr> {
        delete_function::delete_function(&self.inner, function_name).await
    }
}
