//! Binds the platform port to the AWS Lambda control plane

use lambda_client::{LambdaClient, LambdaErr};
use models_function::{FunctionConfig, RemoteFunction};

use crate::domain::ports::FunctionPlatform;

impl FunctionPlatform for LambdaClient {
    type Err = LambdaErr;

    async fn create_function(
        &self,
        config: &FunctionConfig,
        archive: Vec<u8>,
    ) -> Result<(), LambdaErr> {
        LambdaClient::create_function(self, config, archive).await
    }

    async fn get_function(&self, function_name: &str) -> Result<Option<RemoteFunction>, LambdaErr> {
        LambdaClient::get_function(self, function_name).await
    }

    async fn update_function_configuration(&self, config: &FunctionConfig) -> Result<(), LambdaErr> {
        LambdaClient::update_function_configuration(self, config).await
    }

    async fn update_function_code(
        &self,
        function_name: &str,
        archive: Vec<u8>,
    ) -> Result<(), LambdaErr> {
        LambdaClient::update_function_code(self, function_name, archive).await
    }

    async fn delete_function(&self, function_name: &str) -> Result<(), LambdaErr> {
        LambdaClient::delete_function(self, function_name).await
    }
}
