use aws_sdk_lambda as lambda;
use lambda::primitives::Blob;
use lambda::types::{FunctionCode, Runtime};
use models_function::FunctionConfig;

use crate::LambdaErr;

/// Maps the declared configuration onto CreateFunction. The archive rides as
/// raw bytes; the SDK owns any transport encoding.
#[tracing::instrument(skip(client, config, archive), fields(function_name = %config.function_name, code_size = archive.len()))]
pub(crate) async fn create_function(
    client: &lambda::Client,
    config: &FunctionConfig,
    archive: Vec<u8>,
) -> Result<(), LambdaErr> {
    let code = FunctionCode::builder().zip_file(Blob::new(archive)).build();

    let mut req = client
        .create_function()
        .function_name(&config.function_name)
        .handler(&config.handler)
        .role(&config.role)
        .runtime(Runtime::from(config.runtime()))
        .memory_size(config.memory_size())
        .timeout(config.timeout())
        .code(code);
    if let Some(description) = &config.description {
        req = req.description(description);
    }

    req.send().await.map_err(lambda::Error::from)?;

    Ok(())
}
