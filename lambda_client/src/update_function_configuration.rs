use aws_sdk_lambda as lambda;
use lambda::types::Runtime;
use models_function::FunctionConfig;

use crate::LambdaErr;

/// Pushes every mutable configuration field. The description is always sent
/// so that clearing it remotely works; a declared `None` becomes the empty
/// string the platform uses for "no description".
#[tracing::instrument(skip(client, config), fields(function_name = %config.function_name))]
pub(crate) async fn update_function_configuration(
    client: &lambda::Client,
    config: &FunctionConfig,
) -> Result<(), LambdaErr> {
    client
        .update_function_configuration()
        .function_name(&config.function_name)
        .handler(&config.handler)
        .role(&config.role)
        .runtime(Runtime::from(config.runtime()))
        .memory_size(config.memory_size())
        .timeout(config.timeout())
        .description(config.description.as_deref().unwrap_or_default())
        .send()
        .await
        .map_err(lambda::Error::from)?;

    Ok(())
}
