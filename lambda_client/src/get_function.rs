use aws_sdk_lambda as lambda;
use lambda::types::FunctionConfiguration;
use models_function::RemoteFunction;

use crate::LambdaErr;

/// Fetches the authoritative remote state by name. A missing function is an
/// absence signal, not an error.
#[tracing::instrument(skip(client))]
pub(crate) async fn get_function(
    client: &lambda::Client,
    function_name: &str,
) -> Result<Option<RemoteFunction>, LambdaErr> {
    let resp = client
        .get_function()
        .function_name(function_name)
        .send()
        .await
        .map_err(lambda::Error::from);

    let configuration = match resp {
        Ok(out) => out.configuration,
        Err(lambda::Error::ResourceNotFoundException(_)) => return Ok(None),
        Err(e) => return Err(LambdaErr::AwsErr(e)),
    };

    Ok(configuration.as_ref().map(remote_function))
}

/// Single mapping point from the SDK's configuration record to the
/// workspace's observed record
fn remote_function(configuration: &FunctionConfiguration) -> RemoteFunction {
    RemoteFunction {
        function_name: configuration.function_name().unwrap_or_default().to_string(),
        arn: configuration.function_arn().unwrap_or_default().to_string(),
        description: configuration.description().map(str::to_string),
        handler: configuration.handler().unwrap_or_default().to_string(),
        memory_size: configuration.memory_size().unwrap_or_default(),
        role: configuration.role().unwrap_or_default().to_string(),
        runtime: configuration
            .runtime()
            .map(|runtime| runtime.as_str().to_string())
            .unwrap_or_default(),
        timeout: configuration.timeout().unwrap_or_default(),
        last_modified: configuration.last_modified().unwrap_or_default().to_string(),
        code_sha256: configuration.code_sha256().unwrap_or_default().to_string(),
    }
}
