use aws_sdk_lambda as lambda;

use crate::LambdaErr;

/// Deletes by name. Absence on the remote side is success so that the verb
/// stays idempotent.
#[tracing::instrument(skip(client))]
pub(crate) async fn delete_function(
    client: &lambda::Client,
    function_name: &str,
) -> Result<(), LambdaErr> {
    match client
        .delete_function()
        .function_name(function_name)
        .send()
        .await
        .map_err(lambda::Error::from)
    {
        Ok(_) => Ok(()),
        Err(lambda::Error::ResourceNotFoundException(e)) => {
            tracing::trace!("function {function_name} was already absent: {e:?}");
            Ok(())
        }
        Err(e) => Err(LambdaErr::AwsErr(e)),
    }
}
