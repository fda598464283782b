use aws_sdk_lambda as lambda;
use lambda::primitives::Blob;

use crate::LambdaErr;

#[tracing::instrument(skip(client, archive), fields(code_size = archive.len()))]
pub(crate) async fn update_function_code(
    client: &lambda::Client,
    function_name: &str,
    archive: Vec<u8>,
) -> Result<(), LambdaErr> {
    client
        .update_function_code()
        .function_name(function_name)
        .zip_file(Blob::new(archive))
        .send()
        .await
        .map_err(lambda::Error::from)?;

    Ok(())
}
