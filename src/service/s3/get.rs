use anyhow::Context;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;

use crate::error::ExtractError;

/// Gets a given item from the bucket. A missing key maps to
/// [ExtractError::SourceNotFound]; any other failure is unexpected.
#[tracing::instrument(skip(client))]
pub async fn get_archive_bytes(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, ExtractError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| {
            if err.as_service_error().is_some_and(|e| e.is_no_such_key()) {
                ExtractError::SourceNotFound {
                    key: key.to_string(),
                }
            } else {
                ExtractError::Unhandled(anyhow::Error::new(err).context(format!(
                    "could not get item {key} from bucket {bucket}"
                )))
            }
        })?;

    let body = resp.body.collect().await.context("could not collect body")?;
    Ok(body.into_bytes().to_vec())
}
