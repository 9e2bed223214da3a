use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{
    context::Context,
    error::ExtractError,
    models::{self, HandlerResponse},
    service,
};

/// Processes the s3 event. Every failure category is converted into an outcome
/// record here; the platform never sees a raised error.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<HandlerResponse, Error> {
    tracing::info!(
        "processing s3 records record_count={}",
        event.payload.records.len()
    );

    let Some(record) = event.payload.records.first() else {
        tracing::error!("no records found in event");
        return Ok(ExtractError::MalformedNotification.into_response());
    };

    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .unwrap_or_else(|| "".to_string());
    let encoded_key = record
        .s3
        .object
        .key
        .clone()
        .unwrap_or_else(|| "".to_string());

    let key = match models::decode_object_key(&encoded_key) {
        Ok(key) => key,
        Err(err) => {
            tracing::error!(error=?err, key=?encoded_key, "could not decode object key");
            return Ok(ExtractError::Unhandled(err).into_response());
        }
    };

    tracing::info!(bucket = %bucket, key = %key, "processing file");

    match service::message::process(ctx, &bucket, &key).await {
        Ok(outcome) => Ok(outcome.into_response()),
        Err(err) => {
            tracing::error!(error=?err, key=?key, "error processing record");
            Ok(err.into_response())
        }
    }
}
