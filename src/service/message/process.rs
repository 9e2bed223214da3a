use lambda_runtime::tracing;

use crate::{
    context::Context,
    error::ExtractError,
    models::{self, ExtractOutcome, MessageEnvelope},
    service,
};

/// Runs the extract-transform-publish pipeline for one archive object: fetch,
/// decompress, parse the envelope, derive the destination key, publish.
#[tracing::instrument(skip(ctx), fields(bucket = %bucket, key = %key))]
pub async fn process(
    ctx: Context,
    bucket: &str,
    key: &str,
) -> Result<ExtractOutcome, ExtractError> {
    let compressed = ctx.s3_client.get_archive_bytes(bucket, key).await?;
    tracing::trace!(compressed_len = compressed.len(), "archive retrieved");

    let content = service::message::decompress(&compressed)?;
    tracing::trace!(content_len = content.len(), "archive decompressed");

    let envelope: MessageEnvelope = serde_json::from_str(&content)?;
    tracing::info!(
        dispatch_id = ?envelope.dispatch_id,
        campaign_id = ?envelope.campaign_id,
        canvas_id = ?envelope.canvas_id,
        canvas_step_id = ?envelope.canvas_step_id,
        "parsed envelope"
    );

    if envelope.dispatch_id.is_none() {
        tracing::warn!("envelope has no dispatch id, destination falls back to \"unknown\"");
    }

    let Some(target) = envelope.into_publish_target() else {
        tracing::info!("no html content found in html_body field");
        return Ok(ExtractOutcome::NoContent);
    };

    tracing::info!(
        destination_key = %target.key,
        html_len = target.html.len(),
        "publishing extracted html"
    );
    ctx.s3_client
        .put_public_html(&ctx.config.destination_bucket, &target.key, &target.html)
        .await?;

    let url = models::public_url(&ctx.config.destination_bucket, &target.key);
    tracing::info!(url = %url, "extracted html published");

    Ok(ExtractOutcome::Published { url })
}
