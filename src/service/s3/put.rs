use anyhow::Context;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;

const CONTENT_TYPE: &str = "text/html";
/// One day of edge caching.
const CACHE_CONTROL: &str = "max-age=86400";

#[tracing::instrument(skip(client, html))]
pub async fn put_public_html(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    html: &str,
) -> anyhow::Result<()> {
    let body = s3::primitives::ByteStream::from(html.as_bytes().to_vec());
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .content_type(CONTENT_TYPE)
        .cache_control(CACHE_CONTROL)
        .acl(s3::types::ObjectCannedAcl::PublicRead)
        .send()
        .await
        .context(format!("could not put item {key} into bucket {bucket}"))?;
    Ok(())
}
