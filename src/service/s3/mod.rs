mod get;
mod put;

use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

use crate::error::ExtractError;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the raw bytes of an archive object.
    #[tracing::instrument(skip(self))]
    pub async fn get_archive_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ExtractError> {
        get::get_archive_bytes(&self.inner, bucket, key).await
    }

    /// Puts html into the bucket at the given key as a publicly readable,
    /// cacheable web asset.
    #[tracing::instrument(skip(self, html))]
    pub async fn put_public_html(&self, bucket: &str, key: &str, html: &str) -> anyhow::Result<()> {
        put::put_public_html(&self.inner, bucket, key, html).await
    }
}
