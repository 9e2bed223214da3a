/// The configuration parameters for the application.
///
/// These are pulled from environment variables, which is how the lambda
/// deployment populates them.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket extracted html is published to.
    pub destination_bucket: String,
}

/// Fallback used when `DESTINATION_BUCKET` is not set.
const DEFAULT_DESTINATION_BUCKET: &str = "default-bucket-name";

impl Config {
    pub fn from_env() -> Self {
        let destination_bucket = std::env::var("DESTINATION_BUCKET")
            .unwrap_or_else(|_| DEFAULT_DESTINATION_BUCKET.to_string());
        Config { destination_bucket }
    }
}
