use std::sync::Arc;

use crate::{config::Config, service};

#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,
    pub config: Config,
}
