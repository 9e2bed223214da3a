mod config;
mod context;
mod entrypoint;
mod error;
mod handler;
mod models;
mod service;

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

use crate::{config::Config, context::Context, entrypoint::Entrypoint};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env();
    tracing::info!(destination_bucket = %config.destination_bucket, "configuration loaded");

    let s3_client = Arc::new(service::s3::S3::new(aws_sdk_s3::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new("us-east-1"))
            .load()
            .await,
    )));

    tracing::trace!("initialized s3 client");

    let ctx = Context { s3_client, config };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();

        async move { handler::handler(ctx, event).await }
    });

    run(func).await
}
