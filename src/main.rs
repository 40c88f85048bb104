use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error};
use tracing::{info, span, Level};

mod adapters;
mod handler;
mod mirror;
mod model;
mod util;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().without_time().init();

    {
        let span = span!(Level::INFO, "main", context = "main");
        let _e = span.enter();
        info!("called");
    }

    let config = aws_config::load_from_env().await;
    let client = aws_sdk_s3::Client::new(&config);

    let mirror = mirror::BucketMirror::new(
        Arc::new(client),
        Arc::new(adapters::log::TracingLogger {}),
    );

    run(service_fn(|event| handler::function_handler(event, &mirror))).await
}
