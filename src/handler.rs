use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, Instrument, Level};

use crate::{
    mirror::BucketMirror,
    model::{config::Configuration, mirror::CopyResult},
};

/// Lambda entry point. The event payload is accepted but not consumed.
pub async fn function_handler(
    event: LambdaEvent<Value>,
    mirror: &BucketMirror,
) -> Result<CopyResult, Error> {
    let span = tracing::span!(
        Level::INFO,
        "handler",
        context = "handler",
        request_id = %event.context.request_id
    );

    async move {
        info!("called");

        let config = Configuration::from_env().inspect_err(|err| {
            error!(error_message=%err, error_group="configuration");
        })?;

        let result = mirror.run(&config).await.inspect_err(|err| {
            error!(error_message=%err, error_group="mirror");
        })?;

        info!(status=?result.status, copied=result.keys().len(), "done");
        Ok(result)
    }
    .instrument(span)
    .await
}
