use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;

use crate::{adapters, model, util};

#[async_trait]
impl adapters::ObjectAdapter for aws_sdk_s3::Client {
    async fn list_objects(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<model::mirror::ObjectPage, model::mirror::MirrorError> {
        let mut req = self.list_objects_v2().bucket(bucket);

        if let Some(tok) = continuation_token {
            req = req.continuation_token(tok);
        }

        let lo = req
            .send()
            .await
            .map_err(|err| model::mirror::MirrorError::Storage {
                message: format!(
                    "failed to list_objects at: {}, {}",
                    bucket,
                    DisplayErrorContext(&err)
                ),
            })?;

        let keys = lo
            .contents()
            .iter()
            .filter_map(|o| o.key())
            .map(|key| key.to_string())
            .collect();

        Ok(model::mirror::ObjectPage {
            keys,
            next_continuation_token: lo.next_continuation_token().map(|tok| tok.to_string()),
        })
    }

    async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> Result<(), model::mirror::MirrorError> {
        let req = self
            .copy_object()
            .copy_source(util::object::copy_source(source_bucket, source_key))
            .bucket(destination_bucket)
            .key(destination_key);

        req.send()
            .await
            .map_err(|err| model::mirror::MirrorError::Storage {
                message: format!(
                    "failed to copy_object: {}/{} -> {}/{}, {}",
                    source_bucket,
                    source_key,
                    destination_bucket,
                    destination_key,
                    DisplayErrorContext(&err)
                ),
            })?;

        Ok(())
    }
}
