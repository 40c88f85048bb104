use std::sync::Arc;

use futures::{stream, Stream, TryStreamExt};

use crate::{
    adapters,
    model::{
        config::Configuration,
        mirror::{CopyResult, MirrorError},
    },
};

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Lazily walks every listing page of `bucket`, yielding keys in listing order.
pub fn list_keys<'a>(
    client: &'a dyn adapters::ObjectAdapter,
    bucket: &'a str,
) -> impl Stream<Item = Result<String, MirrorError>> + 'a {
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let continuation_token = match cursor {
            Cursor::Start => None,
            Cursor::Next(tok) => Some(tok),
            Cursor::Done => return Ok::<_, MirrorError>(None),
        };

        let page = client.list_objects(bucket, continuation_token).await?;
        let next = match page.next_continuation_token {
            Some(tok) => Cursor::Next(tok),
            None => Cursor::Done,
        };

        Ok(Some((page.keys, next)))
    })
    .map_ok(|keys| stream::iter(keys.into_iter().map(Ok::<String, MirrorError>)))
    .try_flatten()
}

/// Copies every object of the source bucket into the destination bucket under the same key.
pub struct BucketMirror {
    pub client: Arc<dyn adapters::ObjectAdapter>,
    pub logger: Arc<dyn adapters::Logger>,
}

impl BucketMirror {
    pub fn new(
        client: Arc<dyn adapters::ObjectAdapter>,
        logger: Arc<dyn adapters::Logger>,
    ) -> Self {
        Self { client, logger }
    }

    pub async fn run(&self, config: &Configuration) -> Result<CopyResult, MirrorError> {
        if let Err(err) = config.validate() {
            self.logger.error(&format!("Invalid configuration: {}", err));
            return Err(err);
        }

        self.logger.info(&format!(
            "Starting file copy from '{}' to '{}'",
            config.source_bucket, config.destination_bucket
        ));

        match self.copy_all(config).await {
            Err(err) => {
                self.logger
                    .error(&format!("Error occurred during file copy: {}", err));
                Err(err)
            }
            Ok(result) => Ok(result),
        }
    }

    async fn copy_all(&self, config: &Configuration) -> Result<CopyResult, MirrorError> {
        let keys = list_keys(self.client.as_ref(), &config.source_bucket);
        futures::pin_mut!(keys);

        let mut copied = Vec::new();
        while let Some(key) = keys.try_next().await? {
            self.logger.info(&format!("Copying file: {}", key));

            self.client
                .copy_object(
                    &config.source_bucket,
                    &key,
                    &config.destination_bucket,
                    &key,
                )
                .await?;

            self.logger.info(&format!("File copy completed: {}", key));
            copied.push(key);
        }

        if copied.is_empty() {
            self.logger.info("No files found in source bucket.");
            return Ok(CopyResult::no_files());
        }

        Ok(CopyResult::success(copied))
    }
}
