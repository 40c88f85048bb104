use async_trait::async_trait;

use crate::model;

pub mod log;
#[cfg(test)]
pub mod mock;
pub mod s3;

#[async_trait]
pub trait ObjectAdapter: Send + Sync {
    /// Lists a single page of `bucket`, starting at `continuation_token` when given.
    async fn list_objects(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<model::mirror::ObjectPage, model::mirror::MirrorError>;

    /// Copies one object, overwriting whatever is stored at the destination key.
    async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> Result<(), model::mirror::MirrorError>;
}

pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
