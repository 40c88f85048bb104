use std::{
    collections::{BTreeMap, HashMap},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{adapters, model};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List {
        bucket: String,
        continuation_token: Option<String>,
    },
    Copy {
        source_bucket: String,
        source_key: String,
        destination_bucket: String,
        destination_key: String,
    },
}

/// In-memory buckets. Listing pages by key order, `page_size` keys at a time.
pub struct MockClient {
    pub buckets: Mutex<HashMap<String, BTreeMap<String, String>>>,
    pub calls: Mutex<Vec<Call>>,
    pub page_size: usize,
    pub fail_list: bool,
    pub fail_copy_key: Option<String>,
}

impl MockClient {
    pub fn new(page_size: usize) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            page_size,
            fail_list: false,
            fail_copy_key: None,
        }
    }

    pub fn with_objects(self, bucket: &str, keys: &[&str]) -> Self {
        {
            let mut buckets = self.buckets.lock().unwrap();
            let objects = buckets.entry(bucket.to_string()).or_default();
            for key in keys {
                objects.insert(key.to_string(), format!("content of {}", key));
            }
        }

        self
    }

    pub fn objects(&self, bucket: &str) -> BTreeMap<String, String> {
        self.buckets
            .lock()
            .unwrap()
            .get(bucket)
            .cloned()
            .unwrap_or_default()
    }

    pub fn copy_calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                Call::Copy {
                    source_key,
                    destination_key,
                    ..
                } => Some((source_key.clone(), destination_key.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, Call::List { .. }))
            .count()
    }
}

#[async_trait]
impl adapters::ObjectAdapter for MockClient {
    async fn list_objects(
        &self,
        bucket: &str,
        continuation_token: Option<String>,
    ) -> Result<model::mirror::ObjectPage, model::mirror::MirrorError> {
        self.calls.lock().unwrap().push(Call::List {
            bucket: bucket.to_string(),
            continuation_token: continuation_token.clone(),
        });

        if self.fail_list {
            return Err(model::mirror::MirrorError::Storage {
                message: format!("failed to list_objects at: {}, access denied", bucket),
            });
        }

        let objects = self.objects(bucket);
        let remaining: Vec<String> = objects
            .keys()
            .filter(|key| match &continuation_token {
                Some(tok) => key.as_str() > tok.as_str(),
                None => true,
            })
            .cloned()
            .collect();

        let keys: Vec<String> = remaining.iter().take(self.page_size).cloned().collect();
        let next_continuation_token = if remaining.len() > keys.len() {
            keys.last().cloned()
        } else {
            None
        };

        Ok(model::mirror::ObjectPage {
            keys,
            next_continuation_token,
        })
    }

    async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> Result<(), model::mirror::MirrorError> {
        self.calls.lock().unwrap().push(Call::Copy {
            source_bucket: source_bucket.to_string(),
            source_key: source_key.to_string(),
            destination_bucket: destination_bucket.to_string(),
            destination_key: destination_key.to_string(),
        });

        if self.fail_copy_key.as_deref() == Some(source_key) {
            return Err(model::mirror::MirrorError::Storage {
                message: format!(
                    "failed to copy_object: {}/{} -> {}/{}, access denied",
                    source_bucket, source_key, destination_bucket, destination_key
                ),
            });
        }

        let mut buckets = self.buckets.lock().unwrap();
        let content = buckets
            .get(source_bucket)
            .and_then(|objects| objects.get(source_key))
            .cloned()
            .ok_or_else(|| model::mirror::MirrorError::Storage {
                message: format!("no such key: {}/{}", source_bucket, source_key),
            })?;

        buckets
            .entry(destination_bucket.to_string())
            .or_default()
            .insert(destination_key.to_string(), content);

        Ok(())
    }
}

#[derive(Default)]
pub struct MockLogger {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl adapters::Logger for MockLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
