use crate::{model::mirror::MirrorError, util};

pub const SOURCE_BUCKET: &str = "SOURCE_BUCKET";
pub const DESTINATION_BUCKET: &str = "DESTINATION_BUCKET";

#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub source_bucket: String,
    pub destination_bucket: String,
}

impl Configuration {
    pub fn from_env() -> Result<Self, MirrorError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, MirrorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| -> Result<String, MirrorError> {
            let value = lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    MirrorError::Configuration(format!("{} must be provided", name))
                })?;

            Ok(util::object::parse_bucket_from_uri(value.trim())?.to_string())
        };

        Ok(Self {
            source_bucket: read(SOURCE_BUCKET)?,
            destination_bucket: read(DESTINATION_BUCKET)?,
        })
    }

    pub fn validate(&self) -> Result<(), MirrorError> {
        if self.source_bucket.is_empty() {
            return Err(MirrorError::Configuration(format!(
                "{} must be provided",
                SOURCE_BUCKET
            )));
        }

        if self.destination_bucket.is_empty() {
            return Err(MirrorError::Configuration(format!(
                "{} must be provided",
                DESTINATION_BUCKET
            )));
        }

        Ok(())
    }
}
