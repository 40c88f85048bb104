use crate::model::mirror::MirrorError;

const S3_SCHEME: &str = "s3://";

/// Accepts `bucket` or `s3://bucket` and returns the bare bucket name.
pub fn parse_bucket_from_uri(bucket_uri: &str) -> Result<&str, MirrorError> {
    let bucket = match bucket_uri.split_once("://") {
        None => bucket_uri,
        Some(_) if bucket_uri.starts_with(S3_SCHEME) => &bucket_uri[S3_SCHEME.len()..],
        Some((scheme, _)) => {
            return Err(MirrorError::Configuration(format!(
                "unsupported storage provider `{}` in: {}",
                scheme, bucket_uri
            )))
        }
    };

    let bucket = bucket.trim_end_matches('/');
    if bucket.is_empty() || bucket.contains('/') {
        return Err(MirrorError::Configuration(format!(
            "failed to parse bucket of: {}",
            bucket_uri
        )));
    }

    Ok(bucket)
}

/// Value for the `x-amz-copy-source` header, `bucket/key` with the key url-encoded.
pub fn copy_source(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, urlencoding::encode(key))
}
