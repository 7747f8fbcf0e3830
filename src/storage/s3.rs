use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};

use super::BlobStore;

/// Blob store backed by S3 (or any S3-compatible endpoint)
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Builds a client from ambient AWS configuration plus the app config
    ///
    /// Credentials and region come from the standard environment/profile
    /// chain; `s3_endpoint_url` overrides the endpoint for S3-compatible
    /// stores like MinIO.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &config.s3_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
            bucket: config.s3_bucket_name.clone(),
        }
    }
}

#[async_trait::async_trait]
impl BlobStore for S3BlobStore {
    async fn fetch(&self, key: &str) -> AppResult<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("get_object {}: {}", key, e)))?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|e| AppError::Storage(format!("read body {}: {}", key, e)))?;

        Ok(body.into_bytes().to_vec())
    }
}
