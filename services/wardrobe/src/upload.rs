//! Simulated image upload

use std::time::Duration;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of an upload; the URL is the local path that was given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// Upload stub that succeeds after a fixed delay
#[derive(Debug, Clone)]
pub struct UploadService {
    delay: Duration,
}

impl Default for UploadService {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl UploadService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn upload_image(&self, file_path: &str) -> UploadResponse {
        tokio::time::sleep(self.delay).await;
        debug!("Uploaded {}", file_path);
        UploadResponse {
            success: true,
            url: file_path.to_string(),
        }
    }

    /// Upload every path concurrently, answering in input order
    pub async fn upload_images<S: AsRef<str>>(&self, file_paths: &[S]) -> Vec<UploadResponse> {
        join_all(
            file_paths
                .iter()
                .map(|path| self.upload_image(path.as_ref())),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_upload_image_echoes_path() {
        let uploads = UploadService::new(Duration::ZERO);

        let response = uploads.upload_image("/tmp/shirt.jpg").await;

        assert!(response.success);
        assert_eq!(response.url, "/tmp/shirt.jpg");
    }

    #[tokio::test]
    async fn test_upload_images_preserves_order() {
        let uploads = UploadService::new(Duration::ZERO);
        let paths = ["a.jpg", "b.jpg", "c.jpg"];

        let responses = uploads.upload_images(&paths).await;

        let urls: Vec<&str> = responses.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, paths);
        assert!(responses.iter().all(|r| r.success));
    }

    #[tokio::test]
    async fn test_upload_images_run_concurrently() {
        let uploads = UploadService::new(Duration::from_millis(100));
        let paths: Vec<String> = (0..5).map(|i| format!("{}.jpg", i)).collect();

        let started = Instant::now();
        let responses = uploads.upload_images(&paths).await;

        assert_eq!(responses.len(), 5);
        assert!(started.elapsed() < Duration::from_millis(450));
    }

    #[tokio::test]
    async fn test_upload_images_empty() {
        let uploads = UploadService::new(Duration::ZERO);
        assert!(uploads.upload_images::<String>(&[]).await.is_empty());
    }
}
