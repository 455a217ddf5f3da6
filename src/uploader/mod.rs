mod dry_run;
mod http;

pub use dry_run::DryRunUploader;
pub use http::HttpUploader;

use crate::error::UploadError;
use crate::model::PairingGroup;
use async_trait::async_trait;

/// Destination for assembled pairing groups
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Short name used in logs (e.g., "http", "dry-run")
    fn name(&self) -> &str;

    /// Submit one pairing group. An error affects only this group.
    async fn upload(&self, group: &PairingGroup) -> Result<(), UploadError>;
}

#[async_trait]
impl<T: Uploader + ?Sized> Uploader for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn upload(&self, group: &PairingGroup) -> Result<(), UploadError> {
        (**self).upload(group).await
    }
}
