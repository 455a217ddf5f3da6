use crate::error::UploadError;
use crate::model::PairingGroup;
use crate::uploader::Uploader;
use async_trait::async_trait;
use log::{debug, info};

/// Accepts every group without sending anything
#[derive(Debug, Default, Clone)]
pub struct DryRunUploader;

/// The JSON body an HTTP upload would send for `group`
fn payload(group: &PairingGroup) -> Result<String, UploadError> {
    serde_json::to_string(group).map_err(|e| UploadError::Transport(e.to_string()))
}

#[async_trait]
impl Uploader for DryRunUploader {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn upload(&self, group: &PairingGroup) -> Result<(), UploadError> {
        info!(
            "[dry run] would upload {} with {} side dishes",
            group.main_dish.name,
            group.side_dishes.len()
        );
        debug!("[dry run] payload: {}", payload(group)?);
        Ok(())
    }
}
