mod fira_data;
mod fira_upload;

pub use fira_data::{FiraData, FiraProcessingResult};
pub use fira_upload::{FiraUpload, UploadParams};
