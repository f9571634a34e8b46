use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Document types the upload accepts: (extension, content type)
const ACCEPTED_DOCUMENTS: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
];

/// Query parameters accompanying an uploaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParams {
    pub file_name: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub importer_id: Option<i64>,
}

fn default_payment_method() -> String {
    "wire".to_string()
}

/// A FIRA document as received from the client
#[derive(Debug, Clone)]
pub struct FiraUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub payment_method: String,
    pub importer_id: Option<i64>,
    pub bytes: Vec<u8>,
}

impl FiraUpload {
    pub fn new(params: UploadParams, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: params.file_name,
            content_type,
            payment_method: params.payment_method,
            importer_id: params.importer_id,
            bytes,
        }
    }

    /// Reject empty or oversized bodies and anything that is not a PDF or
    /// Excel workbook
    pub fn validate(&self, max_bytes: usize) -> Result<()> {
        if self.bytes.is_empty() {
            return Err(AppError::UnsupportedDocument(format!(
                "{} is empty",
                self.file_name
            )));
        }

        if self.bytes.len() > max_bytes {
            return Err(AppError::UnsupportedDocument(format!(
                "{} is {} bytes, limit is {}",
                self.file_name,
                self.bytes.len(),
                max_bytes
            )));
        }

        if self.accepted_content_type().is_none() {
            return Err(AppError::UnsupportedDocument(format!(
                "{} must be a PDF, XLS or XLSX document",
                self.file_name
            )));
        }

        Ok(())
    }

    /// Content type of the document, resolved from the file extension when
    /// the client sent a generic or missing one
    pub fn accepted_content_type(&self) -> Option<&'static str> {
        if let Some(declared) = self.content_type.as_deref() {
            let declared = declared.split(';').next().unwrap_or("").trim();
            if let Some((_, ct)) = ACCEPTED_DOCUMENTS.iter().find(|(_, ct)| *ct == declared) {
                return Some(*ct);
            }
        }

        let extension = self.file_name.rsplit_once('.')?.1.to_lowercase();
        ACCEPTED_DOCUMENTS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, ct)| *ct)
    }
}
