use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::fira_mapper::FiraMapper;
use super::processor::FiraProcessor;
use super::session::AnalysisSession;
use crate::core::Result;
use crate::modules::comparisons::models::ComparisonResult;
use crate::modules::comparisons::services::FeeCalculator;
use crate::modules::fira::models::FiraUpload;

/// Result of a completed analysis
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub analysis_id: Uuid,
    pub processor: String,
    pub comparison: ComparisonResult,
}

/// Runs one upload through validation, the processor and the calculator
pub struct AnalysisService {
    processor: Arc<dyn FiraProcessor>,
    mapper: FiraMapper,
    calculator: FeeCalculator,
    max_upload_bytes: usize,
}

impl AnalysisService {
    pub fn new(processor: Arc<dyn FiraProcessor>, mapper: FiraMapper, max_upload_bytes: usize) -> Self {
        Self {
            processor,
            mapper,
            calculator: FeeCalculator::new(),
            max_upload_bytes,
        }
    }

    pub fn mapper(&self) -> &FiraMapper {
        &self.mapper
    }

    pub fn processor_name(&self) -> &str {
        self.processor.name()
    }

    pub async fn analyze(&self, upload: FiraUpload) -> Result<AnalysisOutcome> {
        let mut session = AnalysisSession::new();
        let analysis_id = session.id();

        session.begin_upload()?;
        tracing::info!(
            analysis_id = %analysis_id,
            file_name = %upload.file_name,
            size = upload.bytes.len(),
            "Document upload started"
        );

        if let Err(err) = upload.validate(self.max_upload_bytes) {
            session.fail(err.to_string())?;
            tracing::warn!(analysis_id = %analysis_id, error = %err, "Document rejected");
            return Err(err);
        }
        session.upload_complete()?;

        let processed = match self.processor.process(&upload).await {
            Ok(processed) => processed,
            Err(err) => {
                session.fail(err.to_string())?;
                tracing::error!(
                    analysis_id = %analysis_id,
                    processor = self.processor.name(),
                    error = %err,
                    "FIRA processing failed"
                );
                return Err(err);
            }
        };

        let comparison = match session.analysis_complete(processed, &self.mapper, &self.calculator)
        {
            Ok(comparison) => comparison.clone(),
            Err(err) => {
                tracing::warn!(analysis_id = %analysis_id, error = %err, "Analysis failed");
                return Err(err);
            }
        };

        tracing::info!(
            analysis_id = %analysis_id,
            savings = %comparison.savings_amount,
            "Analysis ready"
        );

        Ok(AnalysisOutcome {
            analysis_id,
            processor: self.processor.name().to_string(),
            comparison,
        })
    }
}
