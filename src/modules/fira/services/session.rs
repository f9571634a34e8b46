//! Lifecycle of one document analysis.
//!
//! ```text
//! Idle ──begin_upload──▶ Uploading ──upload_complete──▶ Analyzing ──analysis_complete──▶ Ready
//!   ▲                        │                              │                            │
//!   │                        └──────────fail────────────────┴──────▶ Failed ◀────────────┘
//!   └──────────────────────────────── reset (from any phase) ─────────────────────────────
//! ```
//!
//! The calculator runs only on the transition into `Ready`.

use uuid::Uuid;

use super::fira_mapper::FiraMapper;
use crate::core::{AppError, Result};
use crate::modules::comparisons::models::ComparisonResult;
use crate::modules::comparisons::services::FeeCalculator;
use crate::modules::fira::models::FiraProcessingResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Uploading,
    Analyzing,
    Ready { comparison: Box<ComparisonResult> },
    Failed { reason: String },
}

impl AnalysisPhase {
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisPhase::Idle => "idle",
            AnalysisPhase::Uploading => "uploading",
            AnalysisPhase::Analyzing => "analyzing",
            AnalysisPhase::Ready { .. } => "ready",
            AnalysisPhase::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug)]
pub struct AnalysisSession {
    id: Uuid,
    phase: AnalysisPhase,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: AnalysisPhase::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    pub fn comparison(&self) -> Option<&ComparisonResult> {
        match &self.phase {
            AnalysisPhase::Ready { comparison } => Some(comparison.as_ref()),
            _ => None,
        }
    }

    /// A new upload may start from a fresh, finished or failed session
    pub fn begin_upload(&mut self) -> Result<()> {
        match self.phase {
            AnalysisPhase::Idle | AnalysisPhase::Ready { .. } | AnalysisPhase::Failed { .. } => {
                self.transition(AnalysisPhase::Uploading);
                Ok(())
            }
            _ => Err(self.rejected("begin_upload")),
        }
    }

    pub fn upload_complete(&mut self) -> Result<()> {
        match self.phase {
            AnalysisPhase::Uploading => {
                self.transition(AnalysisPhase::Analyzing);
                Ok(())
            }
            _ => Err(self.rejected("upload_complete")),
        }
    }

    /// Enter `Ready` by running the calculator over the processor's figures,
    /// or `Failed` when there are no usable figures or the calculation fails.
    pub fn analysis_complete(
        &mut self,
        processed: FiraProcessingResult,
        mapper: &FiraMapper,
        calculator: &FeeCalculator,
    ) -> Result<&ComparisonResult> {
        if self.phase != AnalysisPhase::Analyzing {
            return Err(self.rejected("analysis_complete"));
        }

        let data = match processed.fira_data {
            Some(ref data) if processed.success => data,
            _ => {
                let reason = processed.failure_reason();
                self.transition(AnalysisPhase::Failed {
                    reason: reason.clone(),
                });
                return Err(AppError::Processing(reason));
            }
        };

        let comparison = mapper.map(data).and_then(|input| calculator.compare(input));
        match comparison {
            Ok(comparison) => {
                mapper.reconcile(data, &comparison);
                self.transition(AnalysisPhase::Ready {
                    comparison: Box::new(comparison),
                });
                self.comparison()
                    .ok_or_else(|| AppError::internal("ready session without comparison"))
            }
            Err(err) => {
                self.transition(AnalysisPhase::Failed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Abort an in-flight upload or analysis
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<()> {
        match self.phase {
            AnalysisPhase::Uploading | AnalysisPhase::Analyzing => {
                self.transition(AnalysisPhase::Failed {
                    reason: reason.into(),
                });
                Ok(())
            }
            _ => Err(self.rejected("fail")),
        }
    }

    /// Back to home: drops any result or failure
    pub fn reset(&mut self) {
        self.transition(AnalysisPhase::Idle);
    }

    fn transition(&mut self, next: AnalysisPhase) {
        tracing::debug!(
            analysis_id = %self.id,
            from = self.phase.name(),
            to = next.name(),
            "Analysis phase change"
        );
        self.phase = next;
    }

    fn rejected(&self, event: &str) -> AppError {
        AppError::invalid_state(format!(
            "{} is not allowed while {}",
            event,
            self.phase.name()
        ))
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
