pub mod analysis_service;
pub mod fira_mapper;
pub mod processor;
pub mod session;

pub use analysis_service::{AnalysisOutcome, AnalysisService};
pub use fira_mapper::FiraMapper;
pub use processor::{processor_from_config, FiraProcessor, HttpFiraProcessor, MockFiraProcessor};
pub use session::{AnalysisPhase, AnalysisSession};
