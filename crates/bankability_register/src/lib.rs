#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod filter;
pub mod register;
pub mod risk;
pub mod summary;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, ConfigParam, RegisterConfig};
pub use error::RegisterError;
pub use events::RegisterEvent;
pub use export::{ExportOptions, export_csv, export_file_name};
pub use filter::{DateRange, RiskFilter};
pub use register::{RegisterMetrics, RiskRegister};
pub use risk::{
    MitigationPatch, MitigationPlan, MitigationStatus, ProjectStage, Risk, RiskCategory,
    RiskComment, RiskDraft, RiskPatch, assessment_from_form,
};
pub use summary::{RegisterSummary, StatusBoard, status_board, summarize};

