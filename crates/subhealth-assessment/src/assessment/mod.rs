//! Questionnaire scoring: catalog, answers, totals, tiers, and CSV export.

pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod export;
pub mod report;
pub mod responses;
mod session;
pub mod totals;

pub use catalog::{
    CatalogError, Category, CategoryDefinition, QuestionCatalog, QuestionnaireDefinition,
};
pub use classifier::{HealthTier, TierView, DISCLAIMER};
pub use domain::{QuestionRef, ResponseError, Score, MAX_SCORE_PER_ITEM, MIN_SCORE_PER_ITEM};
pub use export::{export_file_name, ExportError, SnapshotExport};
pub use report::AssessmentReport;
pub use responses::{CategoryResponses, ResponseStore};
pub use session::AssessmentSession;
pub use totals::{AssessmentTotals, CategoryTotal};
