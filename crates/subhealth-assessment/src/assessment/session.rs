use super::catalog::QuestionCatalog;
use super::classifier::HealthTier;
use super::domain::{ResponseError, Score};
use super::export::{export_snapshot, ExportError, SnapshotExport};
use super::report::AssessmentReport;
use super::responses::ResponseStore;
use super::totals::AssessmentTotals;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One user's pass through the questionnaire.
///
/// Owns the only writable copy of the answers; derived values are rebuilt on
/// every read so they can never lag behind a mutation.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    catalog: Arc<QuestionCatalog>,
    responses: ResponseStore,
}

impl AssessmentSession {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        let responses = ResponseStore::initialize(&catalog);
        info!(
            categories = catalog.categories().len(),
            questions = responses.entry_count(),
            "assessment session initialized"
        );

        Self { catalog, responses }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionCatalog::standard()))
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    pub fn set_score<S>(
        &mut self,
        category_key: &str,
        question_index: usize,
        score: S,
    ) -> Result<(), ResponseError>
    where
        S: TryInto<Score, Error = ResponseError>,
    {
        match self.responses.set_score(category_key, question_index, score) {
            Ok(()) => {
                debug!(
                    category = category_key,
                    question = question_index,
                    "score recorded"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    category = category_key,
                    question = question_index,
                    error = %err,
                    "score rejected"
                );
                Err(err)
            }
        }
    }

    pub fn score(&self, category_key: &str, question_index: usize) -> Result<u8, ResponseError> {
        self.responses.score(category_key, question_index)
    }

    pub fn reset_all(&mut self) {
        self.responses.reset_all();
        info!(
            questions = self.responses.entry_count(),
            "assessment answers reset"
        );
    }

    pub fn totals(&self) -> AssessmentTotals {
        AssessmentTotals::compute(&self.catalog, &self.responses)
    }

    pub fn classify(&self) -> HealthTier {
        HealthTier::classify(self.responses.total())
    }

    pub fn report(&self) -> AssessmentReport {
        AssessmentReport::from_totals(self.totals())
    }

    pub fn export_snapshot(&self, date: NaiveDate) -> Result<SnapshotExport, ExportError> {
        let export = export_snapshot(&self.catalog, &self.responses, date)?;
        info!(
            file_name = %export.file_name,
            bytes = export.contents.len(),
            "assessment snapshot exported"
        );
        Ok(export)
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::standard()
    }
}
