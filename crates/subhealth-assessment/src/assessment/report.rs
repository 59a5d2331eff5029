use super::classifier::{HealthTier, TierView, DISCLAIMER};
use super::totals::{AssessmentTotals, CategoryTotal};
use serde::Serialize;

/// Everything a renderer needs to draw the result panel, already computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub grand_total: u32,
    pub grand_max: u32,
    pub completion_percent: u8,
    pub answered: usize,
    pub entry_count: usize,
    pub categories: Vec<CategoryTotal>,
    pub status: TierView,
    pub disclaimer: &'static str,
}

impl AssessmentReport {
    pub fn from_totals(totals: AssessmentTotals) -> Self {
        let status = TierView::from(HealthTier::classify(totals.grand_total));

        Self {
            grand_total: totals.grand_total,
            grand_max: totals.grand_max,
            completion_percent: totals.completion_percent,
            answered: totals.answered,
            entry_count: totals.entry_count,
            categories: totals.categories,
            status,
            disclaimer: DISCLAIMER,
        }
    }

    pub fn tier(&self) -> HealthTier {
        self.status.tier
    }
}
