use super::catalog::QuestionCatalog;
use super::responses::ResponseStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub key: String,
    pub title: String,
    pub short_title: String,
    pub sum: u32,
    pub max: u32,
    pub answered: usize,
    pub item_count: usize,
    pub completion_percent: u8,
}

/// Derived scores for the current answers. Never stored; build a fresh one
/// after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentTotals {
    pub categories: Vec<CategoryTotal>,
    pub grand_total: u32,
    pub grand_max: u32,
    pub answered: usize,
    pub entry_count: usize,
    pub completion_percent: u8,
}

impl AssessmentTotals {
    pub fn compute(catalog: &QuestionCatalog, store: &ResponseStore) -> Self {
        let categories: Vec<CategoryTotal> = catalog
            .categories()
            .iter()
            .map(|category| {
                let responses = store.category(&category.key);
                let sum = responses.map(|entry| entry.sum()).unwrap_or(0);
                let answered = responses.map(|entry| entry.answered_count()).unwrap_or(0);

                CategoryTotal {
                    key: category.key.clone(),
                    title: category.title.clone(),
                    short_title: category.short_title().to_string(),
                    sum,
                    max: category.max_score(),
                    answered,
                    item_count: category.item_count(),
                    completion_percent: completion_percent(answered, category.item_count()),
                }
            })
            .collect();

        let grand_total = categories.iter().map(|entry| entry.sum).sum();
        let grand_max = categories.iter().map(|entry| entry.max).sum();
        let answered = store.answered_count();
        let entry_count = store.entry_count();

        Self {
            categories,
            grand_total,
            grand_max,
            answered,
            entry_count,
            completion_percent: completion_percent(answered, entry_count),
        }
    }

    pub fn category(&self, key: &str) -> Option<&CategoryTotal> {
        self.categories.iter().find(|entry| entry.key == key)
    }

    pub fn category_sum(&self, key: &str) -> Option<u32> {
        self.category(key).map(|entry| entry.sum)
    }

    pub fn category_max(&self, key: &str) -> Option<u32> {
        self.category(key).map(|entry| entry.max)
    }

    pub fn is_complete(&self) -> bool {
        self.entry_count > 0 && self.answered == self.entry_count
    }
}

/// `round(100 * answered / total)` with halves rounded up; `0` for an empty set.
///
/// Only a fully answered set reports 100, so large questionnaires with a
/// single gap read 99.
pub fn completion_percent(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let answered = answered.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * answered + total) / (2 * total);
    if answered < total {
        rounded.min(99) as u8
    } else {
        rounded as u8
    }
}
