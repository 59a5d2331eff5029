use super::catalog::QuestionCatalog;
use super::domain::{QuestionRef, ResponseError, Score};

/// Answers for one category, positionally aligned with the catalog items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResponses {
    pub key: String,
    answers: Vec<Option<Score>>,
}

impl CategoryResponses {
    pub fn answers(&self) -> &[Option<Score>] {
        &self.answers
    }

    /// Stored values with the unanswered sentinel already applied.
    pub fn raw_scores(&self) -> impl Iterator<Item = u8> + '_ {
        self.answers.iter().map(|answer| raw(*answer))
    }

    pub fn sum(&self) -> u32 {
        self.raw_scores().map(u32::from).sum()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }
}

/// The single mutable record of the user's answers.
///
/// Holds exactly one entry per declared (category, question) pair for its
/// whole lifetime. Unanswered entries read as `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStore {
    categories: Vec<CategoryResponses>,
}

impl ResponseStore {
    pub fn initialize(catalog: &QuestionCatalog) -> Self {
        let categories = catalog
            .categories()
            .iter()
            .map(|category| CategoryResponses {
                key: category.key.clone(),
                answers: vec![None; category.item_count()],
            })
            .collect();

        Self { categories }
    }

    /// Validates `score` before touching the store, so a rejected call leaves
    /// every entry as it was.
    pub fn set_score<S>(
        &mut self,
        category_key: &str,
        question_index: usize,
        score: S,
    ) -> Result<(), ResponseError>
    where
        S: TryInto<Score, Error = ResponseError>,
    {
        let score = score.try_into()?;
        self.record(category_key, question_index, score)
    }

    pub fn record(
        &mut self,
        category_key: &str,
        question_index: usize,
        score: Score,
    ) -> Result<(), ResponseError> {
        let slot = self
            .categories
            .iter_mut()
            .find(|category| category.key == category_key)
            .and_then(|category| category.answers.get_mut(question_index))
            .ok_or_else(|| {
                ResponseError::UnknownQuestion(QuestionRef::new(category_key, question_index))
            })?;

        *slot = Some(score);
        Ok(())
    }

    pub fn answer(
        &self,
        category_key: &str,
        question_index: usize,
    ) -> Result<Option<Score>, ResponseError> {
        self.category(category_key)
            .and_then(|category| category.answers.get(question_index).copied())
            .ok_or_else(|| {
                ResponseError::UnknownQuestion(QuestionRef::new(category_key, question_index))
            })
    }

    /// Current value in `0..=5`, where `0` means not yet answered.
    pub fn score(&self, category_key: &str, question_index: usize) -> Result<u8, ResponseError> {
        self.answer(category_key, question_index).map(raw)
    }

    pub fn reset_all(&mut self) {
        for category in &mut self.categories {
            category.answers.iter_mut().for_each(|answer| *answer = None);
        }
    }

    pub fn categories(&self) -> &[CategoryResponses] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&CategoryResponses> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn entry_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.answers.len())
            .sum()
    }

    pub fn answered_count(&self) -> usize {
        self.categories
            .iter()
            .map(CategoryResponses::answered_count)
            .sum()
    }

    pub fn total(&self) -> u32 {
        self.categories.iter().map(CategoryResponses::sum).sum()
    }
}

fn raw(answer: Option<Score>) -> u8 {
    answer.map(Score::value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ResponseStore {
        ResponseStore::initialize(&QuestionCatalog::standard())
    }

    #[test]
    fn initialize_creates_one_unanswered_entry_per_question() {
        let catalog = QuestionCatalog::standard();
        let store = ResponseStore::initialize(&catalog);

        assert_eq!(store.entry_count(), catalog.question_count());
        assert_eq!(store.answered_count(), 0);
        for category in catalog.categories() {
            for index in 0..category.item_count() {
                assert_eq!(store.score(&category.key, index), Ok(0));
            }
        }
    }

    #[test]
    fn set_score_round_trips_every_valid_value() {
        let mut store = store();
        for value in 1u8..=5 {
            store.set_score("life", 4, value).expect("valid score");
            assert_eq!(store.score("life", 4), Ok(value));
        }
    }

    #[test]
    fn invalid_score_leaves_previous_value() {
        let mut store = store();
        store.set_score("psych", 0, 2u8).expect("valid score");

        for bad in [0i64, 6, -3] {
            assert!(matches!(
                store.set_score("psych", 0, bad),
                Err(ResponseError::InvalidScore(_))
            ));
        }
        assert!(matches!(
            store.set_score("psych", 0, 3.5f64),
            Err(ResponseError::InvalidScore(_))
        ));
        assert_eq!(store.score("psych", 0), Ok(2));
    }

    #[test]
    fn invalid_score_is_reported_before_unknown_question() {
        let mut store = store();
        assert!(matches!(
            store.set_score("nope", 99, 9u8),
            Err(ResponseError::InvalidScore(_))
        ));
    }

    #[test]
    fn unknown_question_is_rejected_without_side_effects() {
        let mut store = store();
        let before = store.clone();

        let err = store.set_score("body", 10, 3u8).expect_err("index out of range");
        assert_eq!(err, ResponseError::UnknownQuestion(QuestionRef::new("body", 10)));
        assert!(matches!(
            store.set_score("sleep", 0, 3u8),
            Err(ResponseError::UnknownQuestion(_))
        ));
        assert!(store.score("sleep", 0).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn repeated_set_score_is_idempotent() {
        let mut once = store();
        once.set_score("body", 3, 4u8).expect("valid score");
        let mut twice = once.clone();
        twice.set_score("body", 3, 4u8).expect("valid score");
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_all_clears_values_but_keeps_entries() {
        let mut store = store();
        store.set_score("psych", 1, 5u8).expect("valid score");
        store.set_score("life", 9, "4").expect("valid score");
        assert_eq!(store.total(), 9);

        let entries = store.entry_count();
        store.reset_all();

        assert_eq!(store.entry_count(), entries);
        assert_eq!(store.answered_count(), 0);
        assert_eq!(store.total(), 0);
        assert_eq!(store.answer("psych", 1), Ok(None));
    }
}
