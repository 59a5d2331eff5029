use super::catalog::QuestionCatalog;
use super::responses::ResponseStore;
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Spreadsheet tools use the byte-order mark to detect UTF-8.
pub const BYTE_ORDER_MARK: char = '\u{feff}';
pub const EXPORT_FILE_PREFIX: &str = "亚健康自测_";
pub const EXPORT_FILE_EXTENSION: &str = "csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8;";

const HEADER: [&str; 3] = ["维度", "题目", "分数"];
const TOTAL_LABEL: &str = "总分";
const TOTAL_PLACEHOLDER: &str = "—";

/// A finished export, ready to be handed to whatever saves files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotExport {
    pub file_name: String,
    pub contents: String,
}

impl SnapshotExport {
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    pub fn mime_type(&self) -> &'static str {
        EXPORT_MIME_TYPE
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode export row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export buffer: {0}")]
    Flush(String),
    #[error("export buffer is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// `亚健康自测_YYYY-MM-DD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!(
        "{EXPORT_FILE_PREFIX}{}.{EXPORT_FILE_EXTENSION}",
        date.format("%Y-%m-%d")
    )
}

pub fn export_snapshot(
    catalog: &QuestionCatalog,
    store: &ResponseStore,
    date: NaiveDate,
) -> Result<SnapshotExport, ExportError> {
    Ok(SnapshotExport {
        file_name: export_file_name(date),
        contents: render_csv(catalog, store)?,
    })
}

/// Renders header, one row per question in catalog order, then the total row.
///
/// Every field is quoted, embedded quotes are doubled, rows are separated by
/// a bare `\n` and the last row has no terminator.
pub fn render_csv(catalog: &QuestionCatalog, store: &ResponseStore) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .double_quote(true)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    let mut total = 0u32;
    for category in catalog.categories() {
        for (index, item) in category.items.iter().enumerate() {
            let score = store.score(&category.key, index).unwrap_or(0);
            total += u32::from(score);
            let score = score.to_string();
            writer.write_record([category.title.as_str(), item.as_str(), score.as_str()])?;
        }
    }

    let total = total.to_string();
    writer.write_record([TOTAL_LABEL, TOTAL_PLACEHOLDER, total.as_str()])?;

    let buffer = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.error().to_string()))?;
    let mut body = String::from_utf8(buffer)?;
    if body.ends_with('\n') {
        body.pop();
    }

    let mut contents = String::with_capacity(body.len() + BYTE_ORDER_MARK.len_utf8());
    contents.push(BYTE_ORDER_MARK);
    contents.push_str(&body);
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::{CategoryDefinition, QuestionnaireDefinition};

    fn single_question_catalog() -> QuestionCatalog {
        QuestionCatalog::from_definition(QuestionnaireDefinition {
            categories: vec![CategoryDefinition {
                key: "A".to_string(),
                title: "A".to_string(),
                items: vec!["He said \"hi\"".to_string()],
            }],
        })
        .expect("valid catalog")
    }

    #[test]
    fn escapes_quotes_and_appends_total_row() {
        let catalog = single_question_catalog();
        let mut store = ResponseStore::initialize(&catalog);
        store.set_score("A", 0, 3u8).expect("valid score");

        let csv = render_csv(&catalog, &store).expect("renders");

        assert!(csv.starts_with('\u{feff}'));
        assert_eq!(
            csv,
            "\u{feff}\"维度\",\"题目\",\"分数\"\n\"A\",\"He said \"\"hi\"\"\",\"3\"\n\"总分\",\"—\",\"3\""
        );
    }

    #[test]
    fn unanswered_questions_export_as_zero() {
        let catalog = QuestionCatalog::standard();
        let store = ResponseStore::initialize(&catalog);

        let csv = render_csv(&catalog, &store).expect("renders");
        let rows: Vec<&str> = csv.trim_start_matches(BYTE_ORDER_MARK).split('\n').collect();

        assert_eq!(rows.len(), catalog.question_count() + 2);
        assert_eq!(rows[1], "\"一、心理与情绪状态\",\"容易焦虑、烦躁或情绪波动大\",\"0\"");
        assert_eq!(rows[rows.len() - 1], "\"总分\",\"—\",\"0\"");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn commas_and_newlines_stay_inside_quotes() {
        let catalog = QuestionCatalog::from_definition(QuestionnaireDefinition {
            categories: vec![CategoryDefinition {
                key: "mix".to_string(),
                title: "Sleep, rest".to_string(),
                items: vec!["line one\nline two".to_string()],
            }],
        })
        .expect("valid catalog");
        let mut store = ResponseStore::initialize(&catalog);
        store.set_score("mix", 0, 5u8).expect("valid score");

        let csv = render_csv(&catalog, &store).expect("renders");
        assert!(csv.contains("\"Sleep, rest\",\"line one\nline two\",\"5\""));
        assert!(csv.ends_with("\"总分\",\"—\",\"5\""));
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date");
        assert_eq!(export_file_name(date), "亚健康自测_2025-03-07.csv");

        let catalog = QuestionCatalog::standard();
        let store = ResponseStore::initialize(&catalog);
        let export = export_snapshot(&catalog, &store, date).expect("exports");
        assert_eq!(export.file_name, "亚健康自测_2025-03-07.csv");
        assert_eq!(export.mime_type(), "text/csv;charset=utf-8;");
        assert!(export.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
    }
}
