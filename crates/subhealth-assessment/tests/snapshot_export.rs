use chrono::NaiveDate;
use std::sync::Arc;
use subhealth_assessment::assessment::{
    AssessmentSession, CategoryDefinition, QuestionCatalog, QuestionnaireDefinition,
};

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid export date")
}

#[test]
fn quoted_question_exports_with_doubled_quotes() {
    let catalog = QuestionCatalog::from_definition(QuestionnaireDefinition {
        categories: vec![CategoryDefinition {
            key: "A".to_string(),
            title: "A".to_string(),
            items: vec!["He said \"hi\"".to_string()],
        }],
    })
    .expect("valid catalog");
    let mut session = AssessmentSession::new(Arc::new(catalog));
    session.set_score("A", 0, 3u8).expect("valid score");

    let export = session.export_snapshot(export_date()).expect("export succeeds");

    assert!(export.contents.starts_with('\u{feff}'));
    let rows: Vec<&str> = export.contents.split('\n').collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], "\"A\",\"He said \"\"hi\"\"\",\"3\"");
    assert_eq!(rows[2], "\"总分\",\"—\",\"3\"");
    assert_eq!(export.file_name, "亚健康自测_2025-09-24.csv");
}

#[test]
fn standard_export_lists_every_question_in_catalog_order() {
    let mut session = AssessmentSession::standard();
    session.set_score("body", 0, 4u8).expect("valid score");
    session.set_score("life", 9, 2u8).expect("valid score");

    let export = session.export_snapshot(export_date()).expect("export succeeds");
    let body = export.contents.trim_start_matches('\u{feff}');
    let rows: Vec<&str> = body.split('\n').collect();

    assert_eq!(rows[0], "\"维度\",\"题目\",\"分数\"");
    assert_eq!(rows.len(), 32);
    assert_eq!(rows[11], "\"二、身体状况\",\"经常感到疲倦或乏力\",\"4\"");
    assert_eq!(rows[30], "\"三、生活方式与行为习惯\",\"无规律体检或忽视身体信号\",\"2\"");
    assert_eq!(rows[31], "\"总分\",\"—\",\"6\"");
    assert!(rows[1..31].iter().all(|row| row.matches("\",\"").count() == 2));
}

#[test]
fn export_reflects_reset_state() {
    let mut session = AssessmentSession::standard();
    session.set_score("psych", 3, 5u8).expect("valid score");
    session.reset_all();

    let export = session.export_snapshot(export_date()).expect("export succeeds");
    assert!(export.contents.ends_with("\"总分\",\"—\",\"0\""));
    assert!(!export.contents.contains("\",\"5\""));
}
