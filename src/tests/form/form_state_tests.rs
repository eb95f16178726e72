use serde_json::json;

use crate::{
    domain::{FieldSpec, FieldValue, FormDefinition, PicklistOption},
    form::{FieldSpecError, FormState},
    options::{Locale, ValidatorOptions},
};

fn demo_definition() -> FormDefinition {
    let options = (1..=4)
        .map(|n| PicklistOption::new(format!("オプション{n}"), format!("option{n}")))
        .collect();
    FormDefinition::new(vec![
        FieldSpec::text("テキスト入力").with_max_length(5),
        FieldSpec::number("数値入力").with_precision(3).with_scale(2),
        FieldSpec::date("日付入力"),
        FieldSpec::date_time("日時入力"),
        FieldSpec::picklist("選択リスト", options),
        FieldSpec::boolean("チェックボックス").with_default(true),
    ])
    .with_title("Dynamic input demo")
}

#[test]
fn builds_fields_in_definition_order() {
    let form = FormState::from_definition(&demo_definition()).unwrap();
    assert_eq!(form.len(), 6);
    assert_eq!(form.title(), Some("Dynamic input demo"));
    let labels = form.labels().collect::<Vec<_>>();
    assert_eq!(labels[0], "テキスト入力");
    assert_eq!(labels[5], "チェックボックス");
}

#[test]
fn changes_update_status_lines() {
    let mut form = FormState::from_definition(&demo_definition()).unwrap();
    assert_eq!(form.status("テキスト入力"), None);

    form.set_value("テキスト入力", "hello").unwrap();
    assert_eq!(form.status("テキスト入力").as_deref(), Some("✓ 有効"));

    form.set_value("テキスト入力", "hello world").unwrap();
    assert_eq!(
        form.status("テキスト入力").as_deref(),
        Some("✗ 最大文字数は 5 文字です")
    );

    form.set_value("チェックボックス", false).unwrap();
    assert_eq!(form.status("チェックボックス").as_deref(), Some("✓ 有効"));
}

#[test]
fn invalid_changes_append_to_error_log() {
    let mut form = FormState::from_definition(&demo_definition()).unwrap();
    form.set_value("数値入力", "12.345").unwrap();
    form.set_value("日付入力", "not-a-date").unwrap();
    form.set_value("日付入力", "2024-01-15").unwrap();

    let errors = form.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].label, "数値入力");
    assert_eq!(errors[0].message, "小数部は 2 桁以内で入力してください");
    assert_eq!(errors[1].label, "日付入力");
    let line = errors[1].to_string();
    assert!(line.starts_with('['));
    assert!(line.ends_with("有効な日付を入力してください"));

    form.clear_errors();
    assert!(!form.has_errors());
}

#[test]
fn unknown_labels_are_rejected() {
    let mut form = FormState::default();
    let err = form.set_value("missing", "x").unwrap_err();
    assert_eq!(
        err,
        FieldSpecError::UnknownField {
            label: "missing".to_string()
        }
    );
}

#[test]
fn duplicate_and_blank_labels_are_rejected() {
    let mut form = FormState::default();
    form.add_field(FieldSpec::text("name")).unwrap();
    assert_eq!(
        form.add_field(FieldSpec::number("name")).unwrap_err(),
        FieldSpecError::DuplicateLabel {
            label: "name".to_string()
        }
    );
    assert_eq!(
        form.add_field(FieldSpec::text("  ")).unwrap_err(),
        FieldSpecError::MissingLabel { index: 1 }
    );
    assert_eq!(form.len(), 1);
}

#[test]
fn validity_and_values_cover_every_field() {
    let mut form = FormState::from_definition(&demo_definition()).unwrap();
    assert!(!form.is_valid(), "empty picklist starts invalid");
    assert_eq!(form.invalid_labels(), vec!["選択リスト"]);

    form.set_value("選択リスト", "option2").unwrap();
    form.set_value("数値入力", 12.5).unwrap();
    assert!(form.is_valid());

    let values = form.values();
    assert_eq!(values["選択リスト"], json!("option2"));
    assert_eq!(values["数値入力"], json!(12.5));
    assert_eq!(values["チェックボックス"], json!(true));
    assert_eq!(values["日付入力"], json!(null));
}

#[test]
fn reset_clears_statuses_and_log() {
    let mut form = FormState::from_definition(&demo_definition()).unwrap();
    form.set_value("テキスト入力", "hello world").unwrap();
    form.set_value("選択リスト", "option1").unwrap();
    assert!(form.has_errors());

    form.reset();
    assert!(!form.has_errors());
    assert!(form.statuses().is_empty());
    assert_eq!(
        form.field("テキスト入力").unwrap().get_value(),
        &FieldValue::Empty
    );
    assert_eq!(
        form.field("チェックボックス").unwrap().get_value(),
        &FieldValue::Bool(true)
    );
}

#[test]
fn form_locale_drives_messages() {
    let mut form = FormState::new(ValidatorOptions::default().with_locale(Locale::En));
    form.add_field(FieldSpec::text("name").with_max_length(2))
        .unwrap();
    form.set_value("name", "abc").unwrap();
    assert_eq!(
        form.status("name").as_deref(),
        Some("✗ Maximum length is 2 characters")
    );
    form.set_value("name", "ab").unwrap();
    assert_eq!(form.status("name").as_deref(), Some("✓ valid"));
}
