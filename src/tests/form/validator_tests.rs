use crate::{
    domain::{FieldSpec, FieldValue, PicklistOption},
    form::{FieldValidator, ValidationResult},
    options::{Locale, ValidatorOptions},
};

fn english() -> FieldValidator {
    FieldValidator::new(ValidatorOptions::default().with_locale(Locale::En))
}

fn check(spec: &FieldSpec, value: impl Into<FieldValue>) -> ValidationResult {
    english().validate(spec, &value.into())
}

fn options() -> Vec<PicklistOption> {
    (1..=4)
        .map(|n| PicklistOption::new(format!("Option {n}"), format!("option{n}")))
        .collect()
}

#[test]
fn text_within_max_length_is_valid() {
    let spec = FieldSpec::text("name").with_max_length(5);
    assert_eq!(check(&spec, "hello"), ValidationResult::valid());
    assert!(check(&spec, "").is_valid);
}

#[test]
fn text_over_max_length_names_the_limit() {
    let spec = FieldSpec::text("name").with_max_length(5);
    let result = check(&spec, "hello world");
    assert!(!result.is_valid);
    assert!(result.error_message.contains('5'));
}

#[test]
fn text_without_limit_accepts_anything() {
    let spec = FieldSpec::text("name");
    assert!(check(&spec, "x".repeat(10_000)).is_valid);
    let zero = FieldSpec::text("name").with_max_length(0);
    assert!(check(&zero, "anything").is_valid);
}

#[test]
fn text_length_counts_characters() {
    let spec = FieldSpec::text("name").with_max_length(5);
    assert!(check(&spec, "こんにちは").is_valid);
    assert!(!check(&spec, "こんにちは!").is_valid);
}

#[test]
fn number_empty_is_valid() {
    let spec = FieldSpec::number("amount").with_precision(1).with_scale(0);
    assert!(check(&spec, "").is_valid);
    assert!(english().validate(&spec, &FieldValue::Empty).is_valid);
}

#[test]
fn number_rejects_non_numeric_text() {
    let spec = FieldSpec::number("amount");
    let result = check(&spec, "abc");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, "Please enter a number");
}

#[test]
fn number_precision_boundary() {
    let at_limit = FieldSpec::number("amount").with_precision(3);
    assert!(check(&at_limit, "123.45").is_valid);

    let below = FieldSpec::number("amount").with_precision(2);
    let result = check(&below, "123.45");
    assert!(!result.is_valid);
    assert!(result.error_message.contains('2'));
}

#[test]
fn number_scale_counts_fraction_digits() {
    let spec = FieldSpec::number("amount").with_scale(1);
    assert!(!check(&spec, "1.23").is_valid);
    assert!(check(&spec, "1.2").is_valid);
    assert!(check(&spec, "1.20").is_valid, "trailing zeros are dropped");
}

#[test]
fn number_zero_scale_is_enforced() {
    let spec = FieldSpec::number("amount").with_scale(0);
    assert!(check(&spec, "42").is_valid);
    assert!(!check(&spec, "42.5").is_valid);
}

#[test]
fn number_scale_message_wins_when_both_limits_fail() {
    let spec = FieldSpec::number("amount").with_precision(1).with_scale(1);
    let result = check(&spec, "123.456");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, Locale::En.scale_exceeded(1));
}

#[test]
fn number_scenario_precision_three_scale_two() {
    let spec = FieldSpec::number("amount").with_precision(3).with_scale(2);
    let result = check(&spec, "12.345");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, Locale::En.scale_exceeded(2));
}

#[test]
fn number_sign_does_not_count_as_digit() {
    let spec = FieldSpec::number("amount").with_precision(2);
    assert!(check(&spec, "-99").is_valid);
    assert!(!check(&spec, "-100").is_valid);
}

#[test]
fn number_uses_numeric_prefix_of_input() {
    let spec = FieldSpec::number("amount").with_scale(1);
    assert!(check(&spec, "12.5kg").is_valid);
    assert!(!check(&spec, "   ").is_valid, "blank input is not empty");
}

#[test]
fn number_accepts_parsed_values() {
    let spec = FieldSpec::number("amount").with_precision(2);
    assert!(check(&spec, 12.5).is_valid);
    assert!(!check(&spec, 123.0).is_valid);
    assert_eq!(check(&spec, f64::NAN).error_message, "Please enter a number");
}

#[test]
fn infinite_numbers_pass_without_limits() {
    let spec = FieldSpec::number("amount");
    for input in ["Infinity", "-Infinity", "1e400"] {
        assert_eq!(check(&spec, input), ValidationResult::valid(), "{input}");
    }
    assert!(check(&spec, f64::INFINITY).is_valid);
    assert!(check(&FieldSpec::number("amount").with_scale(0), "Infinity").is_valid);
}

#[test]
fn infinite_numbers_count_eight_integer_digits() {
    let narrow = FieldSpec::number("amount").with_precision(7);
    assert_eq!(
        check(&narrow, "-Infinity").error_message,
        Locale::En.precision_exceeded(7)
    );
    assert!(check(&FieldSpec::number("amount").with_precision(8), "1e400").is_valid);
}

#[test]
fn uninterpretable_values_get_the_generic_message() {
    let number = FieldSpec::number("amount");
    let result = check(&number, true);
    assert!(!result.is_valid);
    assert_eq!(result.error_message, "A validation error occurred");

    assert_eq!(
        check(&FieldSpec::date("when"), 20240115.0).error_message,
        "A validation error occurred"
    );
}

#[test]
fn date_scenarios() {
    let spec = FieldSpec::date("when");
    let result = check(&spec, "not-a-date");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, "Please enter a valid date");
    assert!(check(&spec, "2024-01-15").is_valid);
    assert!(check(&spec, "").is_valid);
}

#[test]
fn date_time_has_its_own_message() {
    let spec = FieldSpec::date_time("at");
    assert!(check(&spec, "2024-01-15T10:30").is_valid);
    assert_eq!(
        check(&spec, "tomorrow").error_message,
        "Please enter a valid date and time"
    );
}

#[test]
fn picklist_requires_a_selection() {
    let spec = FieldSpec::picklist("choice", options());
    let result = check(&spec, "");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, "Please select an option");
    assert!(!english().validate(&spec, &FieldValue::Empty).is_valid);
    assert!(check(&spec, "option1").is_valid);
    assert!(check(&spec, "option2").is_valid);
}

#[test]
fn boolean_is_always_valid() {
    let spec = FieldSpec::boolean("agree");
    assert!(check(&spec, true).is_valid);
    assert!(check(&spec, false).is_valid);
    assert!(english().validate(&spec, &FieldValue::Empty).is_valid);
}

#[test]
fn unknown_types_are_permissive() {
    let spec = FieldSpec::new("Colour".into(), "tint");
    assert!(check(&spec, "anything").is_valid);
    assert!(check(&spec, true).is_valid);
}

#[test]
fn japanese_messages_by_default() {
    let validator = FieldValidator::default();
    let message =
        |spec: &FieldSpec, value: FieldValue| validator.validate(spec, &value).error_message;

    let text = FieldSpec::text("name").with_max_length(5);
    assert_eq!(message(&text, "hello world".into()), "最大文字数は 5 文字です");

    let number = FieldSpec::number("amount").with_precision(2).with_scale(1);
    assert_eq!(message(&number, "abc".into()), "数値を入力してください");
    assert_eq!(
        message(&number, "123.4".into()),
        "整数部は 2 桁以内で入力してください"
    );
    assert_eq!(
        message(&number, "12.34".into()),
        "小数部は 1 桁以内で入力してください"
    );
    assert_eq!(
        message(&number, true.into()),
        "バリデーションエラーが発生しました"
    );

    assert_eq!(
        message(&FieldSpec::date("when"), "not-a-date".into()),
        "有効な日付を入力してください"
    );
    assert_eq!(
        message(&FieldSpec::date_time("at"), "not-a-date".into()),
        "有効な日時を入力してください"
    );

    let picklist = FieldSpec::picklist("choice", options());
    assert_eq!(message(&picklist, "".into()), "選択肢を選んでください");
}

#[test]
fn precision_alone_reports_the_precision_message() {
    let spec = FieldSpec::number("amount").with_precision(2).with_scale(2);
    let result = check(&spec, "123.4");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, Locale::En.precision_exceeded(2));
}
