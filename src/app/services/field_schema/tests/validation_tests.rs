//! Tests for validation rule predicates and errors

use super::*;
use crate::app::models::ValidationError;
use crate::app::services::field_schema::ValidationKey;

fn accepts(key: ValidationKey, value: &str, params: &FieldParams) -> bool {
    key.rule().accepts(value, params)
}

#[test]
fn test_only_letters() {
    let params = FieldParams::default();

    assert!(accepts(ValidationKey::OnlyLetters, "Rio", &params));
    assert!(accepts(ValidationKey::OnlyLetters, "SaoPaulo", &params));
    assert!(!accepts(ValidationKey::OnlyLetters, "NY 2020", &params));
    assert!(!accepts(ValidationKey::OnlyLetters, "Rio de Janeiro", &params));
    assert!(!accepts(ValidationKey::OnlyLetters, "??", &params));
    assert!(!accepts(ValidationKey::OnlyLetters, "", &params));
    // Characters between 'Z' and 'a' are not letters
    assert!(!accepts(ValidationKey::OnlyLetters, "Rio_", &params));
}

#[test]
fn test_only_letters_in_stem() {
    let params = FieldParams::default();

    assert!(accepts(ValidationKey::OnlyLettersInStem, "photo.jpg", &params));
    assert!(!accepts(ValidationKey::OnlyLettersInStem, "photo1.jpg", &params));
    assert!(!accepts(ValidationKey::OnlyLettersInStem, ".jpg", &params));
    // Without a separator the whole value is the stem
    assert!(accepts(ValidationKey::OnlyLettersInStem, "photo", &params));
}

#[test]
fn test_two_part_file_name() {
    let params = FieldParams::default();

    assert!(accepts(ValidationKey::TwoPartFileName, "photo.jpg", &params));
    assert!(!accepts(ValidationKey::TwoPartFileName, "photo", &params));
    assert!(!accepts(ValidationKey::TwoPartFileName, "my.photo.jpg", &params));
}

#[test]
fn test_valid_extension_is_case_insensitive() {
    let params = extension_params();

    assert!(accepts(ValidationKey::ValidExtension, "photo.jpg", &params));
    assert!(accepts(ValidationKey::ValidExtension, "photo.JPEG", &params));
    assert!(accepts(ValidationKey::ValidExtension, "photo.Png", &params));
    assert!(!accepts(ValidationKey::ValidExtension, "photo.mp3", &params));
    assert!(!accepts(ValidationKey::ValidExtension, "photo.", &params));
    assert!(!accepts(ValidationKey::ValidExtension, "photo", &params));
}

#[test]
fn test_date_time_format() {
    let params = FieldParams::default();

    assert!(accepts(ValidationKey::DateTimeFormat, "2010-05-05 10:00:00", &params));
    assert!(accepts(ValidationKey::DateTimeFormat, "2016-02-29 23:59:59", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-13-05 10:00:00", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-05-32 10:00:00", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-05-05 24:00:00", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-05-05 10:60:00", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-5-5 10:00:00", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-05-05", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "yesterday", &params));
}

#[test]
fn test_date_time_format_rejects_impossible_calendar_dates() {
    let params = FieldParams::default();

    assert!(!accepts(ValidationKey::DateTimeFormat, "2010-02-31 10:00:00", &params));
    assert!(!accepts(ValidationKey::DateTimeFormat, "2015-02-29 10:00:00", &params));
}

#[test]
fn test_year_range_is_inclusive() {
    let params = year_params();

    assert!(!accepts(ValidationKey::YearRange, "1999-12-31 23:59:59", &params));
    assert!(accepts(ValidationKey::YearRange, "2000-01-01 00:00:00", &params));
    assert!(accepts(ValidationKey::YearRange, "2020-12-31 23:59:59", &params));
    assert!(!accepts(ValidationKey::YearRange, "2021-01-01 00:00:00", &params));
}

#[test]
fn test_year_range_without_bounds_accepts_everything() {
    assert!(accepts(
        ValidationKey::YearRange,
        "1970-01-01 00:00:00",
        &FieldParams::default()
    ));
}

#[test]
fn test_rule_check_names_field_in_error() {
    let field = plain_text_field("city").with_validations([ValidationKey::OnlyLetters]);
    let rule = ValidationKey::OnlyLetters.rule();

    assert_eq!(
        rule.check("NY 2020", &field),
        Err(ValidationError::OnlyLetter {
            field: "city".to_string()
        })
    );
    assert!(rule.check("Rio", &field).is_ok());
}

#[test]
fn test_extension_error_lists_allowed_set() {
    let field = plain_text_field("image_file").with_params(extension_params());
    let error = ValidationKey::ValidExtension
        .rule()
        .check("photo.mp3", &field)
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "allowed extensions: \"jpg\", \"png\" or \"jpeg\""
    );
}

#[test]
fn test_year_range_error_reports_bounds() {
    let field = plain_text_field("date").with_params(year_params());
    let error = ValidationKey::YearRange
        .rule()
        .check("1999-01-01 00:00:00", &field)
        .unwrap_err();

    assert_eq!(error.kind_name(), "YearRangeError");
    assert_eq!(error.to_string(), "date year should be between 2000 and 2020");
}

#[test]
fn test_validation_key_names_round_trip() {
    for key in ValidationKey::ALL {
        assert_eq!(key.key().parse::<ValidationKey>().unwrap(), key);
        assert_eq!(key.rule().key(), key);
    }
    assert!("only-digits".parse::<ValidationKey>().is_err());
}
