//! Tests for format rules

use super::*;
use crate::app::models::{FieldValue, FileName};
use crate::app::services::field_schema::FormatKey;

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

#[test]
fn test_capitalize_only_touches_first_letter() {
    let rule = FormatKey::Capitalize.rule();
    let params = FieldParams::default();

    assert_eq!(rule.apply(text("rio"), &params), text("Rio"));
    assert_eq!(rule.apply(text("saoPAULO"), &params), text("SaoPAULO"));
    assert_eq!(rule.apply(text("Rio"), &params), text("Rio"));
    assert_eq!(rule.apply(text(""), &params), text(""));
}

#[test]
fn test_bounded_slice_keeps_window() {
    let rule = FormatKey::BoundedSlice.rule();

    assert_eq!(
        rule.apply(text("BuenosAires"), &length_params(1, 6)),
        text("Buenos")
    );
    assert_eq!(
        rule.apply(text("BuenosAires"), &length_params(3, 6)),
        text("enosAi")
    );
    assert_eq!(
        rule.apply(text("Cordoba"), &length_params(2, 4)),
        text("ordo")
    );
    assert_eq!(
        rule.apply(text("Cordoba"), &length_params(6, 4)),
        text("ba")
    );
    assert_eq!(rule.apply(text("Rio"), &length_params(1, 20)), text("Rio"));
}

#[test]
fn test_bounded_slice_without_bounds_passes_through() {
    let rule = FormatKey::BoundedSlice.rule();
    assert_eq!(
        rule.apply(text("Montevideu"), &FieldParams::default()),
        text("Montevideu")
    );
}

#[test]
fn test_format_rules_ignore_non_text_values() {
    let value = FieldValue::FileName(FileName {
        stem: "photo".to_string(),
        extension: "jpg".to_string(),
    });

    assert_eq!(
        FormatKey::Capitalize
            .rule()
            .apply(value.clone(), &FieldParams::default()),
        value
    );
}

#[test]
fn test_format_key_names_round_trip() {
    for key in [FormatKey::Capitalize, FormatKey::BoundedSlice] {
        assert_eq!(key.to_string().parse::<FormatKey>().unwrap(), key);
    }
    assert!("uppercase".parse::<FormatKey>().is_err());
}
