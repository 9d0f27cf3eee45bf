//! Tests for typed value construction

use super::*;
use crate::app::models::{FieldValue, FileName, ValidationError};
use crate::app::services::field_schema::builder_for;
use chrono::NaiveDate;

#[test]
fn test_date_time_builder() {
    let field = FieldSpec::new("date", FieldType::DateTime);
    let value = builder_for(FieldType::DateTime)
        .build("2010-05-05 10:00:00", &field)
        .unwrap();

    let expected = NaiveDate::from_ymd_opt(2010, 5, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    assert_eq!(value, FieldValue::DateTime(expected));
}

#[test]
fn test_date_time_builder_failure_is_a_format_error() {
    let field = FieldSpec::new("date", FieldType::DateTime);
    let result = builder_for(FieldType::DateTime).build("not a date", &field);

    assert_eq!(
        result,
        Err(ValidationError::DateTimeFormat {
            field: "date".to_string()
        })
    );
}

#[test]
fn test_file_name_builder_splits_on_first_separator() {
    let field = FieldSpec::new("image_file", FieldType::FileName);
    let builder = builder_for(FieldType::FileName);

    assert_eq!(
        builder.build("photo.jpg", &field).unwrap(),
        FieldValue::FileName(FileName {
            stem: "photo".to_string(),
            extension: "jpg".to_string(),
        })
    );
    assert_eq!(
        builder.build("archive.tar.gz", &field).unwrap(),
        FieldValue::FileName(FileName {
            stem: "archive".to_string(),
            extension: "tar.gz".to_string(),
        })
    );
    assert!(builder.build("photo", &field).is_err());
}

#[test]
fn test_default_builder_is_identity() {
    let field = plain_text_field("city");
    assert_eq!(
        builder_for(FieldType::Default).build("Rio", &field).unwrap(),
        FieldValue::Text("Rio".to_string())
    );
}
