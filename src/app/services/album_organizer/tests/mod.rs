//! Tests for the album organizer module


// Test helper functions and fixtures
use crate::app::models::{FieldValue, FileName, Record};
use crate::constants::fields;
use chrono::{NaiveDate, NaiveDateTime};

/// Create a capture date on 2010-05-`day` at `hour`:00:00
pub fn create_date(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2010, 5, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Create a valid photo record
pub fn create_test_record(
    input_index: usize,
    city: &str,
    date: NaiveDateTime,
    extension: &str,
) -> Record {
    Record::new(input_index)
        .with_field(
            fields::IMAGE_FILE,
            FieldValue::FileName(FileName {
                stem: "photo".to_string(),
                extension: extension.to_string(),
            }),
        )
        .with_field(fields::CITY, FieldValue::Text(city.to_string()))
        .with_field(fields::DATE, FieldValue::DateTime(date))
}

/// Create a jpg record in `city` on 2010-05-`day` at 10:00
pub fn create_record_on_day(input_index: usize, city: &str, day: u32) -> Record {
    create_test_record(input_index, city, create_date(day, 10), "jpg")
}
