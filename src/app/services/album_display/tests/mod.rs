//! Tests for the album display module

mod renderer_tests;

use crate::app::models::{FieldValue, FileName, Record};
use crate::constants::fields;
use chrono::NaiveDate;

/// Create a record already positioned in its album group
pub fn create_positioned_record(
    input_index: usize,
    city: &str,
    extension: &str,
    group_index: usize,
    group_size: usize,
) -> Record {
    let date = NaiveDate::from_ymd_opt(2010, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut record = Record::new(input_index)
        .with_field(
            fields::IMAGE_FILE,
            FieldValue::FileName(FileName {
                stem: "photo".to_string(),
                extension: extension.to_string(),
            }),
        )
        .with_field(fields::CITY, FieldValue::Text(city.to_string()))
        .with_field(fields::DATE, FieldValue::DateTime(date));
    record.assign_group_position(group_index, group_size);
    record
}
