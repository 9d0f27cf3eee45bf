//! Name rendering for a single album photo

use tracing::warn;

use crate::app::models::Record;
use crate::constants::{decimal_width, fields};

/// Render `group_index + 1`, zero-padded to the digit count of `group_size`
///
/// A group of 20 renders its first photo as `01`; a group of 9 as `1`.
pub fn padded_index(group_index: usize, group_size: usize) -> String {
    let width = decimal_width(group_size);
    format!("{:0width$}", group_index + 1, width = width)
}

/// Renders `<city><padded_index>.<extension>` for positioned records
#[derive(Debug, Clone)]
pub struct PhotoDisplay {
    city_field: String,
    image_field: String,
}

impl Default for PhotoDisplay {
    fn default() -> Self {
        Self::new(fields::CITY, fields::IMAGE_FILE)
    }
}

impl PhotoDisplay {
    pub fn new(city_field: impl Into<String>, image_field: impl Into<String>) -> Self {
        Self {
            city_field: city_field.into(),
            image_field: image_field.into(),
        }
    }

    pub fn present(&self, photo: &Record) -> String {
        let city = photo.text(&self.city_field).unwrap_or_default();
        let extension = photo
            .file_name(&self.image_field)
            .map(|file_name| file_name.extension.as_str())
            .unwrap_or_default();

        let (group_index, group_size) = match (photo.group_index(), photo.group_size()) {
            (Some(index), Some(size)) => (index, size),
            _ => {
                warn!(
                    "Line {} was rendered without an album position",
                    photo.input_index()
                );
                (0, 1)
            }
        };

        format!(
            "{}{}.{}",
            city,
            padded_index(group_index, group_size),
            extension
        )
    }
}
