//! Tests for merged rendering in input order

use crate::app::models::{ErrorRecord, ValidationError};
use crate::app::services::album_display::AlbumDisplay;
use crate::app::services::album_organizer::AlbumOrganizer;
use crate::app::services::photo_list_parser::PhotoListParser;

fn render(input: &str) -> Vec<String> {
    let parsed = PhotoListParser::default().parse(input);
    let organized = AlbumOrganizer::default().organize(parsed.valid);
    AlbumDisplay::new(&organized.album, &parsed.errors).present()
}

#[test]
fn test_errors_are_interleaved_in_input_order() {
    let input = [
        "photo.jpg, Rio, 2010-05-05 10:00:00",
        "photo.mp3, Rio, 2010-05-05 10:00:00",
        "photo.png, Rio, 2009-05-05 10:00:00",
    ]
    .join("\n");

    assert_eq!(
        render(&input),
        vec![
            "Rio2.jpg".to_string(),
            "Error: allowed extensions: \"jpg\", \"png\" or \"jpeg\"".to_string(),
            "Rio1.png".to_string(),
        ]
    );
}

#[test]
fn test_only_errors() {
    let album = AlbumOrganizer::default().organize(Vec::new()).album;
    let errors = vec![
        ErrorRecord::new(1, ValidationError::Structural),
        ErrorRecord::new(0, ValidationError::OnlyLetter {
            field: "city".to_string(),
        }),
    ];

    assert_eq!(
        AlbumDisplay::new(&album, &errors).present(),
        vec![
            "Error: city should contain only letters".to_string(),
            "Error: line has no basic well-formed structure".to_string(),
        ]
    );
}

#[test]
fn test_items_are_sorted_by_input_index() {
    let input = [
        "photo.jpg, Rio, 2010-05-05 10:00:00",
        "photo.jpg, Cordoba, 2010-05-05 10:00:00",
        "bad line",
        "photo.jpg, Rio, 2011-05-05 10:00:00",
    ]
    .join("\n");
    let parsed = PhotoListParser::default().parse(&input);
    let organized = AlbumOrganizer::default().organize(parsed.valid);
    let display = AlbumDisplay::new(&organized.album, &parsed.errors);

    let indices: Vec<usize> = display.items().iter().map(|item| item.input_index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_discarded_duplicates_are_absent() {
    let input = [
        "photo.jpg, Rio, 2010-05-05 10:00:00",
        "photo.png, Rio, 2010-05-05 10:00:00",
        "photo.jpg, Rio, 2010-06-05 10:00:00",
    ]
    .join("\n");

    assert_eq!(
        render(&input),
        vec!["Rio1.jpg".to_string(), "Rio2.jpg".to_string()]
    );
}
