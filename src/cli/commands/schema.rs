//! Schema command implementation
//!
//! Prints the field schema the rename command would use with the same
//! album options.

use anyhow::Context;

use super::shared::{CommandStats, join_lines, write_output};
use crate::Error;
use crate::app::services::field_schema::{FieldSpec, Schema};
use crate::cli::args::{OutputFormat, SchemaArgs};

/// Run the schema command
pub fn run_schema(args: SchemaArgs) -> anyhow::Result<CommandStats> {
    let config = args
        .album
        .to_config()
        .context("Invalid album options")?;
    let schema = Schema::photo_album(&config);

    let rendered = match args.format {
        OutputFormat::Text => render_schema_text(&schema),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&schema)
                .map_err(|e| Error::serialization("Failed to serialize schema", e))?;
            json.push('\n');
            json
        }
    };
    write_output(None, &rendered)?;

    Ok(CommandStats::default())
}

/// Describe every field on its own block of lines
pub fn render_schema_text(schema: &Schema) -> String {
    let lines: Vec<String> = schema
        .iter()
        .enumerate()
        .flat_map(|(position, spec)| describe_field(position, spec))
        .collect();
    join_lines(&lines)
}

fn describe_field(position: usize, spec: &FieldSpec) -> Vec<String> {
    let mut lines = vec![
        format!("{}. {} ({})", position + 1, spec.name, spec.field_type),
        format!("   validations: {}", join_keys(&spec.validations)),
        format!("   formats: {}", join_keys(&spec.formats)),
    ];

    let params = &spec.params;
    if let Some(range) = params.year_range {
        lines.push(format!("   years: {}-{}", range.from, range.to));
    }
    if !params.allowed_extensions.is_empty() {
        lines.push(format!(
            "   extensions: {}",
            params.allowed_extensions.join(", ")
        ));
    }
    if let Some(length) = params.length {
        lines.push(format!("   length: {}", length));
    }
    lines
}

fn join_keys<K: ToString>(keys: &[K]) -> String {
    if keys.is_empty() {
        return "none".to_string();
    }
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlbumConfig;

    #[test]
    fn test_render_schema_text() {
        let text = render_schema_text(&Schema::photo_album(&AlbumConfig::default()));

        assert!(text.contains("1. image_file (file-name)"));
        assert!(text.contains(
            "validations: two-part-filename, valid-extension, only-letters-in-stem"
        ));
        assert!(text.contains("2. city (default)"));
        assert!(text.contains("formats: none"));
        assert!(text.contains("3. date (date-time)"));
        assert!(text.contains("years: 2000-2020"));
        assert!(text.contains("extensions: jpg, png, jpeg"));
        assert!(text.ends_with("years: 2000-2020\n"));
        assert_eq!(text.lines().count(), 11);
    }
}
