//! Loading competition documents from JSON

use crate::events::Section;
use crate::types::Competition;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Parse a competition document, filling in `default_section` when absent
pub fn parse_competition(json: &str, default_section: Section) -> Result<Competition> {
    let mut value: serde_json::Value =
        serde_json::from_str(json).context("Competition document is not valid JSON")?;

    if let Some(object) = value.as_object_mut() {
        object
            .entry("section")
            .or_insert_with(|| serde_json::json!(default_section));
    }

    serde_json::from_value(value).context("Competition document has an invalid shape")
}

/// Read and parse a competition document from disk
pub fn load_competition(path: &Path, default_section: Section) -> Result<Competition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read competition at {}", path.display()))?;
    let competition = parse_competition(&content, default_section)
        .with_context(|| format!("Failed to load competition at {}", path.display()))?;

    info!(
        "Loaded competition '{}' ({} competitors, {})",
        competition.name,
        competition.competitors.len(),
        competition.section.display_name()
    );
    Ok(competition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    const DOCUMENT: &str = r#"{
        "id": "comp-7",
        "name": "County Cup",
        "date": "2024-05-18",
        "competitors": [
            {"id": "a", "name": "Ana", "team": "North", "level": "Level 6",
             "scores": {"vault": 9.1}}
        ]
    }"#;

    #[test]
    fn test_default_section_applied() {
        let competition = parse_competition(DOCUMENT, Section::Men).unwrap();
        assert_eq!(competition.section, Section::Men);
        assert_eq!(competition.competitors[0].level, Level::Numbered(6));
    }

    #[test]
    fn test_explicit_section_wins() {
        let json = DOCUMENT.replace("\"competitors\"", "\"section\": \"women\", \"competitors\"");
        let competition = parse_competition(&json, Section::Men).unwrap();
        assert_eq!(competition.section, Section::Women);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(parse_competition("not json", Section::Women).is_err());
        assert!(parse_competition(r#"{"id": "x"}"#, Section::Women).is_err());
    }
}
