use crate::dictionary::{Dictionaries, Dictionary, SOURCE_FILE_NAME, TARGET_FILE_NAME};
use crate::error::{DictionaryError, DictionaryResult};
use crate::token::TokenCategory;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a dictionary from JSON text
///
/// The JSON should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "nouns": { "cat": "gato", "dog": "perro" },
///     "verbs": { "runs": "corre" }
/// }
/// ```
///
/// Recognized sections are `pronouns`, `verbs`, `articles`, `nouns`,
/// `adjectives` and `prepositions`. A section may be missing. Entries whose
/// value is not a string are skipped with a warning.
///
/// # Arguments
/// * `content` - The JSON text
/// * `origin` - Name used in error messages (usually the file name)
///
/// # Errors
/// - Invalid JSON
/// - Root or section is not an object
/// - Unknown section name
pub fn parse_dictionary(content: &str, origin: &str) -> DictionaryResult<Dictionary> {
    let json: Value = serde_json::from_str(content).map_err(|e| {
        DictionaryError::ParseError(format!("Failed to parse JSON from '{}': {}", origin, e))
    })?;

    let obj = json.as_object().ok_or_else(|| {
        DictionaryError::FormatError(format!(
            "Invalid JSON in '{}': root must be an object",
            origin
        ))
    })?;

    let mut dictionary = Dictionary::new();
    for (section_name, section) in obj {
        if section_name.starts_with('@') {
            continue;
        }

        let category = TokenCategory::from_section_name(section_name).ok_or_else(|| {
            DictionaryError::FormatError(format!(
                "Unknown section '{}' in '{}'",
                section_name, origin
            ))
        })?;

        let entries = section.as_object().ok_or_else(|| {
            DictionaryError::FormatError(format!(
                "Section '{}' in '{}' must be an object",
                section_name, origin
            ))
        })?;

        for (word, translation) in entries {
            if let Some(translation) = translation.as_str() {
                dictionary.with_entry(category, &word.to_lowercase(), translation);
            } else {
                warn!(
                    "Entry '{}' in section '{}' of '{}' is not a string, skipping",
                    word, section_name, origin
                );
            }
        }
    }

    debug!("Loaded {} dictionary entries from '{}'", dictionary.len(), origin);
    Ok(dictionary)
}

/// Load a dictionary from a single JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Any error from [`parse_dictionary`]
pub fn load_dictionary_from_file(path: &Path) -> DictionaryResult<Dictionary> {
    let content = fs::read_to_string(path).map_err(|e| {
        DictionaryError::ReadError(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_dictionary(&content, &path.display().to_string())
}

/// Load the source and target dictionaries from a data directory
///
/// The directory must contain `english_tokens.json` and `spanish_tokens.json`.
pub fn load_dictionaries_from_dir(dir: &Path) -> DictionaryResult<Dictionaries> {
    if !dir.exists() {
        return Err(DictionaryError::ReadError(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(DictionaryError::ReadError(format!(
            "Path is not a directory: {}",
            dir.display()
        )));
    }

    let source = load_dictionary_from_file(&dir.join(SOURCE_FILE_NAME))?;
    let target = load_dictionary_from_file(&dir.join(TARGET_FILE_NAME))?;

    if source.is_empty() {
        warn!("Source dictionary in {} is empty", dir.display());
    }

    Ok(Dictionaries::new(source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_metadata_and_non_strings() {
        let content = r#"{
            "@metadata": {"authors": ["someone"]},
            "nouns": {"cat": "gato", "dog": 3},
            "verbs": {"Runs": "corre"}
        }"#;
        let dictionary = parse_dictionary(content, "inline").unwrap();
        assert_eq!(dictionary.lookup(TokenCategory::Noun, "cat"), Some("gato"));
        assert!(!dictionary.contains(TokenCategory::Noun, "dog"));
        // Keys are normalized to lowercase like lexer input.
        assert_eq!(dictionary.lookup(TokenCategory::Verb, "runs"), Some("corre"));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            parse_dictionary("not json", "inline"),
            Err(DictionaryError::ParseError(_))
        ));
        assert!(matches!(
            parse_dictionary("[]", "inline"),
            Err(DictionaryError::FormatError(_))
        ));
        assert!(matches!(
            parse_dictionary(r#"{"nouns": ["cat"]}"#, "inline"),
            Err(DictionaryError::FormatError(_))
        ));
        match parse_dictionary(r#"{"conjunctions": {}}"#, "inline") {
            Err(DictionaryError::FormatError(msg)) => assert!(msg.contains("conjunctions")),
            other => panic!("Expected FormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_missing_dir() {
        let result = load_dictionaries_from_dir(Path::new("/nonexistent/smartlang/data"));
        assert!(matches!(result, Err(DictionaryError::ReadError(_))));
    }

    #[test]
    fn test_load_from_repository_data_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let loaded = load_dictionaries_from_dir(&dir).unwrap();
        assert_eq!(loaded, Dictionaries::builtin().unwrap());
    }
}
