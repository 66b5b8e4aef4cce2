//! The prompt record entity and its structural validation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, persisted generation prompt.
///
/// Field order here is the on-disk field order; files are written
/// pretty-printed so they stay manually inspectable and editable.
///
/// Timestamps are `None` only before the first successful save: the store
/// stamps `created` exactly once and refreshes `modified` on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    /// Unique name within a library directory; doubles as the file name.
    pub name: String,
    /// Positive prompt text.
    pub positive: String,
    /// Negative prompt text.
    pub negative: String,
    /// Ordered tags; each trimmed and non-empty.
    pub tags: Vec<String>,
    /// Category label used for search and display.
    pub category: String,
    /// Optional generation settings (steps, cfg, sampler, ...), scalar
    /// values only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BTreeMap<String, Value>>,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set at first successful save, never changed afterwards.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Refreshed on every successful save.
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

impl PromptRecord {
    /// Create an unsaved record with no timestamps.
    pub fn new(
        name: impl Into<String>,
        positive: impl Into<String>,
        negative: impl Into<String>,
        tags: Vec<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            positive: positive.into(),
            negative: negative.into(),
            tags,
            category: category.into(),
            settings: None,
            notes: None,
            created: None,
            modified: None,
        }
    }

    /// Structural validation shared by save and import.
    ///
    /// Checks the invariants that make a record storable: a usable name and
    /// well-formed tags and settings. Returns the first violation found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err("name must not contain path separators".into());
        }
        for tag in &self.tags {
            if tag.trim().is_empty() {
                return Err("tags must be non-empty".into());
            }
            if tag.trim() != tag {
                return Err(format!("tag '{tag}' has surrounding whitespace"));
            }
        }
        if let Some(settings) = &self.settings {
            for (key, value) in settings {
                if value.is_object() || value.is_array() {
                    return Err(format!("setting '{key}' must be a scalar"));
                }
            }
        }
        Ok(())
    }

    /// Whether the query matches the record's name, category, or any tag
    /// (case-insensitive substring).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    /// Render the fixed plain-text export layout.
    pub fn to_export_text(&self) -> String {
        let mut content = format!(
            "Prompt: {}\nCategory: {}\nTags: {}\n\nPositive Prompt:\n{}\n\nNegative Prompt:\n{}\n",
            self.name,
            self.category,
            self.tags.join(", "),
            self.positive,
            self.negative
        );

        if let Some(settings) = &self.settings {
            let dump = serde_json::to_string_pretty(settings)
                .unwrap_or_else(|_| "{}".to_string());
            content.push_str(&format!("\nSettings:\n{dump}\n"));
        }

        if let Some(notes) = &self.notes {
            content.push_str(&format!("\nNotes:\n{notes}\n"));
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PromptRecord {
        PromptRecord::new(
            "studio-portrait",
            "85mm portrait, soft key light",
            "blurry, low quality",
            vec!["portrait".into(), "studio".into()],
            "photography",
        )
    }

    #[test]
    fn valid_record_passes() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut r = record();
        r.name = "   ".into();
        assert!(r.validate().is_err());
    }

    #[test]
    fn path_separators_rejected() {
        let mut r = record();
        r.name = "../escape".into();
        assert!(r.validate().is_err());
    }

    #[test]
    fn empty_tag_rejected() {
        let mut r = record();
        r.tags.push("".into());
        assert!(r.validate().is_err());
    }

    #[test]
    fn untrimmed_tag_rejected() {
        let mut r = record();
        r.tags.push(" padded ".into());
        assert!(r.validate().is_err());
    }

    #[test]
    fn empty_tag_list_allowed() {
        let mut r = record();
        r.tags.clear();
        assert!(r.validate().is_ok());
    }

    #[test]
    fn non_scalar_setting_rejected() {
        let mut r = record();
        r.settings = Some(
            [("lora".to_string(), serde_json::json!({"weight": 0.8}))]
                .into_iter()
                .collect(),
        );
        assert!(r.validate().is_err());
    }

    #[test]
    fn scalar_settings_allowed() {
        let mut r = record();
        r.settings = Some(
            [
                ("steps".to_string(), serde_json::json!(30)),
                ("cfg".to_string(), serde_json::json!(7.5)),
                ("sampler".to_string(), serde_json::json!("DPM++ 2M Karras")),
            ]
            .into_iter()
            .collect(),
        );
        assert!(r.validate().is_ok());
    }

    #[test]
    fn search_matching_is_case_insensitive() {
        let r = record();
        assert!(r.matches("PORTRAIT"));
        assert!(r.matches("photo"));
        assert!(r.matches("studio"));
        assert!(!r.matches("landscape"));
    }

    #[test]
    fn export_text_includes_core_fields() {
        let text = record().to_export_text();
        assert!(text.contains("Prompt: studio-portrait"));
        assert!(text.contains("Category: photography"));
        assert!(text.contains("Tags: portrait, studio"));
        assert!(text.contains("Positive Prompt:\n85mm portrait"));
        assert!(text.contains("Negative Prompt:\nblurry"));
        assert!(!text.contains("Settings:"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn export_text_appends_optional_sections() {
        let mut r = record();
        r.settings = Some(
            [("steps".to_string(), serde_json::json!(30))]
                .into_iter()
                .collect(),
        );
        r.notes = Some("works best at 1024x1024".into());
        let text = r.to_export_text();
        assert!(text.contains("Settings:"));
        assert!(text.contains("\"steps\": 30"));
        assert!(text.contains("Notes:\nworks best at 1024x1024"));
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let json = r#"{
            "name": "minimal",
            "positive": "a cat",
            "negative": "",
            "tags": [],
            "category": "general"
        }"#;
        let r: PromptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.name, "minimal");
        assert!(r.settings.is_none());
        assert!(r.created.is_none());
    }

    #[test]
    fn missing_required_field_fails_deserialize() {
        let json = r#"{"name": "broken", "tags": [], "category": "x"}"#;
        assert!(serde_json::from_str::<PromptRecord>(json).is_err());
    }
}
