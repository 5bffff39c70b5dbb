use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{label_key, MAX_ENTRIES, MAX_LABEL_LENGTH};

/// One selectable option on the wheel.
///
/// Entries are immutable; editing produces a new value that keeps the id.
/// The position of an entry in its list fixes its segment on the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Entry {
    id: String,
    #[validate(length(max = 60), custom = "crate::validation::validate_label")]
    label: String,
    #[validate(custom = "crate::validation::validate_color")]
    color: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), label, color)
    }

    pub fn with_id(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn relabeled(&self, label: impl Into<String>) -> Self {
        Self::with_id(self.id.clone(), label, self.color.clone())
    }

    pub fn recolored(&self, color: impl Into<String>) -> Self {
        Self::with_id(self.id.clone(), self.label.clone(), color)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry {index} has an invalid {field} ({code})")]
    InvalidField {
        index: usize,
        field: String,
        code: String,
    },

    #[error("label \"{label}\" is used by entries {first} and {second}")]
    DuplicateLabel {
        label: String,
        first: usize,
        second: usize,
    },

    #[error("too many entries: {count} (max {max})")]
    TooMany { count: usize, max: usize },
}

impl EntryError {
    /// Short message for inline form feedback.
    pub fn user_message(&self) -> String {
        match self {
            EntryError::InvalidField { field, code, .. } => match (field.as_str(), code.as_str()) {
                ("label", "empty_label") => "Labels cannot be empty".to_string(),
                ("label", "length") | ("label", "label_too_long") => {
                    format!("Labels are limited to {} characters", MAX_LABEL_LENGTH)
                }
                ("color", _) => "Colors must be #rgb, #rrggbb or a color name".to_string(),
                _ => format!("Invalid {}", field),
            },
            EntryError::DuplicateLabel { label, .. } => format!("\"{}\" is already on the wheel", label),
            EntryError::TooMany { max, .. } => format!("A wheel can hold at most {} entries", max),
        }
    }
}

/// Validates an entry list at the UI boundary. The engine itself accepts
/// any list.
pub fn validate_entries(entries: &[Entry]) -> Result<(), EntryError> {
    if entries.len() > MAX_ENTRIES {
        return Err(EntryError::TooMany {
            count: entries.len(),
            max: MAX_ENTRIES,
        });
    }

    let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Err(errors) = entry.validate() {
            let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
            fields.sort_by_key(|(field, _)| *field);
            if let Some((field, errs)) = fields.into_iter().next() {
                let code = errs.first().map(|e| e.code.to_string()).unwrap_or_default();
                return Err(EntryError::InvalidField {
                    index,
                    field: field.to_string(),
                    code,
                });
            }
        }

        if let Some(first) = seen.insert(label_key(entry.label()), index) {
            return Err(EntryError::DuplicateLabel {
                label: entry.label().trim().to_string(),
                first,
                second: index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(labels: &[&str]) -> Vec<Entry> {
        labels.iter().map(|l| Entry::new(*l, "#f97316")).collect()
    }

    #[test]
    fn test_new_entries_get_unique_ids() {
        let a = Entry::new("A", "#fff");
        let b = Entry::new("A", "#fff");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_edits_keep_id() {
        let a = Entry::new("A", "#fff");
        let b = a.relabeled("B").recolored("#000");
        assert_eq!(a.id(), b.id());
        assert_eq!(b.label(), "B");
        assert_eq!(b.color(), "#000");
        assert_eq!(a.label(), "A");
    }

    #[test]
    fn test_valid_list() {
        assert!(validate_entries(&entries(&["Yes", "No", "Maybe"])).is_ok());
        assert!(validate_entries(&[]).is_ok());
    }

    #[test]
    fn test_rejects_blank_label() {
        let err = validate_entries(&entries(&["Yes", "  "])).unwrap_err();
        assert!(matches!(err, EntryError::InvalidField { index: 1, ref field, .. } if field == "label"));
    }

    #[test]
    fn test_rejects_overlong_label() {
        let long = "x".repeat(MAX_LABEL_LENGTH + 1);
        let err = validate_entries(&entries(&[long.as_str()])).unwrap_err();
        assert!(matches!(err, EntryError::InvalidField { index: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_color() {
        let list = vec![Entry::new("A", "#fff"), Entry::new("B", "url(x)")];
        let err = validate_entries(&list).unwrap_err();
        assert!(matches!(err, EntryError::InvalidField { index: 1, ref field, .. } if field == "color"));
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let err = validate_entries(&entries(&["Pizza", "Sushi", " pizza"])).unwrap_err();
        assert_eq!(
            err,
            EntryError::DuplicateLabel {
                label: "pizza".to_string(),
                first: 0,
                second: 2
            }
        );
    }

    #[test]
    fn test_rejects_too_many() {
        let labels: Vec<String> = (0..=MAX_ENTRIES).map(|i| format!("#{}", i)).collect();
        let list: Vec<Entry> = labels.iter().map(|l| Entry::new(l.as_str(), "#fff")).collect();
        assert!(matches!(validate_entries(&list), Err(EntryError::TooMany { .. })));
    }

    #[test]
    fn test_serde_round_trip_keeps_fields() {
        let e = Entry::with_id("id-1", "Tacos", "#eab308");
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r##"{"id":"id-1","label":"Tacos","color":"#eab308"}"##);
    }
}
