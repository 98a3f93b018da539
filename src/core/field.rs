//! User-defined configuration fields.
//!
//! Each field becomes one setting in the generated admin form: a labeled
//! input in the view, a request/config read block in the controller, and a
//! language entry per locale.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Input shape the generated admin form uses for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Select,
    Toggle,
    Image,
}

impl std::str::FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(FieldKind::Text),
            "textarea" => Ok(FieldKind::Textarea),
            "select" => Ok(FieldKind::Select),
            "toggle" => Ok(FieldKind::Toggle),
            "image" => Ok(FieldKind::Image),
            other => Err(Error::validation_invalid_argument(
                "kind",
                format!(
                    "Unknown field kind '{}' (expected text, textarea, select, toggle, or image)",
                    other
                ),
                Some(other.to_string()),
            )),
        }
    }
}

/// One custom setting of the extension being generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: u64,
    pub kind: FieldKind,
    pub label: String,
    /// Form-field name and config key in the generated code. Stored as
    /// supplied; not run through codename sanitization.
    pub key: String,
}

/// Wall-clock id for a new field. Unique for the rate at which fields are
/// added by hand.
pub fn next_field_id() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Build a field with auto-numbered defaults.
///
/// The number is `current list length + 1` and is NOT recomputed when
/// fields are removed, so defaults can repeat after deletions. That
/// matches the editing surface this generator mirrors and is left as is.
pub fn new_field(kind: FieldKind, existing: &[Field]) -> Field {
    let n = existing.len() + 1;
    Field {
        id: next_field_id(),
        kind,
        label: format!("Field {}", n),
        key: format!("field_{}", n),
    }
}
