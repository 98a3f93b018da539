//! The editing session: one extension configuration plus its field list.
//!
//! The session is the CLI rendition of the generator's in-page state. It
//! persists as a single JSON file; `reset` recreates the defaults the way
//! a page reload would.

use serde::{Deserialize, Serialize};

use crate::codename;
use crate::error::{Error, Result};
use crate::extension::{DevOptions, ExtensionConfig, ExtensionType, FileFlags};
use crate::field::{self, Field, FieldKind};
use crate::paths;
use crate::utils::io;

/// How the codename tracks the display name.
///
/// `Auto` derives the codename from every display-name edit. The first
/// direct codename edit moves to `Manual`, and nothing moves it back —
/// only a session reset starts over in `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CodenameMode {
    #[default]
    Auto,
    Manual,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub config: ExtensionConfig,
    pub fields: Vec<Field>,
    pub codename_mode: CodenameMode,
}

/// A partial update to the stored configuration. Every member is optional;
/// unknown keys are rejected so typos surface instead of vanishing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfigPatch {
    pub extension_type: Option<ExtensionType>,
    pub is_multi_module: Option<bool>,
    pub name: Option<String>,
    pub codename: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub script_name: Option<String>,
    pub style_name: Option<String>,
    pub files: Option<FileFlagsPatch>,
    pub dev: Option<DevOptionsPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FileFlagsPatch {
    pub ocmod: Option<bool>,
    pub admin_model: Option<bool>,
    pub catalog_controller: Option<bool>,
    pub catalog_model: Option<bool>,
    pub catalog_view: Option<bool>,
    pub catalog_language: Option<bool>,
    pub script: Option<bool>,
    pub stylesheet: Option<bool>,
}

impl FileFlagsPatch {
    fn apply(&self, flags: &mut FileFlags) {
        if let Some(v) = self.ocmod {
            flags.ocmod = v;
        }
        if let Some(v) = self.admin_model {
            flags.admin_model = v;
        }
        if let Some(v) = self.catalog_controller {
            flags.catalog_controller = v;
        }
        if let Some(v) = self.catalog_model {
            flags.catalog_model = v;
        }
        if let Some(v) = self.catalog_view {
            flags.catalog_view = v;
        }
        if let Some(v) = self.catalog_language {
            flags.catalog_language = v;
        }
        if let Some(v) = self.script {
            flags.script = v;
        }
        if let Some(v) = self.stylesheet {
            flags.stylesheet = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DevOptionsPatch {
    pub generate_events: Option<bool>,
    pub generate_ajax: Option<bool>,
}

impl DevOptionsPatch {
    fn apply(&self, dev: &mut DevOptions) {
        if let Some(v) = self.generate_events {
            dev.generate_events = v;
        }
        if let Some(v) = self.generate_ajax {
            dev.generate_ajax = v;
        }
    }
}

impl ConfigPatch {
    /// Deserialize a patch from a merged JSON spec.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::validation_invalid_json(e, Some("parse config patch".to_string())))
    }
}

impl Session {
    /// Apply a configuration patch, honoring the codename latch.
    ///
    /// A display-name edit re-derives the codename only while the latch
    /// is still `Auto`; a direct codename edit sanitizes the value and
    /// trips the latch. When one patch carries both, the explicit
    /// codename wins.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(extension_type) = patch.extension_type {
            self.config.extension_type = extension_type;
        }
        if let Some(is_multi_module) = patch.is_multi_module {
            self.config.is_multi_module = is_multi_module;
        }

        if let Some(name) = patch.name {
            if self.codename_mode == CodenameMode::Auto {
                self.config.codename = codename::normalize(&name);
            }
            self.config.name = name;
        }

        if let Some(raw) = patch.codename {
            self.config.codename = codename::sanitize(&raw);
            self.codename_mode = CodenameMode::Manual;
        }

        if let Some(version) = patch.version {
            self.config.version = version;
        }
        if let Some(author) = patch.author {
            self.config.author = author;
        }
        if let Some(description) = patch.description {
            self.config.description = description;
        }
        if let Some(theme) = patch.theme {
            self.config.theme = theme;
        }
        if let Some(script_name) = patch.script_name {
            self.config.script_name = script_name;
        }
        if let Some(style_name) = patch.style_name {
            self.config.style_name = style_name;
        }

        if let Some(files) = patch.files {
            files.apply(&mut self.config.files);
        }
        if let Some(dev) = patch.dev {
            dev.apply(&mut self.config.dev);
        }
    }

    /// Append a field with auto-numbered defaults; returns a copy of it.
    pub fn add_field(&mut self, kind: FieldKind) -> Field {
        let new = field::new_field(kind, &self.fields);
        self.fields.push(new.clone());
        new
    }

    /// Update a field's label and/or key by id. The key is stored as
    /// supplied, without sanitization.
    pub fn update_field(
        &mut self,
        id: u64,
        label: Option<String>,
        key: Option<String>,
    ) -> Result<Field> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::field_not_found(id))?;

        if let Some(label) = label {
            field.label = label;
        }
        if let Some(key) = key {
            field.key = key;
        }

        Ok(field.clone())
    }

    /// Remove a field by id. Remaining fields keep their order and names.
    pub fn remove_field(&mut self, id: u64) -> Result<Field> {
        let index = self
            .fields
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| Error::field_not_found(id))?;

        Ok(self.fields.remove(index))
    }

    /// Resolved configuration snapshot for planning and rendering.
    pub fn resolved_config(&self) -> ExtensionConfig {
        self.config.resolved()
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Load the session, falling back to defaults when no file exists yet.
pub fn load() -> Result<Session> {
    let path = paths::session_file()?;
    if !path.exists() {
        return Ok(Session::default());
    }

    let raw = io::read_file(&path, "read session")?;
    serde_json::from_str(&raw).map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Persist the session atomically.
pub fn save(session: &Session) -> Result<()> {
    let path = paths::session_file()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::internal_io(e.to_string(), Some("create config dir".to_string())))?;
    }

    let payload = serde_json::to_string_pretty(session)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize session".to_string())))?;

    io::write_file_atomic(&path, &payload, "write session")
}

/// Recreate the default session on disk and return it.
pub fn reset() -> Result<Session> {
    let session = Session::default();
    save(&session)?;
    Ok(session)
}
