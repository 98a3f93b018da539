//! Extension configuration model.
//!
//! The stored configuration may hold blank strings; every consumer goes
//! through [`ExtensionConfig::resolved`], which substitutes the fixed
//! placeholder defaults and re-applies codename sanitization, so the
//! planner and templates always see usable values.

use serde::{Deserialize, Serialize};

use crate::codename;

/// Category of extension being scaffolded. The wire form doubles as the
/// `extension/{type}/` path segment in every generated route and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionType {
    #[default]
    Module,
    Analytics,
    Captcha,
    Dashboard,
    Feed,
    Payment,
    Report,
    Shipping,
    Theme,
    Total,
}

impl ExtensionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionType::Module => "module",
            ExtensionType::Analytics => "analytics",
            ExtensionType::Captcha => "captcha",
            ExtensionType::Dashboard => "dashboard",
            ExtensionType::Feed => "feed",
            ExtensionType::Payment => "payment",
            ExtensionType::Report => "report",
            ExtensionType::Shipping => "shipping",
            ExtensionType::Theme => "theme",
            ExtensionType::Total => "total",
        }
    }

    /// Payment and shipping extensions carry extra language entries and a
    /// storefront title/description pair.
    pub fn has_checkout_texts(&self) -> bool {
        matches!(self, ExtensionType::Payment | ExtensionType::Shipping)
    }
}

/// Per-artifact generation toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileFlags {
    pub ocmod: bool,
    pub admin_model: bool,
    pub catalog_controller: bool,
    pub catalog_model: bool,
    pub catalog_view: bool,
    pub catalog_language: bool,
    pub script: bool,
    pub stylesheet: bool,
}

impl Default for FileFlags {
    fn default() -> Self {
        Self {
            ocmod: false,
            admin_model: true,
            catalog_controller: true,
            catalog_model: true,
            catalog_view: true,
            catalog_language: true,
            script: false,
            stylesheet: false,
        }
    }
}

/// Developer-mode extras: additional catalog controllers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevOptions {
    pub generate_events: bool,
    pub generate_ajax: bool,
}

fn default_name() -> String {
    "My Module".to_string()
}

fn default_codename() -> String {
    "my_module".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_author() -> String {
    "Opencart Club".to_string()
}

fn default_theme() -> String {
    "default".to_string()
}

/// The extension being generated, as stored in the session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionConfig {
    pub extension_type: ExtensionType,
    pub is_multi_module: bool,
    pub name: String,
    pub codename: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub theme: String,
    pub script_name: String,
    pub style_name: String,
    pub files: FileFlags,
    pub dev: DevOptions,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            extension_type: ExtensionType::Module,
            is_multi_module: false,
            name: default_name(),
            codename: default_codename(),
            version: default_version(),
            author: default_author(),
            description: String::new(),
            theme: default_theme(),
            script_name: String::new(),
            style_name: String::new(),
            files: FileFlags::default(),
            dev: DevOptions::default(),
        }
    }
}

impl ExtensionConfig {
    /// Snapshot the configuration for planning and template rendering.
    ///
    /// Blank values fall back to the fixed placeholders, the codename is
    /// re-sanitized, multi-module is forced off for non-module types, and
    /// the asset override names default to the codename.
    pub fn resolved(&self) -> ExtensionConfig {
        let mut out = self.clone();

        if out.name.trim().is_empty() {
            out.name = default_name();
        }

        out.codename = codename::sanitize(&out.codename);
        if out.codename.is_empty() {
            out.codename = default_codename();
        }

        if out.version.trim().is_empty() {
            out.version = default_version();
        }
        if out.author.trim().is_empty() {
            out.author = default_author();
        }
        if out.theme.trim().is_empty() {
            out.theme = default_theme();
        }

        if out.extension_type != ExtensionType::Module {
            out.is_multi_module = false;
        }

        if out.script_name.trim().is_empty() {
            out.script_name = out.codename.clone();
        }
        if out.style_name.trim().is_empty() {
            out.style_name = out.codename.clone();
        }

        out
    }

    /// True when any flag contributes output under `catalog/`.
    pub fn has_catalog_output(&self) -> bool {
        self.files.catalog_controller
            || self.files.catalog_model
            || self.files.catalog_view
            || self.files.catalog_language
            || self.files.script
            || self.files.stylesheet
            || self.dev.generate_events
            || self.dev.generate_ajax
    }

    /// True when any of the three catalog controllers is requested.
    pub fn has_catalog_controllers(&self) -> bool {
        self.files.catalog_controller || self.dev.generate_ajax || self.dev.generate_events
    }

    /// True when a non-default storefront theme duplicates the view.
    pub fn has_custom_theme(&self) -> bool {
        !self.theme.is_empty() && self.theme != "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_substitutes_placeholders() {
        let config = ExtensionConfig {
            name: "  ".to_string(),
            codename: String::new(),
            version: String::new(),
            author: String::new(),
            ..Default::default()
        };

        let resolved = config.resolved();
        assert_eq!(resolved.name, "My Module");
        assert_eq!(resolved.codename, "my_module");
        assert_eq!(resolved.version, "1.0.0");
        assert_eq!(resolved.author, "Opencart Club");
    }

    #[test]
    fn resolved_sanitizes_codename() {
        let config = ExtensionConfig {
            codename: "My-Module!".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolved().codename, "mymodule");
    }

    #[test]
    fn resolved_forces_multi_module_off_for_other_types() {
        let config = ExtensionConfig {
            extension_type: ExtensionType::Payment,
            is_multi_module: true,
            ..Default::default()
        };
        assert!(!config.resolved().is_multi_module);

        let module = ExtensionConfig {
            is_multi_module: true,
            ..Default::default()
        };
        assert!(module.resolved().is_multi_module);
    }

    #[test]
    fn resolved_defaults_asset_names_to_codename() {
        let config = ExtensionConfig {
            codename: "banner".to_string(),
            ..Default::default()
        };
        let resolved = config.resolved();
        assert_eq!(resolved.script_name, "banner");
        assert_eq!(resolved.style_name, "banner");

        let overridden = ExtensionConfig {
            codename: "banner".to_string(),
            script_name: "slider".to_string(),
            ..Default::default()
        };
        assert_eq!(overridden.resolved().script_name, "slider");
    }

    #[test]
    fn catalog_gate_reflects_every_contributing_flag() {
        let mut config = ExtensionConfig::default();
        config.files = FileFlags {
            ocmod: false,
            admin_model: true,
            catalog_controller: false,
            catalog_model: false,
            catalog_view: false,
            catalog_language: false,
            script: false,
            stylesheet: false,
        };
        assert!(!config.has_catalog_output());

        config.dev.generate_ajax = true;
        assert!(config.has_catalog_output());
        assert!(config.has_catalog_controllers());
    }

    #[test]
    fn extension_type_round_trips_through_serde() {
        let json = serde_json::to_string(&ExtensionType::Shipping).unwrap();
        assert_eq!(json, "\"shipping\"");
        let back: ExtensionType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExtensionType::Shipping);
    }
}
