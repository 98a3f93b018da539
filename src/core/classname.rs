//! PHP class-name derivation for generated artifacts.
//!
//! OpenCart 3 resolves `extension/{type}/{codename}` routes to classes
//! named `{Prefix}Extension{Type}{Codename}`, so the generated code must
//! follow the same scheme exactly.

/// Class-name prefix for the artifact being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassPrefix {
    Controller,
    Model,
}

impl ClassPrefix {
    fn as_str(&self) -> &'static str {
        match self {
            ClassPrefix::Controller => "Controller",
            ClassPrefix::Model => "Model",
        }
    }
}

/// Optional class-name suffix for the dev-option controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSuffix {
    Event,
    Api,
}

impl ClassSuffix {
    fn as_str(&self) -> &'static str {
        match self {
            ClassSuffix::Event => "Event",
            ClassSuffix::Api => "Api",
        }
    }
}

/// Derive the PHP class name for a codename and extension type.
///
/// Each non-empty underscore-separated codename segment contributes its
/// first character upper-cased; empty segments (possible in manually
/// typed codenames) contribute nothing.
pub fn class_name(
    prefix: ClassPrefix,
    codename: &str,
    extension_type: &str,
    suffix: Option<ClassSuffix>,
) -> String {
    let mut name = String::from(prefix.as_str());
    name.push_str("Extension");
    name.push_str(&capitalize(extension_type));

    for segment in codename.split('_') {
        name.push_str(&capitalize(segment));
    }

    if let Some(suffix) = suffix {
        name.push_str(suffix.as_str());
    }

    name
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_class_name() {
        assert_eq!(
            class_name(ClassPrefix::Controller, "banner_slider", "module", None),
            "ControllerExtensionModuleBannerSlider"
        );
    }

    #[test]
    fn model_class_name() {
        assert_eq!(
            class_name(ClassPrefix::Model, "my_pay", "payment", None),
            "ModelExtensionPaymentMyPay"
        );
    }

    #[test]
    fn event_and_api_suffixes() {
        assert_eq!(
            class_name(
                ClassPrefix::Controller,
                "my_module",
                "module",
                Some(ClassSuffix::Event)
            ),
            "ControllerExtensionModuleMyModuleEvent"
        );
        assert_eq!(
            class_name(
                ClassPrefix::Controller,
                "my_module",
                "module",
                Some(ClassSuffix::Api)
            ),
            "ControllerExtensionModuleMyModuleApi"
        );
    }

    #[test]
    fn empty_segments_contribute_nothing() {
        // Doubled or trailing underscores can occur in manually typed
        // codenames; the derived class name must not care.
        assert_eq!(
            class_name(ClassPrefix::Controller, "a__b_", "module", None),
            "ControllerExtensionModuleAB"
        );
    }

    #[test]
    fn single_segment_codename() {
        assert_eq!(
            class_name(ClassPrefix::Controller, "banner", "theme", None),
            "ControllerExtensionThemeBanner"
        );
    }
}
