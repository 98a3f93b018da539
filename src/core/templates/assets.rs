//! Script and stylesheet placeholders.
//!
//! Theme extensions get a full starter stylesheet; every other type gets
//! a one-line stub, since their styling belongs to the storefront theme.

use crate::extension::{ExtensionConfig, ExtensionType};
use crate::utils::template::{render, TemplateVars};

const THEME_STYLESHEET: &str = r##"/**
 * {{name}} Theme Stylesheet
 * Version: {{version}}
 * Author: {{author}}
 */

/* ============================================
   BASE STYLES
   ============================================ */

:root {
    --theme-primary: #2563eb;
    --theme-secondary: #64748b;
    --theme-success: #22c55e;
    --theme-danger: #ef4444;
    --theme-warning: #f59e0b;
    --theme-info: #0ea5e9;
    --theme-light: #f8fafc;
    --theme-dark: #1e293b;
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--theme-dark);
    background-color: #ffffff;
}

/* ============================================
   HEADER STYLES
   ============================================ */

#header {
    background: #ffffff;
    border-bottom: 1px solid #e2e8f0;
}

/* ============================================
   FOOTER STYLES
   ============================================ */

footer {
    background: var(--theme-dark);
    color: #ffffff;
    padding: 40px 0;
}

/* ============================================
   PRODUCT STYLES
   ============================================ */

.product-thumb {
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    transition: all 0.3s ease;
}

.product-thumb:hover {
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
}

/* Add your custom styles below */
"##;

/// Stylesheet placeholder for the selected extension type.
pub fn stylesheet(config: &ExtensionConfig) -> String {
    if config.extension_type == ExtensionType::Theme {
        render(
            THEME_STYLESHEET,
            &[
                (TemplateVars::NAME, config.name.as_str()),
                (TemplateVars::VERSION, config.version.as_str()),
                (TemplateVars::AUTHOR, config.author.as_str()),
            ],
        )
    } else {
        format!("/* {} CSS */", config.name)
    }
}

/// One-line script placeholder.
pub fn script(config: &ExtensionConfig) -> String {
    format!("/* {} JS */", config.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(extension_type: ExtensionType) -> ExtensionConfig {
        ExtensionConfig {
            extension_type,
            name: "Shop Theme".to_string(),
            version: "2.1.0".to_string(),
            author: "Acme".to_string(),
            ..Default::default()
        }
        .resolved()
    }

    #[test]
    fn theme_stylesheet_interpolates_header_comment() {
        let out = stylesheet(&config(ExtensionType::Theme));
        assert!(out.starts_with("/**\n * Shop Theme Theme Stylesheet"));
        assert!(out.contains(" * Version: 2.1.0"));
        assert!(out.contains(" * Author: Acme"));
        assert!(out.contains("--theme-primary: #2563eb;"));
    }

    #[test]
    fn other_types_get_one_line_stubs() {
        let cfg = config(ExtensionType::Module);
        assert_eq!(stylesheet(&cfg), "/* Shop Theme CSS */");
        assert_eq!(script(&cfg), "/* Shop Theme JS */");
    }
}
