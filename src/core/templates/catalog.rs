//! Catalog-side artifact templates: storefront controller, the dev-option
//! API and event controllers, and the view stubs.

use crate::classname::{class_name, ClassPrefix, ClassSuffix};
use crate::extension::{ExtensionConfig, ExtensionType};
use crate::utils::template::{render, TemplateVars};

const CONTROLLER: &str = r#"<?php
class {{className}} extends Controller {
	public function index() {
{{assets}}
		$data = array();
		
		return $this->load->view('extension/{{type}}/{{codename}}', $data);
	}
}
"#;

/// Storefront controller. Registers the requested assets; theme
/// extensions load them from the theme locations, everything else from
/// the per-codename javascript subdirectory using the override names.
pub fn controller(config: &ExtensionConfig) -> String {
    let extension_type = config.extension_type.as_str();
    let class = class_name(
        ClassPrefix::Controller,
        &config.codename,
        extension_type,
        None,
    );

    let mut assets = String::new();
    if config.extension_type == ExtensionType::Theme {
        if config.files.stylesheet {
            assets.push_str(&format!(
                "\t\t$this->document->addStyle('catalog/view/theme/default/stylesheet/{}.css');\n",
                config.codename
            ));
        }
        if config.files.script {
            assets.push_str(&format!(
                "\t\t$this->document->addScript('catalog/view/javascript/{}.js');\n",
                config.codename
            ));
        }
    } else {
        if config.files.stylesheet {
            assets.push_str(&format!(
                "\t\t$this->document->addStyle('catalog/view/javascript/{}/{}.css');\n",
                config.codename, config.style_name
            ));
        }
        if config.files.script {
            assets.push_str(&format!(
                "\t\t$this->document->addScript('catalog/view/javascript/{}/{}.js');\n",
                config.codename, config.script_name
            ));
        }
    }

    render(
        CONTROLLER,
        &[
            (TemplateVars::CLASS_NAME, class.as_str()),
            ("assets", assets.trim_end_matches('\n')),
            (TemplateVars::TYPE, extension_type),
            (TemplateVars::CODENAME, config.codename.as_str()),
        ],
    )
}

const AJAX: &str = r#"<?php
class {{className}} extends Controller {
	public function index() {
		$this->load->language('extension/{{type}}/{{codename}}');

		$json = array();

		if (isset($this->request->post['data'])) {
			$json['success'] = true;
			$json['message'] = 'Success';
		} else {
			$json['error'] = 'No data';
		}

		$this->response->addHeader('Content-Type: application/json');
		$this->response->setOutput(json_encode($json));
	}
}"#;

/// JSON endpoint stub: success when a `data` key was posted, error
/// otherwise.
pub fn ajax_controller(config: &ExtensionConfig) -> String {
    let extension_type = config.extension_type.as_str();
    let class = class_name(
        ClassPrefix::Controller,
        &config.codename,
        extension_type,
        Some(ClassSuffix::Api),
    );

    render(
        AJAX,
        &[
            (TemplateVars::CLASS_NAME, class.as_str()),
            (TemplateVars::TYPE, extension_type),
            (TemplateVars::CODENAME, config.codename.as_str()),
        ],
    )
}

const EVENT: &str = r#"<?php
class {{className}} extends Controller {
	public function onBeforeHeader(&$route, &$args) {
		// Event handler logic before header
	}

	public function onAfterHeader(&$route, &$args, &$output) {
		// Event handler logic after header
	}
}"#;

/// Event controller stub with empty before/after routing hooks.
pub fn event_controller(config: &ExtensionConfig) -> String {
    let class = class_name(
        ClassPrefix::Controller,
        &config.codename,
        config.extension_type.as_str(),
        Some(ClassSuffix::Event),
    );

    render(EVENT, &[(TemplateVars::CLASS_NAME, class.as_str())])
}

/// Storefront view stub. The custom-theme copy names the theme so the
/// two files are distinguishable once unpacked.
pub fn view(config: &ExtensionConfig, theme: Option<&str>) -> String {
    match theme {
        Some(theme) => format!("<!-- {} catalog view for {} -->", config.name, theme),
        None => format!("<!-- {} catalog view -->", config.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::FileFlags;

    fn config(extension_type: ExtensionType) -> ExtensionConfig {
        ExtensionConfig {
            extension_type,
            codename: "my_ext".to_string(),
            files: FileFlags {
                script: true,
                stylesheet: true,
                ..Default::default()
            },
            ..Default::default()
        }
        .resolved()
    }

    #[test]
    fn controller_registers_assets_under_codename_directory() {
        let out = controller(&config(ExtensionType::Module));
        assert!(out.contains("addStyle('catalog/view/javascript/my_ext/my_ext.css')"));
        assert!(out.contains("addScript('catalog/view/javascript/my_ext/my_ext.js')"));
    }

    #[test]
    fn controller_honors_asset_name_overrides() {
        let mut cfg = config(ExtensionType::Module);
        cfg.script_name = "slider".to_string();
        cfg.style_name = "skin".to_string();
        let out = controller(&cfg);
        assert!(out.contains("catalog/view/javascript/my_ext/skin.css"));
        assert!(out.contains("catalog/view/javascript/my_ext/slider.js"));
    }

    #[test]
    fn theme_controller_uses_theme_asset_paths() {
        let out = controller(&config(ExtensionType::Theme));
        assert!(out.contains("addStyle('catalog/view/theme/default/stylesheet/my_ext.css')"));
        assert!(out.contains("addScript('catalog/view/javascript/my_ext.js')"));
        assert!(!out.contains("javascript/my_ext/"));
    }

    #[test]
    fn controller_without_assets_keeps_minimal_index() {
        let mut cfg = config(ExtensionType::Module);
        cfg.files.script = false;
        cfg.files.stylesheet = false;
        let out = controller(&cfg);
        assert!(!out.contains("addStyle"));
        assert!(!out.contains("addScript"));
        assert!(out.contains("return $this->load->view('extension/module/my_ext', $data);"));
    }

    #[test]
    fn ajax_controller_keys_on_posted_data() {
        let out = ajax_controller(&config(ExtensionType::Module));
        assert!(out.contains("class ControllerExtensionModuleMyExtApi extends Controller"));
        assert!(out.contains("if (isset($this->request->post['data']))"));
        assert!(out.contains("$json['error'] = 'No data';"));
    }

    #[test]
    fn event_controller_has_empty_hooks() {
        let out = event_controller(&config(ExtensionType::Module));
        assert!(out.contains("class ControllerExtensionModuleMyExtEvent extends Controller"));
        assert!(out.contains("onBeforeHeader(&$route, &$args)"));
        assert!(out.contains("onAfterHeader(&$route, &$args, &$output)"));
    }

    #[test]
    fn view_stub_names_custom_theme() {
        let cfg = config(ExtensionType::Module);
        assert_eq!(view(&cfg, None), "<!-- My Module catalog view -->");
        assert_eq!(
            view(&cfg, Some("mytheme")),
            "<!-- My Module catalog view for mytheme -->"
        );
    }
}
