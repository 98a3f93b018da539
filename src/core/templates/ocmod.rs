//! OCMOD install descriptor.

use crate::extension::ExtensionConfig;
use crate::utils::template::{render, TemplateVars};

const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<modification>
	<name>{{name}}</name>
	<code>{{codename}}</code>
	<version>{{version}}</version>
	<author>{{author}}</author>
	<link>https://opencartforum.com.ru/</link>

	<!-- 
	Пример модификации:
	<file path="catalog/controller/common/home.php">
		<operation>
			<search><![CDATA[$this->document->setTitle(]]></search>
			<add position="after"><![CDATA[
			// Ваш код здесь
			]]></add>
		</operation>
	</file>
	-->
</modification>"#;

/// install.xml: metadata plus the fixed illustrative modification block.
/// Not field-dependent.
pub fn manifest(config: &ExtensionConfig) -> String {
    render(
        MANIFEST,
        &[
            (TemplateVars::NAME, config.name.as_str()),
            (TemplateVars::CODENAME, config.codename.as_str()),
            (TemplateVars::VERSION, config.version.as_str()),
            (TemplateVars::AUTHOR, config.author.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionConfig;

    #[test]
    fn manifest_carries_metadata() {
        let config = ExtensionConfig {
            name: "Banner".to_string(),
            codename: "banner".to_string(),
            version: "3.0.1".to_string(),
            author: "Club".to_string(),
            ..Default::default()
        }
        .resolved();

        let out = manifest(&config);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(out.contains("<name>Banner</name>"));
        assert!(out.contains("<code>banner</code>"));
        assert!(out.contains("<version>3.0.1</version>"));
        assert!(out.contains("<author>Club</author>"));
        assert!(out.contains("<![CDATA["));
    }

    #[test]
    fn manifest_ignores_fields_entirely() {
        let config = ExtensionConfig::default().resolved();
        assert_eq!(manifest(&config), manifest(&config));
        assert!(!manifest(&config).contains("entry_"));
    }
}
