//! Package assembler: renders every planned artifact and hands the
//! path→content mapping to the zip builder.
//!
//! Generation is all-or-nothing. There is no partial archive: any
//! failure while building the zip surfaces as `package.write_failed` and
//! nothing is emitted.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::FileOptions;

use crate::error::{Error, Result};
use crate::extension::ExtensionConfig;
use crate::field::Field;
use crate::plan::{self, Artifact};
use crate::templates::{admin, assets, catalog, language, ocmod};

/// Archive file name for a resolved configuration.
pub fn archive_name(config: &ExtensionConfig) -> String {
    format!("{}.ocmod.zip", config.codename)
}

/// Render every artifact the plan calls for, in plan order.
pub fn assemble(config: &ExtensionConfig, fields: &[Field]) -> Vec<(String, String)> {
    plan::plan(config)
        .into_iter()
        .map(|entry| {
            let content = match entry.artifact {
                Artifact::AdminController => admin::controller(config, fields),
                Artifact::AdminLanguage { locale } => language::admin(config, fields, locale),
                Artifact::AdminModel => admin::model(config),
                Artifact::AdminView => admin::view(config, fields),
                Artifact::CatalogController => catalog::controller(config),
                Artifact::AjaxController => catalog::ajax_controller(config),
                Artifact::EventController => catalog::event_controller(config),
                Artifact::CatalogLanguage { locale } => language::catalog(config, locale),
                // The catalog model is the same lifecycle stub as the
                // admin one.
                Artifact::CatalogModel => admin::model(config),
                Artifact::CatalogView { ref theme } => catalog::view(config, theme.as_deref()),
                Artifact::Stylesheet => assets::stylesheet(config),
                Artifact::Script => assets::script(config),
                Artifact::Manifest => ocmod::manifest(config),
            };
            (entry.path, content)
        })
        .collect()
}

/// Build the archive bytes from a path→content mapping.
///
/// Parent directories are written once each, in order of first use, so
/// the archive unpacks cleanly with strict extractors.
pub fn build_archive(entries: &[(String, String)]) -> Result<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();
    let mut dirs: HashSet<String> = HashSet::new();

    for (path, content) in entries {
        let segments: Vec<&str> = path.split('/').collect();
        let mut ancestor = String::new();
        for segment in &segments[..segments.len() - 1] {
            ancestor.push_str(segment);
            ancestor.push('/');
            if dirs.insert(ancestor.clone()) {
                writer
                    .add_directory(ancestor.clone(), options)
                    .map_err(|e| Error::package_write_failed(e.to_string(), Some(path.clone())))?;
            }
        }

        writer
            .start_file(path.clone(), options)
            .map_err(|e| Error::package_write_failed(e.to_string(), Some(path.clone())))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| Error::package_write_failed(e.to_string(), Some(path.clone())))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| Error::package_write_failed(e.to_string(), None))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionType;
    use crate::field::FieldKind;

    fn config() -> ExtensionConfig {
        ExtensionConfig {
            codename: "my_module".to_string(),
            ..Default::default()
        }
        .resolved()
    }

    #[test]
    fn archive_name_uses_codename() {
        assert_eq!(archive_name(&config()), "my_module.ocmod.zip");
    }

    #[test]
    fn assemble_covers_every_planned_path() {
        let cfg = config();
        let planned = plan::plan(&cfg);
        let rendered = assemble(&cfg, &[]);

        assert_eq!(planned.len(), rendered.len());
        for (entry, (path, content)) in planned.iter().zip(rendered.iter()) {
            assert_eq!(&entry.path, path);
            assert!(!content.is_empty(), "empty artifact at {}", path);
        }
    }

    #[test]
    fn assemble_threads_fields_into_admin_artifacts() {
        let mut cfg = config();
        cfg.files.catalog_language = false;
        let fields = vec![Field {
            id: 1,
            kind: FieldKind::Text,
            label: "Banner Title".to_string(),
            key: "banner_title".to_string(),
        }];

        let rendered = assemble(&cfg, &fields);
        let controller = &rendered
            .iter()
            .find(|(p, _)| p.ends_with("admin/controller/extension/module/my_module.php"))
            .unwrap()
            .1;
        assert!(controller.contains("banner_title"));

        let view = &rendered
            .iter()
            .find(|(p, _)| p.ends_with("my_module.twig") && p.contains("admin"))
            .unwrap()
            .1;
        assert!(view.contains("input-banner_title"));
    }

    #[test]
    fn assemble_is_deterministic() {
        let cfg = config();
        assert_eq!(assemble(&cfg, &[]), assemble(&cfg, &[]));
    }

    #[test]
    fn payment_catalog_language_defaults_description() {
        let cfg = ExtensionConfig {
            extension_type: ExtensionType::Payment,
            codename: "my_pay".to_string(),
            ..Default::default()
        }
        .resolved();

        let rendered = assemble(&cfg, &[]);
        let (_, en) = rendered
            .iter()
            .find(|(p, _)| p.contains("catalog/language/en-gb"))
            .unwrap();
        assert!(en.contains("Secure payment method"));
        assert!(!en.contains("text_description'] = '';"));
    }

    #[test]
    fn archive_round_trips_through_zip_reader() {
        let cfg = config();
        let entries = assemble(&cfg, &[]);
        let bytes = build_archive(&entries).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for (path, _) in &entries {
            assert!(
                archive.by_name(path).is_ok(),
                "missing archive entry {}",
                path
            );
        }
    }

    #[test]
    fn archive_contains_parent_directories() {
        let entries = vec![(
            "upload/admin/controller/extension/module/my_module.php".to_string(),
            "<?php\n".to_string(),
        )];
        let bytes = build_archive(&entries).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("upload/").is_ok());
        assert!(archive
            .by_name("upload/admin/controller/extension/module/")
            .is_ok());
    }
}
