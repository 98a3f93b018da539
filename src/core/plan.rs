//! Tree planner: the conditional set of output paths for a configuration.
//!
//! The same plan drives the textual tree preview and the archive layout,
//! so both always agree. Paths are archive-relative: everything lives
//! under `upload/` except the OCMOD manifest, which sits at the root.

use serde::Serialize;

use crate::extension::{ExtensionConfig, ExtensionType};
use crate::templates::Locale;

/// What a planned path contains. The assembler matches on this to pick
/// the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    AdminController,
    AdminLanguage { locale: Locale },
    AdminModel,
    AdminView,
    CatalogController,
    AjaxController,
    EventController,
    CatalogLanguage { locale: Locale },
    CatalogModel,
    /// `theme` is None for the base theme copy.
    CatalogView { theme: Option<String> },
    Stylesheet,
    Script,
    Manifest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub path: String,
    #[serde(flatten)]
    pub artifact: Artifact,
}

fn entry(path: String, artifact: Artifact) -> PlanEntry {
    PlanEntry { path, artifact }
}

/// Compute the ordered output plan for a resolved configuration.
pub fn plan(config: &ExtensionConfig) -> Vec<PlanEntry> {
    let t = config.extension_type.as_str();
    let code = &config.codename;
    let mut entries = Vec::new();

    // Admin side exists for every extension type, theme included.
    entries.push(entry(
        format!("upload/admin/controller/extension/{}/{}.php", t, code),
        Artifact::AdminController,
    ));
    for locale in [Locale::En, Locale::Ru] {
        entries.push(entry(
            format!(
                "upload/admin/language/{}/extension/{}/{}.php",
                locale.dir(),
                t,
                code
            ),
            Artifact::AdminLanguage { locale },
        ));
    }
    if config.files.admin_model {
        entries.push(entry(
            format!("upload/admin/model/extension/{}/{}.php", t, code),
            Artifact::AdminModel,
        ));
    }
    entries.push(entry(
        format!("upload/admin/view/template/extension/{}/{}.twig", t, code),
        Artifact::AdminView,
    ));

    // The catalog branch exists only when something contributes to it.
    if config.has_catalog_output() {
        if config.has_catalog_controllers() {
            if config.files.catalog_controller {
                entries.push(entry(
                    format!("upload/catalog/controller/extension/{}/{}.php", t, code),
                    Artifact::CatalogController,
                ));
            }
            if config.dev.generate_ajax {
                entries.push(entry(
                    format!("upload/catalog/controller/extension/{}/{}_api.php", t, code),
                    Artifact::AjaxController,
                ));
            }
            if config.dev.generate_events {
                entries.push(entry(
                    format!(
                        "upload/catalog/controller/extension/{}/{}_event.php",
                        t, code
                    ),
                    Artifact::EventController,
                ));
            }
        }

        if config.files.catalog_language {
            for locale in [Locale::En, Locale::Ru] {
                entries.push(entry(
                    format!(
                        "upload/catalog/language/{}/extension/{}/{}.php",
                        locale.dir(),
                        t,
                        code
                    ),
                    Artifact::CatalogLanguage { locale },
                ));
            }
        }

        if config.files.catalog_model {
            entries.push(entry(
                format!("upload/catalog/model/extension/{}/{}.php", t, code),
                Artifact::CatalogModel,
            ));
        }

        if config.files.catalog_view {
            entries.push(entry(
                format!(
                    "upload/catalog/view/theme/default/template/extension/{}/{}.twig",
                    t, code
                ),
                Artifact::CatalogView { theme: None },
            ));
            if config.has_custom_theme() {
                entries.push(entry(
                    format!(
                        "upload/catalog/view/theme/{}/template/extension/{}/{}.twig",
                        config.theme, t, code
                    ),
                    Artifact::CatalogView {
                        theme: Some(config.theme.clone()),
                    },
                ));
            }
        }

        if config.extension_type == ExtensionType::Theme {
            // Theme assets live in the theme's own locations and ignore
            // the override names.
            if config.files.stylesheet {
                entries.push(entry(
                    format!(
                        "upload/catalog/view/theme/default/stylesheet/{}.css",
                        code
                    ),
                    Artifact::Stylesheet,
                ));
            }
            if config.files.script {
                entries.push(entry(
                    format!("upload/catalog/view/javascript/{}.js", code),
                    Artifact::Script,
                ));
            }
        } else {
            if config.files.script {
                entries.push(entry(
                    format!(
                        "upload/catalog/view/javascript/{}/{}.js",
                        code, config.script_name
                    ),
                    Artifact::Script,
                ));
            }
            if config.files.stylesheet {
                entries.push(entry(
                    format!(
                        "upload/catalog/view/javascript/{}/{}.css",
                        code, config.style_name
                    ),
                    Artifact::Stylesheet,
                ));
            }
        }
    }

    if config.files.ocmod {
        entries.push(entry("install.xml".to_string(), Artifact::Manifest));
    }

    entries
}

// ============================================================================
// Textual rendering
// ============================================================================

struct TreeNode {
    label: String,
    is_dir: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn dir(label: &str) -> Self {
        Self {
            label: label.to_string(),
            is_dir: true,
            children: Vec::new(),
        }
    }

    fn insert(&mut self, segments: &[&str]) {
        let (head, rest) = match segments.split_first() {
            Some(split) => split,
            None => return,
        };

        if rest.is_empty() {
            self.children.push(TreeNode {
                label: head.to_string(),
                is_dir: false,
                children: Vec::new(),
            });
            return;
        }

        let child = match self
            .children
            .iter_mut()
            .find(|c| c.is_dir && c.label == *head)
        {
            Some(existing) => existing,
            None => {
                self.children.push(TreeNode::dir(head));
                self.children.last_mut().unwrap()
            }
        };
        child.insert(rest);
    }

    /// Join chains of single-child directories into compound labels like
    /// `controller/extension/module/`.
    fn collapse(&mut self) {
        while self.is_dir && self.children.len() == 1 && self.children[0].is_dir {
            let child = self.children.remove(0);
            self.label = format!("{}/{}", self.label, child.label);
            self.children = child.children;
        }
        for child in &mut self.children {
            child.collapse();
        }
    }

    fn write(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.label);
        if self.is_dir {
            out.push('/');
        }
        out.push('\n');
        for child in &self.children {
            child.write(depth + 1, out);
        }
    }
}

/// Render the plan as an indented tree headed by the archive name.
///
/// The structural levels (`upload/`, `admin/`, `catalog/`) always print
/// as their own lines; collapsing applies below them.
pub fn render_tree(config: &ExtensionConfig, entries: &[PlanEntry]) -> String {
    let mut root = TreeNode::dir("");
    for e in entries {
        let segments: Vec<&str> = e.path.split('/').collect();
        root.insert(&segments);
    }
    for top in &mut root.children {
        for section in &mut top.children {
            for node in &mut section.children {
                node.collapse();
            }
        }
    }

    let mut out = format!("{}.ocmod.zip\n", config.codename);
    for child in &root.children {
        child.write(1, &mut out);
    }
    out
}
