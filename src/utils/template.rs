//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const NAME: &'static str = "name";
    pub const CODENAME: &'static str = "codename";
    pub const TYPE: &'static str = "type";
    pub const VERSION: &'static str = "version";
    pub const AUTHOR: &'static str = "author";
    pub const CLASS_NAME: &'static str = "className";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render(
            "class {{className}} { /* {{codename}} + {{codename}} */ }",
            &[
                (TemplateVars::CLASS_NAME, "ControllerExtensionModuleFoo"),
                (TemplateVars::CODENAME, "foo"),
            ],
        );
        assert_eq!(out, "class ControllerExtensionModuleFoo { /* foo + foo */ }");
    }

    #[test]
    fn render_leaves_unknown_placeholders_alone() {
        assert_eq!(render("{{other}}", &[("name", "x")]), "{{other}}");
    }
}
