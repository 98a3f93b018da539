//! Admin-side artifact templates: settings controller, model stub, and
//! the Twig settings form.

use crate::classname::{class_name, ClassPrefix};
use crate::extension::ExtensionConfig;
use crate::field::{Field, FieldKind};
use crate::utils::template::{render, TemplateVars};

const CONTROLLER: &str = r#"<?php
class {{className}} extends Controller {
	private $error = array();

	public function index() {
		$this->load->language('extension/{{type}}/{{codename}}');

		$this->document->setTitle($this->language->get('heading_title'));

		$this->load->model('setting/setting');

		if (($this->request->server['REQUEST_METHOD'] == 'POST') && $this->validate()) {
			{{persistence}}

			$this->session->data['success'] = $this->language->get('text_success');

			$this->response->redirect($this->url->link('marketplace/extension', 'user_token=' . $this->session->data['user_token'] . '&type={{type}}', true));
		}

		if (isset($this->error['warning'])) {
			$data['error_warning'] = $this->error['warning'];
		} else {
			$data['error_warning'] = '';
		}

		$data['breadcrumbs'] = array();

		$data['breadcrumbs'][] = array(
			'text' => $this->language->get('text_home'),
			'href' => $this->url->link('common/dashboard', 'user_token=' . $this->session->data['user_token'], true)
		);

		$data['breadcrumbs'][] = array(
			'text' => $this->language->get('text_extension'),
			'href' => $this->url->link('marketplace/extension', 'user_token=' . $this->session->data['user_token'] . '&type={{type}}', true)
		);

		$data['breadcrumbs'][] = array(
			'text' => $this->language->get('heading_title'),
			'href' => $this->url->link('extension/{{type}}/{{codename}}', 'user_token=' . $this->session->data['user_token'], true)
		);

		$data['action'] = $this->url->link('extension/{{type}}/{{codename}}', 'user_token=' . $this->session->data['user_token'], true);

		$data['cancel'] = $this->url->link('marketplace/extension', 'user_token=' . $this->session->data['user_token'] . '&type={{type}}', true);

{{fieldBlocks}}
		if (isset($this->request->post['{{codename}}_status'])) {
			$data['{{codename}}_status'] = $this->request->post['{{codename}}_status'];
		} else {
			$data['{{codename}}_status'] = $this->config->get('{{codename}}_status');
		}

		$data['header'] = $this->load->controller('common/header');
		$data['column_left'] = $this->load->controller('common/column_left');
		$data['footer'] = $this->load->controller('common/footer');

		$this->response->setOutput($this->load->view('extension/{{type}}/{{codename}}', $data));
	}

	protected function validate() {
		if (!$this->user->hasPermission('modify', 'extension/{{type}}/{{codename}}')) {
			$this->error['warning'] = $this->language->get('error_permission');
		}

		return !$this->error;
	}
}
"#;

const PERSIST_SINGLE: &str =
    r#"$this->model_setting_setting->editSetting('{{codename}}', $this->request->post);"#;

const PERSIST_MULTI: &str = r#"if (!isset($this->request->get['module_id'])) {
				$this->model_setting_module->addModule('{{codename}}', $this->request->post);
			} else {
				$this->model_setting_module->editModule($this->request->get['module_id'], $this->request->post);
			}"#;

/// Admin settings controller. Multi-module extensions persist through the
/// module table (add/edit per instance); everything else writes a single
/// settings record.
pub fn controller(config: &ExtensionConfig, fields: &[Field]) -> String {
    let extension_type = config.extension_type.as_str();
    let class = class_name(
        ClassPrefix::Controller,
        &config.codename,
        extension_type,
        None,
    );

    let persistence = render(
        if config.is_multi_module {
            PERSIST_MULTI
        } else {
            PERSIST_SINGLE
        },
        &[(TemplateVars::CODENAME, config.codename.as_str())],
    );

    let field_blocks = fields
        .iter()
        .map(|field| request_read_block(&field.key))
        .collect::<Vec<_>>()
        .join("\n");

    render(
        CONTROLLER,
        &[
            (TemplateVars::CLASS_NAME, class.as_str()),
            (TemplateVars::TYPE, extension_type),
            (TemplateVars::CODENAME, config.codename.as_str()),
            ("persistence", persistence.as_str()),
            ("fieldBlocks", field_blocks.as_str()),
        ],
    )
}

/// One request/config read block, as emitted per field.
fn request_read_block(key: &str) -> String {
    format!(
        "\t\tif (isset($this->request->post['{key}'])) {{\n\t\t\t$data['{key}'] = $this->request->post['{key}'];\n\t\t}} else {{\n\t\t\t$data['{key}'] = $this->config->get('{key}');\n\t\t}}\n",
        key = key
    )
}

const MODEL: &str = r#"<?php
class {{className}} extends Model {
	public function install() {
		// install logic
	}

	public function uninstall() {
		// uninstall logic
	}
}
"#;

/// Admin model stub with empty lifecycle operations.
pub fn model(config: &ExtensionConfig) -> String {
    let class = class_name(
        ClassPrefix::Model,
        &config.codename,
        config.extension_type.as_str(),
        None,
    );
    render(MODEL, &[(TemplateVars::CLASS_NAME, class.as_str())])
}

const VIEW: &str = r##"{{ header }}{{ column_left }}
<div id="content">
  <div class="page-header">
    <div class="container-fluid">
      <div class="pull-right">
        <button type="submit" form="form-module" data-toggle="tooltip" title="{{ button_save }}" class="btn btn-primary"><i class="fa fa-save"></i></button>
        <a href="{{ cancel }}" data-toggle="tooltip" title="{{ button_cancel }}" class="btn btn-default"><i class="fa fa-reply"></i></a></div>
      <h1>{{ heading_title }}</h1>
      <ul class="breadcrumb">
        {% for breadcrumb in breadcrumbs %}
        <li><a href="{{ breadcrumb.href }}">{{ breadcrumb.text }}</a></li>
        {% endfor %}
      </ul>
    </div>
  </div>
  <div class="container-fluid">
    {% if error_warning %}
    <div class="alert alert-danger alert-dismissible"><i class="fa fa-exclamation-circle"></i> {{ error_warning }}
      <button type="button" class="close" data-dismiss="alert">&times;</button>
    </div>
    {% endif %}
    <div class="panel panel-default">
      <div class="panel-heading">
        <h3 class="panel-title"><i class="fa fa-pencil"></i> {{ text_edit }}</h3>
      </div>
      <div class="panel-body">
        <form action="{{ action }}" method="post" enctype="multipart/form-data" id="form-module" class="form-horizontal">
{{fieldGroups}}
          <div class="form-group">
            <label class="col-sm-2 control-label" for="input-status">{{ entry_status }}</label>
            <div class="col-sm-10">
              <select name="{{codename}}_status" id="input-status" class="form-control">
                {% if {{codename}}_status %}
                <option value="1" selected="selected">{{ text_enabled }}</option>
                <option value="0">{{ text_disabled }}</option>
                {% else %}
                <option value="1">{{ text_enabled }}</option>
                <option value="0" selected="selected">{{ text_disabled }}</option>
                {% endif %}
              </select>
            </div>
          </div>
        </form>
      </div>
    </div>
  </div>
</div>
{{ footer }}"##;

/// Admin settings form: one labeled input per field, shaped by its kind,
/// plus the status dropdown.
pub fn view(config: &ExtensionConfig, fields: &[Field]) -> String {
    let field_groups = fields
        .iter()
        .map(|field| form_group(field))
        .collect::<Vec<_>>()
        .join("\n");

    render(
        VIEW,
        &[
            ("fieldGroups", field_groups.as_str()),
            (TemplateVars::CODENAME, config.codename.as_str()),
        ],
    )
}

fn form_group(field: &Field) -> String {
    let key = &field.key;
    let input = match field.kind {
        FieldKind::Textarea => format!(
            r##"<textarea name="{key}" id="input-{key}" class="form-control">{{{{ {key} }}}}</textarea>"##,
            key = key
        ),
        FieldKind::Select => format!(
            r##"<select name="{key}" id="input-{key}" class="form-control">
                <option value="1">Option 1</option>
                <option value="0">Option 2</option>
              </select>"##,
            key = key
        ),
        FieldKind::Toggle => format!(
            r##"<select name="{key}" id="input-{key}" class="form-control">
                {{% if {key} %}}
                <option value="1" selected="selected">{{{{ text_enabled }}}}</option>
                <option value="0">{{{{ text_disabled }}}}</option>
                {{% else %}}
                <option value="1">{{{{ text_enabled }}}}</option>
                <option value="0" selected="selected">{{{{ text_disabled }}}}</option>
                {{% endif %}}
              </select>"##,
            key = key
        ),
        FieldKind::Text | FieldKind::Image => format!(
            r##"<input type="text" name="{key}" value="{{{{ {key} }}}}" id="input-{key}" class="form-control" />"##,
            key = key
        ),
    };

    format!(
        r##"          <div class="form-group">
            <label class="col-sm-2 control-label" for="input-{key}">{{{{ entry_{key} }}}}</label>
            <div class="col-sm-10">
              {input}
            </div>
          </div>"##,
        key = key,
        input = input
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionType;

    fn config() -> ExtensionConfig {
        ExtensionConfig {
            codename: "banner_slider".to_string(),
            ..Default::default()
        }
        .resolved()
    }

    fn text_field(key: &str) -> Field {
        Field {
            id: 1,
            kind: FieldKind::Text,
            label: key.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn controller_embeds_class_name_and_route() {
        let out = controller(&config(), &[]);
        assert!(out.contains("class ControllerExtensionModuleBannerSlider extends Controller"));
        assert!(out.contains("extension/module/banner_slider"));
        assert!(out.contains("$this->model_setting_setting->editSetting('banner_slider'"));
        assert!(!out.contains("addModule"));
    }

    #[test]
    fn controller_multi_module_branch_uses_module_table() {
        let mut cfg = config();
        cfg.is_multi_module = true;
        let out = controller(&cfg, &[]);
        assert!(out.contains("$this->model_setting_module->addModule('banner_slider'"));
        assert!(out.contains("editModule"));
        assert!(!out.contains("editSetting"));
    }

    #[test]
    fn controller_emits_one_read_block_per_field_plus_status() {
        let fields = vec![text_field("banner_title"), text_field("show_mobile")];
        let out = controller(&config(), &fields);
        assert!(out.contains("$data['banner_title'] = $this->request->post['banner_title'];"));
        assert!(out.contains("$data['show_mobile'] = $this->config->get('show_mobile');"));
        assert!(out.contains("$data['banner_slider_status'] = $this->config->get('banner_slider_status');"));
    }

    #[test]
    fn model_is_a_lifecycle_stub() {
        let out = model(&config());
        assert!(out.contains("class ModelExtensionModuleBannerSlider extends Model"));
        assert!(out.contains("public function install()"));
        assert!(out.contains("public function uninstall()"));
    }

    #[test]
    fn view_shapes_inputs_by_kind() {
        let fields = vec![
            Field {
                id: 1,
                kind: FieldKind::Textarea,
                label: "Description".to_string(),
                key: "desc".to_string(),
            },
            Field {
                id: 2,
                kind: FieldKind::Toggle,
                label: "Show".to_string(),
                key: "show".to_string(),
            },
            Field {
                id: 3,
                kind: FieldKind::Image,
                label: "Image".to_string(),
                key: "img".to_string(),
            },
        ];
        let out = view(&config(), &fields);
        assert!(out.contains(r#"<textarea name="desc" id="input-desc""#));
        assert!(out.contains("{% if show %}"));
        assert!(out.contains(r#"<input type="text" name="img" value="{{ img }}""#));
        assert!(out.contains(r#"<select name="banner_slider_status" id="input-status""#));
    }

    #[test]
    fn view_for_payment_config_keeps_status_select() {
        let cfg = ExtensionConfig {
            extension_type: ExtensionType::Payment,
            codename: "my_pay".to_string(),
            ..Default::default()
        }
        .resolved();
        let out = view(&cfg, &[]);
        assert!(out.contains(r#"name="my_pay_status""#));
    }

    #[test]
    fn templates_are_deterministic() {
        let fields = vec![text_field("a"), text_field("b")];
        assert_eq!(controller(&config(), &fields), controller(&config(), &fields));
        assert_eq!(view(&config(), &fields), view(&config(), &fields));
        assert_eq!(model(&config()), model(&config()));
    }
}
