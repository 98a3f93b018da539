//! Language file templates, hand-authored for the two supported locales.

use crate::extension::{ExtensionConfig, ExtensionType};
use crate::field::Field;

/// Locale of a generated language file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Ru,
}

impl Locale {
    /// Language directory name inside the upload tree.
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::En => "en-gb",
            Locale::Ru => "ru-ru",
        }
    }
}

/// Admin-side language file: fixed heading/success/error strings, the
/// payment/shipping extras, and one entry per field.
pub fn admin(config: &ExtensionConfig, fields: &[Field], locale: Locale) -> String {
    let is_ru = locale == Locale::Ru;

    let text_extension = if is_ru { "Расширения" } else { "Extensions" };
    let text_success = if is_ru {
        "Настройки успешно обновлены!"
    } else {
        "Success: You have modified the settings!"
    };
    let text_edit = if is_ru { "Редактировать" } else { "Edit" };
    let entry_status = if is_ru { "Статус" } else { "Status" };
    let error_permission = if is_ru {
        "У вас нет прав для изменения настроек!"
    } else {
        "Warning: You do not have permission to modify settings!"
    };

    let type_entries = match config.extension_type {
        ExtensionType::Payment => {
            if is_ru {
                "$_['entry_total']        = 'Минимальная сумма заказа';
$_['entry_order_status'] = 'Статус заказа';
$_['entry_geo_zone']     = 'Географическая зона';
$_['entry_sort_order']   = 'Порядок сортировки';

// Help
$_['help_total']         = 'Минимальная сумма заказа для активации метода оплаты.';"
            } else {
                "$_['entry_total']        = 'Total';
$_['entry_order_status'] = 'Order Status';
$_['entry_geo_zone']     = 'Geo Zone';
$_['entry_sort_order']   = 'Sort Order';

// Help
$_['help_total']         = 'The checkout total the order must reach before this payment method becomes active.';"
            }
        }
        ExtensionType::Shipping => {
            if is_ru {
                "$_['entry_cost']       = 'Стоимость';
$_['entry_tax_class']  = 'Класс налога';
$_['entry_geo_zone']   = 'Географическая зона';
$_['entry_sort_order'] = 'Порядок сортировки';"
            } else {
                "$_['entry_cost']       = 'Cost';
$_['entry_tax_class']  = 'Tax Class';
$_['entry_geo_zone']   = 'Geo Zone';
$_['entry_sort_order'] = 'Sort Order';"
            }
        }
        _ => "",
    };

    let field_entries = fields
        .iter()
        .map(|field| format!("$_['entry_{}'] = '{}';", field.key, field.label))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?php
// Heading
$_['heading_title']    = '{name}';

// Text
$_['text_extension']   = '{text_extension}';
$_['text_success']     = '{text_success}';
$_['text_edit']        = '{text_edit} {name}';

// Entry
$_['entry_status']     = '{entry_status}';
{type_entries}
{field_entries}

// Error
$_['error_permission'] = '{error_permission}';
",
        name = config.name,
        text_extension = text_extension,
        text_success = text_success,
        text_edit = text_edit,
        entry_status = entry_status,
        type_entries = type_entries,
        field_entries = field_entries,
        error_permission = error_permission,
    )
}

/// Catalog-side language file. Payment and shipping extensions expose a
/// title/description pair (the description falls back to a locale- and
/// type-specific phrase); other types expose just the heading.
pub fn catalog(config: &ExtensionConfig, locale: Locale) -> String {
    let is_ru = locale == Locale::Ru;

    if config.extension_type.has_checkout_texts() {
        let default_description = match (config.extension_type, is_ru) {
            (ExtensionType::Payment, true) => "Безопасная оплата заказа",
            (ExtensionType::Payment, false) => "Secure payment method",
            (_, true) => "Надёжная доставка заказа",
            (_, false) => "Reliable shipping method",
        };
        let description = if config.description.is_empty() {
            default_description
        } else {
            config.description.as_str()
        };

        return format!(
            "<?php
// Text
$_['text_title']       = '{name}';
$_['text_description'] = '{description}';
",
            name = config.name,
            description = description,
        );
    }

    format!(
        "<?php
// Text
$_['heading_title'] = '{name}';
",
        name = config.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    fn config(extension_type: ExtensionType) -> ExtensionConfig {
        ExtensionConfig {
            extension_type,
            codename: "my_ext".to_string(),
            ..Default::default()
        }
        .resolved()
    }

    #[test]
    fn admin_module_has_no_type_entries() {
        let out = admin(&config(ExtensionType::Module), &[], Locale::En);
        assert!(out.contains("$_['heading_title']    = 'My Module';"));
        assert!(out.contains("$_['entry_status']     = 'Status';"));
        assert!(!out.contains("entry_total"));
        assert!(!out.contains("entry_cost"));
    }

    #[test]
    fn admin_payment_gains_checkout_entries() {
        let out = admin(&config(ExtensionType::Payment), &[], Locale::En);
        assert!(out.contains("$_['entry_total']        = 'Total';"));
        assert!(out.contains("$_['help_total']"));

        let ru = admin(&config(ExtensionType::Payment), &[], Locale::Ru);
        assert!(ru.contains("$_['entry_order_status'] = 'Статус заказа';"));
    }

    #[test]
    fn admin_shipping_gains_cost_entries_without_help() {
        let out = admin(&config(ExtensionType::Shipping), &[], Locale::En);
        assert!(out.contains("$_['entry_cost']       = 'Cost';"));
        assert!(!out.contains("help_total"));
    }

    #[test]
    fn admin_emits_one_entry_per_field() {
        let fields = vec![Field {
            id: 1,
            kind: FieldKind::Text,
            label: "Заголовок баннера".to_string(),
            key: "banner_title".to_string(),
        }];
        let out = admin(&config(ExtensionType::Module), &fields, Locale::Ru);
        assert!(out.contains("$_['entry_banner_title'] = 'Заголовок баннера';"));
        assert!(out.contains("$_['error_permission'] = 'У вас нет прав для изменения настроек!';"));
    }

    #[test]
    fn catalog_payment_defaults_description_when_blank() {
        let out = catalog(&config(ExtensionType::Payment), Locale::En);
        assert!(out.contains("$_['text_title']       = 'My Module';"));
        assert!(out.contains("$_['text_description'] = 'Secure payment method';"));

        let ru = catalog(&config(ExtensionType::Payment), Locale::Ru);
        assert!(ru.contains("$_['text_description'] = 'Безопасная оплата заказа';"));
    }

    #[test]
    fn catalog_shipping_defaults_differ_from_payment() {
        let out = catalog(&config(ExtensionType::Shipping), Locale::En);
        assert!(out.contains("Reliable shipping method"));
    }

    #[test]
    fn catalog_uses_supplied_description_when_present() {
        let mut cfg = config(ExtensionType::Payment);
        cfg.description = "Pay with anything".to_string();
        let out = catalog(&cfg, Locale::En);
        assert!(out.contains("$_['text_description'] = 'Pay with anything';"));
        assert!(!out.contains("Secure payment method"));
    }

    #[test]
    fn catalog_other_types_emit_heading_only() {
        let out = catalog(&config(ExtensionType::Module), Locale::En);
        assert!(out.contains("$_['heading_title'] = 'My Module';"));
        assert!(!out.contains("text_description"));
    }

    #[test]
    fn locale_dirs_match_upload_layout() {
        assert_eq!(Locale::En.dir(), "en-gb");
        assert_eq!(Locale::Ru.dir(), "ru-ru");
    }
}
