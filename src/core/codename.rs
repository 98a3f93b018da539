//! Codename normalization.
//!
//! Display names become snake_case codenames safe for use as both a path
//! segment and a PHP identifier fragment. Two passes exist on purpose:
//! `normalize` is the automatic derivation from a display name, `sanitize`
//! is the weaker filter applied to a codename the user typed directly.

/// Transliterate one lowercase Cyrillic character. Soft and hard signs
/// map to nothing; everything outside the table passes through unchanged.
fn transliterate(ch: char, out: &mut String) {
    match ch {
        'а' => out.push('a'),
        'б' => out.push('b'),
        'в' => out.push('v'),
        'г' => out.push('g'),
        'д' => out.push('d'),
        'е' => out.push('e'),
        'ё' => out.push_str("yo"),
        'ж' => out.push_str("zh"),
        'з' => out.push('z'),
        'и' => out.push('i'),
        'й' => out.push('y'),
        'к' => out.push('k'),
        'л' => out.push('l'),
        'м' => out.push('m'),
        'н' => out.push('n'),
        'о' => out.push('o'),
        'п' => out.push('p'),
        'р' => out.push('r'),
        'с' => out.push('s'),
        'т' => out.push('t'),
        'у' => out.push('u'),
        'ф' => out.push('f'),
        'х' => out.push_str("kh"),
        'ц' => out.push_str("ts"),
        'ч' => out.push_str("ch"),
        'ш' => out.push_str("sh"),
        'щ' => out.push_str("shch"),
        'ъ' => {}
        'ы' => out.push('y'),
        'ь' => {}
        'э' => out.push('e'),
        'ю' => out.push_str("yu"),
        'я' => out.push_str("ya"),
        other => out.push(other),
    }
}

/// Derive a snake_case codename from free-form display text.
///
/// Stages, each over the output of the previous: lowercase, transliterate
/// Cyrillic, collapse whitespace/hyphen runs to one underscore, drop
/// everything outside `[a-z0-9_]`, collapse underscore runs, trim
/// underscores. Empty input yields an empty codename; callers substitute
/// the session default when the result is used downstream.
pub fn normalize(text: &str) -> String {
    let mut latin = String::with_capacity(text.len());
    for ch in text.chars() {
        for lower in ch.to_lowercase() {
            transliterate(lower, &mut latin);
        }
    }

    let mut out = String::with_capacity(latin.len());
    let mut prev_was_underscore = false;

    for ch in latin.chars() {
        let normalized = match ch {
            'a'..='z' | '0'..='9' => Some(ch),
            '_' => Some('_'),
            _ if ch.is_whitespace() || ch == '-' => Some('_'),
            _ => None,
        };

        if let Some(c) = normalized {
            if c == '_' {
                if out.is_empty() || prev_was_underscore {
                    continue;
                }
                out.push('_');
                prev_was_underscore = true;
            } else {
                out.push(c);
                prev_was_underscore = false;
            }
        }
    }

    while out.ends_with('_') {
        out.pop();
    }

    out
}

/// Filter a manually-typed codename: lowercase, drop everything outside
/// `[a-z0-9_]`. Deliberately weaker than `normalize` — no transliteration
/// and no underscore collapsing, so a typed `a__b` survives as typed.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic_name() {
        assert_eq!(normalize("My Module"), "my_module");
    }

    #[test]
    fn normalize_transliterates_cyrillic() {
        assert_eq!(normalize("Заголовок Баннера"), "zagolovok_bannera");
    }

    #[test]
    fn normalize_handles_multichar_transliterations() {
        assert_eq!(normalize("Жёлтый ящик"), "zhyoltyy_yashchik");
    }

    #[test]
    fn normalize_drops_soft_and_hard_signs() {
        assert_eq!(normalize("Объявление"), "obyavlenie");
        assert_eq!(normalize("Модуль"), "modul");
    }

    #[test]
    fn normalize_collapses_mixed_space_hyphen_runs() {
        assert_eq!(normalize("foo - bar"), "foo_bar");
        assert_eq!(normalize("a \t- -  b"), "a_b");
    }

    #[test]
    fn normalize_strips_special_chars() {
        assert_eq!(normalize("Hello! @World#"), "hello_world");
    }

    #[test]
    fn normalize_collapses_underscores_and_trims() {
        assert_eq!(normalize("__foo__bar__"), "foo_bar");
        assert_eq!(normalize("!leading junk!"), "leading_junk");
    }

    #[test]
    fn normalize_preserves_numbers() {
        assert_eq!(normalize("Banner v2"), "banner_v2");
    }

    #[test]
    fn normalize_empty_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!@#$%"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in [
            "My Module",
            "Заголовок Баннера",
            "foo--bar__baz",
            "  spaced  ",
            "",
            "a1_b2-c3 d4",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn normalize_output_stays_in_character_class() {
        for input in ["Ёлка & ёж", "a--b  c__d", "x!y?z", "Привет, мир!"] {
            let out = normalize(input);
            assert!(out.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_')));
            assert!(!out.starts_with('_'));
            assert!(!out.ends_with('_'));
            assert!(!out.contains("__"));
        }
    }

    #[test]
    fn sanitize_lowercases_and_strips() {
        assert_eq!(sanitize("Foo  Bar"), "foobar");
        assert_eq!(sanitize("My-Module!"), "mymodule");
    }

    #[test]
    fn sanitize_keeps_underscore_runs() {
        // The manual pass is weaker than normalize on purpose.
        assert_eq!(sanitize("a__b"), "a__b");
        assert_eq!(normalize("a__b"), "a_b");
    }

    #[test]
    fn sanitize_does_not_transliterate() {
        assert_eq!(sanitize("Баннер"), "");
    }
}
