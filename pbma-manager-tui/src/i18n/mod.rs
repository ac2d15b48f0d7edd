//! Internationalisation
//!
//! Static translation tables selected once at startup from the config file.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod ja_jp;
pub mod keys;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 日本語
    #[default]
    JaJp,
    /// English (US)
    EnUs,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::JaJp, Language::EnUs]
    }

    /// Display name written in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            Language::JaJp => "日本語",
            Language::EnUs => "English",
        }
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::JaJp => "ja-JP",
            Language::EnUs => "en-US",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ja-JP" | "ja" => Some(Language::JaJp),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::JaJp => &ja_jp::TRANSLATIONS,
            Language::EnUs => &en_us::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = JaJp

pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::JaJp => 0,
        Language::EnUs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::JaJp,
    }
}

/// Substitute `{key}` placeholders of a translation template.
pub fn fill(template: &str, args: &[(&str, &dyn std::fmt::Display)]) -> String {
    args.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), &value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("ja"), Some(Language::JaJp));
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn fill_replaces_every_placeholder() {
        let text = fill(
            ja_jp::TRANSLATIONS.messages.register_failed,
            &[("n", &3), ("error", &"IO error: denied")],
        );
        assert_eq!(text, "窓 3 の登録に失敗しました: IO error: denied");
    }

    #[test]
    fn tables_differ_per_language() {
        assert_ne!(
            Language::JaJp.translations().messages.sid_required,
            Language::EnUs.translations().messages.sid_required
        );
    }
}
