/// The two display languages of the screens. Japanese is the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Name of the app as it appears in document titles.
    pub fn app_name(self) -> &'static str {
        match self {
            Self::Ja => "パーキングアプリ",
            Self::En => "Parking App",
        }
    }

    /// Seconds remaining on the resend countdown, e.g. `(59秒)` or `(59s)`.
    pub fn format_seconds(self, seconds: u32) -> String {
        match self {
            Self::Ja => format!("({seconds}秒)"),
            Self::En => format!("({seconds}s)"),
        }
    }

    pub fn language(self) -> &'static dyn Language {
        match self {
            Self::Ja => &Japanese,
            Self::En => &English,
        }
    }
}

/// A label carried in both locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub ja: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.ja,
            Locale::En => &self.en,
        }
    }
}

/// Swaps the app name inside a title for the one of `locale`.
/// Only the first occurrence is replaced; titles without the other name are returned as-is.
pub fn localize_title(title: &str, locale: Locale) -> String {
    title.replacen(locale.toggle().app_name(), locale.app_name(), 1)
}

/// Strings of the terminal chrome around the screens.
pub trait Language {
    fn focus_hint(&self) -> &'static str;
    fn activate_hint(&self) -> &'static str;
    fn lang_toggle_hint(&self) -> &'static str;
    fn quit_hint(&self) -> &'static str;
    fn too_small(&self) -> &'static str;
}

pub struct Japanese;
impl Language for Japanese {
    fn focus_hint(&self) -> &'static str { "Tab: 移動" }
    fn activate_hint(&self) -> &'static str { "Enter: 決定" }
    fn lang_toggle_hint(&self) -> &'static str { "Ctrl+L: 言語切替" }
    fn quit_hint(&self) -> &'static str { "Ctrl+Q: 終了" }
    fn too_small(&self) -> &'static str { "ウィンドウが小さすぎます。60x24 以上に広げてください。" }
}

pub struct English;
impl Language for English {
    fn focus_hint(&self) -> &'static str { "Tab: move" }
    fn activate_hint(&self) -> &'static str { "Enter: select" }
    fn lang_toggle_hint(&self) -> &'static str { "Ctrl+L: language" }
    fn quit_hint(&self) -> &'static str { "Ctrl+Q: quit" }
    fn too_small(&self) -> &'static str { "Window too small, resize to at least 60x24." }
}
