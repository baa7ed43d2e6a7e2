//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Korean
    KoKR,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::KoKR => "한국어",
        }
    }

    /// Resolve a language code ("en", "ko", "ko-KR", ...); unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "ko" => Locale::KoKR,
            _ => Locale::EnUS,
        }
    }

    /// Short language code used in the settings file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::KoKR => "ko",
        }
    }
}

/// Translation resources
type Translations = HashMap<&'static str, (&'static str, &'static str)>;

static TRANSLATIONS: OnceLock<Translations> = OnceLock::new();

/// Initialize translations (key -> (en, ko))
fn init_translations() -> Translations {
    let mut map = HashMap::new();

    // Button
    map.insert("button-loading", ("Loading...", "로딩 중..."));

    // Modal
    map.insert("modal-close", ("Close", "닫기"));
    map.insert("modal-cancel", ("Cancel", "취소"));
    map.insert("modal-confirm", ("Confirm", "확인"));

    // Gallery
    map.insert("gallery-title", ("UI Kit Gallery", "UI 키트 갤러리"));
    map.insert("gallery-buttons", ("Buttons", "버튼"));
    map.insert("gallery-inputs", ("Inputs", "입력"));
    map.insert("gallery-modals", ("Modals", "모달"));
    map.insert("gallery-open-modal", ("Open modal", "모달 열기"));
    map.insert("gallery-open-strict-modal", ("Open strict modal", "엄격한 모달 열기"));
    map.insert("gallery-modal-title", ("Confirm", "확인"));
    map.insert(
        "gallery-modal-body",
        ("Press Escape or click outside to close.", "Esc 키를 누르거나 바깥을 클릭하면 닫힙니다."),
    );
    map.insert(
        "gallery-strict-modal-body",
        ("Only the close button or Escape closes this dialog.", "닫기 버튼이나 Esc 키로만 닫을 수 있습니다."),
    );
    map.insert("gallery-email-label", ("Email", "이메일"));
    map.insert("gallery-email-helper", ("We never share your email.", "이메일은 공유되지 않습니다."));
    map.insert("gallery-email-error", ("Enter a valid email address.", "올바른 이메일 주소를 입력하세요."));
    map.insert("gallery-name-label", ("Name", "이름"));

    map
}

/// Get translations
fn translations() -> &'static Translations {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, ko)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::KoKR => SharedString::from(ko),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
