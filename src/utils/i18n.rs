use tracing::warn;

/// Locales shipped in `locales/`
pub const AVAILABLE_LOCALES: &[&str] = &["en"];

/// Switch the locale used for user-facing messages.
/// Unknown locales fall back to English.
pub fn set_locale(locale: &str) {
    if AVAILABLE_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        warn!("Locale '{}' is not available, using 'en'", locale);
        rust_i18n::set_locale("en");
    }
}
