use std::sync::Arc;

use crate::i18n::defaults::DEFAULT_TRANSLATIONS;
use crate::i18n::language::SupportedLanguage;
use crate::i18n::loader::Dictionary;

/// Dictionary resolved for one language, handed to templates.
///
/// Lookups go resolved dictionary, then built-in defaults, then the key
/// itself, so a label is never blank.
#[derive(Debug, Clone)]
pub struct Translator {
    language: SupportedLanguage,
    dictionary: Option<Arc<Dictionary>>,
}

impl Translator {
    pub fn new(language: SupportedLanguage, dictionary: Option<Arc<Dictionary>>) -> Self {
        Self {
            language,
            dictionary,
        }
    }

    /// Translator backed only by the built-in dictionary
    pub fn builtin(language: SupportedLanguage) -> Self {
        Self::new(language, None)
    }

    pub fn get(&self, key: &str) -> String {
        self.resolve(key).to_string()
    }

    /// Translate and substitute positional `%s` / `%d` arguments.
    ///
    /// Falls back to the unformatted translation when the arguments do not
    /// fit the placeholders.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let template = self.resolve(key);
        if args.is_empty() {
            return template.to_string();
        }

        match format_positional(template, args) {
            Some(formatted) => formatted,
            None => {
                tracing::warn!("Formatting failed for key '{}' with {} args", key, args.len());
                template.to_string()
            }
        }
    }

    pub fn language(&self) -> SupportedLanguage {
        self.language
    }

    pub fn language_code(&self) -> &'static str {
        self.language.code()
    }

    pub fn languages(&self) -> &'static [SupportedLanguage] {
        SupportedLanguage::all()
    }

    fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(value) = self.dictionary.as_ref().and_then(|d| d.get(key)) {
            return value;
        }
        DEFAULT_TRANSLATIONS.get(key).copied().unwrap_or(key)
    }
}

/// printf-style substitution supporting `%s`, `%d` and `%%`.
///
/// Returns `None` on arity mismatch, an unknown conversion, or a `%d`
/// argument that is not an integer.
pub fn format_positional(template: &str, args: &[&str]) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '%' => out.push('%'),
            's' => out.push_str(remaining.next()?),
            'd' => {
                let value: i64 = remaining.next()?.trim().parse().ok()?;
                out.push_str(&value.to_string());
            }
            _ => return None,
        }
    }

    if remaining.next().is_some() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn hindi() -> Translator {
        let dictionary: Dictionary = HashMap::from([
            ("dashboard".to_string(), "डैशबोर्ड".to_string()),
            ("welcome_user".to_string(), "स्वागत है, %s".to_string()),
        ]);
        Translator::new(SupportedLanguage::Hindi, Some(Arc::new(dictionary)))
    }

    #[test]
    fn resolves_through_three_levels() {
        let t = hindi();
        assert_eq!(t.get("dashboard"), "डैशबोर्ड");
        assert_eq!(t.get("reports"), "Reports");
        assert_eq!(t.get("missing_key"), "missing_key");
    }

    #[test]
    fn formats_string_arguments() {
        assert_eq!(hindi().format("welcome_user", &["Priya"]), "स्वागत है, Priya");
        assert_eq!(
            Translator::builtin(SupportedLanguage::English).format("welcome_user", &["Priya"]),
            "Welcome, Priya"
        );
    }

    #[test]
    fn arity_mismatch_returns_unformatted() {
        let t = Translator::builtin(SupportedLanguage::English);
        assert_eq!(t.format("welcome_user", &["a", "b"]), "Welcome, %s");
        assert_eq!(t.format("dashboard", &["extra"]), "Dashboard");
    }

    #[test]
    fn format_positional_handles_conversions() {
        assert_eq!(format_positional("%d visits", &["3"]).as_deref(), Some("3 visits"));
        assert_eq!(format_positional("100%%", &[]).as_deref(), Some("100%"));
        assert_eq!(format_positional("%d visits", &["three"]), None);
        assert_eq!(format_positional("%x", &["1"]), None);
        assert_eq!(format_positional("%s and %s", &["one"]), None);
        assert_eq!(format_positional("trailing %", &[]), None);
    }
}
