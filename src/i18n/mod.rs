pub mod defaults;
pub mod helpers;
pub mod language;
pub mod loader;
pub mod localizer;
pub mod seed;

pub use helpers::I18n;
pub use language::SupportedLanguage;
pub use loader::{Dictionary, TranslationStore};
pub use localizer::Translator;
