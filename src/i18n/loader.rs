use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::i18n::language::SupportedLanguage;
use crate::i18n::localizer::Translator;

pub type Dictionary = HashMap<String, String>;

/// Reads per-language JSON dictionaries from a directory.
///
/// Dictionaries are read on every resolution so that files written by the
/// seeder while the server runs are picked up without a restart.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    dir: PathBuf,
}

impl TranslationStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the dictionary file for a language
    pub fn path_for(&self, language: SupportedLanguage) -> PathBuf {
        self.dir.join(format!("{}.json", language.code()))
    }

    /// Load the dictionary file for a language.
    ///
    /// Returns `None` when the file is absent or unusable, in which case the
    /// built-in defaults stand in for the whole dictionary.
    pub fn load(&self, language: SupportedLanguage) -> Option<Arc<Dictionary>> {
        let path = self.path_for(language);
        if !path.exists() {
            tracing::debug!("No dictionary at {:?}, using built-in defaults", path);
            return None;
        }

        match read_dictionary(&path) {
            Ok(dictionary) => Some(Arc::new(dictionary)),
            Err(e) => {
                tracing::warn!("Ignoring dictionary {:?}: {:#}", path, e);
                None
            }
        }
    }

    /// Resolve the dictionary for a language into a translator
    pub fn translator(&self, language: SupportedLanguage) -> Translator {
        Translator::new(language, self.load(language))
    }

    /// Translate a single key, applying positional arguments when given
    pub fn lookup(&self, language: SupportedLanguage, key: &str, args: &[&str]) -> String {
        self.translator(language).format(key, args)
    }
}

/// Non-string values are skipped; the rest of the file still applies
fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    let raw: HashMap<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {:?}", path))?;

    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            other => {
                tracing::debug!("Skipping non-string value for '{}' in {:?}: {}", key, path, other);
                None
            }
        })
        .collect())
}
