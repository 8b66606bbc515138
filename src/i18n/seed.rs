use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::SupportedLanguage;

/// Minimal English dictionary written for every language
const SEED_ENTRIES: &[(&str, &str)] = &[
    ("app_name", "ASHA EHR"),
    ("dashboard", "Dashboard"),
    ("patients", "Patients"),
    ("profile", "Profile"),
    ("logout", "Logout"),
    ("language", "Language"),
];

/// Write `<code>.json` for every supported language into `dir`, creating the
/// directory when needed. Existing files are overwritten.
pub fn seed_translations(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create translations directory: {:?}", dir))?;
        tracing::info!("Created translations directory {:?}", dir);
    }

    let dictionary: BTreeMap<&str, &str> = SEED_ENTRIES.iter().copied().collect();
    let content = to_pretty_json(&dictionary)?;

    let mut written = Vec::with_capacity(SupportedLanguage::all().len());
    for language in SupportedLanguage::all() {
        let path = dir.join(format!("{}.json", language.code()));
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write dictionary: {:?}", path))?;
        tracing::info!("Created {:?}", path);
        written.push(path);
    }

    Ok(written)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize dictionary")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationStore;

    #[test]
    fn writes_one_file_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("translations");

        let written = seed_translations(&target).unwrap();

        assert_eq!(written.len(), SupportedLanguage::all().len());
        for language in SupportedLanguage::all() {
            assert!(target.join(format!("{}.json", language.code())).is_file());
        }
    }

    #[test]
    fn seeded_files_load_and_use_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        seed_translations(dir.path()).unwrap();

        let raw = fs::read_to_string(dir.path().join("hi.json")).unwrap();
        assert!(raw.contains("\n    \"app_name\": \"ASHA EHR\""));

        let store = TranslationStore::new(dir.path());
        let dictionary = store.load(SupportedLanguage::Hindi).unwrap();
        assert_eq!(dictionary.len(), SEED_ENTRIES.len());
        assert_eq!(store.lookup(SupportedLanguage::Hindi, "reports", &[]), "Reports");
    }
}
