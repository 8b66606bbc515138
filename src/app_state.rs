use std::sync::Arc;

use crate::config;
use crate::db::Store;
use crate::i18n::TranslationStore;

#[derive(Clone)]
pub struct AppState {
    pub env: config::Config,
    pub store: Arc<Store>,
    pub translations: Arc<TranslationStore>,
}

impl AppState {
    pub fn new(env: config::Config, store: Store) -> Self {
        let translations = TranslationStore::new(env.app.translations_dir.clone());
        Self {
            env,
            store: Arc::new(store),
            translations: Arc::new(translations),
        }
    }
}
