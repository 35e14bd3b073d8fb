use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::store::{JsonFileStore, TalkerStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TalkerStore>,
    /// Serializes the load-modify-save sequence of mutating routes so two
    /// concurrent writes cannot lose each other's update. Reads stay
    /// lock-free; `save` always writes a complete document.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn init(config: &AppConfig) -> Self {
        Self::with_store(Arc::new(JsonFileStore::new(config.talker_path.clone())))
    }

    pub fn with_store(store: Arc<dyn TalkerStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
