use crate::store::EntryLog;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Session-scoped state owned by the server. The log lives only as long as
/// the process; nothing persists it.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Mutex<EntryLog>>,
}

impl AppState {
    pub fn new(log: EntryLog) -> Self {
        Self {
            log: Arc::new(Mutex::new(log)),
        }
    }
}
