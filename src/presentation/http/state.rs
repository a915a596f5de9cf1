use crate::application::services::ApplicationServices;
use crate::config::StorageMode;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub mode: StorageMode,
}
