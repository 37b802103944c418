use std::sync::Arc;

use tokio::sync::Mutex;

use crate::dispatch::Dispatcher;
use crate::render::Template;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one engine instance. Handlers lock it for the length of a single
    /// event, so events are applied one at a time in arrival order.
    pub dispatcher: Arc<Mutex<Dispatcher>>,
    /// Résumé page the engine's regions are written into.
    pub template: Arc<Template>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, template: Template) -> Self {
        Self {
            dispatcher: Arc::new(Mutex::new(dispatcher)),
            template: Arc::new(template),
        }
    }
}
