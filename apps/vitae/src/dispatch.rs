//! Single-threaded UI event dispatch.
//!
//! Every state change (language button, tag button, theme picker) arrives as
//! a `UiEvent` and is applied to the engine synchronously, one at a time.

use serde::Deserialize;
use tracing::debug;

use crate::engine::filter::ALL;
use crate::engine::Engine;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    SelectLanguage(String),
    ToggleTag(String),
    SelectTheme(String),
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    engine: Engine,
}

impl Dispatcher {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::SelectLanguage(code) => self.engine.set_language(&code),
            UiEvent::ToggleTag(tag) => self.engine.toggle_tag(&tag),
            UiEvent::SelectTheme(name) => self.engine.set_theme(&name),
        }
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = UiEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Events that bring a freshly initialized engine to the requested view:
/// language, theme, a filter reset, then each tag in order.
pub fn view_events(language: &str, theme: &str, tags: &[String]) -> Vec<UiEvent> {
    let mut events = vec![
        UiEvent::SelectLanguage(language.to_string()),
        UiEvent::SelectTheme(theme.to_string()),
    ];
    if !tags.is_empty() {
        events.push(UiEvent::ToggleTag(ALL.to_string()));
        events.extend(tags.iter().cloned().map(UiEvent::ToggleTag));
    }
    events
}
