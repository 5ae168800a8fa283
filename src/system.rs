use crate::{
    complete::CompletionOutcome,
    config::TerminalConfig,
    confirm::ActionTrigger,
    logging,
    shell::{Output, Session},
};
use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// Marker the page script turns into a screen wipe.
pub const CLEAR_MARKER: &str = "\x1b[CLEAR]";

/// Opens confirmed links in a new browser tab.
struct BrowserTrigger;

impl ActionTrigger for BrowserTrigger {
    fn trigger(&mut self, url: &str) {
        match web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank")) {
            Some(Ok(_)) => {}
            Some(Err(e)) => log::error!("window.open({}) failed: {:?}", url, e),
            None => log::error!("no window to open {}", url),
        }
    }
}

pub fn render(outputs: &[Output]) -> String {
    outputs
        .iter()
        .map(|o| match o {
            Output::Line(text) => text.as_str(),
            Output::Clear => CLEAR_MARKER,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[wasm_bindgen]
pub struct Terminal {
    session: Session,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        logging::init(LevelFilter::Info);
        Terminal {
            session: Session::new(),
        }
    }

    /// Install `commands.json`. Returns the greeting, or an empty string when
    /// the document is unusable, in which case the table stays unloaded.
    #[wasm_bindgen]
    pub fn install_config_json(&mut self, json: &str) -> String {
        match TerminalConfig::from_json(json) {
            Ok(config) => {
                self.session.install_config(config);
                render(&self.session.greeting())
            }
            Err(e) => {
                log::error!("ignoring command table: {}", e);
                String::new()
            }
        }
    }

    #[wasm_bindgen]
    pub fn is_ready(&self) -> bool {
        self.session.is_ready()
    }

    #[wasm_bindgen]
    pub fn greeting(&self) -> String {
        render(&self.session.greeting())
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.session.prompt().to_string()
    }

    #[wasm_bindgen]
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.session.is_awaiting_confirmation()
    }

    #[wasm_bindgen]
    pub fn submit(&mut self, line: &str) -> String {
        render(&self.session.submit(line, &mut BrowserTrigger))
    }

    /// New value for the input box after Tab.
    #[wasm_bindgen]
    pub fn complete(&self, partial: &str) -> String {
        match self.session.complete(partial) {
            CompletionOutcome::Replaced(line) => line,
            CompletionOutcome::Unchanged | CompletionOutcome::Ambiguous(_) => partial.to_string(),
        }
    }

    /// "You mean: ..." line for an ambiguous Tab, empty otherwise.
    #[wasm_bindgen]
    pub fn completion_hint(&self, partial: &str) -> String {
        self.session.complete(partial).hint().unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn history_previous(&mut self) -> String {
        self.session.history_previous()
    }

    #[wasm_bindgen]
    pub fn history_next(&mut self) -> String {
        self.session.history_next()
    }

    #[wasm_bindgen]
    pub fn interrupt_clear(&self) -> String {
        render(&self.session.interrupt_clear())
    }
}
