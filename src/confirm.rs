use crate::config::LinkAction;
use crate::error::TerminalError;

/// Receives confirmed side-effecting actions, e.g. opening a browser tab.
pub trait ActionTrigger {
    fn trigger(&mut self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PromptState {
    #[default]
    Idle,
    AwaitingConfirmation(LinkAction),
}

impl PromptState {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, PromptState::AwaitingConfirmation(_))
    }

    /// Park `action` until the next answer and return the question line.
    pub fn request(&mut self, action: LinkAction) -> String {
        let line = format!("Open {} ({})? [y/n]", action.label, action.url);
        *self = PromptState::AwaitingConfirmation(action);
        line
    }

    /// Consume the answer. Always returns to `Idle`.
    pub fn answer(&mut self, input: &str, trigger: &mut dyn ActionTrigger) -> String {
        let PromptState::AwaitingConfirmation(action) = std::mem::take(self) else {
            return String::new();
        };
        match input.trim() {
            "y" | "Y" => {
                log::info!("opening {}", action.url);
                trigger.trigger(&action.url);
                format!("Opening {}...", action.url)
            }
            "n" | "N" => {
                log::debug!("declined {}", action.url);
                "Canceled.".to_string()
            }
            other => {
                log::debug!("confirmation answered with {:?}", other);
                TerminalError::InvalidConfirmationResponse(other.to_string()).to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingTrigger {
        pub opened: Vec<String>,
    }

    impl ActionTrigger for RecordingTrigger {
        fn trigger(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    fn discord() -> LinkAction {
        LinkAction {
            label: "Discord".into(),
            url: "https://discord.gg/x".into(),
        }
    }

    #[test]
    fn request_enters_awaiting() {
        let mut state = PromptState::default();
        let line = state.request(discord());
        assert_eq!(line, "Open Discord (https://discord.gg/x)? [y/n]");
        assert!(state.is_awaiting());
    }

    #[test]
    fn yes_triggers_once() {
        for answer in ["y", "Y", " y "] {
            let mut state = PromptState::default();
            let mut trigger = RecordingTrigger::default();
            state.request(discord());
            let line = state.answer(answer, &mut trigger);
            assert_eq!(line, "Opening https://discord.gg/x...");
            assert_eq!(trigger.opened, vec!["https://discord.gg/x"]);
            assert_eq!(state, PromptState::Idle);
        }
    }

    #[test]
    fn no_cancels() {
        for answer in ["n", "N"] {
            let mut state = PromptState::default();
            let mut trigger = RecordingTrigger::default();
            state.request(discord());
            assert_eq!(state.answer(answer, &mut trigger), "Canceled.");
            assert!(trigger.opened.is_empty());
            assert!(!state.is_awaiting());
        }
    }

    #[test]
    fn anything_else_is_invalid() {
        for answer in ["yes", "", "maybe", "yy"] {
            let mut state = PromptState::default();
            let mut trigger = RecordingTrigger::default();
            state.request(discord());
            assert_eq!(state.answer(answer, &mut trigger), "Invalid input, canceled.");
            assert!(trigger.opened.is_empty());
            assert_eq!(state, PromptState::Idle);
        }
    }

    #[test]
    fn answer_while_idle_is_noop() {
        let mut state = PromptState::default();
        let mut trigger = RecordingTrigger::default();
        assert_eq!(state.answer("y", &mut trigger), "");
        assert!(trigger.opened.is_empty());
    }
}
