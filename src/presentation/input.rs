use serde::Deserialize;

/// Message sent by the client over the presentation socket
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    Next,
    Previous,
    GoTo { index: usize },
    ToggleAutoPlay,
    /// Raw key press, mapped through [`key_action`]
    Key { key: String },
}

/// Navigation action on the presentation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoPlay,
}

impl Command {
    /// Resolve the command to a controller action
    ///
    /// Returns `None` for keys without a binding.
    pub fn resolve(&self) -> Option<Action> {
        match self {
            Command::Next => Some(Action::Next),
            Command::Previous => Some(Action::Previous),
            Command::GoTo { index } => Some(Action::GoTo(*index)),
            Command::ToggleAutoPlay => Some(Action::ToggleAutoPlay),
            Command::Key { key } => key_action(key),
        }
    }
}

/// Key binding table, using DOM `KeyboardEvent.key` names
pub fn key_action(key: &str) -> Option<Action> {
    match key {
        "ArrowRight" => Some(Action::Next),
        "ArrowLeft" => Some(Action::Previous),
        " " => Some(Action::ToggleAutoPlay),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_action("ArrowRight"), Some(Action::Next));
        assert_eq!(key_action("ArrowLeft"), Some(Action::Previous));
        assert_eq!(key_action(" "), Some(Action::ToggleAutoPlay));
        assert_eq!(key_action("Enter"), None);
        assert_eq!(key_action("ArrowUp"), None);
    }

    #[test]
    fn test_decode_commands() {
        let cmd: Command = serde_json::from_str(r#"{"action":"goTo","index":3}"#).unwrap();
        assert_eq!(cmd, Command::GoTo { index: 3 });
        assert_eq!(cmd.resolve(), Some(Action::GoTo(3)));

        let cmd: Command = serde_json::from_str(r#"{"action":"toggleAutoPlay"}"#).unwrap();
        assert_eq!(cmd.resolve(), Some(Action::ToggleAutoPlay));

        let cmd: Command = serde_json::from_str(r#"{"action":"key","key":" "}"#).unwrap();
        assert_eq!(cmd.resolve(), Some(Action::ToggleAutoPlay));

        assert!(serde_json::from_str::<Command>(r#"{"action":"shuffle"}"#).is_err());
    }

    #[test]
    fn test_unbound_key_resolves_to_nothing() {
        let cmd = Command::Key {
            key: "Escape".to_string(),
        };
        assert_eq!(cmd.resolve(), None);
    }
}
