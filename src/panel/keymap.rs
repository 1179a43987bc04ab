use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    SetTemp,
    Reset,
    Reboot,
    Shutdown,
    Quit,
}

/// The dashboard's button row. Reset stays bound even though it has no
/// handler on the device side.
pub const BINDINGS: [(KeyCode, Action); 6] = [
    (KeyCode::Enter, Action::SetTemp),
    (KeyCode::Char('r'), Action::Reset),
    (KeyCode::Char('b'), Action::Reboot),
    (KeyCode::Char('x'), Action::Shutdown),
    (KeyCode::Char('q'), Action::Quit),
    (KeyCode::Esc, Action::Quit),
];

pub fn action_for(code: KeyCode) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|(_, action)| *action)
}

pub fn hint_line() -> String {
    BINDINGS
        .iter()
        .map(|(code, action)| format!("{} {action}", key_name(*code)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_resolve() {
        assert_eq!(action_for(KeyCode::Enter), Some(Action::SetTemp));
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(action_for(KeyCode::Char('b')), Some(Action::Reboot));
        assert_eq!(action_for(KeyCode::Char('x')), Some(Action::Shutdown));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_hint_line_names_every_action() {
        let hints = hint_line();

        for action in [
            Action::SetTemp,
            Action::Reset,
            Action::Reboot,
            Action::Shutdown,
            Action::Quit,
        ] {
            assert!(hints.contains(&action.to_string()), "missing {action}");
        }
    }
}
