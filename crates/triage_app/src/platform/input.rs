//! Maps prompt input to core messages against the currently rendered view.

use triage_core::{AppViewModel, FlowView, Msg, NavAction};

use super::ui::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1-based option number on the current question.
    Pick(usize),
    /// An option value typed out, e.g. `local`.
    Value(String),
    Back,
    Restart,
    Copy,
    Open,
    Close,
    Quit,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Msg),
    Quit,
    Help,
    /// Nothing to dispatch; tell the user why.
    Notice(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let word = line.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }
    let command = match word.as_str() {
        KEY_BACK => Command::Back,
        KEY_RESTART => Command::Restart,
        KEY_COPY => Command::Copy,
        KEY_OPEN => Command::Open,
        KEY_CLOSE => Command::Close,
        KEY_QUIT => Command::Quit,
        KEY_HELP => Command::Help,
        other => match other.parse::<usize>() {
            Ok(number) => Command::Pick(number),
            Err(_) => Command::Value(other.to_string()),
        },
    };
    Some(command)
}

pub fn resolve(command: Command, view: &AppViewModel) -> Action {
    if !view.modal_open {
        return match command {
            Command::Open => Action::Dispatch(Msg::ModalOpened),
            Command::Quit => Action::Quit,
            Command::Help => Action::Help,
            _ => Action::Notice(format!("The dialog is closed. [{KEY_OPEN}] opens it.")),
        };
    }

    match command {
        Command::Pick(number) => match &view.flow {
            FlowView::Question { options, .. } => match number
                .checked_sub(1)
                .and_then(|index| options.get(index))
            {
                Some(option) => Action::Dispatch(Msg::OptionSelected(
                    option.value.as_str().to_string(),
                )),
                None => Action::Notice(format!("Pick an option from 1 to {}.", options.len())),
            },
            _ => Action::Notice("There is no question to answer.".to_string()),
        },
        // Passed through as typed so a mismatch surfaces as a core error.
        Command::Value(value) => Action::Dispatch(Msg::OptionSelected(value)),
        Command::Back => {
            if view.flow.can_go_back() {
                Action::Dispatch(Msg::Navigate(NavAction::Back))
            } else {
                Action::Notice("Nothing to go back to.".to_string())
            }
        }
        Command::Restart => Action::Dispatch(Msg::Navigate(NavAction::Restart)),
        Command::Copy => match &view.flow {
            FlowView::Results { resource, .. } => {
                Action::Dispatch(Msg::CopyRequested(resource.number.to_string()))
            }
            _ => Action::Notice("Nothing to copy yet.".to_string()),
        },
        Command::Open => Action::Notice("The dialog is already open.".to_string()),
        Command::Close => Action::Dispatch(Msg::ModalClosed),
        Command::Quit => Action::Quit,
        Command::Help => Action::Help,
    }
}

pub fn help_lines() -> Vec<String> {
    vec![
        "Type an option number (or its value) to answer.".to_string(),
        format!("[{KEY_BACK}] back  [{KEY_RESTART}] start over  [{KEY_COPY}] copy number"),
        format!("[{KEY_OPEN}] open  [{KEY_CLOSE}] close  [{KEY_QUIT}] quit  [{KEY_HELP}] help"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{update, AppState};

    fn open_view(values: &[&str]) -> AppViewModel {
        let (mut state, _) = update(AppState::new(), Msg::ModalOpened);
        for value in values {
            state = update(state, Msg::OptionSelected(value.to_string())).0;
        }
        state.view()
    }

    #[test]
    fn parses_keys_numbers_and_values() {
        assert_eq!(parse_command("  B \n"), Some(Command::Back));
        assert_eq!(parse_command("2"), Some(Command::Pick(2)));
        assert_eq!(parse_command("Local"), Some(Command::Value("local".to_string())));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn option_numbers_follow_rendered_order() {
        let view = open_view(&["local"]);

        assert_eq!(
            resolve(Command::Pick(2), &view),
            Action::Dispatch(Msg::OptionSelected("burnout".to_string()))
        );
        assert!(matches!(resolve(Command::Pick(0), &view), Action::Notice(_)));
        assert!(matches!(resolve(Command::Pick(4), &view), Action::Notice(_)));
    }

    #[test]
    fn copy_takes_the_resolved_number() {
        let view = open_view(&["national"]);

        assert_eq!(
            resolve(Command::Copy, &view),
            Action::Dispatch(Msg::CopyRequested("988".to_string()))
        );
        assert!(matches!(resolve(Command::Pick(1), &view), Action::Notice(_)));
    }

    #[test]
    fn back_requires_history() {
        assert!(matches!(
            resolve(Command::Back, &open_view(&[])),
            Action::Notice(_)
        ));
        assert_eq!(
            resolve(Command::Back, &open_view(&["local"])),
            Action::Dispatch(Msg::Navigate(NavAction::Back))
        );
    }

    #[test]
    fn closed_dialog_only_opens_or_quits() {
        let view = AppState::new().view();

        assert_eq!(resolve(Command::Open, &view), Action::Dispatch(Msg::ModalOpened));
        assert_eq!(resolve(Command::Quit, &view), Action::Quit);
        assert!(matches!(resolve(Command::Pick(1), &view), Action::Notice(_)));
    }
}
