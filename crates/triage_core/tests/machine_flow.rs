use std::sync::Once;

use pretty_assertions::assert_eq;
use triage_core::{
    Concern, ContactMethod, FlowState, FlowView, ResourceType, Selections, Step,
    TriageError, TriageStateMachine,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(triage_logging::initialize_for_tests);
}

fn machine_after(values: &[&str]) -> TriageStateMachine {
    let mut machine = TriageStateMachine::new();
    for value in values {
        machine.select_option(value).unwrap();
    }
    machine
}

#[test]
fn starts_at_first_question_with_nothing_selected() {
    init_logging();
    let machine = TriageStateMachine::new();

    assert_eq!(machine.state(), &FlowState::new());
    assert_eq!(machine.current_step(), Step::One);
    assert_eq!(machine.selections(), &Selections::default());
    assert_eq!(machine.history_len(), 0);
    assert!(!machine.can_go_back());
}

#[test]
fn national_short_circuits_to_results() {
    init_logging();
    let machine = machine_after(&["national"]);

    assert_eq!(machine.current_step(), Step::Results);
    assert_eq!(
        machine.selections(),
        &Selections {
            resource_type: Some(ResourceType::National),
            concern: Some(Concern::National),
            contact_method: None,
        }
    );
    assert_eq!(machine.history_len(), 1);
}

#[test]
fn local_asks_for_concern() {
    init_logging();
    let machine = machine_after(&["local"]);

    assert_eq!(machine.current_step(), Step::Two);
    assert_eq!(machine.selections().resource_type, Some(ResourceType::Local));
    assert_eq!(machine.selections().concern, None);
}

#[test]
fn national_then_phone_is_rejected() {
    init_logging();
    let mut machine = machine_after(&["national"]);
    let before = machine.clone();

    assert_eq!(machine.select_option("phone"), Err(TriageError::FlowComplete));
    assert_eq!(machine, before);

    let resource = machine.resolve_resource().unwrap();
    assert_eq!(resource.number, "988");
    assert_eq!(resource.label, "Suicide & Crisis Lifeline");
    assert_eq!(resource.instruction, None);
}

#[test]
fn local_burnout_text_resolves_to_burnout_text_support() {
    init_logging();
    let machine = machine_after(&["local", "burnout", "text"]);

    assert_eq!(machine.current_step(), Step::Results);
    let resource = machine.resolve_resource().unwrap();
    assert_eq!(resource.label, "Burnout Text Support");
    assert_eq!(resource.number, "BURNOUT");
    assert_eq!(resource.instruction, Some("Text to 741741"));
}

#[test]
fn back_unwinds_one_selection_at_a_time() {
    init_logging();
    let mut machine = machine_after(&["local", "burnout", "text"]);

    assert!(machine.go_back());
    assert_eq!(machine.current_step(), Step::Three);
    assert_eq!(machine.selections().concern, Some(Concern::Burnout));
    assert_eq!(machine.selections().contact_method, None);

    assert!(machine.go_back());
    assert_eq!(machine.current_step(), Step::Two);
    assert_eq!(machine.selections().concern, None);
    assert_eq!(machine.selections().resource_type, Some(ResourceType::Local));

    assert!(machine.go_back());
    assert_eq!(machine, TriageStateMachine::new());
    assert!(!machine.go_back());
}

#[test]
fn back_from_national_results_returns_to_first_question() {
    init_logging();
    let mut machine = machine_after(&["national"]);

    assert!(machine.go_back());
    assert_eq!(machine, TriageStateMachine::new());
}

#[test]
fn changing_an_answer_after_back_replaces_it() {
    init_logging();
    let mut machine = machine_after(&["local", "crisis", "phone"]);
    machine.go_back();
    machine.select_option("text").unwrap();

    assert_eq!(
        machine.selections().contact_method,
        Some(ContactMethod::Text)
    );
    assert_eq!(machine.resolve_resource().unwrap().label, "Crisis Text Support");
    assert_eq!(machine.history_len(), 3);
}

#[test]
fn options_from_other_steps_are_rejected() {
    init_logging();
    let mut machine = TriageStateMachine::new();
    assert_eq!(
        machine.select_option("burnout"),
        Err(TriageError::IllegalOption {
            step: Step::One,
            value: "burnout".to_string(),
        })
    );

    machine.select_option("local").unwrap();
    assert_eq!(
        machine.select_option("phone"),
        Err(TriageError::IllegalOption {
            step: Step::Two,
            value: "phone".to_string(),
        })
    );
    // The national sentinel is never offered as a concern.
    assert!(machine.select_option("national").is_err());

    machine.select_option("general").unwrap();
    assert!(machine.select_option("local").is_err());
    assert_eq!(machine.current_step(), Step::Three);
    assert_eq!(machine.history_len(), 2);
}

#[test]
fn unknown_values_are_rejected() {
    init_logging();
    let mut machine = TriageStateMachine::new();

    assert_eq!(
        machine.select_option("Local"),
        Err(TriageError::UnknownOption("Local".to_string()))
    );
    assert_eq!(machine, TriageStateMachine::new());
}

#[test]
fn resolving_before_results_is_an_error() {
    init_logging();
    let machine = machine_after(&["local", "general"]);

    assert_eq!(
        machine.resolve_resource(),
        Err(TriageError::NotAtResults(Step::Three))
    );
}

#[test]
fn restart_returns_to_initial_state_and_is_idempotent() {
    init_logging();
    let mut machine = machine_after(&["local", "burnout", "phone"]);

    machine.restart();
    assert_eq!(machine, TriageStateMachine::new());
    machine.restart();
    assert_eq!(machine, TriageStateMachine::new());
}

#[test]
fn question_view_lists_current_options() {
    init_logging();
    let machine = machine_after(&["local"]);

    match machine.view() {
        FlowView::Question {
            step_number,
            text,
            options,
            can_go_back,
            ..
        } => {
            assert_eq!(step_number, 2);
            assert_eq!(text, "What are you experiencing right now?");
            let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["crisis", "burnout", "general"]);
            assert!(can_go_back);
        }
        other => panic!("expected a question, got {other:?}"),
    }
}

#[test]
fn results_view_carries_resource_and_back() {
    init_logging();
    let machine = machine_after(&["national"]);

    match machine.view() {
        FlowView::Results {
            resource,
            can_go_back,
        } => {
            assert_eq!(resource.number, "988");
            assert!(can_go_back);
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn progress_tracks_step() {
    init_logging();
    let mut machine = TriageStateMachine::new();
    let first = machine.progress();
    assert_eq!(first.label, "1");
    assert_eq!(first.total_steps, 3);
    assert!((first.percent - 100.0 / 3.0).abs() < 1e-9);

    machine.select_option("local").unwrap();
    machine.select_option("crisis").unwrap();
    assert_eq!(machine.progress().percent, 100.0);
    assert_eq!(machine.progress().label, "3");

    machine.select_option("phone").unwrap();
    assert_eq!(machine.progress().label, "Complete");
    assert_eq!(machine.progress().percent, 100.0);
}
