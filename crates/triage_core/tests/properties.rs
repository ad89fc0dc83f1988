//! Property tests for the triage flow.

use proptest::prelude::*;
use triage_core::catalog::{lookup, ResourceKey};
use triage_core::{FlowView, TriageStateMachine};

const VALUES: [&str; 7] = [
    "national", "local", "crisis", "burnout", "general", "phone", "text",
];

prop_compose! {
    fn arbitrary_value()(index in 0..VALUES.len()) -> &'static str {
        VALUES[index]
    }
}

/// Drives a machine through every input, ignoring rejected ones.
fn drive(inputs: &[&str]) -> TriageStateMachine {
    let mut machine = TriageStateMachine::new();
    for input in inputs {
        let _ = machine.select_option(input);
    }
    machine
}

/// Answers each question with the option picked by `picks` until results.
fn complete(picks: &[usize]) -> TriageStateMachine {
    let mut machine = TriageStateMachine::new();
    let mut picks = picks.iter().cycle();
    while let FlowView::Question { options, .. } = machine.view() {
        let pick = picks.next().copied().unwrap_or(0) % options.len();
        machine.select(options[pick].value).unwrap();
    }
    machine
}

proptest! {
    #[test]
    fn back_undoes_exactly_one_selection(
        prefix in prop::collection::vec(arbitrary_value(), 0..4),
        value in arbitrary_value(),
    ) {
        let before = drive(&prefix);
        let mut after = before.clone();
        if after.select_option(value).is_ok() {
            prop_assert!(after.go_back());
            prop_assert_eq!(after, before);
        } else {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn every_completed_flow_resolves_to_its_catalog_entry(
        picks in prop::collection::vec(0usize..3, 1..4),
    ) {
        let machine = complete(&picks);
        let resource = machine.resolve_resource().unwrap();
        let key = ResourceKey::from_selections(machine.selections()).unwrap();
        prop_assert_eq!(resource, lookup(key));
    }

    #[test]
    fn progress_never_decreases_going_forward(
        picks in prop::collection::vec(0usize..3, 1..4),
    ) {
        let mut machine = TriageStateMachine::new();
        let mut last = machine.progress().percent;
        let mut picks = picks.iter().cycle();
        while let FlowView::Question { options, .. } = machine.view() {
            let pick = picks.next().copied().unwrap_or(0) % options.len();
            machine.select(options[pick].value).unwrap();
            let percent = machine.progress().percent;
            prop_assert!(percent >= last);
            prop_assert!((0.0..=100.0).contains(&percent));
            last = percent;
        }
        prop_assert_eq!(last, 100.0);
    }

    #[test]
    fn restart_always_returns_to_initial_state(
        inputs in prop::collection::vec(arbitrary_value(), 0..6),
    ) {
        let mut machine = drive(&inputs);
        machine.restart();
        prop_assert_eq!(&machine, &TriageStateMachine::new());
        machine.restart();
        prop_assert_eq!(machine, TriageStateMachine::new());
    }
}
