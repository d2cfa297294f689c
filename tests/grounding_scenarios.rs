use std::sync::Arc;

use fstrips::fstrips::{Action, Effect, Optimization, Problem};
use fstrips::grounding::{FailurePolicy, Grounder, GroundingConfig, GroundingError};
use fstrips::subst::Substitute;
use fstrips::syntax::{Atom, Formula, Language, Term};

// ============================================================================
// Counters domain: functional effects over numeric fluents
// ============================================================================

fn counters(n: usize) -> Problem {
    let mut lang = Language::new("counters");
    let counter = lang.sort("counter", None).unwrap();
    let int = lang.integer_sort();
    for i in 0..n {
        lang.constant(&format!("c{}", i), &counter).unwrap();
    }
    let value = lang.function("value", &[counter.clone()], &int).unwrap();
    let max = lang.function("max_value", &[], &int).unwrap();
    let x = lang.variable("x", &counter);
    let y = lang.variable("y", &counter);
    let lang = Arc::new(lang);

    let mut problem = Problem::new("counters-1", Arc::clone(&lang));
    for (i, c) in lang.domain(&counter).unwrap().iter().enumerate() {
        problem.init.set(&value, [c], i as i64).unwrap();
    }
    problem.init.set(&max, std::iter::empty::<i64>(), 10).unwrap();

    let copy = Action::new(
        "copy",
        vec![x.clone().into(), y.clone().into()],
        Formula::Tautology,
        vec![Effect::assign(
            Term::app(&value, vec![x.clone().into()]),
            Term::app(&value, vec![y.clone().into()]),
        )
        .unwrap()],
    );
    let tune = Action::new(
        "tune",
        vec![x.clone().into()],
        Formula::Tautology,
        vec![
            Effect::choice(
                Optimization::Maximize,
                Term::app(&value, vec![x.clone().into()]),
                vec![Term::app(&value, vec![x.clone().into()])],
                Formula::Tautology,
            )
            .unwrap(),
            Effect::procedural(
                vec![Term::app(&max, vec![])],
                vec![Term::app(&value, vec![x.into()])],
            )
            .unwrap(),
        ],
    );
    problem.add_action(copy).unwrap();
    problem.add_action(tune).unwrap();
    problem
}

#[test]
fn test_functional_and_choice_effects_are_grounded() {
    let problem = counters(3);
    let mut grounder = Grounder::default();
    let (actions, report) = grounder.ground(&problem).unwrap();

    assert_eq!(actions.len(), 9 + 3);
    assert_eq!(report.grounded.len(), 2);
    assert_eq!(report.grounded[0].instantiations, 9);
    assert_eq!(report.grounded[1].instantiations, 3);
    assert!(actions.iter().all(Action::is_ground));

    let first_tune = actions.iter().find(|a| a.name == "tune").unwrap();
    assert_eq!(
        first_tune.effects[1].to_string(),
        "(in: max_value(), out: value(c0))"
    );
}

#[test]
fn test_ground_effects_evaluate_against_initial_state() {
    let problem = counters(2);
    let (actions, _) = Grounder::default().ground(&problem).unwrap();
    // copy(c0, c1) is the second binding.
    match &actions[1].effects[0] {
        Effect::Functional(eff) => {
            let rhs = problem.init.evaluate(eff.rhs()).unwrap();
            assert_eq!(rhs.as_int(), Some(1));
            assert!(eff.lhs().free_variables().is_empty());
        }
        other => panic!("Expected functional effect, got {other}"),
    }
}

#[test]
fn test_instantiation_ceiling_from_json_config() {
    let problem = counters(4);
    let config = GroundingConfig::from_json(r#"{"max_instantiations": 8}"#).unwrap();
    let mut grounder = Grounder::new(config);
    let err = grounder.ground(&problem).unwrap_err();
    assert_eq!(
        err,
        GroundingError::TooManyInstantiations {
            schema: "copy".into(),
            cardinality: 16,
            limit: 8,
        }
    );
}

#[test]
fn test_ceiling_with_skip_policy_keeps_small_schemas() {
    let problem = counters(4);
    let config = GroundingConfig {
        max_instantiations: Some(8),
        on_failure: FailurePolicy::SkipSchema,
    };
    let mut grounder = Grounder::new(config);
    let (actions, report) = grounder.ground(&problem).unwrap();
    assert_eq!(actions.len(), 4);
    assert!(actions.iter().all(|a| a.name == "tune"));
    assert_eq!(report.skipped[0].0, "copy");
    assert_eq!(grounder.actions_generated(), 4);
}

#[test]
fn test_quantified_precondition_keeps_bound_variable() {
    let mut lang = Language::new("rooms");
    let room = lang.sort("room", None).unwrap();
    for r in ["kitchen", "hall", "study"] {
        lang.constant(r, &room).unwrap();
    }
    let door = lang.predicate("door", &[room.clone(), room.clone()]).unwrap();
    let at = lang.predicate("at", &[room.clone()]).unwrap();
    let from = lang.variable("from", &room);
    let to = lang.variable("to", &room);
    let lang = Arc::new(lang);

    let leave = Action::new(
        "leave",
        vec![from.clone().into()],
        Formula::and(
            Formula::atom(&at, vec![from.clone().into()]),
            Formula::exists(
                to.clone(),
                Formula::atom(&door, vec![from.clone().into(), to.clone().into()]),
            ),
        ),
        vec![Effect::delete(Atom::new(&at, vec![from.into()]))],
    );
    let mut problem = Problem::new("rooms-1", Arc::clone(&lang));
    problem.add_action(leave).unwrap();
    problem.init.add(&at, ["hall"]).unwrap();
    problem.init.add(&door, ["hall", "study"]).unwrap();

    let (actions, _) = Grounder::default().ground(&problem).unwrap();
    assert_eq!(actions.len(), 3);
    assert!(actions.iter().all(Action::is_ground));
    let applicable: Vec<bool> = actions
        .iter()
        .map(|a| a.is_applicable(&problem.init).unwrap())
        .collect();
    assert_eq!(applicable, vec![false, true, false]);
}
