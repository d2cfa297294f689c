//! Semantic tests for models and grounding.
//!
//! These tests pin down the observable laws of the crate: store round-trips,
//! closed-world predicates versus partial functions, the cardinality and
//! closure laws of grounding, and determinism of the generated action list.
//!
use std::sync::Arc;

use crate::fstrips::{Action, Effect, Problem};
use crate::syntax::{Atom, Constant, Formula, Function, Language, Predicate, Sort, Term, Var};

/// A small blocksworld language with `n` blocks.
struct Blocksworld {
    lang: Arc<Language>,
    block: Sort,
    blocks: Vec<Constant>,
    on: Predicate,
    clear: Predicate,
    height: Function,
    x: Var,
    y: Var,
}

fn blocksworld(n: usize) -> Blocksworld {
    let mut lang = Language::new("blocksworld");
    let block = lang.sort("block", None).unwrap();
    let blocks = (0..n)
        .map(|i| lang.constant(&format!("b{}", i + 1), &block).unwrap())
        .collect();
    let on = lang.predicate("on", &[block.clone(), block.clone()]).unwrap();
    let clear = lang.predicate("clear", &[block.clone()]).unwrap();
    let nat = lang.natural_sort();
    let height = lang.function("height", &[block.clone()], &nat).unwrap();
    let x = lang.variable("x", &block);
    let y = lang.variable("y", &block);
    Blocksworld {
        lang: Arc::new(lang),
        block,
        blocks,
        on,
        clear,
        height,
        x,
        y,
    }
}

/// `move(?x, ?y)`: requires both clear, puts x on y and raises x.
fn move_schema(w: &Blocksworld) -> Action {
    let x: Term = w.x.clone().into();
    let y: Term = w.y.clone().into();
    Action::new(
        "move",
        vec![x.clone(), y.clone()],
        Formula::and(
            Formula::atom(&w.clear, vec![x.clone()]),
            Formula::atom(&w.clear, vec![y.clone()]),
        ),
        vec![
            Effect::add(Atom::new(&w.on, vec![x.clone(), y.clone()])),
            Effect::delete(Atom::new(&w.clear, vec![y.clone()])),
            Effect::assign(
                Term::app(&w.height, vec![x]),
                Term::app(&w.height, vec![y]),
            )
            .unwrap(),
        ],
    )
}

fn problem_with(w: &Blocksworld, schemas: Vec<Action>) -> Problem {
    let mut problem = Problem::new("test", Arc::clone(&w.lang));
    for schema in schemas {
        problem.add_action(schema).unwrap();
    }
    problem
}
