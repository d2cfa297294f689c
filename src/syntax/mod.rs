//! Syntax of sorted first-order logic: the language, terms and formulas.

mod formula;
mod language;
mod signature;
mod sort;
mod term;

pub use formula::{Atom, Formula};
pub use language::{Language, LanguageError, INTEGER, NATURAL, OBJECT};
pub use signature::{Function, Predicate, Signature};
pub use sort::{LanguageId, Sort, Value};
pub use term::{Constant, Term, Var};
pub(crate) use term::write_args;
