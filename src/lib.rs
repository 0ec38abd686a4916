//! Rewriting of propositional formulas into equivalent formulas over a restricted set of operators.
//!
//! The conversion functions exported at the top level encode the constants `T` and `F` using the variable `p` where the target basis lacks them.
//! Use a [Rewriter] to configure the placeholder and to have the results checked.
mod error;
mod formula;
mod options;
mod rewrite;
mod semantics;

pub use error::RewriteError;
pub use formula::{BinaryOp, Constant, Formula, Operator, UnaryOp};
pub use options::{Options, PlaceholderPolicy};
pub use rewrite::{Basis, Rewriter};
pub use semantics::{
    all_assignments, counterexample, format_assignment, is_equivalent, Assignment,
    MAX_ENUMERATED_VARIABLES,
};

fn default_placeholder() -> Formula {
    Formula::var(Options::default().placeholder)
}

/// Converts `formula` into an equivalent formula over `~`, `&`, `|`.
pub fn to_not_and_or(formula: &Formula) -> Formula {
    Basis::NotAndOr.convert(formula, &default_placeholder())
}

/// Converts `formula` into an equivalent formula over `~`, `&`.
pub fn to_not_and(formula: &Formula) -> Formula {
    Basis::NotAnd.convert(formula, &default_placeholder())
}

/// Converts `formula` into an equivalent formula over `-&`.
pub fn to_nand(formula: &Formula) -> Formula {
    Basis::Nand.convert(formula, &default_placeholder())
}

/// Converts `formula` into an equivalent formula over `->`, `~`.
pub fn to_implies_not(formula: &Formula) -> Formula {
    Basis::ImpliesNot.convert(formula, &default_placeholder())
}

/// Converts `formula` into an equivalent formula over `->`, `F`.
pub fn to_implies_false(formula: &Formula) -> Formula {
    Basis::ImpliesFalse.convert(formula, &default_placeholder())
}
