use crate::formula::{BinaryOp, Formula, UnaryOp};

use super::not_and_or::to_not_and_or;

/// Rewrites `formula` into an equivalent formula that only uses `~` and `&`.
/// First normalizes to `~`, `&`, `|` and then eliminates disjunctions using De Morgan's law.
pub fn to_not_and(formula: &Formula, placeholder: &Formula) -> Formula {
    eliminate_or(&to_not_and_or(formula, placeholder))
}

/// Replaces every `a | b` by `~(~a & ~b)`.
/// The formula must only contain `~`, `&`, and `|`.
fn eliminate_or(formula: &Formula) -> Formula {
    match formula {
        Formula::Var(_) | Formula::Const(_) => formula.clone(),
        Formula::Unary(UnaryOp::Not, f) => Formula::not(eliminate_or(f)),
        Formula::Binary(BinaryOp::And, l, r) => Formula::and(eliminate_or(l), eliminate_or(r)),
        Formula::Binary(BinaryOp::Or, l, r) => Formula::not(Formula::and(
            Formula::not(eliminate_or(l)),
            Formula::not(eliminate_or(r)),
        )),
        Formula::Binary(op, _, _) => {
            unreachable!("Formula is not in not/and/or form: found {} in {}", op, formula)
        }
    }
}
