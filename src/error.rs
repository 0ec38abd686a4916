use thiserror::Error;

use crate::{
    formula::{Formula, Operator},
    rewrite::Basis,
};

/// The errors that can occur when rewriting a formula through a [Rewriter](crate::Rewriter).
/// The conversion functions themselves are total, these errors stem from the checks the rewriter performs around them.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("operator {1} is not in the {2} basis (in {0})")]
    OutsideBasis(Formula, Operator, Basis),

    #[error("invalid placeholder variable name {0:?}")]
    InvalidPlaceholder(String),

    #[error("placeholder variable {0} already occurs in {1}")]
    PlaceholderCollision(String, Formula),

    #[error("{1} is not equivalent to {0} (counterexample: {2})")]
    NotEquivalent(Formula, Formula, String),
}
