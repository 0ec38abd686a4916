//! Rewriting of formulas into restricted operator bases.
mod implies;
mod nand;
mod not_and;
mod not_and_or;

use std::fmt::Display;

use crate::{
    formula::{Formula, Operator},
    options::{Options, PlaceholderPolicy},
    semantics::{counterexample, format_assignment},
    RewriteError,
};

pub use implies::{to_implies_false, to_implies_not};
pub use nand::to_nand;
pub use not_and::to_not_and;
pub use not_and_or::to_not_and_or;

/// A set of operators that rewritten formulas are restricted to.
/// Variables are allowed in every basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Basis {
    /// `~`, `&`, `|`
    NotAndOr,
    /// `~`, `&`
    NotAnd,
    /// `-&`
    Nand,
    /// `->`, `~`
    ImpliesNot,
    /// `->`, `F`
    ImpliesFalse,
}

impl Basis {
    /// All bases, in the order in which they are listed above.
    pub const ALL: [Basis; 5] = [
        Basis::NotAndOr,
        Basis::NotAnd,
        Basis::Nand,
        Basis::ImpliesNot,
        Basis::ImpliesFalse,
    ];

    /// The operators (including constants) allowed in this basis.
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            Basis::NotAndOr => &[Operator::Not, Operator::And, Operator::Or],
            Basis::NotAnd => &[Operator::Not, Operator::And],
            Basis::Nand => &[Operator::Nand],
            Basis::ImpliesNot => &[Operator::Implies, Operator::Not],
            Basis::ImpliesFalse => &[Operator::Implies, Operator::False],
        }
    }

    /// Checks that `formula` only uses operators of this basis.
    /// Returns an error naming the first offending operator otherwise.
    pub fn admits(&self, formula: &Formula) -> Result<(), RewriteError> {
        match formula
            .operators()
            .into_iter()
            .find(|op| !self.operators().contains(op))
        {
            Some(op) => Err(RewriteError::OutsideBasis(formula.clone(), op, *self)),
            None => Ok(()),
        }
    }

    /// Converts `formula` into this basis, encoding constants with the `placeholder` variable where needed.
    pub fn convert(&self, formula: &Formula, placeholder: &Formula) -> Formula {
        match self {
            Basis::NotAndOr => to_not_and_or(formula, placeholder),
            Basis::NotAnd => to_not_and(formula, placeholder),
            Basis::Nand => to_nand(formula, placeholder),
            Basis::ImpliesNot => to_implies_not(formula, placeholder),
            Basis::ImpliesFalse => to_implies_false(formula, placeholder),
        }
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for op in self.operators() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", op)?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Rewrites formulas into a basis according to the given [Options].
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    options: Options,
}

impl Rewriter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Rewrite the given formula into an equivalent formula over `basis`.
    /// Depending on the options, checks that the result is closed under the basis and equivalent to the input.
    pub fn rewrite(&self, formula: &Formula, basis: Basis) -> Result<Formula, RewriteError> {
        let placeholder = self.placeholder(formula)?;
        let result = basis.convert(formula, &placeholder);
        log::debug!(
            "Rewrote formula of size {} into {} (size {})",
            formula.size(),
            basis,
            result.size()
        );

        if self.options.check_basis {
            basis.admits(&result)?;
        }
        if self.options.verify {
            if let Some(cex) = counterexample(formula, &result) {
                return Err(RewriteError::NotEquivalent(
                    formula.clone(),
                    result,
                    format_assignment(&cex),
                ));
            }
        }
        Ok(result)
    }

    /// Determines the variable used to encode constants in `formula`.
    /// The configured name must be a valid variable name: nonempty, starting with an alphanumeric character, and not one of the constants `T` or `F`.
    fn placeholder(&self, formula: &Formula) -> Result<Formula, RewriteError> {
        let name = &self.options.placeholder;
        let starts_alphanumeric = name.chars().next().is_some_and(|c| c.is_alphanumeric());
        if !starts_alphanumeric || name == "T" || name == "F" {
            return Err(RewriteError::InvalidPlaceholder(name.clone()));
        }
        let vars = formula.variables();
        if !vars.contains(name) {
            log::trace!("Using placeholder {}", name);
            return Ok(Formula::var(name.as_str()));
        }
        match self.options.placeholder_policy {
            PlaceholderPolicy::Reuse => {
                log::warn!("Placeholder {} also occurs as a variable in {}", name, formula);
                Ok(Formula::var(name.as_str()))
            }
            PlaceholderPolicy::Reject => Err(RewriteError::PlaceholderCollision(
                name.clone(),
                formula.clone(),
            )),
            PlaceholderPolicy::Fresh => {
                let fresh = (1..)
                    .map(|i| format!("{}{}", name, i))
                    .find(|v| !vars.contains(v))
                    .unwrap_or_else(|| unreachable!("Infinitely many candidates"));
                log::trace!("Placeholder {} is taken, using {}", name, fresh);
                Ok(Formula::var(fresh))
            }
        }
    }

    pub fn to_not_and_or(&self, formula: &Formula) -> Result<Formula, RewriteError> {
        self.rewrite(formula, Basis::NotAndOr)
    }

    pub fn to_not_and(&self, formula: &Formula) -> Result<Formula, RewriteError> {
        self.rewrite(formula, Basis::NotAnd)
    }

    pub fn to_nand(&self, formula: &Formula) -> Result<Formula, RewriteError> {
        self.rewrite(formula, Basis::Nand)
    }

    pub fn to_implies_not(&self, formula: &Formula) -> Result<Formula, RewriteError> {
        self.rewrite(formula, Basis::ImpliesNot)
    }

    pub fn to_implies_false(&self, formula: &Formula) -> Result<Formula, RewriteError> {
        self.rewrite(formula, Basis::ImpliesFalse)
    }
}
