//! Truth-value semantics of formulas.
//! Used to check that rewritten formulas are equivalent to their originals.

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::formula::{BinaryOp, Constant, Formula, UnaryOp};

/// An assignment of truth values to variables.
pub type Assignment = IndexMap<String, bool>;

/// The number of assignments is counted in a `u64`, which bounds the number of variables [all_assignments] accepts.
pub const MAX_ENUMERATED_VARIABLES: usize = 63;

impl Formula {
    /// Evaluates the formula under the given assignment.
    /// Returns `None` if the formula contains a variable that is not assigned.
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        match self {
            Formula::Var(v) => assignment.get(v).copied(),
            Formula::Const(Constant::T) => Some(true),
            Formula::Const(Constant::F) => Some(false),
            Formula::Unary(UnaryOp::Not, f) => f.evaluate(assignment).map(|b| !b),
            Formula::Binary(op, l, r) => {
                let l = l.evaluate(assignment)?;
                let r = r.evaluate(assignment)?;
                Some(match op {
                    BinaryOp::And => l && r,
                    BinaryOp::Or => l || r,
                    BinaryOp::Implies => !l || r,
                    BinaryOp::Xor => l != r,
                    BinaryOp::Iff => l == r,
                    BinaryOp::Nand => !(l && r),
                    BinaryOp::Nor => !(l || r),
                })
            }
        }
    }
}

/// Iterates over all assignments of the given variables.
/// Assignments are enumerated in binary counting order where the last variable changes fastest, starting with all variables `false`.
///
/// Panics if there are more than [MAX_ENUMERATED_VARIABLES] variables.
pub fn all_assignments(vars: &IndexSet<String>) -> impl Iterator<Item = Assignment> + '_ {
    let n = vars.len();
    assert!(
        n <= MAX_ENUMERATED_VARIABLES,
        "cannot enumerate assignments of {} variables (at most {})",
        n,
        MAX_ENUMERATED_VARIABLES
    );
    (0..1u64 << n).map(move |bits| {
        vars.iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), bits & (1 << (n - 1 - i)) != 0))
            .collect()
    })
}

/// Returns an assignment to the variables of both formulas under which they evaluate to different truth values, or `None` if they are equivalent.
pub fn counterexample(f: &Formula, g: &Formula) -> Option<Assignment> {
    let mut vars = f.variables();
    vars.extend(g.variables());
    let cex = all_assignments(&vars).find(|a| f.evaluate(a) != g.evaluate(a));
    cex
}

/// Returns `true` if both formulas have the same truth value under every assignment.
pub fn is_equivalent(f: &Formula, g: &Formula) -> bool {
    counterexample(f, g).is_none()
}

/// Renders an assignment as `x=true, y=false`.
pub fn format_assignment(assignment: &Assignment) -> String {
    assignment
        .iter()
        .map(|(v, b)| format!("{}={}", v, b))
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(values: &[(&str, bool)]) -> Assignment {
        values.iter().map(|(v, b)| (v.to_string(), *b)).collect()
    }

    #[test]
    fn test_evaluate_connectives() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let a = assignment(&[("p", true), ("q", false)]);

        assert_eq!(Formula::and(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Formula::or(p.clone(), q.clone()).evaluate(&a), Some(true));
        assert_eq!(Formula::implies(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Formula::implies(q.clone(), p.clone()).evaluate(&a), Some(true));
        assert_eq!(Formula::xor(p.clone(), q.clone()).evaluate(&a), Some(true));
        assert_eq!(Formula::iff(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Formula::nand(p.clone(), q.clone()).evaluate(&a), Some(true));
        assert_eq!(Formula::nor(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Formula::not(q).evaluate(&a), Some(true));
        assert_eq!(Formula::ttrue().evaluate(&a), Some(true));
        assert_eq!(Formula::ffalse().evaluate(&a), Some(false));
    }

    #[test]
    fn test_evaluate_unassigned() {
        let f = Formula::and(Formula::var("p"), Formula::var("q"));
        assert_eq!(f.evaluate(&assignment(&[("p", true)])), None);
    }

    #[test]
    fn test_all_assignments() {
        let vars: IndexSet<String> = ["p", "q"].iter().map(|s| s.to_string()).collect();
        let all: Vec<Assignment> = all_assignments(&vars).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], assignment(&[("p", false), ("q", false)]));
        assert_eq!(all[1], assignment(&[("p", false), ("q", true)]));
        assert_eq!(all[3], assignment(&[("p", true), ("q", true)]));
    }

    #[test]
    fn test_all_assignments_no_variables() {
        let all: Vec<Assignment> = all_assignments(&IndexSet::new()).collect();
        assert_eq!(all, vec![Assignment::new()]);
    }

    #[test]
    #[should_panic(expected = "cannot enumerate assignments of 64 variables")]
    fn test_all_assignments_too_many_variables() {
        let vars: IndexSet<String> = (0..64).map(|i| format!("x{}", i)).collect();
        let _ = all_assignments(&vars);
    }

    #[test]
    fn test_counterexample_over_both_variable_sets() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        assert!(counterexample(&p, &p.clone()).is_none());
        let cex = counterexample(&p, &Formula::or(p.clone(), q)).unwrap();
        assert_eq!(cex, assignment(&[("p", false), ("q", true)]));
    }

    #[test]
    fn test_equivalence() {
        let p = Formula::var("p");
        let q = Formula::var("q");
        let imp = Formula::implies(p.clone(), q.clone());
        let mat = Formula::or(Formula::not(p.clone()), q.clone());
        assert!(is_equivalent(&imp, &mat));
        assert!(!is_equivalent(&imp, &Formula::implies(q, p.clone())));

        let contradiction = Formula::and(p.clone(), Formula::not(p));
        assert!(is_equivalent(&contradiction, &Formula::ffalse()));
    }

    #[test]
    fn test_counterexample() {
        let p = Formula::var("p");
        let cex = counterexample(&p, &Formula::ttrue()).unwrap();
        assert_eq!(cex, assignment(&[("p", false)]));
        assert_eq!(format_assignment(&cex), "p=false");
    }
}
