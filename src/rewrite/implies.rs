//! Conversions into bases built around implication.

use crate::formula::{BinaryOp, Constant, Formula, UnaryOp};

use super::not_and_or::to_not_and_or;

/// Rewrites `formula` into an equivalent formula that only uses `->` and `~`.
/// `T` is encoded as `p -> p` and `F` as `~(p -> p)` for the `placeholder` variable `p`.
pub fn to_implies_not(formula: &Formula, placeholder: &Formula) -> Formula {
    match formula {
        Formula::Var(_) => formula.clone(),
        Formula::Const(c) => {
            let t = Formula::implies(placeholder.clone(), placeholder.clone());
            match c {
                Constant::T => t,
                Constant::F => Formula::not(t),
            }
        }
        Formula::Unary(UnaryOp::Not, f) => Formula::not(to_implies_not(f, placeholder)),
        Formula::Binary(op, l, r) => match op {
            BinaryOp::Implies => {
                Formula::implies(to_implies_not(l, placeholder), to_implies_not(r, placeholder))
            }
            // a & b  ==  ~(a -> ~b)
            BinaryOp::And => Formula::not(Formula::implies(
                to_implies_not(l, placeholder),
                Formula::not(to_implies_not(r, placeholder)),
            )),
            // a | b  ==  ~a -> b
            BinaryOp::Or => Formula::implies(
                Formula::not(to_implies_not(l, placeholder)),
                to_implies_not(r, placeholder),
            ),
            BinaryOp::Xor | BinaryOp::Iff | BinaryOp::Nand | BinaryOp::Nor => {
                to_implies_not(&to_not_and_or(formula, placeholder), placeholder)
            }
        },
    }
}

/// Rewrites `formula` into an equivalent formula that only uses `->` and the constant `F`.
/// No placeholder is needed for constants, it is only handed on to the normalization into `~`, `&`, `|` for connectives outside `&`, `|`, `->`.
pub fn to_implies_false(formula: &Formula, placeholder: &Formula) -> Formula {
    match formula {
        Formula::Var(_) => formula.clone(),
        Formula::Const(Constant::T) => Formula::implies(Formula::ffalse(), Formula::ffalse()),
        Formula::Const(Constant::F) => formula.clone(),
        Formula::Unary(UnaryOp::Not, f) => {
            Formula::implies(to_implies_false(f, placeholder), Formula::ffalse())
        }
        Formula::Binary(op, l, r) => match op {
            BinaryOp::Implies => Formula::implies(
                to_implies_false(l, placeholder),
                to_implies_false(r, placeholder),
            ),
            // a & b  ==  ~(a -> ~b)
            BinaryOp::And => {
                let left = to_implies_false(l, placeholder);
                let right = to_implies_false(r, placeholder);
                let inner = Formula::implies(left, Formula::implies(right, Formula::ffalse()));
                Formula::implies(inner, Formula::ffalse())
            }
            // a | b  ==  ~(~a & ~b)
            BinaryOp::Or => {
                let left = to_implies_false(l, placeholder);
                let right = to_implies_false(r, placeholder);
                let both_false = Formula::and(
                    Formula::implies(left, Formula::ffalse()),
                    Formula::implies(right, Formula::ffalse()),
                );
                Formula::implies(to_implies_false(&both_false, placeholder), Formula::ffalse())
            }
            BinaryOp::Xor | BinaryOp::Iff | BinaryOp::Nand | BinaryOp::Nor => {
                to_implies_false(&to_not_and_or(formula, placeholder), placeholder)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use quickcheck_macros::quickcheck;

    use crate::{rewrite::Basis, semantics::is_equivalent};

    use super::*;

    fn p() -> Formula {
        Formula::var("p")
    }

    fn q() -> Formula {
        Formula::var("q")
    }

    #[test]
    fn test_implies_not_constants() {
        let t = Formula::implies(p(), p());
        assert_eq!(to_implies_not(&Formula::ttrue(), &p()), t);
        assert_eq!(to_implies_not(&Formula::ffalse(), &p()), Formula::not(t));
    }

    #[test]
    fn test_implies_not_and_or() {
        let and = to_implies_not(&Formula::and(p(), q()), &p());
        assert_eq!(and, Formula::not(Formula::implies(p(), Formula::not(q()))));
        let or = to_implies_not(&Formula::or(p(), q()), &p());
        assert_eq!(or, Formula::implies(Formula::not(p()), q()));
    }

    #[test]
    fn test_implies_false_constants() {
        let f = Formula::ffalse();
        assert_eq!(to_implies_false(&Formula::ttrue(), &p()), Formula::implies(f.clone(), f.clone()));
        assert_eq!(to_implies_false(&f, &p()), f);
    }

    #[test]
    fn test_implies_false_not() {
        assert_eq!(
            to_implies_false(&Formula::not(q()), &p()),
            Formula::implies(q(), Formula::ffalse())
        );
    }

    #[test]
    fn test_implies_false_and() {
        let result = to_implies_false(&Formula::and(p(), q()), &p());
        let expected = Formula::implies(
            Formula::implies(p(), Formula::implies(q(), Formula::ffalse())),
            Formula::ffalse(),
        );
        assert_eq!(result, expected);

        // True exactly when both p and q are true
        for (vp, vq) in [(false, false), (false, true), (true, false), (true, true)] {
            let assignment: IndexMap<String, bool> =
                [("p".to_string(), vp), ("q".to_string(), vq)].into_iter().collect();
            assert_eq!(result.evaluate(&assignment), Some(vp && vq));
        }
    }

    #[test]
    fn test_implies_false_or() {
        let f = Formula::or(p(), q());
        let result = to_implies_false(&f, &p());
        assert!(Basis::ImpliesFalse.admits(&result).is_ok());
        assert!(is_equivalent(&f, &result));
    }

    #[quickcheck]
    fn test_implies_not_equivalent(f: Formula) -> bool {
        is_equivalent(&f, &to_implies_not(&f, &p()))
    }

    #[quickcheck]
    fn test_implies_not_in_basis(f: Formula) -> bool {
        Basis::ImpliesNot.admits(&to_implies_not(&f, &p())).is_ok()
    }

    #[quickcheck]
    fn test_implies_false_equivalent(f: Formula) -> bool {
        is_equivalent(&f, &to_implies_false(&f, &p()))
    }

    #[quickcheck]
    fn test_implies_false_in_basis(f: Formula) -> bool {
        Basis::ImpliesFalse.admits(&to_implies_false(&f, &p())).is_ok()
    }
}
