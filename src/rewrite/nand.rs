use crate::formula::{BinaryOp, Constant, Formula, UnaryOp};

use super::not_and_or::to_not_and_or;

/// Rewrites `formula` into an equivalent formula that only uses `-&`.
/// Constants are encoded using the `placeholder` variable `p`:
/// `T` becomes `p -& (p -& p)` and `F` its self-NAND.
pub fn to_nand(formula: &Formula, placeholder: &Formula) -> Formula {
    match formula {
        Formula::Var(_) => formula.clone(),
        Formula::Const(c) => {
            let p = placeholder.clone();
            let t = Formula::nand(p.clone(), Formula::nand(p.clone(), p));
            match c {
                Constant::T => t,
                Constant::F => Formula::nand(t.clone(), t),
            }
        }
        Formula::Unary(UnaryOp::Not, f) => {
            let a = to_nand(f, placeholder);
            Formula::nand(a.clone(), a)
        }
        Formula::Binary(op, l, r) => match op {
            BinaryOp::And => {
                let x = Formula::nand(to_nand(l, placeholder), to_nand(r, placeholder));
                Formula::nand(x.clone(), x)
            }
            BinaryOp::Or => {
                let left = to_nand(l, placeholder);
                let right = to_nand(r, placeholder);
                Formula::nand(
                    Formula::nand(left.clone(), left),
                    Formula::nand(right.clone(), right),
                )
            }
            BinaryOp::Implies => {
                let material = Formula::or(Formula::not(l.as_ref().clone()), r.as_ref().clone());
                to_nand(&material, placeholder)
            }
            BinaryOp::Xor | BinaryOp::Iff => to_nand(&to_not_and_or(formula, placeholder), placeholder),
            BinaryOp::Nand => Formula::nand(to_nand(l, placeholder), to_nand(r, placeholder)),
            BinaryOp::Nor => {
                let negated = Formula::not(Formula::or(l.as_ref().clone(), r.as_ref().clone()));
                to_nand(&negated, placeholder)
            }
        },
    }
}
