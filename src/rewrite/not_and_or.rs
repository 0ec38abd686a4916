use crate::formula::{BinaryOp, Constant, Formula, UnaryOp};

/// Rewrites `formula` into an equivalent formula that only uses `~`, `&`, and `|`.
/// The constants are encoded using the `placeholder` variable:
/// - `F` becomes `p & ~p`
/// - `T` becomes `~(p & ~p)`
///
/// This is the normal form the other conversions fall back to for connectives they do not handle themselves.
pub fn to_not_and_or(formula: &Formula, placeholder: &Formula) -> Formula {
    match formula {
        Formula::Var(_) => formula.clone(),
        Formula::Const(c) => {
            let contradiction = Formula::and(placeholder.clone(), Formula::not(placeholder.clone()));
            match c {
                Constant::F => contradiction,
                Constant::T => Formula::not(contradiction),
            }
        }
        Formula::Unary(UnaryOp::Not, f) => Formula::not(to_not_and_or(f, placeholder)),
        Formula::Binary(op, l, r) => {
            let left = to_not_and_or(l, placeholder);
            let right = to_not_and_or(r, placeholder);
            match op {
                BinaryOp::And => Formula::and(left, right),
                BinaryOp::Or => Formula::or(left, right),
                // a -> b  ==  ~a | b
                BinaryOp::Implies => Formula::or(Formula::not(left), right),
                BinaryOp::Xor => {
                    let xor = Formula::or(
                        Formula::and(Formula::not(left.clone()), right.clone()),
                        Formula::and(left, Formula::not(right)),
                    );
                    to_not_and_or(&xor, placeholder)
                }
                BinaryOp::Iff => {
                    let iff = Formula::and(
                        Formula::implies(left.clone(), right.clone()),
                        Formula::implies(right, left),
                    );
                    to_not_and_or(&iff, placeholder)
                }
                BinaryOp::Nand => Formula::not(Formula::and(left, right)),
                BinaryOp::Nor => Formula::not(Formula::or(left, right)),
            }
        }
    }
}
