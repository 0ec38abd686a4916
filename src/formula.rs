//! Representation of propositional formulas.

use std::{fmt::Display, rc::Rc};

use indexmap::IndexSet;
use quickcheck::{Arbitrary, Gen};

/// The two nullary constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    /// The constant true
    T,
    /// The constant false
    F,
}

/// Unary connectives. Negation is the only one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
}

/// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Xor,
    Iff,
    Nand,
    Nor,
}

/// Every symbol that can appear at the root of a non-variable formula.
/// Constants are treated as nullary operators, so that bases such as `{->, F}` can be described as a set of operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    Xor,
    Iff,
    Nand,
    Nor,
}

impl From<Constant> for Operator {
    fn from(c: Constant) -> Self {
        match c {
            Constant::T => Operator::True,
            Constant::F => Operator::False,
        }
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Not => Operator::Not,
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::And => Operator::And,
            BinaryOp::Or => Operator::Or,
            BinaryOp::Implies => Operator::Implies,
            BinaryOp::Xor => Operator::Xor,
            BinaryOp::Iff => Operator::Iff,
            BinaryOp::Nand => Operator::Nand,
            BinaryOp::Nor => Operator::Nor,
        }
    }
}

/// A propositional formula.
/// A formula is inductively defined as follows:
/// - A variable `x` ([Formula::Var]) is a formula
/// - The constants `T` and `F` ([Formula::Const]) are formulas
/// - If `f` is a formula, then `~f` ([Formula::Unary]) is a formula
/// - If `f` and `g` are formulas and `*` is a binary connective, then `(f*g)` ([Formula::Binary]) is a formula
///
/// Formulas are immutable. Children are reference counted, so that rewrites can share subformulas instead of copying them.
/// Equality is structural: two formulas are equal iff their trees are identical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A propositional variable
    Var(String),
    /// One of the constants `T` or `F`
    Const(Constant),
    /// A unary connective applied to a formula
    Unary(UnaryOp, Rc<Formula>),
    /// A binary connective applied to two formulas, order matters
    Binary(BinaryOp, Rc<Formula>, Rc<Formula>),
}

impl Formula {
    /// Creates a new formula only consisting of the variable with the given name
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Returns the formula `T`
    pub fn ttrue() -> Self {
        Self::Const(Constant::T)
    }

    /// Returns the formula `F`
    pub fn ffalse() -> Self {
        Self::Const(Constant::F)
    }

    pub fn constant(c: Constant) -> Self {
        Self::Const(c)
    }

    /// Creates the negation of the given formula.
    /// Unlike most formula builders, this does not collapse double negations.
    pub fn not(f: Formula) -> Self {
        Self::Unary(UnaryOp::Not, Rc::new(f))
    }

    /// Applies the binary connective `op` to `left` and `right`.
    pub fn binary(op: BinaryOp, left: Formula, right: Formula) -> Self {
        Self::Binary(op, Rc::new(left), Rc::new(right))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Implies, left, right)
    }

    pub fn xor(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Xor, left, right)
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Iff, left, right)
    }

    pub fn nand(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Nand, left, right)
    }

    pub fn nor(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Nor, left, right)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Formula::Var(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Formula::Const(_))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Formula::Unary(_, _))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Formula::Binary(_, _, _))
    }

    /// Returns the operator at the root of this formula, or `None` if the formula is a variable.
    pub fn root(&self) -> Option<Operator> {
        match self {
            Formula::Var(_) => None,
            Formula::Const(c) => Some((*c).into()),
            Formula::Unary(op, _) => Some((*op).into()),
            Formula::Binary(op, _, _) => Some((*op).into()),
        }
    }

    /// Returns the names of all variables occurring in this formula, in order of first occurrence (left to right).
    pub fn variables(&self) -> IndexSet<String> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut IndexSet<String>) {
        match self {
            Formula::Var(v) => {
                vars.insert(v.clone());
            }
            Formula::Const(_) => {}
            Formula::Unary(_, f) => f.collect_variables(vars),
            Formula::Binary(_, l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Returns all operators (including constants) occurring in this formula, in order of first occurrence in pre-order.
    pub fn operators(&self) -> IndexSet<Operator> {
        let mut ops = IndexSet::new();
        self.collect_operators(&mut ops);
        ops
    }

    fn collect_operators(&self, ops: &mut IndexSet<Operator>) {
        if let Some(op) = self.root() {
            ops.insert(op);
        }
        match self {
            Formula::Var(_) | Formula::Const(_) => {}
            Formula::Unary(_, f) => f.collect_operators(ops),
            Formula::Binary(_, l, r) => {
                l.collect_operators(ops);
                r.collect_operators(ops);
            }
        }
    }

    /// The number of nodes of the formula, counting shared subformulas once per occurrence.
    pub fn size(&self) -> usize {
        match self {
            Formula::Var(_) | Formula::Const(_) => 1,
            Formula::Unary(_, f) => 1 + f.size(),
            Formula::Binary(_, l, r) => 1 + l.size() + r.size(),
        }
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::T => write!(f, "T"),
            Constant::F => write!(f, "F"),
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "~"),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::And => write!(f, "&"),
            BinaryOp::Or => write!(f, "|"),
            BinaryOp::Implies => write!(f, "->"),
            BinaryOp::Xor => write!(f, "+"),
            BinaryOp::Iff => write!(f, "<->"),
            BinaryOp::Nand => write!(f, "-&"),
            BinaryOp::Nor => write!(f, "-|"),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::True => write!(f, "{}", Constant::T),
            Operator::False => write!(f, "{}", Constant::F),
            Operator::Not => write!(f, "{}", UnaryOp::Not),
            Operator::And => write!(f, "{}", BinaryOp::And),
            Operator::Or => write!(f, "{}", BinaryOp::Or),
            Operator::Implies => write!(f, "{}", BinaryOp::Implies),
            Operator::Xor => write!(f, "{}", BinaryOp::Xor),
            Operator::Iff => write!(f, "{}", BinaryOp::Iff),
            Operator::Nand => write!(f, "{}", BinaryOp::Nand),
            Operator::Nor => write!(f, "{}", BinaryOp::Nor),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Var(v) => write!(f, "{}", v),
            Formula::Const(c) => write!(f, "{}", c),
            Formula::Unary(op, fm) => write!(f, "{}{}", op, fm),
            Formula::Binary(op, l, r) => write!(f, "({}{}{})", l, op, r),
        }
    }
}

/* Arbitrary */

/// The variables arbitrary formulas are built from.
/// Includes `p`, the default placeholder, so that collisions with it are exercised as well.
const ARBITRARY_VARIABLES: [&str; 4] = ["p", "q", "r", "s"];
/// Bounds the depth of arbitrary formulas, conversions into small bases grow quickly.
const MAX_ARBITRARY_DEPTH: usize = 3;

const BINARY_OPS: [BinaryOp; 7] = [
    BinaryOp::And,
    BinaryOp::Or,
    BinaryOp::Implies,
    BinaryOp::Xor,
    BinaryOp::Iff,
    BinaryOp::Nand,
    BinaryOp::Nor,
];

fn arbitrary_leaf(g: &mut Gen) -> Formula {
    match g.choose(&[0, 1, 2, 3, 4, 5]) {
        Some(&0) => Formula::ttrue(),
        Some(&1) => Formula::ffalse(),
        Some(_) => match g.choose(&ARBITRARY_VARIABLES) {
            Some(v) => Formula::var(*v),
            None => unreachable!(),
        },
        None => unreachable!(),
    }
}

impl Formula {
    /// Generates a random formula of depth at most `depth` over the variables `p`, `q`, `r`, `s`.
    pub fn random(g: &mut Gen, depth: usize) -> Self {
        if depth == 0 {
            return arbitrary_leaf(g);
        }
        match g.choose(&[0, 1, 2, 3, 4]) {
            Some(&0) => arbitrary_leaf(g),
            Some(&1) => Formula::not(Self::random(g, depth - 1)),
            Some(_) => match g.choose(&BINARY_OPS) {
                Some(&op) => {
                    let left = Self::random(g, depth - 1);
                    let right = Self::random(g, depth - 1);
                    Formula::binary(op, left, right)
                }
                None => unreachable!(),
            },
            None => unreachable!(),
        }
    }
}

impl Arbitrary for Formula {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(MAX_ARBITRARY_DEPTH);
        Self::random(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Formula::Var(_) | Formula::Const(_) => Box::new(std::iter::empty()),
            Formula::Unary(_, f) => Box::new(std::iter::once(f.as_ref().clone())),
            Formula::Binary(_, l, r) => {
                Box::new(vec![l.as_ref().clone(), r.as_ref().clone()].into_iter())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_predicates_inspect_root_only() {
        let p = Formula::var("p");
        let t = Formula::ttrue();
        let n = Formula::not(Formula::and(p.clone(), t.clone()));
        let b = Formula::nor(n.clone(), p.clone());

        assert!(p.is_variable() && !p.is_constant() && !p.is_unary() && !p.is_binary());
        assert!(t.is_constant() && !t.is_variable());
        assert!(n.is_unary() && !n.is_binary());
        assert!(b.is_binary() && !b.is_unary());
    }

    #[test]
    fn test_not_keeps_double_negation() {
        let p = Formula::var("p");
        let nn = Formula::not(Formula::not(p.clone()));
        assert_ne!(nn, p);
        assert_eq!(nn.to_string(), "~~p");
    }

    #[test]
    fn test_structural_equality() {
        let f = Formula::and(Formula::var("p"), Formula::var("q"));
        let g = Formula::and(Formula::var("p"), Formula::var("q"));
        let h = Formula::and(Formula::var("q"), Formula::var("p"));
        assert_eq!(f, g);
        assert_ne!(f, h);
    }

    #[test]
    fn test_display() {
        let f = Formula::iff(
            Formula::implies(Formula::var("p"), Formula::ffalse()),
            Formula::nand(Formula::not(Formula::var("x12")), Formula::ttrue()),
        );
        assert_eq!(f.to_string(), "((p->F)<->(~x12-&T))");
        let g = Formula::nor(
            Formula::xor(Formula::var("a"), Formula::var("b")),
            Formula::or(Formula::var("c"), Formula::var("d")),
        );
        assert_eq!(g.to_string(), "((a+b)-|(c|d))");
    }

    #[test]
    fn test_root() {
        assert_eq!(Formula::var("p").root(), None);
        assert_eq!(Formula::ffalse().root(), Some(Operator::False));
        assert_eq!(
            Formula::not(Formula::var("p")).root(),
            Some(Operator::Not)
        );
        assert_eq!(
            Formula::xor(Formula::var("p"), Formula::var("q")).root(),
            Some(Operator::Xor)
        );
    }

    #[test]
    fn test_variables_in_order() {
        let f = Formula::or(
            Formula::and(Formula::var("q"), Formula::var("p")),
            Formula::not(Formula::var("q")),
        );
        let vars: Vec<String> = f.variables().into_iter().collect();
        assert_eq!(vars, vec!["q".to_string(), "p".to_string()]);
    }

    #[test]
    fn test_operators() {
        let f = Formula::implies(Formula::not(Formula::var("p")), Formula::ffalse());
        let ops: Vec<Operator> = f.operators().into_iter().collect();
        assert_eq!(ops, vec![Operator::Implies, Operator::Not, Operator::False]);
        assert!(Formula::var("p").operators().is_empty());
    }

    #[test]
    fn test_size() {
        let p = Formula::var("p");
        let x = Formula::nand(p.clone(), p.clone());
        assert_eq!(Formula::nand(x.clone(), x).size(), 7);
    }

    #[test]
    fn test_random_respects_depth() {
        fn depth(f: &Formula) -> usize {
            match f {
                Formula::Var(_) | Formula::Const(_) => 0,
                Formula::Unary(_, f) => 1 + depth(f),
                Formula::Binary(_, l, r) => 1 + depth(l).max(depth(r)),
            }
        }
        let mut g = Gen::new(10);
        for d in 0..5 {
            for _ in 0..20 {
                let f = Formula::random(&mut g, d);
                assert!(depth(&f) <= d, "{} deeper than {}", f, d);
                assert!(f
                    .variables()
                    .iter()
                    .all(|v| ARBITRARY_VARIABLES.contains(&v.as_str())));
            }
        }
    }

    #[quickcheck]
    fn test_clone_is_equal(f: Formula) -> bool {
        f.clone() == f
    }

    #[quickcheck]
    fn test_shrink_yields_subformulas(f: Formula) -> bool {
        f.shrink().all(|s| s.size() < f.size())
    }
}
