const DEFAULT_PLACEHOLDER: &str = "p";
const DEFAULT_PLACEHOLDER_POLICY: PlaceholderPolicy = PlaceholderPolicy::Reuse;
const DEFAULT_CHECK_BASIS: bool = true;
const DEFAULT_VERIFY: bool = false;

/// How the rewriter treats a placeholder variable that already occurs in the input formula.
/// The placeholder is used to encode the constants `T` and `F` in bases that do not contain them (e.g. `F` becomes `p & ~p`).
/// Those encodings are tautologies resp. contradictions in the placeholder, so a collision never changes the truth value.
/// It does, however, tie the encoded constant to a variable of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderPolicy {
    /// Use the configured placeholder regardless of the variables of the input.
    #[default]
    Reuse,
    /// Fail with [RewriteError::PlaceholderCollision](crate::RewriteError::PlaceholderCollision) if the input uses the placeholder.
    Reject,
    /// Use the configured name, suffixed with the smallest number that makes it unused in the input (`p`, `p1`, `p2`, ...).
    Fresh,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// The name of the variable used to encode constants.
    pub placeholder: String,
    /// What to do if the placeholder occurs in the input formula.
    pub placeholder_policy: PlaceholderPolicy,
    /// Whether to check that the rewritten formula only uses operators of the target basis.
    pub check_basis: bool,
    /// Whether to check that the rewritten formula is equivalent to the input.
    /// This enumerates all assignments and is thus exponential in the number of variables.
    pub verify: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_policy: DEFAULT_PLACEHOLDER_POLICY,
            check_basis: DEFAULT_CHECK_BASIS,
            verify: DEFAULT_VERIFY,
        }
    }
}

impl Options {
    pub fn set_placeholder(&mut self, name: impl Into<String>) {
        self.placeholder = name.into()
    }
}
