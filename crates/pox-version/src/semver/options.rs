/// Evaluation switches for strict constraints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConstraintOptions {
    /// Let pre-release versions satisfy clauses whose operand has no pre-release
    pub include_pre_release: bool,
    /// Read omitted minor/patch positions as zero instead of as a range
    pub zero_padding: bool,
}

impl ConstraintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_pre_release(mut self, include: bool) -> Self {
        self.include_pre_release = include;
        self
    }

    pub fn zero_padding(mut self, zero_padding: bool) -> Self {
        self.zero_padding = zero_padding;
        self
    }
}
