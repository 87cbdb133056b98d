//! Terminal decision outcomes.

/// Result of one verification decision.
///
/// Both variants are terminal; there is no retry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Continue the chain on the trusted branch.
    ///
    /// Produced for a clean credential, for a missing client, and for
    /// every request-time error (fail-open).
    Trusted,

    /// Continue the chain on the flagged branch: the credential is
    /// known-leaked.
    Flagged,
}

impl Outcome {
    /// Checks if this is the trusted outcome.
    #[must_use]
    pub const fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted)
    }

    /// Checks if this is the flagged outcome.
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Maps the outcome onto the chain's boolean routing convention,
    /// where `true` is the trusted/continue branch.
    #[must_use]
    pub const fn as_branch(&self) -> bool {
        matches!(self, Self::Trusted)
    }
}
