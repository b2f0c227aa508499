use std::fmt;

/// Result of one node execution, consumed by the tree engine to select the
/// next node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The one-time password was accepted by the email service.
    Sent,
    /// The user has no registered mail address. A business condition, not a
    /// fault; the engine routes to an alternate path.
    NoMail,
    /// Missing state, missing configuration, or a failed send.
    Error,
}

impl Outcome {
    /// The branch name the tree engine routes on.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Sent => "sent",
            Outcome::NoMail => "noMail",
            Outcome::Error => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
