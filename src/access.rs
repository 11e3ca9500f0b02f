//! Password gate.

use std::fmt;

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

impl AccessDecision {
    pub fn is_granted(self) -> bool {
        self == AccessDecision::Granted
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Granted => write!(f, "Access granted"),
            AccessDecision::Denied => write!(f, "Access denied"),
        }
    }
}

/// Compare `candidate` against `expected` exactly (case-sensitive, no trimming).
pub fn check_access(candidate: &str, expected: &str) -> AccessDecision {
    if candidate == expected {
        tracing::info!("password accepted");
        AccessDecision::Granted
    } else {
        tracing::info!("password rejected");
        AccessDecision::Denied
    }
}
