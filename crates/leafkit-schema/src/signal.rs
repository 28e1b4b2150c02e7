//! Signal and port declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal visibility.
///
/// Primitives require every declared port to carry [`Visibility::Port`];
/// internal signals exist for downstream composition layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Externally visible connection point.
    Port,
    /// Internal signal, not exposed.
    Internal,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Port => write!(f, "port"),
            Visibility::Internal => write!(f, "internal"),
        }
    }
}

/// A named signal endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Signal name.
    pub name: String,
    /// Visibility tag.
    pub vis: Visibility,
}

impl Port {
    /// Create a new externally-visible port.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Visibility::Port,
        }
    }

    /// Create an internal (non-exposed) signal.
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Visibility::Internal,
        }
    }

    /// Get the signal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether this signal is an externally-visible port.
    pub fn is_port(&self) -> bool {
        self.vis == Visibility::Port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_visibility() {
        let p = Port::new("d");
        assert_eq!(p.name(), "d");
        assert!(p.is_port());

        let s = Port::internal("mid");
        assert_eq!(s.name(), "mid");
        assert!(!s.is_port());
    }

    #[test]
    fn test_visibility_display() {
        assert_eq!(Visibility::Port.to_string(), "port");
        assert_eq!(Visibility::Internal.to_string(), "internal");
    }
}
