//! Shop status value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shop business status as stored.
///
/// `1` means open and `0` closed. Any other integer is stored verbatim and
/// reported as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopStatus(pub i32);

impl ShopStatus {
    /// Shop is open for orders.
    pub const OPEN: Self = Self(1);
    /// Shop is closed.
    pub const CLOSED: Self = Self(0);

    /// Whether this status means open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.0 == Self::OPEN.0
    }

    /// Human-readable label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.is_open() { "open" } else { "closed" }
    }
}

impl From<i32> for ShopStatus {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ShopStatus::OPEN.label(), "open");
        assert_eq!(ShopStatus::CLOSED.label(), "closed");
        assert_eq!(ShopStatus(7).label(), "closed");
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&ShopStatus::OPEN).unwrap(), "1");
    }
}
