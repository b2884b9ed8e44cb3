//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an employee record.
///
/// Assigned by the roster at insertion time, never chosen by a caller and
/// never reused. Ordering follows assignment order, so later records always
/// compare greater.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeNumber(u32);

impl EmployeeNumber {
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for EmployeeNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<EmployeeNumber> for u32 {
    fn from(value: EmployeeNumber) -> Self {
        value.0
    }
}

impl FromStr for EmployeeNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("EmployeeNumber: {e}")))?;
        Ok(Self(number))
    }
}
