//! Priority levels assigned by the text scorer.

use crate::model::task::TaskValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Task urgency, higher is more urgent.
///
/// Serialized as its numeric value (`1..=5`) so stored payloads stay plain
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
    Critical = 5,
}

impl Priority {
    pub const MIN: Priority = Priority::Low;
    pub const MAX: Priority = Priority::Critical;

    /// Numeric value in `1..=5`.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Maps any raw score onto a level, clamping into `1..=5`.
    pub fn clamped(score: i32) -> Self {
        match score {
            i32::MIN..=1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            4 => Self::Urgent,
            _ => Self::Critical,
        }
    }

    /// User-facing short label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
            Self::Critical => "Critical",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.value())
    }
}

impl TryFrom<u8> for Priority {
    type Error = TaskValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            5 => Ok(Self::Critical),
            other => Err(TaskValidationError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        value.value()
    }
}
