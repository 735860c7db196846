//! Breakpoint table and width-based selection.
//!
//! Four fixed tiers ordered by descending minimum width. Each tier owns an
//! independent arrangement in the layout document and a column count that
//! bounds `x + w` for every item placed on it.

use gridkit_core::LayoutError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Screen-width tier.
///
/// Variant order matches [`Breakpoint::ALL`], widest first, so ordered maps
/// keyed by breakpoint iterate from `xl` down to `sm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xl,
    Lg,
    Md,
    Sm,
}

impl Breakpoint {
    /// All breakpoints by descending threshold
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Xl,
        Breakpoint::Lg,
        Breakpoint::Md,
        Breakpoint::Sm,
    ];

    /// Minimum container width in pixels
    pub fn threshold(self) -> u32 {
        match self {
            Breakpoint::Xl => 1100,
            Breakpoint::Lg => 996,
            Breakpoint::Md => 768,
            Breakpoint::Sm => 480,
        }
    }

    /// Number of grid columns
    pub fn columns(self) -> u32 {
        match self {
            Breakpoint::Xl => 4,
            Breakpoint::Lg => 3,
            Breakpoint::Md => 2,
            Breakpoint::Sm => 1,
        }
    }

    /// Wire name used as the template config key
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xl => "xl",
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xl" => Ok(Breakpoint::Xl),
            "lg" => Ok(Breakpoint::Lg),
            "md" => Ok(Breakpoint::Md),
            "sm" => Ok(Breakpoint::Sm),
            _ => Err(LayoutError::UnknownBreakpoint {
                name: s.to_string(),
            }),
        }
    }
}

/// Select the breakpoint for a measured container width.
///
/// Returns the widest breakpoint whose threshold is strictly exceeded;
/// `sm` catches everything else. A width exactly on a threshold falls to
/// the next narrower tier.
pub fn select_breakpoint(width: u32) -> Breakpoint {
    Breakpoint::ALL
        .into_iter()
        .find(|bp| width > bp.threshold())
        .unwrap_or(Breakpoint::Sm)
}
