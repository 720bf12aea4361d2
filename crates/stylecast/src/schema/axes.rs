//! The two orthogonal overlay axes: breakpoints and interaction states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::UnknownVariant;

/// Viewport breakpoint. `Desktop` is the base; the others are overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    /// Returns true for the base breakpoint, which has no override tier.
    pub fn is_base(self) -> bool {
        self == Breakpoint::Desktop
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "breakpoint",
                value: s.to_string(),
                available: Breakpoint::ALL.iter().map(|b| b.as_str()).collect(),
            })
    }
}

/// Interaction state or structural pseudo-class/element of an element.
///
/// `Default` means "no state"; every other variant selects a sparse overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Active,
    Focus,
    FocusWithin,
    FocusVisible,
    Visited,
    Disabled,
    FirstChild,
    LastChild,
    Before,
    After,
}

impl InteractionState {
    pub const ALL: [InteractionState; 12] = [
        InteractionState::Default,
        InteractionState::Hover,
        InteractionState::Active,
        InteractionState::Focus,
        InteractionState::FocusWithin,
        InteractionState::FocusVisible,
        InteractionState::Visited,
        InteractionState::Disabled,
        InteractionState::FirstChild,
        InteractionState::LastChild,
        InteractionState::Before,
        InteractionState::After,
    ];

    /// Returns true for the state that has no overlay.
    pub fn is_default(self) -> bool {
        self == InteractionState::Default
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionState::Default => "default",
            InteractionState::Hover => "hover",
            InteractionState::Active => "active",
            InteractionState::Focus => "focus",
            InteractionState::FocusWithin => "focus-within",
            InteractionState::FocusVisible => "focus-visible",
            InteractionState::Visited => "visited",
            InteractionState::Disabled => "disabled",
            InteractionState::FirstChild => "first-child",
            InteractionState::LastChild => "last-child",
            InteractionState::Before => "before",
            InteractionState::After => "after",
        }
    }

    /// The CSS selector suffix for this state (`:hover`, `::before`, ...).
    pub fn selector_suffix(self) -> &'static str {
        match self {
            InteractionState::Default => "",
            InteractionState::Hover => ":hover",
            InteractionState::Active => ":active",
            InteractionState::Focus => ":focus",
            InteractionState::FocusWithin => ":focus-within",
            InteractionState::FocusVisible => ":focus-visible",
            InteractionState::Visited => ":visited",
            InteractionState::Disabled => ":disabled",
            InteractionState::FirstChild => ":first-child",
            InteractionState::LastChild => ":last-child",
            InteractionState::Before => "::before",
            InteractionState::After => "::after",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InteractionState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "interaction state",
                value: s.to_string(),
                available: InteractionState::ALL.iter().map(|s| s.as_str()).collect(),
            })
    }
}
