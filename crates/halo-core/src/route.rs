//! Hash fragment classification.

use std::fmt;

const CARD_A_PREFIX: &str = "/cards/cardA";
const CARD_B_PREFIX: &str = "/cards/cardB";

/// Logical page identity derived from the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing view with the scroll-driven dot. Also the fallback for any
    /// fragment that is empty or unrecognized.
    #[default]
    Hero,
    CardA,
    CardB,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Hero, Self::CardA, Self::CardB];

    /// Classify a fragment (text after `#`) by prefix.
    ///
    /// The fragment must already have its `#` removed; a `#` left in place
    /// is part of the path and matches no card.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.starts_with(CARD_A_PREFIX) {
            Self::CardA
        } else if fragment.starts_with(CARD_B_PREFIX) {
            Self::CardB
        } else {
            Self::Hero
        }
    }

    /// Stable key, also used as the `activeCard` parameter value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::CardA => "cardA",
            Self::CardB => "cardB",
        }
    }

    /// Canonical fragment that navigates to this route.
    #[must_use]
    pub const fn fragment(self) -> &'static str {
        match self {
            Self::Hero => "/hero",
            Self::CardA => CARD_A_PREFIX,
            Self::CardB => CARD_B_PREFIX,
        }
    }

    #[must_use]
    pub const fn is_card(self) -> bool {
        matches!(self, Self::CardA | Self::CardB)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
