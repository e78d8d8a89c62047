//! Seats and per-player state.

use core::fmt;

use crate::card::Card;
use crate::error::ActionError;
use crate::pile::CardSet;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human at the console.
    Human,
    /// The scripted computer opponent.
    Computer,
}

impl Side {
    /// Both sides, human first.
    pub const BOTH: [Self; 2] = [Self::Human, Self::Computer];

    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// Returns the name printed for this side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's hand, captured cards and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    /// Cards in hand.
    pub hand: CardSet,
    /// Cards captured from the table.
    pub won: CardSet,
    /// Points scored so far.
    pub score: u32,
}

impl Player {
    /// Creates a player with an empty hand and no score.
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            hand: CardSet::new(),
            won: CardSet::new(),
            score: 0,
        }
    }

    /// Returns which seat this player occupies.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the player's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.side.name()
    }

    /// Returns the number of captured cards.
    #[must_use]
    pub fn won_count(&self) -> usize {
        self.won.len()
    }

    /// Removes the card at `index` from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyHand`] when the hand is empty and
    /// [`ActionError::InvalidCard`] when `index` is past the end of the hand.
    pub fn take_card(&mut self, index: usize) -> Result<Card, ActionError> {
        if self.hand.is_empty() {
            return Err(ActionError::EmptyHand);
        }
        let len = self.hand.len();
        self.hand
            .remove(index)
            .ok_or(ActionError::InvalidCard { index, len })
    }
}
