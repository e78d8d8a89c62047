//! Game configuration options.

use crate::player::Side;

/// Configuration options for an Indigo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use indigo::{GameOptions, Side};
///
/// let options = GameOptions::default()
///     .with_first(Side::Computer)
///     .with_hand_size(6);
/// assert_eq!(options.first, Side::Computer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Who plays first in every round.
    pub first: Side,
    /// Cards dealt face up to the table before the first round.
    pub table_deal: usize,
    /// Cards dealt to each hand whenever both hands run out.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            first: Side::Human,
            table_deal: 4,
            hand_size: 6,
        }
    }
}

impl GameOptions {
    /// Sets who plays first.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{GameOptions, Side};
    ///
    /// let options = GameOptions::default().with_first(Side::Computer);
    /// assert_eq!(options.first, Side::Computer);
    /// ```
    #[must_use]
    pub const fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    /// Sets the number of cards dealt to the table at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_deal(2);
    /// assert_eq!(options.table_deal, 2);
    /// ```
    #[must_use]
    pub const fn with_table_deal(mut self, cards: usize) -> Self {
        self.table_deal = cards;
        self
    }

    /// Sets the number of cards dealt to each hand on replenishment.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, cards: usize) -> Self {
        self.hand_size = cards;
        self
    }
}
