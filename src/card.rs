//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Returns the symbol used when printing the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }

    /// Looks up a suit by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.symbol() == symbol)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the label used when printing the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Looks up a rank by its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }

    /// Returns whether a captured card of this rank is worth a point
    /// (A, 10, J, Q and K).
    #[must_use]
    pub const fn is_scoring(self) -> bool {
        matches!(
            self,
            Self::Ace | Self::Ten | Self::Jack | Self::Queen | Self::King
        )
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns every card of a standard deck, suit by suit, ace to king.
    #[must_use]
    pub fn deck() -> Vec<Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Self::new(rank, suit)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the printed form of a card, e.g. `"10♦"` or `"K♣"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_symbol(symbol).ok_or(ParseCardError::UnknownSuit(symbol))?;
        let rank = Rank::from_label(chars.as_str()).ok_or(ParseCardError::UnknownRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn deck_holds_every_card_once() {
        let deck = Card::deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck[DECK_SIZE - 1], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn display_and_parse_agree() {
        for card in Card::deck() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("10X".parse::<Card>(), Err(ParseCardError::UnknownSuit('X')));
        assert_eq!("1♦".parse::<Card>(), Err(ParseCardError::UnknownRank));
        assert_eq!("♦".parse::<Card>(), Err(ParseCardError::UnknownRank));
    }

    #[test]
    fn scoring_ranks() {
        let scoring: Vec<&str> = Rank::ALL
            .into_iter()
            .filter(|rank| rank.is_scoring())
            .map(Rank::label)
            .collect();
        assert_eq!(scoring, ["A", "10", "J", "Q", "K"]);
    }
}
