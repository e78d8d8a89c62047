//! The shared pile both players play onto.

use core::fmt;

use crate::card::Card;
use crate::pile::CardSet;

/// The table pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Cards on the table, most recent play last.
    pub pile: CardSet,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pile: CardSet::new(),
        }
    }

    /// Returns the most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.pile.peek_top().ok()
    }

    /// Returns a snapshot of the table size and top card.
    #[must_use]
    pub fn status(&self) -> TableStatus {
        TableStatus {
            size: self.pile.len(),
            top: self.top(),
        }
    }

    /// Describes the table, e.g. `"4 cards on the table, and the top card is 7♠"`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.status().to_string()
    }

    /// Returns whether the last two cards share a suit or a rank.
    ///
    /// Only the two most recent cards are compared.
    #[must_use]
    pub fn is_winning_play(&self) -> bool {
        match self.pile.cards() {
            [.., below, top] => below.suit == top.suit || below.rank == top.rank,
            _ => false,
        }
    }
}

/// Size and top card of the table at some moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStatus {
    /// Number of cards on the table.
    pub size: usize,
    /// Top card, if any.
    pub top: Option<Card>,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top {
            Some(top) => write!(
                f,
                "{} cards on the table, and the top card is {top}",
                self.size
            ),
            None => f.write_str("No cards on the table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cards: &[&str]) -> Table {
        let mut table = Table::new();
        table.pile.append(cards.iter().map(|text| text.parse::<Card>().unwrap()));
        table
    }

    #[test]
    fn winning_play_needs_two_matching_cards() {
        assert!(table(&["10♦", "K♦"]).is_winning_play());
        assert!(table(&["9♠", "9♣"]).is_winning_play());
        assert!(!table(&["2♥", "5♣"]).is_winning_play());
        assert!(!table(&["A♦"]).is_winning_play());
        assert!(!table(&[]).is_winning_play());
    }

    #[test]
    fn only_the_last_two_cards_count() {
        assert!(!table(&["7♥", "7♠", "2♦"]).is_winning_play());
        assert!(table(&["Q♣", "3♥", "3♦"]).is_winning_play());
    }

    #[test]
    fn describe_empty_and_full() {
        assert_eq!(table(&[]).describe(), "No cards on the table");
        assert_eq!(
            table(&["A♦", "5♣", "K♠"]).describe(),
            "3 cards on the table, and the top card is K♠"
        );
    }
}
