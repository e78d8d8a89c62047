//! Ordered card sets shared by the deck, the table, hands and won piles.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::PileError;

/// An ordered, mutable sequence of cards.
///
/// The front of the set is where [`CardSet::draw`] takes from; the back is
/// where [`CardSet::append`] adds and [`CardSet::peek_top`] looks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a set holding a full, unshuffled 52 card deck.
    #[must_use]
    pub fn full_deck() -> Self {
        Self::from(Card::deck())
    }

    /// Randomly permutes the cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `count` cards, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InvalidCount`] when `count` is zero and
    /// [`PileError::InsufficientCards`] when the set is too small. The set is
    /// left untouched on error.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, PileError> {
        if count < 1 {
            return Err(PileError::InvalidCount);
        }
        if count > self.cards.len() {
            return Err(PileError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Adds cards to the end of the set, keeping their order.
    pub fn append<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Adds a single card to the end of the set.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the last card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if the set has no cards.
    pub fn peek_top(&self) -> Result<Card, PileError> {
        self.cards.last().copied().ok_or(PileError::Empty)
    }

    /// Removes the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes every card and returns them in order.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a space separated listing of the cards, formatted on demand.
    #[must_use]
    pub fn render(&self) -> Listing<'_> {
        Listing(&self.cards)
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Lazily formatted, space separated card listing.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a>(pub &'a [Card]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
