//! The computer opponent's card choice.
//!
//! When the table has a top card, the computer first looks for hand cards
//! that would capture it. A single match is always played. Several matches, or
//! none at all, fall through to a chooser that prefers cards from a suit or
//! rank the hand holds more than once.

use core::hash::Hash;
use std::collections::HashMap;

use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::{ActionError, GameError};
use crate::game::{Controller, Selection};
use crate::table::Table;

/// Picks the card the computer plays onto `top`.
///
/// Returns `None` only when `hand` is empty.
pub fn choose_card<R: RngCore + ?Sized>(
    hand: &[Card],
    top: Option<Card>,
    rng: &mut R,
) -> Option<Card> {
    let Some(top) = top else {
        log::debug!("empty table, choosing from the whole hand");
        return choose_any(hand, rng);
    };

    let candidates: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|card| card.suit == top.suit || card.rank == top.rank)
        .collect();

    match candidates.as_slice() {
        [] => {
            log::debug!("no card captures {top}");
            choose_any(hand, rng)
        }
        [only] => Some(*only),
        _ => {
            log::debug!("{} cards capture {top}", candidates.len());
            choose_matching(&candidates, top.suit, top.rank, rng)
        }
    }
}

/// Chooses from cards sharing a suit with another card, then from cards
/// sharing a rank, then from everything.
pub fn choose_any<R: RngCore + ?Sized>(cards: &[Card], rng: &mut R) -> Option<Card> {
    let same_suit = grouped(cards, |card| card.suit);
    if !same_suit.is_empty() {
        return same_suit.choose(rng).copied();
    }

    let same_rank = grouped(cards, |card| card.rank);
    if !same_rank.is_empty() {
        return same_rank.choose(rng).copied();
    }

    cards.choose(rng).copied()
}

/// Chooses among capturing cards, preferring the top card's suit when at
/// least two candidates share it, then its rank under the same condition.
pub fn choose_matching<R: RngCore + ?Sized>(
    candidates: &[Card],
    suit: Suit,
    rank: Rank,
    rng: &mut R,
) -> Option<Card> {
    let same_suit: Vec<Card> = candidates
        .iter()
        .copied()
        .filter(|card| card.suit == suit)
        .collect();
    if same_suit.len() > 1 {
        return same_suit.choose(rng).copied();
    }

    let same_rank: Vec<Card> = candidates
        .iter()
        .copied()
        .filter(|card| card.rank == rank)
        .collect();
    if same_rank.len() > 1 {
        return same_rank.choose(rng).copied();
    }

    candidates.choose(rng).copied()
}

/// Cards whose key is shared by at least one other card, in input order.
fn grouped<K, F>(cards: &[Card], key: F) -> Vec<Card>
where
    K: Eq + Hash,
    F: Fn(&Card) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for card in cards {
        *counts.entry(key(card)).or_default() += 1;
    }
    cards
        .iter()
        .copied()
        .filter(|card| counts.get(&key(card)).is_some_and(|&count| count > 1))
        .collect()
}

/// Controller for the computer seat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Computer;

impl Controller for Computer {
    fn select(
        &mut self,
        hand: &[Card],
        table: &Table,
        rng: &mut dyn RngCore,
    ) -> Result<Selection, GameError> {
        let card = choose_card(hand, table.top(), rng).ok_or(ActionError::EmptyHand)?;
        let index = hand
            .iter()
            .position(|held| *held == card)
            .ok_or(ActionError::EmptyHand)?;
        Ok(Selection::Play(index))
    }
}
