//! Game state types.

use crate::player::Side;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the initial table deal.
    Dealing,
    /// Waiting for this side to play a card.
    PlayerTurn(Side),
    /// This side just played; the table must be checked for a capture.
    CheckWin(Side),
    /// Start of a round: hands are refilled from the deck if both are empty.
    Replenish,
    /// Deck and hands are exhausted; only the final settlement remains.
    Finished,
}

/// The sides involved in the most recent capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Who took the table.
    pub winner: Side,
    /// The other player.
    pub loser: Side,
}

/// What [`Game::start_round`](super::Game::start_round) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStart {
    /// Both hands were empty and have been refilled.
    Dealt,
    /// Hands still held cards; nothing was dealt.
    Continued,
    /// Nothing is left to play; the game moved to [`GameState::Finished`].
    Exhausted,
}
