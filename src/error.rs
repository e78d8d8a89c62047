//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when taking cards out of a card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Requested count is zero.
    #[error("invalid number of cards")]
    InvalidCount,
    /// Fewer cards remain than were requested.
    #[error("the remaining cards are insufficient to meet the request ({requested} requested, {available} available)")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the set.
        available: usize,
    },
    /// The set holds no cards.
    #[error("no cards in the set")]
    Empty,
}

/// Errors that can occur when a player plays a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player has no cards to play.
    #[error("no cards in hand")]
    EmptyHand,
    /// Card index outside the hand.
    #[error("card {index} is not in a hand of {len} cards")]
    InvalidCard {
        /// Zero-based index that was chosen.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck ({needed} needed, {available} available)")]
    NotEnoughCards {
        /// Cards needed for the deal.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Errors that can occur when settling the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The game has not run out of cards yet.
    #[error("invalid game state for finishing")]
    InvalidState,
    /// Nobody has won a pile, so there is no one to give the leftovers to.
    #[error("no win was recorded before the end of the game")]
    NoWinRecorded,
    /// The final settlement already ran.
    #[error("the game is already finished")]
    AlreadyFinished,
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Empty input.
    #[error("empty card")]
    Empty,
    /// Last character is not a suit symbol.
    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
    /// Text before the suit is not a rank.
    #[error("unknown rank")]
    UnknownRank,
}

/// Any error raised while driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// A card set operation failed.
    #[error(transparent)]
    Pile(#[from] PileError),
    /// A play was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// A deal was rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The end of game settlement failed.
    #[error(transparent)]
    Finish(#[from] FinishError),
    /// Console input or output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
