//! An engine for the two-player Indigo card game.
//!
//! A human and a scripted computer take turns playing one card each onto a
//! shared table pile. Playing a card that matches the suit or rank of the
//! previous card captures the whole pile. Aces, tens and court cards score a
//! point each when captured, and whoever captured more cards gets a bonus
//! when the deck runs out.
//!
//! The [`Game`] type owns the deck, table and players and steps through the
//! rules. Seats are driven by a [`Controller`]: [`Computer`] for the scripted
//! opponent and [`console::Prompt`] for a person at a terminal.
//!
//! # Example
//!
//! ```
//! use indigo::{Computer, Event, Game, GameOptions, RoundOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut events: Vec<Event> = Vec::new();
//! let outcome = game.run(&mut Computer, &mut Computer, &mut events);
//! assert!(matches!(outcome, Ok(RoundOutcome::Finished(_))));
//! ```

pub mod card;
pub mod computer;
pub mod console;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod pile;
pub mod player;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use computer::Computer;
pub use error::{ActionError, DealError, FinishError, GameError, ParseCardError, PileError};
pub use event::{Event, Reporter, Tally, WinReport};
pub use game::{
    Controller, FINAL_BONUS, Game, GameState, Outcome, RoundOutcome, RoundStart, Selection,
};
pub use options::GameOptions;
pub use pile::CardSet;
pub use player::{Player, Side};
pub use table::{Table, TableStatus};
