//! Game engine and state management.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{DealError, GameError};
use crate::event::Tally;
use crate::options::GameOptions;
use crate::pile::CardSet;
use crate::player::{Player, Side};
use crate::table::Table;

mod round;
pub mod state;
mod win;

pub use round::RoundOutcome;
pub use state::{GameState, Outcome, RoundStart};
pub use win::{FINAL_BONUS, score_cards};

/// What a controller decided to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Play the card at this zero-based hand index.
    Play(usize),
    /// Leave the game immediately.
    Exit,
}

/// Decides which card a seat plays.
pub trait Controller {
    /// Chooses a card from `hand` given the current `table`.
    ///
    /// `hand` is never empty when called by [`Game::play_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if the choice could not be made, e.g. console input
    /// failed.
    fn select(
        &mut self,
        hand: &[Card],
        table: &Table,
        rng: &mut dyn RngCore,
    ) -> Result<Selection, GameError>;
}

/// An Indigo game between a human and the computer.
///
/// The game owns the deck, the table, both players and the random number
/// generator used for shuffling and for the computer's choices.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not dealt yet.
    pub deck: CardSet,
    /// The shared pile.
    pub table: Table,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// Human then computer, indexed by [`Side`].
    players: [Player; 2],
    /// Most recent capture.
    last_outcome: Option<Outcome>,
    /// Whether the final settlement ran.
    settled: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state, GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = CardSet::full_deck();
        deck.shuffle(&mut rng);
        log::info!("new game with seed {seed}, {} plays first", options.first);

        Self {
            deck,
            table: Table::new(),
            options,
            state: GameState::Dealing,
            players: Side::BOTH.map(Player::new),
            last_outcome: None,
            settled: false,
            rng,
        }
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub const fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Returns the player in the given seat, mutably.
    pub const fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the most recent capture, if any.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Returns both players' scores and captured card counts.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let human = self.player(Side::Human);
        let computer = self.player(Side::Computer);
        Tally {
            human_score: human.score,
            computer_score: computer.score,
            human_cards: human.won_count(),
            computer_cards: computer.won_count(),
        }
    }

    /// Iterates over every card in the game: deck, table, hands and won piles.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .cards()
            .iter()
            .chain(self.table.pile.cards())
            .chain(
                self.players
                    .iter()
                    .flat_map(|player| player.hand.cards().iter().chain(player.won.cards())),
            )
            .copied()
    }

    /// Draws `count` cards from the front of the deck.
    fn draw_from_deck(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let available = self.deck.len();
        self.deck
            .draw(count)
            .map_err(|_| DealError::NotEnoughCards {
                needed: count,
                available,
            })
    }
}
