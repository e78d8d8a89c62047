use crate::card::Card;
use crate::error::{ActionError, DealError, GameError};
use crate::event::{Event, Reporter, WinReport};
use crate::player::Side;

use super::{Controller, Game, GameState, RoundStart, Selection};

/// How a call to [`Game::play_round`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both players moved; more rounds follow.
    Continue,
    /// The cards ran out and the game was settled.
    Finished(WinReport),
    /// The human asked to leave.
    Exited,
}

impl Game {
    /// Deals the initial cards face up onto the table.
    ///
    /// Returns the dealt cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealing state or the deck is
    /// too small.
    pub fn deal(&mut self) -> Result<Vec<Card>, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let cards = self.draw_from_deck(self.options.table_deal)?;
        self.table.pile.append(cards.iter().copied());
        self.state = GameState::Replenish;
        log::debug!("dealt {} cards to the table", cards.len());

        Ok(cards)
    }

    /// Starts a round, refilling both hands when they are empty.
    ///
    /// When both hands and the deck are empty the game moves to
    /// [`GameState::Finished`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not at the start of a round, or if the
    /// deck cannot fill both hands. Nothing is dealt in that case.
    pub fn start_round(&mut self) -> Result<RoundStart, DealError> {
        if self.state != GameState::Replenish {
            return Err(DealError::InvalidState);
        }

        let first = self.options.first;
        if !self.players.iter().all(|player| player.hand.is_empty()) {
            self.state = GameState::PlayerTurn(first);
            return Ok(RoundStart::Continued);
        }

        if self.deck.is_empty() {
            self.state = GameState::Finished;
            log::debug!("deck and hands are empty");
            return Ok(RoundStart::Exhausted);
        }

        let size = self.options.hand_size;
        let needed = size.checked_mul(2).unwrap_or(usize::MAX);
        if self.deck.len() < needed {
            return Err(DealError::NotEnoughCards {
                needed,
                available: self.deck.len(),
            });
        }

        for side in [first, first.opponent()] {
            let cards = self.draw_from_deck(size)?;
            self.player_mut(side).hand.append(cards);
        }
        self.state = GameState::PlayerTurn(first);
        log::debug!("dealt {size} cards to each hand, {} left", self.deck.len());

        Ok(RoundStart::Dealt)
    }

    /// Plays the card at `index` from `side`'s hand onto the table.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not `side`'s turn or `index` is not in the
    /// hand.
    pub fn play(&mut self, side: Side, index: usize) -> Result<Card, ActionError> {
        let GameState::PlayerTurn(turn) = self.state else {
            return Err(ActionError::InvalidState);
        };
        if turn != side {
            return Err(ActionError::NotYourTurn);
        }

        let card = self.player_mut(side).take_card(index)?;
        self.table.pile.push(card);
        self.state = GameState::CheckWin(side);
        log::debug!("{side} plays {card}");

        Ok(card)
    }

    /// Awards the table to the player who just moved if the play captured it,
    /// then passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no play is waiting to be checked.
    pub fn check_win(&mut self) -> Result<Option<WinReport>, ActionError> {
        let GameState::CheckWin(side) = self.state else {
            return Err(ActionError::InvalidState);
        };

        let report = self.table.is_winning_play().then(|| self.win(side, false));
        self.state = if side == self.options.first {
            GameState::PlayerTurn(side.opponent())
        } else {
            GameState::Replenish
        };

        Ok(report)
    }

    /// Plays one round: deal if needed, then one move per player.
    ///
    /// Deals the table first on a fresh game. When the cards have run out,
    /// settles the game instead of playing.
    ///
    /// # Errors
    ///
    /// Returns an error if a controller, the reporter or any game step fails.
    pub fn play_round(
        &mut self,
        human: &mut dyn Controller,
        computer: &mut dyn Controller,
        reporter: &mut dyn Reporter,
    ) -> Result<RoundOutcome, GameError> {
        if self.state == GameState::Dealing {
            let cards = self.deal()?;
            reporter.report(&Event::InitialTable(cards))?;
        }

        if self.start_round()? == RoundStart::Exhausted {
            reporter.report(&Event::Table(self.table.status()))?;
            let report = self.finish()?;
            reporter.report(&Event::FinalTally(report.tally))?;
            reporter.report(&Event::GameOver)?;
            return Ok(RoundOutcome::Finished(report));
        }

        while let GameState::PlayerTurn(side) = self.state {
            reporter.report(&Event::Table(self.table.status()))?;

            let hand = self.player(side).hand.cards().to_vec();
            if hand.is_empty() {
                return Err(ActionError::EmptyHand.into());
            }
            let controller: &mut dyn Controller = match side {
                Side::Human => &mut *human,
                Side::Computer => &mut *computer,
            };

            match controller.select(&hand, &self.table, &mut self.rng)? {
                Selection::Exit => {
                    log::info!("{side} left the game");
                    reporter.report(&Event::GameOver)?;
                    return Ok(RoundOutcome::Exited);
                }
                Selection::Play(index) => {
                    let card = self.play(side, index)?;
                    reporter.report(&Event::Played { side, hand, card })?;
                    if let Some(report) = self.check_win()? {
                        reporter.report(&Event::CardsWon(report))?;
                    }
                }
            }
        }

        Ok(RoundOutcome::Continue)
    }

    /// Plays rounds until the game is settled or the human leaves.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Game::play_round`].
    pub fn run(
        &mut self,
        human: &mut dyn Controller,
        computer: &mut dyn Controller,
        reporter: &mut dyn Reporter,
    ) -> Result<RoundOutcome, GameError> {
        loop {
            match self.play_round(human, computer, reporter)? {
                RoundOutcome::Continue => {}
                outcome => return Ok(outcome),
            }
        }
    }
}
