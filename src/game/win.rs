use crate::card::Card;
use crate::error::FinishError;
use crate::event::WinReport;
use crate::player::Side;

use super::{Game, GameState, Outcome};

/// Points awarded at the end to the player holding more captured cards.
pub const FINAL_BONUS: u32 = 3;

/// Counts the cards worth a point (A, 10, J, Q and K).
#[must_use]
pub fn score_cards(cards: &[Card]) -> u32 {
    cards.iter().filter(|card| card.rank.is_scoring()).count() as u32
}

impl Game {
    /// Sweeps the table into `winner`'s won pile and scores it.
    ///
    /// On the final settlement the player with strictly more captured cards
    /// gets [`FINAL_BONUS`]; on a tie the bonus goes to the loser. The winner
    /// and loser are recorded either way.
    pub fn win(&mut self, winner: Side, is_final: bool) -> WinReport {
        let loser = winner.opponent();
        let captured = self.table.pile.take_all();
        let cards = captured.len();
        let points = score_cards(&captured);

        let player = self.player_mut(winner);
        player.score += points;
        player.won.append(captured);

        let bonus = is_final.then(|| {
            let receiver =
                if self.player(winner).won_count() > self.player(loser).won_count() {
                    winner
                } else {
                    loser
                };
            self.player_mut(receiver).score += FINAL_BONUS;
            receiver
        });

        self.last_outcome = Some(Outcome { winner, loser });
        log::debug!("{winner} takes {cards} cards for {points} points");

        WinReport {
            winner,
            loser,
            cards,
            points,
            bonus,
            tally: self.tally(),
        }
    }

    /// Settles the game once the cards have run out.
    ///
    /// The last player to capture takes whatever is left on the table, and
    /// the final bonus is awarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not finished, was already settled, or
    /// nobody ever captured the table.
    pub fn finish(&mut self) -> Result<WinReport, FinishError> {
        if self.state != GameState::Finished {
            return Err(FinishError::InvalidState);
        }
        if self.settled {
            return Err(FinishError::AlreadyFinished);
        }

        let Outcome { winner, .. } = self.last_outcome.ok_or(FinishError::NoWinRecorded)?;
        let report = self.win(winner, true);
        self.settled = true;
        log::info!(
            "game over, Player {} - Computer {}",
            report.tally.human_score,
            report.tally.computer_score
        );

        Ok(report)
    }

    /// Returns whether the final settlement ran.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GameOptions;

    fn cards(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|text| text.parse().unwrap()).collect()
    }

    #[test]
    fn scoring_counts_high_cards() {
        assert_eq!(score_cards(&cards(&["A♦", "5♣", "K♠"])), 2);
        assert_eq!(score_cards(&cards(&["10♥", "J♣", "Q♦", "9♠"])), 3);
        assert_eq!(score_cards(&[]), 0);
    }

    #[test]
    fn win_sweeps_the_table() {
        let mut game = Game::new(GameOptions::default(), 1);
        game.table.pile.append(cards(&["A♦", "5♣", "K♠"]));

        let report = game.win(Side::Computer, false);
        assert_eq!(report.points, 2);
        assert_eq!(report.cards, 3);
        assert_eq!(report.bonus, None);
        assert!(game.table.pile.is_empty());
        assert_eq!(game.player(Side::Computer).score, 2);
        assert_eq!(game.player(Side::Computer).won_count(), 3);
        assert_eq!(
            game.last_outcome(),
            Some(Outcome {
                winner: Side::Computer,
                loser: Side::Human
            })
        );
    }

    #[test]
    fn finish_requires_a_finished_game() {
        let mut game = Game::new(GameOptions::default(), 1);
        assert_eq!(game.finish(), Err(FinishError::InvalidState));

        game.state = GameState::Finished;
        assert_eq!(game.finish(), Err(FinishError::NoWinRecorded));
        assert!(!game.is_settled());
    }
}
