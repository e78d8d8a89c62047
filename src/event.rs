//! Game events and score summaries.

use core::fmt;
use std::io;

use crate::card::Card;
use crate::pile::Listing;
use crate::player::Side;
use crate::table::TableStatus;

/// Scores and captured card counts of both players.
///
/// Always shown human first, regardless of who just won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Human score.
    pub human_score: u32,
    /// Computer score.
    pub computer_score: u32,
    /// Cards captured by the human.
    pub human_cards: usize,
    /// Cards captured by the computer.
    pub computer_cards: usize,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Score: Player {} - Computer {}",
            self.human_score, self.computer_score
        )?;
        write!(
            f,
            "Cards: Player {} - Computer {}",
            self.human_cards, self.computer_cards
        )
    }
}

/// Result of sweeping the table into a player's won pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinReport {
    /// Who took the table.
    pub winner: Side,
    /// The other player.
    pub loser: Side,
    /// Number of cards swept.
    pub cards: usize,
    /// Points earned from the swept cards.
    pub points: u32,
    /// Who received the end of game bonus, if this was the final settlement.
    pub bonus: Option<Side>,
    /// Scores after the win.
    pub tally: Tally,
}

/// Something that happened during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cards dealt face up to the table at the start.
    InitialTable(Vec<Card>),
    /// Table state before a move or at the end.
    Table(TableStatus),
    /// A card was played.
    ///
    /// The console printer leaves out the human's own plays, since the prompt
    /// already echoed them; recorded transcripts keep both sides.
    Played {
        /// Who played.
        side: Side,
        /// The hand before the play.
        hand: Vec<Card>,
        /// The card played.
        card: Card,
    },
    /// A player captured the table mid-game.
    CardsWon(WinReport),
    /// Scores after the final settlement.
    FinalTally(Tally),
    /// The game ended, naturally or because the human quit.
    GameOver,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialTable(cards) => {
                write!(f, "Initial cards on the table: {}", Listing(cards))
            }
            Self::Table(status) => write!(f, "\n{status}"),
            Self::Played { side, hand, card } => match side {
                Side::Computer => write!(f, "{}\nComputer plays {card}", Listing(hand)),
                Side::Human => write!(f, "Player plays {card}"),
            },
            Self::CardsWon(report) => write!(f, "{} wins cards\n{}", report.winner, report.tally),
            Self::FinalTally(tally) => write!(f, "{tally}"),
            Self::GameOver => f.write_str("Game Over"),
        }
    }
}

/// Receives events as the game progresses.
pub trait Reporter {
    /// Handles one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be written out.
    fn report(&mut self, event: &Event) -> io::Result<()>;
}

/// Records every event, for inspection after the fact.
impl Reporter for Vec<Event> {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_prints_human_first() {
        let tally = Tally {
            human_score: 3,
            computer_score: 7,
            human_cards: 10,
            computer_cards: 22,
        };
        assert_eq!(
            tally.to_string(),
            "Score: Player 3 - Computer 7\nCards: Player 10 - Computer 22"
        );
    }

    #[test]
    fn computer_play_lists_its_hand() {
        let hand: Vec<Card> = ["A♦", "5♣"].iter().map(|t| t.parse().unwrap()).collect();
        let event = Event::Played {
            side: Side::Computer,
            card: hand[1],
            hand,
        };
        assert_eq!(event.to_string(), "A♦ 5♣\nComputer plays 5♣");
    }

    #[test]
    fn human_play_names_only_the_card() {
        let hand: Vec<Card> = ["A♦", "7♣"].iter().map(|t| t.parse().unwrap()).collect();
        let event = Event::Played {
            side: Side::Human,
            card: hand[1],
            hand,
        };
        assert_eq!(event.to_string(), "Player plays 7♣");
    }

    #[test]
    fn initial_table_lists_the_dealt_cards() {
        let cards: Vec<Card> = ["A♦", "5♣", "10♥", "K♠"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(
            Event::InitialTable(cards).to_string(),
            "Initial cards on the table: A♦ 5♣ 10♥ K♠"
        );
    }

    #[test]
    fn cards_won_names_the_winner_then_the_tally() {
        let report = WinReport {
            winner: Side::Computer,
            loser: Side::Human,
            cards: 5,
            points: 2,
            bonus: None,
            tally: Tally {
                human_score: 1,
                computer_score: 2,
                human_cards: 3,
                computer_cards: 5,
            },
        };
        assert_eq!(
            Event::CardsWon(report).to_string(),
            "Computer wins cards\nScore: Player 1 - Computer 2\nCards: Player 3 - Computer 5"
        );

        let report = WinReport {
            winner: Side::Human,
            loser: Side::Computer,
            ..report
        };
        assert!(
            Event::CardsWon(report)
                .to_string()
                .starts_with("Player wins cards\n")
        );
    }

    #[test]
    fn table_status_starts_on_a_fresh_line() {
        let event = Event::Table(TableStatus { size: 0, top: None });
        assert_eq!(event.to_string(), "\nNo cards on the table");
    }
}
