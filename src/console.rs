//! Console front end: the human's prompt and the transcript printer.

use std::io::{self, BufRead, Write};

use rand::RngCore;

use crate::card::Card;
use crate::error::GameError;
use crate::event::{Event, Reporter};
use crate::game::{Controller, Selection};
use crate::player::Side;
use crate::table::Table;

/// How a line typed at the card prompt was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Zero-based index of the chosen card.
    Index(usize),
    /// The player typed `exit`.
    Exit,
    /// Anything else; ask again.
    Retry,
}

/// Parses a card choice for a hand of `hand_len` cards.
///
/// Accepts a 1-based position made only of ASCII digits, or the word `exit`.
#[must_use]
pub fn parse_reply(line: &str, hand_len: usize) -> Reply {
    let line = line.trim();
    if line == "exit" {
        return Reply::Exit;
    }
    if line.is_empty() || !line.bytes().all(|byte| byte.is_ascii_digit()) {
        return Reply::Retry;
    }
    match line.parse::<usize>() {
        Ok(position) if (1..=hand_len).contains(&position) => Reply::Index(position - 1),
        _ => Reply::Retry,
    }
}

/// Reads the human's decisions from a line based input.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading from `input` and writing questions to `output`.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks "Play first?" until the answer is yes or no, in any case.
    ///
    /// Returns `None` if the input ends first.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn ask_play_first(&mut self) -> io::Result<Option<bool>> {
        loop {
            writeln!(self.output, "Play first?")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().to_lowercase().as_str() {
                "yes" => return Ok(Some(true)),
                "no" => return Ok(Some(false)),
                _ => {}
            }
        }
    }

    /// Consumes the prompt, returning its input and output.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Controller for Prompt<R, W> {
    /// Shows the numbered hand and asks until a valid position or `exit` is
    /// typed. End of input counts as `exit`.
    fn select(
        &mut self,
        hand: &[Card],
        _table: &Table,
        _rng: &mut dyn RngCore,
    ) -> Result<Selection, GameError> {
        write!(self.output, "Cards in hand:")?;
        for (position, card) in hand.iter().enumerate() {
            write!(self.output, " {}){card}", position + 1)?;
        }
        writeln!(self.output)?;

        loop {
            writeln!(self.output, "Choose a card to play (1-{}):", hand.len())?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Selection::Exit);
            };
            match parse_reply(&line, hand.len()) {
                Reply::Index(index) => return Ok(Selection::Play(index)),
                Reply::Exit => return Ok(Selection::Exit),
                Reply::Retry => log::debug!("ignoring {:?}", line.trim()),
            }
        }
    }
}

/// Prints events in the game's transcript format.
#[derive(Debug)]
pub struct Printer<W> {
    output: W,
}

impl<W: Write> Printer<W> {
    /// Creates a printer writing to `output`.
    #[must_use]
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Consumes the printer, returning its output.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Reporter for Printer<W> {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        // The human already saw their own choice at the prompt.
        if matches!(
            event,
            Event::Played {
                side: Side::Human,
                ..
            }
        ) {
            return Ok(());
        }
        writeln!(self.output, "{event}")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::computer::Computer;
    use crate::game::{Game, RoundOutcome};
    use crate::options::GameOptions;
    use crate::table::TableStatus;

    fn hand() -> Vec<Card> {
        ["A♦", "7♣", "10♥"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect()
    }

    fn select(input: &str) -> (Selection, String) {
        let mut prompt = Prompt::new(Cursor::new(input.to_owned()), Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let selection = prompt.select(&hand(), &Table::new(), &mut rng).unwrap();
        let (_, output) = prompt.into_inner();
        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_reply_accepts_positions_in_range() {
        assert_eq!(parse_reply("1\n", 3), Reply::Index(0));
        assert_eq!(parse_reply(" 3 ", 3), Reply::Index(2));
        assert_eq!(parse_reply("0", 3), Reply::Retry);
        assert_eq!(parse_reply("4", 3), Reply::Retry);
        assert_eq!(parse_reply("-1", 3), Reply::Retry);
        assert_eq!(parse_reply("+1", 3), Reply::Retry);
        assert_eq!(parse_reply("two", 3), Reply::Retry);
        assert_eq!(parse_reply("", 3), Reply::Retry);
        assert_eq!(parse_reply("99999999999999999999999", 3), Reply::Retry);
        assert_eq!(parse_reply("exit\n", 3), Reply::Exit);
        assert_eq!(parse_reply("EXIT", 3), Reply::Retry);
    }

    #[test]
    fn prompt_reprompts_until_valid() {
        let (selection, output) = select("abc\n\n0\n4\n2\n");
        assert_eq!(selection, Selection::Play(1));
        assert!(output.starts_with("Cards in hand: 1)A♦ 2)7♣ 3)10♥\n"));
        assert_eq!(output.matches("Choose a card to play (1-3):").count(), 5);
    }

    #[test]
    fn prompt_exit_and_end_of_input() {
        assert_eq!(select("5\nexit\n").0, Selection::Exit);
        assert_eq!(select("").0, Selection::Exit);
    }

    #[test]
    fn play_first_is_case_insensitive() {
        let mut prompt = Prompt::new(Cursor::new("maybe\nYES\n"), Vec::new());
        assert_eq!(prompt.ask_play_first().unwrap(), Some(true));
        let (_, output) = prompt.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Play first?\nPlay first?\n");

        let mut prompt = Prompt::new(Cursor::new("No\n"), Vec::new());
        assert_eq!(prompt.ask_play_first().unwrap(), Some(false));

        let mut prompt = Prompt::new(Cursor::new("y\n"), Vec::new());
        assert_eq!(prompt.ask_play_first().unwrap(), None);
    }

    #[test]
    fn printer_skips_the_human_play() {
        let cards = hand();
        let mut printer = Printer::new(Vec::new());
        printer
            .report(&Event::Table(TableStatus {
                size: 1,
                top: Some(cards[0]),
            }))
            .unwrap();
        printer
            .report(&Event::Played {
                side: Side::Human,
                hand: cards.clone(),
                card: cards[1],
            })
            .unwrap();
        printer
            .report(&Event::Played {
                side: Side::Computer,
                hand: cards.clone(),
                card: cards[2],
            })
            .unwrap();
        printer.report(&Event::GameOver).unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            output,
            "\n1 cards on the table, and the top card is A♦\n\
             A♦ 7♣ 10♥\nComputer plays 10♥\n\
             Game Over\n"
        );
    }

    #[test]
    fn exit_at_the_prompt_ends_the_transcript() {
        let mut prompt = Prompt::new(Cursor::new("1\nx\n1\nexit\n"), Vec::new());
        let mut printer = Printer::new(Vec::new());
        let mut game = Game::new(GameOptions::default(), 5);

        let outcome = game.run(&mut prompt, &mut Computer, &mut printer).unwrap();
        assert_eq!(outcome, RoundOutcome::Exited);
        assert_eq!(game.player(Side::Human).hand.len(), 4);

        let (_, asked) = prompt.into_inner();
        let asked = String::from_utf8(asked).unwrap();
        assert!(asked.starts_with("Cards in hand: 1)"));
        assert_eq!(asked.matches("Cards in hand: 1)").count(), 3);
        assert_eq!(asked.matches("Choose a card to play (1-6):").count(), 1);
        assert_eq!(asked.matches("Choose a card to play (1-5):").count(), 2);
        assert!(asked.ends_with("Choose a card to play (1-4):\n"));

        let printed = String::from_utf8(printer.into_inner()).unwrap();
        assert!(printed.starts_with("Initial cards on the table: "));
        assert_eq!(printed.matches("Computer plays ").count(), 2);
        assert!(!printed.contains("Player plays"));
        assert!(printed.ends_with("Game Over\n"));
    }

    #[test]
    fn finished_game_prints_the_table_tally_and_game_over() {
        let mut printer = Printer::new(Vec::new());
        let mut game = Game::new(GameOptions::default(), 11);

        let outcome = game.run(&mut Computer, &mut Computer, &mut printer).unwrap();
        let RoundOutcome::Finished(report) = outcome else {
            panic!("expected a finished game, got {outcome:?}");
        };
        assert_eq!(report.tally, game.tally());
        assert_eq!(
            report.tally.human_cards + report.tally.computer_cards,
            crate::card::DECK_SIZE
        );

        let printed = String::from_utf8(printer.into_inner()).unwrap();
        assert!(printed.contains(" wins cards\nScore: Player "));

        let lines: Vec<&str> = printed.lines().collect();
        let [.., blank, table, score, cards, over] = lines.as_slice() else {
            panic!("transcript too short: {printed:?}");
        };
        assert_eq!(*blank, "");
        assert!(table.contains("on the table"));
        assert_eq!(format!("{score}\n{cards}"), game.tally().to_string());
        assert_eq!(*over, "Game Over");
        assert!(printed.ends_with("Game Over\n"));
    }
}
