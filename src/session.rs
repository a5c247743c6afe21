use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::{
    error::{BetError, SessionError, TableError},
    settlement::Outcome,
    table::{HandView, Table},
};

const RULE: &str = "--------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Hit,
    Stand,
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Prints `prompt` and returns the trimmed reply. End of input is an error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt_int(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            match self.ask(prompt)?.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a valid integer.")?,
            }
        }
    }

    pub fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer 'y' or 'n'.")?,
            }
        }
    }

    pub fn prompt_hit_or_stand(&mut self) -> io::Result<Move> {
        loop {
            match self.ask("Hit or Stand? [h/s]: ")?.to_lowercase().as_str() {
                "h" | "hit" => return Ok(Move::Hit),
                "s" | "stand" => return Ok(Move::Stand),
                _ => self.say("Choose 'h' (hit) or 's' (stand).")?,
            }
        }
    }
}

/// Interactive game loop: one table, one console, rounds until the player
/// quits or runs out of chips.
pub struct Session<R, I, O> {
    table: Table<R>,
    console: Console<I, O>,
}

impl<R: Rng, I: BufRead, O: Write> Session<R, I, O> {
    pub fn new(table: Table<R>, console: Console<I, O>) -> Self {
        Session { table, console }
    }

    pub fn into_parts(self) -> (Table<R>, Console<I, O>) {
        (self.table, self.console)
    }

    /// Plays until the player stops or goes broke. Returns the final bankroll.
    pub fn run(&mut self) -> Result<u64, SessionError> {
        self.console.say("Welcome to Simple Blackjack!")?;
        loop {
            self.play_round()?;
            if self.table.is_broke() {
                self.console.say("You're out of chips. Game over.")?;
                break;
            }
            if !self.console.prompt_yes_no("Play another round? [y/n]: ")? {
                break;
            }
        }
        let total = self.table.chips().total;
        let name = self.table.player().owner().to_string();
        self.console
            .say(format!("Thanks for playing, {name}. You leave with {total} chips."))?;
        Ok(total)
    }

    pub fn play_round(&mut self) -> Result<Outcome, SessionError> {
        self.console.say("")?;
        self.console.say("--- New Round ---")?;
        self.console.say(format!("Bankroll: {}", self.table.chips().total))?;

        let dealt = self.take_bet()?;
        self.show_table(true)?;
        let outcome = match dealt {
            Some(outcome) => outcome,
            None => self.player_turn()?,
        };

        self.show_table(false)?;
        self.console.say(outcome.message())?;
        self.console
            .say(format!("Bankroll now: {}", self.table.chips().total))?;
        Ok(outcome)
    }

    fn player_turn(&mut self) -> Result<Outcome, SessionError> {
        loop {
            match self.console.prompt_hit_or_stand()? {
                Move::Hit => {
                    if let Some(outcome) = self.table.hit()? {
                        return Ok(outcome);
                    }
                    self.show_table(true)?;
                }
                Move::Stand => return Ok(self.table.stand()?),
            }
        }
    }

    fn take_bet(&mut self) -> Result<Option<Outcome>, SessionError> {
        loop {
            let amount = self.console.prompt_int("Enter bet amount: ")?;
            let placed = match u64::try_from(amount) {
                Ok(amount) => self.table.place_bet(amount),
                Err(_) => Err(BetError::NotPositive.into()),
            };
            match placed {
                Ok(settled) => return Ok(settled),
                Err(TableError::Bet(err)) => self.console.say(format!("Invalid bet: {err}"))?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// A natural settles inside `place_bet`, so the face-down view is built
    /// from the hands directly rather than from the table phase.
    fn show_table(&mut self, hide_dealer: bool) -> io::Result<()> {
        let dealer = if hide_dealer {
            HandView::hole_card_hidden(self.table.dealer())
        } else {
            HandView::open(self.table.dealer())
        };
        let player = HandView::open(self.table.player());
        self.console.say(RULE)?;
        self.console.say(dealer.to_string())?;
        self.console.say(player.to_string())?;
        self.console.say(RULE)
    }
}
