//! Line-oriented console front end.

use std::io::{BufRead, Write};
use tictactoe_match::{
    Board, DrawStarter, Marker, MatchConfig, Players, Position, Presenter, PresenterError, Role,
    RoundOutcome, Score, StartChoice,
};
use tracing::{debug, instrument};

const INVALID: &str = "Invalid input.";

/// Joins square numbers for a prompt: "1, 2, or 3".
pub fn joinor(items: &[Position], separator: &str, word: &str) -> String {
    let numbers: Vec<String> = items.iter().map(|p| p.number().to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {word} {second}"),
        [init @ .., last] => format!("{}{separator}{word} {last}", init.join(separator)),
    }
}

/// Console presenter over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    human_name: String,
    computer_name: String,
    players: Option<Players>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; names are filled in by [`Console::setup`].
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            human_name: String::new(),
            computer_name: String::new(),
            players: None,
        }
    }

    /// Reads one trimmed line, failing if input is closed.
    fn read_line(&mut self) -> Result<String, PresenterError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PresenterError::new("input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, PresenterError> {
        writeln!(self.output, "{prompt}")?;
        loop {
            let answer = self.read_line()?;
            if let Some(value) = parse(answer.as_str()) {
                return Ok(value);
            }
            debug!(%answer, "Rejected input");
            writeln!(self.output, "{INVALID}")?;
        }
    }

    fn clear(&mut self) -> Result<(), PresenterError> {
        write!(self.output, "\x1B[2J\x1B[1;1H")?;
        Ok(())
    }

    /// Asks for the player's name and shows the welcome banner and rules.
    #[instrument(skip(self, config))]
    pub fn setup(
        &mut self,
        computer_name: &str,
        config: &MatchConfig,
    ) -> Result<(), PresenterError> {
        self.clear()?;
        let name: String = self.ask("What is your name?", |s| {
            let mut chars = s.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
        })?;
        self.human_name = name;
        self.computer_name = computer_name.to_string();

        writeln!(self.output, "Hello {}! Welcome to tic tac toe!", self.human_name)?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "The first player to reach {} wins will win the match!",
            config.win_threshold()
        )?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "The winner of each game will have the first move in the next game."
        )?;
        let tie_rule = match config.draw_starter() {
            DrawStarter::Alternate => "If there is a tie, the honors will alternate.",
            DrawStarter::Keep => "If there is a tie, whoever started the tied game starts again.",
        };
        writeln!(self.output, "{tie_rule}")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints the goodbye message.
    pub fn goodbye(&mut self) -> Result<(), PresenterError> {
        writeln!(self.output, "Thanks for playing tic tac toe! Goodbye!")?;
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<(), PresenterError> {
        if let Some(players) = self.players {
            writeln!(
                self.output,
                "You're a {}, {} is {}.",
                players.human().marker(),
                self.computer_name,
                players.computer().marker()
            )?;
            writeln!(self.output)?;
        }
        writeln!(self.output, "{}", board.render())?;
        Ok(())
    }

    fn show_score(&mut self, heading: &str, score: Score) -> Result<(), PresenterError> {
        writeln!(self.output, "{heading}")?;
        writeln!(
            self.output,
            "{}:{} | {}:{}",
            self.human_name,
            score.human(),
            self.computer_name,
            score.computer()
        )?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Presenter for Console<R, W> {
    fn request_marker_choice(&mut self) -> Result<Marker, PresenterError> {
        self.ask("What marker would you like to be? (x/o)", |s| {
            match s.to_lowercase().as_str() {
                "x" => Some(Marker::X),
                "o" => Some(Marker::O),
                _ => None,
            }
        })
    }

    fn request_starting_player(&mut self) -> Result<StartChoice, PresenterError> {
        self.ask("Who shall go first? you(y), opponent(o), random(r)", |s| {
            match s.to_lowercase().as_str() {
                "y" => Some(StartChoice::Human),
                "o" => Some(StartChoice::Computer),
                "r" => Some(StartChoice::Random),
                _ => None,
            }
        })
    }

    fn request_human_move(&mut self, open: &[Position]) -> Result<Position, PresenterError> {
        let prompt = format!("Choose a square {}:", joinor(open, ", ", "or"));
        self.ask(&prompt, |s| Position::parse(s).filter(|p| open.contains(p)))
    }

    fn request_continue_match(&mut self) -> Result<bool, PresenterError> {
        self.ask("Would you like to continue playing? (y/n)", |s| {
            match s.to_lowercase().as_str() {
                "y" => Some(true),
                "n" => Some(false),
                _ => None,
            }
        })
    }

    fn notify_round_start(
        &mut self,
        round: u32,
        starter: Role,
        players: &Players,
    ) -> Result<(), PresenterError> {
        self.players = Some(*players);
        if round > 1 {
            self.clear()?;
            writeln!(self.output, "Let's play again!")?;
            writeln!(self.output)?;
        }
        let who = match starter {
            Role::Human => "You go".to_string(),
            Role::Computer => format!("{} goes", self.computer_name),
        };
        writeln!(self.output, "Game {round}: {who} first.")?;
        Ok(())
    }

    fn notify_board(&mut self, board: &Board, _players: &Players) -> Result<(), PresenterError> {
        self.clear()?;
        self.show_board(board)
    }

    fn notify_round_result(
        &mut self,
        outcome: RoundOutcome,
        board: &Board,
    ) -> Result<(), PresenterError> {
        self.clear()?;
        self.show_board(board)?;
        match outcome {
            RoundOutcome::HumanWin => writeln!(self.output, "You won!")?,
            RoundOutcome::ComputerWin => writeln!(self.output, "{} won!", self.computer_name)?,
            RoundOutcome::Draw => writeln!(self.output, "It's a tie!")?,
        }
        Ok(())
    }

    fn notify_scores(&mut self, score: Score) -> Result<(), PresenterError> {
        self.show_score("The current score is:", score)
    }

    fn notify_match_end(&mut self, score: Score) -> Result<(), PresenterError> {
        self.show_score("The final score is:", score)
    }
}
