//! Match-level state machine.
//!
//! A [`MatchState`] is a value. Each transition consumes the current state
//! and returns the next one, so the whole match can be driven (and tested)
//! without any display layer:
//!
//! ```text
//! AwaitingMove(turn) --place--> AwaitingMove(other turn)
//!                    --place--> RoundOver(outcome)     [scores updated here]
//! RoundOver          --next_round(true)--> AwaitingMove(starter)  [board reset]
//!                    --next_round(_)-----> MatchOver   [threshold reached or stop]
//! ```

use super::action::{Move, MoveError};
use super::player::{Players, Role};
use super::round::{Round, RoundOutcome, RoundTransition};
use super::strategy::HeuristicSelector;
use super::{Board, Position};
use crate::config::{DrawStarter, MatchConfig};
use crate::error::{EngineError, EngineResult, Rejected};
use crate::GameRng;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Round wins per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by the human.
    human: u32,
    /// Rounds won by the computer.
    computer: u32,
}

impl Score {
    /// Creates a score.
    pub fn new(human: u32, computer: u32) -> Self {
        Self { human, computer }
    }

    /// Wins recorded for `role`.
    pub fn wins(&self, role: Role) -> u32 {
        match role {
            Role::Human => self.human,
            Role::Computer => self.computer,
        }
    }

    /// Credits the winner of a round. Draws change nothing.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::HumanWin => self.human += 1,
            RoundOutcome::ComputerWin => self.computer += 1,
            RoundOutcome::Draw => {}
        }
    }

    /// The side that has reached `threshold`, if any.
    pub fn reached(&self, threshold: u32) -> Option<Role> {
        if self.human >= threshold {
            Some(Role::Human)
        } else if self.computer >= threshold {
            Some(Role::Computer)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.human, self.computer)
    }
}

/// Where the match is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPhase {
    /// A round is being played; the round knows whose turn it is.
    AwaitingMove(Round),
    /// A round just ended and has been scored.
    RoundOver {
        /// Final board of the round.
        board: Board,
        /// How the round ended.
        outcome: RoundOutcome,
        /// Moves of the round, in order.
        history: Vec<Move>,
    },
    /// Terminal.
    MatchOver {
        /// Board of the last round played.
        board: Board,
    },
}

impl MatchPhase {
    fn name(&self) -> &'static str {
        match self {
            MatchPhase::AwaitingMove(_) => "awaiting a move",
            MatchPhase::RoundOver { .. } => "the round is over",
            MatchPhase::MatchOver { .. } => "the match is over",
        }
    }
}

/// Everything that carries over between rounds, plus the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchState {
    /// Match settings.
    config: MatchConfig,
    /// Both sides, fixed for the match.
    players: Players,
    /// Round wins so far.
    score: Score,
    /// Who starts the next round (the current one while it is in play).
    starter: Role,
    /// Completed rounds.
    rounds_played: u32,
    /// Current phase.
    phase: MatchPhase,
}

impl MatchState {
    /// Starts a match with the opening round awaiting `starter`'s move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `config` fails
    /// validation.
    #[instrument(skip(config), fields(win_threshold = *config.win_threshold()))]
    pub fn new(config: MatchConfig, players: Players, starter: Role) -> EngineResult<Self> {
        config.validate()?;
        info!(%starter, "Match started");
        Ok(Self {
            config,
            players,
            score: Score::default(),
            starter,
            rounds_played: 0,
            phase: MatchPhase::AwaitingMove(Round::start(Board::new(), starter)),
        })
    }

    /// The board of the current (or last) round.
    pub fn board(&self) -> &Board {
        match &self.phase {
            MatchPhase::AwaitingMove(round) => round.board(),
            MatchPhase::RoundOver { board, .. } | MatchPhase::MatchOver { board } => board,
        }
    }

    /// The side to move, while a round is in play.
    pub fn to_move(&self) -> Option<Role> {
        match &self.phase {
            MatchPhase::AwaitingMove(round) => Some(round.to_move()),
            _ => None,
        }
    }

    /// True once either side has reached the win threshold.
    pub fn is_decided(&self) -> bool {
        self.champion().is_some()
    }

    /// The side that reached the win threshold, if any.
    pub fn champion(&self) -> Option<Role> {
        self.score.reached(*self.config.win_threshold())
    }

    /// True in the terminal phase.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::MatchOver { .. })
    }

    /// Places the marker of the side to move.
    ///
    /// When the placement ends the round, the round is scored in the same
    /// step: a win credits the winner and makes them the next starter, a draw
    /// applies the configured [`DrawStarter`] policy.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMove`] for an occupied square,
    /// [`EngineError::OutOfPhase`] when no round is in play. Either way the
    /// state comes back unchanged inside the [`Rejected`], so the caller can
    /// retry the same turn.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn place(self, position: Position) -> Result<Self, Rejected<Box<Self>, EngineError>> {
        let Self {
            config,
            players,
            mut score,
            mut starter,
            mut rounds_played,
            phase,
        } = self;

        let round = match phase {
            MatchPhase::AwaitingMove(round) => round,
            other => {
                let error = EngineError::OutOfPhase(other.name());
                let state = Self {
                    config,
                    players,
                    score,
                    starter,
                    rounds_played,
                    phase: other,
                };
                return Err(Rejected::new(Box::new(state), error));
            }
        };

        let transition = match round.place(position, &players) {
            Ok(transition) => transition,
            Err(rejected) => {
                let (round, error) = rejected.into_parts();
                debug!(%error, "Placement refused");
                let state = Self {
                    config,
                    players,
                    score,
                    starter,
                    rounds_played,
                    phase: MatchPhase::AwaitingMove(round),
                };
                return Err(Rejected::new(Box::new(state), error.into()));
            }
        };

        let phase = match transition {
            RoundTransition::InProgress(round) => MatchPhase::AwaitingMove(round),
            RoundTransition::Over {
                board,
                outcome,
                history,
            } => {
                score.record(outcome);
                rounds_played += 1;
                starter = match (outcome.winner(), *config.draw_starter()) {
                    (Some(winner), _) => winner,
                    (None, DrawStarter::Alternate) => starter.opponent(),
                    (None, DrawStarter::Keep) => starter,
                };
                info!(
                    %outcome,
                    %score,
                    next_starter = %starter,
                    round = rounds_played,
                    "Round over"
                );
                MatchPhase::RoundOver {
                    board,
                    outcome,
                    history,
                }
            }
        };

        Ok(Self {
            config,
            players,
            score,
            starter,
            rounds_played,
            phase,
        })
    }

    /// Leaves the round-over phase.
    ///
    /// A decided match always ends here, whatever `continue_playing` says.
    /// Otherwise `false` ends the match and `true` resets the board for the
    /// next round with the current starter to move.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfPhase`] unless a round has just ended.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn next_round(self, continue_playing: bool) -> EngineResult<Self> {
        let decided = self.is_decided();
        let Self {
            config,
            players,
            score,
            starter,
            rounds_played,
            phase,
        } = self;

        let board = match phase {
            MatchPhase::RoundOver { board, .. } => board,
            other => return Err(EngineError::OutOfPhase(other.name())),
        };

        let phase = if decided || !continue_playing {
            info!(%score, rounds_played, decided, "Match over");
            MatchPhase::MatchOver { board }
        } else {
            debug!(%starter, round = rounds_played + 1, "Next round");
            MatchPhase::AwaitingMove(Round::start(board, starter))
        };

        Ok(Self {
            config,
            players,
            score,
            starter,
            rounds_played,
            phase,
        })
    }

    /// Asks `selector` for the computer's square.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfPhase`] unless it is the computer's turn.
    #[instrument(skip(self, selector, rng))]
    pub fn computer_move(
        &self,
        selector: &HeuristicSelector,
        rng: &mut GameRng,
    ) -> EngineResult<Position> {
        if self.to_move() != Some(Role::Computer) {
            return Err(EngineError::OutOfPhase(match self.to_move() {
                Some(Role::Human) => "waiting for the human",
                _ => self.phase.name(),
            }));
        }
        let marker = self.players.marker_of(Role::Computer);
        Ok(selector.choose(self.board(), marker, rng)?)
    }

    /// Confirms `position` is open on the current board.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMove`] if the square is taken.
    pub fn check_open(&self, position: Position) -> EngineResult<()> {
        if self.board().is_open(position) {
            Ok(())
        } else {
            Err(MoveError::Occupied(position).into())
        }
    }
}
