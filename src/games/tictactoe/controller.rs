//! Match orchestration between the human (through a presenter) and the
//! computer opponent.

use super::match_state::{MatchPhase, MatchState, Score};
use super::player::{self, Players, Role};
use super::presenter::Presenter;
use super::round::RoundOutcome;
use super::strategy::HeuristicSelector;
use crate::config::MatchConfig;
use crate::error::EngineResult;
use crate::GameRng;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why the match stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// This side reached the win threshold.
    ThresholdReached(Role),
    /// The player chose not to continue.
    Stopped,
}

/// Final report of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Final score.
    score: Score,
    /// Rounds completed.
    rounds_played: u32,
    /// Why the match ended.
    end: MatchEnd,
    /// Both sides.
    players: Players,
}

impl MatchSummary {
    fn from_state(state: &MatchState) -> Self {
        Self {
            score: *state.score(),
            rounds_played: *state.rounds_played(),
            end: state
                .champion()
                .map_or(MatchEnd::Stopped, MatchEnd::ThresholdReached),
            players: *state.players(),
        }
    }
}

/// What the driver loop does next; computed before the state is consumed.
enum Step {
    Move(Role),
    RoundOver(RoundOutcome),
    Done,
}

/// Drives a match from setup to `MatchOver`.
#[derive(Debug)]
pub struct MatchController {
    config: MatchConfig,
    selector: HeuristicSelector,
    rng: GameRng,
}

impl MatchController {
    /// Creates a controller, seeding randomness from the config (or the OS).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config fails validation.
    #[instrument(skip(config))]
    pub fn new(config: MatchConfig) -> EngineResult<Self> {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a controller with an explicit RNG.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config fails validation.
    pub fn with_rng(config: MatchConfig, rng: GameRng) -> EngineResult<Self> {
        config.validate()?;
        debug!(seed = rng.seed(), "Controller ready");
        Ok(Self {
            config,
            selector: HeuristicSelector::default(),
            rng,
        })
    }

    /// Replaces the computer's strategy list.
    pub fn with_selector(mut self, selector: HeuristicSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Returns the match settings.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Draws a display name for the computer opponent.
    pub fn opponent_name(&mut self) -> &'static str {
        player::computer_name(&mut self.rng)
    }

    /// Runs a full match: setup questions, rounds, final report.
    ///
    /// # Errors
    ///
    /// Any [`EngineError`](crate::EngineError); the match is abandoned at the
    /// first one.
    #[instrument(skip_all)]
    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> EngineResult<MatchSummary> {
        let marker = presenter.request_marker_choice()?;
        let players = Players::from_human_marker(marker);
        let starter = presenter.request_starting_player()?.resolve(&mut self.rng);
        let state = MatchState::new(self.config.clone(), players, starter)?;
        self.drive(state, presenter)
    }

    /// Plays `state` through to `MatchOver`.
    ///
    /// # Errors
    ///
    /// Any [`EngineError`](crate::EngineError); the match is abandoned at the
    /// first one.
    #[instrument(skip_all, fields(score = %state.score()))]
    pub fn drive<P: Presenter>(
        &mut self,
        mut state: MatchState,
        presenter: &mut P,
    ) -> EngineResult<MatchSummary> {
        if let Some(starter) = state.to_move() {
            presenter.notify_round_start(state.rounds_played() + 1, starter, state.players())?;
        }

        loop {
            let step = match state.phase() {
                MatchPhase::AwaitingMove(round) => Step::Move(round.to_move()),
                MatchPhase::RoundOver { outcome, .. } => Step::RoundOver(*outcome),
                MatchPhase::MatchOver { .. } => Step::Done,
            };

            state = match step {
                Step::Move(Role::Human) => {
                    presenter.notify_board(state.board(), state.players())?;
                    let open = state.board().open_positions();
                    let position = presenter.request_human_move(&open)?;
                    state.check_open(position)?;
                    debug!(%position, "Human moved");
                    state.place(position)?
                }
                Step::Move(Role::Computer) => {
                    let position = state.computer_move(&self.selector, &mut self.rng)?;
                    state.place(position)?
                }
                Step::RoundOver(outcome) => {
                    presenter.notify_round_result(outcome, state.board())?;
                    if state.is_decided() {
                        state.next_round(false)?
                    } else {
                        presenter.notify_scores(*state.score())?;
                        let keep_going = presenter.request_continue_match()?;
                        let next = state.next_round(keep_going)?;
                        if let Some(starter) = next.to_move() {
                            presenter.notify_round_start(
                                next.rounds_played() + 1,
                                starter,
                                next.players(),
                            )?;
                        }
                        next
                    }
                }
                Step::Done => break,
            };
        }

        let summary = MatchSummary::from_state(&state);
        info!(
            score = %summary.score,
            end = ?summary.end,
            rounds = summary.rounds_played,
            "Match finished"
        );
        presenter.notify_match_end(summary.score)?;
        Ok(summary)
    }
}
