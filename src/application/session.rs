use tracing::{debug, info};

use crate::domain::{Board, GameStatus, Mark, Position};

use super::AppError;

/// Results of the rounds finished so far in this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

/// End-of-round figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub status: GameStatus,
    pub total_moves: usize,
    pub history: Vec<Position>,
}

/// What a successful move did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mark: Mark,
    pub position: Position,
    pub status: GameStatus,
}

/// Owns the board of the round in play and the tally across rounds.
pub struct GameSession {
    board: Board,
    round: u32,
    scoreboard: Scoreboard,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            round: 1,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Play `position` for the player to move. Positions that fail
    /// `is_valid_move` are turned away before the board is touched.
    pub fn play(&mut self, position: i64) -> Result<MoveOutcome, AppError> {
        let mark = self.board.current_player();
        if !self.board.is_valid_move(position) || self.board.status().is_over() {
            if let Some(err) = self.board.rejection(position) {
                debug!(round = self.round, %mark, error = %err, "move rejected");
                return Err(err.into());
            }
        }

        let (position, status) = self.board.play(position)?;
        debug!(round = self.round, %mark, position, "move applied");

        if status.is_over() {
            self.scoreboard.record(status);
            info!(
                round = self.round,
                ?status,
                moves = self.board.move_count(),
                "round finished"
            );
        }

        Ok(MoveOutcome {
            mark,
            position,
            status,
        })
    }

    /// Figures for the current round, once it has ended.
    pub fn summary(&self) -> Option<RoundSummary> {
        let status = self.board.status();
        status.is_over().then(|| RoundSummary {
            round: self.round,
            status,
            total_moves: self.board.move_count(),
            history: self.board.history().to_vec(),
        })
    }

    /// Discard the finished board and start over with X to move.
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.round += 1;
        debug!(round = self.round, "round started");
    }
}
