use std::fmt;

/// A cell label, 1-9, numbered left to right and top to bottom.
pub type Position = u8;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Cell indices (0-based) of the 3 rows, 3 columns and 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Tied,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange(i64),
    Occupied { position: Position, mark: Mark },
    RoundOver(GameStatus),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(position) => {
                write!(f, "Invalid move: {} is not a position between 1 and 9", position)
            }
            MoveError::Occupied { position, mark } => {
                write!(f, "Invalid move: position {} is already taken by {}", position, mark)
            }
            MoveError::RoundOver(_) => write!(f, "The round is over, start a new one"),
        }
    }
}

impl std::error::Error for MoveError {}

/// State of one round: the grid, whose turn it is and what has been played.
///
/// The move count is the length of the history, so it always equals the number
/// of marked cells.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
    current_player: Mark,
    history: Vec<Position>,
    status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            current_player: Mark::X,
            history: Vec::with_capacity(CELL_COUNT),
            status: GameStatus::InProgress,
        }
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Mark at a 1-9 position, `None` if empty or out of range.
    pub fn cell(&self, position: Position) -> Option<Mark> {
        index_of(position.into()).and_then(|i| self.cells[i])
    }

    pub fn is_valid_move(&self, position: i64) -> bool {
        index_of(position).is_some_and(|i| self.cells[i].is_none())
    }

    /// Why `position` cannot be played right now, or `None` if it can.
    pub fn rejection(&self, position: i64) -> Option<MoveError> {
        if self.status.is_over() {
            return Some(MoveError::RoundOver(self.status));
        }
        if self.is_valid_move(position) {
            return None;
        }
        match index_of(position) {
            Some(index) => self.cells[index].map(|mark| MoveError::Occupied {
                position: (index + 1) as Position,
                mark,
            }),
            None => Some(MoveError::OutOfRange(position)),
        }
    }

    /// Mark `position` for the current player and record it in the history.
    /// Does not evaluate the result or switch players.
    pub fn apply_move(&mut self, position: i64) -> Result<Position, MoveError> {
        if let Some(err) = self.rejection(position) {
            return Err(err);
        }
        let index = (position - 1) as usize;
        let position = position as Position;

        self.cells[index] = Some(self.current_player);
        self.history.push(position);
        Ok(position)
    }

    /// True if the current player (the one who just moved) holds a full line.
    pub fn check_win(&self) -> bool {
        let mark = Some(self.current_player);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == mark))
    }

    /// True when every cell is marked and nobody has won. Always evaluate
    /// `check_win` first: a full board can also be a winning one.
    pub fn check_tie(&self) -> bool {
        self.move_count() == CELL_COUNT && !self.check_win()
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Settle the status after a move.
    pub fn evaluate(&mut self) -> GameStatus {
        if self.check_win() {
            self.status = GameStatus::Won(self.current_player);
        } else if self.check_tie() {
            self.status = GameStatus::Tied;
        }
        self.status
    }

    /// Apply a move, settle the status, and pass the turn if the round goes on.
    pub fn play(&mut self, position: i64) -> Result<(Position, GameStatus), MoveError> {
        let position = self.apply_move(position)?;
        let status = self.evaluate();
        if !status.is_over() {
            self.switch_player();
        }
        Ok((position, status))
    }
}

fn index_of(position: i64) -> Option<usize> {
    if (1..=CELL_COUNT as i64).contains(&position) {
        Some((position - 1) as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_after(moves: &[i64]) -> Board {
        let mut board = Board::new();
        for &position in moves {
            board.play(position).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.current_player(), Mark::X);
        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.move_count(), 0);
        assert!((1..=9).all(|p| board.is_valid_move(p)));
    }

    #[test]
    fn test_is_valid_move_rejects_out_of_range() {
        let board = Board::new();
        for position in [0, 10, -1, i64::MAX, i64::MIN] {
            assert!(!board.is_valid_move(position));
        }
    }

    #[test]
    fn test_marked_cell_is_never_valid() {
        let board = board_after(&[1, 2]);
        assert_eq!(board.cell(1), Some(Mark::X));
        assert_eq!(board.cell(2), Some(Mark::O));
        assert!(!board.is_valid_move(1));
        assert!(!board.is_valid_move(2));
        assert!(board.is_valid_move(3));
    }

    #[test]
    fn test_apply_move_on_occupied_cell_leaves_board_unchanged() {
        let mut board = board_after(&[5]);
        let err = board.apply_move(5).unwrap_err();
        assert_eq!(
            err,
            MoveError::Occupied {
                position: 5,
                mark: Mark::X
            }
        );
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.current_player(), Mark::O);
        assert_eq!(board.apply_move(0), Err(MoveError::OutOfRange(0)));
    }

    #[test]
    fn test_rejection_explains_invalid_moves() {
        let board = board_after(&[5]);
        assert_eq!(board.rejection(1), None);
        assert_eq!(board.rejection(10), Some(MoveError::OutOfRange(10)));
        assert_eq!(
            board.rejection(5),
            Some(MoveError::Occupied {
                position: 5,
                mark: Mark::X
            })
        );

        let finished = board_after(&[1, 5, 2, 6, 3]);
        assert!(finished.is_valid_move(9));
        assert_eq!(
            finished.rejection(9),
            Some(MoveError::RoundOver(GameStatus::Won(Mark::X)))
        );
    }

    #[test]
    fn test_apply_move_does_not_switch_player() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9), Ok(9));
        assert_eq!(board.current_player(), Mark::X);
        board.switch_player();
        assert_eq!(board.current_player(), Mark::O);
    }

    #[test]
    fn test_top_row_win() {
        let mut board = Board::new();
        let mut status = GameStatus::InProgress;
        for position in [1, 5, 2, 6, 3] {
            (_, status) = board.play(position).unwrap();
        }
        assert_eq!(status, GameStatus::Won(Mark::X));
        assert!(board.check_win());
        assert_eq!(board.move_count(), 5);
        assert_eq!(board.history(), &[1, 5, 2, 6, 3]);
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        // O takes the middle column
        let board = board_after(&[1, 2, 3, 5, 4, 8]);
        assert_eq!(board.status(), GameStatus::Won(Mark::O));

        // X takes the anti-diagonal
        let board = board_after(&[3, 1, 5, 2, 7]);
        assert_eq!(board.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        // X O X
        // O X O
        // O X X
        let board = board_after(&[1, 2, 3, 4, 5, 6, 8, 7, 9]);
        assert_eq!(board.move_count(), 9);
        assert_eq!(board.status(), GameStatus::Won(Mark::X));
        assert!(!board.check_tie());
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        // X O X
        // O O X
        // X X O
        let board = board_after(&[1, 2, 3, 5, 8, 4, 6, 9, 7]);
        assert_eq!(board.status(), GameStatus::Tied);
        assert!(board.check_tie());
        assert!(!board.check_win());
    }

    #[test]
    fn test_moves_after_round_over_are_refused() {
        let mut board = board_after(&[1, 5, 2, 6, 3]);
        assert_eq!(
            board.apply_move(9),
            Err(MoveError::RoundOver(GameStatus::Won(Mark::X)))
        );
        assert_eq!(board.move_count(), 5);
    }
}
