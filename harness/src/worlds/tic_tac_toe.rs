//! `TicTacToe`: 3x3 noughts and crosses as a [`GameState`].
//!
//! Boards are small `Copy` values, so every successor is an independent
//! position. A finished board (won or full) has no successors. Evaluation is
//! +10 for a win, -10 for a loss and 0 otherwise.

use std::fmt;

use deliberate_search::contract::GameState;

use crate::contract::WorldV1;

/// Win score; a loss is the negation.
pub const WIN_VALUE: i64 = 10;

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
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::O => "O",
        })
    }
}

/// A board square, `row` and `col` in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    // index < 9, so both fit in u8.
    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self {
            row: (index / 3) as u8,
            col: (index % 3) as u8,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A position: marks, player to move and the winner if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; 9],
    to_move: Mark,
    winner: Option<Mark>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            to_move: Mark::X,
            winner: None,
        }
    }

    /// Play `cell` for the player to move.
    ///
    /// Returns `None` if the cell is off the board or occupied, or the game
    /// is already over.
    #[must_use]
    pub fn play(&self, cell: Cell) -> Option<Self> {
        if cell.row > 2 || cell.col > 2 || self.is_terminal() {
            return None;
        }
        let index = cell.index();
        if self.cells[index].is_some() {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Some(self.to_move);
        if next.completes_line(self.to_move) {
            next.winner = Some(self.to_move);
        }
        next.to_move = self.to_move.opponent();
        Some(next)
    }

    /// Play a sequence of `(row, col)` moves from this position.
    #[must_use]
    pub fn play_all(&self, moves: &[(u8, u8)]) -> Option<Self> {
        moves
            .iter()
            .try_fold(*self, |board, &(row, col)| board.play(Cell { row, col }))
    }

    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    #[must_use]
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        self.cells.get(cell.index()).copied().flatten()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn completes_line(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    /// Rows joined by `/`, `.` for empty (e.g. `"X.O/.X./..O"`).
    #[must_use]
    pub fn layout(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Some(Mark::X) => 'X',
                        Some(Mark::O) => 'O',
                        None => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl GameState for Board {
    type Move = Cell;
    type Player = Mark;

    fn active_player(&self) -> Mark {
        self.to_move
    }

    fn successors(&self) -> Vec<(Cell, Self)> {
        (0..9)
            .map(Cell::from_index)
            .filter_map(|cell| self.play(cell).map(|next| (cell, next)))
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    fn evaluate(&self, player: Mark) -> i64 {
        match self.winner {
            Some(mark) if mark == player => WIN_VALUE,
            Some(_) => -WIN_VALUE,
            None => 0,
        }
    }
}

/// A tic-tac-toe position searched for one player.
#[derive(Debug, Clone, Copy)]
pub struct TicTacToeWorld {
    pub board: Board,
    pub player: Mark,
}

impl TicTacToeWorld {
    /// X took (2,0) and (2,1), O holds the center; O must block at (2,2).
    #[must_use]
    pub fn must_block() -> Option<Self> {
        let board = Board::new().play_all(&[(2, 0), (1, 1), (2, 1)])?;
        Some(Self {
            board,
            player: Mark::O,
        })
    }
}

impl WorldV1 for TicTacToeWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "tic_tac_toe"
    }

    fn fixture(&self) -> serde_json::Value {
        serde_json::json!({
            "layout": self.board.layout(),
            "player": self.player.to_string(),
            "to_move": self.board.to_move().to_string(),
            "world_id": "tic_tac_toe",
        })
    }
}
