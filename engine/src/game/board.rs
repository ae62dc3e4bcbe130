use super::types::{BoardSnapshot, CELL_COUNT, Mark, Outcome};

/// Rows top to bottom, columns left to right, then both diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    cells: [Mark; CELL_COUNT],
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_free(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.cells)
    }

    /// Free cells in ascending order. The search relies on this order for
    /// its lowest-index tie-break.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns a copy with `index` set to `mark`.
    ///
    /// Panics if `index` is out of range, the cell is taken, or `mark` is
    /// `Mark::Empty`. Callers validate user input before reaching here.
    pub fn apply_move(self, index: usize, mark: Mark) -> BoardState {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        assert!(
            self.cells[index] == Mark::Empty,
            "cell {} is already taken by {:?}",
            index,
            self.cells[index]
        );
        assert!(mark != Mark::Empty, "cannot place an empty mark");

        let mut cells = self.cells;
        cells[index] = mark;
        BoardState { cells }
    }

    pub fn has_win(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    pub fn winning_line(&self, mark: Mark) -> Option<[usize; 3]> {
        if mark == Mark::Empty {
            return None;
        }
        WIN_LINES
            .iter()
            .find(|line| line.iter().all(|&index| self.cells[index] == mark))
            .copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn classify(&self) -> Outcome {
        if self.has_win(Mark::Human) {
            Outcome::Win(Mark::Human)
        } else if self.has_win(Mark::Computer) {
            Outcome::Win(Mark::Computer)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}
