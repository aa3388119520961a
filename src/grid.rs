use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(anyhow::anyhow!("Invalid direction: {}", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// Error raised when a maze description has the wrong number of markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedMaze {
    StartMarkers(usize),
    GoalMarkers(usize),
}

impl Display for MalformedMaze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedMaze::StartMarkers(_) => {
                write!(f, "maze must have exactly one start point")
            }
            MalformedMaze::GoalMarkers(_) => {
                write!(f, "maze must have exactly one goal")
            }
        }
    }
}

impl std::error::Error for MalformedMaze {}

/// A rectangular grid of cells with a single start and a single goal,
/// immutable once parsed.
#[derive(Debug)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
    start: Point,
    goal: Point,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn is_wall(&self, point: Point) -> bool {
        self.cells[point.row][point.col] == Cell::Wall
    }

    /// Walkable cells adjacent to `node`, always probed in the fixed
    /// order up, down, left, right.
    pub fn neighbors(&self, node: Point) -> impl Iterator<Item = (Direction, Point)> {
        let mut candidates = Vec::with_capacity(4);

        if !self.is_wall(node) {
            if node.row > 0 {
                candidates.push((
                    Direction::Up,
                    Point {
                        row: node.row - 1,
                        col: node.col,
                    },
                ));
            }
            if node.row < self.rows - 1 {
                candidates.push((
                    Direction::Down,
                    Point {
                        row: node.row + 1,
                        col: node.col,
                    },
                ));
            }
            if node.col > 0 {
                candidates.push((
                    Direction::Left,
                    Point {
                        col: node.col - 1,
                        row: node.row,
                    },
                ));
            }
            if node.col < self.columns - 1 {
                candidates.push((
                    Direction::Right,
                    Point {
                        col: node.col + 1,
                        row: node.row,
                    },
                ));
            }
        }

        // filter to only keep walkable cells
        candidates.retain(|(_, p)| !self.is_wall(*p));

        candidates.into_iter()
    }
}

impl FromStr for Maze {
    type Err = MalformedMaze;

    /// Parse a maze description: `S` start, `E` goal, space floor, any
    /// other character a wall. Cells past the end of a short line are
    /// open floor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let rows = lines.len();
        let columns = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut starts = Vec::new();
        let mut goals = Vec::new();

        let mut cells = Vec::with_capacity(rows);
        for (row, line) in lines.iter().enumerate() {
            let mut row_cells = vec![Cell::Floor; columns];
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'S' => starts.push(Point { row, col }),
                    'E' => goals.push(Point { row, col }),
                    ' ' => {}
                    _ => row_cells[col] = Cell::Wall,
                }
            }
            cells.push(row_cells);
        }

        let start = match starts.as_slice() {
            &[point] => point,
            other => return Err(MalformedMaze::StartMarkers(other.len())),
        };
        let goal = match goals.as_slice() {
            &[point] => point,
            other => return Err(MalformedMaze::GoalMarkers(other.len())),
        };

        Ok(Maze {
            rows,
            columns,
            cells,
            start,
            goal,
        })
    }
}
