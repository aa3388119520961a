pub mod find;
pub mod frontier;
pub mod grid;
pub mod render;
pub mod util;

pub use find::{solve, NoSolution, PathFinder, SearchState, Solution};
pub use frontier::{EmptyFrontier, ExplorationOrder, Frontier, NodeId, SearchNode};
pub use grid::{Cell, Direction, MalformedMaze, Maze, Point};
pub use render::{render_image, render_text};
