use std::{collections::HashSet, fmt::Display};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::frontier::{EmptyFrontier, ExplorationOrder, Frontier, SearchNode};
use crate::grid::{Direction, Maze, Point};

/// A complete path from start to goal, together with the exploration
/// record of the search that produced it.
#[derive(Debug, PartialEq, Clone, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Moves taken, one per cell stepped onto.
    pub actions: Vec<Direction>,
    /// Cells stepped onto, excluding the start and ending at the goal.
    pub cells: Vec<Point>,
    /// Every expanded cell, in removal order.
    pub explored: Vec<Point>,
    /// Total nodes removed from the frontier, the goal removal included.
    pub num_explored: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Computing,
    NoPathFound,
    PathFound(Solution),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSolution;

impl Display for NoSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no solution")
    }
}

impl std::error::Error for NoSolution {}

/// Incremental search over a maze. Each `step` removes one node from the
/// frontier; the finder transitions out of `Computing` when the goal is
/// removed or the frontier runs dry.
#[derive(Debug)]
pub struct PathFinder {
    start: Point,
    goal: Point,
    frontier: Frontier,
    explored: HashSet<Point>,
    expanded: Vec<SearchNode>,
    num_explored: usize,
    state: SearchState,
}

impl PathFinder {
    pub fn new(start: Point, goal: Point, order: ExplorationOrder) -> Self {
        let mut frontier = Frontier::new(order);
        frontier.add(SearchNode {
            state: start,
            from: None,
        });

        Self {
            start,
            goal,
            frontier,
            explored: HashSet::new(),
            expanded: Vec::new(),
            num_explored: 0,
            state: SearchState::Computing,
        }
    }

    pub fn finish(mut self, maze: &Maze) -> SearchState {
        loop {
            match self.step(maze) {
                SearchState::Computing => {}
                s => return s,
            }
        }
    }

    pub fn step(&mut self, maze: &Maze) -> SearchState {
        if self.state != SearchState::Computing {
            return self.state.clone();
        }

        match self.frontier.remove() {
            Ok(node) => {
                self.num_explored += 1;

                // if this is the goal, backtrack through the expanded
                // nodes to recover the path
                if node.state == self.goal {
                    debug!(
                        "found goal {:?} after removing {} nodes",
                        self.goal, self.num_explored
                    );
                    self.state = SearchState::PathFound(self.reconstruct(node));
                    return self.state.clone();
                }

                self.explored.insert(node.state);
                let id = self.expanded.len();
                self.expanded.push(node);

                for (action, state) in maze.neighbors(node.state) {
                    if !self.frontier.contains_state(state) && !self.explored.contains(&state) {
                        self.frontier.add(SearchNode {
                            state,
                            from: Some((id, action)),
                        });
                    }
                    trace!("{} {:?}", action, state);
                }
            }
            Err(EmptyFrontier) => {
                debug!(
                    "frontier exhausted, no path from {:?} to {:?}",
                    self.start, self.goal
                );
                self.state = SearchState::NoPathFound;
            }
        }

        self.state.clone()
    }

    fn reconstruct(&self, goal: SearchNode) -> Solution {
        let mut actions = Vec::new();
        let mut cells = Vec::new();

        let mut node = goal;
        while let Some((parent, action)) = node.from {
            actions.push(action);
            cells.push(node.state);
            node = self.expanded[parent];
        }
        actions.reverse();
        cells.reverse();

        Solution {
            actions,
            cells,
            explored: self.expanded.iter().map(|node| node.state).collect(),
            num_explored: self.num_explored,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn explored(&self) -> &HashSet<Point> {
        &self.explored
    }

    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }
}

/// Run a search over the maze's own start and goal to completion.
pub fn solve(maze: &Maze, order: ExplorationOrder) -> Result<Solution, NoSolution> {
    let finder = PathFinder::new(maze.start(), maze.goal(), order);
    match finder.finish(maze) {
        SearchState::PathFound(solution) => Ok(solution),
        _ => Err(NoSolution),
    }
}

#[cfg(test)]
mod test {

    use std::collections::VecDeque;

    use super::*;

    const CORRIDOR_MAZE: &str = "\
#####E#
# # # #
#S    #
#######";

    const DETOUR_MAZE: &str = "E   \n ## \nS   ";

    const BRANCHING_MAZE: &str = "\
#######
#S###E#
# ### #
# #   #
# # ###
#     #
#######";

    const SEALED_MAZE: &str = "\
#####
#S#E#
#####";

    /// Walk the actions from the start, comparing each step against the
    /// solution cells. The walk must stay off walls and end at the goal.
    fn assert_valid_solution(maze: &Maze, solution: &Solution) {
        assert_eq!(solution.actions.len(), solution.cells.len());

        let mut current = maze.start();
        for (action, cell) in solution.actions.iter().zip(&solution.cells) {
            let step = match action {
                Direction::Up => Point {
                    row: current.row - 1,
                    col: current.col,
                },
                Direction::Down => Point {
                    row: current.row + 1,
                    col: current.col,
                },
                Direction::Left => Point {
                    row: current.row,
                    col: current.col - 1,
                },
                Direction::Right => Point {
                    row: current.row,
                    col: current.col + 1,
                },
            };
            assert_eq!(step, *cell);
            assert!(!maze.is_wall(step));
            current = step;
        }
        assert_eq!(current, maze.goal());
    }

    /// Independent shortest-distance computation to check optimality
    /// claims against.
    fn flood_fill_distance(maze: &Maze) -> Option<usize> {
        let mut queue = VecDeque::from([(maze.start(), 0)]);
        let mut seen = HashSet::from([maze.start()]);

        while let Some((point, distance)) = queue.pop_front() {
            if point == maze.goal() {
                return Some(distance);
            }
            for (_, next) in maze.neighbors(point) {
                if seen.insert(next) {
                    queue.push_back((next, distance + 1));
                }
            }
        }
        None
    }

    #[test]
    fn breadth_first_returns_the_shortest_corridor_path() {
        let maze: Maze = CORRIDOR_MAZE.parse().unwrap();
        let solution = solve(&maze, ExplorationOrder::BreadthFirst).unwrap();

        assert_valid_solution(&maze, &solution);
        assert_eq!(
            solution.actions,
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Up,
                Direction::Up,
            ]
        );
        assert_eq!(
            solution.cells,
            vec![
                Point { row: 2, col: 2 },
                Point { row: 2, col: 3 },
                Point { row: 2, col: 4 },
                Point { row: 2, col: 5 },
                Point { row: 1, col: 5 },
                Point { row: 0, col: 5 },
            ]
        );
        assert_eq!(solution.num_explored, 9);
    }

    #[test]
    fn depth_first_finds_a_valid_route() {
        let maze: Maze = CORRIDOR_MAZE.parse().unwrap();
        let solution = solve(&maze, ExplorationOrder::DepthFirst).unwrap();

        assert_valid_solution(&maze, &solution);
        assert!(solution.actions.len() >= 6);
    }

    #[test]
    fn breadth_first_beats_depth_first_on_detours() {
        let maze: Maze = DETOUR_MAZE.parse().unwrap();

        let bfs = solve(&maze, ExplorationOrder::BreadthFirst).unwrap();
        assert_valid_solution(&maze, &bfs);
        assert_eq!(bfs.actions, vec![Direction::Up, Direction::Up]);

        // the stack frontier commits to the most recently discovered
        // branch and walks around the wall instead
        let dfs = solve(&maze, ExplorationOrder::DepthFirst).unwrap();
        assert_valid_solution(&maze, &dfs);
        assert_eq!(
            dfs.actions,
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Up,
                Direction::Up,
                Direction::Left,
                Direction::Left,
                Direction::Left,
            ]
        );

        assert!(bfs.actions.len() <= dfs.actions.len());
    }

    #[test]
    fn both_orders_agree_on_a_single_route_maze() {
        let maze: Maze = BRANCHING_MAZE.parse().unwrap();

        let bfs = solve(&maze, ExplorationOrder::BreadthFirst).unwrap();
        let dfs = solve(&maze, ExplorationOrder::DepthFirst).unwrap();

        assert_valid_solution(&maze, &bfs);
        assert_valid_solution(&maze, &dfs);

        // every corridor is one cell wide, so there is only one route
        assert_eq!(bfs.actions.len(), 12);
        assert_eq!(bfs.cells, dfs.cells);
    }

    #[test]
    fn breadth_first_path_length_matches_flood_fill() {
        for text in [CORRIDOR_MAZE, DETOUR_MAZE, BRANCHING_MAZE] {
            let maze: Maze = text.parse().unwrap();
            let solution = solve(&maze, ExplorationOrder::BreadthFirst).unwrap();

            assert_eq!(Some(solution.actions.len()), flood_fill_distance(&maze));
        }
    }

    #[test]
    fn explored_cells_are_unique_and_counted() {
        for order in [ExplorationOrder::DepthFirst, ExplorationOrder::BreadthFirst] {
            let maze: Maze = CORRIDOR_MAZE.parse().unwrap();
            let solution = solve(&maze, order).unwrap();

            let unique: HashSet<_> = solution.explored.iter().collect();
            assert_eq!(unique.len(), solution.explored.len());

            // the goal removal is counted but never expanded
            assert_eq!(solution.num_explored, solution.explored.len() + 1);
            assert_eq!(solution.explored.first(), Some(&maze.start()));
            assert!(!solution.explored.contains(&maze.goal()));
        }
    }

    #[test]
    fn solving_twice_yields_identical_solutions() {
        for order in [ExplorationOrder::DepthFirst, ExplorationOrder::BreadthFirst] {
            let maze: Maze = BRANCHING_MAZE.parse().unwrap();

            let first = solve(&maze, order).unwrap();
            let second = solve(&maze, order).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn sealed_start_yields_no_solution() {
        let maze: Maze = SEALED_MAZE.parse().unwrap();

        for order in [ExplorationOrder::DepthFirst, ExplorationOrder::BreadthFirst] {
            let result = solve(&maze, order);
            assert_eq!(result, Err(NoSolution));
        }
        assert_eq!(NoSolution.to_string(), "no solution");
    }

    #[test]
    fn finder_reports_progress_per_step() {
        let maze: Maze = CORRIDOR_MAZE.parse().unwrap();
        let mut finder = PathFinder::new(maze.start(), maze.goal(), ExplorationOrder::BreadthFirst);

        assert_eq!(*finder.state(), SearchState::Computing);
        assert_eq!(finder.start(), maze.start());
        assert_eq!(finder.goal(), maze.goal());

        assert!(matches!(finder.step(&maze), SearchState::Computing));
        assert_eq!(finder.num_explored(), 1);
        assert!(finder.explored().contains(&maze.start()));

        let state = loop {
            match finder.step(&maze) {
                SearchState::Computing => {}
                state => break state,
            }
        };
        assert!(matches!(state, SearchState::PathFound(_)));

        // further steps keep the finished state
        assert!(matches!(finder.step(&maze), SearchState::PathFound(_)));
    }

    #[test]
    fn start_equal_to_goal_solves_immediately() {
        let maze: Maze = "S E".parse().unwrap();
        let finder = PathFinder::new(maze.start(), maze.start(), ExplorationOrder::DepthFirst);

        match finder.finish(&maze) {
            SearchState::PathFound(solution) => {
                assert!(solution.actions.is_empty());
                assert!(solution.cells.is_empty());
                assert!(solution.explored.is_empty());
                assert_eq!(solution.num_explored, 1);
            }
            state => panic!("expected a path, got {:?}", state),
        }
    }

    #[test]
    fn solution_serializes_round_trip() {
        let maze: Maze = CORRIDOR_MAZE.parse().unwrap();
        let solution = solve(&maze, ExplorationOrder::BreadthFirst).unwrap();

        let json = serde_json::to_string(&solution).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(solution, back);
    }
}
