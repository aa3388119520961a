use std::{collections::VecDeque, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Point};

/// Index of an expanded node in the search engine's arena.
pub type NodeId = usize;

/// A discovered state together with the back-reference to the expanded
/// node that discovered it and the action taken to get here. The root
/// node has no back-reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchNode {
    pub state: Point,
    pub from: Option<(NodeId, Direction)>,
}

/// Which end of the frontier `remove` takes nodes from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ExplorationOrder {
    /// Last in, first out: the frontier behaves as a stack.
    DepthFirst,
    /// First in, first out: the frontier behaves as a queue.
    BreadthFirst,
}

impl Display for ExplorationOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExplorationOrder::DepthFirst => "dfs",
                ExplorationOrder::BreadthFirst => "bfs",
            }
        )
    }
}

impl FromStr for ExplorationOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(ExplorationOrder::DepthFirst),
            "bfs" => Ok(ExplorationOrder::BreadthFirst),
            _ => Err(anyhow::anyhow!("Invalid exploration order: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontier;

impl Display for EmptyFrontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "empty frontier")
    }
}

impl std::error::Error for EmptyFrontier {}

/// The set of discovered but not yet expanded nodes. Insertion order is
/// preserved; the removal policy is the only difference between a
/// depth-first and a breadth-first search.
#[derive(Debug)]
pub struct Frontier {
    nodes: VecDeque<SearchNode>,
    order: ExplorationOrder,
}

impl Frontier {
    pub fn new(order: ExplorationOrder) -> Self {
        Self {
            nodes: VecDeque::new(),
            order,
        }
    }

    pub fn add(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: Point) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn remove(&mut self) -> Result<SearchNode, EmptyFrontier> {
        match self.order {
            ExplorationOrder::DepthFirst => self.nodes.pop_back(),
            ExplorationOrder::BreadthFirst => self.nodes.pop_front(),
        }
        .ok_or(EmptyFrontier)
    }
}
