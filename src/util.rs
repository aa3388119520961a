use std::path::Path;

use anyhow::Context;

use crate::grid::Maze;

/// Read a maze description from a text file.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, anyhow::Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read maze file {}", path.display()))?;
    let maze = text.parse()?;
    Ok(maze)
}
