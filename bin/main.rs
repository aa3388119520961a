use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mazepath::{render_image, render_text, solve, util::load_maze, ExplorationOrder};

/// Solve a text maze with depth-first or breadth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the maze description file
    maze: PathBuf,

    /// Exploration order: dfs (stack frontier) or bfs (queue frontier)
    #[arg(long, default_value = "dfs")]
    order: ExplorationOrder,

    /// Write a PNG rendering of the solved maze to this path
    #[arg(long)]
    image: Option<PathBuf>,

    /// Include explored cells in the renderings
    #[arg(long)]
    show_explored: bool,
}

fn run(args: &Args) -> Result<(), anyhow::Error> {
    let maze = load_maze(&args.maze)?;

    println!("Maze:");
    println!();
    print!("{}", render_text(&maze, None, false));
    println!();

    println!("Solving...");
    let solution = solve(&maze, args.order)?;

    println!("States Explored: {}", solution.num_explored);
    println!("Solution:");
    println!();
    print!("{}", render_text(&maze, Some(&solution), args.show_explored));
    println!();

    if let Some(path) = &args.image {
        render_image(&maze, Some(&solution), args.show_explored)
            .save(path)
            .with_context(|| format!("failed to write image to {}", path.display()))?;
    }

    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    run(&Args::parse())
}
