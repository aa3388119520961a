use image::{Rgba, RgbaImage};

use crate::find::Solution;
use crate::grid::{Maze, Point};

const CELL_SIZE: u32 = 50;
const CELL_BORDER: u32 = 2;

const WALL: Rgba<u8> = Rgba([40, 40, 40, 255]);
const START: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GOAL: Rgba<u8> = Rgba([0, 171, 28, 255]);
const PATH: Rgba<u8> = Rgba([220, 235, 113, 255]);
const EXPLORED: Rgba<u8> = Rgba([212, 97, 85, 255]);
const FLOOR: Rgba<u8> = Rgba([237, 240, 252, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render the maze as one line of glyphs per row: `x` wall, `S` start,
/// `E` goal, `*` solution path, `.` explored (when requested), space
/// open floor.
pub fn render_text(maze: &Maze, solution: Option<&Solution>, show_explored: bool) -> String {
    let mut out = String::new();

    for row in 0..maze.rows() {
        for col in 0..maze.columns() {
            let point = Point { row, col };
            let glyph = if maze.is_wall(point) {
                'x'
            } else if point == maze.start() {
                'S'
            } else if point == maze.goal() {
                'E'
            } else if solution.is_some_and(|s| s.cells.contains(&point)) {
                '*'
            } else if show_explored && solution.is_some_and(|s| s.explored.contains(&point)) {
                '.'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// Render the maze as a pixel image, one 50 px square per cell with a
/// 2 px gap showing the black canvas between cells.
pub fn render_image(maze: &Maze, solution: Option<&Solution>, show_explored: bool) -> RgbaImage {
    let width = maze.columns() as u32 * CELL_SIZE;
    let height = maze.rows() as u32 * CELL_SIZE;
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    for row in 0..maze.rows() {
        for col in 0..maze.columns() {
            let point = Point { row, col };
            let fill = if maze.is_wall(point) {
                WALL
            } else if point == maze.start() {
                START
            } else if point == maze.goal() {
                GOAL
            } else if solution.is_some_and(|s| s.cells.contains(&point)) {
                PATH
            } else if show_explored && solution.is_some_and(|s| s.explored.contains(&point)) {
                EXPLORED
            } else {
                FLOOR
            };

            let x0 = col as u32 * CELL_SIZE + CELL_BORDER;
            let y0 = row as u32 * CELL_SIZE + CELL_BORDER;
            let x1 = (col as u32 + 1) * CELL_SIZE - CELL_BORDER;
            let y1 = (row as u32 + 1) * CELL_SIZE - CELL_BORDER;

            for y in y0..=y1 {
                for x in x0..=x1 {
                    img.put_pixel(x, y, fill);
                }
            }
        }
    }

    img
}
