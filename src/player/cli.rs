#![cfg(feature = "std")]

use std::str::SplitWhitespace;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::core::{
    config::GRID_WIDTH,
    grid::Grid,
    view::{CellView, GameView},
};
use crate::session::{Command, Frontend};

const HELP: &str = "\
Commands:
  place <ship> <cell>    drop a ship (e.g. place carrier A1)
  preview <ship> <cell>  show where a ship would land
  flip                   toggle horizontal/vertical
  auto                   place remaining ships at random
  start                  begin once all ships are placed
  fire <cell> | <cell>   shoot at the enemy grid (e.g. fire C7)
  show                   redraw the boards
  new                    start a new game
  quit                   leave";

/// Line-oriented terminal frontend for the human player.
pub struct CliFrontend<B> {
    input: B,
}

impl CliFrontend<BufReader<Stdin>> {
    /// Frontend reading commands from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<B: AsyncBufRead + Unpin + Send> CliFrontend<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

fn coord_to_string(index: usize) -> String {
    let (r, c) = Grid::coords(index);
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

fn preview_line(ship: &str, cells: &[usize]) -> String {
    let coords: Vec<String> = cells.iter().map(|&c| coord_to_string(c)).collect();
    format!("{} would cover {}", ship, coords.join(" "))
}

/// Parse `A5`-style coordinates or a raw cell index into a linear index.
pub fn parse_cell(input: &str) -> Result<usize, String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if let Ok(index) = input.parse::<usize>() {
        return Grid::index(index / GRID_WIDTH, index % GRID_WIDTH)
            .ok_or_else(|| format!("Cell {} out of bounds - must be 0-99", index));
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= GRID_WIDTH {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    Grid::index(row - 1, col).ok_or_else(|| format!("Row {} out of bounds - must be 1-10", row))
}

fn ship_and_cell(parts: &mut SplitWhitespace<'_>) -> Result<(String, usize), String> {
    let ship = parts.next().ok_or("Missing ship name")?.to_ascii_lowercase();
    let cell = parse_cell(parts.next().ok_or("Missing cell")?)?;
    Ok((ship, cell))
}

/// Parse one input line. `Ok(None)` for blank lines and `help`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let word = word.to_ascii_lowercase();
    let command = match word.as_str() {
        "place" | "p" => {
            let (ship, cell) = ship_and_cell(&mut parts)?;
            Command::Place { ship, cell }
        }
        "preview" | "hover" => {
            let (ship, cell) = ship_and_cell(&mut parts)?;
            Command::Preview { ship, cell }
        }
        "flip" | "f" | "rotate" => Command::Flip,
        "auto" | "random" => Command::Auto,
        "start" | "s" => Command::Start,
        "fire" | "shoot" => Command::Fire(parse_cell(parts.next().ok_or("Missing cell")?)?),
        "show" | "board" => Command::Show,
        "new" => Command::NewGame,
        "quit" | "q" | "exit" => Command::Quit,
        "help" | "h" | "?" => return Ok(None),
        other => match parse_cell(other) {
            Ok(cell) => Command::Fire(cell),
            Err(_) => return Err(format!("Unknown command '{}' (try 'help')", other)),
        },
    };
    Ok(Some(command))
}

fn cell_char(cell: &CellView) -> char {
    if cell.sunk {
        '#'
    } else if cell.hit {
        'X'
    } else if cell.miss {
        'o'
    } else if cell.occupied {
        'S'
    } else {
        '.'
    }
}

fn print_grid(cells: &[CellView]) {
    std::print!("   ");
    for c in 0..GRID_WIDTH {
        let ch = (b'A' + c as u8) as char;
        std::print!(" {}", ch);
    }
    std::println!();
    for (r, row) in cells.chunks(GRID_WIDTH).enumerate() {
        std::print!("{:2} ", r + 1);
        for cell in row {
            std::print!(" {}", cell_char(cell));
        }
        std::println!();
    }
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_view(view: &GameView) {
    std::println!("\nOpponent board:");
    print_grid(&view.opponent_grid);
    std::println!("\nYour board:");
    print_grid(&view.player_grid);
    if !view.unplaced.is_empty() {
        std::println!(
            "\nTo place ({:?}, {}°): {}",
            view.orientation,
            view.orientation.angle(),
            view.unplaced.join(", ")
        );
    }
    if !view.turn_text.is_empty() {
        std::println!("\n[{}]", view.turn_text);
    }
    std::println!("{}", view.status);
}

#[async_trait]
impl<B: AsyncBufRead + Unpin + Send> Frontend for CliFrontend<B> {
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            match parse_command(line.trim()) {
                Ok(Some(command)) => return Ok(Some(command)),
                Ok(None) => std::println!("{}", HELP),
                Err(e) => std::println!("{}", e),
            }
        }
    }

    fn render(&mut self, view: &GameView) {
        print_view(view);
    }

    fn notify(&mut self, message: &str) {
        std::println!("{}", message);
    }

    fn preview(&mut self, ship: &str, cells: &[usize]) {
        std::println!("{}", preview_line(ship, cells));
    }
}
