//! Board rendering (terminal).
//!
//! This module turns a game state into text, optionally with 24-bit ANSI
//! tile colours.

use crate::game::state::GameState;

const CELL_WIDTH: usize = 6;
const RESET: &str = "\x1b[0m";

/// Background colour of a tile, as RGB.
pub fn tile_color(value: u32) -> (u8, u8, u8) {
    match value {
        0 => (0x2a, 0x2a, 0x2a),
        2 => (0xee, 0xe4, 0xda),
        4 => (0xed, 0xe0, 0xc8),
        8 => (0xf2, 0xb1, 0x79),
        16 => (0xf5, 0x95, 0x63),
        32 => (0xf6, 0x7c, 0x5f),
        64 => (0xf6, 0x5e, 0x3b),
        128 => (0xed, 0xcf, 0x72),
        256 => (0xed, 0xcc, 0x61),
        512 => (0xed, 0xc8, 0x50),
        1024 => (0xed, 0xc5, 0x3f),
        2048 => (0xed, 0xc2, 0x2e),
        _ => (0x3c, 0x3c, 0x3c),
    }
}

/// Small tiles get dark text, everything else white.
fn text_color(value: u32) -> (u8, u8, u8) {
    if value <= 4 { (0x22, 0x22, 0x22) } else { (0xff, 0xff, 0xff) }
}

fn render_cell(value: u32, colored: bool) -> String {
    let label = if value == 0 { ".".to_string() } else { value.to_string() };
    let cell = format!("{:^width$}", label, width = CELL_WIDTH);
    if !colored {
        return cell;
    }

    let (br, bg, bb) = tile_color(value);
    let (fr, fg, fb) = text_color(value);
    format!("\x1b[48;2;{br};{bg};{bb}m\x1b[38;2;{fr};{fg};{fb}m{cell}{RESET}")
}

/// Render the score line, the board and the status banner.
pub fn render_board(state: &GameState, colored: bool) -> String {
    let mut out = format!("Score: {}  ({}x{})\n\n", state.score, state.size, state.size);

    for row in &state.grid {
        let line: String = row.iter().map(|&value| render_cell(value, colored)).collect();
        out.push_str(&line);
        out.push('\n');
    }

    let status = state.status_message();
    if !status.is_empty() {
        out.push('\n');
        out.push_str(&status);
        out.push('\n');
    }
    out
}
