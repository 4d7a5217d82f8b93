//! Interactive game loop for the terminal.
//!
//! Reads one command per line: an arrow key or `w`/`a`/`s`/`d` moves,
//! `r` restarts, `q` quits. End of input also quits.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::game::types::Direction;
use crate::game::{restart, step, initialize};
use crate::game::demo::render::render_board;

const PROMPT: &str = "Move (arrows or w/a/s/d, r = restart, q = quit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
    Unknown,
}

pub fn parse_command(input: &str) -> Command {
    match input.trim() {
        "q" | "Q" | "quit" => Command::Quit,
        "r" | "R" | "restart" => Command::Restart,
        other => match Direction::from_key(other).or_else(|| other.parse().ok()) {
            Some(direction) => Command::Move(direction),
            None => Command::Unknown,
        },
    }
}

/// Play a game of `size`×`size` reading commands from `input` and writing
/// the board to `output`.
pub fn run_session<I, O, R>(input: I, output: &mut O, size: usize, mut rng: R, colored: bool) -> io::Result<()>
where
    I: BufRead,
    O: Write,
    R: FnMut() -> f64,
{
    let mut state = initialize(size, &mut rng);
    info!("[Game] New {}x{} game", size, size);
    write!(output, "{}", render_board(&state, colored))?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        match parse_command(&line?) {
            Command::Quit => break,
            Command::Restart => {
                info!("[Game] Restart after score={}", state.score);
                state = restart(size, &mut rng);
            }
            Command::Move(direction) => {
                let next = step(&state, direction, &mut rng);
                if next == state {
                    debug!("[Game] Move {} had no effect", direction);
                } else {
                    debug!("[Game] Move {} score={} max_tile={}", direction, next.score, next.max_tile());
                }
                state = next;
            }
            Command::Unknown => {
                writeln!(output, "Unknown command.")?;
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
        }

        write!(output, "{}", render_board(&state, colored))?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    info!("[Game] Session ended: score={} status={:?}", state.score, state.status());
    Ok(())
}

/// Run the loop on stdin/stdout with coloured tiles.
pub fn run_game_loop<R: FnMut() -> f64>(size: usize, rng: R) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Game start!")?;
    run_session(stdin.lock(), &mut stdout, size, rng, true)
}
