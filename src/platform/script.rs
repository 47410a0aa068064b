//! Line-based command script for the native driver
//!
//! One command per line:
//!
//! ```text
//! down <key>    key pressed
//! up <key>      key released
//! tick [n]      advance n frames (default 1)
//! frame         print the current frame as JSON
//! reset         restart the game
//! # comment
//! ```

use std::io::{BufRead, Write};

use super::FrameDriver;
use crate::sim::{Control, InputEvent, Key};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("script I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(InputEvent),
    /// `down`/`up` with a key the game does not know; ignored
    UnknownKey(String),
    Tick(u32),
    Frame,
    Reset,
}

/// Parse one line. Blank lines and comments give `Ok(None)`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let arg = words.next();
    if words.next().is_some() {
        return Err(parse_error(line_no, format!("too many arguments in `{line}`")));
    }

    let command = match (verb.as_str(), arg) {
        ("down" | "up", Some(name)) => match Key::from_name(name) {
            Some(key) if verb == "down" => Command::Input(InputEvent::KeyDown(key)),
            Some(key) => Command::Input(InputEvent::KeyUp(key)),
            None => Command::UnknownKey(name.to_string()),
        },
        ("down" | "up", None) => {
            return Err(parse_error(line_no, format!("`{verb}` needs a key")));
        }
        ("tick", None) => Command::Tick(1),
        ("tick", Some(n)) => {
            let n = n
                .parse::<u32>()
                .map_err(|_| parse_error(line_no, format!("bad tick count `{n}`")))?;
            Command::Tick(n)
        }
        ("frame", None) => Command::Frame,
        ("reset", None) => Command::Reset,
        _ => return Err(parse_error(line_no, format!("unknown command `{line}`"))),
    };
    Ok(Some(command))
}

fn parse_error(line: usize, message: String) -> ScriptError {
    ScriptError::Parse { line, message }
}

/// Run commands from `input` until it ends or the game quits.
/// Key events are queued and take effect on the next `tick`. Frames requested
/// with `frame` are written to `output`, one JSON object per line.
pub fn run_script(
    driver: &mut FrameDriver,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), ScriptError> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let Some(command) = parse_line(index + 1, &line)? else {
            continue;
        };

        match command {
            Command::Input(event) => driver.push_input(event),
            Command::UnknownKey(name) => log::debug!("Ignoring unknown key `{name}`"),
            Command::Tick(n) => {
                for _ in 0..n {
                    if driver.update() == Control::Quit {
                        break;
                    }
                }
            }
            Command::Frame => {
                writeln!(output, "{}", driver.render_frame().to_json()?)?;
            }
            Command::Reset => driver.reset(),
        }

        if !driver.is_running() {
            break;
        }
    }

    // Input still queued at end of script, so a trailing quit is honored
    driver.process_input();
    output.flush()?;
    Ok(())
}
