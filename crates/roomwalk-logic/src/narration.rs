//! Player-facing text and input parsing for the move loop.

use crate::map::Door;

/// What the player typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e` or `exit`, any case.
    Exit,
    /// A door number as typed (1-based, not range-checked).
    Door(i64),
    /// Anything else.
    Invalid,
}

/// Parse one line of player input.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.eq_ignore_ascii_case("e") || input.eq_ignore_ascii_case("exit") {
        return Command::Exit;
    }
    match input.parse::<i64>() {
        Ok(n) => Command::Door(n),
        Err(_) => Command::Invalid,
    }
}

/// Describe the doors of a room with their 1-based numbers.
///
/// `You see a door. It is a brown [1] door.` for a single door;
/// `You see some doors. There is a red [1] door and a blue [2] door.` for two.
/// Longer lists use commas with `and` before the last entry.
pub fn door_choices(doors: &[Door]) -> String {
    let entries: Vec<String> = doors
        .iter()
        .enumerate()
        .map(|(i, d)| format!("a {} [{}] door", d.color, i + 1))
        .collect();

    match entries.as_slice() {
        [] => "You see no doors.".to_string(),
        [only] => format!("You see a door. It is {}.", only),
        [init @ .., last] => format!("You see some doors. There is {} and {}.", init.join(", "), last),
    }
}
