//! Console move loop over any line reader and writer.

use std::io::{self, BufRead, Write};

use roomwalk_logic::narration::{door_choices, parse_command, Command};
use roomwalk_logic::Session;

pub const READY: &str = "Ready. Type E or Exit at anytime to quit.";
const PROMPT: &str = "What number door will you take: ";
const INVALID_CHOICE: &str = "Please input a number of a valid door.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reached an exit room.
    Won,
    /// Typed `e`/`exit`, or input ran out.
    Quit,
    /// Walked through a door into a room that does not exist.
    Lost,
}

/// Run turns until the player wins, quits, or gets lost.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut buf = Vec::new();
    loop {
        let room = match session.current_room() {
            Ok(room) => room,
            Err(e) => {
                log::error!("{}", e);
                writeln!(out, "Error with room or map")?;
                return Ok(Outcome::Lost);
            }
        };

        writeln!(out, "{}", room.description)?;
        if room.is_end {
            writeln!(out, "!!! YOU WIN !!!")?;
            return Ok(Outcome::Won);
        }

        writeln!(out, "{}\n", door_choices(&room.doors))?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        // Raw bytes: undecodable input is an invalid choice, not a read failure.
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            return Ok(Outcome::Quit);
        }
        let line = String::from_utf8_lossy(&buf);

        match parse_command(&line) {
            Command::Exit => return Ok(Outcome::Quit),
            Command::Door(choice) => match session.take_door(choice) {
                Ok(door) => writeln!(out, "You go through the {} door.", door.color)?,
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(out, "{}", INVALID_CHOICE)?;
                }
            },
            Command::Invalid => writeln!(out, "{}", INVALID_CHOICE)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomwalk_logic::{fixtures, validate_map, Map, Room};

    fn play(map: &Map, input: &str) -> (Outcome, String, u32) {
        let start = validate_map(map).unwrap();
        let mut session = Session::new(map, start);
        let mut out = Vec::new();
        let outcome = run_session(&mut session, input.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap(), session.moves())
    }

    #[test]
    fn basic_map_win() {
        let (outcome, text, moves) = play(&fixtures::basic_map(), "1\n");
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(moves, 1);
        assert_eq!(
            text,
            "You are in a poorly lit room with walls of crude brick.\n\
             You see a door. It is a faded brown [1] door.\n\n\
             What number door will you take: \
             You go through the faded brown door.\n\
             You step out of the cave and into the light. You made it out.\n\
             !!! YOU WIN !!!\n"
        );
    }

    #[test]
    fn cave_map_detour_then_win() {
        let (outcome, text, moves) = play(&fixtures::cave_map(), "1\n1\n2\n2\n");
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(moves, 4);
        assert!(text.contains("campfire"));
        assert!(text.contains(
            "You see some doors. There is a faded brown [1] door and a rusty iron [2] door."
        ));
        assert!(text.contains("You go through the cracked wooden door."));
    }

    #[test]
    fn exit_command_quits() {
        let (outcome, text, moves) = play(&fixtures::cave_map(), "EXIT\n");
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(moves, 0);
        assert!(!text.contains("YOU WIN"));
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, _, _) = play(&fixtures::cave_map(), "");
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn invalid_choices_repeat_the_turn() {
        let (outcome, text, moves) = play(&fixtures::basic_map(), "banana\n0\n7\n1\n");
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(moves, 1);
        assert_eq!(text.matches(INVALID_CHOICE).count(), 3);
        assert_eq!(text.matches("crude brick").count(), 4);
    }

    #[test]
    fn non_utf8_input_is_an_invalid_choice() {
        let map = fixtures::basic_map();
        let start = validate_map(&map).unwrap();
        let mut session = Session::new(&map, start);
        let mut out = Vec::new();
        let outcome = run_session(&mut session, &b"\xff\xfe\n1\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(text.matches(INVALID_CHOICE).count(), 1);
        assert!(text.ends_with("!!! YOU WIN !!!\n"));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let (outcome, _, moves) = play(&fixtures::basic_map(), "1");
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(moves, 1);
    }

    #[test]
    fn dangling_door_ends_session() {
        let map = Map::new(vec![
            Room::new(1, "Start").starting().with_door("void", 99).with_door("out", 2),
            Room::new(2, "Out").ending(),
        ]);
        let (outcome, text, _) = play(&map, "1\n");
        assert_eq!(outcome, Outcome::Lost);
        assert!(text.ends_with("You go through the void door.\nError with room or map\n"));
    }
}
