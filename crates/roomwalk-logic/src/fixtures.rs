//! Hand-built sample maps, used by tests and by `roomwalk fixture`.

use std::fmt;
use std::str::FromStr;

use crate::map::{Map, Room};

const BRICK_ROOM: &str = "You are in a poorly lit room with walls of crude brick.";
const OUTSIDE: &str = "You step out of the cave and into the light. You made it out.";

/// Named sample maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Two rooms, one door.
    Basic,
    /// Four rooms with a dead-end loop beside the way out.
    Cave,
}

impl Fixture {
    pub const ALL: [Fixture; 2] = [Fixture::Basic, Fixture::Cave];

    pub fn name(self) -> &'static str {
        match self {
            Fixture::Basic => "basic",
            Fixture::Cave => "cave",
        }
    }

    pub fn build(self) -> Map {
        match self {
            Fixture::Basic => basic_map(),
            Fixture::Cave => cave_map(),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fixture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fixture::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown fixture '{}' (expected basic or cave)", s))
    }
}

/// Room 1 (start) with a single door into room 2 (exit).
pub fn basic_map() -> Map {
    Map::new(vec![
        Room::new(1, BRICK_ROOM).starting().with_door("faded brown", 2),
        Room::new(2, OUTSIDE).ending(),
    ])
}

/// 1 <-> 2 is a dead-end loop; the way out is 1 -> 3 -> 4.
pub fn cave_map() -> Map {
    Map::new(vec![
        Room::new(1, BRICK_ROOM)
            .starting()
            .with_door("faded brown", 2)
            .with_door("rusty iron", 3),
        Room::new(
            2,
            "You are in a carved out room. A campfire is beginning to go out in the middle of the room.",
        )
        .with_door("faded brown", 1),
        Room::new(
            3,
            "You are in a room with planks of wood lining the walls keeping back the dirt and rock that is pushing its way in.",
        )
        .with_door("rusty iron", 1)
        .with_door("cracked wooden", 4),
        Room::new(4, OUTSIDE).ending(),
    ])
}
