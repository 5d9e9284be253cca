//! Move-loop state: where the player is and how they move.
//!
//! The cursor is a bare `RoomId` re-resolved against the map on every call,
//! so following a dangling door leaves the session in a detectable "lost"
//! state instead of holding a dead reference.

use crate::map::{Door, Map, Room, RoomId};

/// Errors raised while walking a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The cursor points at a room that does not exist.
    #[error("error with room or map: room #{0} does not exist")]
    LostRoom(RoomId),
    /// The chosen door number is not in `1..=available`.
    #[error("no door [{choice}] here ({available} available)")]
    NoSuchDoor { choice: i64, available: usize },
}

/// One player's walk through a map.
#[derive(Debug, Clone)]
pub struct Session<'m> {
    map: &'m Map,
    current: RoomId,
    moves: u32,
}

impl<'m> Session<'m> {
    /// Start a walk in `start` (normally the room returned by validation).
    pub fn new(map: &'m Map, start: &Room) -> Self {
        Self {
            map,
            current: start.id,
            moves: 0,
        }
    }

    pub fn map(&self) -> &'m Map {
        self.map
    }

    pub fn current_id(&self) -> RoomId {
        self.current
    }

    /// Resolve the cursor. Fails after walking through a dangling door.
    pub fn current_room(&self) -> Result<&'m Room, SessionError> {
        self.map
            .find_room(self.current)
            .ok_or(SessionError::LostRoom(self.current))
    }

    /// True once the player stands in an exit.
    pub fn has_won(&self) -> bool {
        self.current_room().is_ok_and(|r| r.is_end)
    }

    /// Number of doors taken so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Go through door `choice` (1-based) of the current room.
    ///
    /// The cursor moves even if the door is dangling; the next call to
    /// [`Session::current_room`] reports it.
    pub fn take_door(&mut self, choice: i64) -> Result<&'m Door, SessionError> {
        let room = self.current_room()?;
        let available = room.doors.len();
        let door = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| room.doors.get(i))
            .ok_or(SessionError::NoSuchDoor { choice, available })?;

        log::debug!(
            "room #{}: door [{}] ({}) -> room #{}",
            room.id,
            choice,
            door.color,
            door.target
        );
        self.current = door.target;
        self.moves += 1;
        Ok(door)
    }
}
