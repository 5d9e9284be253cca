//! Room graph model.
//!
//! A `Map` owns its rooms in load order; each `Door` carries only the id of
//! the room it leads to and is resolved through [`Map::find_room`] when
//! followed. Doors never own rooms, so cycles in the graph are just ids.

use serde::{Deserialize, Deserializer, Serialize};

/// Room identifier as stored in map files.
pub type RoomId = i32;

/// A directed edge from its owning room to another room id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    #[serde(rename = "DoorColor", default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "ConnectsToRoomId")]
    pub target: RoomId,
}

impl Door {
    pub fn new(color: impl Into<String>, target: RoomId) -> Self {
        Self {
            color: color.into(),
            target,
        }
    }

    /// Resolve the room behind this door. `None` for a dangling door.
    pub fn leads_to<'m>(&self, map: &'m Map) -> Option<&'m Room> {
        map.find_room(self.target)
    }
}

/// A node in the map. Door order is the numbering shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "RoomId")]
    pub id: RoomId,
    #[serde(rename = "StartingRoom", default)]
    pub is_start: bool,
    #[serde(rename = "EndingRoom", default)]
    pub is_end: bool,
    #[serde(rename = "RoomDesc", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Doors", default, deserialize_with = "null_as_default")]
    pub doors: Vec<Door>,
}

impl Room {
    /// A plain room with no flags and no doors.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            is_start: false,
            is_end: false,
            description: description.into(),
            doors: Vec::new(),
        }
    }

    /// Mark as the starting room.
    pub fn starting(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Mark as an exit.
    pub fn ending(mut self) -> Self {
        self.is_end = true;
        self
    }

    /// Append a door; doors are numbered in the order they are added.
    pub fn with_door(mut self, color: impl Into<String>, target: RoomId) -> Self {
        self.doors.push(Door::new(color, target));
        self
    }
}

/// The whole room graph. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    #[serde(rename = "Rooms", default, deserialize_with = "null_as_default")]
    rooms: Vec<Room>,
}

impl Map {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Look up a room by id. With duplicate ids, the first in load order wins.
    pub fn find_room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms flagged as the entrance (a valid map has exactly one).
    pub fn start_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_start)
    }

    /// Rooms flagged as exits.
    pub fn end_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_end)
    }
}

/// Map files written by older tools carry `null` for empty lists and text.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
