//! Advisory checks over a map.
//!
//! Nothing here affects whether a map is playable (see
//! [`crate::validation`]); these are things a map author probably wants to
//! know about, reported all at once.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::map::{Map, RoomId};

/// A non-fatal finding about a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapWarning {
    /// More than one room carries this id; only the first is reachable by doors.
    DuplicateRoomId(RoomId),
    /// A door whose target matches no room.
    DanglingDoor {
        room: RoomId,
        color: String,
        target: RoomId,
    },
    /// No chain of doors leads here from the starting room.
    UnreachableRoom(RoomId),
    /// A non-exit room without doors; the player can only quit from it.
    DeadEnd(RoomId),
}

impl MapWarning {
    pub fn category(&self) -> &'static str {
        match self {
            MapWarning::DuplicateRoomId(_) => "duplicate_id",
            MapWarning::DanglingDoor { .. } => "dangling_door",
            MapWarning::UnreachableRoom(_) => "unreachable",
            MapWarning::DeadEnd(_) => "dead_end",
        }
    }
}

impl fmt::Display for MapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapWarning::DuplicateRoomId(id) => write!(f, "Room id #{} is used more than once", id),
            MapWarning::DanglingDoor {
                room,
                color,
                target,
            } => write!(
                f,
                "Room #{} has a door colored {} leading to non-existent room #{}",
                room, color, target
            ),
            MapWarning::UnreachableRoom(id) => {
                write!(f, "Room #{} cannot be reached from the start", id)
            }
            MapWarning::DeadEnd(id) => write!(f, "Room #{} has no doors and is not an exit", id),
        }
    }
}

/// Run every check, in map order.
pub fn lint_map(map: &Map) -> Vec<MapWarning> {
    let mut warnings = Vec::new();
    warnings.extend(check_duplicate_ids(map));
    warnings.extend(check_dangling_doors(map));
    warnings.extend(check_dead_ends(map));
    warnings.extend(check_unreachable_rooms(map));
    warnings
}

/// Ids shared by more than one room, each reported once.
pub fn check_duplicate_ids(map: &Map) -> Vec<MapWarning> {
    let mut counts: HashMap<RoomId, usize> = HashMap::new();
    for r in map.rooms() {
        *counts.entry(r.id).or_default() += 1;
    }
    let mut reported = HashSet::new();
    map.rooms()
        .iter()
        .filter(|r| counts[&r.id] > 1 && reported.insert(r.id))
        .map(|r| MapWarning::DuplicateRoomId(r.id))
        .collect()
}

pub fn check_dangling_doors(map: &Map) -> Vec<MapWarning> {
    let room_ids: HashSet<RoomId> = map.rooms().iter().map(|r| r.id).collect();
    let mut warnings = Vec::new();
    for r in map.rooms() {
        for d in &r.doors {
            if !room_ids.contains(&d.target) {
                warnings.push(MapWarning::DanglingDoor {
                    room: r.id,
                    color: d.color.clone(),
                    target: d.target,
                });
            }
        }
    }
    warnings
}

pub fn check_dead_ends(map: &Map) -> Vec<MapWarning> {
    map.rooms()
        .iter()
        .filter(|r| !r.is_end && r.doors.is_empty())
        .map(|r| MapWarning::DeadEnd(r.id))
        .collect()
}

/// Rooms with no door path from the start. Skipped unless there is exactly
/// one starting room.
pub fn check_unreachable_rooms(map: &Map) -> Vec<MapWarning> {
    let mut starts = map.start_rooms();
    let (Some(start), None) = (starts.next(), starts.next()) else {
        return Vec::new();
    };

    // Full BFS over door targets, unlike the validator which stops at the first exit.
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.id);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        for door in &current.doors {
            if let Some(next) = door.leads_to(map) {
                if visited.insert(next.id) {
                    queue.push_back(next);
                }
            }
        }
    }

    let mut reported = HashSet::new();
    map.rooms()
        .iter()
        .filter(|r| !visited.contains(&r.id) && reported.insert(r.id))
        .map(|r| MapWarning::UnreachableRoom(r.id))
        .collect()
}
