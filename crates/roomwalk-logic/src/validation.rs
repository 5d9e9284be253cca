//! Map validation: structural checks plus start-to-exit reachability.
//!
//! A map is playable when it has exactly one starting room, at least one
//! ending room, and some door path from the start to an exit. The path
//! search is depth-first in door order and marks each room on entry, so
//! cycles are walked at most once and the search always terminates.

use std::collections::HashSet;

use crate::map::{Map, Room, RoomId};

/// Why a map is not playable. Exactly one reason is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Start count is not exactly one, or there is no exit at all.
    #[error("map has too few or too many entrances or exits ({starts} starting, {ends} ending)")]
    Structural { starts: usize, ends: usize },
    /// Structurally sound, but no exit can be reached from the start.
    #[error("no path from the starting room to any exit")]
    Unreachable,
}

/// Validate a map, returning the unique starting room on success.
pub fn validate_map(map: &Map) -> Result<&Room, ValidationError> {
    let mut starts = 0;
    let mut ends = 0;
    let mut start = None;
    for room in map.rooms() {
        if room.is_start {
            starts += 1;
            start = Some(room);
        }
        if room.is_end {
            ends += 1;
        }
    }

    let start = match start {
        Some(room) if starts == 1 && ends >= 1 => room,
        _ => return Err(ValidationError::Structural { starts, ends }),
    };

    if !exit_reachable(map, start) {
        return Err(ValidationError::Unreachable);
    }
    log::debug!(
        "map valid: {} rooms, start #{}, {} exit(s)",
        map.len(),
        start.id,
        ends
    );
    Ok(start)
}

/// True when some exit can be reached from `start` by following doors.
pub fn exit_reachable(map: &Map, start: &Room) -> bool {
    find_exit_route(map, start).is_some()
}

/// Depth-first search for an exit, returning the room ids along the first
/// path found (start first, exit last).
///
/// Rooms are marked visited as soon as they are entered. Doors whose target
/// is already visited, or resolves to no room, are skipped without
/// descending. The first exit reached ends the whole search.
pub fn find_exit_route(map: &Map, start: &Room) -> Option<Vec<RoomId>> {
    let mut visited: HashSet<RoomId> = HashSet::new();
    visited.insert(start.id);
    if start.is_end {
        return Some(vec![start.id]);
    }

    // Explicit stack of (room, index of the next door to try).
    let mut stack: Vec<(&Room, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let room = frame.0;
        let Some(door) = room.doors.get(frame.1) else {
            // All doors exhausted: this room fails, resume the caller.
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if visited.contains(&door.target) {
            continue;
        }
        let Some(next) = door.leads_to(map) else {
            log::debug!(
                "room #{}: {} door leads to missing room #{}",
                room.id,
                door.color,
                door.target
            );
            continue;
        };

        visited.insert(next.id);
        if next.is_end {
            let mut route: Vec<RoomId> = stack.iter().map(|(r, _)| r.id).collect();
            route.push(next.id);
            log::debug!("exit #{} reached after visiting {} rooms", next.id, visited.len());
            return Some(route);
        }
        stack.push((next, 0));
    }

    log::debug!("no exit reachable; visited {} rooms", visited.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: RoomId) -> Room {
        Room::new(id, format!("Room {id}"))
    }

    #[test]
    fn test_single_door_to_exit() {
        let map = Map::new(vec![
            room(1).starting().with_door("brown", 2),
            room(2).ending(),
        ]);
        let start = validate_map(&map).unwrap();
        assert_eq!(start.id, 1);
    }

    #[test]
    fn test_no_start() {
        let map = Map::new(vec![room(1).with_door("brown", 2), room(2).ending()]);
        assert_eq!(
            validate_map(&map),
            Err(ValidationError::Structural { starts: 0, ends: 1 })
        );
    }

    #[test]
    fn test_two_starts() {
        let map = Map::new(vec![
            room(1).starting().with_door("brown", 2),
            room(2).starting().ending(),
        ]);
        assert_eq!(
            validate_map(&map),
            Err(ValidationError::Structural { starts: 2, ends: 1 })
        );
    }

    #[test]
    fn test_no_exit() {
        let map = Map::new(vec![room(1).starting().with_door("brown", 2), room(2)]);
        assert_eq!(
            validate_map(&map),
            Err(ValidationError::Structural { starts: 1, ends: 0 })
        );
    }

    #[test]
    fn test_empty_map_is_structural_error() {
        assert_eq!(
            validate_map(&Map::default()),
            Err(ValidationError::Structural { starts: 0, ends: 0 })
        );
    }

    #[test]
    fn test_start_is_exit() {
        let map = Map::new(vec![room(1).starting().ending()]);
        let start = validate_map(&map).unwrap();
        assert_eq!(find_exit_route(&map, start), Some(vec![1]));
    }

    #[test]
    fn test_cycle_without_exit_terminates() {
        // 1 <-> 2 <-> 3 -> 1, exit 4 has no inbound doors
        let map = Map::new(vec![
            room(1).starting().with_door("a", 2).with_door("b", 3),
            room(2).with_door("c", 1).with_door("d", 3),
            room(3).with_door("e", 1).with_door("f", 2),
            room(4).ending(),
        ]);
        assert_eq!(validate_map(&map), Err(ValidationError::Unreachable));
    }

    #[test]
    fn test_self_loop() {
        let map = Map::new(vec![
            room(1).starting().with_door("mirror", 1).with_door("out", 2),
            room(2).ending(),
        ]);
        assert_eq!(find_exit_route(&map, map.find_room(1).unwrap()), Some(vec![1, 2]));
    }

    #[test]
    fn test_route_follows_door_order() {
        // Both 2 and 3 lead to exit 4; door order makes 2 win.
        let map = Map::new(vec![
            room(1).starting().with_door("left", 2).with_door("right", 3),
            room(2).with_door("x", 4),
            room(3).with_door("y", 4),
            room(4).ending(),
        ]);
        let start = map.find_room(1).unwrap();
        assert_eq!(find_exit_route(&map, start), Some(vec![1, 2, 4]));
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        let map = Map::new(vec![
            room(1).starting().with_door("a", 2).with_door("b", 5),
            room(2).with_door("c", 3),
            room(3).with_door("d", 2),
            room(5).with_door("e", 6),
            room(6).ending(),
        ]);
        let start = map.find_room(1).unwrap();
        assert_eq!(find_exit_route(&map, start), Some(vec![1, 5, 6]));
    }

    #[test]
    fn test_visited_set_shared_across_branches() {
        // Room 3 is explored via 2 first; the second route to it from 1 is
        // pruned rather than searched again, and the answer is unchanged.
        let map = Map::new(vec![
            room(1).starting().with_door("a", 2).with_door("b", 3),
            room(2).with_door("c", 3),
            room(3).with_door("d", 4),
            room(4).ending(),
        ]);
        let start = map.find_room(1).unwrap();
        assert_eq!(find_exit_route(&map, start), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_dangling_door_is_skipped() {
        let map = Map::new(vec![
            room(1).starting().with_door("void", 99).with_door("real", 2),
            room(2).ending(),
        ]);
        assert!(validate_map(&map).is_ok());
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 5_000;
        let mut rooms: Vec<Room> = (0..n).map(|i| room(i).with_door("next", i + 1)).collect();
        rooms[0].is_start = true;
        rooms.push(room(n).ending());
        let map = Map::new(rooms);
        let start = map.find_room(0).unwrap();
        let route = find_exit_route(&map, start).unwrap();
        assert_eq!(route.len(), n as usize + 1);
    }

    #[test]
    fn test_error_messages() {
        let e = ValidationError::Structural { starts: 2, ends: 0 };
        assert!(e.to_string().contains("too few or too many entrances or exits"));
        assert_eq!(
            ValidationError::Unreachable.to_string(),
            "no path from the starting room to any exit"
        );
    }
}
