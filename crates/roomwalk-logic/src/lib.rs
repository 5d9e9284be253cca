//! Pure game logic for Roomwalk.
//!
//! A map is a set of rooms joined by one-way colored doors. One room is the
//! entrance, one or more are exits. This crate loads maps, decides whether
//! they are playable, and tracks a player walking through them. It performs
//! no console I/O; the `roomwalk` binary drives it.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`map`] | Rooms, doors, and lookup by room id |
//! | [`validation`] | Entrance/exit counts and start-to-exit reachability |
//! | [`lint`] | Non-fatal warnings: dangling doors, unreachable rooms |
//! | [`loader`] | JSON map files in and out |
//! | [`fixtures`] | Hand-built sample maps |
//! | [`narration`] | Door listing text and input parsing |
//! | [`session`] | The player's current room and door moves |

pub mod fixtures;
pub mod lint;
pub mod loader;
pub mod map;
pub mod narration;
pub mod session;
pub mod validation;

pub use loader::{load_map, parse_map, save_map, LoadError};
pub use map::{Door, Map, Room, RoomId};
pub use session::{Session, SessionError};
pub use validation::{validate_map, ValidationError};
