//! World object identities

pub mod object_id;

pub use object_id::{ObjectKind, WorldObjectId};
