//! Handles for the world objects stored in a spatial hash

use serde::{Deserialize, Serialize};

/// Kind of world object behind a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Player,
    Npc,
    Prop,
    Trigger,
}

/// Copyable identity for anything the world tracks spatially
///
/// There is a single player; every other kind carries its own index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldObjectId {
    Player,
    Npc(u32),
    Prop(u32),
    Trigger(u32),
}

impl WorldObjectId {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Player => ObjectKind::Player,
            Self::Npc(_) => ObjectKind::Npc,
            Self::Prop(_) => ObjectKind::Prop,
            Self::Trigger(_) => ObjectKind::Trigger,
        }
    }

    /// Moving objects are re-submitted every frame; props and triggers rarely move
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Player | Self::Npc(_))
    }

    pub fn is_trigger(&self) -> bool {
        matches!(self, Self::Trigger(_))
    }

    /// Index within the object's kind, `None` for the player
    pub fn index(&self) -> Option<u32> {
        match self {
            Self::Player => None,
            Self::Npc(i) | Self::Prop(i) | Self::Trigger(i) => Some(*i),
        }
    }
}
