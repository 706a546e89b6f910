//! Street lights and vehicle light flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Identifier of a street light, stable for the lifetime of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LightId(pub u32);

/// A street light as reported by the light manager.
///
/// This is a snapshot: changing it has no effect on the world, use the
/// manager's batched `turn_on` / `turn_off` instead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub id: LightId,
    pub location: crate::Location,
    pub is_on: bool,
}

bitflags! {
    /// Lamps that are lit on a vehicle.
    ///
    /// Combine with `|` / [`union`](Self::union), switch individual lamps
    /// with [`insert`](Self::insert) and [`remove`](Self::remove).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct VehicleLightState: u32 {
        const POSITION      = 1 << 0;
        const LOW_BEAM      = 1 << 1;
        const HIGH_BEAM     = 1 << 2;
        const BRAKE         = 1 << 3;
        const RIGHT_BLINKER = 1 << 4;
        const LEFT_BLINKER  = 1 << 5;
        const REVERSE       = 1 << 6;
        const FOG           = 1 << 7;
        const INTERIOR      = 1 << 8;
        const SPECIAL1      = 1 << 9;
        const SPECIAL2      = 1 << 10;
    }
}

impl VehicleLightState {
    /// The lamps a vehicle needs to be visible in the dark.
    pub const NIGHT_DRIVING: Self = Self::POSITION.union(Self::LOW_BEAM);
}
