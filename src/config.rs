use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 3;

/// Fleet each side places, in setup order.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Warship", 5),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 3 + 2;

/// Random draws tried per ship before it is skipped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Fresh boards tried when a fully populated random fleet is required.
pub const MAX_FLEET_RESEEDS: usize = 16;

/// Upper bound on shots in a computer duel; every cell of both boards once.
pub const MAX_DUEL_SHOTS: usize = 2 * BOARD_SIZE * BOARD_SIZE;

/// Resolve the fleet entry for a ship length.
pub fn ship_type_for_length(length: usize) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.length() == length)
}

/// Display name for a ship length, e.g. `5` -> `"Warship"`.
pub fn ship_name_for_length(length: usize) -> Option<&'static str> {
    ship_type_for_length(length).map(|def| def.name())
}
