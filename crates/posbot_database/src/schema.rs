//! Diesel schema for the static-data lookup tables.

diesel::table! {
    /// Denormalized map data from the static data export; one row per
    /// celestial item, of which POSbot only reads moons.
    map_locations (item_id) {
        /// Celestial item ID
        item_id -> Int8,
        /// Display name, e.g. "1-SMEB VI - Moon 2"
        item_name -> Varchar,
    }
}
