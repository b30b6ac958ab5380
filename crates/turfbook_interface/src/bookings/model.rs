use std::collections::BTreeMap;

/// Occupied slots grouped by ground and by UTC calendar day
/// (`groundId -> "YYYY-MM-DD" -> slot identifiers in store order`).
///
/// Derived from the bookings collection on every read, never persisted.
pub type BookedSlots = BTreeMap<String, BTreeMap<String, Vec<String>>>;
