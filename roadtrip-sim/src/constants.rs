//! Fixed tuning values for the vehicle fleet and route execution.
//!
//! Variant parameters live here so that fuel behavior can only change
//! through reviewed code, never through runtime input.

// Logging -------------------------------------------------------------------
pub(crate) const LOG_TARGET: &str = "roadtrip::trip";

// Routes --------------------------------------------------------------------
/// A route needs at least this many points to contain a segment.
pub const MIN_ROUTE_POINTS: usize = 2;
/// One failed drive per segment may be followed by a single refuel and retry.
pub(crate) const DRIVE_ATTEMPTS_PER_SEGMENT: usize = 2;

// Sedan ---------------------------------------------------------------------
pub const SEDAN_CONSUMPTION_PER_100KM: f64 = 7.0;
pub const SEDAN_CAPACITY_LITRES: f64 = 50.0;

// Suv -----------------------------------------------------------------------
pub const SUV_CONSUMPTION_PER_100KM: f64 = 11.0;
pub const SUV_CAPACITY_LITRES: f64 = 80.0;

// Bus -----------------------------------------------------------------------
pub const BUS_CONSUMPTION_PER_100KM: f64 = 25.0;
pub const BUS_CAPACITY_LITRES: f64 = 120.0;
