//! Roadtrip Engine
//!
//! Platform-agnostic core logic for driving a small fleet over waypoint
//! routes. Vehicles burn fuel per kilometre and refuel once per segment
//! when they run short. This crate never prints; it returns structured
//! reports and emits `log` records.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod numbers;
pub mod route;
pub mod tour;
pub mod trip;
pub mod vehicle;

// Re-export commonly used types
pub use catalog::{demo_fleet, demo_routes};
pub use error::{TripError, UnknownVehicleKind};
pub use route::{Route, RoutePoint, Segment, segment_distance_km};
pub use tour::{RouteRun, Tour, TourReport};
pub use trip::{RouteOutcome, RouteReport, TripEvent};
pub use vehicle::{FuelSpec, FuelTank, Vehicle, VehicleKind, VehicleStatus};
