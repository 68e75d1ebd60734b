use thiserror::Error;

/// Failures raised while driving a vehicle or running a route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripError {
    #[error(
        "Not enough fuel to drive {distance_km} km ({vehicle} needs {required_litres:.2} l, has {available_litres:.2} l)"
    )]
    InsufficientFuel {
        vehicle: String,
        distance_km: u64,
        required_litres: f64,
        available_litres: f64,
    },
    #[error("Path is incomplete: {points} point(s), at least 2 required")]
    IncompletePath { points: usize },
    #[error("Unable to drive the route: segment {segment} ({from} -> {to}, {distance_km} km)")]
    RouteAborted {
        segment: usize,
        from: String,
        to: String,
        distance_km: u64,
    },
}

/// Raised when a vehicle name does not match any known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle kind '{0}' (expected sedan, suv, bus or bicycle)")]
pub struct UnknownVehicleKind(pub String);
