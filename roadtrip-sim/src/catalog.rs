//! Built-in routes and fleet used by the driver program.
use crate::route::{Route, RoutePoint};
use crate::vehicle::{Vehicle, VehicleKind};

/// The two fixed demo routes, in run order.
#[must_use]
pub fn demo_routes() -> Vec<Route> {
    let grid = Route::new("Route 0")
        .with_point(RoutePoint::new(0, 0, "Point1"))
        .with_point(RoutePoint::new(100, 0, "Point2"))
        .with_point(RoutePoint::new(200, 100, "Point3"))
        .with_point(RoutePoint::new(300, 300, "Point4"))
        .with_point(RoutePoint::new(100, 400, "Point5"))
        .with_point(RoutePoint::new(0, 450, "Point6"));

    let volga = Route::new("Route 1")
        .with_point(RoutePoint::new(0, 0, "Moscow"))
        .with_point(RoutePoint::new(0, 540, "Voronezh"))
        .with_point(RoutePoint::new(420, 540, "Saratov"));

    vec![grid, volga]
}

/// One vehicle of every kind, tanks empty.
#[must_use]
pub fn demo_fleet() -> Vec<Vehicle> {
    VehicleKind::ALL.into_iter().map(Vehicle::new).collect()
}
