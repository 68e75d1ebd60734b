//! Waypoint routes and the segment-by-segment drive policy
use serde::{Deserialize, Serialize};

use crate::constants::{DRIVE_ATTEMPTS_PER_SEGMENT, LOG_TARGET, MIN_ROUTE_POINTS};
use crate::error::TripError;
use crate::trip::{RouteOutcome, RouteReport, TripEvent};
use crate::vehicle::Vehicle;

/// Named waypoint on a flat kilometre grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutePoint {
    x_km: i32,
    y_km: i32,
    name: String,
}

impl RoutePoint {
    #[must_use]
    pub fn new(x_km: i32, y_km: i32, name: impl Into<String>) -> Self {
        Self {
            x_km,
            y_km,
            name: name.into(),
        }
    }

    #[must_use]
    pub const fn x_km(&self) -> i32 {
        self.x_km
    }

    #[must_use]
    pub const fn y_km(&self) -> i32 {
        self.y_km
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Straight-line distance between two points, truncated to whole kilometres.
#[must_use]
pub fn segment_distance_km(from: &RoutePoint, to: &RoutePoint) -> u64 {
    let dx = (i64::from(to.x_km) - i64::from(from.x_km)).unsigned_abs();
    let dy = (i64::from(to.y_km) - i64::from(from.y_km)).unsigned_abs();
    let squared = u128::from(dx).pow(2) + u128::from(dy).pow(2);
    u64::try_from(squared.isqrt()).unwrap_or(u64::MAX)
}

/// Leg between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Zero-based position of the leg within its route.
    pub index: usize,
    pub from: &'a RoutePoint,
    pub to: &'a RoutePoint,
    pub distance_km: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Route {
    name: String,
    points: Vec<RoutePoint>,
}

impl Route {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Builder form of [`Route::add_point`].
    #[must_use]
    pub fn with_point(mut self, point: RoutePoint) -> Self {
        self.add_point(point);
        self
    }

    /// Append a waypoint; insertion order is traversal order.
    pub fn add_point(&mut self, point: RoutePoint) {
        self.points.push(point);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_runnable(&self) -> bool {
        self.points.len() >= MIN_ROUTE_POINTS
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Segment {
                index,
                from: &pair[0],
                to: &pair[1],
                distance_km: segment_distance_km(&pair[0], &pair[1]),
            })
    }

    #[must_use]
    pub fn total_distance_km(&self) -> u64 {
        self.segments()
            .map(|segment| segment.distance_km)
            .fold(0, u64::saturating_add)
    }

    /// Drive `vehicle` through every segment in order.
    ///
    /// A failed drive triggers one refuel and one retry of the same
    /// segment; a second failure aborts the remaining route.
    pub fn run(&self, vehicle: &mut Vehicle) -> RouteReport {
        let mut run = RunLedger::new(self, vehicle);
        if !self.is_runnable() {
            log::warn!(
                target: LOG_TARGET,
                "route '{}' has {} point(s); skipping {}",
                self.name,
                self.points.len(),
                run.vehicle.name()
            );
            run.events.push(TripEvent::Incomplete {
                points: self.points.len(),
            });
            return run.finish(RouteOutcome::Incomplete {
                points: self.points.len(),
            });
        }

        run.push_status();
        for segment in self.segments() {
            if let Err(err) = run.drive_segment(&segment) {
                log::warn!(target: LOG_TARGET, "{err}");
                run.events.push(TripEvent::Aborted {
                    segment: segment.index,
                });
                return run.finish(RouteOutcome::Aborted {
                    segment: segment.index,
                    from: segment.from.name().to_string(),
                    to: segment.to.name().to_string(),
                    distance_km: segment.distance_km,
                });
            }
            run.push_status();
        }

        let segments = self.points.len() - 1;
        let distance_km = run.driven_km;
        run.finish(RouteOutcome::Completed {
            segments,
            distance_km,
        })
    }
}

/// Mutable bookkeeping for a single [`Route::run`] call.
struct RunLedger<'r, 'v> {
    route: &'r Route,
    vehicle: &'v mut Vehicle,
    events: Vec<TripEvent>,
    refuels: usize,
    driven_km: u64,
}

impl<'r, 'v> RunLedger<'r, 'v> {
    fn new(route: &'r Route, vehicle: &'v mut Vehicle) -> Self {
        Self {
            route,
            vehicle,
            events: Vec::new(),
            refuels: 0,
            driven_km: 0,
        }
    }

    fn push_status(&mut self) {
        self.events.push(TripEvent::Status(self.vehicle.status()));
    }

    fn drive_segment(&mut self, segment: &Segment<'_>) -> Result<(), TripError> {
        for attempt in 0..DRIVE_ATTEMPTS_PER_SEGMENT {
            match self.vehicle.drive(segment.distance_km) {
                Ok(()) => {
                    self.driven_km = self.driven_km.saturating_add(segment.distance_km);
                    if self.vehicle.kind().uses_fuel() {
                        self.events.push(TripEvent::Drove {
                            vehicle: self.vehicle.name().to_string(),
                            distance_km: segment.distance_km,
                        });
                    }
                    return Ok(());
                }
                Err(TripError::InsufficientFuel {
                    vehicle,
                    distance_km,
                    required_litres,
                    available_litres,
                }) => {
                    self.events.push(TripEvent::FuelShortage {
                        vehicle,
                        distance_km,
                        required_litres,
                        available_litres,
                    });
                    if attempt + 1 < DRIVE_ATTEMPTS_PER_SEGMENT {
                        self.vehicle.refuel();
                        self.refuels += 1;
                        self.events.push(TripEvent::Refueled {
                            vehicle: self.vehicle.name().to_string(),
                        });
                    }
                }
                Err(other) => return Err(other),
            }
        }
        Err(TripError::RouteAborted {
            segment: segment.index,
            from: segment.from.name().to_string(),
            to: segment.to.name().to_string(),
            distance_km: segment.distance_km,
        })
    }

    fn finish(self, outcome: RouteOutcome) -> RouteReport {
        RouteReport {
            route: self.route.name().to_string(),
            vehicle: self.vehicle.name().to_string(),
            events: self.events,
            outcome,
            refuels: self.refuels,
            driven_km: self.driven_km,
        }
    }
}
