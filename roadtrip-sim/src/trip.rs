//! Ordered record of what happened while a vehicle ran a route.
use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::TripError;
use crate::vehicle::VehicleStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TripEvent {
    Status(VehicleStatus),
    Drove {
        vehicle: String,
        distance_km: u64,
    },
    FuelShortage {
        vehicle: String,
        distance_km: u64,
        required_litres: f64,
        available_litres: f64,
    },
    Refueled {
        vehicle: String,
    },
    Incomplete {
        points: usize,
    },
    Aborted {
        segment: usize,
    },
}

impl TripEvent {
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}

impl fmt::Display for TripEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => fmt::Display::fmt(status, f),
            Self::Drove {
                vehicle,
                distance_km,
            } => write!(f, "{vehicle}: Drive {distance_km} km"),
            Self::FuelShortage { distance_km, .. } => {
                write!(f, "Not enough fuel to drive {distance_km} km")
            }
            Self::Refueled { vehicle } => write!(f, "Refuel {vehicle}"),
            Self::Incomplete { .. } => f.write_str("Path is incomplete"),
            Self::Aborted { .. } => f.write_str("Unable to drive the route"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RouteOutcome {
    Completed {
        segments: usize,
        distance_km: u64,
    },
    Incomplete {
        points: usize,
    },
    Aborted {
        segment: usize,
        from: String,
        to: String,
        distance_km: u64,
    },
}

impl RouteOutcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Result of running one vehicle over one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub route: String,
    pub vehicle: String,
    pub events: Vec<TripEvent>,
    pub outcome: RouteOutcome,
    /// Refuels triggered by shortages during this run.
    pub refuels: usize,
    /// Distance actually covered before completion or abort.
    pub driven_km: u64,
}

impl RouteReport {
    #[must_use]
    pub fn status_lines(&self) -> usize {
        self.events.iter().filter(|event| event.is_status()).count()
    }

    /// The failure behind an incomplete or aborted run, if any.
    #[must_use]
    pub fn error(&self) -> Option<TripError> {
        match &self.outcome {
            RouteOutcome::Completed { .. } => None,
            RouteOutcome::Incomplete { points } => {
                Some(TripError::IncompletePath { points: *points })
            }
            RouteOutcome::Aborted {
                segment,
                from,
                to,
                distance_km,
            } => Some(TripError::RouteAborted {
                segment: *segment,
                from: from.clone(),
                to: to.clone(),
                distance_km: *distance_km,
            }),
        }
    }

    /// Write every event as one line, in order.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_lines<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for event in &self.events {
            writeln!(out, "{event}")?;
        }
        Ok(())
    }
}
