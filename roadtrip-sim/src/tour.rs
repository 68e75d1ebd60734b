//! Runs a fleet over a set of routes, in order.
use serde::{Deserialize, Serialize};

use crate::catalog::{demo_fleet, demo_routes};
use crate::constants::LOG_TARGET;
use crate::error::UnknownVehicleKind;
use crate::route::Route;
use crate::trip::{RouteOutcome, RouteReport};
use crate::vehicle::{Vehicle, VehicleKind, VehicleStatus};

/// Routes and vehicles owned for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct Tour {
    routes: Vec<Route>,
    selected: Vec<usize>,
    fleet: Vec<Vehicle>,
}

impl Tour {
    #[must_use]
    pub fn new(routes: Vec<Route>, fleet: Vec<Vehicle>) -> Self {
        let selected = (0..routes.len()).collect();
        Self {
            routes,
            selected,
            fleet,
        }
    }

    /// Built-in routes with one empty-tanked vehicle of every kind.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_routes(), demo_fleet())
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    /// Restrict the run to routes matching `tokens` by index or by name
    /// (case-insensitive). An empty list keeps every route.
    ///
    /// Returns the tokens that matched nothing.
    pub fn select_routes(&mut self, tokens: &[String]) -> Vec<String> {
        if tokens.is_empty() {
            self.selected = (0..self.routes.len()).collect();
            return Vec::new();
        }

        let is_match = |index: usize, route: &Route, token: &str| {
            token.parse::<usize>().is_ok_and(|wanted| wanted == index)
                || route.name().eq_ignore_ascii_case(token)
        };

        self.selected = self
            .routes
            .iter()
            .enumerate()
            .filter(|(index, route)| tokens.iter().any(|t| is_match(*index, *route, t.trim())))
            .map(|(index, _)| index)
            .collect();

        tokens
            .iter()
            .filter(|token| {
                !self
                    .routes
                    .iter()
                    .enumerate()
                    .any(|(index, route)| is_match(index, route, token.trim()))
            })
            .cloned()
            .collect()
    }

    /// Keep only vehicles whose kind matches one of `tokens`
    /// (case-insensitive). An empty list keeps the whole fleet; a list in
    /// which nothing matches leaves the fleet empty.
    ///
    /// Returns the tokens that name no vehicle kind.
    pub fn select_vehicles(&mut self, tokens: &[String]) -> Vec<UnknownVehicleKind> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut kinds = Vec::new();
        let mut unknown = Vec::new();
        for token in tokens {
            match token.parse::<VehicleKind>() {
                Ok(kind) => kinds.push(kind),
                Err(err) => unknown.push(err),
            }
        }
        self.fleet.retain(|vehicle| kinds.contains(&vehicle.kind()));
        unknown
    }

    /// Run every selected route with every vehicle. Vehicles keep their
    /// mileage and fuel from one route to the next.
    pub fn run(&mut self) -> TourReport {
        let mut runs = Vec::with_capacity(self.selected.len());
        for (index, route) in self.routes.iter().enumerate() {
            if !self.selected.contains(&index) {
                continue;
            }
            log::info!(
                target: LOG_TARGET,
                "running route {index} ('{}') with {} vehicle(s)",
                route.name(),
                self.fleet.len()
            );
            let reports = self
                .fleet
                .iter_mut()
                .map(|vehicle| route.run(vehicle))
                .collect();
            runs.push(RouteRun {
                index,
                route: route.name().to_string(),
                reports,
            });
        }

        TourReport {
            runs,
            fleet: self.fleet.iter().map(Vehicle::status).collect(),
        }
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::demo()
    }
}

/// Every vehicle's report for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRun {
    pub index: usize,
    pub route: String,
    pub reports: Vec<RouteReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TourReport {
    pub runs: Vec<RouteRun>,
    /// Vehicle state after the last route.
    pub fleet: Vec<VehicleStatus>,
}

impl TourReport {
    pub fn reports(&self) -> impl Iterator<Item = &RouteReport> {
        self.runs.iter().flat_map(|run| run.reports.iter())
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.reports().filter(|r| r.outcome.is_completed()).count()
    }

    #[must_use]
    pub fn aborted(&self) -> usize {
        self.reports()
            .filter(|r| matches!(r.outcome, RouteOutcome::Aborted { .. }))
            .count()
    }

    #[must_use]
    pub fn incomplete(&self) -> usize {
        self.reports()
            .filter(|r| matches!(r.outcome, RouteOutcome::Incomplete { .. }))
            .count()
    }

    #[must_use]
    pub fn refuels(&self) -> usize {
        self.reports().map(|r| r.refuels).sum()
    }
}
