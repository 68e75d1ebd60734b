//! Vehicle fleet: fuel-consuming cars and the fuel-free bicycle
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BUS_CAPACITY_LITRES, BUS_CONSUMPTION_PER_100KM, LOG_TARGET, SEDAN_CAPACITY_LITRES,
    SEDAN_CONSUMPTION_PER_100KM, SUV_CAPACITY_LITRES, SUV_CONSUMPTION_PER_100KM,
};
use crate::error::{TripError, UnknownVehicleKind};
use crate::numbers::{format_litres, u64_to_f64};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Sedan,
    Suv,
    Bus,
    Bicycle,
}

impl VehicleKind {
    /// Every kind, in fleet order.
    pub const ALL: [Self; 4] = [Self::Sedan, Self::Suv, Self::Bus, Self::Bicycle];

    /// Display name used in status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "Suv",
            Self::Bus => "Bus",
            Self::Bicycle => "Bicycle",
        }
    }

    /// Lowercase key accepted on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Bus => "bus",
            Self::Bicycle => "bicycle",
        }
    }

    /// Fuel parameters, or `None` for kinds that run without fuel.
    #[must_use]
    pub const fn fuel_spec(self) -> Option<FuelSpec> {
        match self {
            Self::Sedan => Some(FuelSpec::new(
                SEDAN_CONSUMPTION_PER_100KM,
                SEDAN_CAPACITY_LITRES,
            )),
            Self::Suv => Some(FuelSpec::new(
                SUV_CONSUMPTION_PER_100KM,
                SUV_CAPACITY_LITRES,
            )),
            Self::Bus => Some(FuelSpec::new(
                BUS_CONSUMPTION_PER_100KM,
                BUS_CAPACITY_LITRES,
            )),
            Self::Bicycle => None,
        }
    }

    #[must_use]
    pub const fn uses_fuel(self) -> bool {
        self.fuel_spec().is_some()
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleKind {
    type Err = UnknownVehicleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVehicleKind(wanted.to_string()))
    }
}

/// Consumption rate and tank size shared by every fuel-consuming kind.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FuelSpec {
    /// Litres burned per 100 km.
    pub consumption_per_100km: f64,
    pub capacity_litres: f64,
}

impl FuelSpec {
    #[must_use]
    pub const fn new(consumption_per_100km: f64, capacity_litres: f64) -> Self {
        Self {
            consumption_per_100km,
            capacity_litres,
        }
    }

    /// Litres needed to cover `distance_km`.
    #[must_use]
    pub fn required_for(self, distance_km: u64) -> f64 {
        u64_to_f64(distance_km) / 100.0 * self.consumption_per_100km
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FuelTank {
    spec: FuelSpec,
    level: f64,
}

impl FuelTank {
    #[must_use]
    pub const fn empty(spec: FuelSpec) -> Self {
        Self { spec, level: 0.0 }
    }

    #[must_use]
    pub const fn full(spec: FuelSpec) -> Self {
        Self {
            spec,
            level: spec.capacity_litres,
        }
    }

    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    #[must_use]
    pub const fn spec(&self) -> FuelSpec {
        self.spec
    }

    #[must_use]
    pub fn required_for(&self, distance_km: u64) -> f64 {
        self.spec.required_for(distance_km)
    }

    /// Burn the fuel for `distance_km`, returning the litres used.
    ///
    /// # Errors
    ///
    /// Returns the required litres, leaving the tank untouched, when they
    /// exceed the current level.
    pub fn burn(&mut self, distance_km: u64) -> Result<f64, f64> {
        let required = self.required_for(distance_km);
        if required > self.level {
            return Err(required);
        }
        self.level -= required;
        Ok(required)
    }

    pub const fn fill(&mut self) {
        self.level = self.spec.capacity_litres;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    kind: VehicleKind,
    name: String,
    mileage_km: u64,
    /// Absent for kinds that run without fuel.
    tank: Option<FuelTank>,
}

impl Vehicle {
    /// Fresh vehicle with zero mileage and an empty tank.
    #[must_use]
    pub fn new(kind: VehicleKind) -> Self {
        Self {
            kind,
            name: kind.label().to_string(),
            mileage_km: 0,
            tank: kind.fuel_spec().map(FuelTank::empty),
        }
    }

    /// Fresh vehicle with zero mileage and a full tank.
    #[must_use]
    pub fn fueled(kind: VehicleKind) -> Self {
        Self {
            tank: kind.fuel_spec().map(FuelTank::full),
            ..Self::new(kind)
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn kind(&self) -> VehicleKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn mileage_km(&self) -> u64 {
        self.mileage_km
    }

    #[must_use]
    pub fn fuel_level(&self) -> Option<f64> {
        self.tank.as_ref().map(FuelTank::level)
    }

    #[must_use]
    pub fn capacity(&self) -> Option<f64> {
        self.tank.map(|tank| tank.spec().capacity_litres)
    }

    #[must_use]
    pub fn consumption(&self) -> Option<f64> {
        self.tank.map(|tank| tank.spec().consumption_per_100km)
    }

    /// Drive `distance_km`, burning fuel where the kind needs it.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::InsufficientFuel`] when the tank holds less than
    /// the required fuel. Mileage and fuel level are unchanged in that case.
    pub fn drive(&mut self, distance_km: u64) -> Result<(), TripError> {
        if let Some(tank) = self.tank.as_mut() {
            let available = tank.level();
            if let Err(required) = tank.burn(distance_km) {
                log::info!(
                    target: LOG_TARGET,
                    "{} short of fuel for {distance_km} km: need {required:.2} l, have {available:.2} l",
                    self.name
                );
                return Err(TripError::InsufficientFuel {
                    vehicle: self.name.clone(),
                    distance_km,
                    required_litres: required,
                    available_litres: available,
                });
            }
        }
        self.mileage_km = self.mileage_km.saturating_add(distance_km);
        log::debug!(
            target: LOG_TARGET,
            "{} drove {distance_km} km (mileage {} km)",
            self.name,
            self.mileage_km
        );
        Ok(())
    }

    /// Fill the tank to capacity. Does nothing for kinds without a tank.
    pub fn refuel(&mut self) {
        if let Some(tank) = self.tank.as_mut() {
            tank.fill();
            log::debug!(target: LOG_TARGET, "{} refuelled to {} l", self.name, tank.level());
        }
    }

    #[must_use]
    pub fn status(&self) -> VehicleStatus {
        VehicleStatus {
            name: self.name.clone(),
            kind: self.kind,
            mileage_km: self.mileage_km,
            fuel_level: self.fuel_level(),
        }
    }

    /// Write the human-readable status line.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn print_status<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.status())
    }
}

/// Point-in-time snapshot of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleStatus {
    pub name: String,
    pub kind: VehicleKind,
    pub mileage_km: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<f64>,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} status: Mileage(km)={}", self.name, self.mileage_km)?;
        if let Some(level) = self.fuel_level {
            write!(f, ", Fuel level(l)={}", format_litres(level))?;
        }
        Ok(())
    }
}
