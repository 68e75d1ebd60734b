use std::io::Write;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use roadtrip_sim::numbers::format_litres;
use roadtrip_sim::{Route, RouteOutcome, TourReport, TripEvent, Vehicle};

/// Plain event trace, one block per vehicle and route.
pub fn generate_console_report(out: &mut dyn Write, report: &TourReport) -> Result<()> {
    for run in &report.runs {
        writeln!(out, "{}", format!("Run route {}", run.index).bright_cyan().bold())?;
        for route_report in &run.reports {
            for event in &route_report.events {
                writeln!(out, "{}", paint_event(event))?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn paint_event(event: &TripEvent) -> ColoredString {
    let line = event.to_string();
    match event {
        TripEvent::Aborted { .. } | TripEvent::Incomplete { .. } => line.red(),
        TripEvent::FuelShortage { .. } => line.yellow(),
        TripEvent::Refueled { .. } => line.green(),
        TripEvent::Status(_) | TripEvent::Drove { .. } => line.normal(),
    }
}

pub fn generate_summary(out: &mut dyn Write, report: &TourReport) -> Result<()> {
    writeln!(out, "{}", "📊 Tour Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===============".cyan())?;
    let total = report.reports().count();
    writeln!(out, "Route runs: {total}")?;
    writeln!(out, "Completed: {}", report.completed().to_string().green())?;
    writeln!(out, "Aborted: {}", report.aborted().to_string().red())?;
    writeln!(out, "Incomplete: {}", report.incomplete().to_string().yellow())?;
    writeln!(out, "Refuels: {}", report.refuels())?;
    writeln!(out)?;
    for status in &report.fleet {
        writeln!(out, "   {status}")?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &TourReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, report: &TourReport) -> Result<()> {
    writeln!(out, "# Roadtrip Results\n")?;

    for run in &report.runs {
        writeln!(out, "## Run route {} ({})\n", run.index, run.route)?;
        writeln!(out, "| Vehicle | Result | Driven (km) | Refuels |")?;
        writeln!(out, "|---|---|---|---|")?;
        for route_report in &run.reports {
            let result = match &route_report.outcome {
                RouteOutcome::Completed { segments, .. } => format!("✅ {segments} segment(s)"),
                RouteOutcome::Incomplete { points } => format!("⚠️ incomplete ({points} point(s))"),
                RouteOutcome::Aborted { from, to, .. } => format!("❌ aborted {from} → {to}"),
            };
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                route_report.vehicle, result, route_report.driven_km, route_report.refuels
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## Fleet\n")?;
    for status in &report.fleet {
        let fuel = status
            .fuel_level
            .map_or_else(|| "n/a".to_string(), |level| format!("{} l", format_litres(level)));
        writeln!(
            out,
            "- **{}**: {} km, fuel {}",
            status.name, status.mileage_km, fuel
        )?;
    }
    Ok(())
}

pub fn list_routes(out: &mut dyn Write, routes: &[Route]) -> Result<()> {
    writeln!(out, "Available routes:")?;
    for (index, route) in routes.iter().enumerate() {
        let waypoints: Vec<String> = route
            .points()
            .iter()
            .map(|p| format!("{} ({}, {})", p.name(), p.x_km(), p.y_km()))
            .collect();
        writeln!(
            out,
            "  {index:2} {:10} - {} km: {}",
            route.name(),
            route.total_distance_km(),
            waypoints.join(" → ")
        )?;
    }
    Ok(())
}

pub fn list_fleet(out: &mut dyn Write, fleet: &[Vehicle]) -> Result<()> {
    writeln!(out, "Available vehicles:")?;
    for vehicle in fleet {
        let tank = match (vehicle.consumption(), vehicle.capacity()) {
            (Some(per_100km), Some(capacity)) => format!(
                "{} l/100km, {} l tank",
                format_litres(per_100km),
                format_litres(capacity)
            ),
            _ => "no fuel".to_string(),
        };
        writeln!(out, "  {:8} {:8} - {tank}", vehicle.kind().key(), vehicle.name())?;
    }
    Ok(())
}
