use roadtrip_sim::{
    Route, RouteOutcome, RoutePoint, Tour, TripError, TripEvent, Vehicle, VehicleKind,
    segment_distance_km,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn sedan_long_haul_then_refuel_retry() {
    let route = Route::new("haul")
        .with_point(RoutePoint::new(0, 0, "Depot"))
        .with_point(RoutePoint::new(700, 0, "Far"))
        .with_point(RoutePoint::new(800, 0, "Further"));
    let mut sedan = Vehicle::fueled(VehicleKind::Sedan);

    let report = route.run(&mut sedan);

    assert!(report.outcome.is_completed());
    assert_eq!(report.refuels, 1);
    assert_eq!(sedan.mileage_km(), 800);
    assert!(close(sedan.fuel_level().unwrap(), 43.0));

    let shortage = report
        .events
        .iter()
        .find_map(|event| match event {
            TripEvent::FuelShortage {
                required_litres,
                available_litres,
                ..
            } => Some((*required_litres, *available_litres)),
            _ => None,
        })
        .expect("second leg runs short");
    assert!(close(shortage.0, 7.0));
    assert!(close(shortage.1, 1.0));
}

#[test]
fn drive_failure_leaves_state_untouched() {
    for kind in [VehicleKind::Sedan, VehicleKind::Suv, VehicleKind::Bus] {
        let mut vehicle = Vehicle::new(kind);
        let before = vehicle.clone();
        let err = vehicle.drive(1).unwrap_err();
        assert!(matches!(err, TripError::InsufficientFuel { distance_km: 1, .. }));
        assert_eq!(vehicle, before);
    }
}

#[test]
fn one_point_route_prints_nothing_but_the_warning() {
    let route = Route::new("solo").with_point(RoutePoint::new(5, 5, "Here"));
    let mut bike = Vehicle::new(VehicleKind::Bicycle);
    let report = route.run(&mut bike);

    let mut out = Vec::new();
    report.write_lines(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Path is incomplete\n");
    assert_eq!(report.error(), Some(TripError::IncompletePath { points: 1 }));
}

#[test]
fn axis_aligned_segment_is_exact() {
    let a = RoutePoint::new(0, 0, "A");
    let b = RoutePoint::new(100, 0, "B");
    assert_eq!(segment_distance_km(&a, &b), 100);
}

#[test]
fn demo_bus_aborts_second_route_after_single_retry() {
    let mut tour = Tour::demo();
    tour.select_vehicles(&["bus".to_string()]);
    let report = tour.run();

    let first = &report.runs[0].reports[0];
    assert!(first.outcome.is_completed());
    assert_eq!(first.refuels, 2);

    let second = &report.runs[1].reports[0];
    let lines: Vec<String> = second.events.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Bus status: Mileage(km)=798, Fuel level(l)=36.5",
            "Not enough fuel to drive 540 km",
            "Refuel Bus",
            "Not enough fuel to drive 540 km",
            "Unable to drive the route",
        ]
    );
    assert!(matches!(
        second.outcome,
        RouteOutcome::Aborted { segment: 0, .. }
    ));
    assert_eq!(second.driven_km, 0);
}

#[test]
fn demo_sedan_first_route_trace() {
    let mut tour = Tour::demo();
    tour.select_vehicles(&["sedan".to_string()]);
    tour.select_routes(&["0".to_string()]);
    let report = tour.run();
    let sedan = &report.runs[0].reports[0];

    let drives: Vec<u64> = sedan
        .events
        .iter()
        .filter_map(|event| match event {
            TripEvent::Drove { distance_km, .. } => Some(*distance_km),
            _ => None,
        })
        .collect();
    assert_eq!(drives, vec![100, 141, 223, 223, 111]);
    assert_eq!(sedan.refuels, 2);
    assert_eq!(sedan.status_lines(), 6);
}
