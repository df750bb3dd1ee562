//! End-to-end engine scenarios.

use cs_catalog::{BreakerType, WireGauge};
use cs_core::units::{DutyCycle, amps, as_amps, as_seconds, minutes};
use cs_sim::{
    Consumer, IssueKind, RiskLevel, SimEvent, SimOptions, Simulation, TripDecision, TripReason,
    assess, run,
};
use proptest::prelude::*;

fn always_on(name: &str, rated: f64, startup: f64, cycle: f64) -> Consumer {
    Consumer::new(name, amps(rated), DutyCycle::ALWAYS_ON, startup, minutes(cycle))
        .with_labels(format!("Normal ({rated}A)"), "Normal")
}

#[test]
fn motor_start_within_magnetic_threshold_holds() {
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq2_5.spec();
    let consumers = [always_on("Motor", 10.0, 6.0, 120.0)];

    let series = run(&consumers, &breaker, amps(16.0), &wire, 60).unwrap();
    let p0 = &series[0];
    assert_eq!(as_amps(p0.instant_current), 60.0);
    assert_eq!(as_amps(p0.thermal_current), 0.0);
    assert_eq!(p0.trip, TripDecision::Hold);
    assert_eq!(p0.risk, RiskLevel::Safe);
    assert_eq!(p0.event_messages(), vec!["Motor startup (Normal (10A))"]);

    // Only the first minute carries inrush inside a 120 minute cycle.
    assert!(series[1..].iter().all(|p| as_amps(p.instant_current) == 10.0));
}

#[test]
fn heavy_motor_start_trips_instantaneously() {
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq2_5.spec();
    let consumers = [always_on("Motor", 10.0, 10.0, 120.0)];

    let series = run(&consumers, &breaker, amps(16.0), &wire, 5).unwrap();
    let p0 = &series[0];
    assert_eq!(as_amps(p0.instant_current), 110.0);
    assert_eq!(p0.trip.reason(), Some(TripReason::Instantaneous));
    assert_eq!(p0.trip.time_to_trip().map(as_seconds), Some(0.0));
    assert_eq!(p0.risk, RiskLevel::Critical);
    assert!(matches!(
        p0.events.last(),
        Some(SimEvent::BreakerTrip {
            reason: TripReason::Instantaneous,
            ..
        })
    ));

    let a = assess(&series, &breaker, amps(16.0), &wire);
    assert!(!a.safe);
    assert!(a.has(IssueKind::BreakerInstantTrip));
}

#[test]
fn two_continuous_loads_approach_wire_limit() {
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq2_5.spec();
    let consumers = [
        always_on("Heater A", 10.0, 1.0, 60.0),
        always_on("Heater B", 10.0, 1.0, 60.0),
    ];

    let short = run(&consumers, &breaker, amps(16.0), &wire, 30).unwrap();
    let long = run(&consumers, &breaker, amps(16.0), &wire, 600).unwrap();
    let a_short = assess(&short, &breaker, amps(16.0), &wire);
    let a_long = assess(&long, &breaker, amps(16.0), &wire);

    assert!(a_long.max_thermal_load > a_short.max_thermal_load);
    assert!(as_amps(a_long.max_thermal_load) <= 20.0);
    assert!(as_amps(a_long.max_thermal_load) > 19.99);

    // 20 A sustained on a 16 A breaker crosses its 18.08 A thermal threshold.
    assert!(!a_long.safe);
    assert!(a_long.has(IssueKind::BreakerThermalLimit));
    assert!(!a_long.has(IssueKind::WireShortTerm));

    // Once over the thermal threshold the breaker decision itself fires.
    let last = long.last().unwrap();
    assert_eq!(last.trip.reason(), Some(TripReason::Thermal));
    assert_eq!(last.risk, RiskLevel::Critical);
}

#[test]
fn wire_warning_without_trip() {
    // 25 A breaker on 1.5 mm² wire: 18 A sustained stays under the breaker's
    // thermal threshold but heats the wire above its 16 A continuous rating.
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq1_5.spec();
    let consumers = [always_on("Heater", 18.0, 1.0, 60.0)];

    let series = run(&consumers, &breaker, amps(25.0), &wire, 120).unwrap();
    let warned: Vec<_> = series
        .iter()
        .filter(|p| p.risk == RiskLevel::Warning)
        .collect();
    assert!(!warned.is_empty());
    assert!(series.iter().all(|p| p.risk != RiskLevel::Critical));
    for p in &warned {
        assert!(p.thermal_current > p.wire_max_continuous);
    }

    // The overload is reported once, on the minute the wire crosses its rating.
    let overloads: Vec<u32> = series
        .iter()
        .filter(|p| {
            p.events
                .iter()
                .any(|e| matches!(e, SimEvent::WireOverload { .. }))
        })
        .map(|p| p.time_minutes)
        .collect();
    assert_eq!(overloads, vec![warned[0].time_minutes]);
}

#[test]
fn thermal_trip_is_reported_once_per_run_of_trips() {
    // 10 A always on plus 10 A on half of every 20 minutes: 20 A exceeds the
    // 18.08 A thermal threshold for minutes 0..10, 20..30, ...
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq2_5.spec();
    let consumers = [
        always_on("Oven", 10.0, 1.0, 240.0),
        Consumer::new(
            "Heater",
            amps(10.0),
            DutyCycle::from_percent(50.0).unwrap(),
            1.0,
            minutes(20.0),
        ),
    ];

    let series = run(&consumers, &breaker, amps(16.0), &wire, 60).unwrap();
    let tripped: Vec<u32> = series
        .iter()
        .filter(|p| p.trip.will_trip())
        .map(|p| p.time_minutes)
        .collect();
    assert_eq!(tripped.len(), 30);

    let reported: Vec<u32> = series
        .iter()
        .filter(|p| {
            p.events
                .iter()
                .any(|e| matches!(e, SimEvent::BreakerTrip { .. }))
        })
        .map(|p| p.time_minutes)
        .collect();
    assert_eq!(reported, vec![0, 20, 40]);

    // Sampling a crossing minute on its own gives the same events.
    let sim = Simulation::new(
        &consumers,
        &breaker,
        amps(16.0),
        &wire,
        &SimOptions::with_horizon(60),
    )
    .unwrap();
    assert_eq!(sim.point(20), series[20]);
    assert!(sim.point(21).events.is_empty());
}

#[test]
fn duty_cycle_schedule_over_one_period() {
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq2_5.spec();
    let consumers = [Consumer::new(
        "Pump",
        amps(5.0),
        DutyCycle::from_percent(50.0).unwrap(),
        2.0,
        minutes(10.0),
    )];

    let series = run(&consumers, &breaker, amps(16.0), &wire, 20).unwrap();
    for p in &series {
        let on = p.time_minutes % 10 < 5;
        let expected = match (on, p.time_minutes % 10 == 0) {
            (true, true) => 10.0,
            (true, false) => 5.0,
            (false, _) => 0.0,
        };
        assert_eq!(as_amps(p.instant_current), expected, "t={}", p.time_minutes);
    }
}

#[test]
fn startup_events_follow_consumer_order() {
    let breaker = BreakerType::D.spec();
    let wire = WireGauge::Sq4.spec();
    let consumers = [
        always_on("Kettle", 10.0, 1.0, 5.0),
        always_on("Fridge", 1.0, 5.0, 30.0),
    ];
    let series = run(&consumers, &breaker, amps(20.0), &wire, 6).unwrap();
    assert_eq!(
        series[0].event_messages(),
        vec!["Kettle startup (Normal (10A))", "Fridge startup (Normal (1A))"]
    );
    assert_eq!(
        series[5].event_messages(),
        vec!["Kettle startup (Normal (10A))"]
    );
}

#[test]
fn consumer_order_does_not_change_currents() {
    let breaker = BreakerType::C.spec();
    let wire = WireGauge::Sq2_5.spec();
    let a = always_on("A", 4.0, 3.0, 7.0);
    let b = always_on("B", 6.0, 2.0, 11.0);

    let ab = run(&[a.clone(), b.clone()], &breaker, amps(16.0), &wire, 40).unwrap();
    let ba = run(&[b, a], &breaker, amps(16.0), &wire, 40).unwrap();
    for (x, y) in ab.iter().zip(&ba) {
        assert_eq!(x.instant_current, y.instant_current);
        assert_eq!(x.thermal_current, y.thermal_current);
        assert_eq!(x.risk, y.risk);
    }
}

#[test]
fn reruns_are_bit_identical() {
    let breaker = BreakerType::B.spec();
    let wire = WireGauge::Sq2_5.spec();
    let consumers = [
        always_on("Oven", 13.0, 1.2, 45.0),
        always_on("Washer", 8.0, 3.0, 90.0),
    ];
    let first = run(&consumers, &breaker, amps(16.0), &wire, 240).unwrap();
    let second = run(&consumers, &breaker, amps(16.0), &wire, 240).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_wire_gauge_uses_default_limits() {
    let wire = WireGauge::resolve("3.3").spec();
    assert_eq!(wire.gauge, WireGauge::Sq2_5);
    let series = run(&[], &BreakerType::C.spec(), amps(16.0), &wire, 1).unwrap();
    assert_eq!(as_amps(series[0].wire_max_continuous), 20.0);
}

proptest! {
    #[test]
    fn parallel_matches_sequential(
        rated in 1.0f64..20.0,
        duty in 0.0f64..=100.0,
        startup in 1.0f64..12.0,
        cycle in 1u32..90,
        horizon in 1u32..400,
    ) {
        let breaker = BreakerType::C.spec();
        let wire = WireGauge::Sq2_5.spec();
        let consumers = [Consumer::new(
            "Load",
            amps(rated),
            DutyCycle::from_percent(duty).unwrap(),
            startup,
            minutes(f64::from(cycle)),
        )];
        let opts = SimOptions {
            horizon_minutes: horizon,
            temperature_model: true,
            ..SimOptions::default()
        };
        let sim = Simulation::new(&consumers, &breaker, amps(16.0), &wire, &opts).unwrap();
        prop_assert_eq!(sim.run(), sim.run_parallel());
    }

    #[test]
    fn trip_always_means_critical(
        rated in 1.0f64..40.0,
        startup in 1.0f64..15.0,
        horizon in 1u32..200,
    ) {
        let breaker = BreakerType::B.spec();
        let wire = WireGauge::Sq1_5.spec();
        let consumers = [always_on("Load", rated, startup, 30.0)];
        let series = run(&consumers, &breaker, amps(10.0), &wire, horizon).unwrap();
        prop_assert_eq!(series.len(), horizon as usize);
        for (i, p) in series.iter().enumerate() {
            prop_assert_eq!(p.time_minutes as usize, i);
            prop_assert_eq!(p.trip.will_trip(), p.risk == RiskLevel::Critical);
            prop_assert!(p.instant_current >= p.thermal_current);
        }
    }
}
