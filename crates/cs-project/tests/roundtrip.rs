use cs_project::schema::*;
use cs_project::{load_json, load_yaml, parse_yaml, save_json, save_yaml};

fn kitchen() -> Scenario {
    Scenario {
        version: 1,
        name: "Kitchen".to_string(),
        circuit: CircuitDef {
            rated_amps: 20,
            breaker_type: "Type C".to_string(),
            wire_gauge: "4.0".to_string(),
        },
        horizon_minutes: 90,
        consumers: vec![
            ConsumerDef::Appliance {
                appliance: "Electric Oven".to_string(),
                power_level: Some("Medium (12A)".to_string()),
                operating_mode: None,
            },
            ConsumerDef::Custom {
                name: "Extractor".to_string(),
                rated_amps: 0.5,
                duty_percent: 60.0,
                startup_multiplier: 2.0,
                cycle_minutes: 15.0,
                power_level: String::new(),
                operating_mode: String::new(),
            },
        ],
        options: OptionsDef {
            temperature_model: true,
            parallel: false,
        },
    }
}

#[test]
fn roundtrip_yaml() {
    let scenario = kitchen();
    let path = std::env::temp_dir().join("cs_project_roundtrip.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json() {
    let scenario = kitchen();
    let path = std::env::temp_dir().join("cs_project_roundtrip.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(scenario, loaded);
}

#[test]
fn defaults_fill_optional_fields() {
    let yaml = r#"
version: 1
name: Minimal
circuit:
  rated_amps: 16
  breaker_type: B
consumers:
  - type: Custom
    name: Lamp
    rated_amps: 0.3
    cycle_minutes: 60
"#;
    let s = parse_yaml(yaml).unwrap();
    assert_eq!(s.horizon_minutes, 60);
    assert_eq!(s.circuit.wire_gauge, "2.5");
    assert_eq!(s.options, OptionsDef::default());
    match &s.consumers[0] {
        ConsumerDef::Custom {
            duty_percent,
            startup_multiplier,
            ..
        } => {
            assert_eq!(*duty_percent, 100.0);
            assert_eq!(*startup_multiplier, 1.0);
        }
        other => panic!("unexpected consumer {other:?}"),
    }
}

#[test]
fn version_zero_is_migrated_on_load() {
    let yaml = r#"
version: 0
name: Legacy
circuit:
  rated_amps: 32
  breaker_type: D
  wire_gauge: "10"
"#;
    let s = parse_yaml(yaml).unwrap();
    assert_eq!(s.version, 1);
    assert_eq!(s.circuit.wire_gauge, "10.0");
}

#[test]
fn invalid_scenarios_fail_to_load() {
    let yaml = r#"
version: 1
name: Bad
circuit:
  rated_amps: 16
  breaker_type: C
consumers:
  - type: Custom
    name: Broken
    rated_amps: 5
    cycle_minutes: 0
"#;
    let err = parse_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("cycle_minutes"));
}

#[test]
fn unknown_consumer_type_is_a_parse_error() {
    let yaml = r#"
version: 1
name: Bad
circuit:
  rated_amps: 16
  breaker_type: C
consumers:
  - type: Robot
    name: R2
"#;
    assert!(matches!(
        parse_yaml(yaml),
        Err(cs_project::ProjectError::Yaml(_))
    ));
}
