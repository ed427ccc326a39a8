use verdict_core::{Metric, Persona, PersonaError, PersonaWeights};

#[test]
fn builtin_tables_are_valid() {
    for persona in Persona::ALL {
        let weights = persona.default_weights();
        weights
            .validate(&format!("personas.{persona}"))
            .unwrap_or_else(|e| panic!("{persona}: {e}"));
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn builtin_tables_reflect_audience_priorities() {
    let startup = PersonaWeights::STARTUP;
    assert!(startup.pricing >= startup.docs && startup.ease >= startup.reliability);

    let enterprise = PersonaWeights::ENTERPRISE;
    let top = Metric::ALL
        .into_iter()
        .max_by(|a, b| enterprise.weight(*a).total_cmp(&enterprise.weight(*b)))
        .unwrap();
    assert_eq!(top, Metric::Reliability);
    assert!(enterprise.docs > enterprise.pricing);

    assert_ne!(PersonaWeights::LEARNING, startup);
}

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!("startup".parse::<Persona>().unwrap(), Persona::Startup);
    assert_eq!(" Enterprise ".parse::<Persona>().unwrap(), Persona::Enterprise);
    assert_eq!("LEARNING".parse::<Persona>().unwrap(), Persona::Learning);
}

#[test]
fn parse_unknown_persona() {
    let err = "agency".parse::<Persona>().unwrap_err();
    assert!(matches!(err, PersonaError::Unknown { ref name } if name == "agency"));
}

#[test]
fn display_round_trips_through_parse() {
    for persona in Persona::ALL {
        assert_eq!(persona.to_string().parse::<Persona>().unwrap(), persona);
    }
}

#[test]
fn overall_lens_is_startup() {
    assert_eq!(Persona::OVERALL_LENS, Persona::Startup);
}

#[test]
fn validate_rejects_non_finite_weights() {
    let weights = PersonaWeights {
        pricing: f64::NAN,
        ..PersonaWeights::STARTUP
    };
    let err = weights.validate("personas.startup").unwrap_err();
    assert!(err.to_string().contains("personas.startup.pricing"));
}
