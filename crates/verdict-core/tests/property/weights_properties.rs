use proptest::prelude::*;
use verdict_core::{Confidence, PersonaWeights};

fn normalized_weights() -> impl Strategy<Value = PersonaWeights> {
    prop::array::uniform5(1u32..1000).prop_map(|raw| {
        let total: u32 = raw.iter().sum();
        let [pricing, ease, docs, community, reliability] =
            raw.map(|r| f64::from(r) / f64::from(total));
        PersonaWeights {
            pricing,
            ease,
            docs,
            community,
            reliability,
        }
    })
}

proptest! {
    #[test]
    fn normalized_weights_validate(weights in normalized_weights()) {
        prop_assert!(weights.validate("personas.startup").is_ok());
    }

    #[test]
    fn scaled_weights_fail_validation(weights in normalized_weights(), factor in 1.1f64..3.0) {
        let scaled = PersonaWeights {
            pricing: weights.pricing * factor,
            ease: weights.ease * factor,
            docs: weights.docs * factor,
            community: weights.community * factor,
            reliability: weights.reliability * factor,
        };
        prop_assert!(scaled.validate("personas.startup").is_err());
    }

    #[test]
    fn confidence_never_drops_as_gap_grows(gap in 0.0f64..10.0, extra in 0.0f64..10.0) {
        let smaller = Confidence::from_gap(gap, 0.5, 2.0);
        let larger = Confidence::from_gap(gap + extra, 0.5, 2.0);
        prop_assert!(larger >= smaller);
    }
}
