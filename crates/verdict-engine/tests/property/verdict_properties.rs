use proptest::prelude::*;
use verdict_core::{Persona, ToolRecord};
use verdict_engine::{
    calculate_key_differences, calculate_tool_score, determine_overall_winner, generate_verdict,
};

const DESCRIPTORS: &[&str] = &[
    "Free", "Open source", "Affordable", "Moderate", "Expensive", "Very easy", "Easy",
    "Difficult", "Excellent", "Good", "Basic", "Poor", "Large", "Active", "Small", "High",
    "Stable", "Low", "$20/mo", "",
];

fn descriptor() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(DESCRIPTORS).prop_map(str::to_string))
}

fn tool(name: &'static str) -> impl Strategy<Value = ToolRecord> {
    (
        descriptor(),
        any::<bool>(),
        descriptor(),
        descriptor(),
        descriptor(),
        descriptor(),
    )
        .prop_map(move |(pricing, open_source, ease, reliability, docs, community)| {
            ToolRecord {
                id: name.to_lowercase(),
                name: name.to_string(),
                pricing,
                open_source,
                ease_of_use: ease,
                reliability,
                documentation: docs,
                community,
                ..ToolRecord::default()
            }
        })
}

proptest! {
    #[test]
    fn verdict_is_deterministic(a in tool("Alpha"), b in tool("Beta")) {
        prop_assert_eq!(generate_verdict(&a, &b), generate_verdict(&a, &b));
    }

    #[test]
    fn winner_is_one_of_the_inputs(a in tool("Alpha"), b in tool("Beta")) {
        let verdict = generate_verdict(&a, &b);
        prop_assert!(verdict.winner == a.name || verdict.winner == b.name);
        for rec in [&verdict.recommendations.startup, &verdict.recommendations.enterprise, &verdict.recommendations.learning] {
            prop_assert!(rec.winner == a.name || rec.winner == b.name);
        }
    }

    #[test]
    fn reasons_never_empty_and_capped(a in tool("Alpha"), b in tool("Beta")) {
        let verdict = generate_verdict(&a, &b);
        prop_assert!(!verdict.reasons.is_empty());
        prop_assert!(verdict.reasons.len() <= 3);
    }

    #[test]
    fn composite_stays_in_bounds(t in tool("Alpha")) {
        for persona in Persona::ALL {
            let score = calculate_tool_score(&t, &persona.default_weights());
            prop_assert!((0.0..=10.0).contains(&score), "{} scored {}", persona, score);
        }
    }

    #[test]
    fn differences_sorted_and_above_threshold(a in tool("Alpha"), b in tool("Beta")) {
        let differences = calculate_key_differences(&a, &b);
        prop_assert!(differences.iter().all(|d| d.magnitude > 0.5));
        prop_assert!(differences.windows(2).all(|w| w[0].magnitude >= w[1].magnitude));
    }

    #[test]
    fn free_pricing_never_hurts(t in tool("Alpha"), rival in tool("Beta")) {
        let expensive = ToolRecord { pricing: Some("Expensive".to_string()), ..t.clone() };
        let free = ToolRecord { pricing: Some("Free".to_string()), ..t };
        for persona in Persona::ALL {
            let weights = persona.default_weights();
            prop_assert!(calculate_tool_score(&free, &weights) >= calculate_tool_score(&expensive, &weights));
        }
        if determine_overall_winner(&expensive, &rival).winner == expensive.name {
            prop_assert_eq!(determine_overall_winner(&free, &rival).winner, free.name);
        }
    }

    #[test]
    fn self_comparison_is_a_slight_first_argument_win(t in tool("Alpha")) {
        let twin = ToolRecord { name: "Twin".to_string(), ..t.clone() };
        let overall = determine_overall_winner(&t, &twin);
        prop_assert_eq!(overall.winner, t.name);
        prop_assert_eq!(overall.confidence, verdict_core::Confidence::Slight);
    }
}
