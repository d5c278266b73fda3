//! Property tests: deck invariants hold whatever the model says.

mod common;

use common::{ScriptedLlm, trend};
use proptest::prelude::*;
use std::collections::HashSet;
use stratagem_core::{Brief, SectionSettings, Trend};
use stratagem_synthesis::Recommender;
use stratagem_synthesis::parsing::{parse_budget, parse_ideas, parse_timeline};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn brief_strategy() -> impl Strategy<Value = Brief> {
    (
        "[A-Za-z ]{1,20}",
        prop::collection::vec("[a-z]{1,10}", 1..4),
        "[a-z ]{0,20}",
        "[a-z]{1,20}",
    )
        .prop_map(|(title, objectives, reformulation, summary)| {
            Brief::new(title, objectives, reformulation, summary).unwrap()
        })
}

fn trends_strategy() -> impl Strategy<Value = Vec<Trend>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["T1", "T2", "T3", "Retail", "ASMR"]),
            1u32..=28,
        ),
        0..8,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(theme, day)| trend(theme, &format!("2025-02-{:02}", day)))
            .collect()
    })
}

/// Arbitrary model answers, biased toward list and dated shapes.
fn answer_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,80}",
        prop::collection::vec("(- |\\* |[0-9]\\. )?[A-Za-z ]{0,12}", 0..8)
            .prop_map(|lines| lines.join("\n")),
        prop::collection::vec(
            (2020i32..2030, 1u32..=12, 1u32..=28, "[A-Za-z]{1,8}"),
            0..6
        )
        .prop_map(|rows| rows
            .into_iter()
            .map(|(y, m, d, label)| format!("{y}-{m:02}-{d:02}: {label}"))
            .collect::<Vec<_>>()
            .join("\n")),
        prop::collection::vec(("[A-Za-z]{1,8}", -500i32..5000, "[a-z]{0,6}"), 0..6).prop_map(
            |rows| rows
                .into_iter()
                .map(|(category, amount, comment)| format!("{category} – €{amount} – {comment}"))
                .collect::<Vec<_>>()
                .join("\n")
        ),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deck_invariants_hold(
        brief in brief_strategy(),
        trends in trends_strategy(),
        answer in answer_strategy(),
        cardinality in 1usize..6,
    ) {
        let llm = ScriptedLlm::answering(&answer);
        let recommender = Recommender::new(llm, SectionSettings::new(cardinality, false));
        let deck = runtime()
            .block_on(recommender.generate_recommendation(&brief, &trends))
            .unwrap();

        prop_assert_eq!(deck.brief_reminder(), &brief);
        prop_assert_eq!(deck.trends(), &trends);
        prop_assert_eq!(deck.insights().len(), cardinality);
        prop_assert_eq!(deck.hypotheses().len(), cardinality);
        prop_assert_eq!(deck.kpis().len(), cardinality);

        let mut seen = HashSet::new();
        let expected: Vec<&str> = trends
            .iter()
            .map(|t| t.theme().as_str())
            .filter(|t| seen.insert(*t))
            .collect();
        let actual: Vec<&str> = deck.state_of_play().iter().map(|s| s.theme().as_str()).collect();
        prop_assert_eq!(actual, expected);

        prop_assert!(deck.timeline().windows(2).all(|w| w[0].deadline() <= w[1].deadline()));
        prop_assert!(deck.budget().iter().all(|b| *b.estimate() >= 0.0));

        let labels: HashSet<&str> = deck.ideas().iter().map(|i| i.label().as_str()).collect();
        prop_assert_eq!(labels.len(), deck.ideas().len());
    }

    #[test]
    fn timeline_parser_always_sorts(text in answer_strategy()) {
        let timeline = parse_timeline(&text);
        prop_assert!(timeline.windows(2).all(|w| w[0].deadline() <= w[1].deadline()));
    }

    #[test]
    fn budget_parser_never_yields_negative(text in answer_strategy()) {
        prop_assert!(parse_budget(&text).iter().all(|b| *b.estimate() >= 0.0));
    }

    #[test]
    fn idea_labels_are_unique(labels in prop::collection::vec("[A-C]{1,2}", 0..12)) {
        let text = labels.join("\n\n");
        let ideas = parse_ideas(&text);
        let unique: HashSet<&str> = ideas.iter().map(|i| i.label().as_str()).collect();
        prop_assert_eq!(unique.len(), ideas.len());
        prop_assert_eq!(ideas.len(), labels.len());
    }
}
