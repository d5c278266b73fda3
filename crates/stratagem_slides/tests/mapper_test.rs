//! Slide mapping and rendering tests.

use chrono::NaiveDate;
use stratagem_core::{
    BrandOverview, Brief, BudgetItem, CompetitivePositioning, Deck, DeckSections, Hypothesis,
    Idea, Insight, Kpi, LayoutId, Milestone, Persona, SlideDescriptor, SlideSettings,
    StateOfPlaySection, Trend,
};
use stratagem_interface::SlideRenderer;
use stratagem_slides::{JsonSlideRenderer, MarkdownSlideRenderer, SlideMapper};

fn brief(reformulation: &str) -> Brief {
    Brief::new(
        "Projet Test",
        vec!["Obj1".to_string(), "Obj2".to_string()],
        reformulation,
        "Résumé",
    )
    .unwrap()
}

fn trends() -> Vec<Trend> {
    ["T1", "T2"]
        .iter()
        .map(|theme| {
            Trend::new("web", "title", "snippet", *theme, "summary", "2025-01-01", vec![]).unwrap()
        })
        .collect()
}

fn sections(with_content: bool) -> DeckSections {
    let mut sections = DeckSections {
        insights: (1..=3).map(Insight::placeholder).collect(),
        hypotheses: (1..=3).map(Hypothesis::placeholder).collect(),
        kpis: (1..=3).map(Kpi::placeholder).collect(),
        state_of_play: vec![
            StateOfPlaySection::new("T1", vec!["2M vues".to_string()]).unwrap(),
            StateOfPlaySection::new("T2", vec![]).unwrap(),
        ],
        ..DeckSections::default()
    };
    if with_content {
        sections.brand_overview = BrandOverview::new(
            vec!["Maison fondée en 1920".to_string(), "Présente en Europe".to_string()],
            CompetitivePositioning::default(),
            Persona::default(),
            vec![],
        )
        .unwrap();
        sections.ideas = vec![
            Idea::new("Live shopping", vec!["TikTok".to_string()]).unwrap(),
            Idea::new("Pop-up", vec![]).unwrap(),
        ];
        sections.timeline = vec![
            Milestone::new("Kick-off", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()).unwrap(),
            Milestone::new("Go-live", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap(),
        ];
        sections.budget = vec![
            BudgetItem::new("Production", 10000.0, "tournage").unwrap(),
            BudgetItem::new("Digital", 5000.5, "ads").unwrap(),
        ];
    }
    sections
}

fn deck(with_content: bool, reformulation: &str) -> Deck {
    Deck::assemble(&brief(reformulation), &trends(), sections(with_content), 3).unwrap()
}

fn titles(slides: &[SlideDescriptor]) -> Vec<&str> {
    slides.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn test_full_deck_slide_sequence() {
    let slides = SlideMapper::default().map(&deck(true, "Reformulation"));
    assert_eq!(
        titles(&slides),
        vec![
            "1. Brief Reminder",
            "2. Brand Overview",
            "3.1 State of Play – T1",
            "3.2 State of Play – T2",
            "4. Idea #1: Live shopping",
            "4. Idea #2: Pop-up",
            "5. Timeline",
            "6. Budget",
        ]
    );

    assert_eq!(slides[0].layout, LayoutId::TitleAndText);
    assert_eq!(
        slides[0].body_paragraphs,
        vec!["• Obj1", "• Obj2", "Reformulation"]
    );
    assert_eq!(slides[1].body_paragraphs.len(), 2);
    assert_eq!(slides[2].body_paragraphs, vec!["2M vues"]);
    assert!(slides[3].body_paragraphs.is_empty());
    assert_eq!(slides[4].body_paragraphs, vec!["TikTok"]);
    assert_eq!(
        slides[6].body_paragraphs,
        vec!["2025-03-01: Kick-off", "2025-06-01: Go-live"]
    );
    assert_eq!(
        slides[7].body_paragraphs,
        vec!["Production: €10000", "Digital: €5000.50"]
    );
}

#[test]
fn test_empty_sections_still_emit_slides() {
    let slides = SlideMapper::default().map(&deck(false, ""));
    // brief, brand, two themes, timeline, budget
    assert_eq!(slides.len(), 6);
    assert_eq!(slides[0].body_paragraphs, vec!["• Obj1", "• Obj2"]);
    assert!(slides[1].body_paragraphs.is_empty());
    assert_eq!(slides[4].title, "5. Timeline");
    assert!(slides[4].body_paragraphs.is_empty());
    assert_eq!(slides[5].title, "6. Budget");
    assert!(slides[5].body_paragraphs.is_empty());
}

#[test]
fn test_currency_symbol_is_configurable() {
    let slides = SlideMapper::new(SlideSettings::new("$")).map(&deck(true, ""));
    assert_eq!(slides.last().unwrap().body_paragraphs[0], "Production: $10000");
}

#[test]
fn test_mapping_is_stable() {
    let deck = deck(true, "Reformulation");
    let mapper = SlideMapper::default();
    let first = serde_json::to_vec(&mapper.map(&deck)).unwrap();
    let second = serde_json::to_vec(&mapper.map(&deck.clone())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_renderer_writes_descriptors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/slides.json");
    let slides = SlideMapper::default().map(&deck(true, "Reformulation"));

    JsonSlideRenderer.render(&slides, &path).unwrap();

    let written: Vec<SlideDescriptor> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, slides);
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["layout_id"], "title+text");
    assert_eq!(raw[7]["layout_id"], "title+bullets");
}

#[test]
fn test_markdown_renderer_writes_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slides.md");
    let slides = SlideMapper::default().map(&deck(true, "Reformulation"));

    MarkdownSlideRenderer.render(&slides, &path).unwrap();

    let markdown = std::fs::read_to_string(&path).unwrap();
    assert!(markdown.starts_with("## 1. Brief Reminder\n\n• Obj1\n\n• Obj2\n\nReformulation\n"));
    assert!(markdown.contains("## 5. Timeline\n\n- 2025-03-01: Kick-off\n- 2025-06-01: Go-live\n"));
    assert_eq!(markdown.matches("## ").count(), slides.len());
}

#[test]
fn test_render_into_unwritable_path_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    // A file where a directory is expected
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let err = JsonSlideRenderer
        .render(&[], &blocker.join("slides.json"))
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        stratagem_error::StratagemErrorKind::Render(_)
    ));
}
