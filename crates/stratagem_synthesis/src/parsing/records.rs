//! Section-specific record parsers.

use super::text::{list_items, strip_fences, strip_list_prefix};
use super::{ParseError, ParseResult, parse_amount};
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use stratagem_core::{
    BrandOverview, BudgetItem, CompetitivePositioning, Idea, Milestone, Persona,
    TOP_COMPETITOR_ACTIONS, parse_iso_date,
};
use tracing::debug;

static BUDGET_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[–—-]\s+").expect("Valid budget separator regex"));

static THEME_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:#+\s*)?(?:\*\*)?th[eè]me\s*:\s*(.+?)(?:\*\*)?$").expect("Valid theme regex")
});

/// Labels of a list-shaped answer.
///
/// # Errors
///
/// Returns [`ParseError`] when the answer holds no list item at all.
pub fn parse_labels(text: &str) -> ParseResult<Vec<String>> {
    let items = list_items(text);
    if items.is_empty() {
        return Err(ParseError::new("Answer contains no list items"));
    }
    Ok(items.into_iter().map(str::to_string).collect())
}

fn clean_idea_label(line: &str) -> &str {
    let line = strip_list_prefix(line).unwrap_or(line.trim());
    line.trim_start_matches('#')
        .trim()
        .trim_start_matches("**")
        .trim_end_matches("**")
        .trim()
}

fn disambiguate(label: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(label) {
        return label.to_string();
    }
    (2..)
        .map(|n| format!("{} ({})", label, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| label.to_string())
}

/// Ideas separated by blank lines.
///
/// The first line of a block is the label; following lines are bullets, with
/// list markers removed. Repeated labels get a ` (2)`, ` (3)` … suffix.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::parse_ideas;
///
/// let ideas = parse_ideas("Pop-up\n- Paris\n- Lyon\n\nPop-up\n- Lille");
/// assert_eq!(ideas[0].label(), "Pop-up");
/// assert_eq!(ideas[0].bullets(), &vec!["Paris".to_string(), "Lyon".to_string()]);
/// assert_eq!(ideas[1].label(), "Pop-up (2)");
/// ```
pub fn parse_ideas(text: &str) -> Vec<Idea> {
    let mut ideas = Vec::new();
    let mut taken = HashSet::new();
    let mut block: Vec<&str> = Vec::new();

    let mut flush = |block: &mut Vec<&str>| {
        let mut lines = block.drain(..);
        let Some(first) = lines.next() else {
            return;
        };
        let label = clean_idea_label(first);
        if label.is_empty() {
            debug!(line = first, "Skipping idea block without a label");
            return;
        }
        let bullets = lines
            .map(|line| strip_list_prefix(line).unwrap_or(line.trim()))
            .filter(|bullet| !bullet.is_empty())
            .map(str::to_string)
            .collect();
        let label = disambiguate(label, &taken);
        if let Ok(idea) = Idea::new(label.clone(), bullets) {
            taken.insert(label);
            ideas.push(idea);
        }
    };

    for line in strip_fences(text).lines() {
        if line.trim().is_empty() {
            flush(&mut block);
        } else {
            block.push(line);
        }
    }
    flush(&mut block);

    ideas
}

/// Milestones from `<ISO date>: <label>` lines, sorted by deadline.
///
/// The date may also be an RFC 3339 timestamp, reduced to its calendar date.
/// Lines of any other shape are skipped. The sort is stable, so milestones
/// sharing a date keep their order.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::parse_timeline;
///
/// let timeline = parse_timeline("2025-06-01: Go-live\n2025-03-01: Kick-off\nsoon: later");
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline[0].label(), "Kick-off");
/// assert_eq!(timeline[1].deadline().to_string(), "2025-06-01");
/// ```
pub fn parse_timeline(text: &str) -> Vec<Milestone> {
    let mut timeline: Vec<Milestone> = strip_fences(text)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let body = strip_list_prefix(line).unwrap_or(line.trim());
            let parsed = split_dated(body)
                .and_then(|(deadline, label)| Milestone::new(label.trim(), deadline).ok());
            if parsed.is_none() {
                debug!(line, "Skipping timeline line");
            }
            parsed
        })
        .collect();

    timeline.sort_by_key(|milestone| *milestone.deadline());
    timeline
}

/// Splits at the first colon whose head is a date, so the colons inside an
/// RFC 3339 timestamp are not taken for the separator.
fn split_dated(body: &str) -> Option<(NaiveDate, &str)> {
    body.match_indices(':').find_map(|(i, _)| {
        parse_iso_date(&body[..i])
            .ok()
            .map(|deadline| (deadline, &body[i + 1..]))
    })
}

/// Budget lines of the form `<category> – <amount> – <comment>`.
///
/// The separator is an en dash, em dash or hyphen with whitespace on both
/// sides. The comment may be missing. Lines that do not match, and lines with a
/// negative amount, are skipped.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::parse_budget;
///
/// let budget = parse_budget("Production – €10000 – tournage\nDigital – €5,000 – ads\nInvalid line");
/// assert_eq!(budget.len(), 2);
/// assert_eq!(budget[1].category(), "Digital");
/// assert_eq!(*budget[1].estimate(), 5000.0);
/// assert_eq!(budget[1].comment(), "ads");
/// ```
pub fn parse_budget(text: &str) -> Vec<BudgetItem> {
    strip_fences(text)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let body = strip_list_prefix(line).unwrap_or(line.trim());
            let mut fields = BUDGET_SEPARATOR.splitn(body, 3);
            let category = fields.next()?.trim();
            let amount = match fields.next() {
                Some(amount) => amount,
                None => {
                    debug!(line, "Skipping budget line without separator");
                    return None;
                }
            };
            let comment = fields.next().unwrap_or_default().trim();

            let estimate = match parse_amount(amount) {
                Ok(estimate) => estimate,
                Err(e) => {
                    debug!(line, error = %e, "Skipping budget line");
                    return None;
                }
            };
            match BudgetItem::new(category, estimate, comment) {
                Ok(item) => Some(item),
                Err(e) => {
                    debug!(line, error = %e, "Skipping budget line");
                    None
                }
            }
        })
        .collect()
}

/// Wire shape requested from the brand overview prompt. Every key is required.
#[derive(Debug, Deserialize)]
struct BrandOverviewAnswer {
    description_paragraphs: Vec<String>,
    competitive_positioning: CompetitivePositioning,
    persona: Persona,
    top3_competitor_actions: Vec<String>,
}

/// Strict decode of the brand overview JSON object.
///
/// Fences are stripped, then the remaining text must be exactly one JSON
/// object; prose around an unfenced object is rejected. All four keys (and
/// their nested keys) must be present. Extra competitor actions beyond three
/// are dropped.
///
/// # Errors
///
/// Returns [`ParseError`] when the text does not decode.
pub fn parse_brand_overview(text: &str) -> ParseResult<BrandOverview> {
    let json = strip_fences(text);

    let answer: BrandOverviewAnswer = serde_json::from_str(json)
        .map_err(|e| ParseError::new(format!("Brand overview JSON rejected: {}", e)))?;

    let mut actions = answer.top3_competitor_actions;
    actions.truncate(TOP_COMPETITOR_ACTIONS);

    BrandOverview::new(
        answer.description_paragraphs,
        answer.competitive_positioning,
        answer.persona,
        actions,
    )
    .map_err(|e| ParseError::new(e.message))
}

/// Evidence per theme from `Theme: <t>` headers followed by list items.
///
/// Items before the first header, and unmarked lines, are ignored. A theme
/// listed twice accumulates its evidence.
///
/// # Errors
///
/// Returns [`ParseError`] when the answer has no theme header.
///
/// # Examples
///
/// ```
/// use stratagem_synthesis::parsing::parse_state_of_play_evidence;
///
/// let evidence = parse_state_of_play_evidence("Theme: ASMR\n- 2M views\n- Sephora test\nTheme: Retail\n- Pop-ups").unwrap();
/// assert_eq!(evidence[0], ("ASMR".to_string(), vec!["2M views".to_string(), "Sephora test".to_string()]));
/// assert_eq!(evidence[1].0, "Retail");
/// ```
pub fn parse_state_of_play_evidence(text: &str) -> ParseResult<Vec<(String, Vec<String>)>> {
    let mut themes: Vec<(String, Vec<String>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in strip_fences(text).lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(captures) = THEME_HEADER.captures(line) {
            let theme = captures
                .get(1)
                .map(|m| m.as_str().trim())
                .unwrap_or_default();
            if theme.is_empty() {
                current = None;
                continue;
            }
            let index = match themes.iter().position(|(t, _)| t == theme) {
                Some(index) => index,
                None => {
                    themes.push((theme.to_string(), Vec::new()));
                    themes.len() - 1
                }
            };
            current = Some(index);
            continue;
        }
        match (current, strip_list_prefix(line)) {
            (Some(index), Some(item)) if !item.is_empty() => {
                themes[index].1.push(item.to_string());
            }
            _ => debug!(line, "Ignoring state of play line"),
        }
    }

    if themes.is_empty() {
        return Err(ParseError::new("Answer contains no 'Theme:' header"));
    }
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_labels_require_at_least_one_item() {
        assert!(parse_labels("").is_err());
        assert!(parse_labels("```\n\n```").is_err());
        assert_eq!(parse_labels("- A\n- B\n- C").unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_timeline_sort_is_stable() {
        let timeline =
            parse_timeline("- 2025-06-01: B\n- 2025-03-01: A\n- 2025-06-01: C\n2025-13-01: bad");
        let labels: Vec<&str> = timeline.iter().map(|m| m.label().as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(*timeline[0].deadline(), date(2025, 3, 1));
    }

    #[test]
    fn test_timeline_label_keeps_later_colons() {
        let timeline = parse_timeline("2025-03-01: Kick-off: agence + client");
        assert_eq!(timeline[0].label(), "Kick-off: agence + client");
    }

    #[test]
    fn test_timeline_accepts_rfc3339_heads() {
        let timeline = parse_timeline(
            "2025-06-01T09:00:00Z: Go-live\n- 2025-03-01T18:30:00+01:00: Kick-off: agence",
        );
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label(), "Kick-off: agence");
        assert_eq!(timeline[0].deadline().to_string(), "2025-03-01");
        assert_eq!(timeline[1].label(), "Go-live");
    }

    #[test]
    fn test_timeline_skips_empty_label() {
        assert!(parse_timeline("2025-03-01:   ").is_empty());
    }

    #[test]
    fn test_budget_edge_shapes() {
        let budget = parse_budget(
            "- Media — 2 500 € — social ads - retargeting\nInfluence - 800\nRefund – -200 – credit\n – 100 – no category",
        );
        assert_eq!(budget.len(), 2);
        assert_eq!(budget[0].category(), "Media");
        assert_eq!(*budget[0].estimate(), 2500.0);
        assert_eq!(budget[0].comment(), "social ads - retargeting");
        assert_eq!(budget[1].category(), "Influence");
        assert_eq!(budget[1].comment(), "");
    }

    #[test]
    fn test_budget_hyphenated_category_is_not_split() {
        let budget = parse_budget("Co-branding – 1200 – partenariat");
        assert_eq!(budget[0].category(), "Co-branding");
    }

    #[test]
    fn test_ideas_markdown_labels_and_triple_duplicates() {
        let ideas = parse_ideas("## **Live shopping**\n- TikTok\n\n1. Live shopping\n\nLive shopping (2)\n\nLive shopping");
        let labels: Vec<&str> = ideas.iter().map(|i| i.label().as_str()).collect();
        assert_eq!(
            labels,
            vec!["Live shopping", "Live shopping (2)", "Live shopping (2) (2)", "Live shopping (3)"]
        );
        assert_eq!(ideas[0].bullets(), &vec!["TikTok".to_string()]);
    }

    #[test]
    fn test_ideas_empty_answer() {
        assert!(parse_ideas("").is_empty());
        assert!(parse_ideas("\n\n   \n").is_empty());
    }

    #[test]
    fn test_brand_overview_happy_path() {
        let json = r#"{
            "description_paragraphs": ["P1", "P2"],
            "competitive_positioning": {"axes": ["A"], "brands": ["B"]},
            "persona": {"primary": ["Gen Z"], "secondary": ["Parents"]},
            "top3_competitor_actions": ["a1", "a2", "a3", "a4"]
        }"#;
        let overview = parse_brand_overview(json).unwrap();
        assert_eq!(overview.description_paragraphs(), &vec!["P1".to_string(), "P2".to_string()]);
        assert_eq!(overview.competitive_positioning().axes(), &vec!["A".to_string()]);
        assert_eq!(overview.competitive_positioning().brands(), &vec!["B".to_string()]);
        assert_eq!(overview.persona().primary(), &vec!["Gen Z".to_string()]);
        assert_eq!(overview.top3_competitor_actions().len(), 3);
        assert_eq!(overview.top3_competitor_actions()[2], "a3");
    }

    #[test]
    fn test_brand_overview_fenced_object_decodes() {
        let text = "Voici :\n```json\n{\"description_paragraphs\": [], \"competitive_positioning\": {\"axes\": [], \"brands\": []}, \"persona\": {\"primary\": [], \"secondary\": []}, \"top3_competitor_actions\": [\"x\"]}\n```";
        let overview = parse_brand_overview(text).unwrap();
        assert_eq!(overview.top3_competitor_actions(), &vec!["x".to_string()]);

        let prose = "Sure! {\"description_paragraphs\": [\"D\"], \"competitive_positioning\": {\"axes\": [], \"brands\": []}, \"persona\": {\"primary\": [], \"secondary\": []}, \"top3_competitor_actions\": []} Hope it helps.";
        assert!(parse_brand_overview(prose).is_err());
    }

    #[test]
    fn test_brand_overview_rejects_missing_keys() {
        assert!(parse_brand_overview("not a json").is_err());
        assert!(parse_brand_overview(r#"{"description_paragraphs": []}"#).is_err());
        let missing_nested = r#"{
            "description_paragraphs": [],
            "competitive_positioning": {"axes": []},
            "persona": {"primary": [], "secondary": []},
            "top3_competitor_actions": []
        }"#;
        assert!(parse_brand_overview(missing_nested).is_err());
    }

    #[test]
    fn test_state_of_play_requires_header() {
        assert!(parse_state_of_play_evidence("- orphan").is_err());
        let evidence =
            parse_state_of_play_evidence("- orphan\n**Thème : ASMR**\n- a\nnote\nTheme: ASMR\n- b").unwrap();
        assert_eq!(evidence, vec![("ASMR".to_string(), vec!["a".to_string(), "b".to_string()])]);
    }
}
