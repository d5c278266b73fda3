//! Deck to slide descriptor mapping.

use stratagem_core::{Deck, LayoutId, SlideDescriptor, SlideSettings};
use tracing::{debug, instrument};

const BULLET: &str = "• ";

/// Formats a budget amount: no decimals when whole, two otherwise.
///
/// # Examples
///
/// ```
/// use stratagem_slides::format_amount;
///
/// assert_eq!(format_amount(10000.0), "10000");
/// assert_eq!(format_amount(1250.5), "1250.50");
/// ```
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Maps a [`Deck`] to its slides.
///
/// | Slides | Title | Body |
/// |---|---|---|
/// | 1 | `1. Brief Reminder` | objectives as bullets, then the internal reformulation |
/// | 1 | `2. Brand Overview` | description paragraphs |
/// | one per theme | `3.{i} State of Play – {theme}` | evidence |
/// | one per idea | `4. Idea #{i}: {label}` | idea bullets |
/// | 1 | `5. Timeline` | `{deadline}: {label}` |
/// | 1 | `6. Budget` | `{category}: {currency}{estimate}` |
///
/// Single slides are emitted even when their section is empty.
///
/// # Examples
///
/// ```
/// use stratagem_core::SlideSettings;
/// use stratagem_slides::SlideMapper;
///
/// let mapper = SlideMapper::new(SlideSettings::new("$"));
/// assert_eq!(mapper.settings().currency_symbol(), "$");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideMapper {
    settings: SlideSettings,
}

impl SlideMapper {
    /// Creates a mapper with the given slide settings.
    pub fn new(settings: SlideSettings) -> Self {
        Self { settings }
    }

    /// Slide settings in use.
    pub fn settings(&self) -> &SlideSettings {
        &self.settings
    }

    /// Slides for `deck`, in presentation order.
    #[instrument(skip_all)]
    pub fn map(&self, deck: &Deck) -> Vec<SlideDescriptor> {
        let mut slides = vec![brief_slide(deck), brand_slide(deck)];
        slides.extend(state_of_play_slides(deck));
        slides.extend(idea_slides(deck));
        slides.push(timeline_slide(deck));
        slides.push(self.budget_slide(deck));
        debug!(count = slides.len(), "Mapped deck to slides");
        slides
    }

    fn budget_slide(&self, deck: &Deck) -> SlideDescriptor {
        let currency = self.settings.currency_symbol();
        let body = deck
            .budget()
            .iter()
            .map(|item| {
                format!(
                    "{}: {}{}",
                    item.category(),
                    currency,
                    format_amount(*item.estimate())
                )
            })
            .collect();
        SlideDescriptor::new(LayoutId::TitleAndBullets, "6. Budget", body)
    }
}

fn brief_slide(deck: &Deck) -> SlideDescriptor {
    let brief = deck.brief_reminder();
    let mut body: Vec<String> = brief
        .objectives()
        .iter()
        .map(|objective| format!("{}{}", BULLET, objective))
        .collect();
    if !brief.internal_reformulation().is_empty() {
        body.push(brief.internal_reformulation().clone());
    }
    SlideDescriptor::new(LayoutId::TitleAndText, "1. Brief Reminder", body)
}

fn brand_slide(deck: &Deck) -> SlideDescriptor {
    SlideDescriptor::new(
        LayoutId::TitleAndText,
        "2. Brand Overview",
        deck.brand_overview().description_paragraphs().clone(),
    )
}

fn state_of_play_slides(deck: &Deck) -> impl Iterator<Item = SlideDescriptor> + '_ {
    deck.state_of_play()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            SlideDescriptor::new(
                LayoutId::TitleAndBullets,
                format!("3.{} State of Play – {}", i + 1, section.theme()),
                section.evidence().clone(),
            )
        })
}

fn idea_slides(deck: &Deck) -> impl Iterator<Item = SlideDescriptor> + '_ {
    deck.ideas().iter().enumerate().map(|(i, idea)| {
        SlideDescriptor::new(
            LayoutId::TitleAndBullets,
            format!("4. Idea #{}: {}", i + 1, idea.label()),
            idea.bullets().clone(),
        )
    })
}

fn timeline_slide(deck: &Deck) -> SlideDescriptor {
    let body = deck
        .timeline()
        .iter()
        .map(|milestone| format!("{}: {}", milestone.deadline(), milestone.label()))
        .collect();
    SlideDescriptor::new(LayoutId::TitleAndBullets, "5. Timeline", body)
}
