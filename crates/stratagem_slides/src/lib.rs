//! Slide mapping and rendering for Stratagem decks.
//!
//! [`SlideMapper`] turns an assembled [`Deck`](stratagem_core::Deck) into an
//! ordered list of [`SlideDescriptor`](stratagem_core::SlideDescriptor)s. The
//! mapping is a pure function of the deck and the slide settings.
//!
//! Two [`SlideRenderer`](stratagem_interface::SlideRenderer) back-ends are
//! provided: [`JsonSlideRenderer`] for machine consumers and
//! [`MarkdownSlideRenderer`] for human review.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mapper;
mod render;

pub use mapper::{SlideMapper, format_amount};
pub use render::{JsonSlideRenderer, MarkdownSlideRenderer};
