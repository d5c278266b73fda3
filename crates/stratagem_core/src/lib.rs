//! Core data types for the Stratagem recommendation synthesis core.
//!
//! This crate provides the domain model shared by every other crate: the
//! client [`Brief`], observed [`Trend`] signals, every deck subsection and the
//! [`Deck`] aggregate root. All records validate on construction and are
//! immutable afterwards.
//!
//! It also carries the provider request types, the [`SectionId`] catalog, the
//! [`StratagemConfig`] record and tracing initialisation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod brand;
mod brief;
mod config;
mod deck;
mod message;
mod plan;
mod request;
mod role;
mod section;
mod slide;
mod state_of_play;
mod telemetry;
mod trend;
mod validate;

pub use analysis::{Confidence, Hypothesis, Impact, Insight, Kpi, KpiTrend};
pub use brand::{BrandOverview, CompetitivePositioning, Persona, TOP_COMPETITOR_ACTIONS};
pub use brief::{Brief, BriefRecord};
pub use config::{LlmSettings, PromptSettings, SectionSettings, SlideSettings, StratagemConfig};
pub use deck::{Deck, DeckSections};
pub use message::Message;
pub use plan::{BudgetItem, Idea, Milestone};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use section::SectionId;
pub use slide::{LayoutId, SlideDescriptor};
pub use state_of_play::StateOfPlaySection;
pub use telemetry::init_tracing;
pub use trend::{Trend, TrendRecord, parse_iso_date};
