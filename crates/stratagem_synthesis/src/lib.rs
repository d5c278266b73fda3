//! Section generation and orchestration for Stratagem.
//!
//! This crate turns a [`Brief`](stratagem_core::Brief) and its
//! [`Trend`](stratagem_core::Trend) signals into an assembled
//! [`Deck`](stratagem_core::Deck):
//!
//! - [`parsing`] converts free-form model output into typed records
//! - [`generators`] run one prompt per section and apply its fallback
//! - [`Recommender`] schedules the generators and assembles the deck
//!
//! Generators never fail because of the model. Provider errors, timeouts and
//! unparseable answers degrade into placeholders or empty sections; only
//! configuration problems, cancellation and broken deck invariants reach the
//! caller.
//!
//! # Example
//!
//! ```no_run
//! use stratagem_core::{Brief, SectionSettings};
//! use stratagem_interface::LlmPort;
//! use stratagem_synthesis::Recommender;
//!
//! # async fn run(llm: impl LlmPort, brief: Brief) -> stratagem_error::StratagemResult<()> {
//! let recommender = Recommender::new(llm, SectionSettings::default());
//! let deck = recommender.generate_recommendation(&brief, &[]).await?;
//! assert_eq!(deck.insights().len(), 3);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generators;
mod orchestrator;
pub mod parsing;

pub use orchestrator::Recommender;
pub use parsing::{ParseError, ParseResult};
