//! textscrub — configurable cleaning pipeline for user-generated text.
//!
//! The pipeline applies a fixed sequence of text transformations to a
//! collection of labeled records: platform artifact removal, contraction
//! expansion, casing, accent transliteration, punctuation/symbol/stopword
//! stripping, markup and structural cleanup, optional spelling
//! correction, lemmatization or stemming, whitespace normalization, and
//! de-duplication. Optional stages are gated by [`ScrubConfig`] flags;
//! stage order never changes. Labels ride along untouched.
//!
//! The lexical operations themselves are collaborator traits with
//! built-in adapters over established crates; any of them can be swapped
//! through [`PipelineBuilder`].
//!
//! # Example
//!
//! ```
//! use textscrub::{NoopObserver, Pipeline, RawRecord, ScrubConfig};
//!
//! let records = vec![
//!     RawRecord::new("<p>Hi   there</p>", 0),
//!     RawRecord::new("RT @bob hello http://x.com", 1),
//! ];
//! let cfg = ScrubConfig::new().with_platform_cleanup(true);
//! let cleaned = Pipeline::standard()
//!     .run(records, &cfg, &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(cleaned[0].text, "Hi there");
//! ```

pub mod clean;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use error::{BoxError, CollaboratorError, PipelineError};
pub use pipeline::observer::{
    NoopObserver, PipelineObserver, StageReport, StageTimingObserver,
};
#[cfg(feature = "tracing")]
pub use pipeline::observer::TracingObserver;
pub use pipeline::runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use types::{NormalizeForm, RawRecord, Record, ScrubConfig};
