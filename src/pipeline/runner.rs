//! Pipeline runner — orchestrates stage execution over a record
//! collection.
//!
//! The [`Pipeline`] struct holds a statically-composed set of collaborator
//! implementations. Calling [`Pipeline::run`] filters the input records,
//! applies the fixed stage sequence (with optional stages gated by the
//! [`ScrubConfig`]), and notifies a [`PipelineObserver`] at each stage
//! boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all collaborator types, so the compiler
//! monomorphizes each combination into a unique concrete type. The
//! built-in adapters carry no per-record state; zero-sized ones (the
//! contraction expander, transliterator, symbol stripper, lemmatizer)
//! add zero bytes.
//!
//! # Ordering guarantees
//!
//! Stage order is fixed here and configuration never reorders it.
//! Per-record application is data-parallel over independent records but
//! collects in input order, so the result is identical to sequential
//! execution. Any collaborator failure aborts the whole run; there is no
//! per-record isolation and a failed run yields no output collection.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::clean::{platform, structural};
use crate::error::{CollaboratorError, PipelineError};
use crate::nlp::contractions::RegexContractionExpander;
use crate::nlp::lemma::RuleVerbLemmatizer;
use crate::nlp::markup::HtmlMarkupStripper;
use crate::nlp::spelling::SymSpellCorrector;
use crate::nlp::stemming::SnowballStemmer;
use crate::nlp::stopwords::LexiconStopwordRemover;
use crate::nlp::symbols::PictographStripper;
use crate::nlp::translit::AsciiTransliterator;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_ACCENTS, STAGE_CONTRACTIONS,
    STAGE_ENTRY_FILTER, STAGE_EXIT_FILTER, STAGE_LOWERCASE, STAGE_MARKUP, STAGE_NORMAL_FORM,
    STAGE_PLATFORM, STAGE_PUNCTUATION, STAGE_SPELLING, STAGE_STOPWORDS, STAGE_STRUCTURAL,
    STAGE_SYMBOLS, STAGE_TRIM, STAGE_WHITESPACE,
};
use crate::pipeline::traits::{
    ContractionExpander, Lemmatizer, MarkupStripper, SpellCorrector, Stemmer, StopwordRemover,
    SymbolStripper, Transliterator,
};
use crate::types::{NormalizeForm, RawRecord, Record, ScrubConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed collaborator container
// ============================================================================

/// A cleaning pipeline composed of concrete collaborator implementations.
///
/// All type parameters have trait bounds enforced at the `impl` level, so
/// the struct itself is unconditionally constructible (useful for
/// builders).
///
/// # Type parameters
///
/// | Param  | Trait | Default impl |
/// |--------|-------|--------------|
/// | `Con`  | [`ContractionExpander`] | [`RegexContractionExpander`] |
/// | `Tr`   | [`Transliterator`] | [`AsciiTransliterator`] |
/// | `Sym`  | [`SymbolStripper`] | [`PictographStripper`] |
/// | `Stop` | [`StopwordRemover`] | [`LexiconStopwordRemover`] |
/// | `Mk`   | [`MarkupStripper`] | [`HtmlMarkupStripper`] |
/// | `Sp`   | [`SpellCorrector`] | [`SymSpellCorrector`] |
/// | `Lem`  | [`Lemmatizer`] | [`RuleVerbLemmatizer`] |
/// | `Stm`  | [`Stemmer`] | [`SnowballStemmer`] |
#[derive(Debug)]
pub struct Pipeline<Con, Tr, Sym, Stop, Mk, Sp, Lem, Stm> {
    pub contractions: Con,
    pub transliterator: Tr,
    pub symbols: Sym,
    pub stopwords: Stop,
    pub markup: Mk,
    pub speller: Sp,
    pub lemmatizer: Lem,
    pub stemmer: Stm,
}

/// Type alias for the all-defaults pipeline.
pub type StandardPipeline = Pipeline<
    RegexContractionExpander,
    AsciiTransliterator,
    PictographStripper,
    LexiconStopwordRemover,
    HtmlMarkupStripper,
    SymSpellCorrector,
    RuleVerbLemmatizer,
    SnowballStemmer,
>;

impl StandardPipeline {
    /// Build a pipeline with every built-in collaborator:
    /// - Regex-table contraction expansion
    /// - ASCII transliteration (unidecode tables)
    /// - Pictograph stripping by Unicode block
    /// - English stopword lexicon
    /// - HTML text extraction with single-space joins
    /// - SymSpell correction (identity until a dictionary is loaded)
    /// - Rule-based verb lemmatization
    /// - Snowball English stemming
    pub fn standard() -> Self {
        Pipeline {
            contractions: RegexContractionExpander::new(),
            transliterator: AsciiTransliterator::new(),
            symbols: PictographStripper::new(),
            stopwords: LexiconStopwordRemover::english(),
            markup: HtmlMarkupStripper::new(),
            speller: SymSpellCorrector::new(),
            lemmatizer: RuleVerbLemmatizer::new(),
            stemmer: SnowballStemmer::english(),
        }
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<Con, Tr, Sym, Stop, Mk, Sp, Lem, Stm> Pipeline<Con, Tr, Sym, Stop, Mk, Sp, Lem, Stm>
where
    Con: ContractionExpander,
    Tr: Transliterator,
    Sym: SymbolStripper,
    Stop: StopwordRemover,
    Mk: MarkupStripper,
    Sp: SpellCorrector,
    Lem: Lemmatizer,
    Stm: Stemmer,
{
    /// Run the pipeline over a record collection.
    ///
    /// Stages run in fixed order; `cfg` only gates whether an optional
    /// stage executes. The returned collection has pairwise-distinct,
    /// non-empty, left-trimmed texts, and every surviving record keeps
    /// the label of its input record unchanged. On any failure the whole
    /// run aborts and no collection is returned.
    pub fn run<L>(
        &self,
        records: Vec<RawRecord<L>>,
        cfg: &ScrubConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<Record<L>>, PipelineError> {
        // Entry filter: drop missing text, then exact duplicates.
        trace_stage!(STAGE_ENTRY_FILTER);
        observer.on_stage_start(STAGE_ENTRY_FILTER);
        let clock = StageClock::start();
        let before = records.len();
        let mut records = entry_filter(records);
        let report = StageReportBuilder::new(clock.elapsed())
            .records(records.len())
            .dropped(before - records.len())
            .build();
        observer.on_stage_end(STAGE_ENTRY_FILTER, &report);

        if cfg.platform_cleanup {
            apply_stage(&mut records, STAGE_PLATFORM, observer, |text| {
                Ok(platform::scrub_platform_artifacts(text))
            })?;
        }

        // First contraction pass, ahead of optional casing.
        apply_stage(&mut records, STAGE_CONTRACTIONS, observer, |text| {
            self.contractions.expand(text)
        })?;

        if cfg.lowercase {
            apply_stage(&mut records, STAGE_LOWERCASE, observer, |text| {
                Ok(structural::lowercase_tokens(text))
            })?;
        }

        // Second contraction pass. Casing can reveal new contractible
        // forms; when it does not, the idempotent expander makes this a
        // no-op.
        apply_stage(&mut records, STAGE_CONTRACTIONS, observer, |text| {
            self.contractions.expand(text)
        })?;

        if cfg.normalize_accents {
            apply_stage(&mut records, STAGE_ACCENTS, observer, |text| {
                self.transliterator.to_ascii(text)
            })?;
        }

        if cfg.strip_punctuation {
            apply_stage(&mut records, STAGE_PUNCTUATION, observer, |text| {
                Ok(structural::strip_punctuation(text))
            })?;
        }

        if cfg.strip_symbols {
            apply_stage(&mut records, STAGE_SYMBOLS, observer, |text| {
                self.symbols.strip_symbols(text)
            })?;
        }

        if cfg.strip_stopwords {
            apply_stage(&mut records, STAGE_STOPWORDS, observer, |text| {
                self.stopwords.remove_stopwords(text)
            })?;
        }

        // Mandatory structural cleanup.
        apply_stage(&mut records, STAGE_MARKUP, observer, |text| {
            self.markup.extract_text(text)
        })?;
        apply_stage(&mut records, STAGE_STRUCTURAL, observer, |text| {
            Ok(structural::strip_digit_runs(&structural::normalize_breaks(text)))
        })?;

        if cfg.correct_spelling {
            apply_stage(&mut records, STAGE_SPELLING, observer, |text| {
                self.speller.correct(text)
            })?;
        }

        match cfg.normalize_form {
            NormalizeForm::None => {}
            NormalizeForm::Lemmatize => {
                apply_stage(&mut records, STAGE_NORMAL_FORM, observer, |text| {
                    map_tokens(text, |token| self.lemmatizer.lemmatize(token))
                })?;
            }
            NormalizeForm::Stem => {
                apply_stage(&mut records, STAGE_NORMAL_FORM, observer, |text| {
                    map_tokens(text, |token| self.stemmer.stem(token))
                })?;
            }
        }

        apply_stage(&mut records, STAGE_WHITESPACE, observer, |text| {
            Ok(structural::collapse_whitespace(text))
        })?;

        // Exit filter: post-processing may have produced new duplicates
        // or records that trim to nothing.
        trace_stage!(STAGE_EXIT_FILTER);
        observer.on_stage_start(STAGE_EXIT_FILTER);
        let clock = StageClock::start();
        let before = records.len();
        records = exit_filter(records);
        let report = StageReportBuilder::new(clock.elapsed())
            .records(records.len())
            .dropped(before - records.len())
            .build();
        observer.on_stage_end(STAGE_EXIT_FILTER, &report);

        apply_stage(&mut records, STAGE_TRIM, observer, |text| {
            Ok(text.trim_start().to_string())
        })?;

        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Stage application helpers
// ---------------------------------------------------------------------------

/// Apply a pure text transformation to every record, in parallel,
/// collecting in input order. A failure on any record aborts the stage.
fn apply_stage<L, O, F>(
    records: &mut [Record<L>],
    stage: &'static str,
    observer: &mut O,
    op: F,
) -> Result<(), PipelineError>
where
    O: PipelineObserver,
    F: Fn(&str) -> Result<String, CollaboratorError> + Send + Sync,
{
    trace_stage!(stage);
    observer.on_stage_start(stage);
    let clock = StageClock::start();

    let texts: Vec<&str> = records.iter().map(|record| record.text.as_str()).collect();
    let cleaned = texts
        .into_par_iter()
        .map(|text| op(text))
        .collect::<Result<Vec<String>, CollaboratorError>>()
        .map_err(|err| PipelineError::from_collaborator(stage, err))?;
    for (record, text) in records.iter_mut().zip(cleaned) {
        record.text = text;
    }

    let report = StageReportBuilder::new(clock.elapsed())
        .records(records.len())
        .build();
    observer.on_stage_end(stage, &report);
    Ok(())
}

/// Tokenize on whitespace, transform each token, re-join with single
/// spaces.
fn map_tokens<F>(text: &str, op: F) -> Result<String, CollaboratorError>
where
    F: Fn(&str) -> Result<String, CollaboratorError>,
{
    let mut tokens = Vec::new();
    for token in text.split_whitespace() {
        tokens.push(op(token)?);
    }
    Ok(tokens.join(" "))
}

/// Drop records with missing text, then exact duplicates by text
/// equality. First occurrence wins, input order is preserved.
fn entry_filter<L>(records: Vec<RawRecord<L>>) -> Vec<Record<L>> {
    let mut seen = FxHashSet::default();
    records
        .into_iter()
        .filter_map(|record| {
            let text = record.text?;
            seen.insert(text.clone()).then(|| Record {
                text,
                label: record.label,
            })
        })
        .collect()
}

/// Drop records whose text trims to empty, then duplicates by text
/// equality. First occurrence wins. The key is the left-trimmed text,
/// which is exactly what the trim stage will leave behind, so output
/// texts stay pairwise distinct.
fn exit_filter<L>(records: Vec<Record<L>>) -> Vec<Record<L>> {
    let mut seen = FxHashSet::default();
    records
        .into_iter()
        .filter(|record| {
            !record.text.trim().is_empty() && seen.insert(record.text.trim_start().to_string())
        })
        .collect()
}

// ============================================================================
// PipelineBuilder — fluent construction with custom collaborators
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom
/// collaborators.
///
/// Starts from the all-defaults configuration and allows overriding
/// individual collaborators.
///
/// ```
/// # use textscrub::pipeline::runner::PipelineBuilder;
/// # use textscrub::nlp::stopwords::{LexiconStopwordRemover, StopwordFilter};
/// let pipeline = PipelineBuilder::new()
///     .stopword_remover(LexiconStopwordRemover::with_filter(
///         StopwordFilter::from_words(["umm", "uhh"]),
///     ))
///     .build();
/// ```
pub struct PipelineBuilder<
    Con = RegexContractionExpander,
    Tr = AsciiTransliterator,
    Sym = PictographStripper,
    Stop = LexiconStopwordRemover,
    Mk = HtmlMarkupStripper,
    Sp = SymSpellCorrector,
    Lem = RuleVerbLemmatizer,
    Stm = SnowballStemmer,
> {
    contractions: Con,
    transliterator: Tr,
    symbols: Sym,
    stopwords: Stop,
    markup: Mk,
    speller: Sp,
    lemmatizer: Lem,
    stemmer: Stm,
}

impl PipelineBuilder {
    /// Start building from the default collaborators.
    pub fn new() -> Self {
        PipelineBuilder {
            contractions: RegexContractionExpander::new(),
            transliterator: AsciiTransliterator::new(),
            symbols: PictographStripper::new(),
            stopwords: LexiconStopwordRemover::english(),
            markup: HtmlMarkupStripper::new(),
            speller: SymSpellCorrector::new(),
            lemmatizer: RuleVerbLemmatizer::new(),
            stemmer: SnowballStemmer::english(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Con, Tr, Sym, Stop, Mk, Sp, Lem, Stm> PipelineBuilder<Con, Tr, Sym, Stop, Mk, Sp, Lem, Stm> {
    /// Override the contraction expander.
    pub fn contractions<C: ContractionExpander>(
        self,
        c: C,
    ) -> PipelineBuilder<C, Tr, Sym, Stop, Mk, Sp, Lem, Stm> {
        PipelineBuilder {
            contractions: c,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }

    /// Override the transliterator.
    pub fn transliterator<T: Transliterator>(
        self,
        t: T,
    ) -> PipelineBuilder<Con, T, Sym, Stop, Mk, Sp, Lem, Stm> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: t,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }

    /// Override the symbol stripper.
    pub fn symbol_stripper<S: SymbolStripper>(
        self,
        s: S,
    ) -> PipelineBuilder<Con, Tr, S, Stop, Mk, Sp, Lem, Stm> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: s,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }

    /// Override the stopword remover.
    pub fn stopword_remover<S: StopwordRemover>(
        self,
        s: S,
    ) -> PipelineBuilder<Con, Tr, Sym, S, Mk, Sp, Lem, Stm> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: s,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }

    /// Override the markup stripper.
    pub fn markup_stripper<M: MarkupStripper>(
        self,
        m: M,
    ) -> PipelineBuilder<Con, Tr, Sym, Stop, M, Sp, Lem, Stm> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: m,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }

    /// Override the spell corrector.
    pub fn speller<S: SpellCorrector>(
        self,
        s: S,
    ) -> PipelineBuilder<Con, Tr, Sym, Stop, Mk, S, Lem, Stm> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: s,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }

    /// Override the lemmatizer.
    pub fn lemmatizer<M: Lemmatizer>(
        self,
        m: M,
    ) -> PipelineBuilder<Con, Tr, Sym, Stop, Mk, Sp, M, Stm> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: m,
            stemmer: self.stemmer,
        }
    }

    /// Override the stemmer.
    pub fn stemmer<S: Stemmer>(
        self,
        s: S,
    ) -> PipelineBuilder<Con, Tr, Sym, Stop, Mk, Sp, Lem, S> {
        PipelineBuilder {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: s,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Con, Tr, Sym, Stop, Mk, Sp, Lem, Stm> {
        Pipeline {
            contractions: self.contractions,
            transliterator: self.transliterator,
            symbols: self.symbols,
            stopwords: self.stopwords,
            markup: self.markup,
            speller: self.speller,
            lemmatizer: self.lemmatizer,
            stemmer: self.stemmer,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
