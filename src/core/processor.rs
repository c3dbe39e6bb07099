//! Per-language extraction and the pipeline that ties a selection to a key.

use std::{ops::Range, path::PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::{
    ExtractError,
    call::{build_call, wrap_erb_output},
    classify::{Region, classify},
    document::{Document, KeyPrompt},
    extract::{Grammar, PlaceholderMap, extract},
    locale::{BaseFileIndex, KeyAction, LocaleStore, merge_write},
    paths::LocaleLayout,
    slug::suggest_key,
};

/// What a processor made of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    /// Value stored in the locale file, with `%{slug}` placeholders.
    pub value: String,
    pub placeholders: PlaceholderMap,
    /// The call must be wrapped in `<%= %>` to render.
    pub wrap_output: bool,
}

/// Turns a selection of one source language into a locale value.
pub trait Processor: Send + Sync {
    fn language(&self) -> &'static str;

    fn prepare(&self, text: &str, selection: Range<usize>) -> Prepared;
}

/// `.rb` files: Ruby string interpolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyProcessor;

/// `.erb` templates: markup text, or Ruby inside a code tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErbProcessor;

impl Processor for RubyProcessor {
    fn language(&self) -> &'static str {
        "rb"
    }

    fn prepare(&self, text: &str, selection: Range<usize>) -> Prepared {
        prepare_script(&text[selection])
    }
}

impl Processor for ErbProcessor {
    fn language(&self) -> &'static str {
        "erb"
    }

    fn prepare(&self, text: &str, selection: Range<usize>) -> Prepared {
        match classify(text, selection.start) {
            Region::Code => prepare_script(&text[selection]),
            Region::Markup => {
                let extraction = extract(&text[selection], Grammar::markup());
                Prepared {
                    value: extraction.text,
                    placeholders: extraction.placeholders,
                    wrap_output: true,
                }
            }
        }
    }
}

fn prepare_script(selected: &str) -> Prepared {
    let extraction = extract(selected, Grammar::script());
    Prepared {
        value: strip_quotes(&extraction.text).to_string(),
        placeholders: extraction.placeholders,
        wrap_output: false,
    }
}

/// Remove one pair of matching surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

static RUBY: RubyProcessor = RubyProcessor;
static ERB: ErbProcessor = ErbProcessor;

/// Processor registered for a file extension.
pub fn processor_for(extension: &str) -> Option<&'static dyn Processor> {
    match extension {
        "rb" => Some(&RUBY),
        "erb" => Some(&ERB),
        _ => None,
    }
}

/// Everything an extraction reads besides the document.
#[derive(Clone, Copy)]
pub struct ExtractContext<'a> {
    pub layout: &'a LocaleLayout,
    pub store: &'a LocaleStore,
    pub base_files: &'a BaseFileIndex,
}

/// Result of one extraction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutcome {
    /// Key without the locale segment, as used in the call.
    pub key: String,
    /// An existing entry with the same value was found.
    pub reused: bool,
    pub locale_file: PathBuf,
    pub value: String,
    pub replacement: String,
    /// Set when the locale file was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<KeyAction>,
    #[serde(skip)]
    pub placeholders: PlaceholderMap,
}

/// Extract the selection of `document` into a locale entry.
///
/// The document is always edited in memory; `apply` controls whether the
/// locale file is written. The key prompt is only consulted when no existing
/// entry holds the same value, and nothing is written before it answered.
pub async fn run_extraction(
    ctx: ExtractContext<'_>,
    document: &mut dyn Document,
    prompt: &mut dyn KeyPrompt,
    apply: bool,
) -> Result<ExtractionOutcome, ExtractError> {
    let language = document.language().unwrap_or_default().to_string();
    let processor = processor_for(&language)
        .ok_or_else(|| ExtractError::UnsupportedFileType(display_language(&language)))?;
    let selection = document
        .selection()
        .ok_or(ExtractError::NoActiveSelection)?;

    let prepared = processor.prepare(document.text(), selection.clone());
    if prepared.value.trim().is_empty() {
        return Err(ExtractError::NoActiveSelection);
    }
    debug!(
        "Prepared {} selection: {:?} with {} placeholder(s)",
        processor.language(),
        prepared.value,
        prepared.placeholders.len()
    );

    ctx.store.wait_until_ready().await;
    let existing = ctx
        .base_files
        .key_for_text(&prepared.value)
        .or_else(|| ctx.store.key_for_text(&prepared.value));

    let (key, locale_file, reused, action) = match existing {
        Some(found) => {
            info!("Reusing existing key {}", found.key);
            (found.key, found.source_file, true, None)
        }
        None => {
            let path = document.path().to_path_buf();
            let locale_file = ctx.layout.locale_file(&path)?;
            let suffix = prompt
                .ask(&suggest_key(&prepared.value))
                .map(|answer| answer.trim().to_string())
                .filter(|answer| !answer.is_empty())
                .ok_or(ExtractError::UserCancelled)?;
            let key = ctx.layout.build_key(&path, &suffix)?;

            let action = if apply {
                let action = merge_write(
                    &locale_file,
                    &ctx.layout.base_locale,
                    &key,
                    &prepared.value,
                )?;
                let full_key = format!("{}.{}", ctx.layout.base_locale, key);
                ctx.store.record(&full_key, &prepared.value, &locale_file);
                info!(
                    "{} {} in {}",
                    action.as_str(),
                    full_key,
                    locale_file.display()
                );
                Some(action)
            } else {
                None
            };
            (key, locale_file, false, action)
        }
    };

    let call = build_call(&key, &prepared.placeholders);
    let replacement = if prepared.wrap_output {
        wrap_erb_output(&call)
    } else {
        call
    };
    document.replace(selection, &replacement);

    Ok(ExtractionOutcome {
        key,
        reused,
        locale_file,
        value: prepared.value,
        replacement,
        action,
        placeholders: prepared.placeholders,
    })
}

fn display_language(language: &str) -> String {
    if language.is_empty() {
        "(no extension)".to_string()
    } else {
        format!(".{}", language)
    }
}
