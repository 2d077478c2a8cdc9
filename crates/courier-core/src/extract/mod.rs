//! Customer record extraction from free-form pasted text.
//!
//! Extraction anchors on phone numbers. A line-by-line primary pass reads the
//! name from the text before each number and the location from the text after
//! it, falling back to neighbouring lines and then to separator splitting. Only
//! when that pass finds nothing at all does a whole-text pass scan a fixed
//! character window around each number.

mod pattern;
pub mod stages;

pub use pattern::{remove_phones, strip_labels};

use crate::domain::{normalize_phone, CustomerRecord};
use pattern::PHONE_RE;
use tracing::debug;

pub const DEFAULT_WINDOW_CHARS: usize = 60;
pub const DEFAULT_NAME_WORDS: usize = 4;
pub const DEFAULT_LOCATION_WORDS: usize = 6;
pub const DEFAULT_LOOKAHEAD_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorSettings {
    /// Characters kept either side of a match in the whole-text pass.
    pub window_chars: usize,
    pub name_words: usize,
    pub location_words: usize,
    /// Non-blank lines searched below a phone line for a location.
    pub lookahead_lines: usize,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            window_chars: DEFAULT_WINDOW_CHARS,
            name_words: DEFAULT_NAME_WORDS,
            location_words: DEFAULT_LOCATION_WORDS,
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPass {
    Primary,
    Fallback,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub records: Vec<CustomerRecord>,
    pub pass: ExtractionPass,
    /// Phone-pattern matches dropped by normalization in the last pass run.
    pub discarded_matches: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    settings: ExtractorSettings,
}

/// Extracts customer records with the default settings.
pub fn extract_customers(text: &str) -> Vec<CustomerRecord> {
    Extractor::default().extract(text)
}

impl Extractor {
    pub fn new(settings: ExtractorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    pub fn extract(&self, text: &str) -> Vec<CustomerRecord> {
        self.extract_with_report(text).records
    }

    pub fn extract_with_report(&self, text: &str) -> ExtractionReport {
        let lines: Vec<&str> = text.lines().collect();

        let (records, discarded_matches) = self.primary_pass(&lines);
        if !records.is_empty() {
            debug!(
                records = records.len(),
                discarded = discarded_matches,
                "primary pass"
            );
            return ExtractionReport {
                records,
                pass: ExtractionPass::Primary,
                discarded_matches,
            };
        }

        let (records, discarded_matches) = self.fallback_pass(&lines);
        debug!(
            records = records.len(),
            discarded = discarded_matches,
            "fallback pass"
        );
        let pass = if records.is_empty() {
            ExtractionPass::None
        } else {
            ExtractionPass::Fallback
        };
        ExtractionReport {
            records,
            pass,
            discarded_matches,
        }
    }

    fn primary_pass(&self, lines: &[&str]) -> (Vec<CustomerRecord>, usize) {
        let mut records = Vec::new();
        let mut discarded = 0;

        for (index, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            for found in PHONE_RE.find_iter(line) {
                let Some(phone) = normalize_phone(found.as_str()) else {
                    discarded += 1;
                    continue;
                };

                let prefix = &line[..found.start()];
                let suffix = &line[found.end()..];

                let mut name = stages::name_before(prefix);
                let mut location = stages::location_after(suffix);

                if name.is_empty() {
                    name = stages::lookback_name(lines, index).unwrap_or_default();
                }
                if location.is_empty() {
                    location = stages::lookahead_location(
                        lines,
                        index,
                        self.settings.lookahead_lines,
                    )
                    .unwrap_or_default();
                }

                if name.is_empty() || location.is_empty() {
                    let pieces = stages::split_line(prefix, suffix);
                    if let Some((first, rest)) = pieces.split_first() {
                        if name.is_empty() {
                            name = first.clone();
                        }
                        if location.is_empty() && !rest.is_empty() {
                            location = rest.join(" ");
                        }
                    }
                }

                records.push(CustomerRecord::new(
                    &stages::sanitize_name(&name),
                    phone,
                    &stages::sanitize_location(&location),
                ));
            }
        }

        (records, discarded)
    }

    fn fallback_pass(&self, lines: &[&str]) -> (Vec<CustomerRecord>, usize) {
        let text = lines.join(" ");
        let mut records = Vec::new();
        let mut discarded = 0;

        for found in PHONE_RE.find_iter(&text) {
            let Some(phone) = normalize_phone(found.as_str()) else {
                discarded += 1;
                continue;
            };

            let (start, end) = stages::window_bounds(
                &text,
                found.start(),
                found.end(),
                self.settings.window_chars,
            );
            let (name, location) = stages::window_candidates(
                &text[start..found.start()],
                &text[found.end()..end],
                self.settings.name_words,
                self.settings.location_words,
            );

            if name.is_empty() {
                continue;
            }
            records.push(CustomerRecord::new(&name, phone, &location));
        }

        (records, discarded)
    }
}
