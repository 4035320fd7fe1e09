//! Keyword vocabulary: a static table mapping surface forms to canonical
//! apps, verbs, AI tasks, triggers, conditions and subjects.
//!
//! Matching runs a single Aho-Corasick automaton over the normalized prompt,
//! collects every overlapping hit, drops hits that violate their entry's
//! [`Boundary`] policy and keeps the longest hit at each position.

use crate::error::VocabularyError;
use aho_corasick::AhoCorasick;
use ahash::AHashSet;
use tracing::{error, trace};

pub mod entry;
pub mod table;

pub use entry::*;

/// A hit of one vocabulary entry in normalized text. Offsets are byte offsets
/// into the text passed to [`Vocabulary::find_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    pub entry: usize,
    pub start: usize,
    pub end: usize,
}

pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    automaton: Option<AhoCorasick>,
}

impl Vocabulary {
    /// Builds a vocabulary from explicit entries.
    ///
    /// Surface forms are normalized the same way prompts are, so they may be
    /// given in any case. Empty or repeated surface forms are rejected.
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, VocabularyError> {
        let mut seen = AHashSet::with_capacity(entries.len());
        let entries: Vec<VocabularyEntry> = entries
            .into_iter()
            .enumerate()
            .map(|(index, mut entry)| {
                entry.surface = normalize_surface(&entry.surface);
                if entry.surface.trim().is_empty() {
                    return Err(VocabularyError::EmptySurface { index });
                }
                if !seen.insert(entry.surface.clone()) {
                    return Err(VocabularyError::DuplicateSurface {
                        surface: entry.surface,
                    });
                }
                Ok(entry)
            })
            .collect::<Result<_, _>>()?;

        let automaton = if entries.is_empty() {
            None
        } else {
            let surfaces = entries.iter().map(|e| e.surface.as_str());
            Some(AhoCorasick::new(surfaces).map_err(|e| VocabularyError::Automaton(e.to_string()))?)
        };

        Ok(Self { entries, automaton })
    }

    /// The built-in French/English vocabulary.
    pub fn builtin() -> Self {
        Self::new(table::builtin_entries()).unwrap_or_else(|e| {
            error!(error = %e, "built-in vocabulary rejected, falling back to an empty one");
            Self::empty()
        })
    }

    /// A vocabulary that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            automaton: None,
        }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&VocabularyEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds all non-overlapping keyword hits in already-normalized text,
    /// ordered by position.
    pub fn find_matches(&self, text: &str) -> Vec<KeywordMatch> {
        let Some(ac) = self.automaton.as_ref() else {
            return Vec::new();
        };

        let mut candidates: Vec<KeywordMatch> = ac
            .find_overlapping_iter(text)
            .map(|m| KeywordMatch {
                entry: m.pattern().as_usize(),
                start: m.start(),
                end: m.end(),
            })
            .filter(|m| self.respects_boundary(text, m))
            .collect();

        // Leftmost first, longest first at the same start.
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut selected = Vec::with_capacity(candidates.len());
        let mut cursor = 0;
        for candidate in candidates {
            if candidate.start < cursor {
                continue;
            }
            trace!(
                surface = %self.entries[candidate.entry].surface,
                start = candidate.start,
                "keyword matched"
            );
            cursor = candidate.end;
            selected.push(candidate);
        }
        selected
    }

    fn respects_boundary(&self, text: &str, m: &KeywordMatch) -> bool {
        let starts_word = text[..m.start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        if !starts_word {
            return false;
        }
        match self.entries[m.entry].boundary {
            Boundary::Prefix => true,
            Boundary::Word => text[m.end..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric()),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Folds a character the way prompts are folded before matching: lowercase,
/// typographic apostrophes to `'`, non-breaking spaces to plain spaces.
pub(crate) fn fold_char(c: char) -> impl Iterator<Item = char> {
    let c = match c {
        '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
        '\u{00A0}' | '\u{202F}' => ' ',
        other => other,
    };
    c.to_lowercase()
}

fn normalize_surface(surface: &str) -> String {
    surface.chars().flat_map(fold_char).collect()
}
