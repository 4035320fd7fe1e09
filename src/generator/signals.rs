use crate::vocabulary::{AiTask, SignalCategory, TriggerKind, Verb, Vocabulary, fold_char};
use std::ops::Range;
use tracing::debug;

/// A recognized keyword or phrase, resolved to its canonical meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub category: SignalCategory,
    /// The prompt text that matched, as written.
    pub matched: String,
    /// Byte range of the match in the prompt. Empty for fallback signals.
    pub span: Range<usize>,
    /// Index of the sentence the match belongs to.
    pub sentence: usize,
    /// For conditions: the clause following the keyword.
    pub clause: Option<Clause>,
}

/// The predicate introduced by a conditional keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub text: String,
    /// Byte offset in the prompt where the clause stops.
    pub end: usize,
}

impl Signal {
    fn synthetic(category: SignalCategory, matched: &str) -> Self {
        Self {
            category,
            matched: matched.to_string(),
            span: 0..0,
            sentence: 0,
            clause: None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.span.is_empty()
    }
}

/// The signal set used when a prompt contains nothing recognizable.
pub fn fallback_signals() -> Vec<Signal> {
    vec![
        Signal::synthetic(SignalCategory::Trigger(TriggerKind::Webhook), "webhook"),
        Signal::synthetic(SignalCategory::Ai(AiTask::Analyze), "analyse"),
        Signal::synthetic(
            SignalCategory::App {
                name: "Email".to_string(),
                default_verb: Verb::Send,
            },
            "email",
        ),
    ]
}

/// Lowercased copy of the prompt with a map back to the original offsets.
struct Normalized {
    text: String,
    /// `origin[i]` is the prompt offset of the char that produced byte `i`.
    origin: Vec<usize>,
    source_len: usize,
}

impl Normalized {
    fn new(prompt: &str) -> Self {
        let mut text = String::with_capacity(prompt.len());
        let mut origin = Vec::with_capacity(prompt.len());
        for (offset, c) in prompt.char_indices() {
            for folded in fold_char(c) {
                let before = text.len();
                text.push(folded);
                origin.extend(std::iter::repeat_n(offset, text.len() - before));
            }
        }
        Self {
            text,
            origin,
            source_len: prompt.len(),
        }
    }

    fn to_source(&self, offset: usize) -> usize {
        self.origin.get(offset).copied().unwrap_or(self.source_len)
    }

    /// End of the clause starting at `from`: the first punctuation mark or
    /// connective word ("alors", "then").
    fn clause_end(&self, from: usize) -> usize {
        let rest = &self.text[from..];
        let punctuation = rest
            .find([',', ';', ':', '.', '!', '?', '\n'])
            .unwrap_or(rest.len());
        let connective = [" alors ", " then "]
            .iter()
            .filter_map(|w| rest.find(w))
            .min()
            .unwrap_or(rest.len());
        from + punctuation.min(connective)
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\n')
}

/// Extracts the ordered signal set of a prompt. Signals follow their order of
/// first appearance in the text.
pub fn extract(vocabulary: &Vocabulary, prompt: &str, condition_limit: usize) -> Vec<Signal> {
    let normalized = Normalized::new(prompt);
    let matches = vocabulary.find_matches(&normalized.text);

    let mut signals = Vec::with_capacity(matches.len());
    let mut sentence = 0;
    let mut scanned = 0;
    for m in matches {
        sentence += normalized.text[scanned..m.start]
            .chars()
            .filter(|c| is_sentence_end(*c))
            .count();
        scanned = m.start;

        let Some(entry) = vocabulary.entry(m.entry) else {
            continue;
        };
        let span = normalized.to_source(m.start)..normalized.to_source(m.end);
        let clause = match entry.category {
            SignalCategory::Condition => {
                let end = normalized.clause_end(m.end);
                let source_end = normalized.to_source(end);
                let text = truncate(prompt[span.end..source_end].trim(), condition_limit);
                (!text.is_empty()).then_some(Clause {
                    text,
                    end: source_end,
                })
            }
            _ => None,
        };

        signals.push(Signal {
            category: entry.category.clone(),
            matched: prompt[span.clone()].to_string(),
            span,
            sentence,
            clause,
        });
    }

    debug!(count = signals.len(), "signals extracted");
    signals
}

/// Cuts `text` to at most `limit` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
