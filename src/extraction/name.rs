use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::extraction::surnames::{SurnameTable, DEFAULT_SURNAMES};
use crate::models::{NameCandidate, Script};

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 4;
/// Three syllables is the statistically dominant Korean full-name length.
pub const PREFERRED_NAME_CHARS: usize = 3;

lazy_static! {
    static ref HANGUL_RUN: Regex = Regex::new(r"[\u{ac00}-\u{d7a3}]+").unwrap();
    static ref HAN_RUN: Regex = Regex::new(r"[\u{4e00}-\u{9fff}]+").unwrap();
}

fn run_pattern(script: Script) -> &'static Regex {
    match script {
        Script::Hangul => &HANGUL_RUN,
        Script::Han => &HAN_RUN,
    }
}

/// One scan pass: which script to look for and which surnames anchor it.
#[derive(Debug, Clone)]
pub struct ScriptPass {
    pub script: Script,
    pub surnames: SurnameTable,
}

/// Ordered list of script passes. Pass order decides surname-match
/// priority, independent of where each script appears in the text.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub passes: Vec<ScriptPass>,
}

impl ExtractionConfig {
    /// Hangul strictly before hanja: Hangul names are the dominant case on
    /// the target envelopes.
    pub fn korean() -> Self {
        let passes = [Script::Hangul, Script::Han]
            .into_iter()
            .filter_map(|script| {
                DEFAULT_SURNAMES.table(script).map(|table| ScriptPass {
                    script,
                    surnames: table.clone(),
                })
            })
            .collect();
        ExtractionConfig { passes }
    }
}

/// Multi-stage, script-aware name disambiguation over recognized text.
///
/// Precedence: surname match (in pass order) > length preference (3 > 2 > 4)
/// > first occurrence. Absence of a name is a normal outcome, not an error.
pub struct NameExtractor {
    config: ExtractionConfig,
}

impl NameExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        NameExtractor { config }
    }

    pub fn with_default_tables() -> Self {
        Self::new(ExtractionConfig::korean())
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        let candidates = self.candidates(text);
        if candidates.is_empty() {
            debug!("No name candidates in recognized text");
            return None;
        }

        // Surname-anchored selection, one script pass at a time.
        for pass in &self.config.passes {
            for candidate in candidates.iter().filter(|c| c.script == pass.script) {
                let anchored = candidate
                    .text
                    .chars()
                    .next()
                    .is_some_and(|first| pass.surnames.contains(first));
                if anchored {
                    debug!("Surname-anchored {:?} match: {}", pass.script, candidate.text);
                    return Some(candidate.text.clone());
                }
            }
        }

        // No surname matched: prefer the dominant length, earliest first.
        for len in [PREFERRED_NAME_CHARS, MIN_NAME_CHARS, MAX_NAME_CHARS] {
            if let Some(candidate) = candidates
                .iter()
                .filter(|c| c.char_len == len)
                .min_by_key(|c| c.start)
            {
                debug!("Length-preference fallback ({} chars): {}", len, candidate.text);
                return Some(candidate.text.clone());
            }
        }

        // Unreachable in practice: every candidate is 2-4 characters, so the
        // length buckets above are exhaustive.
        candidates.into_iter().min_by_key(|c| c.start).map(|c| c.text)
    }

    /// Stage A: all candidates for the configured scripts, in order of
    /// appearance in the text.
    pub fn candidates(&self, text: &str) -> Vec<NameCandidate> {
        let mut out = Vec::new();
        for pass in &self.config.passes {
            for run in run_pattern(pass.script).find_iter(text) {
                split_run(run.as_str(), run.start(), pass.script, &mut out);
            }
        }
        out.sort_by_key(|c| c.start);
        out
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::with_default_tables()
    }
}

/// Decompose one maximal same-script run into candidates of 2-4 characters.
///
/// A run of 2-4 characters is a single candidate. Longer runs (name fused
/// with surrounding honorifics, e.g. "김민수입니다") are split into leading
/// chunks of the preferred length with a final chunk of 2-4 characters; the
/// arithmetic never strands a lone trailing character. An isolated single
/// character yields nothing.
fn split_run(run: &str, base: usize, script: Script, out: &mut Vec<NameCandidate>) {
    let chars: Vec<usize> = run.char_indices().map(|(byte, _)| byte).collect();
    let total = chars.len();
    let mut idx = 0;

    while total - idx >= MIN_NAME_CHARS {
        let remaining = total - idx;
        let take = if remaining <= MAX_NAME_CHARS {
            remaining
        } else {
            PREFERRED_NAME_CHARS
        };
        let byte_start = chars[idx];
        let byte_end = chars.get(idx + take).copied().unwrap_or(run.len());
        out.push(NameCandidate {
            text: run[byte_start..byte_end].to_string(),
            script,
            start: base + byte_start,
            char_len: take,
        });
        idx += take;
    }
}
