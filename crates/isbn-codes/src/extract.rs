//! Code extraction from free text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{IdentifierCode, IsbnConfig};

/// Extracted code with byte position in the source text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedCode {
    pub code: IdentifierCode,
    pub start_index: usize,
    pub end_index: usize,
}

lazy_static! {
    // Runs of 9 to 17 digits, single hyphens or spaces between them, an
    // optional trailing X, and an optional ISBN label in front.
    static ref CODE_REGEX: Regex = Regex::new(
        r"(?i)(?:isbn(?:-?1[03])?[:\s]*)?\b(?P<code>\d(?:[- ]?\d){8,16}(?:[- ]?x)?)\b"
    ).unwrap();
}

/// Extract every code valid under `config` from text, in order of position.
///
/// A run that is not a valid code as a whole is retried as its 13, 10 and
/// 12 digit prefixes, as long as a separator follows the prefix. The rest of
/// the run is then scanned again. A run with no valid code is rescanned
/// from its first space, so a stray number cannot hide the code after it.
pub fn extract_codes(text: &str, config: &IsbnConfig) -> Vec<ExtractedCode> {
    let mut results = Vec::new();
    let mut pos = 0;

    while let Some(cap) = CODE_REGEX.captures_at(text, pos) {
        let Some(m) = cap.name("code") else {
            break;
        };
        match best_code(m.as_str(), config) {
            Some((code, len)) => {
                results.push(ExtractedCode {
                    code,
                    start_index: m.start(),
                    end_index: m.start() + len,
                });
                pos = m.start() + len;
            }
            // Nothing here: resume after the first space-separated group
            None => {
                pos = match m.as_str().find(' ') {
                    Some(space) => m.start() + space,
                    None => m.end(),
                }
            }
        }
    }

    results
}

/// Find the first valid code in a run, returning it with its byte length.
fn best_code(run: &str, config: &IsbnConfig) -> Option<(IdentifierCode, usize)> {
    // Byte offset just past each digit (or X)
    let ends: Vec<usize> = run
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .collect();
    let full = ends.len();

    let mut tried = Vec::with_capacity(4);
    for n in [13, 10, full, 12] {
        if n == 0 || n > full || tried.contains(&n) {
            continue;
        }
        tried.push(n);

        let end = ends[n - 1];
        if n < full && !run[end..].starts_with(|c: char| c == ' ' || c == '-') {
            continue;
        }

        let code = IdentifierCode::parse_with(&run[..end], config);
        if code.is_valid() && code.is_valid_for(config.validation_level) {
            return Some((code, end));
        }
    }

    None
}

/// Extract ISBNs from text as canonical strings
pub fn extract_isbns(text: &str) -> Vec<String> {
    extract_codes(text, &IsbnConfig::default())
        .into_iter()
        .map(|e| e.code.text().to_string())
        .collect()
}
