//! Input line tokenization
//!
//! Splits one raw console line into an ordered sequence of
//! `(marker, argument)` pairs. The first pair always carries the empty
//! marker and holds the command name plus any positional text; every
//! recognized marker token (`/by`, `/at`, ...) opens a new pair whose
//! argument runs until the next marker or the end of the line.
//!
//! Tokenization never fails: tokens that do not match the marker form are
//! kept as literal argument text, and a token starting with `//` escapes
//! the marker form (one leading slash is stripped). Rejecting nonsense is
//! the job of command validation, not of the tokenizer.

use regex::Regex;

/// Tokenizer for raw console input lines.
pub struct Parser {
    marker: Regex,
    escape: Regex,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"^/\w+$").expect("marker pattern compiles"),
            escape: Regex::new(r"(^|\s)//").expect("escape pattern compiles"),
        }
    }

    /// Split a line into `(marker, argument)` pairs.
    ///
    /// A line with no recognized marker tokens comes back as the single
    /// pair `("", line)`, byte for byte. When markers are present, each
    /// argument is the raw text between two markers with surrounding
    /// whitespace trimmed. Markers are stored without their leading slash.
    pub fn parse(&self, line: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut marker: Option<&str> = None;
        let mut segment_start = 0;

        for (start, token) in tokens(line) {
            if !self.is_marker(token) {
                continue;
            }
            let segment = &line[segment_start..start];
            match marker {
                None => pairs.push((String::new(), self.unescape(segment.trim()))),
                Some(tag) => pairs.push((tag.to_string(), self.unescape(segment.trim()))),
            }
            marker = Some(&token[1..]);
            segment_start = start + token.len();
        }

        match marker {
            // No markers anywhere: the whole line, untrimmed.
            None => pairs.push((String::new(), self.unescape(line))),
            Some(tag) => pairs.push((tag.to_string(), self.unescape(line[segment_start..].trim()))),
        }
        pairs
    }

    fn is_marker(&self, token: &str) -> bool {
        !token.starts_with("//") && self.marker.is_match(token)
    }

    /// Rewrite `//tag` escapes back to literal `/tag` text.
    fn unescape(&self, segment: &str) -> String {
        self.escape.replace_all(segment, "${1}/").into_owned()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a first-pair argument into the command name and the default
/// (positional) argument that follows it.
pub fn split_name(argument: &str) -> (&str, &str) {
    let argument = argument.trim_start();
    match argument.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (argument, ""),
    }
}

/// Whitespace-delimited tokens of a line, with their byte offsets.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                out.push((s, &line[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push((s, &line[s..]));
    }
    out
}
