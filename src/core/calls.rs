use anyhow::Result;
use regex::Regex;

/// Seam between scope tracking and call detection.
///
/// The default implementation is a regex heuristic; a real tokenizer
/// could be substituted here without touching the tracker or the graph.
pub trait CallSiteMatcher {
    /// All call-like captures on one line, in source order.
    fn find_calls<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// Regex-based call detection: a dotted identifier ending in a letter or
/// underscore, immediately followed by an open parenthesis.
pub struct RegexCallMatcher {
    call_pattern: Regex,
}

impl RegexCallMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            call_pattern: Regex::new(r"[A-Za-z0-9_.]*[A-Za-z_]+\(")?,
        })
    }
}

impl CallSiteMatcher for RegexCallMatcher {
    fn find_calls<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.call_pattern
            .find_iter(line)
            .map(|m| capture_call(line, m.start(), m.end() - 1))
            .collect()
    }
}

/// Capture a call from the identifier at `name_start` through the close
/// parenthesis balancing the open at `open_idx`. A line that ends before
/// balance yields the remainder of the line; the normalizer flags it.
fn capture_call(line: &str, name_start: usize, open_idx: usize) -> &str {
    let mut depth = 0usize;
    for (i, b) in line.as_bytes().iter().enumerate().skip(open_idx) {
        match *b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return &line[name_start..=i];
                }
            }
            _ => {}
        }
    }
    &line[name_start..]
}

/// Rewrite a leading `self` token to the enclosing class name, when one
/// exists. Identifier characters after `self` mean it is not the token
/// (`selfish(...)` stays untouched).
pub fn rewrite_self(call: &str, enclosing_class: Option<&str>) -> String {
    if let Some(class) = enclosing_class {
        if call.starts_with("self") {
            let boundary = match call.as_bytes().get(4) {
                Some(b) => !(b.is_ascii_alphanumeric() || *b == b'_'),
                None => true,
            };
            if boundary {
                return format!("{class}{}", &call[4..]);
            }
        }
    }
    call.to_string()
}
