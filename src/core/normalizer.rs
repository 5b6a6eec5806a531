use super::CallGraph;

/// Outcome of collapsing one captured call string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedCall {
    /// Argument span collapsed to an empty parenthesis pair.
    Collapsed(String),
    /// Already empty (or parenthesis-free); nothing to do.
    Unchanged,
    /// Open/close counts disagree; the capture is malformed and must be
    /// reported, not mutated.
    Unbalanced,
}

/// Collapse a call's outermost parenthesis span: everything from just
/// after the first `(` through the last `)` is dropped, so
/// `foo(a, bar(b), c)` becomes `foo()` and any text after the last close
/// parenthesis survives. An adjacent first pair is left alone, which
/// makes the pass idempotent.
pub fn collapse_arguments(call: &str) -> NormalizedCall {
    let mut opens = Vec::new();
    let mut closes = Vec::new();
    for (i, b) in call.bytes().enumerate() {
        match b {
            b'(' => opens.push(i),
            b')' => closes.push(i),
            _ => {}
        }
    }

    if opens.len() != closes.len() {
        return NormalizedCall::Unbalanced;
    }

    match (opens.first(), closes.first(), closes.last()) {
        (Some(&first_open), Some(&first_close), Some(&last_close))
            if first_close != first_open + 1 =>
        {
            NormalizedCall::Collapsed(format!(
                "{}{}",
                &call[..=first_open],
                &call[last_close..]
            ))
        }
        _ => NormalizedCall::Unchanged,
    }
}

/// Post-pass over a finished graph. Malformed captures are logged and
/// left in their pre-normalized form; a single bad entry never fails the
/// scan.
pub struct CallNormalizer;

impl CallNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize every call in place. Returns the number of rewritten
    /// entries.
    pub fn normalize(&self, graph: &mut CallGraph) -> usize {
        let mut rewritten = 0;
        graph.for_each_call_mut(|scope, call| match collapse_arguments(call) {
            NormalizedCall::Collapsed(collapsed) => {
                *call = collapsed;
                rewritten += 1;
            }
            NormalizedCall::Unchanged => {}
            NormalizedCall::Unbalanced => {
                eprintln!("Warning: unbalanced parentheses in capture '{call}' ({scope})");
            }
        });
        rewritten
    }
}

impl Default for CallNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
