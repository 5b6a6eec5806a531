use anyhow::Result;
use regex::Regex;

/// Spaces per indentation level. The scan assumes consistent,
/// fixed-width indentation; anything else degrades heuristically.
pub const INDENT_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Global,
    Class,
    Function,
}

#[derive(Debug, Clone)]
pub struct ScopeFrame {
    pub kind: FrameKind,
    pub name: String,
}

/// Indentation-driven approximation of lexical nesting.
///
/// The tracker owns the scope stack and an indent counter for exactly one
/// file scan. The bottom frame is the module (file basename) and is never
/// popped, so the stack is never empty and every scope path starts with
/// the module name.
///
/// The counter follows the matched definitions, not the true block
/// structure: on a dedent it pops the difference and then steps one level
/// past the matched definition, and a definition one level shallower than
/// the counter replaces its sibling frame. Irregular indentation can
/// desynchronize the counter from real nesting; that is a known limit of
/// scanning without a grammar.
#[derive(Debug, Clone)]
pub struct ScopeTracker {
    stack: Vec<ScopeFrame>,
    current_indent: usize,
    indent_size: usize,
}

impl ScopeTracker {
    pub fn new(module: &str) -> Self {
        Self {
            stack: vec![ScopeFrame {
                kind: FrameKind::Global,
                name: module.to_string(),
            }],
            current_indent: 0,
            indent_size: INDENT_SIZE,
        }
    }

    /// Adjust the stack for a definition found at `leading_ws` columns of
    /// indentation, then push its frame.
    pub fn enter_definition(&mut self, kind: FrameKind, name: &str, leading_ws: usize) {
        let indent = leading_ws / self.indent_size;

        if indent < self.current_indent {
            let diff = self.current_indent - indent;
            for _ in 0..diff {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
                self.current_indent -= 1;
            }
            self.current_indent += 1;
        } else if indent + 1 == self.current_indent {
            // Sibling definition at the same nesting level.
            if self.stack.len() > 1 {
                self.stack.pop();
            }
        } else {
            self.current_indent += 1;
        }

        self.stack.push(ScopeFrame {
            kind,
            name: name.to_string(),
        });
    }

    /// Dot-joined names of every frame, module first.
    pub fn scope_path(&self) -> String {
        let names: Vec<&str> = self.stack.iter().map(|f| f.name.as_str()).collect();
        names.join(".")
    }

    /// Innermost frame whose name starts with an uppercase character.
    ///
    /// This is how class context is recovered without tracking frame
    /// kinds at call sites: conventionally-capitalized class names win,
    /// and the last (deepest) match is the enclosing class.
    pub fn enclosing_class(&self) -> Option<&str> {
        let mut class = None;
        for frame in &self.stack {
            if frame
                .name
                .chars()
                .next()
                .is_some_and(char::is_uppercase)
            {
                class = Some(frame.name.as_str());
            }
        }
        class
    }

    #[allow(dead_code)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Number of leading whitespace columns on a line.
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Matches class and function definition lines and feeds them to the
/// tracker. The class pattern is tried first; both are attempted on every
/// line (a line cannot match both in well-formed source).
pub struct DefinitionRecognizer {
    class_pattern: Regex,
    func_pattern: Regex,
}

impl DefinitionRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            class_pattern: Regex::new(r"class (?P<name>[A-Za-z_]+)(\(.*\))?:")?,
            func_pattern: Regex::new(r"def (?P<name>[A-Za-z_]+)")?,
        })
    }

    /// Apply any definition on `line` to the tracker. Returns true when
    /// the line was a definition, in which case the caller skips call
    /// extraction for it.
    pub fn observe_line(&self, line: &str, tracker: &mut ScopeTracker) -> bool {
        let leading = leading_whitespace(line);
        let mut matched = false;

        if let Some(caps) = self.class_pattern.captures(line) {
            tracker.enter_definition(FrameKind::Class, &caps["name"], leading);
            matched = true;
        }

        if let Some(caps) = self.func_pattern.captures(line) {
            tracker.enter_definition(FrameKind::Function, &caps["name"], leading);
            matched = true;
        }

        matched
    }
}
