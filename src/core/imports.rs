use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Import statements found in one file. Built once per scan, immutable
/// afterwards, and consumed only for informational logging.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportRecord {
    /// `from X import Y` forms: imported name -> origin module.
    pub import_origin: HashMap<String, String>,
    /// Plain `import a, b` names, in source order.
    pub simple_imports: Vec<String>,
    /// `import X as Y` forms: imported name -> alias.
    pub aliases: HashMap<String, String>,
}

impl ImportRecord {
    pub fn is_empty(&self) -> bool {
        self.import_origin.is_empty() && self.simple_imports.is_empty() && self.aliases.is_empty()
    }
}

/// Recognizes import-style lines. The three checks are independent and
/// all run on every line; a line may match more than one (an aliased
/// `from` import feeds both the origin map and the alias map). Unmatched
/// lines are skipped, duplicate keys keep the last value.
pub struct ImportCollector {
    from_pattern: Regex,
    simple_pattern: Regex,
    alias_pattern: Regex,
}

impl ImportCollector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            from_pattern: Regex::new(r"from (?P<origin>.*) import (?P<names>.*)")?,
            simple_pattern: Regex::new(
                r"^import (?P<names>[A-Za-z0-9_.-]+(?:, [A-Za-z0-9_.-]+)*)",
            )?,
            alias_pattern: Regex::new(r"import (?P<name>.*) as (?P<alias>.*)")?,
        })
    }

    pub fn collect<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> ImportRecord {
        let mut record = ImportRecord::default();

        for line in lines {
            if let Some(caps) = self.from_pattern.captures(line) {
                let origin = &caps["origin"];
                for name in caps["names"].split(", ") {
                    record
                        .import_origin
                        .insert(name.to_string(), origin.to_string());
                }
            }

            if let Some(caps) = self.simple_pattern.captures(line) {
                for name in caps["names"].split(", ") {
                    record.simple_imports.push(name.to_string());
                }
            }

            if let Some(caps) = self.alias_pattern.captures(line) {
                record
                    .aliases
                    .insert(caps["name"].to_string(), caps["alias"].to_string());
            }
        }

        record
    }
}
