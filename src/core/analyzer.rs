use anyhow::Result;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use super::calls::{rewrite_self, CallSiteMatcher, RegexCallMatcher};
use super::imports::ImportCollector;
use super::normalizer::CallNormalizer;
use super::scanner::SourceScanner;
use super::scope::{DefinitionRecognizer, ScopeTracker};
use super::CallGraph;

/// Drives one file scan: imports once, then per line the definition
/// recognizer (which moves the scope tracker) followed by call
/// extraction, then the normalizer pass over the finished graph.
///
/// Scanning never fails: read or capture problems are logged and the
/// result degrades to an empty or partial graph.
pub struct FileAnalyzer {
    import_collector: ImportCollector,
    recognizer: DefinitionRecognizer,
    call_matcher: Box<dyn CallSiteMatcher + Send + Sync>,
    normalizer: CallNormalizer,
}

impl FileAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_matcher(Box::new(RegexCallMatcher::new()?))
    }

    /// Build an analyzer around a custom call matcher.
    pub fn with_matcher(call_matcher: Box<dyn CallSiteMatcher + Send + Sync>) -> Result<Self> {
        Ok(Self {
            import_collector: ImportCollector::new()?,
            recognizer: DefinitionRecognizer::new()?,
            call_matcher,
            normalizer: CallNormalizer::new(),
        })
    }

    /// Scan a single file, best effort. A missing or unreadable path
    /// yields an empty graph and a warning.
    pub fn scan(&self, path: &Path) -> CallGraph {
        let module = module_name(path);
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), err);
                return CallGraph::new();
            }
        };
        self.scan_source(&module, &source)
    }

    /// Scan already-loaded source under a module name.
    pub fn scan_source(&self, module: &str, source: &str) -> CallGraph {
        let lines: Vec<&str> = source.lines().collect();

        let imports = self.import_collector.collect(lines.iter().copied());
        if !imports.is_empty() {
            println!(
                "Imports in {}: {} origin-qualified, {} plain, {} aliased",
                module,
                imports.import_origin.len(),
                imports.simple_imports.len(),
                imports.aliases.len()
            );
        }

        let mut tracker = ScopeTracker::new(module);
        let mut graph = CallGraph::new();

        for line in &lines {
            // Definition lines move the tracker and are not call sites.
            if self.recognizer.observe_line(line, &mut tracker) {
                continue;
            }

            let calls = self.call_matcher.find_calls(line);
            if calls.is_empty() {
                continue;
            }
            let scope_path = tracker.scope_path();
            let class = tracker.enclosing_class();
            for call in calls {
                graph.record(&scope_path, rewrite_self(call, class));
            }
        }

        self.normalizer.normalize(&mut graph);
        graph
    }

    /// Scan every source file under a directory root and merge the
    /// per-file graphs. Scans share no state, so they run in parallel.
    pub fn scan_all(&self, root_path: &Path) -> Result<CallGraph> {
        let files = SourceScanner::new().scan_directory(root_path)?;
        println!("Found {} files to scan", files.len());

        let graphs: Vec<CallGraph> = files.par_iter().map(|path| self.scan(path)).collect();

        let mut merged = CallGraph::new();
        for graph in graphs {
            merged.merge(graph);
        }
        Ok(merged)
    }
}

/// Module name for a source path: the file basename without extension.
fn module_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("module")
        .to_string()
}
