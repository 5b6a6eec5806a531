pub mod analyzer;
pub mod calls;
pub mod graph;
pub mod imports;
pub mod normalizer;
pub mod scanner;
pub mod scope;

pub use analyzer::FileAnalyzer;
pub use calls::{CallSiteMatcher, RegexCallMatcher};
pub use graph::CallGraph;
pub use imports::{ImportCollector, ImportRecord};
pub use normalizer::{collapse_arguments, CallNormalizer, NormalizedCall};
pub use scanner::SourceScanner;
pub use scope::{DefinitionRecognizer, FrameKind, ScopeFrame, ScopeTracker};
