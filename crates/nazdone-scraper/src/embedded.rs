//! Embedded variant data discovery in inline `<script>` bodies.
//!
//! Product pages ship their variant data in many shapes: a bare object
//! literal inside an inline script, a `window.__STATE__ = {...};`
//! assignment, and so on. Each recognised shape is an [`EmbeddedStrategy`];
//! [`locate_embedded_data`] runs them in a fixed order and returns the first
//! object that parses.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static GLOBAL_ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)window\.[A-Za-z0-9_]+\s*=\s*(\{.*\});").expect("valid regex")
});

/// A named heuristic for pulling a JSON object out of a script body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedStrategy {
    /// Script mentions `sizes` plus `colors` or `stockId`; the candidate
    /// spans from the first `{` to the last `}`.
    ContentSniff,
    /// `window.<ident> = {...};` global assignment; the candidate spans to
    /// the last `};`.
    GlobalAssignment,
}

impl EmbeddedStrategy {
    /// Strategies in the order they are tried against each script.
    pub const ORDERED: [EmbeddedStrategy; 2] = [
        EmbeddedStrategy::ContentSniff,
        EmbeddedStrategy::GlobalAssignment,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EmbeddedStrategy::ContentSniff => "content_sniff",
            EmbeddedStrategy::GlobalAssignment => "global_assignment",
        }
    }

    /// Returns the raw candidate text this strategy selects from `script`,
    /// if the script matches its pattern at all.
    #[must_use]
    pub fn candidate(self, script: &str) -> Option<&str> {
        match self {
            EmbeddedStrategy::ContentSniff => {
                let looks_like_variants = script.contains("sizes")
                    && (script.contains("colors") || script.contains("stockId"));
                if !looks_like_variants {
                    return None;
                }
                let start = script.find('{')?;
                let end = script.rfind('}')?;
                (start < end).then(|| &script[start..=end])
            }
            EmbeddedStrategy::GlobalAssignment => GLOBAL_ASSIGNMENT_RE
                .captures(script)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str()),
        }
    }

    /// Applies the strategy to one script and parses the candidate.
    ///
    /// Parse failures are swallowed: a malformed candidate is common and
    /// simply means this strategy found nothing usable here.
    #[must_use]
    pub fn locate(self, script: &str) -> Option<Value> {
        let candidate = self.candidate(script)?;
        match serde_json::from_str::<Value>(candidate) {
            Ok(value @ Value::Object(_)) => Some(value),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(
                    strategy = self.name(),
                    error = %e,
                    "embedded data candidate is not valid JSON; continuing scan"
                );
                None
            }
        }
    }
}

/// Scans `scripts` in document order and returns the first embedded JSON
/// object any strategy can parse.
///
/// For each script every strategy in [`EmbeddedStrategy::ORDERED`] is tried
/// before moving on to the next script. Returns `None` when nothing parses,
/// which is the normal outcome for most pages.
#[must_use]
pub fn locate_embedded_data<S: AsRef<str>>(scripts: &[S]) -> Option<Value> {
    scripts.iter().enumerate().find_map(|(index, script)| {
        EmbeddedStrategy::ORDERED.iter().find_map(|strategy| {
            let value = strategy.locate(script.as_ref())?;
            tracing::debug!(
                strategy = strategy.name(),
                script_index = index,
                "located embedded variant data"
            );
            Some(value)
        })
    })
}
