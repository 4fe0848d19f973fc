//! Pattern-based exclusion engine.
//!
//! Exclusion patterns are classified once into typed rules, then every
//! candidate is evaluated against the full ordered rule list with a single
//! running verdict. There are no early returns: a negation can undo an
//! earlier exclusion, and a later exclusion can re-exclude after a negation.

use crate::types::{Candidate, PathKind};
use globset::{Glob, GlobMatcher};

/// One classified exclusion pattern.
#[derive(Debug, Clone)]
enum PatternRule {
    /// Bare name, no slash or wildcard. Matches the basename at any depth,
    /// or the exact relative path.
    Name(String),
    /// Contains a slash, no wildcard. Matches the exact relative path.
    Path(String),
    /// Wildcard basename glob such as `*.log`. File candidates only.
    ///
    /// `None` when the glob failed to compile; such a rule never matches.
    Glob(Option<GlobMatcher>),
    /// `base/*`: immediate children of `base`.
    Children(String),
    /// `base/**`: `base` itself and everything beneath it.
    Subtree(String),
    /// `!path`: re-includes `path` and everything beneath it, overriding any
    /// prior exclusion.
    Negate(String),
}

impl PatternRule {
    fn classify(pattern: &str) -> Self {
        if let Some(rest) = pattern.strip_prefix('!') {
            return PatternRule::Negate(rest.to_string());
        }
        if let Some(base) = pattern.strip_suffix("/**") {
            return PatternRule::Subtree(base.to_string());
        }
        if let Some(base) = pattern.strip_suffix("/*") {
            return PatternRule::Children(base.to_string());
        }
        if pattern.contains('*') || pattern.contains('?') {
            return PatternRule::Glob(Glob::new(pattern).ok().map(|g| g.compile_matcher()));
        }
        if pattern.contains('/') {
            return PatternRule::Path(pattern.to_string());
        }
        PatternRule::Name(pattern.to_string())
    }

    /// Whether this (non-negation) rule excludes the candidate.
    fn excludes(&self, candidate: &Candidate) -> bool {
        match self {
            PatternRule::Name(name) => candidate.name == *name || candidate.relative == *name,
            PatternRule::Path(path) => candidate.relative == *path,
            PatternRule::Glob(matcher) => {
                candidate.kind == PathKind::File
                    && matcher
                        .as_ref()
                        .is_some_and(|m| m.is_match(candidate.name.as_str()))
            }
            PatternRule::Children(base) => candidate
                .relative
                .strip_prefix(base.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|child| !child.is_empty() && !child.contains('/')),
            PatternRule::Subtree(base) => {
                candidate.relative == *base
                    || candidate
                        .relative
                        .strip_prefix(base.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            PatternRule::Negate(_) => false,
        }
    }

    /// Whether this negation rule re-includes the candidate.
    ///
    /// A directory that is an ancestor of the negated path is also
    /// re-included, otherwise a subtree exclusion above it would make the
    /// negated path unreachable during traversal.
    fn reincludes(&self, candidate: &Candidate) -> bool {
        let PatternRule::Negate(inc) = self else {
            return false;
        };
        if candidate.relative == *inc
            || candidate
                .relative
                .strip_prefix(inc.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
        {
            return true;
        }
        candidate.kind == PathKind::Dir
            && inc
                .strip_prefix(candidate.relative.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Evaluates candidates against an ordered exclusion pattern list.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    rules: Vec<PatternRule>,
}

impl ExcludeMatcher {
    /// Classifies each pattern string into a rule. Malformed patterns are
    /// kept as rules that never match; syntax is not validated.
    pub fn new(patterns: &[String]) -> Self {
        Self {
            rules: patterns.iter().map(|p| PatternRule::classify(p)).collect(),
        }
    }

    /// The single deterministic verdict for a candidate.
    pub fn is_excluded(&self, candidate: &Candidate) -> bool {
        let mut excluded = false;
        for rule in &self.rules {
            if rule.excludes(candidate) {
                excluded = true;
            } else if rule.reincludes(candidate) {
                excluded = false;
            }
        }
        excluded
    }
}
