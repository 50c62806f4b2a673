use serde::{Deserialize, Serialize};
use std::fmt;

/// One row produced by the external binary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub arg: String,
}

/// Sequence number attached to every issued invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct QueryTicket(pub u64);

impl QueryTicket {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for QueryTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// When a change of the search text turns into an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerPolicy {
    #[default]
    Debounced,
    EveryKeystroke,
}

impl TriggerPolicy {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TriggerPolicy::Debounced => "debounced",
            TriggerPolicy::EveryKeystroke => "every keystroke",
        }
    }
}

/// What to do with a query that is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyQueryPolicy {
    /// Clear the rows without spawning anything.
    #[default]
    ShortCircuit,
    /// Spawn the binary with a single `""` argument.
    PassEmpty,
    /// Spawn the binary with no argument at all.
    OmitArgument,
}

impl EmptyQueryPolicy {
    /// Argument for an invocation of the already-trimmed `query`.
    /// The outer `None` means no invocation happens at all.
    #[must_use]
    pub fn argument_for(self, query: &str) -> Option<Option<String>> {
        if !query.is_empty() {
            return Some(Some(query.to_string()));
        }
        match self {
            EmptyQueryPolicy::ShortCircuit => None,
            EmptyQueryPolicy::PassEmpty => Some(Some(String::new())),
            EmptyQueryPolicy::OmitArgument => Some(None),
        }
    }
}

/// How the binary is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationStyle {
    #[default]
    Direct,
    Shell,
}

/// Trims with the same notion of whitespace as `char::is_whitespace`.
#[must_use]
pub fn normalize_query(raw: &str) -> &str {
    raw.trim_matches(char::is_whitespace)
}

/// Which row field a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Arg,
    Title,
    Subtitle,
}

impl CopyField {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CopyField::Arg => "result",
            CopyField::Title => "title",
            CopyField::Subtitle => "subtitle",
        }
    }

    #[must_use]
    pub fn pick<'a>(&self, item: &'a ResultItem) -> &'a str {
        match self {
            CopyField::Arg => &item.arg,
            CopyField::Title => &item.title,
            CopyField::Subtitle => &item.subtitle,
        }
    }
}
