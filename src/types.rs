use clap::ValueEnum;

/// Literal printed in place of a value that could not be extracted
pub const SENTINEL: &str = "unknown";

/// One line of filter output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A raw field value, printed as-is
    Value(String),

    /// Placeholder rendered as the configured sentinel
    Fallback,
}

impl Line {
    pub fn value(text: impl Into<String>) -> Self {
        Line::Value(text.into())
    }

    /// Render this line, substituting `sentinel` for fallbacks
    pub fn render<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Line::Value(text) => text,
            Line::Fallback => sentinel,
        }
    }
}

/// What a filter does when the document cannot be read, parsed, or has an
/// unexpected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Print a single sentinel line and exit successfully
    Sentinel,

    /// Print nothing and exit with a failure status
    #[value(name = "fail")]
    Propagate,
}

/// Configuration for a single filter invocation
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// How extraction failures are surfaced
    pub policy: FailurePolicy,

    /// Text printed for fallback lines
    pub sentinel: String,
}

impl FilterConfig {
    /// Defaults for the given extractor: its own failure policy and the
    /// standard sentinel
    pub fn for_extractor<E: crate::extract::Extractor>() -> Self {
        FilterConfig {
            policy: E::DEFAULT_POLICY,
            sentinel: SENTINEL.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }
}
