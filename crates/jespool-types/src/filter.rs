/// Prefix that matches every job name
pub const DEFAULT_PREFIX: &str = "*";

/// Matching criteria for a job listing
///
/// Both fields are wildcard patterns (`*` matches any run, `?` matches one
/// character). An unset owner delegates the "current user" default to the
/// store; an unset prefix means [`DEFAULT_PREFIX`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub owner: Option<String>,
    pub prefix: Option<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}
