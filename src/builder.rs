use crate::error::MatchError;
use crate::matcher::{Matcher, Strategy};
use crate::utils::DEFAULT_ENUMERATION_LIMIT;

pub struct MatcherBuilder {
    strategy: Strategy,
    enumeration_limit: Option<usize>,
}

impl MatcherBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            enumeration_limit: None,
        }
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    pub fn enumeration_limit(mut self, limit: usize) -> Self {
        self.enumeration_limit = Some(limit);
        self
    }
    pub fn build(self) -> Result<Matcher, MatchError> {
        match self.enumeration_limit {
            Some(0) => Err(MatchError::InvalidLimit),
            Some(limit) => Ok(Matcher::with_limit(self.strategy, limit)),
            None => Ok(Matcher::with_limit(self.strategy, DEFAULT_ENUMERATION_LIMIT)),
        }
    }
}

impl Default for MatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
