/// Configuration for the parser behavior and options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Whether memoized rules consult and fill the memo cache. Turning this
    /// off never changes what is accepted, only how much work is repeated.
    pub memoize: bool,
    /// Initial capacity of the lookahead buffer, in tokens.
    pub buffer_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            buffer_capacity: 16,
        }
    }
}

impl ParserConfig {
    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = ParserConfig::default()
            .with_memoization(false)
            .with_buffer_capacity(4);
        assert!(!config.memoize);
        assert_eq!(config.buffer_capacity, 4);
        assert!(ParserConfig::default().memoize);
    }
}
