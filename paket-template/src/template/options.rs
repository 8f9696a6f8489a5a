//! Parser options.

/// Options controlling how lenient the parser is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject lines that don't fit a block's grammar instead of dropping them.
    ///
    /// Applies to `files` blocks. Off by default.
    pub strict_blocks: bool,
}

impl ParseOptions {
    /// Create options with the default, lenient behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict block parsing.
    pub fn with_strict_blocks(mut self, strict: bool) -> Self {
        self.strict_blocks = strict;
        self
    }
}
