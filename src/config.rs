//! Parser limits

/// Configuration for the Unity parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    ///
    /// Parsing, validation and rendering all recurse once per nesting level,
    /// so without a depth limit a deep enough document overflows the stack.
    /// Only use this for trusted input.
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    pub(crate) const fn depth_exceeded(&self, depth: u16) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }

    pub(crate) const fn size_exceeded(&self, size: usize) -> bool {
        self.max_size > 0 && size > self.max_size
    }
}
