use crate::{DEFAULT_SIZE, Policy};

/// Options for creating a [`Buffer`](crate::Buffer) in write mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Whether the buffer may reallocate when a write doesn't fit.
    pub policy: Policy,
    /// Initial capacity in bytes.
    pub size: usize,
}

impl BufferOptions {
    pub fn new(policy: Policy, size: usize) -> Self {
        Self { policy, size }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self::new(Policy::Growable, DEFAULT_SIZE)
    }
}

impl From<Policy> for BufferOptions {
    fn from(policy: Policy) -> Self {
        Self::default().with_policy(policy)
    }
}

impl From<(Policy, usize)> for BufferOptions {
    fn from((policy, size): (Policy, usize)) -> Self {
        Self::new(policy, size)
    }
}
