use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sizing of a [`QueryPool`](crate::QueryPool).
///
/// ```
/// use chainsql::{PoolConfig, QueryPool};
///
/// let config = PoolConfig::new().max_idle(16).text_capacity(256);
/// let pool = QueryPool::with_config(config)?;
/// assert_eq!(pool.config().max_idle, 16);
/// # Ok::<(), chainsql::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Initial byte capacity of a fresh statement buffer.
    pub text_capacity: usize,
    /// Initial capacity of a fresh argument list.
    pub args_capacity: usize,
    /// Maximum number of idle buffer sets kept for reuse.
    pub max_idle: usize,
    /// Released statement buffers larger than this are dropped.
    pub max_text_capacity: usize,
    /// Released argument lists larger than this are dropped.
    pub max_args_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            text_capacity: 8,
            args_capacity: 8,
            max_idle: 64,
            max_text_capacity: 4096,
            max_args_capacity: 256,
        }
    }
}

impl PoolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text_capacity(mut self, capacity: usize) -> Self {
        self.text_capacity = capacity;
        self
    }

    #[must_use]
    pub fn args_capacity(mut self, capacity: usize) -> Self {
        self.args_capacity = capacity;
        self
    }

    #[must_use]
    pub fn max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    #[must_use]
    pub fn max_text_capacity(mut self, capacity: usize) -> Self {
        self.max_text_capacity = capacity;
        self
    }

    #[must_use]
    pub fn max_args_capacity(mut self, capacity: usize) -> Self {
        self.max_args_capacity = capacity;
        self
    }

    /// Rejects limits that would make the pool drop every buffer it is handed back.
    pub fn validate(&self) -> Result<()> {
        if self.max_text_capacity < self.text_capacity {
            return Err(Error::InvalidConfig {
                field: "max_text_capacity",
                reason: format!(
                    "{} is smaller than text_capacity {}",
                    self.max_text_capacity, self.text_capacity
                ),
            });
        }
        if self.max_args_capacity < self.args_capacity {
            return Err(Error::InvalidConfig {
                field: "max_args_capacity",
                reason: format!(
                    "{} is smaller than args_capacity {}",
                    self.max_args_capacity, self.args_capacity
                ),
            });
        }
        Ok(())
    }
}
