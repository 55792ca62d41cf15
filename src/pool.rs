//! Recycling of statement buffers.
//!
//! A [`QueryPool`] hands out [`Query`] accumulators backed by buffers that
//! earlier statements already grew. Finalizing (or dropping) a pooled query
//! clears its buffers, keeping their capacity, and gives them back.
//!
//! The pool is a cheap handle: clone it into whatever needs to build
//! statements. Acquire and release are safe from any thread.
//!
//! ```
//! use chainsql::QueryPool;
//!
//! let pool = QueryPool::new();
//!
//! let (sql, args) = pool.select(["name", "email"])
//!     .from("users")
//!     .where_raw("id = ?", 1)
//!     .build();
//! assert_eq!(sql, "SELECT name, email FROM users WHERE id = $1");
//! assert_eq!(args.len(), 1);
//!
//! // the buffers of the first statement are reused, already cleared
//! let next = pool.acquire();
//! assert!(next.is_empty());
//! assert_eq!(pool.status().reused, 1);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, info, trace};

use crate::bind::{Bind, IntoBinds};
use crate::config::PoolConfig;
use crate::error::Result;
use crate::query::Query;

/// The two growable buffers behind a [`Query`].
#[derive(Debug, Default)]
pub(crate) struct Buffers {
    pub(crate) text: String,
    pub(crate) args: Vec<Bind>,
}

impl Buffers {
    pub(crate) fn with_capacity(text: usize, args: usize) -> Self {
        Self {
            text: String::with_capacity(text),
            args: Vec::with_capacity(args),
        }
    }
}

/// A shared pool of statement buffers.
#[derive(Clone)]
pub struct QueryPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    config: PoolConfig,
    /// Only ever holds cleared buffers.
    idle: Mutex<Vec<Buffers>>,
    created: AtomicU64,
    reused: AtomicU64,
    discarded: AtomicU64,
}

/// Point in time counters of a pool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Buffer sets waiting to be reused.
    pub idle: usize,
    /// Buffer sets allocated because none were idle.
    pub created: u64,
    /// Acquisitions served from idle buffers.
    pub reused: u64,
    /// Released buffer sets that were dropped instead of kept.
    pub discarded: u64,
}

impl QueryPool {
    /// Create a pool with the default [`PoolConfig`].
    pub fn new() -> Self {
        Self::from_config(PoolConfig::default())
    }

    /// Create a pool after validating `config`.
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: PoolConfig) -> Self {
        info!(
            text_capacity = config.text_capacity,
            args_capacity = config.args_capacity,
            max_idle = config.max_idle,
            "query pool created"
        );
        Self {
            inner: Arc::new(PoolInner {
                idle: Mutex::new(Vec::with_capacity(config.max_idle.min(64))),
                config,
                created: AtomicU64::new(0),
                reused: AtomicU64::new(0),
                discarded: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.inner.config
    }

    /// Take an empty accumulator, reusing idle buffers when there are any.
    pub fn acquire(&self) -> Query {
        let reused = self.inner.idle.lock().pop();
        let buffers = match reused {
            Some(buffers) => {
                self.inner.reused.fetch_add(1, Ordering::Relaxed);
                trace!(
                    text_capacity = buffers.text.capacity(),
                    args_capacity = buffers.args.capacity(),
                    "query buffers reused"
                );
                buffers
            }
            None => {
                self.inner.created.fetch_add(1, Ordering::Relaxed);
                trace!("query buffers created");
                Buffers::with_capacity(
                    self.inner.config.text_capacity,
                    self.inner.config.args_capacity,
                )
            }
        };
        debug_assert!(buffers.text.is_empty() && buffers.args.is_empty());
        Query::from_pool(buffers, self.clone())
    }

    /// Clear `buffers` and keep them for the next [`acquire`](Self::acquire).
    pub(crate) fn release(&self, mut buffers: Buffers) {
        buffers.text.clear();
        buffers.args.clear();

        let config = &self.inner.config;
        if buffers.text.capacity() > config.max_text_capacity
            || buffers.args.capacity() > config.max_args_capacity
        {
            self.discard(&buffers, "buffers over the retention limit");
            return;
        }

        let mut idle = self.inner.idle.lock();
        if idle.len() >= config.max_idle {
            drop(idle);
            self.discard(&buffers, "pool is full");
            return;
        }
        idle.push(buffers);
    }

    fn discard(&self, buffers: &Buffers, reason: &'static str) {
        self.inner.discarded.fetch_add(1, Ordering::Relaxed);
        debug!(
            text_capacity = buffers.text.capacity(),
            args_capacity = buffers.args.capacity(),
            reason,
            "query buffers discarded"
        );
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            idle: self.inner.idle.lock().len(),
            created: self.inner.created.load(Ordering::Relaxed),
            reused: self.inner.reused.load(Ordering::Relaxed),
            discarded: self.inner.discarded.load(Ordering::Relaxed),
        }
    }

    /// Drop every idle buffer set.
    pub fn clear(&self) {
        self.inner.idle.lock().clear();
    }

    // statement factories

    /// Start a `SELECT` on a pooled accumulator.
    pub fn select<I, S>(&self, exprs: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acquire().select(exprs)
    }

    /// Start an `INSERT INTO` on a pooled accumulator.
    pub fn insert_into<I, S>(&self, table: &str, fields: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acquire().insert_into(table, fields)
    }

    /// Start a `DELETE FROM` on a pooled accumulator.
    pub fn delete_from(&self, table: &str) -> Query {
        self.acquire().delete_from(table)
    }

    /// Start an `UPDATE` on a pooled accumulator.
    pub fn update(&self, table: &str) -> Query {
        self.acquire().update(table)
    }

    /// Start a statement with a `WITH name AS (...)` prefix on a pooled accumulator.
    pub fn with(&self, name: &str, query: Query) -> Query {
        self.acquire().with(name, query)
    }

    /// Start a statement from raw text on a pooled accumulator.
    pub fn raw<B: IntoBinds>(&self, sql: &str, binds: B) -> Query {
        self.acquire().raw(sql, binds)
    }
}

impl Default for QueryPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueryPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryPool")
            .field("config", &self.inner.config)
            .field("status", &self.status())
            .finish()
    }
}
