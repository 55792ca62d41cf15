use std::mem;

use tracing::trace;

use crate::{
    bind::{Bind, IntoBind, IntoBinds},
    dialect::{Dialect, HasDialect},
    pool::{Buffers, QueryPool},
    writer::{MARKER, number_placeholders},
};

/// A statement under construction: raw text plus the values bound to its markers.
///
/// Every `?` appended through [`push_bind`](Self::push_bind) pairs with one
/// entry of [`args`](Self::args), in order. Text pushed with
/// [`push`](Self::push) is copied as is, markers it contains included.
///
/// A query is consumed by one of its finalizers. When it came from a
/// [`QueryPool`], its buffers go back to the pool right after.
#[derive(Debug, Default)]
#[must_use]
pub struct Query {
    text: String,
    args: Vec<Bind>,
    /// Byte offset where the statement being written starts, past any `WITH` prefix.
    scope: usize,
    pool: Option<QueryPool>,
}

impl Query {
    /// An empty accumulator that does not belong to any pool.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(text: usize, args: usize) -> Self {
        Self {
            text: String::with_capacity(text),
            args: Vec::with_capacity(args),
            scope: 0,
            pool: None,
        }
    }

    pub(crate) fn from_pool(buffers: Buffers, pool: QueryPool) -> Self {
        Self {
            text: buffers.text,
            args: buffers.args,
            scope: 0,
            pool: Some(pool),
        }
    }

    // appending

    #[inline]
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        self.text.push_str(fragment);
        self
    }

    /// Appends one marker and binds `value` to it.
    #[inline]
    pub fn push_bind<T: IntoBind>(&mut self, value: T) -> &mut Self {
        self.text.push(MARKER);
        self.args.push(value.into_bind());
        self
    }

    /// Appends `?, ?, ...` with one marker per value, nothing for an empty sequence.
    pub fn push_binds<B: IntoBinds>(&mut self, values: B) -> &mut Self {
        for (index, value) in values.into_binds().into_iter().enumerate() {
            if index > 0 {
                self.text.push_str(", ");
            }
            self.push_bind(value);
        }
        self
    }

    /// Binds values for markers already present in text pushed earlier.
    pub fn bind_args<B: IntoBinds>(&mut self, values: B) -> &mut Self {
        self.args.extend(values.into_binds());
        self
    }

    /// Appends `items` separated by `, `.
    pub fn push_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.text.push_str(", ");
            }
            self.text.push_str(item.as_ref());
        }
        self
    }

    /// Splices `child` at the end of this query.
    ///
    /// The child's markers and args follow ours, so a single finalization
    /// numbers both in one sequence. Its buffers return to its pool here.
    pub fn push_query(&mut self, mut child: Query) -> &mut Self {
        self.text.push_str(&child.text);
        self.args.append(&mut child.args);
        self
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Appends `fragment` unless `probe` already occurs in the text.
    pub fn push_if_absent(&mut self, probe: &str, fragment: &str) -> &mut Self {
        if !self.contains(probe) {
            self.text.push_str(fragment);
        }
        self
    }

    /// Whether `needle` occurs in the current statement, ignoring `WITH` prefixes.
    pub(crate) fn scope_contains(&self, needle: &str) -> bool {
        self.text[self.scope..].contains(needle)
    }

    pub(crate) fn begin_scope(&mut self) {
        self.scope = self.text.len();
    }

    // inspecting

    /// The text accumulated so far, markers unresolved.
    pub fn sql(&self) -> &str {
        &self.text
    }

    pub fn args(&self) -> &[Bind] {
        &self.args
    }

    /// Number of `?` in the text, bound or not.
    pub fn marker_count(&self) -> usize {
        self.text.matches(MARKER).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.args.is_empty()
    }

    // finalizing

    /// Rewrites markers to `$1, $2, ...` and hands out the args.
    pub fn build(self) -> (String, Vec<Bind>) {
        self.build_with(Dialect::Postgres)
    }

    /// Like [`build`](Self::build) with the placeholder style of `D`.
    ///
    /// ```
    /// use chainsql::Sqlite;
    ///
    /// let (sql, _) = chainsql::select(["*"])
    ///     .from("users")
    ///     .where_raw("age > ? AND age < ?", (18, 65))
    ///     .build_for::<Sqlite>();
    /// assert_eq!(sql, "SELECT * FROM users WHERE age > ?1 AND age < ?2");
    /// ```
    pub fn build_for<D: HasDialect>(self) -> (String, Vec<Bind>) {
        self.build_with(D::DIALECT)
    }

    pub fn build_with(mut self, dialect: Dialect) -> (String, Vec<Bind>) {
        let sql = number_placeholders(&self.text, dialect);
        let args = self.take_args();
        trace!(
            kind = "numbered",
            ?dialect,
            len = sql.len(),
            args = args.len(),
            "query finalized"
        );
        (sql, args)
    }

    /// Text with markers left as `?`, plus the args.
    pub fn build_raw(mut self) -> (String, Vec<Bind>) {
        let sql = self.take_text();
        let args = self.take_args();
        trace!(kind = "raw", len = sql.len(), args = args.len(), "query finalized");
        (sql, args)
    }

    /// Text only, args dropped.
    pub fn into_sql(mut self) -> String {
        let sql = self.take_text();
        trace!(kind = "text", len = sql.len(), "query finalized");
        sql
    }

    // pooled buffers stay with the pool, callers get their own copy
    fn take_text(&mut self) -> String {
        match self.pool {
            Some(_) => self.text.clone(),
            None => mem::take(&mut self.text),
        }
    }

    fn take_args(&mut self) -> Vec<Bind> {
        match self.pool {
            Some(_) => self.args.drain(..).collect(),
            None => mem::take(&mut self.args),
        }
    }
}

impl Drop for Query {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.release(Buffers {
                text: mem::take(&mut self.text),
                args: mem::take(&mut self.args),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MySql, Postgres, Sqlite};

    #[test]
    fn test_push_bind_numbering() {
        let mut query = Query::new();
        query.push("a = ").push_bind(1).push(" AND b = ").push_bind("x");
        assert_eq!(query.sql(), "a = ? AND b = ?");
        assert_eq!(query.marker_count(), 2);
        let (sql, args) = query.build();
        assert_eq!(sql, "a = $1 AND b = $2");
        assert_eq!(args, vec![Bind::I32(1), Bind::Text("x".into())]);
    }

    #[test]
    fn test_n_binds_give_n_placeholders() {
        let mut query = Query::new();
        for i in 0..25 {
            query.push(" ").push_bind(i);
        }
        let (sql, args) = query.build();
        let expected: String = (1..=25).map(|i| format!(" ${i}")).collect();
        assert_eq!(sql, expected);
        assert_eq!(args.len(), 25);
    }

    #[test]
    fn test_ten_markers() {
        let mut query = Query::new();
        for i in 0..10 {
            query.push_bind(i);
        }
        let (sql, _) = query.build();
        assert_eq!(sql, "$1$2$3$4$5$6$7$8$9$10");
    }

    #[test]
    fn test_push_binds() {
        let mut query = Query::new();
        query.push("(").push_binds((1, "two", 3.0f64)).push(")");
        assert_eq!(query.sql(), "(?, ?, ?)");
        assert_eq!(query.args().len(), 3);

        let mut empty = Query::new();
        empty.push("(").push_binds(Vec::<i32>::new()).push(")");
        assert_eq!(empty.sql(), "()");
        assert!(empty.args().is_empty());
    }

    #[test]
    fn test_push_list() {
        let mut query = Query::new();
        query.push_list(["a", "b", "c"]);
        assert_eq!(query.sql(), "a, b, c");
    }

    #[test]
    fn test_push_query_numbering() {
        let mut child = Query::new();
        child.push(",").push_bind(2).push(",").push_bind(3);

        let mut parent = Query::new();
        parent.push_bind(1).push_query(child);
        let (sql, args) = parent.build();
        assert_eq!(sql, "$1,$2,$3");
        assert_eq!(args, vec![Bind::I32(1), Bind::I32(2), Bind::I32(3)]);
    }

    #[test]
    fn test_push_query_returns_child_to_pool() {
        let pool = QueryPool::new();
        let mut child = pool.acquire();
        child.push("SELECT ").push_bind(1);
        let mut parent = pool.acquire();
        parent.push("WITH x AS (").push_query(child).push(")");
        assert_eq!(pool.status().idle, 1);

        let (sql, args) = parent.build();
        assert_eq!(sql, "WITH x AS (SELECT $1)");
        assert_eq!(args.len(), 1);
        assert_eq!(pool.status().idle, 2);
    }

    #[test]
    fn test_push_if_absent() {
        let mut query = Query::new();
        query
            .push("SELECT 1")
            .push_if_absent(" WHERE", " WHERE ")
            .push("a")
            .push_if_absent(" WHERE", " WHERE ")
            .push(" AND b");
        assert_eq!(query.sql(), "SELECT 1 WHERE a AND b");
        assert!(query.contains("WHERE"));
        assert!(!query.contains("ORDER"));
    }

    #[test]
    fn test_build_raw_keeps_markers() {
        let mut query = Query::new();
        query.push("id = ").push_bind(7i64);
        let (sql, args) = query.build_raw();
        assert_eq!(sql, "id = ?");
        assert_eq!(args, vec![Bind::I64(7)]);
    }

    #[test]
    fn test_into_sql() {
        let mut query = Query::new();
        query.push("id = ").push_bind(7);
        assert_eq!(query.into_sql(), "id = ?");
    }

    #[test]
    fn test_build_for_dialects() {
        let make = || {
            let mut query = Query::new();
            query.push("a = ").push_bind(1).push(" OR b = ").push_bind(2);
            query
        };
        assert_eq!(make().build_for::<Postgres>().0, "a = $1 OR b = $2");
        assert_eq!(make().build_for::<Sqlite>().0, "a = ?1 OR b = ?2");
        assert_eq!(make().build_for::<MySql>().0, "a = ? OR b = ?");
    }

    #[test]
    fn test_unbalanced_markers_are_not_checked() {
        let mut query = Query::new();
        query.push("a = ? AND b = ").push_bind(1);
        let (sql, args) = query.build();
        assert_eq!(sql, "a = $1 AND b = $2");
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_pooled_finalize_returns_buffers() {
        let pool = QueryPool::new();
        let mut query = pool.acquire();
        query.push("SELECT ").push_bind(1);
        let (sql, args) = query.build_raw();
        assert_eq!(sql, "SELECT ?");
        assert_eq!(args.len(), 1);
        let status = pool.status();
        assert_eq!(status.idle, 1);

        let next = pool.acquire();
        assert!(next.is_empty());
    }
}
