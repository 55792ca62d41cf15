use crate::{bind::IntoBinds, query::Query};

/// Probe used to keep a single `WHERE` per statement.
const WHERE_PROBE: &str = " WHERE";

impl Query {
    /// `SELECT a, b`
    pub fn select<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push("SELECT ").push_list(exprs);
        self
    }

    pub fn from(mut self, table: &str) -> Self {
        self.push(" FROM ").push(table);
        self
    }

    /// Appends a predicate, opening the `WHERE` clause if needed.
    ///
    /// `expr` carries its own `?` markers, `binds` supplies their values.
    /// Predicates are not joined automatically, use [`and`](Self::and) or
    /// [`or`](Self::or) between them.
    ///
    /// ```
    /// let (sql, args) = chainsql::select(["id"])
    ///     .from("users")
    ///     .where_raw("age >= ?", 18)
    ///     .or()
    ///     .where_raw("role = ?", "admin")
    ///     .build();
    /// assert_eq!(sql, "SELECT id FROM users WHERE age >= $1 OR role = $2");
    /// assert_eq!(args.len(), 2);
    /// ```
    pub fn where_raw<B: IntoBinds>(mut self, expr: &str, binds: B) -> Self {
        self.open_where();
        self.push(expr).bind_args(binds);
        self
    }

    /// `col IN (?, ?, ...)`, or `col IN (NULL)` for an empty list, which matches no row.
    pub fn where_in<B: IntoBinds>(mut self, column: &str, values: B) -> Self {
        let values = values.into_binds();
        self.open_where();
        self.push(column).push(" IN (");
        if values.is_empty() {
            self.push("NULL");
        } else {
            self.push_binds(values);
        }
        self.push(")");
        self
    }

    /// `col NOT IN (?, ?, ...)`; an empty list excludes nothing and renders `1 = 1`.
    pub fn where_not_in<B: IntoBinds>(mut self, column: &str, values: B) -> Self {
        let values = values.into_binds();
        self.open_where();
        if values.is_empty() {
            self.push("1 = 1");
        } else {
            self.push(column)
                .push(" NOT IN (")
                .push_binds(values)
                .push(")");
        }
        self
    }

    fn open_where(&mut self) {
        if !self.scope_contains(WHERE_PROBE) {
            self.push(" WHERE ");
        }
    }

    pub fn and(mut self) -> Self {
        self.push(" AND ");
        self
    }

    pub fn or(mut self) -> Self {
        self.push(" OR ");
        self
    }

    pub fn order_by<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(" ORDER BY ").push_list(exprs);
        self
    }

    pub fn group_by<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(" GROUP BY ").push_list(exprs);
        self
    }

    pub fn having<B: IntoBinds>(mut self, expr: &str, binds: B) -> Self {
        self.push(" HAVING ").push(expr).bind_args(binds);
        self
    }

    pub fn returning<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(" RETURNING ").push_list(fields);
        self
    }

    pub fn union(mut self, query: Query) -> Self {
        self.push(" UNION ").push_query(query);
        self
    }

    pub fn union_all(mut self, query: Query) -> Self {
        self.push(" UNION ALL ").push_query(query);
        self
    }

    /// Prefixes the statement that follows with `WITH name AS (query) `.
    pub fn with(mut self, name: &str, query: Query) -> Self {
        self.push("WITH ")
            .push(name)
            .push(" AS (")
            .push_query(query)
            .push(") ");
        self.begin_scope();
        self
    }

    /// Appends `sql` verbatim and binds `binds` to the markers it contains.
    pub fn raw<B: IntoBinds>(mut self, sql: &str, binds: B) -> Self {
        self.push(sql).bind_args(binds);
        self
    }
}
