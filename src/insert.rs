use crate::{bind::IntoBinds, query::Query};

impl Query {
    /// `INSERT INTO table (a, b)`, the column list is left out when `fields` is empty.
    pub fn insert_into<I, S>(mut self, table: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push("INSERT INTO ").push(table);
        let mut fields = fields.into_iter().peekable();
        if fields.peek().is_some() {
            self.push(" (").push_list(fields).push(")");
        }
        self
    }

    /// Appends one row of values.
    ///
    /// The first call opens the `VALUES` list, later calls add rows to it.
    ///
    /// ```
    /// let (sql, args) = chainsql::insert_into("users", ["name", "age"])
    ///     .values(("john", 30))
    ///     .values(("jane", 28))
    ///     .build();
    /// assert_eq!(sql, "INSERT INTO users (name, age) VALUES ($1, $2), ($3, $4)");
    /// assert_eq!(args.len(), 4);
    /// ```
    pub fn values<B: IntoBinds>(mut self, row: B) -> Self {
        if self.scope_contains(" VALUES ") {
            self.push(", (");
        } else {
            self.push(" VALUES (");
        }
        self.push_binds(row).push(")");
        self
    }
}
