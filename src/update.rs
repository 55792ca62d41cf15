use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::{
    bind::{Bind, IntoBind},
    query::Query,
};

impl Query {
    /// `UPDATE table SET `, to be followed by [`set`](Self::set).
    pub fn update(mut self, table: &str) -> Self {
        self.push("UPDATE ").push(table).push(" SET ");
        self
    }

    /// Appends `col = ?` assignments in the order they are given.
    ///
    /// A column given twice keeps its first position and its last value.
    /// Calling `set` again continues the same list.
    ///
    /// ```
    /// let (sql, args) = chainsql::update("users")
    ///     .set([("name", "john"), ("email", "john@example.com")])
    ///     .set([("active", true)])
    ///     .where_raw("id = ?", 7)
    ///     .build();
    /// assert_eq!(sql, "UPDATE users SET name = $1, email = $2, active = $3 WHERE id = $4");
    /// assert_eq!(args.len(), 4);
    /// ```
    pub fn set<I, K, V>(mut self, assignments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SmolStr>,
        V: IntoBind,
    {
        let assignments: IndexMap<SmolStr, Bind> = assignments
            .into_iter()
            .map(|(column, value)| (column.into(), value.into_bind()))
            .collect();
        if assignments.is_empty() {
            return self;
        }

        if !self.sql().ends_with(" SET ") {
            self.push(", ");
        }
        for (index, (column, value)) in assignments.into_iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.push(&column).push(" = ").push_bind(value);
        }
        self
    }

    pub fn delete_from(mut self, table: &str) -> Self {
        self.push("DELETE FROM ").push(table);
        self
    }
}
