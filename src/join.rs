use chainsql_derive::JoinMethods;

use crate::query::Query;

/// The join flavours, each with a generated `Query` method taking `(table, on)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JoinMethods)]
pub enum JoinKind {
    #[join(method = "join")]
    Inner,
    Left,
    Right,
    Full,
    // no ON condition, see `Query::cross_join`
    #[join(ignore)]
    Cross,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => " JOIN ",
            JoinKind::Left => " LEFT JOIN ",
            JoinKind::Right => " RIGHT JOIN ",
            JoinKind::Full => " FULL JOIN ",
            JoinKind::Cross => " CROSS JOIN ",
        }
    }
}

impl Query {
    /// ` <KIND> JOIN table ON on`
    pub fn join_clause(mut self, kind: JoinKind, table: &str, on: &str) -> Self {
        self.push(kind.keyword()).push(table).push(" ON ").push(on);
        self
    }

    pub fn cross_join(mut self, table: &str) -> Self {
        self.push(JoinKind::Cross.keyword()).push(table);
        self
    }
}
