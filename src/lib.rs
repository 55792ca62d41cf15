//! Fluent SQL statement accumulation.
//!
//! A [`Query`] collects statement text and the values bound to its `?`
//! markers. Finalizing it rewrites the markers into positional placeholders:
//!
//! ```
//! let (sql, args) = chainsql::select(["name", "email"])
//!     .from("users")
//!     .where_raw("id = ?", 1)
//!     .build();
//! assert_eq!(sql, "SELECT name, email FROM users WHERE id = $1");
//! assert_eq!(args, vec![chainsql::Bind::I32(1)]);
//! ```
//!
//! The free functions below start statements on a fresh accumulator. Use a
//! [`QueryPool`] to recycle buffers across many statements.

mod bind;
mod config;
mod ddl;
mod dialect;
mod error;
mod insert;
mod join;
mod paginate;
mod pool;
mod query;
mod select;
mod update;
mod writer;

pub use bind::{Array, Bind, Binds, IntoBind, IntoBinds};
pub use config::PoolConfig;
pub use dialect::{Dialect, HasDialect, MySql, Postgres, Sqlite};
pub use error::{Error, Result};
pub use join::JoinKind;
pub use paginate::Paginator;
pub use pool::{PoolStatus, QueryPool};
pub use query::Query;
pub use writer::MARKER;

pub fn select<I, S>(exprs: I) -> Query
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Query::new().select(exprs)
}

pub fn insert_into<I, S>(table: &str, fields: I) -> Query
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Query::new().insert_into(table, fields)
}

pub fn delete_from(table: &str) -> Query {
    Query::new().delete_from(table)
}

pub fn update(table: &str) -> Query {
    Query::new().update(table)
}

pub fn with(name: &str, query: Query) -> Query {
    Query::new().with(name, query)
}

pub fn raw<B: IntoBinds>(sql: &str, binds: B) -> Query {
    Query::new().raw(sql, binds)
}

// schema

pub fn create_table<I, S>(name: &str, columns: I) -> Query
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Query::new().create_table(name, columns)
}

pub fn create_table_if_not_exists<I, S>(name: &str, columns: I) -> Query
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Query::new().create_table_if_not_exists(name, columns)
}

pub fn drop_table(name: &str) -> Query {
    Query::new().drop_table(name)
}

pub fn drop_table_if_exists(name: &str) -> Query {
    Query::new().drop_table_if_exists(name)
}

pub fn alter_table(name: &str) -> Query {
    Query::new().alter_table(name)
}

// transactions

pub fn begin() -> Query {
    Query::new().begin()
}

pub fn commit() -> Query {
    Query::new().commit()
}

pub fn rollback() -> Query {
    Query::new().rollback()
}

pub fn savepoint(name: &str) -> Query {
    Query::new().savepoint(name)
}

pub fn release_savepoint(name: &str) -> Query {
    Query::new().release_savepoint(name)
}

pub fn rollback_to_savepoint(name: &str) -> Query {
    Query::new().rollback_to_savepoint(name)
}
