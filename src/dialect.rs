/// Placeholder style used when a statement is finalized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `$1, $2, ...`
    #[default]
    Postgres,
    /// `?` markers are sent as is.
    MySql,
    /// `?1, ?2, ...`
    Sqlite,
}

impl Dialect {
    /// The character written in front of the ordinal, `None` when markers stay untouched.
    pub(crate) fn placeholder_prefix(self) -> Option<char> {
        match self {
            Dialect::Postgres => Some('$'),
            Dialect::Sqlite => Some('?'),
            Dialect::MySql => None,
        }
    }
}

pub trait HasDialect {
    const DIALECT: Dialect;
}

pub struct Postgres;

impl HasDialect for Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

pub struct MySql;

impl HasDialect for MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

pub struct Sqlite;

impl HasDialect for Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}
