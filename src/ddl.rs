//! Schema and transaction statements. They carry no binds, finalize them
//! with [`Query::into_sql`].

use crate::query::Query;

impl Query {
    /// `CREATE TABLE name (col def, ...)`
    ///
    /// ```
    /// let sql = chainsql::create_table("users", ["id BIGSERIAL PRIMARY KEY", "name TEXT NOT NULL"])
    ///     .into_sql();
    /// assert_eq!(sql, "CREATE TABLE users (id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL)");
    /// ```
    pub fn create_table<I, S>(self, name: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.create_table_inner("CREATE TABLE ", name, columns)
    }

    pub fn create_table_if_not_exists<I, S>(self, name: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.create_table_inner("CREATE TABLE IF NOT EXISTS ", name, columns)
    }

    fn create_table_inner<I, S>(mut self, keyword: &str, name: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(keyword)
            .push(name)
            .push(" (")
            .push_list(columns)
            .push(")");
        self
    }

    pub fn drop_table(mut self, name: &str) -> Self {
        self.push("DROP TABLE ").push(name);
        self
    }

    pub fn drop_table_if_exists(mut self, name: &str) -> Self {
        self.push("DROP TABLE IF EXISTS ").push(name);
        self
    }

    /// `ALTER TABLE name`, followed by one or more column actions.
    pub fn alter_table(mut self, name: &str) -> Self {
        self.push("ALTER TABLE ").push(name).push(" ");
        self
    }

    pub fn add_column(self, definition: &str) -> Self {
        self.alter_action(&["ADD COLUMN ", definition])
    }

    pub fn drop_column(self, name: &str) -> Self {
        self.alter_action(&["DROP COLUMN ", name])
    }

    pub fn rename_column(self, from: &str, to: &str) -> Self {
        self.alter_action(&["RENAME COLUMN ", from, " TO ", to])
    }

    // the first action follows the space left by `alter_table`, the rest are comma separated
    fn alter_action(mut self, parts: &[&str]) -> Self {
        if !self.sql().ends_with(' ') {
            self.push(", ");
        }
        for part in parts {
            self.push(part);
        }
        self
    }

    // transactions

    pub fn begin(mut self) -> Self {
        self.push("BEGIN");
        self
    }

    pub fn commit(mut self) -> Self {
        self.push("COMMIT");
        self
    }

    pub fn rollback(mut self) -> Self {
        self.push("ROLLBACK");
        self
    }

    pub fn savepoint(mut self, name: &str) -> Self {
        self.push("SAVEPOINT ").push(name);
        self
    }

    pub fn release_savepoint(mut self, name: &str) -> Self {
        self.push("RELEASE SAVEPOINT ").push(name);
        self
    }

    pub fn rollback_to_savepoint(mut self, name: &str) -> Self {
        self.push("ROLLBACK TO SAVEPOINT ").push(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::Query;

    #[test]
    fn test_create_table() {
        let sql = Query::new()
            .create_table_if_not_exists("posts", ["id SERIAL", "title TEXT"])
            .into_sql();
        assert_eq!(sql, "CREATE TABLE IF NOT EXISTS posts (id SERIAL, title TEXT)");
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(Query::new().drop_table("posts").into_sql(), "DROP TABLE posts");
        assert_eq!(
            Query::new().drop_table_if_exists("posts").into_sql(),
            "DROP TABLE IF EXISTS posts"
        );
    }

    #[test]
    fn test_alter_table_single_action() {
        let sql = Query::new()
            .alter_table("users")
            .add_column("age INT NOT NULL DEFAULT 0")
            .into_sql();
        assert_eq!(sql, "ALTER TABLE users ADD COLUMN age INT NOT NULL DEFAULT 0");
    }

    #[test]
    fn test_alter_table_chained_actions() {
        let sql = Query::new()
            .alter_table("users")
            .add_column("age INT")
            .drop_column("nickname")
            .rename_column("mail", "email")
            .into_sql();
        assert_eq!(
            sql,
            "ALTER TABLE users ADD COLUMN age INT, DROP COLUMN nickname, RENAME COLUMN mail TO email"
        );
    }

    #[test]
    fn test_transactions() {
        assert_eq!(Query::new().begin().into_sql(), "BEGIN");
        assert_eq!(Query::new().commit().into_sql(), "COMMIT");
        assert_eq!(Query::new().rollback().into_sql(), "ROLLBACK");
        assert_eq!(Query::new().savepoint("sp1").into_sql(), "SAVEPOINT sp1");
        assert_eq!(
            Query::new().release_savepoint("sp1").into_sql(),
            "RELEASE SAVEPOINT sp1"
        );
        assert_eq!(
            Query::new().rollback_to_savepoint("sp1").into_sql(),
            "ROLLBACK TO SAVEPOINT sp1"
        );
    }
}
