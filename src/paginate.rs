use crate::query::Query;

/// A page request, 1-based. Both numbers are clamped to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: i64,
    per_page: i64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 15,
        }
    }
}

impl Paginator {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            current_page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.current_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Rows to skip, `None` on the first page.
    pub fn offset(&self) -> Option<i64> {
        if self.current_page > 1 {
            Some((self.current_page - 1).saturating_mul(self.per_page))
        } else {
            None
        }
    }
}

impl Query {
    pub fn limit(mut self, n: i64) -> Self {
        self.push(" LIMIT ").push_bind(n);
        self
    }

    pub fn offset(mut self, n: i64) -> Self {
        self.push(" OFFSET ").push_bind(n);
        self
    }

    /// ` OFFSET ? LIMIT ?` for the given 1-based page.
    ///
    /// The offset is left out on the first page.
    ///
    /// ```
    /// let (sql, args) = chainsql::select(["*"]).from("posts").paginate(3, 20).build();
    /// assert_eq!(sql, "SELECT * FROM posts OFFSET $1 LIMIT $2");
    /// assert_eq!(args, vec![chainsql::Bind::I64(40), chainsql::Bind::I64(20)]);
    /// ```
    pub fn paginate(self, page: i64, page_size: i64) -> Self {
        self.page(Paginator::new(page, page_size))
    }

    pub fn page(self, paginator: Paginator) -> Self {
        let query = match paginator.offset() {
            Some(offset) => self.offset(offset),
            None => self,
        };
        query.limit(paginator.limit())
    }
}
