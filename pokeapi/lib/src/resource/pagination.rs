//! Raw limit/offset pagination parameters.

/// Page size used when none is given.
pub const DEFAULT_LIMIT: u32 = 20;

/// Limit/offset pair appended to list requests.
///
/// Values are passed through verbatim; the server decides how to clamp them.
///
/// ## Examples
///
/// ```rust
/// use pokeapi::Pagination;
///
/// assert_eq!(Pagination::new(5, 10).query(), "?limit=5&offset=10");
/// assert_eq!(Pagination::default().query(), "?limit=20&offset=0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// Maximum number of entries to return.
    pub limit: u32,
    /// Number of entries to skip.
    pub offset: u32,
}

impl Pagination {
    /// Creates a page of `limit` entries starting after `offset`.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Renders the query string, including the leading `?`.
    pub fn query(&self) -> String {
        format!("?limit={}&offset={}", self.limit, self.offset)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}
