use crate::errors::ValidationError;

/// Number of results returned by a search when the caller gives no limit
pub const DEFAULT_SEARCH_LIMIT: u64 = 10;

/// Largest limit the database layer can bind (LIMIT is a signed 64-bit value)
const MAX_SEARCH_LIMIT: u64 = i64::MAX as u64;

/// Validated input for creating an item
///
/// `title` and `content` are guaranteed non-empty. Whitespace is kept as
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    title: String,
    description: Option<String>,
    content: String,
}

impl NewItem {
    pub fn new(
        title: String,
        description: Option<String>,
        content: String,
    ) -> Result<Self, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::EmptyField { field: "title" });
        }
        if content.is_empty() {
            return Err(ValidationError::EmptyField { field: "content" });
        }

        Ok(Self {
            title,
            description,
            content,
        })
    }

    pub fn into_parts(self) -> (String, Option<String>, String) {
        (self.title, self.description, self.content)
    }
}

/// Validated item identifier (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NotPositive { field: "id", value: id });
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated free-text search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
    limit: u64,
}

impl SearchQuery {
    /// Build a search request; a missing `limit` becomes [`DEFAULT_SEARCH_LIMIT`]
    pub fn new(query: String, limit: Option<u64>) -> Result<Self, ValidationError> {
        if query.is_empty() {
            return Err(ValidationError::EmptyField { field: "query" });
        }

        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if limit == 0 {
            return Err(ValidationError::NotPositive { field: "limit", value: 0 });
        }
        if limit > MAX_SEARCH_LIMIT {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                value: limit,
                max: MAX_SEARCH_LIMIT,
            });
        }

        Ok(Self { query, limit })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
