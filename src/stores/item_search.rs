//! Case-insensitive substring matching over item text columns.
//!
//! A query `q` matches an item when `fold_case(q)` occurs literally inside the
//! folded title, description or content. The folded copies are written next
//! to the display text at insert time with the same [`fold_case`] applied to
//! the query, so both sides of the comparison share one Unicode fold on every
//! backend. SQL `LOWER` is not used: SQLite's folds ASCII only.
//!
//! Matching is pushed down as `col_search LIKE '%…%' ESCAPE '\'`, one
//! predicate per column, OR-ed together. A NULL description makes its
//! predicate NULL, which the database treats as no match.

use sea_orm::Condition;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};

use crate::types::db::item;

const LIKE_ESCAPE: char = '\\';

/// Case fold shared by stored search columns and queries
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Escape LIKE metacharacters so the query is matched literally
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// LIKE pattern matching any folded text that contains `query`
pub fn contains_pattern(query: &str) -> String {
    format!("%{}%", escape_like(&fold_case(query)))
}

fn folded_like(column: item::Column, pattern: &str) -> SimpleExpr {
    Expr::col((item::Entity, column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Filter matching items whose title, description or content contains `query`
pub fn search_condition(query: &str) -> Condition {
    let pattern = contains_pattern(query);

    Condition::any()
        .add(folded_like(item::Column::TitleSearch, &pattern))
        .add(folded_like(item::Column::DescriptionSearch, &pattern))
        .add(folded_like(item::Column::ContentSearch, &pattern))
}
