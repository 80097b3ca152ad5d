use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::errors::InternalError;

/// SeaORM entity for the items table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Case-folded `title`, matched by search
    #[sea_orm(column_type = "Text")]
    pub title_search: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_search: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content_search: String,
    /// Unix timestamp in microseconds, assigned by the store
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn created_at_utc(&self) -> Result<DateTime<Utc>, InternalError> {
        DateTime::<Utc>::from_timestamp_micros(self.created_at).ok_or_else(|| {
            InternalError::parse(
                "created_at",
                format!("timestamp {} is out of range", self.created_at),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_timestamp(created_at: i64) -> Model {
        Model {
            id: 1,
            title: "Title".to_string(),
            description: None,
            content: "Content".to_string(),
            title_search: "title".to_string(),
            description_search: None,
            content_search: "content".to_string(),
            created_at,
        }
    }

    #[test]
    fn test_created_at_utc_converts_micros() {
        let model = model_with_timestamp(1_700_000_000_123_456);
        let created_at = model.created_at_utc().unwrap();

        assert_eq!(created_at.timestamp(), 1_700_000_000);
        assert_eq!(created_at.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_created_at_utc_rejects_out_of_range() {
        let model = model_with_timestamp(i64::MAX);
        let result = model.created_at_utc();

        assert!(matches!(result, Err(InternalError::Parse { .. })));
    }
}
