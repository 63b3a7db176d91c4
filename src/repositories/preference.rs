//! Preference repository for per-user persisted values.

use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::preference;

/// Repository for hashed-key preference storage.
pub struct PreferenceRepository;

impl PreferenceRepository {
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<String>>
    where
        C: ConnectionTrait,
    {
        Ok(preference::Entity::find_by_id(key)
            .one(conn)
            .await?
            .map(|p| p.value))
    }

    /// Upsert a preference value.
    pub async fn set<C>(conn: &C, key: &str, value: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let model = preference::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };

        preference::Entity::insert(model)
            .on_conflict(
                OnConflict::column(preference::Column::Key)
                    .update_column(preference::Column::Value)
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        Ok(())
    }

    pub async fn remove<C>(conn: &C, key: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        preference::Entity::delete_by_id(key).exec(conn).await?;
        Ok(())
    }
}
