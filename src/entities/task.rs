use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::backend::Annotation;
use crate::utils::datetime;

/// A mirrored task row. `uuid` is the reconciliation identity; `email`
/// scopes the row to its owning user. List-valued fields (`tags`,
/// `depends`, `annotations`) are stored as JSON text columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub email: String,
    /// Locally meaningful ordinal; negative for client-generated tasks
    /// the backend has not yet confirmed.
    pub ordinal: i64,
    pub description: String,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub status: String,
    pub tags: String,
    pub due: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub entry: Option<String>,
    pub wait: Option<String>,
    pub modified: Option<String>,
    pub depends: String,
    pub recur: Option<String>,
    pub rtype: Option<String>,
    pub annotations: String,
    pub urgency: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Tags decoded from the JSON column; decode failures degrade to empty.
    pub fn tag_list(&self) -> Vec<String> {
        serde_json::from_str(&self.tags).unwrap_or_default()
    }

    /// Dependency uuids decoded from the JSON column.
    ///
    /// These are weak references: an entry may name a task that is not in
    /// the loaded set, and callers must treat a missed lookup as an
    /// unknown dependency rather than an error.
    pub fn depends_list(&self) -> Vec<String> {
        serde_json::from_str(&self.depends).unwrap_or_default()
    }

    /// Annotations decoded from the JSON column.
    pub fn annotation_list(&self) -> Vec<Annotation> {
        serde_json::from_str(&self.annotations).unwrap_or_default()
    }

    /// A pending task whose due date falls strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == "pending" && datetime::is_overdue(self.due.as_deref(), today)
    }
}
