use crate::model::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub id: i32,
    pub number_of_guests: i32,
    pub table_number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Table> for TableResponse {
    fn from(value: Table) -> Self {
        TableResponse {
            id: value.table_id,
            number_of_guests: value.number_of_guests,
            table_number: value.table_number,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
