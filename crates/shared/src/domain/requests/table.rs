use crate::{domain::requests::non_zero, model::Table};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    #[validate(range(min = 1, message = "Number of guests must be at least 1"))]
    #[schema(example = 4)]
    pub number_of_guests: i32,

    #[validate(range(min = 1, message = "Table number must be at least 1"))]
    #[schema(example = 12)]
    pub table_number: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableRequest {
    #[validate(range(min = 0, message = "Number of guests cannot be negative"))]
    pub number_of_guests: Option<i32>,

    #[validate(range(min = 0, message = "Table number cannot be negative"))]
    pub table_number: Option<i32>,
}

impl UpdateTableRequest {
    pub fn apply_to(&self, table: &mut Table) {
        if let Some(guests) = non_zero(self.number_of_guests) {
            table.number_of_guests = guests;
        }
        if let Some(number) = non_zero(self.table_number) {
            table.table_number = number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn table() -> Table {
        let now = Utc::now();
        Table {
            table_id: 1,
            number_of_guests: 4,
            table_number: 7,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn zero_and_omitted_fields_keep_stored_values() {
        let mut t = table();
        UpdateTableRequest {
            number_of_guests: Some(0),
            table_number: None,
        }
        .apply_to(&mut t);

        assert_eq!(t.number_of_guests, 4);
        assert_eq!(t.table_number, 7);
    }

    #[test]
    fn present_fields_overwrite() {
        let mut t = table();
        UpdateTableRequest {
            number_of_guests: Some(6),
            table_number: None,
        }
        .apply_to(&mut t);

        assert_eq!(t.number_of_guests, 6);
        assert_eq!(t.table_number, 7);
    }
}
