use crate::{domain::requests::non_empty, errors::ServiceError, model::Menu};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[schema(example = "Lunch")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category is required"))]
    #[schema(example = "main")]
    pub category: String,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub category: Option<String>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

impl UpdateMenuRequest {
    pub fn apply_to(&self, menu: &mut Menu) {
        if let Some(name) = non_empty(&self.name) {
            menu.name = name.to_string();
        }
        if let Some(category) = non_empty(&self.category) {
            menu.category = category.to_string();
        }
        if self.start_date.is_some() {
            menu.start_date = self.start_date;
        }
        if self.end_date.is_some() {
            menu.end_date = self.end_date;
        }
    }
}

/// A menu's active range must start before it ends when both ends are set.
pub fn check_date_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), ServiceError> {
    match (start, end) {
        (Some(start), Some(end)) if start >= end => Err(ServiceError::invalid(
            "startDate must be before endDate",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn menu() -> Menu {
        let now = Utc::now();
        Menu {
            menu_id: 3,
            name: "Lunch".into(),
            category: "main".into(),
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn blank_strings_do_not_clear_fields() {
        let mut m = menu();
        UpdateMenuRequest {
            name: Some("   ".into()),
            category: Some("dessert".into()),
            ..Default::default()
        }
        .apply_to(&mut m);

        assert_eq!(m.name, "Lunch");
        assert_eq!(m.category, "dessert");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let now = Utc::now();
        assert!(check_date_range(Some(now), Some(now + Duration::days(1))).is_ok());
        assert!(check_date_range(Some(now), None).is_ok());
        assert!(matches!(
            check_date_range(Some(now), Some(now - Duration::hours(1))),
            Err(ServiceError::Validation(_))
        ));
    }
}
