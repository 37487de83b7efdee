use crate::{
    domain::requests::{non_empty, non_zero},
    model::Food,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[schema(example = "Margherita")]
    pub name: String,

    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,

    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    #[validate(range(min = 1, message = "Menu ID is required"))]
    #[schema(example = 1)]
    pub menu_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,

    pub image: Option<String>,

    #[validate(range(min = 0))]
    pub menu_id: Option<i32>,
}

impl UpdateFoodRequest {
    /// Returns the new menu id when the merge moved the food to another menu.
    pub fn apply_to(&self, food: &mut Food) -> Option<i32> {
        if let Some(name) = non_empty(&self.name) {
            food.name = name.to_string();
        }
        if let Some(price) = self.price.filter(|p| !p.is_zero()) {
            food.price = price;
        }
        if let Some(image) = non_empty(&self.image) {
            food.image = image.to_string();
        }
        match non_zero(self.menu_id) {
            Some(menu_id) if menu_id != food.menu_id => {
                food.menu_id = menu_id;
                Some(menu_id)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn food() -> Food {
        let now = Utc::now();
        Food {
            food_id: 1,
            name: "Soup".into(),
            price: dec!(4.50),
            image: "soup.png".into(),
            menu_id: 2,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn price_only_update_keeps_other_fields() {
        let mut f = food();
        let moved = UpdateFoodRequest {
            price: Some(dec!(5.25)),
            ..Default::default()
        }
        .apply_to(&mut f);

        assert_eq!(moved, None);
        assert_eq!(f.price, dec!(5.25));
        assert_eq!(f.name, "Soup");
        assert_eq!(f.image, "soup.png");
        assert_eq!(f.menu_id, 2);
    }

    #[test]
    fn zero_price_and_zero_menu_are_ignored() {
        let mut f = food();
        let moved = UpdateFoodRequest {
            price: Some(Decimal::ZERO),
            menu_id: Some(0),
            ..Default::default()
        }
        .apply_to(&mut f);

        assert_eq!(moved, None);
        assert_eq!(f.price, dec!(4.50));
        assert_eq!(f.menu_id, 2);
    }

    #[test]
    fn menu_change_is_reported() {
        let mut f = food();
        let moved = UpdateFoodRequest {
            menu_id: Some(9),
            ..Default::default()
        }
        .apply_to(&mut f);

        assert_eq!(moved, Some(9));
        assert_eq!(f.menu_id, 9);
    }
}
