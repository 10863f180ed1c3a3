//! Food item entity with validation and derived values

use crate::core::error::{BistroResult, ValidationError};
use crate::core::validation::{filters, validators};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of food categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Starter,
    MainCourse,
    Dessert,
    Beverage,
}

impl FoodCategory {
    /// Wire-form names accepted for the category field
    pub const ALLOWED: [&'static str; 4] = ["starter", "main_course", "dessert", "beverage"];

    /// Parse a wire-form category name, reporting the allowed values on failure
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "starter" => Ok(FoodCategory::Starter),
            "main_course" => Ok(FoodCategory::MainCourse),
            "dessert" => Ok(FoodCategory::Dessert),
            "beverage" => Ok(FoodCategory::Beverage),
            other => Err(ValidationError::field(
                "category",
                format!(
                    "must be one of {:?} (value: {})",
                    FoodCategory::ALLOWED,
                    other
                ),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Starter => "starter",
            FoodCategory::MainCourse => "main_course",
            FoodCategory::Dessert => "dessert",
            FoodCategory::Beverage => "beverage",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price band derived from a validated price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceCategory {
    Budget,
    #[serde(rename = "Mid-range")]
    MidRange,
    Premium,
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceCategory::Budget => "Budget",
            PriceCategory::MidRange => "Mid-range",
            PriceCategory::Premium => "Premium",
        };
        f.write_str(label)
    }
}

/// Raw payload for creating or replacing a food item
#[derive(Debug, Clone, Deserialize)]
pub struct FoodItemDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub preparation_time: i64,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub calories: Option<i64>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
}

fn default_true() -> bool {
    true
}

/// A validated menu entry
///
/// Constructed only through [`FoodItem::validate`], so a value of this type
/// always satisfies every field constraint and cross-field rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Assigned by the menu store; None until the item is stored
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub category: FoodCategory,
    pub price: f64,
    pub is_available: bool,
    pub preparation_time: u32,
    pub ingredients: Vec<String>,
    pub calories: Option<u32>,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
}

impl FoodItem {
    /// Validate raw fields and construct the item
    ///
    /// Checks run in a fixed order: per-field constraints first, then the
    /// cross-field rules. The first violation aborts construction, so no
    /// partially valid item ever exists.
    pub fn validate(draft: FoodItemDraft) -> BistroResult<Self> {
        let name = filters::trim(&draft.name);
        validators::string_length("name", &name, 3, 100)?;
        validators::letters_and_spaces("name", &name)?;

        let description = filters::trim(&draft.description);
        validators::string_length("description", &description, 10, 500)?;

        let category = FoodCategory::parse(&filters::lowercase(&filters::trim(&draft.category)))?;

        // Prices are normalized to 2 decimal places rather than rejected
        let price = filters::round_decimals(draft.price, 2);
        validators::range_f64("price", price, 1.0, 100.0)?;

        validators::range_i64("preparation_time", draft.preparation_time, 1, 120)?;
        let preparation_time = draft.preparation_time as u32;

        validators::at_least_one("ingredients", &draft.ingredients)?;

        if let Some(calories) = draft.calories {
            validators::positive_i64("calories", calories)?;
        }
        let calories = draft.calories.map(|c| c as u32);

        // Cross-field rules
        if draft.is_spicy && matches!(category, FoodCategory::Dessert | FoodCategory::Beverage) {
            return Err(ValidationError::cross_field(
                "spicy_dessert_or_beverage",
                "desserts and beverages cannot be spicy",
            )
            .into());
        }
        if draft.is_vegetarian && calories.is_some_and(|c| c >= 800) {
            return Err(ValidationError::cross_field(
                "vegetarian_calorie_cap",
                "vegetarian items must have less than 800 calories",
            )
            .into());
        }
        if category == FoodCategory::Beverage && preparation_time > 10 {
            return Err(ValidationError::cross_field(
                "beverage_prep_time",
                "beverages must have a preparation time of 10 minutes or less",
            )
            .into());
        }

        Ok(FoodItem {
            id: None,
            name,
            description,
            category,
            price,
            is_available: draft.is_available,
            preparation_time,
            ingredients: draft.ingredients,
            calories,
            is_vegetarian: draft.is_vegetarian,
            is_spicy: draft.is_spicy,
        })
    }

    /// Price band derived from the validated price
    pub fn price_category(&self) -> PriceCategory {
        if self.price < 10.0 {
            PriceCategory::Budget
        } else if self.price <= 25.0 {
            PriceCategory::MidRange
        } else {
            PriceCategory::Premium
        }
    }

    /// Dietary labels derived from the vegetarian/spicy flags
    pub fn dietary_info(&self) -> Vec<&'static str> {
        let mut info = Vec::new();
        if self.is_vegetarian {
            info.push("Vegetarian");
        }
        if self.is_spicy {
            info.push("Spicy");
        }
        info
    }
}

/// Response shape embedding the derived values alongside the item
#[derive(Debug, Clone, Serialize)]
pub struct FoodItemView {
    #[serde(flatten)]
    pub item: FoodItem,
    pub price_category: PriceCategory,
    pub dietary_info: Vec<&'static str>,
}

impl From<FoodItem> for FoodItemView {
    fn from(item: FoodItem) -> Self {
        let price_category = item.price_category();
        let dietary_info = item.dietary_info();
        Self {
            item,
            price_category,
            dietary_info,
        }
    }
}
