//! Restaurant ordering server
//!
//! Exposes validated menu items and orders under `/menu` and `/orders`.

use anyhow::Result;
use bistro::config::AppConfig;
use bistro::menu::{FoodItem, FoodItemDraft, MenuStore};
use bistro::server::{AppState, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bistro=info,tower_http=info")),
        )
        .init();

    let config = match std::env::var("BISTRO_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default_config(),
    };

    let state = AppState::new();
    if config.seed_menu {
        seed_sample_menu(&state.menu)?;
        info!(items = state.menu.len(), "seeded sample menu");
    }

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "bistro server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Populate the menu with a few sample items
fn seed_sample_menu(menu: &MenuStore) -> Result<()> {
    let drafts = [
        FoodItemDraft {
            name: "Bruschetta".to_string(),
            description: "Grilled bread topped with tomato and basil".to_string(),
            category: "starter".to_string(),
            price: 6.5,
            is_available: true,
            preparation_time: 10,
            ingredients: vec![
                "bread".to_string(),
                "tomato".to_string(),
                "basil".to_string(),
            ],
            calories: Some(210),
            is_vegetarian: true,
            is_spicy: false,
        },
        FoodItemDraft {
            name: "Chicken Vindaloo".to_string(),
            description: "Fiery curry with potatoes and vinegar".to_string(),
            category: "main_course".to_string(),
            price: 14.0,
            is_available: true,
            preparation_time: 35,
            ingredients: vec![
                "chicken".to_string(),
                "potato".to_string(),
                "chili".to_string(),
            ],
            calories: Some(650),
            is_vegetarian: false,
            is_spicy: true,
        },
        FoodItemDraft {
            name: "Tiramisu".to_string(),
            description: "Coffee soaked sponge with mascarpone".to_string(),
            category: "dessert".to_string(),
            price: 7.5,
            is_available: true,
            preparation_time: 15,
            ingredients: vec![
                "mascarpone".to_string(),
                "coffee".to_string(),
                "cocoa".to_string(),
            ],
            calories: Some(420),
            is_vegetarian: true,
            is_spicy: false,
        },
        FoodItemDraft {
            name: "Mango Lassi".to_string(),
            description: "Chilled yogurt drink with mango pulp".to_string(),
            category: "beverage".to_string(),
            price: 4.0,
            is_available: true,
            preparation_time: 5,
            ingredients: vec!["mango".to_string(), "yogurt".to_string()],
            calories: Some(180),
            is_vegetarian: true,
            is_spicy: false,
        },
    ];

    for draft in drafts {
        let item = FoodItem::validate(draft)?;
        menu.add(item);
    }

    Ok(())
}
