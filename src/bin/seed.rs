use food_order_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        Restaurants,
        menu_items::ActiveModel as MenuItemActive,
        restaurants::ActiveModel as RestaurantActive,
        users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    },
};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "Asha Rao", "asha@example.com", "9876543210", "BTM Layout").await?;
    seed_restaurants(&orm).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    name: &str,
    email: &str,
    phone: &str,
    location: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(UserCol::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let user = UserActive {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set(phone.to_string()),
        location: Set(location.to_string()),
    }
    .insert(orm)
    .await?;

    Ok(user.id)
}

async fn seed_restaurants(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if Restaurants::find().count(orm).await? > 0 {
        println!("Restaurants already seeded");
        return Ok(());
    }

    let catalog: [(&str, &str, &str, &[(&str, &str, i64, &str)]); 2] = [
        (
            "Spice Route",
            "Koramangala",
            "North Indian",
            &[
                ("Paneer Tikka", "Chargrilled cottage cheese", 22000, "Starters"),
                ("Dal Makhani", "Slow cooked black lentils", 18000, "Mains"),
                ("Butter Naan", "Tandoor baked flatbread", 4000, "Breads"),
            ],
        ),
        (
            "Green Bowl",
            "Indiranagar",
            "Salads",
            &[
                ("Caesar Salad", "Romaine, parmesan, croutons", 25000, "Salads"),
                ("Quinoa Bowl", "Quinoa, roasted vegetables", 28000, "Bowls"),
            ],
        ),
    ];

    for (name, location, cuisine, items) in catalog {
        let restaurant = RestaurantActive {
            id: NotSet,
            name: Set(name.to_string()),
            location: Set(location.to_string()),
            cuisine: Set(cuisine.to_string()),
            rating: Set(None),
        }
        .insert(orm)
        .await?;

        for (item_name, description, price_paise, category) in items {
            MenuItemActive {
                id: NotSet,
                restaurant_id: Set(restaurant.id),
                name: Set(item_name.to_string()),
                description: Set(description.to_string()),
                price: Set(Decimal::new(*price_paise, 2)),
                category: Set(category.to_string()),
                in_stock: Set(true),
            }
            .insert(orm)
            .await?;
        }
    }

    println!("Seeded restaurants and menus");
    Ok(())
}
