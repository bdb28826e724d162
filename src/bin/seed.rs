use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use shopping_cart_admin::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        ApplicationUsers, Categories, application_users, categories, order_details, order_headers,
        products,
    },
    models::{OrderStatus, PaymentStatus},
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "Demo Customer", "customer@example.com").await?;
    let category_ids = seed_categories(&orm, &["Books", "Apparel", "Stickers"]).await?;
    seed_order(&orm, user_id, &category_ids).await?;

    println!("Seed completed. Customer ID: {user_id}");
    Ok(())
}

async fn ensure_user(orm: &DatabaseConnection, name: &str, email: &str) -> anyhow::Result<Uuid> {
    if let Some(existing) = ApplicationUsers::find()
        .filter(application_users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present");
        return Ok(existing.id);
    }

    let user = application_users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone_number: Set(Some("555-0100".into())),
        street_address: Set(Some("1 Ferris Way".into())),
        city: Set(Some("Portland".into())),
        state: Set(Some("OR".into())),
        postal_code: Set(Some("97201".into())),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    println!("Ensured user {email}");
    Ok(user.id)
}

async fn seed_categories(orm: &DatabaseConnection, names: &[&str]) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let existing = Categories::find()
            .filter(categories::Column::Name.eq(*name))
            .one(orm)
            .await?;
        let id = match existing {
            Some(category) => category.id,
            None => {
                categories::ActiveModel {
                    id: NotSet,
                    name: Set(name.to_string()),
                    created_at: Set(Utc::now().into()),
                }
                .insert(orm)
                .await?
                .id
            }
        };
        ids.push(id);
    }

    println!("Seeded categories");
    Ok(ids)
}

async fn seed_order(
    orm: &DatabaseConnection,
    user_id: Uuid,
    category_ids: &[i32],
) -> anyhow::Result<()> {
    let Some(&category_id) = category_ids.first() else {
        return Ok(());
    };

    let txn = orm.begin().await?;
    let product = products::ActiveModel {
        id: NotSet,
        name: Set("E-book: Async Rust".into()),
        description: Set(Some("Learn async Rust patterns".into())),
        price: Set(250000),
        image_url: Set(None),
        category_id: Set(category_id),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let header = order_headers::ActiveModel {
        id: NotSet,
        application_user_id: Set(user_id),
        order_date: Set(Utc::now().into()),
        shipping_date: Set(None),
        order_total: Set(product.price * 2),
        order_status: Set(OrderStatus::Approved.as_str().into()),
        payment_status: Set(PaymentStatus::Approved.as_str().into()),
        tracking_number: Set(None),
        carrier: Set(None),
        payment_date: Set(Some(Utc::now().into())),
        name: Set("Demo Customer".into()),
        phone_number: Set("555-0100".into()),
        street_address: Set("1 Ferris Way".into()),
        city: Set("Portland".into()),
        state: Set("OR".into()),
        postal_code: Set("97201".into()),
    }
    .insert(&txn)
    .await?;

    order_details::ActiveModel {
        id: NotSet,
        order_header_id: Set(header.id),
        product_id: Set(product.id),
        count: Set(2),
        price: Set(product.price),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    println!("Seeded order {}", header.id);
    Ok(())
}
