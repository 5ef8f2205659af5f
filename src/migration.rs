use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{MenuItems, OrderItems, Orders, Payments, Restaurants, Users};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateOrderingTables)]
    }
}

/// Creates the catalog, order, line item and payment tables from the entity
/// definitions, so column types follow whichever backend is connected.
pub struct CreateOrderingTables;

impl MigrationName for CreateOrderingTables {
    fn name(&self) -> &str {
        "m20250101_000001_create_ordering_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateOrderingTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Parents first so the foreign keys resolve.
        create_from_entity(manager, &schema, Restaurants).await?;
        create_from_entity(manager, &schema, Users).await?;
        create_from_entity(manager, &schema, MenuItems).await?;
        create_from_entity(manager, &schema, Orders).await?;
        create_from_entity(manager, &schema, OrderItems).await?;
        create_from_entity(manager, &schema, Payments).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_restaurant_id")
                    .table(Orders)
                    .col(crate::entity::orders::Column::RestaurantId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_items_order_id")
                    .table(OrderItems)
                    .col(crate::entity::order_items::Column::OrderId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderItems).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MenuItems).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurants).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

async fn create_from_entity<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await
}
