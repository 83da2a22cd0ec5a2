use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202406010001_create_id_sequences"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One counter row per identifier prefix (e.g. "EVT", "ATT_INT").
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("id_sequences"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("prefix")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("value")).big_integer().not_null().default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("id_sequences")).to_owned())
            .await
    }
}
