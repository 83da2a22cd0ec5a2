use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202406010010_create_chat"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("conversations"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("conversation_id")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("conversation_type")).string().not_null())
                    .col(ColumnDef::new(Alias::new("course_id")).string().null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversations_course")
                            .from(Alias::new("conversations"), Alias::new("course_id"))
                            .to(Alias::new("courses"), Alias::new("course_id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("conversation_participants"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("conversation_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("participant_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("joined_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .primary_key(
                        Index::create()
                            .col(Alias::new("conversation_id"))
                            .col(Alias::new("participant_id")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participants_conversation")
                            .from(Alias::new("conversation_participants"), Alias::new("conversation_id"))
                            .to(Alias::new("conversations"), Alias::new("conversation_id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("messages"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("message_id")).string().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("conversation_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("sender_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("content")).text().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_conversation")
                            .from(Alias::new("messages"), Alias::new("conversation_id"))
                            .to(Alias::new("conversations"), Alias::new("conversation_id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_messages_conversation_created")
                    .table(Alias::new("messages"))
                    .col(Alias::new("conversation_id"))
                    .col(Alias::new("created_at"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("messages")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("conversation_participants")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("conversations")).to_owned())
            .await
    }
}
