use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Paintings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Paintings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Paintings::Name).string())
                    .col(ColumnDef::new(Paintings::Url).string())
                    .col(ColumnDef::new(Paintings::Techniques).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Paintings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Paintings {
    Table,
    Id,
    Name,
    Url,
    Techniques,
}
