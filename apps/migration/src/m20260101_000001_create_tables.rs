use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Avatar).string())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Owners are not foreign keys: content may outlive the profile, and
        // the feed reports a missing profile as null.
        manager
            .create_table(
                Table::create()
                    .table(Tweets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tweets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tweets::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Tweets::Content).text().not_null())
                    .col(timestamp(Tweets::CreatedAt))
                    .col(timestamp(Tweets::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Videos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Videos::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Videos::Title).string().not_null().default(""))
                    .col(ColumnDef::new(Videos::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Videos::VideoFile).string())
                    .col(ColumnDef::new(Videos::Thumbnail).string().not_null())
                    .col(ColumnDef::new(Videos::Duration).integer())
                    .col(
                        ColumnDef::new(Videos::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp(Videos::CreatedAt))
                    .col(timestamp(Videos::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Likes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Likes::LikedBy).uuid().not_null())
                    .col(ColumnDef::new(Likes::TargetKind).string_len(16).not_null())
                    .col(ColumnDef::new(Likes::TargetId).uuid().not_null())
                    .col(timestamp(Likes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tweets_owner_id")
                    .table(Tweets::Table)
                    .col(Tweets::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_videos_owner_id")
                    .table(Videos::Table)
                    .col(Videos::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_likes_target")
                    .table(Likes::Table)
                    .col(Likes::TargetKind)
                    .col(Likes::TargetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_likes_liked_by")
                    .table(Likes::Table)
                    .col(Likes::LikedBy)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tweets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

fn timestamp<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Avatar,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tweets {
    Table,
    Id,
    OwnerId,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    VideoFile,
    Thumbnail,
    Duration,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Likes {
    Table,
    Id,
    LikedBy,
    TargetKind,
    TargetId,
    CreatedAt,
}
