//! PostgreSQL repository implementations.
//!
//! Owner-guarded writes filter on both the id and the owner column, so the
//! check and the write are one statement. When nothing matched, a follow-up
//! lookup tells "missing" apart from "not yours".

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use chirp_core::domain::{ContentKind, ContentRef, Like, OwnerDetails, Tweet, Video, VideoPatch};
use chirp_core::error::RepoError;
use chirp_core::ports::{
    LikeRepository, OwnedMutation, TweetRepository, UserRepository, VideoRepository,
};
use chirp_core::{ContentId, IdentityRef};

use super::entity::like::{self, Entity as LikeEntity};
use super::entity::tweet::{self, Entity as TweetEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::entity::video::{self, Entity as VideoEntity};
use super::postgres_base::{PostgresBaseRepository, db_error};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL tweet repository.
pub type PostgresTweetRepository = PostgresBaseRepository<TweetEntity>;

/// PostgreSQL video repository.
pub type PostgresVideoRepository = PostgresBaseRepository<VideoEntity>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository = PostgresBaseRepository<LikeEntity>;

fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// Escape LIKE wildcards so the keyword matches literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for ch in keyword.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[derive(Debug, FromQueryResult)]
struct ProfileRow {
    username: String,
    avatar: Option<String>,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_profile(&self, id: IdentityRef) -> Result<Option<OwnerDetails>, RepoError> {
        let row = UserEntity::find_by_id(Uuid::from(id))
            .select_only()
            .column(user::Column::Username)
            .column(user::Column::Avatar)
            .into_model::<ProfileRow>()
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(|r| OwnerDetails {
            username: r.username,
            avatar: r.avatar,
        }))
    }
}

#[async_trait]
impl TweetRepository for PostgresTweetRepository {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Tweet>, RepoError> {
        let result = TweetEntity::find()
            .filter(tweet::Column::OwnerId.eq(Uuid::from(owner)))
            .order_by_asc(tweet::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_content(
        &self,
        id: ContentId,
        actor: IdentityRef,
        content: String,
    ) -> Result<OwnedMutation<Tweet>, RepoError> {
        let id = Uuid::from(id);
        let updated = TweetEntity::update_many()
            .col_expr(tweet::Column::Content, Expr::value(content))
            .col_expr(tweet::Column::UpdatedAt, Expr::value(now()))
            .filter(tweet::Column::Id.eq(id))
            .filter(tweet::Column::OwnerId.eq(Uuid::from(actor)))
            .exec_with_returning(&self.db)
            .await
            .map_err(db_error)?;

        match updated.into_iter().next() {
            Some(model) => Ok(OwnedMutation::Applied(model.into())),
            None => self.classify(id).await,
        }
    }

    async fn delete_owned(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<()>, RepoError> {
        let id = Uuid::from(id);
        let result = TweetEntity::delete_many()
            .filter(tweet::Column::Id.eq(id))
            .filter(tweet::Column::OwnerId.eq(Uuid::from(actor)))
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return self.classify(id).await;
        }
        Ok(OwnedMutation::Applied(()))
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn find_by_owner(&self, owner: IdentityRef) -> Result<Vec<Video>, RepoError> {
        let result = VideoEntity::find()
            .filter(video::Column::OwnerId.eq(Uuid::from(owner)))
            .order_by_asc(video::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Video>, RepoError> {
        let mut query = VideoEntity::find().order_by_asc(video::Column::CreatedAt);

        if !keyword.is_empty() {
            let pattern = like_pattern(keyword);
            let lower = |col: video::Column| Expr::expr(Func::lower(Expr::col(col)));
            query = query.filter(
                Condition::any()
                    .add(lower(video::Column::Title).like(LikeExpr::new(pattern.clone()).escape('\\')))
                    .add(lower(video::Column::Description).like(LikeExpr::new(pattern).escape('\\'))),
            );
        }

        let result = query.all(&self.db).await.map_err(db_error)?;
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_details(
        &self,
        id: ContentId,
        actor: IdentityRef,
        patch: VideoPatch,
    ) -> Result<OwnedMutation<Video>, RepoError> {
        let id = Uuid::from(id);
        let mut update = VideoEntity::update_many()
            .col_expr(video::Column::UpdatedAt, Expr::value(now()));
        if let Some(description) = patch.description {
            update = update.col_expr(video::Column::Description, Expr::value(description));
        }
        if let Some(thumbnail) = patch.thumbnail {
            update = update.col_expr(video::Column::Thumbnail, Expr::value(thumbnail));
        }

        let updated = update
            .filter(video::Column::Id.eq(id))
            .filter(video::Column::OwnerId.eq(Uuid::from(actor)))
            .exec_with_returning(&self.db)
            .await
            .map_err(db_error)?;

        match updated.into_iter().next() {
            Some(model) => Ok(OwnedMutation::Applied(model.into())),
            None => self.classify(id).await,
        }
    }

    async fn toggle_published(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<Video>, RepoError> {
        let id = Uuid::from(id);
        let updated = VideoEntity::update_many()
            .col_expr(
                video::Column::IsPublished,
                Expr::col(video::Column::IsPublished).not(),
            )
            .col_expr(video::Column::UpdatedAt, Expr::value(now()))
            .filter(video::Column::Id.eq(id))
            .filter(video::Column::OwnerId.eq(Uuid::from(actor)))
            .exec_with_returning(&self.db)
            .await
            .map_err(db_error)?;

        match updated.into_iter().next() {
            Some(model) => Ok(OwnedMutation::Applied(model.into())),
            None => self.classify(id).await,
        }
    }

    async fn delete_owned(
        &self,
        id: ContentId,
        actor: IdentityRef,
    ) -> Result<OwnedMutation<()>, RepoError> {
        let id = Uuid::from(id);
        let result = VideoEntity::delete_many()
            .filter(video::Column::Id.eq(id))
            .filter(video::Column::OwnerId.eq(Uuid::from(actor)))
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return self.classify(id).await;
        }
        Ok(OwnedMutation::Applied(()))
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn insert(&self, like: Like) -> Result<Like, RepoError> {
        let model = like::ActiveModel::from(like)
            .insert(&self.db)
            .await
            .map_err(db_error)?;
        Like::try_from(model)
    }

    async fn find(
        &self,
        liked_by: IdentityRef,
        target: ContentRef,
    ) -> Result<Option<Like>, RepoError> {
        let model = LikeEntity::find()
            .filter(like::Column::LikedBy.eq(Uuid::from(liked_by)))
            .filter(like::Column::TargetKind.eq(target.kind.as_str()))
            .filter(like::Column::TargetId.eq(Uuid::from(target.id)))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Like::try_from).transpose()
    }

    async fn find_by_targets(&self, targets: &[ContentRef]) -> Result<Vec<Like>, RepoError> {
        let mut condition = Condition::any();
        for kind in [ContentKind::Tweet, ContentKind::Video] {
            let ids: Vec<Uuid> = targets
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| Uuid::from(t.id))
                .collect();
            if !ids.is_empty() {
                condition = condition.add(
                    Condition::all()
                        .add(like::Column::TargetKind.eq(kind.as_str()))
                        .add(like::Column::TargetId.is_in(ids)),
                );
            }
        }
        if condition.is_empty() {
            return Ok(Vec::new());
        }

        let models = LikeEntity::find()
            .filter(condition)
            .order_by_asc(like::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Like::try_from).collect()
    }
}
