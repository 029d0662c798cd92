//! Like entity for SeaORM.
//!
//! A like points at exactly one tweet or video through `(target_kind, target_id)`.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use chirp_core::domain::{ContentKind, ContentRef};
use chirp_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub liked_by: Uuid,
    pub target_kind: String,
    pub target_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LikedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Like. Fails on an unknown target kind.
impl TryFrom<Model> for chirp_core::domain::Like {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let kind: ContentKind = model
            .target_kind
            .parse()
            .map_err(|_| RepoError::Corrupt(format!("like {} has target kind {:?}", model.id, model.target_kind)))?;

        Ok(Self {
            id: model.id.into(),
            liked_by: model.liked_by.into(),
            target: ContentRef {
                kind,
                id: model.target_id.into(),
            },
            created_at: model.created_at.into(),
        })
    }
}

/// Conversion from Domain Like to SeaORM ActiveModel.
impl From<chirp_core::domain::Like> for ActiveModel {
    fn from(like: chirp_core::domain::Like) -> Self {
        Self {
            id: Set(like.id.into()),
            liked_by: Set(like.liked_by.into()),
            target_kind: Set(like.target.kind.as_str().to_string()),
            target_id: Set(like.target.id.into()),
            created_at: Set(like.created_at.into()),
        }
    }
}
