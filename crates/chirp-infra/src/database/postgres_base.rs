use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use uuid::Uuid;

use chirp_core::error::RepoError;
use chirp_core::ports::{BaseRepository, OwnedMutation};

/// Map a SeaORM error onto the repository error kinds.
pub(crate) fn db_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => {
            let message = other.to_string();
            if message.contains("duplicate") || message.contains("unique") {
                RepoError::Constraint(message)
            } else {
                RepoError::Query(message)
            }
        }
    }
}

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
{
    /// Explain why a guarded write touched no row.
    ///
    /// The guard filters on id and owner, so a surviving row means the actor
    /// is not the owner.
    pub(crate) async fn classify<T>(&self, id: Uuid) -> Result<OwnedMutation<T>, RepoError> {
        let existing = E::find_by_id(id).one(&self.db).await.map_err(db_error)?;
        Ok(match existing {
            Some(_) => OwnedMutation::Forbidden,
            None => OwnedMutation::NotFound,
        })
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    ID: Into<Uuid> + Copy + Send + Sync + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id.into())
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Ok(model.into())
    }
}
