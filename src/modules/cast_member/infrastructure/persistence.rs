/// Diesel-based implementation of CastMemberRepository
///
/// Cast members are hard-deleted; there is no soft-delete flag on this
/// table.
use async_trait::async_trait;
use diesel::prelude::*;

use crate::modules::cast_member::domain::{CastMember, CastMemberPatch, CastMemberRepository};
use crate::modules::cast_member::infrastructure::models::CastMemberModel;
use crate::schema::cast_members;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};

pub struct CastMemberRepositoryImpl {
    pool: DbPool,
}

impl CastMemberRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool.get().map_err(AppError::from)
    }
}

#[async_trait]
impl CastMemberRepository for CastMemberRepositoryImpl {
    async fn store(&self, member: CastMember) -> AppResult<CastMember> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let duplicates: i64 = cast_members::table
                .filter(cast_members::name.eq(&member.name))
                .count()
                .get_result(conn)?;
            if duplicates > 0 {
                return Err(AppError::AlreadyExists(format!(
                    "cast member '{}'",
                    member.name
                )));
            }

            diesel::insert_into(cast_members::table)
                .values(CastMemberModel::from_entity(&member))
                .execute(conn)?;

            Ok(member)
        })
    }

    async fn get_all(&self) -> AppResult<Vec<CastMember>> {
        let mut conn = self.get_conn()?;

        let models: Vec<CastMemberModel> = cast_members::table
            .order(cast_members::id.asc())
            .load(&mut conn)?;

        models.into_iter().map(CastMemberModel::into_entity).collect()
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<CastMember>> {
        let mut conn = self.get_conn()?;

        let models: Vec<CastMemberModel> = cast_members::table
            .filter(cast_members::id.eq_any(ids))
            .load(&mut conn)?;

        let mut by_id = std::collections::HashMap::new();
        for model in models {
            let member = model.into_entity()?;
            by_id.insert(member.id.clone(), member);
        }

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<CastMember> {
        let mut conn = self.get_conn()?;

        let model: Option<CastMemberModel> = cast_members::table
            .filter(cast_members::id.eq(id))
            .first(&mut conn)
            .optional()?;

        model
            .ok_or_else(|| AppError::NotFound(format!("cast member '{}'", id)))?
            .into_entity()
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        let affected = diesel::delete(cast_members::table.filter(cast_members::id.eq(id)))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(AppError::NotFound(format!("cast member '{}'", id)));
        }
        Ok(())
    }

    async fn update_one(&self, id: &str, patch: CastMemberPatch) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let model: Option<CastMemberModel> = cast_members::table
                .filter(cast_members::id.eq(id))
                .first(conn)
                .optional()?;
            let model = model.ok_or_else(|| AppError::NotFound(format!("cast member '{}'", id)))?;

            if let Some(name) = patch.name.as_deref() {
                let trimmed = name.trim();
                let duplicates: i64 = cast_members::table
                    .filter(cast_members::name.eq(trimmed))
                    .filter(cast_members::id.ne(id))
                    .count()
                    .get_result(conn)?;
                if duplicates > 0 {
                    return Err(AppError::AlreadyExists(format!(
                        "cast member '{}'",
                        trimmed
                    )));
                }
            }

            let mut entity = model.into_entity()?;
            entity.apply_patch(&patch)?;

            diesel::update(cast_members::table.filter(cast_members::id.eq(id)))
                .set(CastMemberModel::from_entity(&entity))
                .execute(conn)?;

            Ok(())
        })
    }
}
