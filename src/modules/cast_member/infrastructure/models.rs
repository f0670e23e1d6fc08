use diesel::prelude::*;

use crate::modules::cast_member::domain::{CastKind, CastMember};
use crate::schema::cast_members;
use crate::shared::errors::AppResult;

/// Row model for the `cast_members` table. The kind is stored as its wire
/// tag and re-validated on the way out.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = cast_members)]
pub struct CastMemberModel {
    pub id: String,
    pub name: String,
    pub kind: i32,
}

impl CastMemberModel {
    pub fn from_entity(member: &CastMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            kind: member.kind.into(),
        }
    }

    pub fn into_entity(self) -> AppResult<CastMember> {
        Ok(CastMember {
            id: self.id,
            name: self.name,
            kind: CastKind::try_from(self.kind)?,
        })
    }
}
