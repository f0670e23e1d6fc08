use serde::{Deserialize, Serialize};

use crate::modules::cast_member::domain::value_objects::CastKind;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{check_all, Check};

/// A cast member: a director or an actor. Names are trimmed but keep their
/// casing, unlike Category and Genre names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastKind,
}

impl CastMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CastKind) -> AppResult<Self> {
        let id = id.into().trim().to_string();
        let name = name.into().trim().to_string();

        if let Some(err) = check_all([
            Check::new(
                id.is_empty(),
                AppError::CouldNotBeEmpty("cast member id".to_string()),
            ),
            Check::new(
                name.is_empty(),
                AppError::CouldNotBeEmpty("cast member name".to_string()),
            ),
        ]) {
            return Err(err);
        }

        Ok(Self { id, name, kind })
    }

    /// Overwrite the attributes present in the patch. The kind tag is
    /// re-validated here so an invalid patch can never corrupt the entity.
    pub fn apply_patch(&mut self, patch: &CastMemberPatch) -> AppResult<()> {
        // Parse before mutating so a bad tag leaves the entity untouched.
        let kind = patch.kind.map(CastKind::try_from).transpose()?;
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        Ok(())
    }
}

impl std::fmt::Display for CastMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Construction descriptor for [`CastMember`]. The kind arrives as its wire
/// tag so the service owns the membership check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCastMember {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
}

impl NewCastMember {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }
}

/// Update descriptor for [`CastMember`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastMemberPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<i32>,
}

impl CastMemberPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;

    #[test]
    fn new_trims_but_keeps_casing() {
        let member = CastMember::new("m1", "  Akira Kurosawa ", CastKind::Director).unwrap();
        assert_eq!(member.name, "Akira Kurosawa");
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = CastMember::new("m1", " ", CastKind::Actor).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CouldNotBeEmpty);
    }

    #[test]
    fn apply_patch_rejects_unknown_kind_tag() {
        let mut member = CastMember::new("m1", "Alice", CastKind::Actor).unwrap();
        let err = member
            .apply_patch(&CastMemberPatch {
                kind: Some(111),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
        assert_eq!(member.kind, CastKind::Actor);
    }

    #[test]
    fn wire_shape_uses_type_tag() {
        let member = CastMember::new("m1", "Alice", CastKind::Actor).unwrap();
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["type"], serde_json::json!(2));
    }
}
