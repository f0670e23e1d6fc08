use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppError;

/// Role of a cast member. Wire representation is the numeric tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CastKind {
    Director = 1,
    Actor = 2,
}

impl CastKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CastKind::Director => "Director",
            CastKind::Actor => "Actor",
        }
    }
}

impl fmt::Display for CastKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<i32> for CastKind {
    type Error = AppError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(CastKind::Director),
            2 => Ok(CastKind::Actor),
            _ => Err(AppError::IsNotValidated("cast member type".to_string())),
        }
    }
}

impl From<CastKind> for i32 {
    fn from(kind: CastKind) -> Self {
        kind as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;

    #[test]
    fn tags_round_trip() {
        assert_eq!(CastKind::try_from(1).unwrap(), CastKind::Director);
        assert_eq!(CastKind::try_from(2).unwrap(), CastKind::Actor);
        assert_eq!(i32::from(CastKind::Actor), 2);
    }

    #[test]
    fn unknown_tag_is_not_validated() {
        let err = CastKind::try_from(111).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
        assert!(err.to_string().contains("cast member type"));
    }

    #[test]
    fn serializes_as_the_numeric_tag() {
        assert_eq!(serde_json::to_string(&CastKind::Director).unwrap(), "1");
        let kind: CastKind = serde_json::from_str("2").unwrap();
        assert_eq!(kind, CastKind::Actor);
    }
}
