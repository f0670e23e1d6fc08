use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppError;

/// Age-appropriateness rating for a video. Wire representation is the
/// numeric tag; display representation is the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rating {
    Free = 1,
    Ten = 2,
    Twelve = 3,
    Fourteen = 4,
    Sixteen = 5,
    Eighteen = 6,
}

impl Rating {
    pub fn display_name(&self) -> &'static str {
        match self {
            Rating::Free => "Free",
            Rating::Ten => "10",
            Rating::Twelve => "12",
            Rating::Fourteen => "14",
            Rating::Sixteen => "16",
            Rating::Eighteen => "18",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<i32> for Rating {
    type Error = AppError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Rating::Free),
            2 => Ok(Rating::Ten),
            3 => Ok(Rating::Twelve),
            4 => Ok(Rating::Fourteen),
            5 => Ok(Rating::Sixteen),
            6 => Ok(Rating::Eighteen),
            _ => Err(AppError::IsNotValidated("video rating".to_string())),
        }
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating as i32
    }
}
