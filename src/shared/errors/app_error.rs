use serde::Serialize;
use thiserror::Error;

/// Classification of a catalog failure.
///
/// Transport adapters map kinds onto status codes (`NotFound` -> 404,
/// `AlreadyExists` -> 409, validation kinds -> 400, `Internal` -> 500)
/// instead of matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    IsRequired,
    CouldNotBeEmpty,
    IsNotValidated,
    InvalidLimit,
    NotFound,
    AlreadyExists,
    Internal,
}

/// Every failure produced by the catalog core wraps exactly one kind.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("'{0}' is required")]
    IsRequired(String),

    #[error("{0} could not be empty")]
    CouldNotBeEmpty(String),

    #[error("{0} is not validated")]
    IsNotValidated(String),

    #[error("limit {0} is not a valid list size")]
    InvalidLimit(i64),

    #[error("{0} was not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::IsRequired(_) => ErrorKind::IsRequired,
            AppError::CouldNotBeEmpty(_) => ErrorKind::CouldNotBeEmpty,
            AppError::IsNotValidated(_) => ErrorKind::IsNotValidated,
            AppError::InvalidLimit(_) => ErrorKind::InvalidLimit,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

// Repository boundary: native diesel failures become taxonomy kinds here so
// services never type-switch on backend-specific errors.
impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::DatabaseErrorKind;
        use diesel::result::Error as DieselError;

        match err {
            DieselError::NotFound => AppError::NotFound("record".to_string()),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::AlreadyExists(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                AppError::NotFound(info.message().to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::Internal(format!("database pool error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            AppError::IsRequired("Rating".into()).kind(),
            ErrorKind::IsRequired
        );
        assert_eq!(
            AppError::CouldNotBeEmpty("category name".into()).kind(),
            ErrorKind::CouldNotBeEmpty
        );
        assert_eq!(
            AppError::NotFound("category".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AppError::AlreadyExists("drama".into()).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(AppError::InvalidLimit(-1).kind(), ErrorKind::InvalidLimit);
    }

    #[test]
    fn messages_carry_the_field() {
        assert_eq!(
            AppError::IsRequired("Rating".into()).to_string(),
            "'Rating' is required"
        );
        assert_eq!(
            AppError::IsNotValidated("cast member type".into()).to_string(),
            "cast member type is not validated"
        );
        assert_eq!(
            AppError::CouldNotBeEmpty("video title".into()).to_string(),
            "video title could not be empty"
        );
        assert_eq!(
            AppError::InvalidLimit(-1).to_string(),
            "limit -1 is not a valid list size"
        );
    }

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
