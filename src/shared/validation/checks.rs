//! First-failure check combinator shared by the services.
//!
//! A [`Check`] pairs an already-evaluated predicate with the error to return
//! when it fires. [`check_all`] reports the first firing check in declaration
//! order, which keeps the error produced for multi-violation inputs
//! deterministic.

use crate::shared::errors::AppError;

/// One validation step: `failed == true` means the error applies.
#[derive(Debug, Clone)]
pub struct Check {
    failed: bool,
    error: AppError,
}

impl Check {
    pub fn new(failed: bool, error: AppError) -> Self {
        Self { failed, error }
    }
}

/// Return the first failing check's error, or `None` when all checks pass.
pub fn check_all<I>(checks: I) -> Option<AppError>
where
    I: IntoIterator<Item = Check>,
{
    checks.into_iter().find(|c| c.failed).map(|c| c.error)
}

/// True when the string is empty after trimming surrounding whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;

    #[test]
    fn check_all_returns_none_when_nothing_fails() {
        let result = check_all([
            Check::new(false, AppError::CouldNotBeEmpty("name".into())),
            Check::new(false, AppError::IsRequired("Rating".into())),
        ]);
        assert!(result.is_none());
    }

    #[test]
    fn check_all_reports_the_first_failure_in_order() {
        // Both fire; declaration order decides which error wins.
        let result = check_all([
            Check::new(true, AppError::CouldNotBeEmpty("video title".into())),
            Check::new(true, AppError::IsRequired("YearLaunched".into())),
        ]);
        assert_eq!(
            result,
            Some(AppError::CouldNotBeEmpty("video title".into()))
        );
    }

    #[test]
    fn check_all_skips_passing_checks() {
        let result = check_all([
            Check::new(false, AppError::CouldNotBeEmpty("video title".into())),
            Check::new(true, AppError::IsRequired("Rating".into())),
        ]);
        assert_eq!(result.unwrap().kind(), ErrorKind::IsRequired);
    }

    #[test]
    fn is_blank_trims_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank("  action  "));
    }

}
