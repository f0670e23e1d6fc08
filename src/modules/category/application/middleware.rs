use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::category::application::service::{CategoryService, CategoryServiceImpl};
use crate::modules::category::domain::{
    Category, CategoryPatch, CategoryRepository, NewCategory,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Validation middleware for the category service.
///
/// Enforces the parameter-level contract (blank ids and names, empty-patch
/// no-op) in front of the delegate, so the public behavior holds regardless
/// of how the inner service evolves.
pub struct ValidatingCategoryService {
    inner: Arc<dyn CategoryService>,
}

impl ValidatingCategoryService {
    pub fn new(inner: Arc<dyn CategoryService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CategoryService for ValidatingCategoryService {
    async fn create(&self, input: NewCategory) -> AppResult<Category> {
        if input.is_empty() {
            return Err(AppError::CouldNotBeEmpty("category".to_string()));
        }
        if let Some(err) = check_all([
            Check::new(input.name.is_none(), AppError::IsRequired("Name".to_string())),
            Check::new(
                input.name.as_deref().map(is_blank).unwrap_or(false),
                AppError::CouldNotBeEmpty("category name".to_string()),
            ),
        ]) {
            return Err(err);
        }
        self.inner.create(input).await
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        self.inner.list().await
    }

    async fn show(&self, id: &str) -> AppResult<Category> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("category id".to_string()));
        }
        self.inner.show(id).await
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> AppResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("category id".to_string()));
        }
        if patch.name.as_deref().map(is_blank).unwrap_or(false) {
            return Err(AppError::CouldNotBeEmpty("category name".to_string()));
        }
        self.inner.update(id, patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("category id".to_string()));
        }
        self.inner.destroy(id).await
    }
}

/// Logging middleware for the category service.
///
/// Emits one structured record per failed call and stays silent on success.
/// Results pass through untouched.
pub struct LoggingCategoryService {
    inner: Arc<dyn CategoryService>,
}

impl LoggingCategoryService {
    pub fn new(inner: Arc<dyn CategoryService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CategoryService for LoggingCategoryService {
    async fn create(&self, input: NewCategory) -> AppResult<Category> {
        let result = self.inner.create(input.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "category.create",
                input = ?input,
                kind = ?err.kind(),
                error = %err,
                "category service call failed"
            );
        }
        result
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        let result = self.inner.list().await;
        if let Err(err) = &result {
            tracing::error!(
                method = "category.list",
                kind = ?err.kind(),
                error = %err,
                "category service call failed"
            );
        }
        result
    }

    async fn show(&self, id: &str) -> AppResult<Category> {
        let result = self.inner.show(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "category.show",
                id,
                kind = ?err.kind(),
                error = %err,
                "category service call failed"
            );
        }
        result
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> AppResult<()> {
        let result = self.inner.update(id, patch.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "category.update",
                id,
                patch = ?patch,
                kind = ?err.kind(),
                error = %err,
                "category service call failed"
            );
        }
        result
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        let result = self.inner.destroy(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "category.destroy",
                id,
                kind = ?err.kind(),
                error = %err,
                "category service call failed"
            );
        }
        result
    }
}

/// Compose the category service chain: logging over validation over the
/// plain service. Built once at startup by the composition root.
pub fn build_category_service(
    repository: Arc<dyn CategoryRepository>,
    ids: Arc<dyn IdGenerator>,
) -> Arc<dyn CategoryService> {
    let service = Arc::new(CategoryServiceImpl::new(repository, ids));
    let validated = Arc::new(ValidatingCategoryService::new(service));
    Arc::new(LoggingCategoryService::new(validated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingService {
        create_calls: Mutex<usize>,
        update_calls: Mutex<usize>,
        fail_show: bool,
    }

    #[async_trait]
    impl CategoryService for CountingService {
        async fn create(&self, input: NewCategory) -> AppResult<Category> {
            *self.create_calls.lock().unwrap() += 1;
            Category::new("c1", input.name.unwrap_or_default(), input.description)
        }

        async fn list(&self) -> AppResult<Vec<Category>> {
            Ok(vec![])
        }

        async fn show(&self, id: &str) -> AppResult<Category> {
            if self.fail_show {
                Err(AppError::NotFound(format!("category '{}'", id)))
            } else {
                Category::new(id, "action", None)
            }
        }

        async fn update(&self, _id: &str, _patch: CategoryPatch) -> AppResult<()> {
            *self.update_calls.lock().unwrap() += 1;
            Ok(())
        }

        async fn destroy(&self, _id: &str) -> AppResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn validation_blocks_blank_name_before_the_delegate() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingCategoryService::new(inner.clone());

        let err = middleware
            .create(NewCategory {
                name: Some("  ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::CouldNotBeEmpty("category name".to_string()));
        assert_eq!(*inner.create_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn validation_short_circuits_empty_patch() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingCategoryService::new(inner.clone());

        middleware
            .update("whatever", CategoryPatch::default())
            .await
            .unwrap();

        assert_eq!(*inner.update_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn validation_passes_valid_input_through() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingCategoryService::new(inner.clone());

        let created = middleware
            .create(NewCategory {
                name: Some("Action".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.name, "action");
        assert_eq!(*inner.create_calls.lock().unwrap(), 1);
    }

    // Counts tracing events so the one-record-per-failure contract is
    // checkable without a full subscriber stack.
    struct CountingSubscriber {
        events: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for CountingSubscriber {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, _event: &tracing::Event<'_>) {
            self.events.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _span: &tracing::span::Id) {}

        fn exit(&self, _span: &tracing::span::Id) {}
    }

    #[tokio::test]
    async fn logging_emits_one_record_per_failed_call_and_none_on_success() {
        let events = Arc::new(AtomicUsize::new(0));
        let _guard = tracing::subscriber::set_default(CountingSubscriber {
            events: events.clone(),
        });

        let inner = Arc::new(CountingService {
            fail_show: true,
            ..Default::default()
        });
        let middleware = LoggingCategoryService::new(inner);

        // Successful calls are not logged.
        middleware.list().await.unwrap();
        middleware.destroy("c1").await.unwrap();
        assert_eq!(events.load(Ordering::SeqCst), 0);

        // One failed call, one record; the error passes through unchanged.
        let err = middleware.show("missing").await.unwrap_err();
        assert_eq!(err, AppError::NotFound("category 'missing'".to_string()));
        assert_eq!(events.load(Ordering::SeqCst), 1);

        let _ = middleware.show("missing-again").await;
        assert_eq!(events.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn chain_builder_wires_logging_over_validation() {
        use crate::modules::category::infrastructure::memory::InMemoryCategoryRepository;
        use crate::shared::identifier::UuidIdGenerator;

        let service = build_category_service(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(UuidIdGenerator),
        );

        let created = service
            .create(NewCategory {
                name: Some("Drama".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.name, "drama");

        let err = service.show("  ").await.unwrap_err();
        assert_eq!(err, AppError::CouldNotBeEmpty("category id".to_string()));
    }
}
