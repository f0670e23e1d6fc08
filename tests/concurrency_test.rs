mod utils;

use std::sync::Arc;

use futures::future::join_all;

use media_catalog::modules::genre::application::middleware::build_genre_service;
use media_catalog::modules::genre::domain::{Genre, GenreRepository};
use media_catalog::modules::genre::infrastructure::memory::InMemoryGenreRepository;

use utils::{new_genre, SequentialIdGenerator};

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn sixteen_concurrent_readers_observe_identical_slices() {
    let repo = Arc::new(InMemoryGenreRepository::new());

    for i in 0..100 {
        repo.store(Genre::new(format!("g-{:03}", i), format!("genre {}", i)).unwrap())
            .await
            .unwrap();
    }

    let expected = repo.get_all().await.unwrap();
    assert_eq!(expected.len(), 100);

    let readers = (0..16).map(|_| {
        let repo = repo.clone();
        tokio::spawn(async move { repo.get_all().await })
    });

    for result in join_all(readers).await {
        let slice = result.unwrap().unwrap();
        assert_eq!(slice, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_writers_and_readers_never_observe_partial_state() {
    let repo = Arc::new(InMemoryGenreRepository::new());
    let service = build_genre_service(repo.clone(), Arc::new(SequentialIdGenerator::default()));

    let writers = (0..32).map(|i| {
        let service = service.clone();
        tokio::spawn(async move { service.create(new_genre(&format!("genre {}", i))).await })
    });
    let readers = (0..32).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.list().await })
    });

    for result in join_all(writers).await {
        result.unwrap().unwrap();
    }
    for result in join_all(readers).await {
        // Every read sees a consistent prefix of the final state.
        let snapshot = result.unwrap().unwrap();
        assert!(snapshot.len() <= 32);
        for genre in &snapshot {
            assert!(genre.name.starts_with("genre "));
        }
    }

    assert_eq!(service.list().await.unwrap().len(), 32);
}
