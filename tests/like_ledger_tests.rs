mod helpers;

use std::sync::Arc;

use folio_likes::database::repositories::like_counter::LikeCounterRepository;
use folio_likes::interfaces::repositories::like_counter::LikeLedgerInterface;
use folio_likes::middleware::error::AppError;
use helpers::{fake_project_id, seed_likes, stored_likes};

test_with_db!(untouched_project_reads_zero_and_is_created, |db| {
    let project_id = fake_project_id();
    assert_eq!(stored_likes(&db, &project_id).await, None);

    let likes = db.like_counters.get_likes(&project_id).await;
    assert_eq!(likes, 0);
    assert_eq!(stored_likes(&db, &project_id).await, Some(0));

    // reading again does not touch the value
    assert_eq!(db.like_counters.read_likes(&project_id).await.unwrap(), 0);
});

test_with_db!(increment_creates_missing_counter_at_one, |db| {
    let project_id = fake_project_id();
    let likes = db.like_counters.increment(&project_id).await.unwrap();
    assert_eq!(likes, 1);
    assert_eq!(stored_likes(&db, &project_id).await, Some(1));
});

test_with_db!(increment_and_decrement_step_by_one, |db| {
    let project_id = fake_project_id();
    seed_likes(&db, &project_id, 5).await;

    assert_eq!(db.like_counters.increment(&project_id).await.unwrap(), 6);
    assert_eq!(db.like_counters.increment(&project_id).await.unwrap(), 7);
    assert_eq!(db.like_counters.decrement(&project_id).await.unwrap(), 6);
    assert_eq!(db.like_counters.get_likes(&project_id).await, 6);
});

test_with_db!(decrement_floors_at_zero, |db| {
    let project_id = fake_project_id();

    // absent counter
    assert_eq!(db.like_counters.decrement(&project_id).await.unwrap(), 0);
    assert_eq!(stored_likes(&db, &project_id).await, Some(0));

    db.like_counters.increment(&project_id).await.unwrap();
    for _ in 0..3 {
        assert_eq!(db.like_counters.decrement(&project_id).await.unwrap(), 0);
    }
    assert_eq!(stored_likes(&db, &project_id).await, Some(0));
});

test_with_db!(counters_are_independent_per_project, |db| {
    let first = fake_project_id();
    let second = format!("{first}-other");

    db.like_counters.increment(&first).await.unwrap();
    db.like_counters.increment(&first).await.unwrap();
    db.like_counters.increment(&second).await.unwrap();

    assert_eq!(db.like_counters.get_likes(&first).await, 2);
    assert_eq!(db.like_counters.get_likes(&second).await, 1);
});

test_with_db!(concurrent_increments_do_not_lose_updates, |db| {
    let project_id = fake_project_id();
    seed_likes(&db, &project_id, 3).await;

    let (a, b) = tokio::join!(
        db.like_counters.increment(&project_id),
        db.like_counters.increment(&project_id)
    );
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(stored_likes(&db, &project_id).await, Some(5));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let db = db.clone();
        let project_id = project_id.clone();
        handles.push(tokio::spawn(async move {
            db.like_counters.increment(&project_id).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(db.like_counters.get_likes(&project_id).await, 15);
});

test_with_db!(concurrent_decrements_never_go_negative, |db| {
    let project_id = fake_project_id();
    seed_likes(&db, &project_id, 2).await;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let db = db.clone();
        let project_id = project_id.clone();
        handles.push(tokio::spawn(async move {
            db.like_counters.decrement(&project_id).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(stored_likes(&db, &project_id).await, Some(0));
});

test_with_db!(exhausted_retry_budget_reports_conflict_without_losing_writes, |db| {
    let project_id = fake_project_id();
    let no_retries = Arc::new(LikeCounterRepository::new(db.client.clone(), 0));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let repo = no_retries.clone();
        let project_id = project_id.clone();
        handles.push(tokio::spawn(async move { repo.increment(&project_id).await }));
    }

    let mut committed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => committed += 1,
            Err(AppError::TransactionConflict { .. }) => {}
            Err(err) => panic!("unexpected ledger error: {err:?}"),
        }
    }

    assert!(committed > 0);
    assert_eq!(stored_likes(&db, &project_id).await, Some(committed));
});

test_with_db!(oversized_counter_reads_saturated, |db| {
    let project_id = fake_project_id();
    seed_likes(&db, &project_id, u32::MAX as i64 + 5).await;

    assert_eq!(db.like_counters.read_likes(&project_id).await.unwrap(), u32::MAX);
    assert_eq!(db.like_counters.increment(&project_id).await.unwrap(), u32::MAX);
    assert_eq!(stored_likes(&db, &project_id).await, Some(u32::MAX as i64 + 6));
});
