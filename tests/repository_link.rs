mod common;

use std::sync::Arc;
use tinylink::domain::entities::NewLink;
use tinylink::domain::repositories::{LinkRepository, StoreError};
use tinylink::infrastructure::persistence::SqliteLinkRepository;

#[tokio::test]
async fn test_insert_link() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let new_link = NewLink {
        code: "abc123XYZ".to_string(),
        target: "http://example.com/page".to_string(),
    };

    let result = repo.insert(new_link).await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert_eq!(link.code, "abc123XYZ");
    assert_eq!(link.target, "http://example.com/page");
    assert!(link.id > 0);
}

#[tokio::test]
async fn test_insert_then_find_round_trip() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.insert(NewLink {
        code: "abc123XYZ".to_string(),
        target: "http://example.com/page".to_string(),
    })
    .await
    .unwrap();

    let found = repo.find_by_code("abc123XYZ").await.unwrap();

    assert!(found.is_some());
    assert_eq!(found.unwrap().target, "http://example.com/page");
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("doesNotExist").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_duplicate_code_is_conflict() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let new_link = NewLink {
        code: "dupe12345".to_string(),
        target: "https://example.com/a".to_string(),
    };
    repo.insert(new_link.clone()).await.unwrap();

    let result = repo
        .insert(NewLink {
            target: "https://example.com/b".to_string(),
            ..new_link
        })
        .await;

    assert!(matches!(result, Err(StoreError::DuplicateCode)));
}

#[tokio::test]
async fn test_repeated_reads_are_stable() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.insert(NewLink {
        code: "stable123".to_string(),
        target: "https://example.com/stable".to_string(),
    })
    .await
    .unwrap();

    for _ in 0..5 {
        let link = repo.find_by_code("stable123").await.unwrap().unwrap();
        assert_eq!(link.target, "https://example.com/stable");
    }
}

#[tokio::test]
async fn test_same_target_under_two_codes() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    for code in ["codeAAAAA", "codeBBBBB"] {
        repo.insert(NewLink {
            code: code.to_string(),
            target: "https://example.com/shared".to_string(),
        })
        .await
        .unwrap();
    }

    let a = repo.find_by_code("codeAAAAA").await.unwrap().unwrap();
    let b = repo.find_by_code("codeBBBBB").await.unwrap().unwrap();

    assert_eq!(a.target, b.target);
    assert_ne!(a.id, b.id);
}
