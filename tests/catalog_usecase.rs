use futures::StreamExt;
use marquee::catalog::CatalogMovies;
use marquee::domain::GetPopularMovies;

#[tokio::test]
async fn bundled_catalog_emits_once_sorted_by_popularity() {
    let use_case = CatalogMovies::bundled();
    let mut stream = use_case.invoke();

    let movies = stream
        .next()
        .await
        .expect("one emission")
        .expect("bundled catalog loads");
    assert!(!movies.is_empty());
    for pair in movies.windows(2) {
        assert!(pair[0].popularity >= pair[1].popularity);
    }
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn catalog_file_is_read_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.toml");
    std::fs::write(
        &path,
        r#"
[[movies]]
id = 1
title = "Quiet One"
popularity = 1.5

[[movies]]
id = 2
title = "Blockbuster"
popularity = 99.0
vote_average = 7.1
release_date = "2023-06-01"
"#,
    )
    .unwrap();

    let use_case = CatalogMovies::from_file(&path);
    let movies = use_case
        .invoke()
        .next()
        .await
        .unwrap()
        .expect("catalog file loads");

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Blockbuster");
    assert_eq!(movies[1].title, "Quiet One");
    // Unspecified fields fall back to serde defaults.
    assert_eq!(movies[1].vote_average, 0.0);
    assert!(movies[1].release_date.is_empty());
}

#[tokio::test]
async fn unreadable_catalog_becomes_an_error_emission() {
    let use_case = CatalogMovies::from_file("/nonexistent/movies.toml");
    let result = use_case.invoke().next().await.expect("one emission");
    let err = result.expect_err("missing file must surface as Err");
    assert!(err.as_str().contains("cannot read catalog"));
}

#[tokio::test]
async fn each_invoke_opens_a_fresh_subscription() {
    let use_case = CatalogMovies::bundled();
    let first = use_case.invoke().next().await.unwrap().unwrap();
    let second = use_case.invoke().next().await.unwrap().unwrap();
    assert_eq!(first, second);
}
