//! File declaration behavior

mod common;

use bookbinder::{AssemblyConfig, BindError, Bookbinder, ContentMetadata, TransformOutcome};
use common::html_page;

#[tokio::test]
async fn file_contents_are_read_as_utf8_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("chapter.html");
    let html = html_page("Chapter", "<p>from disk</p>");
    std::fs::write(&path, &html).expect("write fixture");

    let config = AssemblyConfig::builder().build().expect("valid config");
    let mut binder = Bookbinder::new(config);
    binder.file(&path, ContentMetadata::titled("Chapter"), None);

    let book = binder.assemble().await.expect("run succeeds");
    assert_eq!(book.contents.len(), 1);
    assert_eq!(book.contents[0].markup, html);
}

#[tokio::test]
async fn missing_file_fails_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.html");

    let config = AssemblyConfig::builder().build().expect("valid config");
    let mut binder = Bookbinder::new(config);
    binder.file(&path, ContentMetadata::titled("missing"), None);

    let err = binder.assemble().await.unwrap_err();
    assert!(matches!(err, BindError::FileRead { .. }));
}

#[tokio::test]
async fn empty_file_produces_no_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("blank.html");
    std::fs::write(&path, "").expect("write fixture");

    let config = AssemblyConfig::builder().build().expect("valid config");
    let mut binder = Bookbinder::new(config);
    binder.file(&path, ContentMetadata::titled("blank"), None);

    let book = binder.assemble().await.expect("empty file is not an error");
    assert!(book.contents.is_empty());
}

#[tokio::test]
async fn transform_applies_to_file_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("raw.html");
    std::fs::write(&path, "<p>draft</p>").expect("write fixture");

    let config = AssemblyConfig::builder().build().expect("valid config");
    let mut binder = Bookbinder::new(config);
    binder.file(
        &path,
        ContentMetadata::titled("edited"),
        Some(Box::new(|html| {
            Ok(TransformOutcome::Markup(html.replace("draft", "final")))
        })),
    );

    let book = binder.assemble().await.expect("run succeeds");
    assert_eq!(book.contents[0].markup, "<p>final</p>");
}

#[tokio::test]
async fn several_files_resolve_under_the_concurrency_budget() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut binder = Bookbinder::new(
        AssemblyConfig::builder()
            .concurrency(4)
            .build()
            .expect("valid config"),
    );

    for i in 0..8 {
        let path = dir.path().join(format!("part-{i}.html"));
        std::fs::write(&path, format!("<p>part {i}</p>")).expect("write fixture");
        binder.file(&path, ContentMetadata::titled(format!("part {i}")), None);
    }

    let book = binder.assemble().await.expect("run succeeds");
    let markups: Vec<String> = book.contents.iter().map(|c| c.markup.clone()).collect();
    let expected: Vec<String> = (0..8).map(|i| format!("<p>part {i}</p>")).collect();
    assert_eq!(markups, expected);
}
