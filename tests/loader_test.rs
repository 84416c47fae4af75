use std::fs::File;
use std::io::Write;

use hook_gateway::hook::{DiagnosticKind, HookError, HookValidator, HeaderSpec};
use hook_gateway::loader::HookLoader;
use hook_gateway::schema::SchemaCatalog;
use tempfile::tempdir;

fn loader() -> HookLoader {
    let catalog = SchemaCatalog::builtin().unwrap();
    HookLoader::new(HookValidator::new(&catalog).unwrap())
}

fn write_file(dir: &std::path::Path, name: &str, content: &str) {
    let mut file = File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[tokio::test]
async fn test_load_hook_directory() {
    let dir = tempdir().unwrap();

    write_file(dir.path(), "playground.json", r#"{"destination": "/playground/hooked", "methods": ["PUT"]}"#);
    write_file(dir.path(), "legacy.json", r#"{"destination": "/legacy", "staticHeaders": {"x-a": 1}}"#);
    write_file(dir.path(), "broken.json", r#"{"destination": "/", "headers": [], "staticHeaders": {}}"#);
    write_file(dir.path(), "garbage.json", "{not json");
    // JSON이 아닌 파일은 무시되어야 함
    write_file(dir.path(), "README.md", "# hooks");

    let set = loader().load_dir(dir.path()).await.unwrap();

    assert_eq!(set.hooks.len(), 2);
    assert_eq!(set.rejected.len(), 2);
    assert!(!set.is_clean());

    let playground = set.get("playground").unwrap();
    assert_eq!(playground.destination.as_str(), "/playground/hooked");
    assert!(matches!(set.get("legacy").unwrap().headers, HeaderSpec::Static(_)));

    let (_, broken) = set.rejected.iter().find(|(name, _)| name == "broken").unwrap();
    match broken {
        HookError::Invalid(diagnostics) => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics.count_of(DiagnosticKind::MutualExclusion), 1);
        }
        other => panic!("예상하지 못한 오류: {}", other),
    }

    let (_, garbage) = set.rejected.iter().find(|(name, _)| name == "garbage").unwrap();
    assert!(matches!(garbage, HookError::Parse { .. }));
}

#[tokio::test]
async fn test_missing_directory_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let result = loader().load_dir(&missing).await;
    assert!(matches!(result, Err(HookError::FileError { .. })));
}

#[test]
fn test_load_str() {
    let loader = loader();
    let hook = loader.load_str("inline", r#"{"destination": "/inline", "type": "before"}"#).unwrap();
    assert_eq!(hook.destination.as_str(), "/inline");

    let result = loader.load_str("inline", r#"{"destination": "/inline", "expireAfter": -1}"#);
    assert!(matches!(result, Err(HookError::Invalid(_))));
}

#[tokio::test]
async fn test_load_file() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "timed.json", r#"{"destination": "/timed", "expireAfter": 30.0}"#);

    let loader = loader();
    let hook = loader.load_file(dir.path().join("timed.json"), "timed").await.unwrap();
    assert_eq!(hook.expire_after, Some(30));

    let result = loader.load_file(dir.path().join("missing.json"), "missing").await;
    assert!(matches!(result, Err(HookError::FileError { .. })));
}
