//! Tier 4: loading datasets and configuration from disk.

use friendgraph::{
    load_dataset_file, Error, Executor, Explorer, ExplorerConfig, GraphSnapshot,
};

use crate::test_utils::*;

const DATASET: &str = r#"{
  "users": [
    {"id": 1, "name": "Alice Johnson", "username": "alice", "email": "alice@example.com",
     "bio": "Hiker", "avatar": "/avatars/1.png", "friends": [2, 3],
     "interactions": [{"userId": 2, "weight": 8}, {"userId": 3, "weight": 2}]},
    {"id": 2, "name": "Bob Smith", "username": "bob", "email": "bob@example.com",
     "bio": "", "avatar": "/avatars/2.png", "friends": [1, 4],
     "interactions": [{"userId": 1, "weight": 8}, {"userId": 4, "weight": 6}]},
    {"id": 3, "name": "Carol White", "username": "carol", "email": "carol@example.com",
     "bio": "", "avatar": "/avatars/3.png", "friends": [1, 4]},
    {"id": 4, "name": "Dan Brown", "username": "dan", "email": "dan@example.com",
     "bio": "", "avatar": "/avatars/4.png", "friends": [2, 3, 9],
     "interactions": [{"userId": 2, "weight": 6}]}
  ]
}"#;

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn explorer_from_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "users.json", DATASET);
    let ex = Explorer::from_dataset_file(&path, ExplorerConfig::default()).unwrap();

    // the dangling id 9 in dan's friends is filtered out
    assert_eq!(ids(&ex.get_direct_friends(4).unwrap()), vec![2, 3]);

    let s = ex.get_friend_suggestions(1).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].user.username, "dan");
    assert_eq!(ids(&s[0].mutual_friends), vec![2, 3]);
    // via bob: min(8, 6) = 6; via carol: carol has no entry for dan, so 0
    assert_eq!(s[0].interaction_weight, 6);
    assert_eq!(s[0].score, 2.0 * 2.0 + 6.0);
}

#[test]
fn exported_snapshot_reloads_same_users() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = load_dataset_file(write(&dir, "users.json", DATASET)).unwrap();
    let exported = serde_json::to_string_pretty(&snapshot.to_dataset()).unwrap();
    let reloaded = load_dataset_file(write(&dir, "export.json", &exported)).unwrap();
    assert_eq!(reloaded.users(), snapshot.users());
}

#[test]
fn config_file_drives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write(
        &dir,
        "explorer.toml",
        "default_interaction_weight = 3\n\n[suggestions]\nmax_level = 4\nmin_mutual_friends = 1\n",
    );
    let config = ExplorerConfig::from_file(&config_path).unwrap();
    assert_eq!(config.suggestions.alpha, 2.0);

    let ex = Explorer::from_users(seed_users(), config).unwrap();
    // level 4 reaches F and G from D, but they share no friend with D
    let s = ex.get_friend_suggestions(D).unwrap();
    let mut found: Vec<_> = s.iter().map(|s| s.user.id).collect();
    found.sort();
    assert_eq!(found, vec![A, E]);

    assert!(ex.add_friend(D, F).unwrap());
    assert_eq!(ex.interaction_weight(F, D).unwrap(), 3);
}

#[test]
fn invalid_config_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "explorer.toml", "[suggestions]\nalpha = -1.0\n");
    assert!(ExplorerConfig::from_file(&path).is_err());
}

#[test]
fn duplicate_usernames_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "users.json",
        r#"{"users": [{"id": 1, "name": "A", "username": "same"},
                      {"id": 2, "name": "B", "username": "same"}]}"#,
    );
    let err = Executor::from_dataset_file(&path, ExplorerConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn empty_dataset_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = load_dataset_file(write(&dir, "users.json", r#"{"users": []}"#)).unwrap();
    assert_eq!(snapshot.user_count(), GraphSnapshot::new().user_count());
}
