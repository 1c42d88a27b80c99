use crate::harness::TestContext;

#[test]
fn pubsync_toml_supplies_source_and_publish_locations() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.repo_dir().join("www")).unwrap();
    ctx.write_config(
        r#"
[source]
dir = "../frontend"

[publish]
dir = "www"
keep_marker = ".keep"
"#,
    );
    std::fs::write(ctx.repo_dir().join("www/.keep"), "marker").unwrap();

    ctx.cli().env_remove("PUBSYNC_SOURCE_DIR").arg("sync").assert().success();

    let www = ctx.repo_dir().join("www");
    assert!(www.join("index.html").exists());
    assert_eq!(std::fs::read_to_string(www.join(".keep")).unwrap(), "marker");
    assert!(!ctx.publish_dir().join("index.html").exists());
}

#[test]
fn source_flag_beats_environment() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("PUBSYNC_SOURCE_DIR", ctx.home().join("elsewhere"))
        .args(["sync", "--source"])
        .arg(ctx.source_dir())
        .assert()
        .success();

    assert!(ctx.publish_dir().join("index.html").exists());
}

#[test]
fn publish_dir_at_repository_root_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("[publish]\ndir = \".\"\n");
    std::fs::write(ctx.repo_dir().join("Dockerfile"), "FROM nginx").unwrap();

    ctx.cli()
        .arg("sync")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("publish.dir must name a subdirectory"));

    assert!(ctx.repo_dir().join("Dockerfile").exists());
    assert!(ctx.repo_dir().join("pubsync.toml").exists());
    assert!(ctx.tool_calls().is_empty());
}
