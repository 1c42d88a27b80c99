use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn sync_replaces_stale_content_and_keeps_marker() {
    let ctx = TestContext::new();
    ctx.write_publish(".gitkeep", "tracked");
    ctx.write_publish("old.html", "stale");
    ctx.write_publish("legacy/vendor.js", "stale");

    ctx.cli()
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/6] Validating paths"))
        .stdout(predicate::str::contains("[6/6] Copying"))
        .stdout(predicate::str::contains("✅ Published build output"))
        .stdout(predicate::str::contains("docker build -t frontend-proxy"));

    let mut expected = ctx.output_snapshot();
    expected.push((".gitkeep".to_string(), "tracked".to_string()));
    expected.sort();
    assert_eq!(ctx.publish_snapshot(), expected);
    assert!(!ctx.publish_dir().join("legacy").exists());
}
