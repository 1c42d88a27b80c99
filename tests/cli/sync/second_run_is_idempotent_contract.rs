use crate::harness::TestContext;

#[test]
fn repeated_sync_yields_identical_publish_dir() {
    let ctx = TestContext::new();

    ctx.cli().arg("sync").assert().success();
    let first = ctx.publish_snapshot();
    ctx.cli().arg("sync").assert().success();

    assert_eq!(ctx.publish_snapshot(), first);
    assert_eq!(ctx.tool_calls(), vec!["install", "run build", "run build"]);
}

#[test]
fn new_build_replaces_previous_output() {
    let ctx = TestContext::new();

    ctx.cli().arg("sync").assert().success();
    ctx.cli().env("FAKE_BUILD_VERSION", "2").arg("sync").assert().success();

    let index = std::fs::read_to_string(ctx.publish_dir().join("index.html")).unwrap();
    assert_eq!(index, "<html>2</html>");
}
