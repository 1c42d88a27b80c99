use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn failed_install_stops_before_build() {
    let ctx = TestContext::new();
    ctx.write_publish("index.html", "live");
    let before = ctx.publish_snapshot();

    ctx.cli()
        .env("FAKE_INSTALL_EXIT", "4")
        .arg("sync")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Dependency install"));

    assert_eq!(ctx.tool_calls(), vec!["install"]);
    assert_eq!(ctx.publish_snapshot(), before);
}
