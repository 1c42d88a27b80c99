//! Shell stand-in for the package manager.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Behaves like `npm ci|install|run build` for a static site.
///
/// Every invocation's arguments are appended to `$FAKE_NPM_LOG`. Behavior knobs:
/// `FAKE_INSTALL_EXIT`, `FAKE_BUILD_EXIT`, `FAKE_SKIP_OUTPUT`, `FAKE_BUILD_VERSION`.
const SCRIPT: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_NPM_LOG"
case "$1" in
  ci|install)
    if [ -n "$FAKE_INSTALL_EXIT" ]; then
      echo "install exploded" >&2
      exit "$FAKE_INSTALL_EXIT"
    fi
    mkdir -p node_modules
    ;;
  run)
    if [ -n "$FAKE_BUILD_EXIT" ]; then
      echo "build exploded" >&2
      exit "$FAKE_BUILD_EXIT"
    fi
    if [ -z "$FAKE_SKIP_OUTPUT" ]; then
      mkdir -p dist/assets
      printf '<html>%s</html>' "${FAKE_BUILD_VERSION:-1}" > dist/index.html
      printf 'app' > dist/assets/app.js
    fi
    ;;
esac
exit 0
"#;

pub(crate) fn install(path: &Path) {
    fs::write(path, SCRIPT).expect("Failed to write fake package manager");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake package manager executable");
}
