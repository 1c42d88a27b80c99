#![allow(dead_code)]

pub(crate) mod fake_tool;

pub(crate) use test_context::TestContext;
