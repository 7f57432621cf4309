#![allow(dead_code, unused_imports)]

pub(crate) mod completion_server;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;
