//! Test-only crate. The integration tests live under `tests/` and share the
//! sample-home harness in `tests/helpers`.
