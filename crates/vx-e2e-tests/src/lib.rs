//! Test-only crate. The actual suites live in `tests/`; this library
//! target exists so the package participates in the workspace build.
