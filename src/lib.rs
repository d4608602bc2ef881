//! Test-support root crate. Cross-crate golden tests live in `tests/`.
