//! Cross-crate integration tests for the corrstat workspace live in `tests/`.
