//! Workspace-level integration tests for SubSum-rs.
//!
//! The tests under `tests/` exercise the public APIs of `subsum-core`,
//! `subsum-fft`, and `subsum-orchestration` together.
