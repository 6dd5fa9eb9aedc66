// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration specs for the sift CLI.
//!
//! The spec files under `cli/` are compiled as `[[test]]` targets of the
//! cli crate (see `crates/cli/Cargo.toml`); this crate exists so the
//! workspace owns the files and their dev-dependencies.
