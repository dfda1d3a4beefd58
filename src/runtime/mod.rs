// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser runtime.
//!
//! The widgets are platform-neutral; this is where they meet `web-sys`. Only
//! compiled with the `wasm` feature, which is what `cargo xtask build-wasm`
//! enables.

#[cfg(feature = "wasm")]
mod console;

#[cfg(feature = "wasm")]
pub mod wasm;
