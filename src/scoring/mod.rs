// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are error ratios, so smaller is better. `core` turns edit counts into
//! per-document scores; `ranking` orders them.

mod core;
pub mod ranking;

pub use core::*;
