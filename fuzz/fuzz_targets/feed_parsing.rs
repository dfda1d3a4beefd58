// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for feed parsing.
//!
//! The feed is whatever the server returns. A bad deploy can serve HTML, half a
//! file, or JSON of the wrong shape; every one of those must come back as an
//! error, never a panic.

#![no_main]

use lantern::widgets::{FeedResponse, IndexLoader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &[u8]| {
    let response = FeedResponse::ok(String::from_utf8_lossy(body).into_owned());

    if let Ok(index) = IndexLoader::default().parse(&response) {
        // Anything that parsed must also be searchable
        let _ = index.search("compose");
        for doc in index.documents() {
            let _ = index.search(&doc.title);
        }
    }
});
