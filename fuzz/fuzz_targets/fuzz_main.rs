// SPDX-License-Identifier: AGPL-3.0-or-later
#![no_main]

use blockwright_core::formats::BlockTextHandler;
use blockwright_core::{format_html, ParseConfig, RenderConfig, Renderer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let handler = BlockTextHandler::new();
    let markup = handler.format(text, &ParseConfig::default());
    assert!(!markup.blocks.is_empty());

    // Marker text must survive a second pass with the same block shape
    if let Ok(rendered) = handler.render(&markup, &RenderConfig::default()) {
        let again = handler.format(&rendered, &ParseConfig::default());
        if !markup.is_placeholder() {
            assert_eq!(markup.blocks.len(), again.blocks.len());
        }
    }

    let _ = format_html(text);
});
