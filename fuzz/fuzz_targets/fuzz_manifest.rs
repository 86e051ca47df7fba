#![no_main]
use libfuzzer_sys::fuzz_target;
use webp_atlas::import::{parse_manifest, to_sprite_rect};

fuzz_target!(|text: &str| {
    // Parsing and rect conversion must never panic; accepted rects stay inside the atlas
    let Ok(entries) = parse_manifest(text) else {
        return;
    };
    for entry in entries {
        if let Ok(rect) = to_sprite_rect(&entry.name, entry.frame, 256, 128) {
            assert!(rect.x + rect.width <= 256);
            assert!(rect.y + rect.height <= 128);
        }
    }
});
