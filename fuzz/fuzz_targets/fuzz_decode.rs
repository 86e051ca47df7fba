#![no_main]
use libfuzzer_sys::fuzz_target;
use webp_atlas::{DecodeRequest, Limits, RowOrder};

fuzz_target!(|data: &[u8]| {
    // Probe and decode must never panic, whatever the input
    let _ = webp_atlas::ImageInfo::from_bytes(data);
    let Ok(dims) = webp_atlas::probe_dimensions(data) else {
        return;
    };

    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    for (order, mipmaps) in [(RowOrder::BottomUp, false), (RowOrder::TopDown, true)] {
        if let Ok(raster) = DecodeRequest::new(data)
            .with_dimensions(dims)
            .with_limits(&limits)
            .with_row_order(order)
            .with_mipmaps(mipmaps)
            .decode()
        {
            assert_eq!(raster.image_bytes().len(), dims.width as usize * dims.height as usize * 4);
        }
    }
});
