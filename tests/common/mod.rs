//! Fixture helpers: encode test images with libwebp and decode them with its
//! plain top-down API as a reference.

#![allow(dead_code, unsafe_code)]

use std::ffi::c_int;
use std::ptr;

use libwebp_sys::{WebPDecodeRGBA, WebPEncodeLosslessRGBA, WebPEncodeRGBA, WebPFree};

/// Copy a libwebp-owned buffer into a Vec and release it.
///
/// # Safety
/// `ptr` must point to `len` bytes allocated by libwebp.
unsafe fn take_webp_buffer(ptr: *mut u8, len: usize) -> Vec<u8> {
    assert!(!ptr.is_null(), "libwebp returned a null buffer");
    let out = unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec();
    unsafe { WebPFree(ptr.cast()) };
    out
}

pub fn encode_lossless(rgba: &[u8], width: u32, height: u32) -> Vec<u8> {
    assert_eq!(rgba.len(), width as usize * height as usize * 4);
    let mut out: *mut u8 = ptr::null_mut();
    let len = unsafe {
        WebPEncodeLosslessRGBA(
            rgba.as_ptr(),
            width as c_int,
            height as c_int,
            (width * 4) as c_int,
            &mut out,
        )
    };
    assert!(len > 0, "lossless encode failed");
    unsafe { take_webp_buffer(out, len) }
}

pub fn encode_lossy(rgba: &[u8], width: u32, height: u32, quality: f32) -> Vec<u8> {
    assert_eq!(rgba.len(), width as usize * height as usize * 4);
    let mut out: *mut u8 = ptr::null_mut();
    let len = unsafe {
        WebPEncodeRGBA(
            rgba.as_ptr(),
            width as c_int,
            height as c_int,
            (width * 4) as c_int,
            quality,
            &mut out,
        )
    };
    assert!(len > 0, "lossy encode failed");
    unsafe { take_webp_buffer(out, len) }
}

/// Reference decode: natural top-down RGBA rows.
pub fn oracle_decode(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let mut width: c_int = 0;
    let mut height: c_int = 0;
    let out = unsafe { WebPDecodeRGBA(data.as_ptr(), data.len(), &mut width, &mut height) };
    let len = width as usize * height as usize * 4;
    let pixels = unsafe { take_webp_buffer(out, len) };
    (width as u32, height as u32, pixels)
}

pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(width as usize * height as usize)
}

/// Every row gets its own color so row order is observable.
pub fn row_gradient(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[
                (y * 255 / height.max(1)) as u8,
                (x * 7) as u8,
                255 - (y * 31) as u8,
                255,
            ]);
        }
    }
    pixels
}

/// Deterministic noise, opaque or with partial alpha.
pub fn noise_pattern(width: u32, height: u32, with_alpha: bool) -> Vec<u8> {
    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    let mut state: u32 = 0xDEAD_BEEF;
    for px in pixels.chunks_exact_mut(4) {
        for c in px.iter_mut() {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *c = state as u8;
        }
        // Keep alpha non-zero: the encoder may rewrite RGB under fully transparent pixels.
        px[3] = if with_alpha { px[3] | 1 } else { 255 };
    }
    pixels
}

/// Split a raster into rows of `width * 4` bytes.
pub fn rows(pixels: &[u8], width: u32) -> Vec<&[u8]> {
    pixels.chunks_exact(width as usize * 4).collect()
}
