//! 8- and 16-bit fixed-point helpers.
//!
//! Everything here is integer-only so it runs on FPU-less cores.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Triangle wave over one 8-bit period: 0 → 254 → 0
#[inline]
pub const fn triangle8(phase: u8) -> u8 {
    if phase & 0x80 == 0 {
        phase << 1
    } else {
        (255 - phase) << 1
    }
}

const SIN16_BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
const SIN16_SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

/// Fast 16-bit sine approximation
///
/// `theta` covers one full turn over `0..=65535`. The result spans
/// `-32645..=32645`. Each quarter wave is approximated by eight linear
/// segments, so the output matches the widely used `FastLED` `sin16`
/// bit for bit.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]
pub const fn sin16(theta: u16) -> i16 {
    // Position inside the quarter wave, 0..=2047
    let mut offset = (theta & 0x3FFF) >> 3;
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = (offset / 256) as usize;
    let base = SIN16_BASE[section];
    let slope = SIN16_SLOPE[section] as u16;
    let section_offset = (offset as u8) / 2;

    let y = (slope * section_offset as u16 + base) as i16;
    if theta & 0x8000 != 0 { -y } else { y }
}

/// Fast 16-bit cosine approximation, see [`sin16`]
#[inline]
pub const fn cos16(theta: u16) -> i16 {
    sin16(theta.wrapping_add(16384))
}
