use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Calculate progress (0-255) based on elapsed time and duration
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if duration.as_micros() == 0 {
        return 255;
    }
    if elapsed.as_micros() >= duration.as_micros() {
        return 255;
    }

    ((elapsed.as_micros() * 255) / duration.as_micros()) as u8
}

/// Map a unit value (`0.0..=1.0`, clamped) onto `0..=255`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Elapsed time in seconds
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn as_secs_f32(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1_000_000.0
}

/// Convert seconds into a duration, negative and NaN values become zero
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_secs_f32(seconds: f32) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::from_micros(0);
    }
    Duration::from_micros(libm::roundf(seconds * 1_000_000.0) as u64)
}

/// Deterministic 32-bit hash of three words
///
/// SplitMix64-style mixing, then folded down to u32.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn hash32(seed: u32, a: u64, b: u32) -> u32 {
    let mut z = ((seed as u64) << 32 | b as u64) ^ a.rotate_left(17);
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (z ^ (z >> 31)) as u32
}

/// Hash output mapped onto `0.0..1.0`
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn hash_unit(seed: u32, a: u64, b: u32) -> f32 {
    (hash32(seed, a, b) >> 8) as f32 / (1u32 << 24) as f32
}
