// crates/roundtrip-core/src/config.rs
//
// Positional argument validation. Slots are 1-indexed after the program name
// and checked in order; the first bad slot stops parsing.

use std::ffi::OsStr;

use crate::error::{HarnessError, Result};

/// Number of positional values expected after the program name.
pub const ARG_COUNT: usize = 6;

pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Smallest accepted buffer alignment: the native pointer width.
pub const MIN_ALIGNMENT: usize = std::mem::size_of::<*const u8>();

pub const SLOT_NAMES: [&str; ARG_COUNT] = [
    "type_size",
    "element_count",
    "buffer_alignment",
    "compression_level",
    "shuffle_enabled",
    "thread_count",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestConfiguration {
    pub type_size: u32,
    pub element_count: u32,
    pub buffer_alignment: usize,
    pub compression_level: u8,
    pub shuffle_enabled: bool,
    pub thread_count: u32,
}

impl TestConfiguration {
    /// `type_size * element_count`, checked.
    pub fn buffer_size(&self) -> Result<usize> {
        (self.type_size as usize)
            .checked_mul(self.element_count as usize)
            .ok_or(HarnessError::BufferSizeOverflow {
                type_size: self.type_size,
                element_count: self.element_count,
            })
    }
}

/// Parse the values that follow the program name. Values need not be UTF-8;
/// one that is not fails its own slot.
pub fn parse_args<S: AsRef<OsStr>>(values: &[S]) -> Result<TestConfiguration> {
    if values.len() != ARG_COUNT {
        return Err(HarnessError::ArgumentCount {
            expected: ARG_COUNT,
            given: values.len(),
        });
    }

    let type_size = slot(values, 1, at_least_one)?;
    let element_count = slot(values, 2, at_least_one)?;
    let buffer_alignment = slot(values, 3, |v| {
        if !v.is_power_of_two() {
            return Err("must be a power of two".to_string());
        }
        if (v as usize) < MIN_ALIGNMENT {
            return Err(format!("must be at least {MIN_ALIGNMENT}"));
        }
        Ok(v as usize)
    })?;
    let compression_level = slot(values, 4, |v| {
        if v > MAX_COMPRESSION_LEVEL {
            return Err(format!("must be in 0..={MAX_COMPRESSION_LEVEL}"));
        }
        Ok(v as u8)
    })?;
    let shuffle_enabled = slot(values, 5, |v| match v {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err("must be 0 or 1".to_string()),
    })?;
    let thread_count = slot(values, 6, at_least_one)?;

    Ok(TestConfiguration {
        type_size,
        element_count,
        buffer_alignment,
        compression_level,
        shuffle_enabled,
        thread_count,
    })
}

fn at_least_one(v: u32) -> std::result::Result<u32, String> {
    if v < 1 {
        return Err("must be at least 1".to_string());
    }
    Ok(v)
}

fn slot<S, T, F>(values: &[S], slot: usize, check: F) -> Result<T>
where
    S: AsRef<OsStr>,
    F: FnOnce(u32) -> std::result::Result<T, String>,
{
    let raw = values[slot - 1].as_ref();
    let fail = |reason: String| HarnessError::ArgumentParse {
        slot,
        name: SLOT_NAMES[slot - 1],
        value: raw.to_string_lossy().into_owned(),
        reason,
    };

    let text = raw
        .to_str()
        .ok_or_else(|| fail("not valid UTF-8".to_string()))?;
    let v = parse_u32(text).map_err(fail)?;
    check(v).map_err(fail)
}

fn parse_u32(raw: &str) -> std::result::Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|e| format!("not an unsigned 32-bit integer ({e})"))
}
