//! Element types that stress how a sort relocates elements: large values, padded layouts and
//! the rectangle records a packer sorts before placement.

use std::cmp::Ordering;

// Very large stack value.
#[repr(C)]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct KiloByte {
    values: [i64; 128],
}

impl KiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0i64; 128];
        let mut val_i64 = val as i64;

        for elem in &mut values {
            *elem = val_i64;
            val_i64 = std::hint::black_box(val_i64 + 1);
        }
        Self { values }
    }

    fn key(&self) -> i64 {
        self.values[11] + self.values[55] + self.values[77]
    }
}

impl PartialOrd for KiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

// 16 byte stack value, with more expensive comparison.
#[repr(C)]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct F128 {
    x: f64,
    y: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        let val_f = (val as f64) + (i32::MAX as f64) + 10.0;

        let x = val_f + 0.1;
        let y = val_f.log(4.1);

        assert!(y < x);
        assert!(x.is_normal() && y.is_normal());

        Self { x, y }
    }
}

// Only normal floats are ever constructed.
impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Simulate expensive comparison function.
        let this_div = self.x / self.y;
        let other_div = other.x / other.y;

        this_div.total_cmp(&other_div)
    }
}

/// A value with padding bytes between and after its fields. Relocating it byte-wise must carry
/// the padding along without reading it as initialized data.
#[repr(C)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub struct Padded {
    tag: u8,
    // 3 bytes of padding.
    key: u32,
    flag: u8,
    // 3 bytes of padding.
}

impl Padded {
    pub fn new(val: i32) -> Self {
        Self {
            tag: (val >> 24) as u8,
            key: val as u32,
            flag: (val & 1) as u8,
        }
    }
}

/// Rectangle record as a packer hands it to its pluggable sort.
#[repr(C)]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Rect {
    pub id: i32,
    pub w: i32,
    pub h: i32,
    pub x: i32,
    pub y: i32,
    pub was_packed: i32,
}

impl Rect {
    pub fn new(id: i32, w: i32, h: i32) -> Self {
        Self {
            id,
            w,
            h,
            ..Self::default()
        }
    }

    /// Taller first, then wider first. The order a skyline packer places rectangles in.
    pub fn height_desc(a: &Self, b: &Self) -> Ordering {
        b.h.cmp(&a.h).then_with(|| b.w.cmp(&a.w))
    }

    /// Restores input order after packing.
    pub fn original_order(a: &Self, b: &Self) -> Ordering {
        a.id.cmp(&b.id)
    }
}
