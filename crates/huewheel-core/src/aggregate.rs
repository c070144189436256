//! (hue, saturation) frequency aggregation over flat pixel buffers.
//!
//! Samples are `pixel_size` consecutive bytes (3 for RGB, 4 for RGBA). Only
//! the first three channels are converted; lightness and alpha are dropped.
//! Keys are kept in first-seen order so iteration, and everything drawn from
//! it, is deterministic for a given buffer.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::color::{HueSat, Rgb, rgb_to_hsl};
use crate::error::{HueWheelError, Result};

/// Occurrence counts keyed by (hue, saturation), in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    index: HashMap<HueSat, usize>,
    entries: Vec<(HueSat, u64)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a whole pixel buffer sequentially.
    pub fn from_pixels(pixels: &[u8], pixel_size: usize) -> Result<Self> {
        check_layout(pixels, pixel_size)?;
        let mut map = Self::new();
        map.scan(pixels, pixel_size);
        Ok(map)
    }

    /// Scan a pixel buffer across the rayon pool.
    ///
    /// Shards are contiguous sample ranges merged back in order, so the result
    /// equals [`FrequencyMap::from_pixels`] in counts and in key order.
    pub fn from_pixels_par(pixels: &[u8], pixel_size: usize) -> Result<Self> {
        check_layout(pixels, pixel_size)?;

        let samples = pixels.len() / pixel_size;
        let per_shard = samples.div_ceil(rayon::current_num_threads()).max(1);

        let shards: Vec<Self> = pixels
            .par_chunks(per_shard * pixel_size)
            .map(|chunk| {
                let mut shard = Self::new();
                shard.scan(chunk, pixel_size);
                shard
            })
            .collect();

        let mut merged = Self::new();
        for shard in shards {
            merged.merge(shard);
        }
        Ok(merged)
    }

    fn scan(&mut self, pixels: &[u8], pixel_size: usize) {
        for sample in pixels.chunks_exact(pixel_size) {
            let hsl = rgb_to_hsl(Rgb::new(sample[0], sample[1], sample[2]));
            self.add(hsl.hue_sat(), 1);
        }
    }

    /// Add `count` occurrences of `key`.
    pub fn add(&mut self, key: HueSat, count: u64) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, count));
            }
        }
    }

    /// Fold another map into this one. Keys new to `self` are appended in
    /// `other`'s order.
    pub fn merge(&mut self, other: Self) {
        for (key, count) in other.entries {
            self.add(key, count);
        }
    }

    /// Exact count for `key`, 0 when never seen.
    pub fn count(&self, key: HueSat) -> u64 {
        self.index
            .get(&key)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of samples counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HueSat, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Keys seen at least `threshold` times, in first-seen order.
    pub fn filter(&self, threshold: u32) -> Result<Vec<HueSat>> {
        if threshold == 0 {
            return Err(HueWheelError::input("threshold", threshold));
        }
        Ok(self
            .entries
            .iter()
            .filter(|&&(_, count)| count >= u64::from(threshold))
            .map(|&(key, _)| key)
            .collect())
    }
}

/// Count a pixel buffer and keep the keys seen at least `threshold` times.
pub fn aggregate_colors(pixels: &[u8], pixel_size: usize, threshold: u32) -> Result<Vec<HueSat>> {
    FrequencyMap::from_pixels(pixels, pixel_size)?.filter(threshold)
}

fn check_layout(pixels: &[u8], pixel_size: usize) -> Result<()> {
    if !matches!(pixel_size, 3 | 4) {
        return Err(HueWheelError::InvalidPixelSize(pixel_size));
    }
    if pixels.len() % pixel_size != 0 {
        return Err(HueWheelError::InvalidBuffer {
            len: pixels.len(),
            stride: pixel_size,
        });
    }
    Ok(())
}
