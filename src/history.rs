//! Fixed-capacity ring of per-tick temperature deltas.
//!
//! Backing storage is a `heapless::Vec` pre-filled to the configured
//! window at construction — no heap, no growth, RAM cost is
//! `window * 4` bytes plus two indices.

use heapless::Vec;

/// Hard upper bound on the gradient window (config `window` is `u8`).
pub const MAX_WINDOW: usize = 255;

/// Circular overwrite buffer of gradient samples.
///
/// The most recently written `len()` slots hold valid deltas; slots
/// beyond that, before the ring first fills, are unwritten zeros and
/// are excluded from the mean.
#[derive(Debug, Clone)]
pub struct DeltaHistory {
    slots: Vec<f32, MAX_WINDOW>,
    head: usize,
    count: usize,
}

impl DeltaHistory {
    /// Create a ring holding `window` deltas. `window` must be in
    /// `1..=MAX_WINDOW`; [`EngineConfig::validate`] enforces this
    /// upstream.
    ///
    /// [`EngineConfig::validate`]: crate::config::EngineConfig::validate
    pub fn new(window: usize) -> Self {
        debug_assert!(window >= 1 && window <= MAX_WINDOW);
        let mut slots = Vec::new();
        for _ in 0..window.min(MAX_WINDOW).max(1) {
            let _ = slots.push(0.0);
        }
        Self {
            slots,
            head: 0,
            count: 0,
        }
    }

    /// Overwrite the slot at the write index and advance it, wrapping at
    /// capacity. The valid count saturates at capacity — the ring never
    /// shrinks. Always succeeds.
    pub fn push(&mut self, delta: f32) {
        self.slots[self.head] = delta;
        self.head = (self.head + 1) % self.slots.len();
        if self.count < self.slots.len() {
            self.count += 1;
        }
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Count of valid deltas (saturates at `capacity()`).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Next write position. Exposed for the diagnostic dump only.
    pub fn write_index(&self) -> usize {
        self.head
    }

    /// Slot view in storage order, including unwritten zeros before the
    /// ring first fills. Exposed for the diagnostic dump only.
    pub fn slots(&self) -> &[f32] {
        &self.slots
    }

    /// Arithmetic mean of the valid deltas. Storage order does not
    /// affect the sum.
    ///
    /// Returns 0.0 on an empty ring; the engine only computes the mean
    /// once the ring is full, so that path is unreachable in normal
    /// operation.
    pub fn mean(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let sum: f32 = self.slots[..self.count].iter().sum();
        sum / self.count as f32
    }
}
