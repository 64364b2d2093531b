use bitflags::bitflags;

bitflags! {
    /// How a light sample point has been used during the evaluation of one light.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct SampleUse: u8 {
        /// Already shot at
        const SEEN = 0b01;
        /// Faces away from the shaded point
        const BACKFACE = 0b10;
    }
}

/// Per-worker usage state of light sample points.
///
/// Sized to the largest sample cache seen so far and reused between lights.
#[derive(Default)]
pub struct SampleUsageFlags {
    flags: Vec<SampleUse>,
    active: usize,
}

impl SampleUsageFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the buffer to hold at least `len` entries.
    pub fn ensure_len(&mut self, len: usize) {
        if self.flags.len() < len {
            self.flags.resize(len, SampleUse::empty());
        }
    }

    /// Clears the flags of the first `len` entries and makes them the active range.
    pub fn reset(&mut self, len: usize) {
        self.ensure_len(len);
        self.active = len;
        self.flags[..len].fill(SampleUse::empty());
    }

    /// Number of entries in the active range.
    pub fn active_len(&self) -> usize {
        self.active
    }

    /// Number of entries the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.flags.len()
    }

    pub fn get(&self, index: usize) -> SampleUse {
        self.flags[..self.active][index]
    }

    pub fn insert(&mut self, index: usize, flag: SampleUse) {
        self.flags[..self.active][index].insert(flag);
    }

    /// Clears [SampleUse::SEEN] from the active entries, keeping [SampleUse::BACKFACE].
    ///
    /// Returns `true` if any entry was seen.
    pub fn recycle_seen(&mut self) -> bool {
        let mut any_seen = false;
        for f in &mut self.flags[..self.active] {
            if f.contains(SampleUse::SEEN) {
                f.remove(SampleUse::SEEN);
                any_seen = true;
            }
        }
        any_seen
    }
}

#[cfg(test)]
mod tests {
    use super::{SampleUsageFlags, SampleUse};

    #[test]
    fn recycle() {
        let mut flags = SampleUsageFlags::new();
        flags.reset(4);
        flags.insert(0, SampleUse::SEEN);
        flags.insert(1, SampleUse::BACKFACE);
        assert!(flags.recycle_seen());
        assert_eq!(flags.get(0), SampleUse::empty());
        assert_eq!(flags.get(1), SampleUse::BACKFACE);
        assert!(!flags.recycle_seen());
    }

    #[test]
    fn reuses_storage() {
        let mut flags = SampleUsageFlags::new();
        flags.reset(8);
        flags.insert(7, SampleUse::SEEN);
        flags.reset(2);
        assert_eq!(flags.capacity(), 8);
        flags.reset(8);
        assert_eq!(flags.get(7), SampleUse::empty());
        assert_eq!(flags.active_len(), 8);
    }
}
