//! Byte-offset spans over a source buffer.

use serde::{Deserialize, Serialize};

/// Half-open byte range into the source buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "start <= end");
        Self { start, end }
    }

    pub const fn empty(at: u32) -> Self {
        Self { start: at, end: at }
    }

    /// Span length in bytes.
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub const fn contains(self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Spans stay 8 bytes; tokens carry them by value.
const _: [(); 8] = [(); core::mem::size_of::<Span>()];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let span = Span::new(2, 5);
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn empty_span_has_zero_len() {
        let span = Span::empty(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }
}
