use crate::SrcId;
use std::{fmt, ops::Range};

/// Character offsets `start..end` into one source
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    src: SrcId,
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(src: SrcId, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "inverted span {:?}", range);
        Span {
            src,
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Zero-width span, used for end of input
    pub fn point(src: SrcId, offset: usize) -> Self {
        Span::new(src, offset..offset)
    }

    pub fn src(&self) -> SrcId {
        self.src
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.src, self.start, self.end)
    }
}

impl chumsky::Span for Span {
    type Context = SrcId;
    type Offset = usize;

    fn new(src: SrcId, range: Range<usize>) -> Self {
        Span::new(src, range)
    }

    fn context(&self) -> SrcId {
        self.src
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl ariadne::Span for Span {
    type SourceId = SrcId;

    fn source(&self) -> &SrcId {
        &self.src
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

#[cfg(test)]
#[path = "../tests/unit/span_tests.rs"]
mod tests;
