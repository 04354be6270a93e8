use crate::interpreter::lexer::token::Span;
use crate::interpreter::value::StrRef;

/// Initial capacity of an arena's backing buffer, in bytes.
pub const DEFAULT_CAPACITY: usize = 16 * 1024;

/// Backing storage for strings produced at evaluation time.
///
/// Source literals are referenced in place and never enter the arena;
/// only concatenation results and strings read from the input stream are
/// appended here. Allocations hand out `(offset, length)` spans instead
/// of pointers, so the buffer is free to reallocate as it grows without
/// invalidating anything already handed out.
///
/// Nothing is ever freed individually. The whole buffer is recycled with
/// [`Arena::reset`] between runs.
pub struct Arena {
    bytes: Vec<u8>,
}

impl Arena {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Copies `bytes` into the arena and returns its span.
    pub fn alloc(&mut self, bytes: &[u8]) -> Span {
        let offset = self.bytes.len();
        self.bytes.extend_from_slice(bytes);
        Span::new(offset, bytes.len())
    }

    /// Appends the bytes of `left` followed by `right` and returns the
    /// combined span.
    ///
    /// Parts referencing the source are copied from `source`; parts
    /// already in the arena are duplicated from the buffer itself.
    ///
    /// # Example
    /// ```
    /// use lume::interpreter::arena::Arena;
    /// use lume::interpreter::lexer::token::Span;
    /// use lume::interpreter::value::StrRef;
    ///
    /// let source = b"hello world";
    /// let mut arena = Arena::new();
    ///
    /// let left = StrRef::Source(Span::new(0, 5));
    /// let right = StrRef::Source(Span::new(5, 6));
    /// let span = arena.concat(source, left, right);
    /// assert_eq!(arena.get(span), b"hello world");
    /// ```
    pub fn concat(&mut self, source: &[u8], left: StrRef, right: StrRef) -> Span {
        let offset = self.bytes.len();
        self.push_part(source, left);
        self.push_part(source, right);
        Span::new(offset, self.bytes.len() - offset)
    }

    fn push_part(&mut self, source: &[u8], part: StrRef) {
        match part {
            StrRef::Source(span) => self.bytes.extend_from_slice(span.bytes(source)),
            StrRef::Arena(span) => self.bytes.extend_from_within(span.range()),
        }
    }

    /// Resolves a span previously returned by this arena.
    #[must_use]
    pub fn get(&self, span: Span) -> &[u8] {
        span.bytes(&self.bytes)
    }

    /// Discards all allocations, keeping the buffer's capacity.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Number of bytes currently allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
