//! A bump allocator scoped to a single owning component (a lexer or a
//! parser instance). Allocations never move and stay valid until the arena
//! itself is dropped; there is no way to free a single allocation early.
//!
//! Wraps `bumpalo::Bump`, capping total usage so exhaustion is observable
//! as an error instead of an unbounded `malloc` retry loop.

use bumpalo::Bump;

use crate::error::{ArenaError, ArenaResult};

/// Default capacity, chosen to match a single source file's typical AST and
/// interned-string volume.
pub const DEFAULT_CAPACITY: usize = 64 * 1024;

/// A single-owner bump allocator with a hard capacity.
pub struct Arena {
    bump: Bump,
    capacity: usize,
}

impl Arena {
    /// Creates an arena with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an arena with an explicit byte capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::new(),
            capacity,
        }
    }

    /// Bytes allocated so far.
    pub fn used(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Total capacity this arena will allow before reporting exhaustion.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check_budget(&self, requested: usize) -> ArenaResult<()> {
        if self.used() + requested > self.capacity {
            return Err(ArenaError::Exhausted {
                requested,
                available: self.capacity.saturating_sub(self.used()),
            });
        }
        Ok(())
    }

    /// Allocates a single value in the arena, returning a stable reference.
    pub fn alloc<T>(&self, value: T) -> ArenaResult<&T> {
        self.check_budget(std::mem::size_of::<T>())?;
        Ok(self.bump.alloc(value))
    }

    /// Copies a slice of values into the arena, returning a stable reference
    /// to the copy. Used for the dynamically-sized children a node only
    /// knows the length of once it finishes building them (e.g. a
    /// statement list).
    pub fn alloc_slice<T: Copy>(&self, values: &[T]) -> ArenaResult<&[T]> {
        self.check_budget(std::mem::size_of_val(values))?;
        Ok(self.bump.alloc_slice_copy(values))
    }

    /// Copies `bytes` into the arena and appends a terminating sentinel byte,
    /// returning the interned string (the sentinel is not part of the
    /// returned slice's length, but guarantees the underlying buffer is
    /// NUL-terminated for callers that need it). No deduplication is
    /// performed: repeated interning of identical bytes yields distinct
    /// allocations.
    pub fn intern_str(&self, bytes: &[u8]) -> ArenaResult<&str> {
        self.check_budget(bytes.len() + 1)?;
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        let allocated = self.bump.alloc_slice_copy(&buf);
        let text = &allocated[..bytes.len()];
        Ok(std::str::from_utf8(text).expect("intern_str: input was not valid utf-8"))
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_returns_stable_value() {
        let arena = Arena::new();
        let a = arena.alloc(42i64).unwrap();
        let b = arena.alloc(43i64).unwrap();
        assert_eq!(*a, 42);
        assert_eq!(*b, 43);
    }

    #[test]
    fn intern_str_copies_bytes() {
        let arena = Arena::new();
        let s = arena.intern_str(b"hello").unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn intern_str_no_dedup() {
        let arena = Arena::new();
        let a = arena.intern_str(b"same").unwrap();
        let b = arena.intern_str(b"same").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn alloc_slice_copies_values() {
        let arena = Arena::new();
        let a = arena.alloc(1i64).unwrap();
        let b = arena.alloc(2i64).unwrap();
        let slice = arena.alloc_slice(&[a, b]).unwrap();
        assert_eq!(slice.len(), 2);
        assert_eq!(*slice[0], 1);
        assert_eq!(*slice[1], 2);
    }

    #[test]
    fn exhaustion_is_an_error() {
        let arena = Arena::with_capacity(8);
        assert!(arena.intern_str(b"way too long for this arena").is_err());
    }

    #[test]
    fn pointers_stay_valid_across_further_allocations() {
        let arena = Arena::new();
        let first = arena.intern_str(b"first").unwrap();
        let first_ptr = first.as_ptr();
        for i in 0..100 {
            let _ = arena.intern_str(format!("filler-{i}").as_bytes()).unwrap();
        }
        assert_eq!(first.as_ptr(), first_ptr);
        assert_eq!(first, "first");
    }
}
