use tracing::{debug, trace};

use crate::error::{Result, RingError};

/// Fixed-capacity ring buffer holding `2^POW` elements of `T`
///
/// - Single-threaded, no internal synchronization
/// - Capacity is a power of two so slots are found by masking
/// - Cursors only ever grow; occupancy is `write_cursor - read_cursor`
///
/// Both cursors are allowed to wrap around `usize::MAX`. Occupancy is
/// computed with wrapping subtraction in the same width, so it stays exact
/// across the wrap.
pub struct RingBuffer<T, const POW: u32> {
    /// Backing store, `CAPACITY` slots, all valid values at all times
    data: Box<[T]>,
    /// Total successful pushes since creation
    write_cursor: usize,
    /// Total successful pops since creation
    read_cursor: usize,
}

impl<T, const POW: u32> RingBuffer<T, POW> {
    /// Number of slots, `2^POW`.
    ///
    /// The exponent is clamped below the bit width of `usize` so the shift is
    /// always defined and occupancy never exceeds what a cursor can represent.
    pub const CAPACITY: usize = 1usize << if POW < usize::BITS - 1 {
        POW
    } else {
        usize::BITS - 1
    };

    const MASK: usize = Self::CAPACITY - 1;

    /// Create an empty ring buffer with every slot default-constructed
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::with_cursor(0)
    }

    /// Create an empty ring buffer whose cursors both start at `start`
    fn with_cursor(start: usize) -> Self
    where
        T: Default,
    {
        let data = (0..Self::CAPACITY).map(|_| T::default()).collect();

        RingBuffer {
            data,
            write_cursor: start,
            read_cursor: start,
        }
    }

    /// Append `value` after the newest element
    ///
    /// # Returns
    /// * `true` if the value was stored
    /// * `false` if the buffer is full; the value is dropped and nothing changes
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Append `value`, handing it back if the buffer is full
    pub fn try_push(&mut self, value: T) -> std::result::Result<(), T> {
        if self.full() {
            trace!(
                count = self.count(),
                capacity = Self::CAPACITY,
                "push rejected, ring buffer is full"
            );
            return Err(value);
        }

        self.data[self.write_cursor & Self::MASK] = value;
        self.write_cursor = self.write_cursor.wrapping_add(1);
        Ok(())
    }

    /// Discard the oldest element
    ///
    /// The slot keeps its value but falls outside the logical window. Use
    /// [`peek`](Self::peek) first if the value is needed.
    ///
    /// # Returns
    /// * `true` if an element was discarded
    /// * `false` if the buffer is empty
    pub fn pop(&mut self) -> bool {
        if self.empty() {
            trace!(capacity = Self::CAPACITY, "pop rejected, ring buffer is empty");
            return false;
        }

        self.read_cursor = self.read_cursor.wrapping_add(1);
        true
    }

    /// Mutable access to the element `offset` positions after the oldest one
    ///
    /// # Arguments
    /// * `offset` - Distance from the oldest element, `0` is the oldest
    ///
    /// # Returns
    /// * `Ok(&mut T)` pointing into the backing store
    /// * `Err(RingError::OutOfRange)` if `offset >= count()`, including on an empty buffer
    pub fn peek(&mut self, offset: usize) -> Result<&mut T> {
        let slot = self.slot(offset)?;
        Ok(&mut self.data[slot])
    }

    /// Mutable access to the oldest element, same as `peek(0)`
    pub fn peek_front(&mut self) -> Result<&mut T> {
        self.peek(0)
    }

    /// Shared access to the element `offset` positions after the oldest one
    pub fn get(&self, offset: usize) -> Result<&T> {
        let slot = self.slot(offset)?;
        Ok(&self.data[slot])
    }

    /// Like [`peek`](Self::peek) but for signed offsets.
    ///
    /// Negative offsets never index from the newest end; they are rejected the
    /// same way as offsets past the newest element.
    pub fn peek_signed(&mut self, offset: isize) -> Result<&mut T> {
        match usize::try_from(offset) {
            Ok(offset) => self.peek(offset),
            Err(_) => Err(self.out_of_range(offset as i128)),
        }
    }

    /// Number of queued elements
    #[inline]
    pub fn count(&self) -> usize {
        self.write_cursor.wrapping_sub(self.read_cursor)
    }

    /// Alias of [`count`](Self::count)
    #[inline]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Fixed number of slots, constant for the buffer's lifetime
    #[inline]
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Whether no element is queued
    #[inline]
    pub fn empty(&self) -> bool {
        self.count() == 0
    }

    /// Alias of [`empty`](Self::empty)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Whether every slot holds a queued element
    #[inline]
    pub fn full(&self) -> bool {
        self.count() == Self::CAPACITY
    }

    fn slot(&self, offset: usize) -> Result<usize> {
        if offset >= self.count() {
            return Err(self.out_of_range(offset as i128));
        }
        Ok(self.read_cursor.wrapping_add(offset) & Self::MASK)
    }

    fn out_of_range(&self, offset: i128) -> RingError {
        let count = self.count();
        debug!(
            offset = %offset,
            read_cursor = self.read_cursor,
            count,
            "peek outside the occupied window"
        );
        RingError::OutOfRange { offset, count }
    }
}

impl<T: Default, const POW: u32> Default for RingBuffer<T, POW> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const POW: u32> std::fmt::Debug for RingBuffer<T, POW> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &Self::CAPACITY)
            .field("write_cursor", &self.write_cursor)
            .field("read_cursor", &self.read_cursor)
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}
