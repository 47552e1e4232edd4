//! # p2ring - Power-of-two Ring Buffer
//!
//! A fixed-capacity circular buffer whose slot count is `2^POW`.
//!
//! ## Design
//!
//! - Capacity fixed at compile time through the `POW` const parameter
//! - Two monotonically increasing cursors; slots are found by masking, never by modulo
//! - `push`/`pop` report full/empty with a boolean, nothing is ever overwritten or evicted
//! - `peek` gives mutable access to any queued element, counted from the oldest
//! - Out-of-range access is a typed [`RingError`], never a stale slot
//! - Single-threaded; wrap it in your own synchronization for shared use
//!
//! ## Example
//!
//! ```
//! use p2ring::{RingBuffer, RingError};
//!
//! // 2^4 = 16 slots
//! let mut rb: RingBuffer<i32, 4> = RingBuffer::new();
//!
//! assert!(rb.push(10));
//! assert!(rb.push(20));
//!
//! // Modify the newest element in place
//! *rb.peek(1).unwrap() += 1;
//!
//! // Read before popping, pop does not return the value
//! assert_eq!(*rb.peek(0).unwrap(), 10);
//! assert!(rb.pop());
//! assert_eq!(*rb.peek(0).unwrap(), 21);
//! assert!(rb.pop());
//!
//! assert!(!rb.pop());
//! assert_eq!(rb.peek(0), Err(RingError::OutOfRange { offset: 0, count: 0 }));
//! ```

#![warn(missing_docs)]

mod error;
mod ring_buffer;

pub use error::{Result, RingError};
pub use ring_buffer::RingBuffer;
