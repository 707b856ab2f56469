/*!
Dynamic byte buffers for streaming I/O.

Each buffer in this crate partitions its storage into two regions:
*readable* bytes (already produced, waiting to be consumed)
followed by *writable* bytes (reserved for the next write).
Producers and consumers move bytes through the same three calls
regardless of how the storage is laid out:

- [`prepare()`](Buffer::prepare) reserves writable space and hands out
  a sequence of mutable byte spans to fill,
- [`commit()`](Buffer::commit) promotes a prefix of the written bytes
  to the readable region,
- [`consume()`](Buffer::consume) discards a prefix of the readable
  region.

Both regions are exposed as *buffer sequences*: iterables of contiguous
byte spans, ready for scatter/gather I/O. Depending on the storage
strategy a sequence has one span ([`FlatBuffer`], [`FixedBuffer`]),
up to two ([`RingBuffer`], which wraps), or many ([`MultiBuffer`],
which chains allocations instead of copying).

## Example usage

```
use gather_buf::*;

# fn main() -> Result<(), Error> {
let mut buf = FlatBuffer::new();

// reserve space, fill it, then publish what was actually written
let n = scatter(buf.prepare(16)?, b"lorem ipsum");
buf.commit(n);
assert_eq!(gather(buf.data()), b"lorem ipsum");

// readers drop data from the front
buf.consume(6);
assert_eq!(gather(buf.data()), b"ipsum");

// consuming past the end just empties the buffer
buf.consume(999);
assert_eq!(buf.size(), 0);
# Ok(())
# }
```

Sequence references obtained from `data()` or `prepare()` borrow the
buffer, so the borrow checker rules out every use-after-invalidate the
contract forbids: any mutating call requires the previous sequence to
be dropped first.
*/

#![warn(missing_docs)]

use quick_error::quick_error;

mod alloc;
mod buffer;
mod seq;
mod subrange;

pub use alloc::{BufAlloc, HeapAlloc, Propagate};
pub use buffer::*;
pub use seq::{byte_count, gather, is_empty, scatter};
pub use subrange::{subrange, Subrange, SubrangeIter};

quick_error! {
	/// Error type emitted by the fallible buffer operations
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum Error {
		/// The operation would push `size()` past `max_size()`
		TooBig {
			display("requested size exceeds the buffer limit")
		}
		/// The allocator rejected or failed an allocation
		Alloc {
			display("buffer storage allocation failed")
		}
	}
}
