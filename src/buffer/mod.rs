/*!
The shared buffer contract and its storage strategies.

Every buffer keeps *readable* bytes in front of *writable* bytes and
moves data through the same `prepare`/`commit`/`consume` cycle; the
strategies differ only in how the storage behind the two regions is
laid out and grown:

- [`FlatBuffer`]: one growable heap allocation, single-span sequences
- [`FixedBuffer`]: one inline fixed-size array, compacts by memmove
- [`RingBuffer`]: one inline fixed-size array used circularly,
  sequences split in two at the wrap point
- [`MultiBuffer`]: a list of heap nodes, sequences span many nodes,
  growth never copies
- [`LimitBuf`]: an adaptor capping `max_size` of any of the above
*/

use crate::Error;

mod fixed;
mod flat;
mod limit;
mod multi;
mod ring;

pub use fixed::FixedBuffer;
pub use flat::FlatBuffer;
pub use limit::{limit, LimitBuf};
pub use multi::{Chunks, ChunksIter, ChunksMut, MultiBuffer};
pub use ring::{PairIter, PairIterMut, RingBuffer, SlicePair, SlicePairMut};

/**
This trait abstracts the readable/writable partition from the storage
strategy behind it.

## Example usage

```
use gather_buf::{Buffer, Error, FlatBuffer, gather, scatter};

fn frame<B: Buffer>(buf: &mut B, payload: &[u8]) -> Result<(), Error> {
	// reserve space for the length prefix plus the payload
	let n = payload.len();
	let written = scatter(buf.prepare(4 + n)?, &(n as u32).to_be_bytes());
	buf.commit(written);
	let written = scatter(buf.prepare(n)?, payload);
	buf.commit(written);
	Ok(())
}

# fn main() -> Result<(), Error> {
let mut b = FlatBuffer::new();
frame(&mut b, b"ping")?;
assert_eq!(b.size(), 8);
assert_eq!(&gather(b.data())[4..], b"ping");
# Ok(())
# }
```

## Contract

At all times `size() <= capacity() <= max_size()`. `prepare(n)` fails
with [`Error::TooBig`] when `size() + n` would exceed `max_size()` and
leaves the buffer untouched when it fails; on success the returned
sequence exposes exactly `n` bytes. `commit` and `consume` never fail
and saturate at the pending writable and readable byte counts
respectively. Calling `commit` without a pending `prepare` is outside
the contract.

Sequences returned by `data`, `data_mut` and `prepare` borrow the
buffer; every mutating operation takes `&mut self`, so stale sequences
are rejected at compile time rather than invalidated at run time.
*/
pub trait Buffer {
	/// Sequence of readable byte spans.
	type Readable<'a>: IntoIterator<Item = &'a [u8]> + Clone
	where
		Self: 'a;
	/// Sequence of readable byte spans, writable in place.
	type ReadableMut<'a>: IntoIterator<Item = &'a mut [u8]>
	where
		Self: 'a;
	/// Sequence of writable byte spans handed out by [`prepare`](Self::prepare).
	type Writable<'a>: IntoIterator<Item = &'a mut [u8]>
	where
		Self: 'a;

	/// Number of readable bytes.
	fn size(&self) -> usize;

	/// Bytes the buffer can hold, readable plus writable, without
	/// further allocation.
	fn capacity(&self) -> usize;

	/// Upper bound `capacity()` may ever reach.
	fn max_size(&self) -> usize;

	/// Adjust the upper bound. Never fails; fixed-capacity storage
	/// ignores it. Should not be set below `capacity()`.
	fn set_max_size(&mut self, n: usize);

	/// The readable bytes.
	fn data(&self) -> Self::Readable<'_>;

	/// A window over the readable bytes starting at `pos`, at most `n`
	/// bytes long. `pos` past the end yields an empty sequence.
	fn data_at(&self, pos: usize, n: usize) -> Self::Readable<'_>;

	/// The readable bytes, writable in place.
	fn data_mut(&mut self) -> Self::ReadableMut<'_>;

	/// Like [`data_at`](Self::data_at), writable in place.
	fn data_at_mut(&mut self, pos: usize, n: usize) -> Self::ReadableMut<'_>;

	/// Reserve exactly `n` writable bytes, growing storage if the
	/// strategy allows. The readable bytes keep their logical positions
	/// even when storage moves.
	fn prepare(&mut self, n: usize) -> Result<Self::Writable<'_>, Error>;

	/// Append up to `n` bytes from the front of the writable region to
	/// the readable bytes; the rest of the writable region is discarded.
	fn commit(&mut self, n: usize);

	/// Drop up to `n` bytes from the front of the readable bytes.
	fn consume(&mut self, n: usize);

	/// Extend the readable bytes by `n` (a `prepare` immediately
	/// committed in full).
	fn grow(&mut self, n: usize) -> Result<(), Error> {
		self.prepare(n)?;
		self.commit(n);
		Ok(())
	}

	/// Truncate up to `n` bytes off the tail of the readable bytes.
	fn shrink(&mut self, n: usize);

	/// Drop all readable and writable bytes, keeping capacity where the
	/// strategy retains storage.
	fn clear(&mut self);

	/// Guarantee capacity for at least `n` bytes.
	fn reserve(&mut self, n: usize) -> Result<(), Error> {
		// fixed-capacity storage: anything within the limit already fits
		if n > self.max_size() {
			return Err(Error::TooBig);
		}
		Ok(())
	}

	/// Reduce capacity to `size()`, where the strategy can.
	fn shrink_to_fit(&mut self) -> Result<(), Error> {
		Ok(())
	}
}
