use crate::buffer::Buffer;
use crate::Error;

/**
Adaptor that caps `max_size` of a borrowed buffer.

Useful for handing a large shared storage to a protocol layer that
must not grow it past its own budget: every operation forwards to the
underlying buffer, but `prepare`, `grow` and `reserve` check against
the *smaller* of the cap and the storage's own limit first.

```
use gather_buf::{limit, Buffer, Error, FlatBuffer};

# fn main() -> Result<(), Error> {
let mut storage = FlatBuffer::new();
let mut capped = limit(&mut storage, 8);
capped.grow(6)?;
assert_eq!(capped.prepare(3).unwrap_err(), Error::TooBig);
// the storage itself is not limited
assert!(storage.prepare(100).is_ok());
# Ok(())
# }
```
*/
#[derive(Debug)]
pub struct LimitBuf<'b, B: Buffer> {
	inner: &'b mut B,
	cap: usize,
}

/// Cap `max_size` of `inner` at `cap`.
pub fn limit<B: Buffer>(inner: &mut B, cap: usize) -> LimitBuf<'_, B> {
	LimitBuf { inner, cap }
}

impl<'b, B: Buffer> Buffer for LimitBuf<'b, B> {
	type Readable<'a> = B::Readable<'a> where Self: 'a;
	type ReadableMut<'a> = B::ReadableMut<'a> where Self: 'a;
	type Writable<'a> = B::Writable<'a> where Self: 'a;

	fn size(&self) -> usize {
		self.inner.size()
	}

	fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	fn max_size(&self) -> usize {
		std::cmp::min(self.cap, self.inner.max_size())
	}

	// adjusts the cap; the underlying limit is not touched
	fn set_max_size(&mut self, n: usize) {
		self.cap = n;
	}

	fn data(&self) -> Self::Readable<'_> {
		self.inner.data()
	}

	fn data_at(&self, pos: usize, n: usize) -> Self::Readable<'_> {
		self.inner.data_at(pos, n)
	}

	fn data_mut(&mut self) -> Self::ReadableMut<'_> {
		self.inner.data_mut()
	}

	fn data_at_mut(&mut self, pos: usize, n: usize) -> Self::ReadableMut<'_> {
		self.inner.data_at_mut(pos, n)
	}

	fn prepare(&mut self, n: usize) -> Result<Self::Writable<'_>, Error> {
		if self.size().checked_add(n).map_or(true, |total| total > self.max_size()) {
			return Err(Error::TooBig);
		}
		self.inner.prepare(n)
	}

	fn commit(&mut self, n: usize) {
		self.inner.commit(n);
	}

	fn consume(&mut self, n: usize) {
		self.inner.consume(n);
	}

	fn grow(&mut self, n: usize) -> Result<(), Error> {
		if self.size().checked_add(n).map_or(true, |total| total > self.max_size()) {
			return Err(Error::TooBig);
		}
		self.inner.grow(n)
	}

	fn shrink(&mut self, n: usize) {
		self.inner.shrink(n);
	}

	fn clear(&mut self) {
		self.inner.clear();
	}

	fn reserve(&mut self, n: usize) -> Result<(), Error> {
		if n > self.max_size() {
			return Err(Error::TooBig);
		}
		self.inner.reserve(n)
	}

	fn shrink_to_fit(&mut self) -> Result<(), Error> {
		self.inner.shrink_to_fit()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{gather, scatter, Error, FixedBuffer, FlatBuffer, MultiBuffer};

	#[test]
	fn caps_a_growable_buffer() {
		let mut storage = FlatBuffer::new();
		let mut b = limit(&mut storage, 10);
		assert_eq!(b.max_size(), 10);
		let n = scatter(b.prepare(6).unwrap(), b"123456");
		b.commit(n);
		assert_eq!(b.prepare(5).unwrap_err(), Error::TooBig);
		assert_eq!(b.grow(5).unwrap_err(), Error::TooBig);
		b.prepare(4).unwrap();
		assert_eq!(gather(b.data()), b"123456");
		// the underlying storage accepts more once the cap is gone
		assert!(storage.prepare(100).is_ok());
	}

	#[test]
	fn tighter_of_cap_and_storage_limit_wins() {
		let mut storage = FlatBuffer::with_limit(4);
		let mut b = limit(&mut storage, 100);
		assert_eq!(b.max_size(), 4);
		assert_eq!(b.prepare(5).unwrap_err(), Error::TooBig);

		let mut storage = FixedBuffer::<4>::new();
		let b = limit(&mut storage, 100);
		assert_eq!(b.max_size(), 4);
	}

	#[test]
	fn forwards_the_whole_contract() {
		let mut storage = MultiBuffer::new();
		let mut b = limit(&mut storage, 1000);
		let n = scatter(b.prepare(12).unwrap(), b"Hello, world");
		b.commit(n);
		assert_eq!(b.size(), 12);
		assert_eq!(gather(b.data_at(7, 5)), b"world");
		b.consume(7);
		assert_eq!(gather(b.data()), b"world");
		b.shrink(1);
		assert_eq!(gather(b.data()), b"worl");
		b.clear();
		assert_eq!(b.size(), 0);
		assert!(b.capacity() > 0);
		b.shrink_to_fit().unwrap();
		assert_eq!(b.capacity(), 0);
	}

	#[test]
	fn reserve_respects_the_cap() {
		let mut storage = FlatBuffer::new();
		let mut b = limit(&mut storage, 16);
		b.reserve(16).unwrap();
		assert_eq!(b.reserve(17).unwrap_err(), Error::TooBig);
	}

	#[test]
	fn set_max_size_moves_the_cap() {
		let mut storage = FlatBuffer::new();
		let mut b = limit(&mut storage, 4);
		b.set_max_size(8);
		b.grow(8).unwrap();
		assert_eq!(b.prepare(1).unwrap_err(), Error::TooBig);
	}
}
