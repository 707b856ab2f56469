/*!
Primitives over buffer sequences.

A *readable sequence* is anything that iterates over `&[u8]` spans;
a *writable sequence* iterates over `&mut [u8]`. Arrays and vectors of
slices qualify as-is, as do the sequence types the buffers hand out:

```
use gather_buf::{byte_count, is_empty};

let head = b"GET / HTTP/1.1\r\n";
let body = b"hello";
assert_eq!(byte_count([&head[..], &body[..]]), 21);
assert!(!is_empty([&head[..], &body[..]]));
```
*/

/// Total number of bytes in a readable sequence.
pub fn byte_count<'a, S>(seq: S) -> usize
where
	S: IntoIterator<Item = &'a [u8]>,
{
	seq.into_iter().map(<[u8]>::len).sum()
}

/// Whether every span of the sequence is empty.
///
/// Stops at the first non-empty span, so this can be cheaper than
/// comparing [`byte_count`] against zero.
pub fn is_empty<'a, S>(seq: S) -> bool
where
	S: IntoIterator<Item = &'a [u8]>,
{
	seq.into_iter().all(<[u8]>::is_empty)
}

/// Concatenate a readable sequence into one owned vector.
pub fn gather<'a, S>(seq: S) -> Vec<u8>
where
	S: IntoIterator<Item = &'a [u8]>,
{
	let mut out = Vec::new();
	for span in seq {
		out.extend_from_slice(span);
	}
	out
}

/**
Copy bytes from `src` across a writable sequence.

Fills spans in order until either side runs out; returns the number of
bytes copied. The usual write cycle is `scatter` into a prepared
sequence, then commit what was copied:

```
use gather_buf::*;

# fn main() -> Result<(), Error> {
let mut b = FlatBuffer::new();
let n = scatter(b.prepare(8)?, b"abc");
b.commit(n);
assert_eq!(gather(b.data()), b"abc");
# Ok(())
# }
```
*/
pub fn scatter<'a, S>(dst: S, src: &[u8]) -> usize
where
	S: IntoIterator<Item = &'a mut [u8]>,
{
	let mut rest = src;
	for span in dst {
		if rest.is_empty() {
			break;
		}
		let n = std::cmp::min(span.len(), rest.len());
		span[..n].copy_from_slice(&rest[..n]);
		rest = &rest[n..];
	}
	src.len() - rest.len()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_over_slices() {
		let buf = [0u8; 60];
		let v = [&buf[0..10], &buf[10..30], &buf[30..60]];
		assert_eq!(byte_count(v), 60);
		assert_eq!(byte_count([&buf[0..0]]), 0);
		assert_eq!(byte_count(Vec::<&[u8]>::new()), 0);
	}

	#[test]
	fn empty_short_circuits() {
		assert!(is_empty(Vec::<&[u8]>::new()));
		assert!(is_empty([&b""[..], &b""[..]]));
		assert!(!is_empty([&b""[..], &b"x"[..]]));
	}

	#[test]
	fn gather_concatenates() {
		let v = [&b"lorem "[..], &b""[..], &b"ipsum"[..]];
		assert_eq!(gather(v), b"lorem ipsum");
	}

	#[test]
	fn scatter_spans() {
		let mut a = [0u8; 4];
		let mut b = [0u8; 4];
		{
			let dst = [&mut a[..], &mut b[..]];
			assert_eq!(scatter(dst, b"abcdef"), 6);
		}
		assert_eq!(&a, b"abcd");
		assert_eq!(&b[..2], b"ef");
	}

	#[test]
	fn scatter_short_source() {
		let mut a = [0u8; 8];
		assert_eq!(scatter([&mut a[..]], b"xy"), 2);
		assert_eq!(&a[..2], b"xy");
	}

	#[test]
	fn scatter_short_destination() {
		let mut a = [0u8; 2];
		assert_eq!(scatter([&mut a[..]], b"wxyz"), 2);
		assert_eq!(&a, b"wx");
	}
}
