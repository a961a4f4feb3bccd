use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::node::SENTINEL;

/// Identity of one list instance, unique for the life of the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
	pub(crate) fn fresh() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(0);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

/// A position in a [`RingList`](crate::RingList), naming either an element or the end.
///
/// Positions are plain `Copy` values: they do not borrow the list, so they can be held
/// across insertions and passed back into [`insert`](crate::RingList::insert) and
/// [`erase`](crate::RingList::erase).
/// Erasing an element invalidates the positions naming it and no others.
/// The list reports an invalidated or foreign position as an error instead of
/// following it.
///
/// Two positions are equal iff they name the same node of the same list.
/// ```
/// # use ringlist::RingList;
/// let mut list = RingList::new();
/// let end = list.end();
/// let one = list.push_back(1);
///
/// assert_eq!(list.begin(), one);
/// assert_eq!(list.end(), end);
/// assert!(end.is_end());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
	pub(crate) list:       ListId,
	pub(crate) index:      usize,
	pub(crate) generation: u32,
}

impl Position {
	#[inline]
	pub(crate) const fn new(list: ListId, index: usize, generation: u32) -> Self {
		Self { list, index, generation }
	}

	/// Whether this is the one-past-the-end position of its list. `O(1)`.
	#[inline]
	pub const fn is_end(&self) -> bool {
		self.index == SENTINEL
	}
}

impl fmt::Debug for Position {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.is_end() {
			true  => write!(f, "Position(list {}, end)", self.list.0),
			false => write!(f, "Position(list {}, slot {} gen {})", self.list.0, self.index, self.generation),
		}
	}
}
