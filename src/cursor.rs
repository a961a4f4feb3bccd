use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::vec;

use crate::list::RingList;
use crate::node::SENTINEL;
use crate::position::Position;

/*
* =======================
* ===== Cursor bits =====
* =======================
*/

/// A read-only cursor over a borrowed [`RingList`].
/// Moves both ways without touching the list, and is itself an iterator
/// that yields the current element then steps forward.
///
/// The cursor can rest on the end of the list, where [`current`](Cursor::current)
/// gives `None`.
/// ```
/// # use ringlist::RingList;
/// let list = RingList::from(vec![1, 2, 3]);
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.current(), Some(&3));
///
/// assert_eq!(list.front(), Some(&1));
/// ```
pub struct Cursor<'i, T> {
	list:    &'i RingList<T>,
	current: usize,
}

impl<T> Clone for Cursor<'_, T> {
	#[inline]
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'i, T> Cursor<'i, T> {
	#[inline]
	pub(crate) fn new(list: &'i RingList<T>, current: usize) -> Self {
		Self { list, current }
	}

	/// Get a ref to the current element. `O(1)`.
	/// `None` at the end of the list.
	#[inline]
	pub fn current(&self) -> Option<&'i T> {
		self.list.slots[self.current].entry.elem()
	}

	/// The position the cursor rests on. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// let cursor = list.cursor();
	/// assert_eq!(cursor.position(), list.begin());
	/// ```
	#[inline]
	pub fn position(&self) -> Position {
		self.list.position(self.current)
	}

	/// Whether the cursor rests on the end of the list. `O(1)`.
	#[inline]
	pub fn is_end(&self) -> bool {
		self.current == SENTINEL
	}

	/// Move the cursor one step forward. `O(1)`.
	/// Stepping off the last element lands on the end.
	/// Returns `false` if the cursor was already at the end.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1]);
	/// let mut cursor = list.cursor();
	///
	/// assert!(cursor.advance());
	/// assert!(cursor.is_end());
	/// assert!(!cursor.advance());
	/// ```
	#[inline]
	#[must_use]
	pub fn advance(&mut self) -> bool {
		if self.is_end() { return false; }

		self.current = self.list.slots[self.current].next;
		true
	}

	/// Move the cursor one step backward. `O(1)`.
	/// From the end this lands on the last element.
	/// Returns `false` if the cursor was already at the first element, or the list is empty.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// let mut cursor = list.cursor_at(list.end()).unwrap();
	///
	/// assert!(cursor.retreat());
	/// assert_eq!(cursor.current(), Some(&3));
	///
	/// while cursor.retreat() {}
	/// assert_eq!(cursor.current(), Some(&1));
	/// ```
	#[inline]
	#[must_use]
	pub fn retreat(&mut self) -> bool {
		match self.list.slots[self.current].prev {
			SENTINEL => false,
			prev     => { self.current = prev; true },
		}
	}

	/// Get a ref to the element after the cursor. `O(1)`.
	#[inline]
	pub fn peek_next(&self) -> Option<&'i T> {
		match self.current {
			SENTINEL => None,
			current  => self.list.slots[self.list.slots[current].next].entry.elem(),
		}
	}

	/// Get a ref to the element before the cursor. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2]);
	/// let mut cursor = list.cursor();
	///
	/// assert_eq!(cursor.peek_prev(), None);
	/// assert_eq!(cursor.peek_next(), Some(&2));
	///
	/// let _ = cursor.advance();
	/// assert_eq!(cursor.peek_prev(), Some(&1));
	/// ```
	#[inline]
	pub fn peek_prev(&self) -> Option<&'i T> {
		self.list.slots[self.list.slots[self.current].prev].entry.elem()
	}
}

impl<'i, T> Iterator for Cursor<'i, T> {
	type Item = &'i T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		let elem = self.current()?;
		self.current = self.list.slots[self.current].next;
		Some(elem)
	}
}

impl<T> FusedIterator for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}: {:?}", self.position(), self.current())
	}
}


/*
* ==========================
* ===== Iteratory bits =====
* ==========================
*/

/// Borrowing iterator over a [`RingList`], front to back.
pub struct Iter<'i, T> {
	list: &'i RingList<T>,
	head: usize,
	tail: usize,
	len:  usize,
}

impl<'i, T> Iter<'i, T> {
	pub(crate) fn new(list: &'i RingList<T>) -> Self {
		Self {
			list,
			head: list.slots[SENTINEL].next,
			tail: list.slots[SENTINEL].prev,
			len:  list.len(),
		}
	}
}

impl<T> Clone for Iter<'_, T> {
	#[inline]
	fn clone(&self) -> Self {
		Self { list: self.list, head: self.head, tail: self.tail, len: self.len }
	}
}

impl<'i, T> Iterator for Iter<'i, T> {
	type Item = &'i T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.len == 0 { return None; }

		let node = &self.list.slots[self.head];
		self.head = node.next;
		self.len -= 1;
		node.entry.elem()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>)
		{ (self.len, Some(self.len)) }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.len == 0 { return None; }

		let node = &self.list.slots[self.tail];
		self.tail = node.prev;
		self.len -= 1;
		node.entry.elem()
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`RingList`], front to back.
pub struct IterMut<'i, T> {
	inner: vec::IntoIter<&'i mut T>,
}

impl<'i, T> IterMut<'i, T> {
	/// Links are read up front, then every element slot is borrowed at once
	/// and the borrows are laid out in list order.
	/// Costs a table as long as the arena, vacant slots included.
	pub(crate) fn new(list: &'i mut RingList<T>) -> Self {
		let order = {
			let mut order = Vec::with_capacity(list.len());
			let mut index = list.slots[SENTINEL].next;
			while index != SENTINEL {
				order.push(index);
				index = list.slots[index].next;
			}
			order
		};

		let mut by_slot = list.slots.elems_mut().collect::<Vec<_>>();
		let inner = order.into_iter()
			.filter_map(|index| by_slot[index].take())
			.collect::<Vec<_>>()
			.into_iter();

		Self { inner }
	}
}

impl<'i, T> Iterator for IterMut<'i, T> {
	type Item = &'i mut T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>)
		{ self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`RingList`], front to back.
/// Internally this is just `pop_front` / `pop_back`.
pub struct IntoIter<T> {
	list: RingList<T>,
}

impl<T> IntoIter<T> {
	#[inline]
	pub(crate) fn new(list: RingList<T>) -> Self {
		Self { list }
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.list.pop_front()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>)
		{ (self.list.len(), Some(self.list.len())) }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// let two = list.into_iter().nth_back(1);
	/// assert_eq!(two, Some(2));
	/// ```
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.list.pop_back()
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
