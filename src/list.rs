use std::fmt::Debug;

use crate::cursor::{Cursor, IntoIter, Iter, IterMut};
use crate::error::{ListError, Result};
use crate::node::{Slots, SENTINEL};
use crate::position::{ListId, Position};

/// A doubly linked list closed into a ring around a sentinel node.
///
/// The sentinel is both the end of the list and the node before its first element,
/// so [`end`](RingList::end) is valid even when the list is empty.
/// Nodes live in an arena owned by the list; links are slot indices,
/// and erased slots are recycled by later insertions.
pub struct RingList<T> {
	pub(crate) slots: Slots<T>,
	len:              usize,
	id:               ListId,
}

impl<T> RingList<T> {
	/// Create a new empty list. `O(1)`.
	/// Allocates room for the sentinel only.
	/// ```
	/// # use ringlist::RingList;
	/// let list: RingList<u8> = RingList::new();
	/// assert_eq!(list.len(), 0);
	/// assert_eq!(list.begin(), list.end());
	/// ```
	#[inline]
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	/// Create a new empty list with room for `capacity` elements. `O(1)`.
	/// Elements past `capacity` are still accepted; the list never refuses an insertion.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::with_capacity(2);
	/// list.push_back(1);
	/// list.push_back(2);
	/// list.push_back(3);
	/// assert_eq!(list.len(), 3);
	/// ```
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			slots: Slots::with_capacity(capacity),
			len:   0,
			id:    ListId::fresh(),
		}
	}

	#[inline]
	pub(crate) fn position(&self, index: usize) -> Position {
		Position::new(self.id, index, self.slots[index].generation)
	}

	/// Map a position back to its slot, rejecting anything not currently in this list.
	fn resolve(&self, pos: Position) -> Result<usize> {
		if pos.list != self.id {
			trace!(?pos, "rejected position from another list");
			return Err(ListError::ForeignPosition);
		}

		if !self.slots.is_live(pos.index, pos.generation) {
			trace!(?pos, "rejected stale position");
			return Err(ListError::StalePosition);
		}

		Ok(pos.index)
	}

	/// Get a ref to the first element. `O(1)`.
	/// Returns `None` if the list is empty.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::new();
	/// assert_eq!(list.front(), None);
	///
	/// list.push_back(1);
	/// list.push_front(0);
	/// assert_eq!(list.front(), Some(&0));
	/// ```
	#[inline]
	pub fn front(&self) -> Option<&T> {
		self.slots[self.slots[SENTINEL].next].entry.elem()
	}

	/// Get a mut ref to the first element. `O(1)`.
	#[inline]
	pub fn front_mut(&mut self) -> Option<&mut T> {
		let first = self.slots[SENTINEL].next;
		self.slots[first].entry.elem_mut()
	}

	/// Get a ref to the last element, the one just before [`end`](RingList::end). `O(1)`.
	/// Returns `None` if the list is empty.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::new();
	/// assert_eq!(list.back(), None);
	///
	/// list.push_front(1);
	/// list.push_back(2);
	/// assert_eq!(list.back(), Some(&2));
	/// ```
	#[inline]
	pub fn back(&self) -> Option<&T> {
		self.slots[self.slots[SENTINEL].prev].entry.elem()
	}

	/// Get a mut ref to the last element. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::from(vec![1, 2, 3]);
	/// *list.back_mut().unwrap() = 4;
	/// assert_eq!(format!("{:?}", list), "[1, 2, 4]");
	/// ```
	#[inline]
	pub fn back_mut(&mut self) -> Option<&mut T> {
		let last = self.slots[SENTINEL].prev;
		self.slots[last].entry.elem_mut()
	}

	/// Position of the first element, or [`end`](RingList::end) if the list is empty. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::new();
	/// assert_eq!(list.begin(), list.end());
	///
	/// list.push_back('a');
	/// assert_eq!(list.get(list.begin()), Ok(&'a'));
	/// ```
	#[inline]
	pub fn begin(&self) -> Position {
		self.position(self.slots[SENTINEL].next)
	}

	/// The one-past-the-end position, which is the sentinel. `O(1)`.
	/// Stays the same for the whole life of the list.
	#[inline]
	pub fn end(&self) -> Position {
		self.position(SENTINEL)
	}

	/// Check if the list is empty, i.e. `begin() == end()`. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list: RingList<u8> = RingList::new();
	/// assert!(list.is_empty());
	/// ```
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.slots[SENTINEL].next == SENTINEL
	}

	/// Get the number of elements in the list. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// assert_eq!(list.len(), 3);
	/// ```
	#[inline]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Splice the unlinked node `new` in just before `at`.
	fn link_before(&mut self, at: usize, new: usize) {
		let prev = self.slots[at].prev;

		self.slots[prev].next = new;
		self.slots[new].prev  = prev;
		self.slots[at].prev   = new;
		self.slots[new].next  = at;
	}

	/// Take the element at `index` out of the ring, returning it with the slot that followed it.
	/// Returns `None` if `index` holds no element.
	fn unlink(&mut self, index: usize) -> Option<(T, usize)> {
		let (prev, next) = (self.slots[index].prev, self.slots[index].next);
		let elem = self.slots.free(index)?;

		self.slots[prev].next = next;
		self.slots[next].prev = prev;
		self.len -= 1;

		Some((elem, next))
	}

	/// Insert an element just before `pos`, returning its position. `O(1)`.
	/// Inserting before [`end`](RingList::end) appends.
	/// Fails if `pos` is not a live position of this list; `elem` is dropped in that case.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::from(vec![1, 3]);
	/// let three = list.next(list.begin()).unwrap();
	///
	/// let two = list.insert(three, 2).unwrap();
	/// assert_eq!(list.prev(three), Ok(two));
	///
	/// list.insert(list.end(), 4).unwrap();
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3, 4]");
	/// ```
	pub fn insert(&mut self, pos: Position, elem: T) -> Result<Position> {
		let at  = self.resolve(pos)?;
		let new = self.slots.alloc(elem);

		self.link_before(at, new);
		self.len += 1;

		Ok(self.position(new))
	}

	/// Remove the element at `pos`, returning the position that followed it. `O(1)`.
	/// Erasing [`end`](RingList::end) does nothing and returns `end()`.
	/// Only positions naming the erased element are invalidated.
	/// ```
	/// # use ringlist::{ListError, RingList};
	/// let mut list = RingList::from(vec![1, 2, 3]);
	/// let one   = list.begin();
	/// let two   = list.next(one).unwrap();
	/// let three = list.next(two).unwrap();
	///
	/// assert_eq!(list.erase(two), Ok(three));
	/// assert_eq!(format!("{:?}", list), "[1, 3]");
	/// assert_eq!(list.get(one), Ok(&1));
	/// assert_eq!(list.get(two), Err(ListError::StalePosition));
	///
	/// assert_eq!(list.erase(list.end()), Ok(list.end()));
	/// ```
	pub fn erase(&mut self, pos: Position) -> Result<Position> {
		let index = self.resolve(pos)?;
		if index == SENTINEL {
			trace!("erase at end is a no-op");
			return Ok(pos);
		}

		let next = self.unlink(index).map_or(SENTINEL, |(_, next)| next);
		Ok(self.position(next))
	}

	/// Remove the element at `pos` and return it. `O(1)`.
	/// Unlike [`erase`](RingList::erase), removing the end is an error.
	/// ```
	/// # use ringlist::{ListError, RingList};
	/// let mut list = RingList::from(vec![1, 2, 3]);
	/// assert_eq!(list.remove(list.begin()), Ok(1));
	/// assert_eq!(list.remove(list.end()), Err(ListError::Sentinel));
	/// assert_eq!(format!("{:?}", list), "[2, 3]");
	/// ```
	pub fn remove(&mut self, pos: Position) -> Result<T> {
		let index = self.resolve(pos)?;
		self.unlink(index)
			.map(|(elem, _)| elem)
			.ok_or(ListError::Sentinel)
	}

	/// Append an element, returning its position. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::new();
	/// list.push_back(1);
	/// list.push_back(2);
	/// list.push_back(3);
	///
	/// assert_eq!(list.back(), Some(&3));
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	pub fn push_back(&mut self, elem: T) -> Position {
		let new = self.slots.alloc(elem);

		match self.len {
			0 => {
				self.slots[SENTINEL].next = new;
				self.slots[SENTINEL].prev = new;
				self.slots[new].next      = SENTINEL;
				self.slots[new].prev      = SENTINEL;
			},
			_ => {
				let rear = self.slots[SENTINEL].prev;

				self.slots[rear].next     = new;
				self.slots[new].next      = SENTINEL;
				self.slots[new].prev      = rear;
				self.slots[SENTINEL].prev = new;
			},
		}

		self.len += 1;
		self.position(new)
	}

	/// Prepend an element, returning its position. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::new();
	/// list.push_front(1);
	/// list.push_front(2);
	/// list.push_front(3);
	///
	/// assert_eq!(list.front(), Some(&3));
	/// assert_eq!(format!("{:?}", list), "[3, 2, 1]");
	/// ```
	pub fn push_front(&mut self, elem: T) -> Position {
		let new = self.slots.alloc(elem);

		match self.len {
			0 => {
				self.slots[SENTINEL].next = new;
				self.slots[SENTINEL].prev = new;
				self.slots[new].next      = SENTINEL;
				self.slots[new].prev      = SENTINEL;
			},
			_ => {
				let top = self.slots[SENTINEL].next;

				self.slots[new].prev      = SENTINEL;
				self.slots[top].prev      = new;
				self.slots[new].next      = top;
				self.slots[SENTINEL].next = new;
			},
		}

		self.len += 1;
		self.position(new)
	}

	/// Remove the first element and return it. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::from(vec![1, 2]);
	/// assert_eq!(list.pop_front(), Some(1));
	/// assert_eq!(list.pop_front(), Some(2));
	/// assert_eq!(list.pop_front(), None);
	/// ```
	pub fn pop_front(&mut self) -> Option<T> {
		let first = self.slots[SENTINEL].next;
		self.unlink(first).map(|(elem, _)| elem)
	}

	/// Remove the last element and return it. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::from(vec![1, 2]);
	/// assert_eq!(list.pop_back(), Some(2));
	/// assert_eq!(list.pop_back(), Some(1));
	/// assert_eq!(list.pop_back(), None);
	/// ```
	pub fn pop_back(&mut self) -> Option<T> {
		let last = self.slots[SENTINEL].prev;
		self.unlink(last).map(|(elem, _)| elem)
	}

	/// Remove every element, front to back. `O(n)`.
	/// The arena keeps its slots for reuse.
	pub fn clear(&mut self) {
		let mut index = self.slots[SENTINEL].next;
		while let Some((_, next)) = self.unlink(index) {
			index = next;
		}
	}

	/// Get a ref to the element at `pos`. `O(1)`.
	/// ```
	/// # use ringlist::{ListError, RingList};
	/// let list = RingList::from(vec![1, 2, 3]);
	/// assert_eq!(list.get(list.begin()), Ok(&1));
	/// assert_eq!(list.get(list.end()), Err(ListError::Sentinel));
	///
	/// let other = RingList::from(vec![1]);
	/// assert_eq!(list.get(other.begin()), Err(ListError::ForeignPosition));
	/// ```
	pub fn get(&self, pos: Position) -> Result<&T> {
		let index = self.resolve(pos)?;
		self.slots[index].entry.elem().ok_or(ListError::Sentinel)
	}

	/// Get a mut ref to the element at `pos`. `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::from(vec![1, 2, 3]);
	/// let first = list.begin();
	/// *list.get_mut(first).unwrap() = 4;
	/// assert_eq!(format!("{:?}", list), "[4, 2, 3]");
	/// ```
	pub fn get_mut(&mut self, pos: Position) -> Result<&mut T> {
		let index = self.resolve(pos)?;
		self.slots[index].entry.elem_mut().ok_or(ListError::Sentinel)
	}

	/// The position after `pos`. `O(1)`.
	/// Advancing from the last element gives [`end`](RingList::end);
	/// advancing from `end()` fails with [`ListError::PastEnd`].
	/// ```
	/// # use ringlist::{ListError, RingList};
	/// let list = RingList::from(vec![1]);
	/// let end = list.next(list.begin()).unwrap();
	///
	/// assert_eq!(end, list.end());
	/// assert_eq!(list.next(end), Err(ListError::PastEnd));
	/// ```
	pub fn next(&self, pos: Position) -> Result<Position> {
		match self.resolve(pos)? {
			SENTINEL => Err(ListError::PastEnd),
			index    => Ok(self.position(self.slots[index].next)),
		}
	}

	/// The position before `pos`. `O(1)`.
	/// Retreating from `end()` gives the last element;
	/// retreating from [`begin`](RingList::begin) fails with [`ListError::PastBegin`].
	/// ```
	/// # use ringlist::{ListError, RingList};
	/// let list = RingList::from(vec![1, 2]);
	/// let two = list.prev(list.end()).unwrap();
	///
	/// assert_eq!(list.get(two), Ok(&2));
	/// assert_eq!(list.prev(list.begin()), Err(ListError::PastBegin));
	/// ```
	pub fn prev(&self, pos: Position) -> Result<Position> {
		let index = self.resolve(pos)?;
		match self.slots[index].prev {
			SENTINEL => Err(ListError::PastBegin),
			prev     => Ok(self.position(prev)),
		}
	}

	/// A read-only cursor starting at [`begin`](RingList::begin). `O(1)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// let mut cursor = list.cursor();
	///
	/// assert_eq!(cursor.next(), Some(&1));
	/// assert_eq!(cursor.next(), Some(&2));
	/// assert_eq!(cursor.current(), Some(&3));
	/// ```
	#[inline]
	pub fn cursor(&self) -> Cursor<'_, T> {
		Cursor::new(self, self.slots[SENTINEL].next)
	}

	/// A read-only cursor starting at `pos`. `O(1)`.
	pub fn cursor_at(&self, pos: Position) -> Result<Cursor<'_, T>> {
		self.resolve(pos).map(|index| Cursor::new(self, index))
	}

	/// Iterate front to back. Double ended.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter::new(self)
	}

	/// Iterate front to back with mutable access. Double ended.
	/// Setting up the iterator is `O(slots)`, not `O(len)`: it borrows every arena slot
	/// the list has ever allocated, and erased slots are kept for reuse rather than released.
	/// A list that once held many more elements than it does now pays for its peak size here.
	/// ```
	/// # use ringlist::RingList;
	/// let mut list = RingList::from(vec![1, 2, 3]);
	/// list.iter_mut().for_each(|elem| *elem *= 10);
	/// assert_eq!(format!("{:?}", list), "[10, 20, 30]");
	/// ```
	#[inline]
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		IterMut::new(self)
	}
}


impl<T> Default for RingList<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Debug> Debug for RingList<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for RingList<T> {
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for RingList<T> {}

impl<T> Drop for RingList<T> {
	/// Drop the list. `O(n)`.
	/// Elements are dropped front to back; the sentinel goes last with the arena.
	fn drop(&mut self) {
		if self.is_empty() { return; }

		debug!(len = self.len, slots = self.slots.allocated(), "dropping list");
		self.clear();
	}
}


/*
* ==========================
* ===== Iteratory bits =====
* ==========================
*/

impl<T> Extend<T> for RingList<T> {
	/// Append every element of the iterator. `O(n)`.
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		iter.into_iter().for_each(|elem| { self.push_back(elem); });
	}
}

impl<T> FromIterator<T> for RingList<T> {
	/// Create a new list from an iterator. `O(n)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list = (1..=3).collect::<RingList<_>>();
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut list = Self::with_capacity(iter.size_hint().0);
		list.extend(iter);
		list
	}
}

impl<T> From<Vec<T>> for RingList<T> {
	/// Create a new list from a Vec. `O(n)`.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	/// assert_eq!(list.front(), Some(&1));
	/// ```
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<T> IntoIterator for RingList<T> {
	type Item     = T;
	type IntoIter = IntoIter<T>;

	/// Consume the list front to back. `O(1)` per element.
	/// ```
	/// # use ringlist::RingList;
	/// let list = RingList::from(vec![1, 2, 3]);
	///
	/// // list moved
	/// let num = list.into_iter().fold(0, |acc, elem| acc + elem);
	/// assert_eq!(num, 6);
	/// ```
	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		IntoIter::new(self)
	}
}

impl<'a, T> IntoIterator for &'a RingList<T> {
	type Item     = &'a T;
	type IntoIter = Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut RingList<T> {
	type Item     = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}
