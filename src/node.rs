use std::mem;
use std::ops::{Index, IndexMut};

/// Slot of the sentinel in every list. Never freed, never reused.
pub const SENTINEL: usize = 0;

pub enum Entry<T> {
	Sentinel,
	Elem(T),
	Vacant,
}

impl<T> Entry<T> {
	#[inline]
	pub fn elem(&self) -> Option<&T> {
		match self {
			Entry::Elem(elem) => Some(elem),
			_ => None,
		}
	}

	#[inline]
	pub fn elem_mut(&mut self) -> Option<&mut T> {
		match self {
			Entry::Elem(elem) => Some(elem),
			_ => None,
		}
	}
}

/// One slot of the arena.
/// While linked, `next`/`prev` are the neighbouring slots in the ring.
/// While vacant, `next` is the following free slot (`SENTINEL` ends the free list).
pub struct Node<T> {
	pub next:       usize,
	pub prev:       usize,
	pub generation: u32,
	pub entry:      Entry<T>,
}

impl<T> Node<T> {
	#[inline]
	const fn sentinel() -> Self {
		Self {
			next:       SENTINEL,
			prev:       SENTINEL,
			generation: 0,
			entry:      Entry::Sentinel,
		}
	}
}

/// Arena of nodes with stable indices. Slot 0 is the sentinel.
pub struct Slots<T> {
	nodes:     Vec<Node<T>>,
	free_head: Option<usize>,
}

impl<T> Slots<T> {
	pub fn with_capacity(capacity: usize) -> Self {
		let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
		nodes.push(Node::sentinel());

		Self { nodes, free_head: None }
	}

	/// Put `elem` into a free slot, or a new one. The node comes back unlinked,
	/// pointing at itself.
	pub fn alloc(&mut self, elem: T) -> usize {
		match self.free_head {
			Some(index) => {
				let node = &mut self.nodes[index];
				self.free_head = (node.next != SENTINEL).then_some(node.next);

				node.next  = index;
				node.prev  = index;
				node.entry = Entry::Elem(elem);
				index
			},
			None => {
				let index = self.nodes.len();
				self.nodes.push(Node {
					next:       index,
					prev:       index,
					generation: 0,
					entry:      Entry::Elem(elem),
				});
				index
			},
		}
	}

	/// Take the element out of `index` and put the slot on the free list.
	/// Returns `None`, changing nothing, if the slot holds no element.
	/// Links are not touched beyond the slot itself; unlink it first.
	pub fn free(&mut self, index: usize) -> Option<T> {
		let node = &mut self.nodes[index];

		match mem::replace(&mut node.entry, Entry::Vacant) {
			Entry::Elem(elem) => {
				node.generation = node.generation.wrapping_add(1);
				node.next       = self.free_head.unwrap_or(SENTINEL);
				node.prev       = SENTINEL;
				self.free_head  = Some(index);
				Some(elem)
			},
			other => {
				node.entry = other;
				None
			},
		}
	}

	/// Whether `index` names a sentinel or element slot of the given generation.
	#[inline]
	pub fn is_live(&self, index: usize, generation: u32) -> bool {
		self.nodes.get(index).is_some_and(|node|
			node.generation == generation && !matches!(node.entry, Entry::Vacant))
	}

	/// Slots ever allocated, the sentinel included.
	#[inline]
	pub fn allocated(&self) -> usize {
		self.nodes.len()
	}

	/// Hand out every element slot at once, indexed by slot.
	pub fn elems_mut(&mut self) -> impl Iterator<Item = Option<&mut T>> {
		self.nodes.iter_mut().map(|node| node.entry.elem_mut())
	}
}

impl<T> Index<usize> for Slots<T> {
	type Output = Node<T>;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		&self.nodes[index]
	}
}

impl<T> IndexMut<usize> for Slots<T> {
	#[inline]
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.nodes[index]
	}
}
