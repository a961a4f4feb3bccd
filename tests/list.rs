use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use proptest::prelude::*;
use ringlist::{ListError, Position, RingList};

fn collect<T: Clone>(list: &RingList<T>) -> Vec<T> {
	list.iter().cloned().collect()
}

/// Walk from `end()` back to `begin()` through positions only.
fn collect_backward<T: Clone>(list: &RingList<T>) -> Vec<T> {
	let mut out = Vec::new();
	let mut pos = list.end();
	while let Ok(prev) = list.prev(pos) {
		out.push(list.get(prev).unwrap().clone());
		pos = prev;
	}
	assert_eq!(pos, list.begin());
	out
}

/// Logs its label into a shared journal when dropped.
struct Tracked {
	label:   u32,
	journal: Rc<RefCell<Vec<u32>>>,
}

impl Drop for Tracked {
	fn drop(&mut self) {
		self.journal.borrow_mut().push(self.label);
	}
}

#[test]
fn names_scenario() {
	let mut list = RingList::new();
	list.push_front("K".to_string());
	list.push_back("S".to_string());
	list.push_front("T".to_string());

	assert_eq!(collect(&list), ["T", "K", "S"]);
	assert_eq!(list.front().map(String::as_str), Some("T"));
	assert_eq!(list.back().map(String::as_str), Some("S"));
	assert_eq!(list.len(), 3);
}

#[test]
fn integer_fold_scenario() {
	let mut list = RingList::new();
	for n in [17, 23, 78, 4, 34, 19, 3, 5, 23, 37, 43] {
		list.push_back(n);
	}

	assert_eq!(list.iter().fold(0, |acc, n| acc + n), 286);
	assert_eq!(list.len(), 11);
}

#[test]
fn push_order_round_trip() {
	let mut back = RingList::new();
	let mut front = RingList::new();
	for c in ['a', 'b', 'c'] {
		back.push_back(c);
		front.push_front(c);
	}

	assert_eq!(collect(&back), ['a', 'b', 'c']);
	assert_eq!(collect(&front), ['c', 'b', 'a']);
}

#[test]
fn empty_list_boundaries() {
	let mut list: RingList<i32> = RingList::new();

	assert!(list.is_empty());
	assert_eq!(list.begin(), list.end());
	assert_eq!(list.front(), None);
	assert_eq!(list.back(), None);
	assert_eq!(list.get(list.end()), Err(ListError::Sentinel));
	assert_eq!(list.next(list.end()), Err(ListError::PastEnd));
	assert_eq!(list.prev(list.end()), Err(ListError::PastBegin));
	assert_eq!(list.erase(list.end()), Ok(list.end()));
	assert_eq!(list.remove(list.end()), Err(ListError::Sentinel));
	assert_eq!(list.pop_front(), None);
	assert_eq!(list.pop_back(), None);
	assert_eq!(list.iter().next(), None);
}

#[test]
fn cursor_on_empty_list_rests_at_end() {
	let list: RingList<i32> = RingList::new();
	let mut cursor = list.cursor();

	assert!(cursor.is_end());
	assert_eq!(cursor.position(), list.end());
	assert_eq!(cursor.current(), None);
	assert_eq!(cursor.peek_prev(), None);
	assert_eq!(cursor.peek_next(), None);
	assert!(!cursor.advance());
	assert!(!cursor.retreat());
	assert_eq!(cursor.next(), None);
}

#[test]
fn push_back_keeps_previous_last_before_it() {
	let mut list = RingList::from(vec![1, 2]);
	let old_last = list.prev(list.end()).unwrap();
	let new_last = list.push_back(3);

	assert_eq!(list.back(), Some(&3));
	assert_eq!(list.prev(new_last), Ok(old_last));
	assert_eq!(list.next(old_last), Ok(new_last));
}

#[test]
fn insert_lands_before_position() {
	let mut list = RingList::from(vec![10, 30]);
	let thirty = list.next(list.begin()).unwrap();

	let twenty = list.insert(thirty, 20).unwrap();
	assert_eq!(list.prev(thirty), Ok(twenty));
	assert_eq!(collect(&list), [10, 20, 30]);

	let front = list.insert(list.begin(), 0).unwrap();
	assert_eq!(list.begin(), front);

	let back = list.insert(list.end(), 40).unwrap();
	assert_eq!(list.prev(list.end()), Ok(back));
	assert_eq!(collect(&list), [0, 10, 20, 30, 40]);
	assert_eq!(list.len(), 5);
}

#[test]
fn insert_into_empty_list_at_end() {
	let mut list = RingList::new();
	let pos = list.insert(list.end(), 'x').unwrap();

	assert_eq!(list.begin(), pos);
	assert_eq!(list.front(), Some(&'x'));
	assert_eq!(list.back(), Some(&'x'));
}

#[test]
fn erase_keeps_other_positions_valid() {
	let mut list = RingList::new();
	let positions = (0..5).map(|n| list.push_back(n)).collect::<Vec<_>>();

	let after = list.erase(positions[2]).unwrap();
	assert_eq!(after, positions[3]);
	assert_eq!(collect(&list), [0, 1, 3, 4]);
	assert_eq!(list.len(), 4);

	for (n, pos) in positions.iter().enumerate() {
		match n {
			2 => assert_eq!(list.get(*pos), Err(ListError::StalePosition)),
			_ => assert_eq!(list.get(*pos), Ok(&(n as i32))),
		}
	}

	assert_eq!(list.erase(positions[2]), Err(ListError::StalePosition));
	assert_eq!(list.next(positions[1]), Ok(positions[3]));
}

#[test]
fn erase_last_returns_end() {
	let mut list = RingList::from(vec![1, 2]);
	let last = list.prev(list.end()).unwrap();

	assert_eq!(list.erase(last), Ok(list.end()));
	assert_eq!(list.back(), Some(&1));
}

#[test]
fn stale_position_stays_stale_after_slot_reuse() {
	let mut list = RingList::new();
	let gone = list.push_back(1);
	list.erase(gone).unwrap();

	let fresh = list.push_back(2);
	assert_ne!(gone, fresh);
	assert_eq!(list.get(gone), Err(ListError::StalePosition));
	assert_eq!(list.insert(gone, 3), Err(ListError::StalePosition));
	assert_eq!(collect(&list), [2]);
}

#[test]
fn foreign_positions_are_rejected() {
	let mut ours = RingList::from(vec![1, 2]);
	let theirs = RingList::from(vec![1, 2]);

	assert_eq!(ours.get(theirs.begin()), Err(ListError::ForeignPosition));
	assert_eq!(ours.erase(theirs.begin()), Err(ListError::ForeignPosition));
	assert_eq!(ours.insert(theirs.end(), 3), Err(ListError::ForeignPosition));
	assert_eq!(ours.next(theirs.begin()), Err(ListError::ForeignPosition));
	assert_ne!(ours.end(), theirs.end());
	assert_eq!(collect(&ours), [1, 2]);
}

#[test]
fn traversal_both_ways_matches() {
	let list = (1..=6).collect::<RingList<_>>();

	let forward = collect(&list);
	let mut backward = collect_backward(&list);
	backward.reverse();

	assert_eq!(forward.len(), list.len());
	assert_eq!(forward, backward);
	assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [6, 5, 4, 3, 2, 1]);
}

#[test]
fn position_walk_visits_len_elements() {
	let list = RingList::from(vec!['a', 'b', 'c']);
	let mut pos = list.begin();
	let mut steps = 0;

	while pos != list.end() {
		pos = list.next(pos).unwrap();
		steps += 1;
	}

	assert_eq!(steps, list.len());
	assert!(pos.is_end());
}

#[test]
fn cursor_moves_both_ways() {
	let list = RingList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor();

	assert_eq!(cursor.current(), Some(&1));
	assert!(!cursor.retreat());
	assert!(cursor.advance());
	assert!(cursor.advance());
	assert_eq!(cursor.current(), Some(&3));
	assert!(cursor.advance());
	assert!(cursor.is_end());
	assert_eq!(cursor.current(), None);
	assert_eq!(cursor.position(), list.end());
	assert!(cursor.retreat());
	assert_eq!(cursor.current(), Some(&3));
}

#[test]
fn mutation_through_iterators() {
	let mut list = RingList::from(vec![1, 2, 3]);
	for elem in &mut list {
		*elem += 1;
	}
	if let Some(front) = list.front_mut() {
		*front = 0;
	}

	assert_eq!(collect(&list), [0, 3, 4]);
	assert_eq!(list.iter_mut().rev().map(|elem| *elem).collect::<Vec<_>>(), [4, 3, 0]);
}

#[test]
fn iter_mut_follows_links_not_slots() {
	let mut list = RingList::new();
	for n in 0..4 {
		list.push_front(n);
	}
	list.erase(list.begin()).unwrap();
	list.push_back(9);
	list.push_front(7);

	let forward = collect(&list);
	assert_eq!(forward, [7, 2, 1, 0, 9]);

	let mutated = list.iter_mut().map(|elem| *elem).collect::<Vec<_>>();
	assert_eq!(mutated, forward);

	let backward = list.iter().rev().copied().collect::<Vec<_>>();
	assert_eq!(list.iter_mut().rev().map(|elem| *elem).collect::<Vec<_>>(), backward);

	for (i, elem) in list.iter_mut().enumerate() {
		*elem = i as i32;
	}
	assert_eq!(collect(&list), [0, 1, 2, 3, 4]);
}

#[test]
fn iter_mut_after_shrinking_from_a_large_peak() {
	let mut list = (0..256).collect::<RingList<i32>>();
	let mut pos = list.begin();
	while !pos.is_end() {
		pos = list.erase(pos).unwrap();
	}
	assert!(list.is_empty());

	list.push_back(3);
	list.push_front(2);
	list.push_back(4);

	assert_eq!(list.iter_mut().len(), 3);
	list.iter_mut().for_each(|elem| *elem *= 10);
	assert_eq!(collect(&list), [20, 30, 40]);
}

#[test]
fn into_iter_drains_from_both_ends() {
	let mut iter = RingList::from(vec![1, 2, 3, 4]).into_iter();

	assert_eq!(iter.len(), 4);
	assert_eq!(iter.next(), Some(1));
	assert_eq!(iter.next_back(), Some(4));
	assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn equality_follows_sequence_not_layout() {
	let mut a = RingList::from(vec![1, 2, 3]);
	let b = RingList::from(vec![1, 2, 3]);
	assert_eq!(a, b);

	a.pop_front();
	a.push_front(1);
	assert_eq!(a, b);

	a.push_back(4);
	assert_ne!(a, b);
}

#[test]
fn drop_releases_every_element_front_to_back() {
	let journal = Rc::new(RefCell::new(Vec::new()));

	{
		let mut list = RingList::new();
		for label in [2, 3] {
			list.push_back(Tracked { label, journal: Rc::clone(&journal) });
		}
		list.push_front(Tracked { label: 1, journal: Rc::clone(&journal) });
		list.push_back(Tracked { label: 4, journal: Rc::clone(&journal) });
		assert!(journal.borrow().is_empty());
	}

	assert_eq!(*journal.borrow(), [1, 2, 3, 4]);
	assert_eq!(Rc::strong_count(&journal), 1);
}

#[test]
fn erase_drops_exactly_one_element() {
	let journal = Rc::new(RefCell::new(Vec::new()));
	let mut list = (0..3)
		.map(|label| Tracked { label, journal: Rc::clone(&journal) })
		.collect::<RingList<_>>();

	let middle = list.next(list.begin()).unwrap();
	list.erase(middle).unwrap();
	assert_eq!(*journal.borrow(), [1]);

	let removed = list.remove(list.begin()).unwrap();
	assert_eq!(*journal.borrow(), [1]);
	drop(removed);
	assert_eq!(*journal.borrow(), [1, 0]);

	drop(list);
	assert_eq!(*journal.borrow(), [1, 0, 2]);
	assert_eq!(Rc::strong_count(&journal), 1);
}

#[test]
fn rejected_insert_drops_the_value() {
	let journal = Rc::new(RefCell::new(Vec::new()));
	let mut list = RingList::new();
	let other: RingList<Tracked> = RingList::new();

	let res = list.insert(other.end(), Tracked { label: 9, journal: Rc::clone(&journal) });
	assert_eq!(res.err(), Some(ListError::ForeignPosition));
	assert_eq!(*journal.borrow(), [9]);
	assert!(list.is_empty());
}

#[test]
fn debug_formats_like_a_sequence() {
	let list = RingList::from(vec![1, 2, 3]);
	assert_eq!(format!("{list:?}"), "[1, 2, 3]");
	assert_eq!(format!("{:?}", RingList::<u8>::new()), "[]");
}


#[derive(Debug, Clone)]
enum Op {
	PushBack(i32),
	PushFront(i32),
	Insert(usize, i32),
	Erase(usize),
	PopFront,
	PopBack,
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		any::<i32>().prop_map(Op::PushBack),
		any::<i32>().prop_map(Op::PushFront),
		(0..16usize, any::<i32>()).prop_map(|(at, v)| Op::Insert(at, v)),
		(0..16usize).prop_map(Op::Erase),
		Just(Op::PopFront),
		Just(Op::PopBack),
	]
}

/// Position of the `at`-th element, or `end()` past the last.
fn nth_position<T>(list: &RingList<T>, at: usize) -> Position {
	let mut pos = list.begin();
	for _ in 0..at.min(list.len()) {
		pos = list.next(pos).unwrap();
	}
	pos
}

proptest! {
	#[test]
	fn behaves_like_vecdeque(ops in prop::collection::vec(op(), 0..64)) {
		let mut list = RingList::new();
		let mut model = VecDeque::new();

		for op in ops {
			match op {
				Op::PushBack(v)  => { list.push_back(v); model.push_back(v); },
				Op::PushFront(v) => { list.push_front(v); model.push_front(v); },
				Op::Insert(at, v) => {
					let at = at.min(model.len());
					let pos = list.insert(nth_position(&list, at), v).unwrap();
					model.insert(at, v);
					prop_assert_eq!(list.get(pos), Ok(&v));
				},
				Op::Erase(at) => {
					let at = at.min(model.len());
					list.erase(nth_position(&list, at)).unwrap();
					if at < model.len() { model.remove(at); }
				},
				Op::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
				Op::PopBack  => prop_assert_eq!(list.pop_back(), model.pop_back()),
			}

			prop_assert_eq!(list.len(), model.len());
			prop_assert_eq!(list.is_empty(), model.is_empty());
			prop_assert_eq!(list.is_empty(), list.begin() == list.end());
			prop_assert_eq!(list.front(), model.front());
			prop_assert_eq!(list.back(), model.back());
		}

		let forward = collect(&list);
		let mut backward = collect_backward(&list);
		backward.reverse();

		prop_assert_eq!(&forward, &model.iter().copied().collect::<Vec<_>>());
		prop_assert_eq!(&forward, &backward);

		let mutated = list.iter_mut().map(|elem| *elem).collect::<Vec<_>>();
		prop_assert_eq!(&mutated, &forward);

		let mut reversed = list.iter_mut().rev().map(|elem| *elem).collect::<Vec<_>>();
		reversed.reverse();
		prop_assert_eq!(&reversed, &forward);

		let drained = list.into_iter().collect::<Vec<_>>();
		prop_assert_eq!(drained, forward);
	}
}
