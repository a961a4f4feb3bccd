//! A doubly linked list closed into a ring around a sentinel,
//! with detached positions you can hold on to while the list changes.
//!
//! `O(1)` insert and erase anywhere you hold a position.
//! Positions are checked: a position from another list, or one whose element
//! was erased, is reported as an error rather than followed.
//!
//! ## Example
//!
//! ```rust
//! use ringlist::{ListError, RingList};
//!
//! let mut list = RingList::new();
//!
//! list.push_front("K");
//! list.push_back("S");
//! let t = list.push_front("T");
//!
//! assert_eq!(format!("{:?}", list), r#"["T", "K", "S"]"#);
//! assert_eq!(list.front(), Some(&"T"));
//! assert_eq!(list.back(), Some(&"S"));
//!
//! let k = list.next(t).unwrap();
//! list.insert(k, "A").unwrap();
//! assert_eq!(format!("{:?}", list), r#"["T", "A", "K", "S"]"#);
//!
//! list.erase(t).unwrap();
//! assert_eq!(list.get(t), Err(ListError::StalePosition));
//! assert_eq!(list.get(k), Ok(&"K"));
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.next(), Some(&"A"));
//! assert_eq!(cursor.next(), Some(&"K"));
//!
//! let sum = RingList::from(vec![17, 23, 78, 4, 34, 19, 3, 5, 23, 37, 43])
//!     .iter()
//!     .sum::<i32>();
//! assert_eq!(sum, 286);
//! ```
//!
//! ## Features
//!
//! - `tracing` *(default)*: emit `tracing` events for rejected positions and list teardown.

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]
#![forbid(unsafe_code)]

macro_rules! trace {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		::tracing::trace!($($arg)*);
	};
}

macro_rules! debug {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		::tracing::debug!($($arg)*);
	};
}

mod node;
mod position;
mod list;
mod cursor;
pub mod error;

pub use list::RingList;
pub use position::Position;
pub use cursor::{Cursor, Iter, IterMut, IntoIter};
pub use error::ListError;
