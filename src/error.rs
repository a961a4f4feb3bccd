//! Errors reported by [`RingList`](crate::RingList) position operations.

use thiserror::Error;

/// Why a position could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
	#[error("position belongs to a different list")]
	ForeignPosition,

	#[error("position names an element that has been erased")]
	StalePosition,

	#[error("position is the end of the list and holds no element")]
	Sentinel,

	#[error("cannot advance past the end of the list")]
	PastEnd,

	#[error("cannot retreat before the beginning of the list")]
	PastBegin,
}

pub type Result<T> = std::result::Result<T, ListError>;
