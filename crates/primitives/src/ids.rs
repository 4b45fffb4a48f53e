use std::fmt;

/// Handle returned when registering a listener; pass it back to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

impl ListenerId {
	/// Returns this id and advances `counter` past it.
	pub fn next(counter: &mut u64) -> Self {
		let id = ListenerId(*counter);
		*counter = counter.wrapping_add(1);
		id
	}
}

impl fmt::Display for ListenerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "listener#{}", self.0)
	}
}
