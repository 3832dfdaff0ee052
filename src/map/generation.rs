use std::cell::Cell;
use std::rc::Rc;

/// Monotonic counter distinguishing overlapping map builds.
///
/// Starting a build supersedes every earlier one; only the holder of the
/// latest ticket may publish.
#[derive(Clone, Debug, Default)]
pub struct BuildGeneration(Rc<Cell<u64>>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildTicket(u64);

impl BuildGeneration {
	pub fn next(&self) -> BuildTicket {
		let id = self.0.get().wrapping_add(1);
		self.0.set(id);
		BuildTicket(id)
	}

	pub fn is_current(&self, ticket: BuildTicket) -> bool {
		self.0.get() == ticket.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn newest_ticket_wins() {
		let generation = BuildGeneration::default();
		let first = generation.next();
		assert!(generation.is_current(first));
		let second = generation.next();
		assert!(!generation.is_current(first));
		assert!(generation.is_current(second));
	}

	#[test]
	fn clones_share_the_counter() {
		let generation = BuildGeneration::default();
		let ticket = generation.next();
		generation.clone().next();
		assert!(!generation.is_current(ticket));
	}
}
