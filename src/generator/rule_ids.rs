/// Monotonic rule-id source for one synthesis-then-concentration run.
///
/// Ids start at 0 and are handed out without gaps. The concentrator calls
/// [`RuleIdGenerator::reset`] before renumbering merged rules, so ids are only
/// stable within a single concentration pass. A generator is owned by exactly
/// one run; nothing shares it.
#[derive(Debug, Default)]
pub struct RuleIdGenerator {
    next: u64,
}

impl RuleIdGenerator {
    /// A generator whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Restart numbering at 0.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// How many ids have been handed out since the last reset.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
