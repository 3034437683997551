use uuid::Uuid;

use crate::element::ElementId;
use crate::util::time;

/// Source of unique element identifiers, injected into the interaction engine
pub trait IdGenerator {
    fn next_id(&mut self) -> ElementId;
}

/// Default generator: creation timestamp plus a random suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> ElementId {
        let suffix = Uuid::new_v4().simple().to_string();
        ElementId::from(format!("{:x}-{}", time::current_time_millis(), &suffix[..12]))
    }
}

/// Deterministic `el-1`, `el-2`, ... identifiers
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: usize,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ElementId {
        let id = ElementId::from(format!("el-{}", self.next));
        self.next += 1;
        id
    }
}
