use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Source of `created_at` / `updated_at` stamps in the configured UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
}

impl Clock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}
