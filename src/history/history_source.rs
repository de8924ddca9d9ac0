use serde::{Deserialize, Serialize};

/// One past booking or published ride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub from: String,
    pub to: String,
    pub date: String,
    pub status: String,
}

/// Where the history panels get their records
pub trait HistorySource {
    fn bookings(&self) -> Vec<HistoryRecord>;
    fn rides(&self) -> Vec<HistoryRecord>;
}

/// Source with no records at all
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyHistory;

impl HistorySource for EmptyHistory {
    fn bookings(&self) -> Vec<HistoryRecord> {
        Vec::new()
    }

    fn rides(&self) -> Vec<HistoryRecord> {
        Vec::new()
    }
}
