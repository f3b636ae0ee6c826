use super::timestamp::Timestamp;

/// One completed session: the id taken from the start line plus both
/// parsed timestamps.
///
/// The end time is assumed to fall on the same or the immediately
/// following calendar day; which case applies is not stored here but
/// re-derived from the hour comparison when the duration is computed.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: String,
    pub start: Timestamp,
    pub end: Timestamp,
}
