use crate::error::AppError;
use crate::models::JobRecord;

/// Maps one ATS provider's job payload onto a [`JobRecord`].
///
/// Implementations only walk already-fetched JSON. They hold no mutable
/// state, so one adapter can serve many concurrent parses.
pub trait SourceAdapter: Send + Sync {
    /// Provider name stamped on every record, e.g. `"greenhouse"`.
    fn source(&self) -> &'static str;

    /// Build a record from one raw job payload.
    fn parse(&self, payload: &[u8]) -> Result<JobRecord, AppError>;
}
