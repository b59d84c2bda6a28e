//! Identifier generation.

use uuid::Uuid;

/// Generate a time-ordered UUIDv7.
///
/// The shared counter context keeps ids generated within the same
/// millisecond monotonic, so id order equals creation order and listings
/// can use the id as a stable insertion-order tie-break.
pub(crate) fn next_id() -> Uuid {
    Uuid::now_v7()
}
