//! `last-modified` header parsing.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// HTTP IMF-fixdate, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`.
const IMF_FIXDATE: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Parse a `last-modified` header value.
///
/// Tries RFC 2822, then IMF-fixdate, then RFC 3339. Returns `None` when none
/// of them fit; a bad header never fails a run.
pub fn parse_last_modified(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    OffsetDateTime::parse(value, &Rfc2822)
        .ok()
        .or_else(|| {
            PrimitiveDateTime::parse(value, IMF_FIXDATE)
                .ok()
                .map(PrimitiveDateTime::assume_utc)
        })
        .or_else(|| OffsetDateTime::parse(value, &Rfc3339).ok())
}
