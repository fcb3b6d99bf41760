use time::{OffsetDateTime, UtcOffset, macros::format_description};

use crate::error::Error;

/// Formats `at` as an IMF-fixdate (`Tue, 15 Nov 1994 08:12:31 GMT`).
pub(crate) fn http_date(at: OffsetDateTime) -> Result<String, Error> {
    at.to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
        ))
        .map_err(|_| Error::signing("failed to format Date header"))
}
