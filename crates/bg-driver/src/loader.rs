//! CSV route loader.
//!
//! # CSV format
//!
//! One route per record, stops as unsigned integers.  There is no header row
//! and records may have different lengths.  Whitespace around fields is
//! ignored, as are empty fields (a trailing comma is harmless).  Lines
//! starting with `#` are comments.
//!
//! ```csv
//! # goal 2
//! 3, 1, 2, 3
//! 3, 2, 3, 1
//! 4, 2, 3, 4, 5
//! ```
//!
//! Empty lines are skipped.  A record with no stops at all (e.g. `,,`) is an
//! [`DriverError::InvalidRoute`].

use std::io::Read;
use std::path::Path;

use bg_core::StopId;

use crate::{DriverError, DriverResult, Route};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load routes from a CSV file, in file order.
pub fn load_routes_csv(path: &Path) -> DriverResult<Vec<Route>> {
    let file = std::fs::File::open(path).map_err(DriverError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or `&[u8]`).
pub fn load_routes_reader<R: Read>(reader: R) -> DriverResult<Vec<Route>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut routes = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| DriverError::Parse(e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());

        let stops = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(|field| parse_stop(field, line))
            .collect::<DriverResult<Vec<StopId>>>()?;

        let route = Route::new(stops).map_err(|_| {
            DriverError::InvalidRoute(format!("line {line}: no stops"))
        })?;
        routes.push(route);
    }

    Ok(routes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_stop(field: &str, line: u64) -> DriverResult<StopId> {
    field.parse::<u32>().map(StopId).map_err(|_| {
        DriverError::Parse(format!(
            "line {line}: invalid stop {field:?}: expected an unsigned integer"
        ))
    })
}
