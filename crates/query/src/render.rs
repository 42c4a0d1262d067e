//! Console text for query replies

use stationmap_relations::{HouseTrace, StationLink};
use stationmap_tracer::Station;
use std::fmt::Write;

pub const NO_HOUSES: &str = "NO MATCHING HOUSES FOUND";
pub const NO_STATIONS: &str = "NO MATCHING STATIONS FOUND";

pub const HELP: &str = "AVAILABLE COMMANDS:
\tSELECT HOUSE|STATION <id> - show one house or station
\tSHOW HOUSE|STATION - list every house or station
\tSTATTRACE <id> - show a station and its houses, farthest first
\tHOUSEREL <id>|ALL - show the station assigned to one house or to every house
\tHELP - show this message
\tEXIT - end the session";

/// Station line followed by its houses, farthest first
pub fn station_trace<'a>(
    station: &Station,
    traces: impl ExactSizeIterator<Item = HouseTrace<'a>>,
) -> String {
    if traces.len() == 0 {
        return format!("{station} -> NO HOUSES FOUND");
    }

    let mut out = format!("{station} (TOTAL {}) ->{{\n", traces.len());
    for trace in traces {
        // writing into a String cannot fail
        let _ = writeln!(out, "\t{} (distance: {})", trace.house, trace.distance);
    }
    out.push('}');
    out
}

/// `<house> -> <station> (distance: <d>)`
pub fn house_relation(link: &StationLink<'_>) -> String {
    format!(
        "{} -> {} (distance: {})",
        link.house, link.station, link.distance
    )
}

/// One entity per line, no trailing newline
pub fn lines<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let mut out = String::new();
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{item}");
    }
    out
}
