//! Line-oriented input records.
//!
//! | Record | Fields |
//! |--------|--------|
//! | parcel | `id, source, destination, volume` |
//! | truck | `id, capacity` |
//! | distance | `locA, locB, distAtoB[, distBtoA]` |
//!
//! Fields are comma-separated and trimmed. Blank lines are skipped. Line
//! numbers in errors are 1-based.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, ParseError, Result};
use crate::models::{DistanceMap, Parcel, Truck};

/// One non-blank input line split into fields.
struct Record<'a> {
    kind: &'static str,
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            record: self.kind,
            line: self.line,
            message: message.into(),
        }
    }

    fn expect_fields(&self, allowed: &[usize]) -> Result<(), ParseError> {
        if allowed.contains(&self.fields.len()) {
            return Ok(());
        }
        let expected = allowed
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        Err(self.error(format!(
            "expected {expected} fields, found {}",
            self.fields.len()
        )))
    }

    fn text(&self, index: usize, name: &str) -> Result<&'a str, ParseError> {
        match self.fields.get(index) {
            Some(&field) if !field.is_empty() => Ok(field),
            _ => Err(self.error(format!("{name} is empty"))),
        }
    }

    fn number<T: FromStr>(&self, index: usize, name: &str) -> Result<T, ParseError> {
        let field = self.text(index, name)?;
        field
            .parse()
            .map_err(|_| self.error(format!("{name} {field:?} is not a non-negative integer")))
    }
}

fn records<'a>(text: &'a str, kind: &'static str) -> impl Iterator<Item = Record<'a>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(i, line)| Record {
            kind,
            line: i + 1,
            fields: line.split(',').map(str::trim).collect(),
        })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses parcel records.
///
/// ```
/// use u_fleet::experiment::parse_parcels;
///
/// let parcels = parse_parcels("1, Toronto, Hamilton, 5\n\n2, Toronto, Windsor, 7\n").unwrap();
/// assert_eq!(parcels.len(), 2);
/// assert_eq!(parcels[1].destination, "Windsor");
/// assert_eq!(parcels[1].volume, 7);
/// ```
pub fn parse_parcels(text: &str) -> Result<Vec<Parcel>, ParseError> {
    records(text, "parcel")
        .map(|r| -> Result<Parcel, ParseError> {
            r.expect_fields(&[4])?;
            Ok(Parcel::new(
                r.number(0, "id")?,
                r.number(3, "volume")?,
                r.text(1, "source")?,
                r.text(2, "destination")?,
            ))
        })
        .collect()
}

/// Parses truck records. Every truck starts at `depot`.
pub fn parse_trucks(text: &str, depot: &str) -> Result<Vec<Truck>, ParseError> {
    records(text, "truck")
        .map(|r| -> Result<Truck, ParseError> {
            r.expect_fields(&[2])?;
            Ok(Truck::new(r.number(0, "id")?, r.number(1, "capacity")?, depot))
        })
        .collect()
}

/// Parses distance records.
///
/// With three fields the distance is the same both ways. A later record for
/// the same pair overrides an earlier one.
pub fn parse_distance_map(text: &str) -> Result<DistanceMap, ParseError> {
    let mut map = DistanceMap::new();
    for r in records(text, "distance") {
        r.expect_fields(&[3, 4])?;
        let a = r.text(0, "first location")?;
        let b = r.text(1, "second location")?;
        let there: u32 = r.number(2, "distance")?;
        if r.fields.len() == 4 {
            map.add_asymmetric_distance(a, b, there, r.number(3, "return distance")?);
        } else {
            map.add_distance(a, b, there);
        }
    }
    Ok(map)
}

/// Reads parcel records from a file.
pub fn read_parcels(path: impl AsRef<Path>) -> Result<Vec<Parcel>> {
    Ok(parse_parcels(&read_file(path.as_ref())?)?)
}

/// Reads truck records from a file.
pub fn read_trucks(path: impl AsRef<Path>, depot: &str) -> Result<Vec<Truck>> {
    Ok(parse_trucks(&read_file(path.as_ref())?, depot)?)
}

/// Reads distance records from a file.
pub fn read_distance_map(path: impl AsRef<Path>) -> Result<DistanceMap> {
    Ok(parse_distance_map(&read_file(path.as_ref())?)?)
}
