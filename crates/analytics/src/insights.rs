//! Reductions run over an already-built row list.
//!
//! Both scans are strict: on a tie the row seen first keeps its place.

use rust_decimal::Decimal;

/// The row with strictly the highest key.
pub fn highest_by<T, F>(rows: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> Decimal,
{
    let mut best: Option<(&T, Decimal)> = None;
    for row in rows {
        let value = key(row);
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((row, value)),
        }
    }
    best.map(|(row, _)| row)
}

/// The row with strictly the lowest key among rows accepted by `eligible`.
pub fn lowest_by<T, P, F>(rows: &[T], eligible: P, key: F) -> Option<&T>
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> Decimal,
{
    let mut best: Option<(&T, Decimal)> = None;
    for row in rows.iter().filter(|row| eligible(row)) {
        let value = key(row);
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((row, value)),
        }
    }
    best.map(|(row, _)| row)
}
