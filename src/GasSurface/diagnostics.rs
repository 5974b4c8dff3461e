//! Export of intermediate quantities to per-cell storage for visualisation.
//!
//! The model only ever writes through a sink and never reads it back.
use log::warn;
use std::collections::HashMap;

/// largest slot index a configuration may name
pub const MAX_DIAGNOSTIC_SLOT: usize = 63;

pub trait DiagnosticSink {
    fn write(&mut self, cell: usize, slot: usize, value: f64);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn write(&mut self, _cell: usize, _slot: usize, _value: f64) {}
}

/// In-memory store keyed by (cell, slot)
#[derive(Debug, Clone, Default)]
pub struct DiagnosticStore {
    values: HashMap<(usize, usize), f64>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: usize, slot: usize) -> Option<f64> {
        self.values.get(&(cell, slot)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// all slots written for `cell`, sorted by slot
    pub fn cell_values(&self, cell: usize) -> Vec<(usize, f64)> {
        let mut out: Vec<(usize, f64)> = self
            .values
            .iter()
            .filter(|((c, _), _)| *c == cell)
            .map(|((_, slot), v)| (*slot, *v))
            .collect();
        out.sort_by_key(|(slot, _)| *slot);
        out
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl DiagnosticSink for DiagnosticStore {
    fn write(&mut self, cell: usize, slot: usize, value: f64) {
        self.values.insert((cell, slot), value);
    }
}

/// Host storage laid out as one row of slots per cell.
///
/// Grows on demand. Writes past `MAX_DIAGNOSTIC_SLOT`, or to a cell index the vector cannot
/// be grown to, are dropped with a warning.
impl DiagnosticSink for Vec<Vec<f64>> {
    fn write(&mut self, cell: usize, slot: usize, value: f64) {
        if slot > MAX_DIAGNOSTIC_SLOT {
            warn!("diagnostic slot {} out of range, value for cell {} dropped", slot, cell);
            return;
        }
        if cell >= self.len() {
            let grown = cell
                .checked_add(1)
                .filter(|n| self.try_reserve(n - self.len()).is_ok());
            match grown {
                Some(n_rows) => self.resize_with(n_rows, Vec::new),
                None => {
                    warn!("cannot grow diagnostic rows to cell {}, value dropped", cell);
                    return;
                }
            }
        }
        let row = &mut self[cell];
        if slot >= row.len() {
            row.resize(slot + 1, 0.0);
        }
        row[slot] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites_and_sorts() {
        let mut store = DiagnosticStore::new();
        assert!(store.is_empty());
        store.write(3, 2, 1.0);
        store.write(3, 0, 5.0);
        store.write(4, 0, 7.0);
        store.write(3, 2, 2.0);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(3, 2), Some(2.0));
        assert_eq!(store.get(3, 1), None);
        assert_eq!(store.cell_values(3), vec![(0, 5.0), (2, 2.0)]);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_row_storage_grows_on_demand() {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        rows.write(2, 3, 9.0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec![0.0, 0.0, 0.0, 9.0]);
        assert!(rows[0].is_empty());
        let mut sink = NoDiagnostics;
        sink.write(0, 0, 1.0);
    }

    #[test]
    fn test_row_storage_drops_unreachable_indices() {
        let mut rows: Vec<Vec<f64>> = vec![vec![1.0]];
        rows.write(usize::MAX, 0, 2.0);
        rows.write(usize::MAX - 1, 0, 2.0);
        rows.write(0, usize::MAX, 2.0);
        rows.write(0, MAX_DIAGNOSTIC_SLOT + 1, 2.0);
        assert_eq!(rows, vec![vec![1.0]]);

        rows.write(0, MAX_DIAGNOSTIC_SLOT, 3.0);
        assert_eq!(rows[0].len(), MAX_DIAGNOSTIC_SLOT + 1);
        assert_eq!(rows[0][MAX_DIAGNOSTIC_SLOT], 3.0);
    }
}
