// SPDX-License-Identifier: MPL-2.0
//! The input collaborator that owns the value.
//!
//! The slider never keeps its own authoritative copy of the value: it reads
//! it from an [`InputHost`], writes normalized values back and asks the host
//! to notify listeners.

/// Capability the slider core needs from its owning input.
pub trait InputHost {
    /// Current value.
    fn value(&self) -> f64;

    /// Stores a normalized value.
    fn set_value(&mut self, value: f64);

    /// Notifies listeners that the value changed to `value`.
    fn emit_change(&mut self, value: f64);
}

/// A plain in-memory host that records every emitted change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueCell {
    value: f64,
    changes: Vec<f64>,
}

impl ValueCell {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            changes: Vec::new(),
        }
    }

    /// Emitted changes, oldest first.
    #[must_use]
    pub fn changes(&self) -> &[f64] {
        &self.changes
    }

    #[must_use]
    pub fn last_change(&self) -> Option<f64> {
        self.changes.last().copied()
    }

    /// Drops the recorded changes.
    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }
}

impl InputHost for ValueCell {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn emit_change(&mut self, value: f64) {
        self.changes.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_changes_in_order() {
        let mut cell = ValueCell::new(1.0);
        cell.set_value(2.0);
        cell.emit_change(2.0);
        cell.emit_change(3.0);
        assert_eq!(cell.value(), 2.0);
        assert_eq!(cell.changes(), &[2.0, 3.0]);
        assert_eq!(cell.last_change(), Some(3.0));

        cell.clear_changes();
        assert!(cell.changes().is_empty());
    }
}
