//! Shared mock register bus for the integration tests.
//!
//! Backs reads with a register file and captures every write as a
//! (port, index, value) tuple so tests can assert both final register
//! contents and write ordering.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dispc_core::regio::RegisterField;
use dispc_core::{Delay, RegPort, RegisterBus};

/// Captured register write: (port, index, value).
pub type WriteRecord = (RegPort, u8, u8);

#[derive(Clone, Default)]
pub struct MockBus {
    regs: Rc<RefCell<HashMap<(RegPort, u8), u8>>>,
    writes: Rc<RefCell<Vec<WriteRecord>>>,
    delays: Rc<RefCell<Vec<u32>>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of a register (unwritten registers read 0).
    pub fn reg(&self, port: RegPort, index: u8) -> u8 {
        self.regs.borrow().get(&(port, index)).copied().unwrap_or(0)
    }

    /// Preload a register before the code under test runs.
    pub fn set_reg(&self, port: RegPort, index: u8, value: u8) {
        self.regs.borrow_mut().insert((port, index), value);
    }

    /// All captured writes, in order.
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.writes.borrow().clone()
    }

    /// Values written to one register, in order.
    pub fn writes_to(&self, port: RegPort, index: u8) -> Vec<u8> {
        self.writes
            .borrow()
            .iter()
            .filter(|(p, i, _)| *p == port && *i == index)
            .map(|(_, _, v)| *v)
            .collect()
    }

    /// The last value written to a register, if any.
    pub fn last_write_to(&self, port: RegPort, index: u8) -> Option<u8> {
        self.writes_to(port, index).last().copied()
    }

    /// Position of the first write to a register in the global order.
    pub fn first_write_index(&self, port: RegPort, index: u8) -> Option<usize> {
        self.writes.borrow().iter().position(|(p, i, _)| *p == port && *i == index)
    }

    /// Recorded delay requests, in order.
    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }

    pub fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }

    /// Reassemble a logical value from the register file per field
    /// order, low bits first.
    pub fn read_back(&self, fields: &[RegisterField]) -> u32 {
        let mut value = 0u32;
        let mut cursor = 0u32;
        for field in fields {
            let width = u32::from(field.width());
            let raw = u32::from(self.reg(field.port, field.index));
            let chunk = (raw >> field.lo) & ((1 << width) - 1);
            value |= chunk << cursor;
            cursor += width;
        }
        value
    }
}

impl RegisterBus for MockBus {
    fn read(&mut self, port: RegPort, index: u8) -> u8 {
        self.reg(port, index)
    }

    fn write(&mut self, port: RegPort, index: u8, value: u8) {
        self.regs.borrow_mut().insert((port, index), value);
        self.writes.borrow_mut().push((port, index, value));
    }
}

impl Delay for MockBus {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.borrow_mut().push(ms);
    }
}
