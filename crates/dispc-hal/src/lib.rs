#![no_std]

/// Selects one of the controller's index/data port pairs.
///
/// Every register in the DC family sits behind one of two classic
/// index/data pairs: write the register index to the index port, then
/// read or write the data port. Single-register ports do not exist on
/// this hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegPort {
    /// Sequencer pair, index port 0x3C4 / data port 0x3C5.
    Seq,
    /// CRT controller pair, index port 0x3D4 / data port 0x3D5.
    Crt,
}

impl RegPort {
    /// (index port, data port) addresses for implementations that drive
    /// real I/O space.
    pub fn ports(self) -> (u16, u16) {
        match self {
            RegPort::Seq => (0x3C4, 0x3C5),
            RegPort::Crt => (0x3D4, 0x3D5),
        }
    }
}

/// Abstracts indexed byte-register access to the controller.
///
/// The register address space is owned by the caller (MMIO window, real
/// I/O ports, or a capture buffer in tests); the driver core never maps
/// it itself. Port I/O cannot fail, so the methods are infallible.
pub trait RegisterBus {
    /// Read the 8-bit register at `index` behind `port`.
    fn read(&mut self, port: RegPort, index: u8) -> u8;

    /// Write the 8-bit register at `index` behind `port`.
    fn write(&mut self, port: RegPort, index: u8, value: u8);
}

/// Bounded blocking delays for clock-reset and power-sequencing steps.
///
/// May be bundled into `RegisterBus` implementations or used
/// independently. Implementations busy-wait or sleep; the driver never
/// asks for more than a few hundred milliseconds.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}
