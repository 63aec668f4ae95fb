//! DC62 generation tables (DC620/DC625).
//!
//! First of the 32-bit capable parts: deep 384-entry FIFOs, the
//! extension timing registers, and the 24-bit biased divider encoding
//! over three bytes per pipe.

use dispc_hal::RegPort::{Crt, Seq};

use super::common;
use super::{FifoBank, FifoRow, GenTables, PllEntry, PllFormat, PllTable};
use crate::regio::RegisterPreset;

static PLL_ENTRIES: [PllEntry; 15] = [
    PllEntry::new(44, 25, 0),  //  25.200 MHz
    PllEntry::new(11, 5, 0),   //  31.500
    PllEntry::new(88, 35, 0),  //  36.000
    PllEntry::new(95, 34, 0),  //  40.007
    PllEntry::new(121, 35, 0), //  49.500
    PllEntry::new(220, 63, 0), //  50.000
    PllEntry::new(55, 14, 0),  //  56.250
    PllEntry::new(59, 13, 0),  //  64.982
    PllEntry::new(110, 21, 0), //  75.000
    PllEntry::new(11, 2, 0),   //  78.750
    PllEntry::new(33, 5, 0),   //  94.500
    PllEntry::new(83, 11, 0),  // 108.037
    PllEntry::new(66, 7, 0),   // 135.000
    PllEntry::new(181, 16, 0), // 161.974
    PllEntry::new(99, 7, 0),   // 202.500
];

static PLL_REGS_PRIMARY: [u8; 3] = [0x44, 0x45, 0x46];
static PLL_REGS_SECONDARY: [u8; 3] = [0x4A, 0x4B, 0x4C];

static FIFO_PRIMARY: FifoBank = FifoBank {
    base: FifoRow::new(384, 328, 296),
    reduced: FifoRow::new(256, 128, 64),
    expire: [128, 64, 64, 64, 32],
};

static FIFO_SECONDARY: FifoBank = FifoBank {
    base: FifoRow::new(384, 328, 296),
    reduced: FifoRow::new(256, 128, 64),
    expire: [128, 64, 64, 64, 32],
};

static INIT: [RegisterPreset; 6] = [
    // Extended register unlock.
    RegisterPreset::new(Seq, 0x10, 0xFF, 0x01),
    RegisterPreset::new(Seq, 0x15, 0xA2, 0x22),
    RegisterPreset::new(Crt, 0x6A, 0x88, 0x00),
    // Arbiter tuned for the deep FIFO.
    RegisterPreset::new(Seq, 0x1A, 0x0F, 0x08),
    RegisterPreset::new(Crt, 0x32, 0xFF, 0x04),
    // Scaler datapath off until a downscale programs it.
    RegisterPreset::new(Crt, 0x7A, 0x83, 0x00),
];

pub static TABLES: GenTables = GenTables {
    timing: [&common::PRIMARY_EXT, &common::SECONDARY_WIDE],
    fifo: [&FIFO_PRIMARY, &FIFO_SECONDARY],
    fifo_regs: [&common::FIFO_PRIMARY, &common::FIFO_SECONDARY],
    pll: PllTable {
        entries: &PLL_ENTRIES,
        format: PllFormat::BiasedDivShiftMul24,
        divider_regs: [&PLL_REGS_PRIMARY, &PLL_REGS_SECONDARY],
    },
    scaling: &common::SCALING,
    control: &common::CONTROL,
    init: &INIT,
};
