//! DC72 generation tables (DC720).
//!
//! Late parts: the primary htotal/hdisplay fields gained a tenth bit in
//! 0x36, the display-queue expire count a seventh bit in 0x22, and the
//! divider encoding dropped the -2 bias. Everything else carries over
//! from the DC62 layout.

use dispc_hal::RegPort::{Crt, Seq};

use super::common;
use super::{FifoBank, FifoRegs, FifoRow, GenTables, PllEntry, PllFormat, PllTable, TimingParameterSet};
use crate::regio::{RegisterField, RegisterPreset};

const fn f(port: dispc_hal::RegPort, index: u8, lo: u8, hi: u8) -> RegisterField {
    RegisterField::new(port, index, lo, hi)
}

static P0_HTOTAL: [RegisterField; 3] =
    [f(Crt, 0x00, 0, 7), f(Crt, 0x36, 3, 3), f(Crt, 0x36, 6, 6)];
static P0_HDISPLAY: [RegisterField; 3] =
    [f(Crt, 0x01, 0, 7), f(Crt, 0x36, 4, 4), f(Crt, 0x36, 7, 7)];

static PRIMARY: TimingParameterSet = TimingParameterSet {
    htotal: &P0_HTOTAL,
    hdisplay: &P0_HDISPLAY,
    hblank_start: &common::P0_HBLANK_START_EXT,
    hblank_end: &common::P0_HBLANK_END_EXT,
    hsync_start: &common::P0_HSYNC_START_EXT,
    hsync_end: &common::P0_HSYNC_END,
    vtotal: &common::P0_VTOTAL_EXT,
    vdisplay: &common::P0_VDISPLAY_EXT,
    vblank_start: &common::P0_VBLANK_START_EXT,
    vblank_end: &common::P0_VBLANK_END,
    vsync_start: &common::P0_VSYNC_START_EXT,
    vsync_end: &common::P0_VSYNC_END,
};

static FIFO0_EXPIRE: [RegisterField; 2] = [f(Seq, 0x22, 0, 5), f(Seq, 0x22, 7, 7)];

static FIFO_REGS_PRIMARY: FifoRegs = FifoRegs {
    max_depth: &common::FIFO0_DEPTH,
    threshold: &common::FIFO0_THRESHOLD,
    high_threshold: &common::FIFO0_HIGH_THRESHOLD,
    expire: &FIFO0_EXPIRE,
};

static PLL_ENTRIES: [PllEntry; 16] = [
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
    PllEntry::new(240, 15, 0), // 229.091
];

static PLL_REGS_PRIMARY: [u8; 3] = [0x44, 0x45, 0x46];
static PLL_REGS_SECONDARY: [u8; 3] = [0x4A, 0x4B, 0x4C];

static FIFO_PRIMARY: FifoBank = FifoBank {
    base: FifoRow::new(768, 508, 296),
    reduced: FifoRow::new(384, 328, 296),
    expire: [256, 128, 128, 64, 64],
};

static FIFO_SECONDARY: FifoBank = FifoBank {
    base: FifoRow::new(768, 508, 296),
    reduced: FifoRow::new(384, 328, 296),
    expire: [256, 128, 128, 64, 64],
};

static INIT: [RegisterPreset; 6] = [
    RegisterPreset::new(Seq, 0x10, 0xFF, 0x01),
    RegisterPreset::new(Seq, 0x15, 0xA2, 0x22),
    RegisterPreset::new(Crt, 0x6A, 0x88, 0x00),
    RegisterPreset::new(Seq, 0x1A, 0x0F, 0x0C),
    RegisterPreset::new(Crt, 0x32, 0xFF, 0x04),
    RegisterPreset::new(Crt, 0x7A, 0x83, 0x00),
];

pub static TABLES: GenTables = GenTables {
    timing: [&PRIMARY, &common::SECONDARY_WIDE],
    fifo: [&FIFO_PRIMARY, &FIFO_SECONDARY],
    fifo_regs: [&FIFO_REGS_PRIMARY, &common::FIFO_SECONDARY],
    pll: PllTable {
        entries: &PLL_ENTRIES,
        format: PllFormat::DivShiftMul24,
        divider_regs: [&PLL_REGS_PRIMARY, &PLL_REGS_SECONDARY],
    },
    scaling: &common::SCALING,
    control: &common::CONTROL,
    init: &INIT,
};
