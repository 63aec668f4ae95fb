//! DC52 generation tables (DC520/DC525).
//!
//! The early parts predate the 0x33/0x35/0x36 timing extension
//! registers, so every primary timing field stops at the classic CRT
//! width, and the secondary bank carries only two extension bits per
//! parameter. The PLL uses the 16-bit divider encoding over two bytes.

use dispc_hal::RegPort::{Crt, Seq};

use super::common;
use super::{FifoBank, FifoRow, GenTables, PllEntry, PllFormat, PllTable, TimingParameterSet};
use crate::regio::{RegisterField, RegisterPreset};

const fn f(port: dispc_hal::RegPort, index: u8, lo: u8, hi: u8) -> RegisterField {
    RegisterField::new(port, index, lo, hi)
}

static P0_HTOTAL: [RegisterField; 1] = [f(Crt, 0x00, 0, 7)];
static P0_HDISPLAY: [RegisterField; 1] = [f(Crt, 0x01, 0, 7)];
static P0_HBLANK_START: [RegisterField; 1] = [f(Crt, 0x02, 0, 7)];
static P0_HBLANK_END: [RegisterField; 2] = [f(Crt, 0x03, 0, 4), f(Crt, 0x05, 7, 7)];
static P0_HSYNC_START: [RegisterField; 1] = [f(Crt, 0x04, 0, 7)];
static P0_VTOTAL: [RegisterField; 3] =
    [f(Crt, 0x06, 0, 7), f(Crt, 0x07, 0, 0), f(Crt, 0x07, 5, 5)];
static P0_VDISPLAY: [RegisterField; 3] =
    [f(Crt, 0x12, 0, 7), f(Crt, 0x07, 1, 1), f(Crt, 0x07, 6, 6)];
static P0_VBLANK_START: [RegisterField; 3] =
    [f(Crt, 0x15, 0, 7), f(Crt, 0x07, 3, 3), f(Crt, 0x09, 5, 5)];
static P0_VSYNC_START: [RegisterField; 3] =
    [f(Crt, 0x10, 0, 7), f(Crt, 0x07, 2, 2), f(Crt, 0x07, 7, 7)];

static PRIMARY: TimingParameterSet = TimingParameterSet {
    htotal: &P0_HTOTAL,
    hdisplay: &P0_HDISPLAY,
    hblank_start: &P0_HBLANK_START,
    hblank_end: &P0_HBLANK_END,
    hsync_start: &P0_HSYNC_START,
    hsync_end: &common::P0_HSYNC_END,
    vtotal: &P0_VTOTAL,
    vdisplay: &P0_VDISPLAY,
    vblank_start: &P0_VBLANK_START,
    vblank_end: &common::P0_VBLANK_END,
    vsync_start: &P0_VSYNC_START,
    vsync_end: &common::P0_VSYNC_END,
};

static P1_HTOTAL: [RegisterField; 2] = [f(Crt, 0x50, 0, 7), f(Crt, 0x55, 0, 1)];
static P1_HDISPLAY: [RegisterField; 2] = [f(Crt, 0x51, 0, 7), f(Crt, 0x55, 4, 5)];
static P1_HBLANK_START: [RegisterField; 2] = [f(Crt, 0x52, 0, 7), f(Crt, 0x56, 0, 1)];
static P1_HBLANK_END: [RegisterField; 2] = [f(Crt, 0x53, 0, 7), f(Crt, 0x56, 3, 4)];
static P1_HSYNC_START: [RegisterField; 2] = [f(Crt, 0x54, 0, 7), f(Crt, 0x57, 0, 1)];
static P1_HSYNC_END: [RegisterField; 2] = [f(Crt, 0x5C, 0, 7), f(Crt, 0x57, 4, 5)];
static P1_VTOTAL: [RegisterField; 2] = [f(Crt, 0x58, 0, 7), f(Crt, 0x5D, 0, 1)];
static P1_VDISPLAY: [RegisterField; 2] = [f(Crt, 0x59, 0, 7), f(Crt, 0x5D, 3, 4)];
static P1_VBLANK_START: [RegisterField; 2] = [f(Crt, 0x5A, 0, 7), f(Crt, 0x5E, 0, 1)];
static P1_VBLANK_END: [RegisterField; 2] = [f(Crt, 0x5B, 0, 7), f(Crt, 0x5E, 3, 4)];
static P1_VSYNC_START: [RegisterField; 2] = [f(Crt, 0x5F, 0, 7), f(Crt, 0x60, 0, 1)];
static P1_VSYNC_END: [RegisterField; 2] = [f(Crt, 0x61, 0, 7), f(Crt, 0x60, 3, 4)];

static SECONDARY: TimingParameterSet = TimingParameterSet {
    htotal: &P1_HTOTAL,
    hdisplay: &P1_HDISPLAY,
    hblank_start: &P1_HBLANK_START,
    hblank_end: &P1_HBLANK_END,
    hsync_start: &P1_HSYNC_START,
    hsync_end: &P1_HSYNC_END,
    vtotal: &P1_VTOTAL,
    vdisplay: &P1_VDISPLAY,
    vblank_start: &P1_VBLANK_START,
    vblank_end: &P1_VBLANK_END,
    vsync_start: &P1_VSYNC_START,
    vsync_end: &P1_VSYNC_END,
};

static PLL_ENTRIES: [PllEntry; 14] = [
    PllEntry::new(11, 5, 1),   //  15.750 MHz
    PllEntry::new(44, 25, 0),  //  25.200
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
];

static PLL_REGS_PRIMARY: [u8; 2] = [0x46, 0x47];
static PLL_REGS_SECONDARY: [u8; 2] = [0x44, 0x45];

static FIFO_PRIMARY: FifoBank = FifoBank {
    base: FifoRow::new(128, 96, 64),
    reduced: FifoRow::new(64, 48, 32),
    expire: [16, 16, 8, 8, 8],
};

static FIFO_SECONDARY: FifoBank = FifoBank {
    base: FifoRow::new(128, 96, 64),
    reduced: FifoRow::new(64, 48, 32),
    expire: [16, 16, 8, 8, 8],
};

static INIT: [RegisterPreset; 5] = [
    // Extended register unlock.
    RegisterPreset::new(Seq, 0x10, 0xFF, 0x01),
    // Scanout engine to a known state, both channels gated.
    RegisterPreset::new(Seq, 0x15, 0xA2, 0x22),
    RegisterPreset::new(Crt, 0x6A, 0x88, 0x00),
    // Memory arbiter defaults for the shallow FIFO.
    RegisterPreset::new(Seq, 0x1A, 0x0F, 0x03),
    RegisterPreset::new(Crt, 0x32, 0xFF, 0x00),
];

pub static TABLES: GenTables = GenTables {
    timing: [&PRIMARY, &SECONDARY],
    fifo: [&FIFO_PRIMARY, &FIFO_SECONDARY],
    fifo_regs: [&common::FIFO_PRIMARY, &common::FIFO_SECONDARY],
    pll: PllTable {
        entries: &PLL_ENTRIES,
        format: PllFormat::MulShiftDiv16,
        divider_regs: [&PLL_REGS_PRIMARY, &PLL_REGS_SECONDARY],
    },
    scaling: &common::SCALING,
    control: &common::CONTROL,
    init: &INIT,
};
