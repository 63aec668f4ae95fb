//! Register locations shared across generations.
//!
//! The primary pipe keeps the classic CRT layout: eight low bits in the
//! base register and the high bits scattered over overflow registers
//! (0x07, 0x09) plus the extension registers (0x33, 0x35, 0x36) the
//! DC62 added. The secondary pipe got its own register bank at 0x50
//! with the high bits packed into shared nibble registers. Field order
//! within every list is low logical bits first.

use dispc_hal::RegPort::{Crt, Seq};

use super::{ControlRegs, FifoRegs, ScalingRegs, TimingParameterSet};
use crate::regio::{RegBit, RegisterField};

const fn f(port: dispc_hal::RegPort, index: u8, lo: u8, hi: u8) -> RegisterField {
    RegisterField::new(port, index, lo, hi)
}

// Primary pipe, extended layout (DC62 and later). 9-bit horizontal
// counts in character clocks, 11-bit vertical counts in lines.

pub static P0_HTOTAL_EXT: [RegisterField; 2] = [f(Crt, 0x00, 0, 7), f(Crt, 0x36, 3, 3)];
pub static P0_HDISPLAY_EXT: [RegisterField; 2] = [f(Crt, 0x01, 0, 7), f(Crt, 0x36, 4, 4)];
pub static P0_HBLANK_START_EXT: [RegisterField; 2] = [f(Crt, 0x02, 0, 7), f(Crt, 0x36, 5, 5)];
pub static P0_HBLANK_END_EXT: [RegisterField; 3] =
    [f(Crt, 0x03, 0, 4), f(Crt, 0x05, 7, 7), f(Crt, 0x33, 5, 5)];
pub static P0_HSYNC_START_EXT: [RegisterField; 2] = [f(Crt, 0x04, 0, 7), f(Crt, 0x33, 4, 4)];
pub static P0_HSYNC_END: [RegisterField; 1] = [f(Crt, 0x05, 0, 4)];
pub static P0_VTOTAL_EXT: [RegisterField; 4] =
    [f(Crt, 0x06, 0, 7), f(Crt, 0x07, 0, 0), f(Crt, 0x07, 5, 5), f(Crt, 0x35, 0, 0)];
pub static P0_VDISPLAY_EXT: [RegisterField; 4] =
    [f(Crt, 0x12, 0, 7), f(Crt, 0x07, 1, 1), f(Crt, 0x07, 6, 6), f(Crt, 0x35, 2, 2)];
pub static P0_VBLANK_START_EXT: [RegisterField; 4] =
    [f(Crt, 0x15, 0, 7), f(Crt, 0x07, 3, 3), f(Crt, 0x09, 5, 5), f(Crt, 0x35, 3, 3)];
pub static P0_VBLANK_END: [RegisterField; 1] = [f(Crt, 0x16, 0, 7)];
pub static P0_VSYNC_START_EXT: [RegisterField; 4] =
    [f(Crt, 0x10, 0, 7), f(Crt, 0x07, 2, 2), f(Crt, 0x07, 7, 7), f(Crt, 0x35, 1, 1)];
pub static P0_VSYNC_END: [RegisterField; 1] = [f(Crt, 0x11, 0, 3)];

pub static PRIMARY_EXT: TimingParameterSet = TimingParameterSet {
    htotal: &P0_HTOTAL_EXT,
    hdisplay: &P0_HDISPLAY_EXT,
    hblank_start: &P0_HBLANK_START_EXT,
    hblank_end: &P0_HBLANK_END_EXT,
    hsync_start: &P0_HSYNC_START_EXT,
    hsync_end: &P0_HSYNC_END,
    vtotal: &P0_VTOTAL_EXT,
    vdisplay: &P0_VDISPLAY_EXT,
    vblank_start: &P0_VBLANK_START_EXT,
    vblank_end: &P0_VBLANK_END,
    vsync_start: &P0_VSYNC_START_EXT,
    vsync_end: &P0_VSYNC_END,
};

// Secondary pipe, wide layout (DC62 and later). Pixel-unit counts, no
// character-clock division; high bits packed into 0x55-0x57, 0x5D-0x60.

pub static P1_HTOTAL_WIDE: [RegisterField; 2] = [f(Crt, 0x50, 0, 7), f(Crt, 0x55, 0, 3)];
pub static P1_HDISPLAY_WIDE: [RegisterField; 2] = [f(Crt, 0x51, 0, 7), f(Crt, 0x55, 4, 6)];
pub static P1_HBLANK_START_WIDE: [RegisterField; 2] = [f(Crt, 0x52, 0, 7), f(Crt, 0x56, 0, 2)];
pub static P1_HBLANK_END_WIDE: [RegisterField; 2] = [f(Crt, 0x53, 0, 7), f(Crt, 0x56, 3, 5)];
pub static P1_HSYNC_START_WIDE: [RegisterField; 2] = [f(Crt, 0x54, 0, 7), f(Crt, 0x57, 0, 3)];
pub static P1_HSYNC_END_WIDE: [RegisterField; 2] = [f(Crt, 0x5C, 0, 7), f(Crt, 0x57, 4, 6)];
pub static P1_VTOTAL_WIDE: [RegisterField; 2] = [f(Crt, 0x58, 0, 7), f(Crt, 0x5D, 0, 2)];
pub static P1_VDISPLAY_WIDE: [RegisterField; 2] = [f(Crt, 0x59, 0, 7), f(Crt, 0x5D, 3, 5)];
pub static P1_VBLANK_START_WIDE: [RegisterField; 2] = [f(Crt, 0x5A, 0, 7), f(Crt, 0x5E, 0, 2)];
pub static P1_VBLANK_END_WIDE: [RegisterField; 2] = [f(Crt, 0x5B, 0, 7), f(Crt, 0x5E, 3, 5)];
pub static P1_VSYNC_START_WIDE: [RegisterField; 2] = [f(Crt, 0x5F, 0, 7), f(Crt, 0x60, 0, 2)];
pub static P1_VSYNC_END_WIDE: [RegisterField; 2] = [f(Crt, 0x61, 0, 7), f(Crt, 0x60, 3, 5)];

pub static SECONDARY_WIDE: TimingParameterSet = TimingParameterSet {
    htotal: &P1_HTOTAL_WIDE,
    hdisplay: &P1_HDISPLAY_WIDE,
    hblank_start: &P1_HBLANK_START_WIDE,
    hblank_end: &P1_HBLANK_END_WIDE,
    hsync_start: &P1_HSYNC_START_WIDE,
    hsync_end: &P1_HSYNC_END_WIDE,
    vtotal: &P1_VTOTAL_WIDE,
    vdisplay: &P1_VDISPLAY_WIDE,
    vblank_start: &P1_VBLANK_START_WIDE,
    vblank_end: &P1_VBLANK_END_WIDE,
    vsync_start: &P1_VSYNC_START_WIDE,
    vsync_end: &P1_VSYNC_END_WIDE,
};

// FIFO register slices. The primary bank lives on the sequencer pair,
// the secondary on the CRT pair with the high bits folded into 0x94/0x95.

pub static FIFO0_DEPTH: [RegisterField; 1] = [f(Seq, 0x17, 0, 7)];
pub static FIFO0_THRESHOLD: [RegisterField; 2] = [f(Seq, 0x16, 0, 5), f(Seq, 0x16, 7, 7)];
pub static FIFO0_HIGH_THRESHOLD: [RegisterField; 2] = [f(Seq, 0x18, 0, 5), f(Seq, 0x18, 7, 7)];
pub static FIFO0_EXPIRE: [RegisterField; 1] = [f(Seq, 0x22, 0, 5)];

pub static FIFO_PRIMARY: FifoRegs = FifoRegs {
    max_depth: &FIFO0_DEPTH,
    threshold: &FIFO0_THRESHOLD,
    high_threshold: &FIFO0_HIGH_THRESHOLD,
    expire: &FIFO0_EXPIRE,
};

pub static FIFO1_DEPTH: [RegisterField; 3] =
    [f(Crt, 0x68, 4, 7), f(Crt, 0x94, 6, 7), f(Crt, 0x95, 6, 7)];
pub static FIFO1_THRESHOLD: [RegisterField; 2] = [f(Crt, 0x68, 0, 3), f(Crt, 0x95, 3, 5)];
pub static FIFO1_HIGH_THRESHOLD: [RegisterField; 2] = [f(Crt, 0x92, 0, 3), f(Crt, 0x95, 0, 2)];
pub static FIFO1_EXPIRE: [RegisterField; 1] = [f(Crt, 0x94, 0, 5)];

pub static FIFO_SECONDARY: FifoRegs = FifoRegs {
    max_depth: &FIFO1_DEPTH,
    threshold: &FIFO1_THRESHOLD,
    high_threshold: &FIFO1_HIGH_THRESHOLD,
    expire: &FIFO1_EXPIRE,
};

// Scaling factor registers sit behind the CRT pair next to the
// secondary bank they modify.

pub static SCALE_HOR_FACTOR: [RegisterField; 2] = [f(Crt, 0x77, 0, 7), f(Crt, 0x79, 4, 7)];
pub static SCALE_VER_FACTOR: [RegisterField; 2] = [f(Crt, 0x78, 0, 7), f(Crt, 0x79, 1, 3)];

pub static SCALING: ScalingRegs = ScalingRegs {
    hor_factor: &SCALE_HOR_FACTOR,
    ver_factor: &SCALE_VER_FACTOR,
    hor_enable: RegBit::new(Crt, 0x7A, 0),
    ver_enable: RegBit::new(Crt, 0x7A, 1),
    path_select: RegBit::new(Crt, 0x7A, 7),
    buffer_share: RegBit::new(Crt, 0x6B, 2),
};

pub static CONTROL: ControlRegs = ControlRegs {
    pll_reset: RegBit::new(Seq, 0x40, 1),
    clock_enable: [RegBit::new(Seq, 0x1B, 1), RegBit::new(Seq, 0x1B, 4)],
    hsync_polarity: RegBit::new(Seq, 0x2E, 6),
    vsync_polarity: RegBit::new(Seq, 0x2E, 7),
    primary_blank: RegBit::new(Seq, 0x01, 5),
    secondary_enable: RegBit::new(Crt, 0x6A, 7),
    simultaneous: RegBit::new(Crt, 0x6A, 3),
};
