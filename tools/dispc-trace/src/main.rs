//! Dry-run harness for dispc bring-up.
//!
//! Runs a full mode-set against an in-memory register file and traces
//! every write the core issues, so a register-level diff against a
//! hardware capture (or a datasheet walk-through) needs no hardware at
//! all. Run with `RUST_LOG=trace` to see the individual writes.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dispc_core::scale::{ScaleKind, ScaleRequest};
use dispc_core::{
    ChipId, ColorDepth, Device, DisplayMode, FramebufferLayout, MemoryTier, Pipe,
};
use dispc_hal::{Delay, RegPort, RegisterBus};

#[derive(Parser)]
#[command(about = "Trace the register writes of a dispc mode-set")]
struct Args {
    /// Chip to program: dc520, dc525, dc620, dc625 or dc720.
    #[arg(long, default_value = "dc620")]
    chip: String,

    /// Pipe index, 0 or 1.
    #[arg(long, default_value_t = 0)]
    pipe: u8,

    /// Destination mode, e.g. 1024x768@60.
    #[arg(long, default_value = "1024x768@60")]
    mode: String,

    /// Framebuffer depth in bits per pixel: 8, 16 or 32.
    #[arg(long, default_value_t = 32)]
    bpp: u32,

    /// Assume the fast memory tier instead of baseline.
    #[arg(long)]
    fast_memory: bool,

    /// Downscale from this source size, e.g. 1280x1024.
    #[arg(long)]
    downscale_from: Option<String>,
}

/// In-memory register file that logs every access.
#[derive(Default)]
struct TraceBus {
    regs: HashMap<(RegPort, u8), u8>,
    writes: usize,
    delays_ms: u32,
}

impl RegisterBus for TraceBus {
    fn read(&mut self, port: RegPort, index: u8) -> u8 {
        self.regs.get(&(port, index)).copied().unwrap_or(0)
    }

    fn write(&mut self, port: RegPort, index: u8, value: u8) {
        log::trace!("{port:?}[{index:#04x}] <- {value:#04x}");
        self.regs.insert((port, index), value);
        self.writes += 1;
    }
}

impl Delay for TraceBus {
    fn delay_ms(&mut self, ms: u32) {
        log::trace!("delay {ms} ms");
        self.delays_ms += ms;
    }
}

fn parse_chip(name: &str) -> Result<ChipId> {
    Ok(match name {
        "dc520" => ChipId::DC520,
        "dc525" => ChipId::DC525,
        "dc620" => ChipId::DC620,
        "dc625" => ChipId::DC625,
        "dc720" => ChipId::DC720,
        other => bail!("unknown chip {other:?}"),
    })
}

/// Parse `WxH` with an optional `@refresh` suffix.
fn parse_mode(spec: &str) -> Result<DisplayMode> {
    let (size, refresh) = match spec.split_once('@') {
        Some((size, refresh)) => {
            (size, refresh.parse().with_context(|| format!("bad refresh in {spec:?}"))?)
        }
        None => (spec, 60),
    };
    let (w, h) = size.split_once('x').with_context(|| format!("bad mode {spec:?}"))?;
    let width = w.parse().with_context(|| format!("bad width in {spec:?}"))?;
    let height = h.parse().with_context(|| format!("bad height in {spec:?}"))?;
    Ok(DisplayMode::with_estimated_blanking(width, height, refresh))
}

fn parse_depth(bpp: u32) -> Result<ColorDepth> {
    Ok(match bpp {
        8 => ColorDepth::Bpp8,
        16 => ColorDepth::Bpp16,
        32 => ColorDepth::Bpp32,
        other => bail!("unsupported depth {other} bpp"),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let chip = parse_chip(&args.chip)?;
    let pipe = Pipe::from_index(args.pipe).context("pipe must be 0 or 1")?;
    let mode = parse_mode(&args.mode)?;
    let depth = parse_depth(args.bpp)?;
    let mem = if args.fast_memory { MemoryTier::Fast } else { MemoryTier::Baseline };
    let source = args.downscale_from.as_deref().map(parse_mode).transpose()?;

    let fb = FramebufferLayout {
        depth,
        pitch: mode.hdisplay * args.bpp.div_ceil(8),
    };

    log::info!(
        "mode-set: {} pipe {} {}x{}@{} at {} bpp",
        args.chip,
        args.pipe,
        mode.hdisplay,
        mode.vdisplay,
        mode.refresh,
        args.bpp
    );

    let mut device =
        Device::new(TraceBus::default(), chip).context("device construction failed")?;
    let request = source
        .as_ref()
        .map(|source| ScaleRequest { source, kind: ScaleKind::Shrink });

    device
        .apply_mode(pipe, &mode, &fb, mem, request)
        .context("mode-set refused")?;

    let bus = device.into_bus();
    println!(
        "programmed {} register writes, {} distinct registers, {} ms of settle delay",
        bus.writes,
        bus.regs.len(),
        bus.delays_ms
    );
    Ok(())
}
