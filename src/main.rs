//! Demo driver: walks a ring buffer through fill, drain, refill, signed
//! peeks and in-place modification, printing every step.

use anyhow::{bail, Context, Result};
use clap::Parser;
use p2ring::RingBuffer;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "p2ring",
    about = "Walk a power-of-two ring buffer through its states",
    version
)]
struct Cli {
    /// Capacity exponent, the buffer holds 2^POW elements
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(0..=10))]
    pow: u32,

    /// Number of drain/refill cycles before the offset checks
    #[arg(short, long, default_value_t = 1)]
    cycles: u32,

    /// Tracing filter directive, e.g. "debug" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

macro_rules! dispatch {
    ($pow:expr, $out:expr, $cycles:expr; $($n:literal),*) => {
        match $pow {
            $($n => run::<$n>($out, $cycles),)*
            other => bail!("unsupported capacity exponent {other}"),
        }
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    info!(pow = cli.pow, cycles = cli.cycles, "starting ring buffer demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch!(cli.pow, &mut out, cli.cycles; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn init_tracing(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("invalid log level '{d}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run<const POW: u32>(out: &mut impl Write, cycles: u32) -> Result<()> {
    let mut rb: RingBuffer<i64, POW> = RingBuffer::new();
    let mut step: i64 = 0;

    writeln!(out, "---- Inspecting")?;
    writeln!(out, "\tCapacity: {}", rb.capacity())?;
    writeln!(out, "\tCount: {}", rb.count())?;
    writeln!(out, "\tFull: {}", rb.full())?;
    writeln!(out, "\tEmpty: {}", rb.empty())?;

    writeln!(out, "\n---- Filling until full")?;
    fill(out, &mut rb, &mut step)?;

    writeln!(out, "---- One more push")?;
    writeln!(out, "{step}) push {}", rb.push(step))?;
    step += 1;

    for cycle in 1..=cycles {
        writeln!(out, "\n---- Draining until empty (cycle {cycle})")?;
        drain(out, &mut rb, &mut step)?;

        writeln!(out, "---- Nothing left to take")?;
        write!(out, "?) pop {}; count {}", rb.pop(), rb.count())?;
        match rb.peek_front() {
            Ok(v) => writeln!(out, "; peek {v}")?,
            Err(e) => writeln!(out, "; peek failed: {e}")?,
        }

        writeln!(out, "\n---- Refilling")?;
        fill(out, &mut rb, &mut step)?;
    }

    writeln!(out, "\n---- Signed offsets, count {}", rb.count())?;
    for i in (-3..=3isize).rev() {
        match rb.peek_signed(i) {
            Ok(v) => writeln!(out, "{i}) peeked {v}")?,
            Err(e) => {
                writeln!(out, "{i}) rejected: {e}")?;
                break;
            }
        }
    }

    writeln!(out, "\n---- Changing the newest item in place")?;
    let newest = rb.count().saturating_sub(1);
    writeln!(out, "-> original {}; count {}", rb.get(newest)?, rb.count())?;
    *rb.peek(newest)? = 42;
    writeln!(out, "-> modified {}; count {}", rb.get(newest)?, rb.count())?;

    Ok(())
}

fn fill<const POW: u32>(
    out: &mut impl Write,
    rb: &mut RingBuffer<i64, POW>,
    step: &mut i64,
) -> Result<()> {
    while !rb.full() {
        let pushed = rb.push(*step);
        let newest = rb.get(rb.count() - 1)?;
        writeln!(out, "{step}) push {pushed}; peek {newest}; count {}", rb.count())?;
        *step += 1;
    }
    Ok(())
}

fn drain<const POW: u32>(
    out: &mut impl Write,
    rb: &mut RingBuffer<i64, POW>,
    step: &mut i64,
) -> Result<()> {
    while !rb.empty() {
        let oldest = *rb.get(0)?;
        let popped = rb.pop();
        writeln!(out, "{step}) peek {oldest}; pop {popped}; count {}", rb.count())?;
        *step += 1;
    }
    Ok(())
}
