//! CLI Entry Point for imx091-ctl
//!
//! Inspects and dry-runs the register programming of the sensor without
//! touching hardware. Every command runs against a recording mock bus and
//! prints the transactions a real bus would have seen.
//!
//! # Usage
//!
//! ```bash
//! imx091-ctl modes
//! imx091-ctl plan --width 4208 --height 3120 --frame-length 0x0C4A --coarse-time 0x0C40 --gain 0x20
//! imx091-ctl exposure --gain 0x40 --frame-length 1624 --json
//! imx091-ctl identity
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use imx091_ctl::config::SensorConfig;
use imx091_ctl::hardware::mock::{BusOp, MockBus, MockDelay, MockPower};
use imx091_ctl::mode::SensorMode;
use imx091_ctl::session::{ModeRequest, SensorSession};
use imx091_ctl::writer::RegisterWriter;
use imx091_ctl::ExposureUpdate;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imx091-ctl")]
#[command(about = "Dry-run register programming for the IMX091 sensor", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported resolutions
    Modes,

    /// Show the bus writes of a full mode set
    Plan {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Frame length in lines (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_u32)]
        frame_length: u32,
        /// Coarse integration time in lines
        #[arg(long, value_parser = parse_u32)]
        coarse_time: u32,
        /// Analogue gain code
        #[arg(long, value_parser = parse_u16)]
        gain: u16,
        /// Print transactions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the bus writes of a live exposure update
    Exposure {
        #[arg(long, value_parser = parse_u16)]
        gain: Option<u16>,
        #[arg(long, value_parser = parse_u32)]
        coarse_time: Option<u32>,
        #[arg(long, value_parser = parse_u32)]
        frame_length: Option<u32>,
        /// Print transactions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the transactions of a fuse ID fetch
    Identity,
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let value = parse_u32(s)?;
    u16::try_from(value).map_err(|_| format!("'{s}' does not fit in 16 bits"))
}

type DryRun = (MockBus, MockDelay, SensorSession<MockBus, MockDelay>);

/// Acquired session over a recording bus.
fn dry_run_session(config: &SensorConfig) -> Result<DryRun> {
    let bus = MockBus::new();
    let delay = MockDelay::new();
    let writer = RegisterWriter::with_policy(bus.clone(), delay.clone(), config.retry_policy())
        .with_settle_jitter(config.wait_jitter());
    let session = SensorSession::from_writer(writer).with_power(Box::new(MockPower::new()));
    session.acquire().context("Failed to acquire sensor")?;
    Ok((bus, delay, session))
}

fn print_ops(ops: &[BusOp], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ops)?);
        return Ok(());
    }
    for op in ops {
        match op {
            BusOp::Write { address, value } => println!("W 0x{address:04X} = 0x{value:02X}"),
            BusOp::Read { address, value } => println!("R 0x{address:04X} -> 0x{value:02X}"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SensorConfig::load_from(path),
        None => SensorConfig::load(),
    }
    .context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Modes => {
            for mode in SensorMode::ALL {
                let (width, height) = mode.request_resolution();
                println!(
                    "{:>2}  {:>4}x{:<4}  table {:<10} {} entries",
                    mode.index(),
                    width,
                    height,
                    mode.to_string(),
                    mode.table().len()
                );
            }
        }
        Commands::Plan {
            width,
            height,
            frame_length,
            coarse_time,
            gain,
            json,
        } => {
            let (bus, delay, mut session) = dry_run_session(&config)?;
            let mode = session
                .set_mode(&ModeRequest {
                    width,
                    height,
                    frame_length,
                    coarse_time,
                    gain,
                })
                .context("Mode set failed")?;
            print_ops(&bus.ops(), json)?;
            if !json {
                println!(
                    "# mode {} ({} writes, {:?} settle time)",
                    mode,
                    bus.writes().len(),
                    delay.total()
                );
            }
        }
        Commands::Exposure {
            gain,
            coarse_time,
            frame_length,
            json,
        } => {
            let update = ExposureUpdate {
                gain,
                coarse_time,
                frame_length,
            };
            let (bus, _, mut session) = dry_run_session(&config)?;
            session
                .set_group_hold(&update)
                .context("Exposure update failed")?;
            print_ops(&bus.ops(), json)?;
        }
        Commands::Identity => {
            let (bus, _, mut session) = dry_run_session(&config)?;
            let identity = session
                .sensor_identity()
                .context("Fuse ID fetch failed")?;
            print_ops(&bus.ops(), false)?;
            println!("# fuse id {identity}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_u32("0x0C4A"), Ok(0x0C4A));
        assert_eq!(parse_u32("1624"), Ok(1624));
        assert!(parse_u32("0xZZ").is_err());
        assert_eq!(parse_u16("0x1E0"), Ok(0x1E0));
        assert!(parse_u16("70000").is_err());
    }

    #[test]
    fn test_dry_run_session_is_acquired() {
        let (bus, _, mut session) = dry_run_session(&SensorConfig::default()).unwrap();
        assert!(session.is_in_use());
        session.set_gain(0x20, false).unwrap();
        assert_eq!(bus.writes(), vec![(0x0205, 0x20)]);
    }

    #[test]
    fn test_cli_parses_plan() {
        let cli = Cli::try_parse_from([
            "imx091-ctl",
            "plan",
            "--width",
            "4208",
            "--height",
            "3120",
            "--frame-length",
            "0x0C4A",
            "--coarse-time",
            "100",
            "--gain",
            "32",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Plan {
                width: 4208,
                frame_length: 0x0C4A,
                json: false,
                ..
            }
        ));
    }
}
