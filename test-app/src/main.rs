// rigkit test application -- CLI tool for exercising the generic rig
// control layer against real hardware or the mock connector.
//
// Usage:
//   rigkit-test-app list
//   rigkit-test-app caps --model 1
//   rigkit-test-app --model 1 --mock freq get
//   rigkit-test-app --model 1 --port /dev/ttyUSB0 freq set 14074000
//   rigkit-test-app --model 1 --mock mode set CW
//   rigkit-test-app --mock probe /dev/ttyUSB0

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rigkit::{Mode, Rig, RigFunctions, RigModel, TransportConnector, Vfo};
use rigkit_test_harness::MockConnector;

/// rigkit test application -- exercises the rig control layer from the
/// command line.
#[derive(Parser)]
#[command(name = "rigkit-test-app", version, about)]
struct Cli {
    /// Rig model identifier (see `list`). Required for rig commands.
    #[arg(long)]
    model: Option<u32>,

    /// Serial port path (e.g. /dev/ttyUSB0, COM3).
    #[arg(long)]
    port: Option<String>,

    /// Use the mock connector instead of a real serial port.
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all supported rig models.
    List,
    /// Show the capability descriptor of a model.
    Caps,
    /// Get or set the frequency.
    Freq {
        #[command(subcommand)]
        op: FreqOp,
    },
    /// Get or set the operating mode.
    Mode {
        #[command(subcommand)]
        op: ModeOp,
    },
    /// Get or set the active VFO.
    Vfo {
        #[command(subcommand)]
        op: VfoOp,
    },
    /// Probe a port for any rig that recognizes it.
    Probe {
        /// Port path to probe.
        path: String,
    },
}

#[derive(Subcommand)]
enum FreqOp {
    /// Read the current frequency in hertz.
    Get,
    /// Set the frequency in hertz.
    Set { hz: u64 },
}

#[derive(Subcommand)]
enum ModeOp {
    /// Read the current operating mode.
    Get,
    /// Set the operating mode (USB, LSB, CW, CWR, AM, FM, RTTY, RTTYR,
    /// DATA-USB, DATA-LSB, DATA-FM, DATA-AM).
    Set { mode: String },
}

#[derive(Subcommand)]
enum VfoOp {
    /// Read the active VFO.
    Get,
    /// Select the active VFO (A or B).
    Set { vfo: String },
}

fn connector(cli: &Cli) -> Box<dyn TransportConnector> {
    if cli.mock {
        Box::new(MockConnector::new())
    } else {
        Box::new(rigkit::SerialConnector)
    }
}

fn open_rig(cli: &Cli) -> Result<Rig> {
    let model = cli
        .model
        .context("--model is required for this command (see `list`)")?;
    let registry = rigkit::builtin_registry();
    let mut rig = Rig::new(&registry, RigModel(model))
        .with_context(|| format!("no backend registered for model {model}"))?;

    if let Some(port) = &cli.port {
        rig.state.port_path = port.clone();
    } else if !cli.mock {
        bail!("--port is required unless --mock is given");
    }

    rig.open(connector(cli).as_ref())
        .context("failed to open rig")?;
    Ok(rig)
}

fn finish(mut rig: Rig) -> Result<()> {
    rig.close()?;
    rig.cleanup()?;
    Ok(())
}

fn cmd_list() {
    println!("{:>6}  {:<20} {:<8} {:>8}", "MODEL", "NAME", "PORT", "BAUD");
    for m in rigkit::supported_models() {
        println!(
            "{:>6}  {:<20} {:<8} {:>8}",
            m.model.0, m.model_name, m.port_type, m.serial_rate_max
        );
    }
}

fn cmd_caps(cli: &Cli) -> Result<()> {
    let model = cli.model.context("--model is required")?;
    let registry = rigkit::builtin_registry();
    let caps = registry
        .get_caps(RigModel(model))
        .with_context(|| format!("no backend registered for model {model}"))?;

    println!("model:      {} ({})", caps.model.0, caps.model_name);
    println!("port:       {}", caps.port_type);
    println!(
        "serial:     {}-{} baud, {:?} data, {:?} stop, {:?} parity, {:?} handshake",
        caps.serial_rate_min,
        caps.serial_rate_max,
        caps.serial_data_bits,
        caps.serial_stop_bits,
        caps.serial_parity,
        caps.serial_handshake
    );
    println!("timeout:    {:?} (retry {})", caps.timeout, caps.retry);
    println!("ptt:        {:?}", caps.ptt_type);

    let advertised = [
        (RigFunctions::SET_FREQ, "set_freq"),
        (RigFunctions::GET_FREQ, "get_freq"),
        (RigFunctions::SET_MODE, "set_mode"),
        (RigFunctions::GET_MODE, "get_mode"),
        (RigFunctions::SET_VFO, "set_vfo"),
        (RigFunctions::GET_VFO, "get_vfo"),
        (RigFunctions::PROBE, "probe"),
    ];
    let names: Vec<&str> = advertised
        .iter()
        .filter(|(bit, _)| caps.functions.contains(*bit))
        .map(|(_, name)| *name)
        .collect();
    println!("functions:  {}", names.join(", "));
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::List => {
            cmd_list();
            Ok(())
        }
        Command::Caps => cmd_caps(&cli),
        Command::Freq { op } => {
            let mut rig = open_rig(&cli)?;
            match op {
                FreqOp::Get => println!("{} Hz", rig.get_freq()?),
                FreqOp::Set { hz } => {
                    rig.set_freq(*hz)?;
                    println!("set to {hz} Hz");
                }
            }
            finish(rig)
        }
        Command::Mode { op } => {
            let mut rig = open_rig(&cli)?;
            match op {
                ModeOp::Get => println!("{}", rig.get_mode()?),
                ModeOp::Set { mode } => {
                    let mode: Mode = mode.parse().map_err(anyhow::Error::msg)?;
                    rig.set_mode(mode)?;
                    println!("mode set to {mode}");
                }
            }
            finish(rig)
        }
        Command::Vfo { op } => {
            let mut rig = open_rig(&cli)?;
            match op {
                VfoOp::Get => println!("{}", rig.get_vfo()?),
                VfoOp::Set { vfo } => {
                    let vfo: Vfo = vfo.parse().map_err(anyhow::Error::msg)?;
                    rig.set_vfo(vfo)?;
                    println!("selected {vfo}");
                }
            }
            finish(rig)
        }
        Command::Probe { path } => {
            let registry = rigkit::builtin_registry();
            let rig = Rig::probe(&registry, connector(&cli).as_ref(), path)
                .context("no rig recognized on that port")?;
            println!(
                "found {} (model {}) on {}",
                rig.caps().model_name,
                rig.caps().model.0,
                path
            );
            finish(rig)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run(Cli::parse())
}
