//! CircuitLab - RC and 555 timer waveform simulator
//!
//! # Usage
//!
//! ```bash
//! circuitlab rc-step --v-in 5 --cap-uf 100 --resistances 1k,4.7k
//! circuitlab astable --r1 1k --r2 10k --cap-uf 10 --format csv > astable.csv
//! RUST_LOG=debug circuitlab monostable --resistance 10k --cap-uf 10
//! circuitlab resistor 4.7k --five-band
//! circuitlab ohms --voltage 12 --resistance 4
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use circuitlab_core::{
    analyze_simulation, calculate_generic,
    circuit::{parse_required, parse_value_list},
    components::{parse_resistance, resistor_bands, solve_ohms_law, OhmsInputs},
    error::{CircuitLabError, Result},
    output::{write_json, write_result_csv},
    AstableParams, MonostableParams, RcSquareWaveParams, RcStepParams, SimulationParameters,
    Simulator,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// RC and 555 timer waveform simulator
#[derive(Parser, Debug)]
#[command(name = "circuitlab", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Summary, global = true)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable summary panel
    Summary,
    /// One row per sample
    Csv,
    /// Full result as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// DC step into an RC network, swept over resistances
    RcStep {
        /// Step voltage (V)
        #[arg(long, value_parser = parse_required)]
        v_in: f64,
        /// Capacitance (µF)
        #[arg(long, value_parser = parse_required)]
        cap_uf: f64,
        /// Comma-separated resistances (Ω), e.g. "1k,4.7k"
        #[arg(long, value_parser = parse_value_list)]
        resistances: ::std::vec::Vec<f64>,
        /// Window length (s); 0 selects five time constants
        #[arg(long, value_parser = parse_required, default_value = "0")]
        max_time: f64,
    },

    /// RC network driven by a square wave
    RcSquare {
        /// Square wave high level (V)
        #[arg(long, value_parser = parse_required)]
        v_in: f64,
        /// Capacitance (µF)
        #[arg(long, value_parser = parse_required)]
        cap_uf: f64,
        /// Resistance (Ω)
        #[arg(long, value_parser = parse_required)]
        resistance: f64,
        /// Square wave frequency (Hz)
        #[arg(long, value_parser = parse_required)]
        frequency: f64,
        /// Number of periods
        #[arg(long, default_value_t = circuitlab_core::circuit::DEFAULT_CYCLES)]
        cycles: u32,
    },

    /// 555 timer, astable configuration
    Astable {
        /// R1 (Ω)
        #[arg(long, value_parser = parse_required)]
        r1: f64,
        /// R2 (Ω)
        #[arg(long, value_parser = parse_required)]
        r2: f64,
        /// Timing capacitance (µF)
        #[arg(long, value_parser = parse_required)]
        cap_uf: f64,
        /// Window length (s); 0 shows five periods
        #[arg(long, value_parser = parse_required, default_value = "0")]
        duration: f64,
    },

    /// 555 timer, monostable configuration
    Monostable {
        /// Timing resistance (Ω)
        #[arg(long, value_parser = parse_required)]
        resistance: f64,
        /// Timing capacitance (µF)
        #[arg(long, value_parser = parse_required)]
        cap_uf: f64,
        /// Window length (s); 0 shows 2.5 pulse widths
        #[arg(long, value_parser = parse_required, default_value = "0")]
        duration: f64,
    },

    /// Descriptive statistics of a comma-separated series
    Stats {
        /// Values, e.g. "1.5,2,3.25"
        #[arg(value_parser = parse_value_list)]
        values: ::std::vec::Vec<f64>,
        /// Series name shown in the summary
        #[arg(long, default_value = "Series")]
        name: String,
    },

    /// Colour bands for a resistance
    Resistor {
        /// Resistance, e.g. "4.7k" or "1M" (k = kilo, m/M = mega)
        #[arg(value_parser = parse_resistance)]
        value: f64,
        /// Three digit bands instead of two
        #[arg(long)]
        five_band: bool,
    },

    /// Solve V, I, R and P from any two of them
    Ohms {
        /// Voltage (V)
        #[arg(long, value_parser = parse_required)]
        voltage: Option<f64>,
        /// Current (A)
        #[arg(long, value_parser = parse_required)]
        current: Option<f64>,
        /// Resistance (Ω)
        #[arg(long, value_parser = parse_required)]
        resistance: Option<f64>,
        /// Power (W)
        #[arg(long, value_parser = parse_required)]
        power: Option<f64>,
    },
}

impl Command {
    fn parameters(self) -> Option<SimulationParameters> {
        Some(match self {
            Command::RcStep {
                v_in,
                cap_uf,
                resistances,
                max_time,
            } => SimulationParameters::RcStep(RcStepParams::new(v_in, cap_uf, resistances, max_time)),
            Command::RcSquare {
                v_in,
                cap_uf,
                resistance,
                frequency,
                cycles,
            } => SimulationParameters::RcSquareWave(
                RcSquareWaveParams::new(v_in, cap_uf, resistance, frequency).with_cycles(cycles),
            ),
            Command::Astable {
                r1,
                r2,
                cap_uf,
                duration,
            } => SimulationParameters::Astable555(AstableParams::new(r1, r2, cap_uf, duration)),
            Command::Monostable {
                resistance,
                cap_uf,
                duration,
            } => SimulationParameters::Monostable555(MonostableParams::new(
                resistance, cap_uf, duration,
            )),
            Command::Stats { .. } | Command::Resistor { .. } | Command::Ohms { .. } => {
                return None
            }
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();

    match &args.command {
        Command::Stats { values, name } => {
            let stats = calculate_generic(Some(values), name);
            return print_panel(&stats, args.format, &mut stdout);
        }
        Command::Resistor { value, five_band } => {
            let bands = resistor_bands(*value, *five_band).ok_or_else(|| {
                CircuitLabError::invalid_parameter("resistance", "must be finite and positive")
            })?;
            return print_panel(&bands, args.format, &mut stdout);
        }
        Command::Ohms {
            voltage,
            current,
            resistance,
            power,
        } => {
            let solution = solve_ohms_law(&OhmsInputs {
                voltage: *voltage,
                current: *current,
                resistance: *resistance,
                power: *power,
            })?;
            return print_panel(&solution, args.format, &mut stdout);
        }
        _ => {}
    }

    let Some(params) = args.command.parameters() else {
        return Ok(());
    };

    let result = Simulator::new().run(&params)?;

    match args.format {
        Format::Summary => {
            let summary = analyze_simulation(&result, result.kind().as_str());
            writeln!(stdout, "{}", summary)?;
        }
        Format::Csv => write_result_csv(&result, &mut stdout)?,
        Format::Json => write_json(&result, &mut stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

/// Text panel, or JSON with `--format json`. CSV has no tabular form here
/// and falls back to the panel.
fn print_panel<T, W>(value: &T, format: Format, out: &mut W) -> Result<()>
where
    T: Display + Serialize,
    W: Write,
{
    match format {
        Format::Json => write_json(value, out)?,
        Format::Summary | Format::Csv => writeln!(out, "{}", value)?,
    }
    out.flush()?;
    Ok(())
}
