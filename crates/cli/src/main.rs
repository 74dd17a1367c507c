//! Software floating-point demonstration CLI.
//!
//! This binary drives the emulator from the command line. It provides:
//! 1. **Demo:** Run the built-in scenarios, or those of a JSON config, and
//!    compare each emulated result with the expected native result.
//! 2. **Show:** Print the representation and scientific rendering of values.
//!
//! Diagnostics from the emulator go through `tracing`; set `RUST_LOG` (for
//! example `RUST_LOG=mantissa_core=trace`) to see alignment and rounding steps.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mantissa_core::config::GeneralConfig;
use mantissa_core::{Config, Scenario, SoftF32};

#[derive(Parser, Debug)]
#[command(
    name = "mantissa",
    author,
    version,
    about = "Software IEEE-754 single-precision arithmetic",
    long_about = "Emulate binary32 addition, subtraction and multiplication with integer arithmetic only.\n\nExamples:\n  mantissa\n  mantissa demo --bits\n  mantissa demo --config scenarios.json\n  mantissa show 4.2 -0.0 1e-45"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run scenarios and compare against their expected results (default).
    Demo {
        /// JSON configuration with output settings and scenarios.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print raw bit patterns next to each value.
        #[arg(long)]
        bits: bool,
    },

    /// Print the fields and scientific rendering of each value.
    Show {
        /// Values to render.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let code = match cli.command {
        None => cmd_demo(None, false),
        Some(Commands::Demo { config, bits }) => cmd_demo(config.as_deref(), bits),
        Some(Commands::Show { values }) => {
            cmd_show(&values);
            0
        }
    };
    process::exit(code);
}

/// Runs every scenario and returns the process exit code.
///
/// Exits with 1 if the configuration cannot be loaded or any scenario's
/// result differs from its expected representation.
fn cmd_demo(path: Option<&Path>, bits: bool) -> i32 {
    let config = match path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] {e}");
                return 1;
            }
        },
        None => Config::default(),
    };
    let mut general = config.general;
    general.show_bits |= bits;
    info!(scenarios = config.scenarios.len(), "running scenarios");

    let mut mismatches = 0_usize;
    for scenario in &config.scenarios {
        if !run_scenario(scenario, general) {
            mismatches += 1;
        }
    }

    println!();
    println!("{} scenarios, {mismatches} mismatched", config.scenarios.len());
    i32::from(mismatches != 0)
}

/// Prints one scenario; returns false on a mismatch.
fn run_scenario(scenario: &Scenario, general: GeneralConfig) -> bool {
    let outcome = scenario.evaluate();
    let native = scenario.op.native(scenario.lhs, scenario.rhs);

    println!("{scenario}");
    if general.show_operands {
        println!("  lhs      {}", render(outcome.lhs, general.show_bits));
        println!("  rhs      {}", render(outcome.rhs, general.show_bits));
    }
    println!("  result   {}", render(outcome.result, general.show_bits));
    println!(
        "  as f32   {:?} (host computes {native:?})",
        f32::from(outcome.result)
    );

    match (outcome.passed(), outcome.expected) {
        (Some(true), _) => {
            println!("  ok");
            true
        }
        (Some(false), Some(expected)) => {
            println!(
                "  MISMATCH expected {}",
                render(expected, general.show_bits)
            );
            false
        }
        _ => true,
    }
}

fn cmd_show(values: &[f32]) {
    for &value in values {
        let soft = SoftF32::from(value);
        println!("{value:?}");
        println!("  bits     {:#010x} ({:?})", soft.to_bits(), soft.classify());
        println!(
            "  fields   sign {} exponent {} fraction {:#08x}",
            u8::from(soft.negative()),
            soft.exponent(),
            soft.mantissa_no_leading()
        );
        println!("  value    {soft}");
    }
}

fn render(value: SoftF32, bits: bool) -> String {
    if bits {
        format!("{value} [{:#010x}]", value.to_bits())
    } else {
        value.to_string()
    }
}
