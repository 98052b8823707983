use clap::{Args, Parser, Subcommand, ValueEnum};
use ricker_power::{SweepParam, WaveletParams};

#[derive(Parser, Debug)]
#[command(name = "ricker-power", about = "Ricker wavelet and its one-sided power spectrum")]
pub struct Cli {
    #[command(flatten)]
    pub wavelet: WaveletArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Clamp parameters to the slider ranges before computing
    #[arg(long, global = true)]
    pub clamp: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct WaveletArgs {
    /// Dominant frequency (Hz)
    #[arg(long, env = "RICKER_FPEAK", default_value_t = 20.0, global = true)]
    pub fpeak: f64,

    /// Amplitude at t = 0
    #[arg(long, env = "RICKER_SCALAR", default_value_t = 1.0, allow_negative_numbers = true, global = true)]
    pub scalar: f64,

    /// Wavelet length (ms)
    #[arg(long, env = "RICKER_LENGTH_MS", default_value_t = 256.0, global = true)]
    pub length: f64,

    /// Sample interval (ms)
    #[arg(long, env = "RICKER_INTERVAL_MS", default_value_t = 4.0, global = true)]
    pub interval: f64,
}

impl WaveletArgs {
    pub fn params(&self) -> WaveletParams {
        WaveletParams {
            peak_frequency_hz: self.fpeak,
            amplitude_scalar: self.scalar,
            signal_length_ms: self.length,
            sample_interval_ms: self.interval,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.length > 0.0) {
            return Err(format!("--length must be positive, got {}", self.length));
        }
        if !(self.interval > 0.0) {
            return Err(format!("--interval must be positive, got {}", self.interval));
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recompute over a range of one parameter and tabulate the index bounds
    Sweep {
        /// fpeak, scalar, length or interval
        param: SweepParam,
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// Read `<param> <value>` lines from stdin and recompute after each change
    Interactive,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
    Summary,
}
