mod args;
mod interactive;

use args::{Cli, Command, Format};
use clap::Parser;
use ricker_power::view::table::{frame_json, frame_report, summary_json, sweep_table};
use ricker_power::{sweep, sweep_values, Explorer, Frame, ParamBounds};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(frame: &Frame, format: Format) -> Result<String, String> {
    match format {
        Format::Table => Ok(frame_report(frame)),
        Format::Json => frame_json(frame).map(|s| s + "\n").map_err(|e| e.to_string()),
        Format::Summary => summary_json(frame).map(|s| s + "\n").map_err(|e| e.to_string()),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    cli.wavelet.validate()?;
    let bounds = ParamBounds::default();
    let mut params = cli.wavelet.params();
    if cli.clamp {
        params = bounds.clamp(&params);
    } else if !bounds.contains(&params) {
        log::info!("parameters outside the usual slider ranges: {:?}", params);
    }

    match cli.command {
        None => {
            let mut explorer = Explorer::new(params);
            let frame = explorer.refresh().map_err(|e| e.to_string())?;
            print!("{}", render(frame, cli.format)?);
        }
        Some(Command::Sweep { param, from, to, step }) => {
            let values = sweep_values(from, to, step)?;
            log::info!("sweeping {param} over {} values", values.len());
            let frames = sweep(&params, param, &values).map_err(|e| e.to_string())?;
            match cli.format {
                Format::Table => print!("{}", sweep_table(&frames)),
                _ => {
                    for frame in &frames {
                        print!("{}", render(frame, cli.format)?);
                    }
                }
            }
        }
        Some(Command::Interactive) => {
            let mut explorer = Explorer::new(params);
            if cli.clamp {
                explorer = explorer.with_bounds(bounds);
            }
            let stdin = std::io::stdin();
            interactive::run(&mut explorer, stdin.lock(), std::io::stdout(), |f| {
                render(f, cli.format)
            })?;
        }
    }
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
