use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap_serde_derive::ClapSerde;
use tracing::debug;

use login_probe::config::Config;
use login_probe::error::ProbeResult;
use login_probe::exit_err;
use login_probe::probe::Probe;
use login_probe::report;
use login_probe::telemetry::init_telemetry;

const DEFAULT_CONFIG_FILE: &str = "LoginProbe.toml";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "LOGIN_PROBE_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    /// Also print the response headers after the preview
    #[arg(long)]
    show_headers: bool,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <Config as ClapSerde>::Opt,
}

fn main() -> ExitCode {
    init_telemetry();

    let args = Args::parse();
    let config = match Config::from_toml(&args.config_file) {
        Ok(conf) => conf.merge(args.opt_config),
        Err(err) => {
            let default_missing =
                args.config_file == DEFAULT_CONFIG_FILE && !Path::new(DEFAULT_CONFIG_FILE).exists();
            if default_missing {
                debug!("No {} found, using defaults: {}", DEFAULT_CONFIG_FILE, err);
                Config::default().merge(args.opt_config)
            } else {
                exit_err!(
                    1,
                    "Failed to read configuration file {} with error: {}",
                    args.config_file,
                    err
                );
            }
        }
    };

    match run(&config, args.show_headers) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = report::write_failure(&mut io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, show_headers: bool) -> ProbeResult<()> {
    let probe = Probe::new(config)?;
    let response = probe.fetch()?;
    report::write_success(
        &mut io::stdout().lock(),
        &response,
        config.preview_chars,
        show_headers,
    )
}
