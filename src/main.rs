use geomath::api::{GeoFormatter, Invocation, USAGE};
use geomath::utils::config::ConfigurationManager;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let invocation = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!("{}", USAGE);
            return Err(e.into());
        }
    };

    let manager = match &invocation.config_path {
        Some(path) => ConfigurationManager::from_file(path)?,
        None => ConfigurationManager::new(),
    };
    let config = manager.config();

    let level = if config.debug_logging { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(config_file = ?manager.config_file_path(), ?config, "using configuration");
    tracing::debug!(command = ?invocation.command, "executing");

    let output = match invocation.command.execute(config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return Err(e.into());
        }
    };

    let mut formatter = GeoFormatter::from_config(config);
    if let Some(format) = invocation.format {
        formatter = formatter.with_format(format);
    }
    println!("{}", formatter.format(&output));

    Ok(())
}
