use anyhow::Result;
use repair_desk::config::DeskConfig;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let demo_mode = args.iter().any(|arg| arg == "--demo");

    let config = DeskConfig::load()?;
    repair_desk::logging::init_logging(&config.logging);

    info!("Starting {} desk v{}", config.shop.shop_name, env!("CARGO_PKG_VERSION"));

    if demo_mode {
        repair_desk::run_demo(&config)?;
        return Ok(());
    }

    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));
    let path = positional.next().map(String::as_str).unwrap_or("/");
    let query = positional.next().map(String::as_str);
    repair_desk::run(&config, path, query)?;
    Ok(())
}
