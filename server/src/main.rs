use clap::{App, Arg};
use log::info;
use recipes_server::server::{ServerConfig, ServerNode, DEFAULT_PORT};

fn setup_logger(level: log::LevelFilter, log_file: &str) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let default_port = DEFAULT_PORT.to_string();
    let matches = App::new("recipes-server")
        .version("1.0")
        .about("In-memory recipe service over HTTP")
        .arg(
            Arg::with_name("address")
                .long("address")
                .takes_value(true)
                .default_value("127.0.0.1")
                .help("Address to listen on"),
        )
        .arg(
            Arg::with_name("port")
                .long("port")
                .takes_value(true)
                .help("Port to listen on (falls back to RECIPES_PORT)"),
        )
        .arg(
            Arg::with_name("no_seed")
                .long("no-seed")
                .help("Start with an empty recipe store"),
        )
        .arg(
            Arg::with_name("log_file")
                .long("log-file")
                .takes_value(true)
                .default_value("recipes.log")
                .help("File that receives a copy of the log"),
        )
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .takes_value(true)
                .default_value("info")
                .possible_values(["off", "error", "warn", "info", "debug", "trace"])
                .help("Log verbosity"),
        )
        .get_matches();

    let level = matches
        .value_of("log_level")
        .and_then(|l| l.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    if let Err(e) = setup_logger(level, matches.value_of("log_file").unwrap_or("recipes.log")) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let port = matches
        .value_of("port")
        .map(String::from)
        .or_else(|| std::env::var("RECIPES_PORT").ok())
        .unwrap_or(default_port);
    let port = match port.parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("Invalid port {:?}, using {}", port, DEFAULT_PORT);
            DEFAULT_PORT
        }
    };
    let config = ServerConfig {
        address: matches.value_of("address").unwrap_or("127.0.0.1").to_string(),
        port,
        seed: !matches.is_present("no_seed"),
    };
    info!(
        "Starting recipes server (seeded: {})",
        config.seed
    );
    let server_node = ServerNode::new(config);
    server_node.build().launch().await?;
    Ok(())
}
