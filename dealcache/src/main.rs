// standard library
use std::collections::HashMap;
use std::env;

// internal
use dealcache::app::options::AppOptions;
use dealcache::app::run::run;
use dealcache::filesys::{dir::Dir, file::File};
use dealcache::logs::{init, LogLevel, LogOptions, LogTarget};
use dealcache::storage::{layout::StorageLayout, settings};
use dealcache::version;

// external
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // parse the command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();
    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // --key=value
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // print the version & exit
    if cli_args.contains_key("version") {
        println!("{:?}", version::build_info());
        return;
    }

    // retrieve the settings file
    let default_layout = match cli_args.get("data-dir") {
        Some(data_dir) => StorageLayout::new(Dir::new(data_dir)),
        None => StorageLayout::default(),
    };
    let settings_file = match cli_args.get("settings") {
        Some(path) => File::new(path),
        None => default_layout.settings_file(),
    };
    let mut settings = match settings::read(&settings_file).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file {settings_file}: {e}");
            return;
        }
    };

    // command line flags take precedence over the settings file
    if let Some(data_dir) = cli_args.get("data-dir") {
        settings.data_dir = data_dir.clone();
    }
    if let Some(address) = cli_args.get("address") {
        settings.server.address = address.clone();
    }
    let mut invalid_log_level = None;
    if let Some(log_level) = cli_args.get("log-level") {
        match log_level.parse::<LogLevel>() {
            Ok(level) => settings.log_level = level,
            Err(unknown) => invalid_log_level = Some(unknown),
        }
    }

    // initialize the logging
    let options = AppOptions::from_settings(&settings);
    let log_options = LogOptions {
        level: settings.log_level,
        target: if cli_args.contains_key("log-to-file") {
            LogTarget::Files(options.layout.log_dir().to_string().into())
        } else {
            LogTarget::Stdout
        },
    };
    let _guard = match init(log_options) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };
    if let Some(log_level) = invalid_log_level {
        warn!(
            "Ignoring invalid --log-level '{}', using '{}'",
            log_level, settings.log_level
        );
    }

    // run the server
    info!("Running dealcache with options: {:?}", options);
    if let Err(e) = run(options, await_shutdown_signal()).await {
        error!("Failed to run dealcache: {e}");
    }
}

async fn await_shutdown_signal() {
    let (mut sigterm, mut sigint) = match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
        _ => {
            warn!("unable to install unix signal handlers, listening for ctrl-c only");
            let _ = tokio::signal::ctrl_c().await;
            info!("received ctrl-c, shutting down...");
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            info!("SIGTERM received, shutting down...");
        }
        _ = sigint.recv() => {
            info!("SIGINT received, shutting down...");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl-c, shutting down...");
        }
    }
}
