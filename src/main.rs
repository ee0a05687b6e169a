use anyhow::Context;
use clap::Parser;
use slipbox::application::{init::init, list_documents, search_documents, ConfigService};
use slipbox::cli::{format_document_list, format_search_results, Cli, Commands};
use slipbox::error::SlipboxError;
use slipbox::infrastructure::{FileSystemStore, Workspace};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => match e.downcast_ref::<SlipboxError>() {
            Some(err) => {
                eprintln!("Error: {}", err.display_with_suggestions());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = cli.root.as_deref();

    match cli.command {
        Some(Commands::Init { path }) => {
            let target = root.map(Path::to_path_buf).unwrap_or(path);
            let report = init(&target)?;
            println!("Initialized slipbox workspace in {}", report.root.display());
            println!("Documents: {}", report.data_dir.display());
            Ok(())
        }
        Some(Commands::Serve { port, bind }) => serve(root, port, bind),
        Some(Commands::List { limit }) => {
            let store = open_store(root)?;
            let docs = list_documents(&store, limit)?;
            print_block(&format_document_list(&docs));
            Ok(())
        }
        Some(Commands::Search { query }) => {
            let store = open_store(root)?;
            let hits = search_documents(&store, &query)?;
            print_block(&format_search_results(&hits));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let workspace = Workspace::discover(root)?;
            let service = ConfigService::new(workspace);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: slipbox config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    slipbox::application::manage_config::CONFIG_KEYS.join(", ")
                );
            }
            Ok(())
        }
        None => serve(root, None, None),
    }
}

fn open_store(root: Option<&Path>) -> Result<FileSystemStore, SlipboxError> {
    let settings = Workspace::discover(root)?.settings()?;
    Ok(FileSystemStore::new(settings.data_dir))
}

fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

fn serve(root: Option<&Path>, port: Option<u16>, bind: Option<String>) -> anyhow::Result<()> {
    let workspace = Workspace::discover(root)?;
    let mut settings = workspace.settings()?;
    if let Some(port) = port {
        settings.port = port;
    }
    if let Some(bind) = bind {
        settings.bind = bind;
    }
    log::debug!("Workspace root: {}", workspace.root.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(slipbox::web::serve(settings))
}
