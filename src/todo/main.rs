use clap::Parser;
use todo::api::TodoApi;
use todo::config::TodoConfig;
use todo::error::Result;
use todo::logging;
use todo::store::fs::FileStore;
use tracing::debug;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_messages, print_todos};

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TodoConfig::from_home()?;
    debug!(path = %config.data_file().display(), "using todo file");
    let mut api = TodoApi::new(FileStore::new(config.data_file()));

    match cli.command {
        Commands::Add { text } => handle_add(&mut api, &text),
        Commands::List => handle_list(&api),
        Commands::Done { id } => handle_done(&mut api, &id),
    }
}

fn handle_add(api: &mut TodoApi<FileStore>, text: &[String]) -> Result<()> {
    let result = api.add_todo(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &TodoApi<FileStore>) -> Result<()> {
    let result = api.list_todos()?;
    print_todos(&result.listed_todos);
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(api: &mut TodoApi<FileStore>, id: &str) -> Result<()> {
    let result = api.complete_todo(id)?;
    print_messages(&result.messages);
    Ok(())
}
