use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use log::error;
use ygoprodeck_browser::config;
use ygoprodeck_browser::surface::PageSurface;
use ygoprodeck_browser::{CardsView, Result, SetBrowser, Surface};

#[derive(Parser)]
#[command(name = "ygo-sets")]
#[command(about = "Browse Yu-Gi-Oh! card sets and their card images", long_about = None)]
struct Cli {
    /// Root of the YGOPRODeck API
    #[arg(long, global = true, default_value = config::API_BASE)]
    api_base: String,

    /// HTTP request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sorted list of set names
    List {
        /// Print the full set descriptors as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Write the card grid of one set to an HTML page
    Show {
        set: String,
        #[arg(short, long, default_value = "cards.html")]
        output: PathBuf,
    },

    /// Pick sets interactively; the HTML page is rewritten on each pick
    Browse {
        #[arg(short, long, default_value = "cards.html")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut builder = SetBrowser::builder().api_base(cli.api_base);
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let browser = builder.build()?;

    match cli.command {
        Command::List { json } => list(&browser, json),
        Command::Show { set, output } => show(&browser, &set, output),
        Command::Browse { output } => browse(&browser, output),
    }
}

fn list(browser: &SetBrowser, json: bool) -> Result<ExitCode> {
    let Some(sets) = browser.card_sets() else {
        println!("{}", config::SETS_FAILED_MESSAGE);
        return Ok(ExitCode::FAILURE);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
    } else {
        for name in ygoprodeck_browser::models::sorted_set_names(&sets) {
            println!("{}", name);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn show(browser: &SetBrowser, set: &str, output: PathBuf) -> Result<ExitCode> {
    let mut surface = PageSurface::new(io::stdout(), output).title(set);
    surface.message(&config::fetching_cards_message(set));
    match browser.cards_view(set) {
        CardsView::Grid(markup) => {
            surface.html(&markup);
            Ok(ExitCode::SUCCESS)
        }
        CardsView::Failed(msg) => {
            surface.message(&msg);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn browse(browser: &SetBrowser, output: PathBuf) -> Result<ExitCode> {
    let mut surface = PageSurface::new(io::stdout(), output);
    let Some(selector) = browser.load(&mut surface) else {
        return Ok(ExitCode::FAILURE);
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Set number or name (q to quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        match selector.pick(input) {
            Some(set) => browser.show_cards(set, &mut surface),
            None => println!("No set matches '{}'.", input),
        }
    }
    Ok(ExitCode::SUCCESS)
}
