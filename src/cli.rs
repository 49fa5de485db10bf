use clap::{Args, Parser, Subcommand};

use crate::api::{self, Components};
use crate::error::Result;
use crate::log::ActivityLogger;
use crate::report;

#[derive(Parser)]
#[command(
    name = "yorku-probe",
    version,
    about = "Probe the York University events site for scrapeable structure"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the events page and preview the elements carrying an event class
    Page,
    /// Walk the endpoint fallback chain (WP REST, then TEC REST, then RSS)
    Api,
    /// Show recent probe activity
    Log(LogArgs),
}

#[derive(Args)]
struct LogArgs {
    /// Only show failed runs
    #[arg(long)]
    errors: bool,
}

pub fn run() {
    let cli = Cli::parse();
    let components = Components::default();

    // Bare invocation behaves like `page`.
    match cli.cmd.unwrap_or(Command::Page) {
        Command::Page => {
            finish(api::probe_page(&components).map(|probe| report::render_page(&probe)));
        }
        Command::Api => {
            finish(
                api::probe_endpoints(&components).map(|outcome| report::render_endpoints(&outcome)),
            );
        }
        Command::Log(LogArgs { errors }) => {
            finish(read_activity(errors));
        }
    }
}

fn read_activity(errors_only: bool) -> Result<String> {
    let lines = ActivityLogger::new()?.read_logs(errors_only)?;

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Print the transcript, or the one error line. The process exits 0 either
/// way.
fn finish(result: Result<String>) {
    match result {
        Ok(text) => print!("{}", text),
        Err(e) => print!("{}", report::render_error(&e)),
    }
}
