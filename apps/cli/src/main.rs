mod args;
mod output;
mod setup;

use crate::args::Args;
use crate::output::Screen;
use anyhow::Context;
use clap::Parser;
use moodflag::features::questionnaire::Prompter;
use std::io::IsTerminal;
use tracing::info;

#[moodflag_runtime::main(interactive)]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = setup::load_settings(&args)?;
    let _logger = setup::init_logging(&config.logging, args.verbose)?;

    let mut submission = moodflag::init(&config).context("Failed to set up the prediction client")?;

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut screen = Screen::new(stdout.lock(), color);
    screen.intro()?;

    let record = match &args.answers {
        Some(path) => setup::read_answers(path)?,
        None => Prompter::new(std::io::stdin().lock(), screen.writer())
            .run()
            .context("Questionnaire was not completed")?,
    };

    screen.record(&record)?;
    screen.pending()?;

    let state = submission.submit(&record).await;
    info!(outcome = ?state, "Submission finished");

    screen.outcome(state)?;
    screen.disclaimer()?;
    Ok(())
}
