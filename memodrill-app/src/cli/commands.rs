use crate::cli::opts::*;
use crate::config::Config;
use crate::terminal::keys::RawKeys;
use crate::terminal::reviewer::TerminalReviewer;
use crate::terminal::viewer::Viewer;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use memodrill_core::{
    run_session, summarize, Clock, Collection, FixedClock, Item, Outcome, SystemClock,
};
use memodrill_csv::CsvStore;
use serde::Serialize;
use std::io::stdout;
use std::path::Path;
use tracing::info;

pub fn run_cli(args: Cli, config: Config) -> Result<()> {
    let clock: Box<dyn Clock> = match args.today {
        Some(d) => Box::new(FixedClock(d)),
        None => Box::new(SystemClock),
    };
    match args.cmd {
        Command::Review(cmd) => review_cmd(&*clock, &config, cmd),
        Command::Add(cmd) => add_cmd(&*clock, &config, cmd),
        Command::List(cmd) => list_cmd(&*clock, &config, cmd),
        Command::Stats { file } => stats_cmd(&*clock, &config, &file),
        Command::Export { file, out } => export_cmd(&*clock, &config, &file, &out),
    }
}

/// Loads the deck and writes back any two-field rows right away, so their
/// creation day survives to the next run.
fn open_deck(file: &Path, config: &Config, today: NaiveDate) -> Result<(CsvStore, Collection)> {
    let mut store = CsvStore::with_backups(file, file.with_extension("backups"), config.max_backups);
    let loaded = store
        .load(today)
        .with_context(|| format!("loading {}", file.display()))?;
    if loaded.fresh > 0 {
        info!(file = %file.display(), fresh = loaded.fresh, "recording new items");
        store
            .save(&loaded.collection)
            .with_context(|| format!("saving {}", file.display()))?;
    }
    Ok((store, loaded.collection))
}

fn review_cmd(clock: &dyn Clock, config: &Config, cmd: ReviewCmd) -> Result<()> {
    let (mut store, mut deck) = open_deck(&cmd.file, config, clock.today())?;
    let due = deck.due_items(clock.today()).len();
    if due == 0 {
        println!("no items due");
        return Ok(());
    }

    let viewer = match cmd.viewer.as_deref().or(config.viewer.as_deref()) {
        Some(cmdline) if cmd.viewer.is_some() || cmd.open_questions || config.open_questions => {
            Viewer::new(cmdline)
        }
        None if cmd.open_questions || config.open_questions => Some(Viewer::platform_default()),
        _ => None,
    };
    let limit = cmd.max.or(config.max_reviews);
    info!(file = %cmd.file.display(), due, ?limit, "starting review");

    let mut reviewer = TerminalReviewer::new(stdout(), RawKeys, viewer);
    let report = run_session(&mut deck, clock, &mut reviewer, &mut store, limit)
        .context("review session aborted")?;

    let how = match report.outcome {
        Outcome::Finished => "nothing left due",
        Outcome::Quit => "stopped",
        Outcome::LimitReached => "limit reached",
    };
    println!("reviewed {} ({how})", report.assessed);
    Ok(())
}

fn add_cmd(clock: &dyn Clock, config: &Config, cmd: AddCmd) -> Result<()> {
    let (mut store, mut deck) = open_deck(&cmd.file, config, clock.today())?;
    deck.push(Item::create(cmd.prompt, cmd.response, clock.today()));
    store
        .save(&deck)
        .with_context(|| format!("saving {}", cmd.file.display()))?;
    println!("{}", deck.len() - 1);
    Ok(())
}

fn list_cmd(clock: &dyn Clock, config: &Config, cmd: ListCmd) -> Result<()> {
    let today = clock.today();
    let (_, deck) = open_deck(&cmd.file, config, today)?;
    for (idx, item) in deck.iter().enumerate() {
        if cmd.due && !item.is_due(today) {
            continue;
        }
        println!(
            "{}\t{}\t{}\t{:.2}\t{}",
            idx,
            item.state().as_str(),
            item.due_date(),
            item.easiness(),
            item.prompt
        );
    }
    Ok(())
}

fn stats_cmd(clock: &dyn Clock, config: &Config, file: &Path) -> Result<()> {
    let today = clock.today();
    let (_, deck) = open_deck(file, config, today)?;
    let s = summarize(&deck, today);
    println!("total\t{}", s.total);
    println!("new\t{}", s.new);
    println!("learning\t{}", s.learning);
    println!("mature\t{}", s.mature);
    println!("due\t{}", s.due);
    println!("easiness\t{:.2}", s.mean_easiness);
    Ok(())
}

fn export_cmd(clock: &dyn Clock, config: &Config, file: &Path, out: &Path) -> Result<()> {
    let today = clock.today();
    let (_, deck) = open_deck(file, config, today)?;
    let bundle = ExportBundle {
        version: 1,
        exported_on: today,
        items: &deck,
    };
    let s = serde_json::to_string_pretty(&bundle)?;
    std::fs::write(out, s).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}

#[derive(Serialize)]
struct ExportBundle<'a> {
    version: u32,
    exported_on: NaiveDate,
    items: &'a Collection,
}
