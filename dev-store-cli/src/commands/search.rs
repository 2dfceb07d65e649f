use std::cell::RefCell;
use std::io::BufRead;

use futures::StreamExt;
use futures::channel::mpsc;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dev_store_lib::{
    AddOutcome, SearchState, SoftwareRecord, add_from_search, add_from_url, run_search,
};

use super::{Context, print_record};
use crate::error::CliError;
use crate::spinner;

/// One-shot search: print the results for `term`.
pub(crate) async fn run_search_once(ctx: &Context, term: &str) -> Result<(), CliError> {
    let records = search(ctx, term).await?;
    if records.is_empty() {
        log::info!("{}", "No results.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }
    for (i, record) in records.iter().enumerate() {
        print_record(i + 1, record);
    }
    Ok(())
}

/// Search for `term` and save the developer of the `index`-th result.
pub(crate) async fn run_add(ctx: &Context, term: &str, index: usize) -> Result<(), CliError> {
    let records = search(ctx, term).await?;
    let record = index
        .checked_sub(1)
        .and_then(|i| records.get(i))
        .ok_or_else(|| {
            CliError::invalid_choice(format!("{} (search returned {} results)", index, records.len()))
        })?;

    let mut state = ctx.open_state();
    report_add(&add_from_search(state.collection_mut(), record));
    Ok(())
}

/// Resolve a store URL and save the developer behind it.
pub(crate) async fn run_add_url(ctx: &Context, url: &str) -> Result<(), CliError> {
    let client = ctx.client()?;
    let mut state = ctx.open_state();

    let pb = spinner::start("Resolving developer...", ctx.quiet);
    let outcome = add_from_url(state.collection_mut(), &client, url).await;
    pb.finish_and_clear();

    match outcome? {
        AddOutcome::Skipped => log::warn!("No URL given"),
        outcome => report_add(&outcome),
    }
    Ok(())
}

async fn search(ctx: &Context, term: &str) -> Result<Vec<SoftwareRecord>, CliError> {
    if term.trim().is_empty() {
        return Ok(Vec::new());
    }
    let client = ctx.client()?;
    let pb = spinner::start(format!("Searching for {:?}...", term), ctx.quiet);
    let result = client.search_by_name(term).await;
    pb.finish_and_clear();
    Ok(result?)
}

fn report_add(outcome: &AddOutcome) {
    match outcome {
        AddOutcome::Added(info) => log::info!(
            "{} Added {} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            info.name.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", info.id).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        AddOutcome::AlreadySaved(info) => log::info!(
            "{} {} is already saved",
            "\u{2139}".if_supports_color(Stdout, |t| t.yellow()),
            info.name.if_supports_color(Stdout, |t| t.bold()),
        ),
        AddOutcome::Skipped => {}
    }
}

/// A line typed during `find`.
enum FindInput {
    Term(String),
    Add(String),
}

/// Interactive search. Each stdin line is a new search term; terms settle
/// after a quiet period before being sent. `:add N` saves the developer of
/// result N and `:q` (or end of input) quits.
pub(crate) async fn run_find(ctx: &Context) -> Result<(), CliError> {
    let client = ctx.client()?;
    let mut state = ctx.open_state();

    let (term_tx, term_rx) = mpsc::unbounded::<String>();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded::<String>();
    let clear_tx = term_tx.clone();

    log::info!(
        "{}",
        "Type a search term (':add N' saves result N, ':q' quits)".if_supports_color(Stdout, |t| t.dimmed()),
    );

    // Stdin is blocking, so read it on its own thread and feed the channels.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let sent = match classify(&line) {
                None => break,
                Some(FindInput::Term(term)) => term_tx.unbounded_send(term).is_ok(),
                Some(FindInput::Add(arg)) => cmd_tx.unbounded_send(arg).is_ok(),
            };
            if !sent {
                break;
            }
        }
    });

    let latest: RefCell<Vec<SoftwareRecord>> = RefCell::new(Vec::new());
    let mut search_state = SearchState::new();

    let searching = run_search(&client, term_rx, &mut search_state, |s| {
        show_search_state(s);
        *latest.borrow_mut() = s.results().to_vec();
    });

    let adding = async {
        let mut clear_tx = Some(clear_tx);
        while let Some(arg) = cmd_rx.next().await {
            let chosen = arg
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| latest.borrow().get(i).cloned());
            match chosen {
                Some(record) => {
                    report_add(&add_from_search(state.collection_mut(), &record));
                    // Clear the panel once a result is taken
                    if let Some(tx) = &clear_tx {
                        if tx.unbounded_send(String::new()).is_err() {
                            clear_tx = None;
                        }
                    }
                }
                None => log::warn!("No result numbered {:?}", arg.trim()),
            }
        }
    };

    futures::join!(searching, adding);
    Ok(())
}

fn classify(line: &str) -> Option<FindInput> {
    let trimmed = line.trim();
    if trimmed == ":q" {
        return None;
    }
    match trimmed.strip_prefix(":add") {
        Some(arg) => Some(FindInput::Add(arg.to_string())),
        None => Some(FindInput::Term(line.to_string())),
    }
}

fn show_search_state(state: &SearchState) {
    if state.is_loading() {
        log::info!(
            "{}",
            format!("Searching for {:?}...", state.term()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }
    if let Some(message) = state.error() {
        log::warn!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), message);
        return;
    }
    if state.term().trim().is_empty() {
        return;
    }
    if state.results().is_empty() {
        log::info!("{}", "No results.".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    for (i, record) in state.results().iter().enumerate() {
        print_record(i + 1, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lines() {
        assert!(matches!(classify("cat game"), Some(FindInput::Term(t)) if t == "cat game"));
        assert!(matches!(classify(":add 3"), Some(FindInput::Add(a)) if a.trim() == "3"));
        assert!(matches!(classify(""), Some(FindInput::Term(t)) if t.is_empty()));
        assert!(classify(" :q ").is_none());
    }
}
