use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dev_store_lib::{AppBrowser, AppDetail, AppSortKey, SortState, format_date};

use super::Context;
use crate::error::CliError;
use crate::spinner;

/// Fetch a saved developer's apps.
async fn load_browser(ctx: &Context, id: u64) -> Result<(String, AppBrowser), CliError> {
    let mut state = ctx.open_state();
    if !state.select(id) {
        return Err(CliError::UnknownDeveloper(id));
    }
    let name = state
        .selected()
        .map(|d| d.name.clone())
        .unwrap_or_default();

    let client = ctx.client()?;
    let pb = spinner::start(format!("Fetching apps by {}...", name), ctx.quiet);
    let browser = AppBrowser::load(&client, id).await;
    pb.finish_and_clear();
    Ok((name, browser?))
}

/// List a developer's apps in the requested order.
pub(crate) async fn run_apps(
    ctx: &Context,
    id: u64,
    sort: Option<AppSortKey>,
    reverse: bool,
) -> Result<(), CliError> {
    let (name, mut browser) = load_browser(ctx, id).await?;

    if let Some(key) = sort {
        browser.set_sort(SortState::new(key));
    }
    if reverse {
        let key = browser.sort().key();
        browser.sort_by(key);
    }

    log::info!(
        "{} {}",
        name.if_supports_color(Stdout, |t| t.bold()),
        format!("({} apps)", browser.apps().len()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");

    if browser.apps().is_empty() {
        log::info!(
            "{}",
            "This developer has no apps in the store.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for app in browser.sorted() {
        log::info!(
            "  {} {} {}",
            app.track_name.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", app.track_id).if_supports_color(Stdout, |t| t.dimmed()),
            app.formatted_price.if_supports_color(Stdout, |t| t.green()),
        );
        log::info!("      {}", format_date(&app.release_date));
    }
    Ok(())
}

/// Print the detail view of one app.
pub(crate) async fn run_show(ctx: &Context, id: u64, track_id: u64) -> Result<(), CliError> {
    let (_, browser) = load_browser(ctx, id).await?;
    let app = browser.find(track_id).ok_or(CliError::UnknownApp {
        developer: id,
        track: track_id,
    })?;
    let detail = AppDetail::new(app);

    log::info!("{}", detail.title().if_supports_color(Stdout, |t| t.bold()));
    log::info!("{}", detail.publisher().if_supports_color(Stdout, |t| t.cyan()));
    log::info!("{}", detail.price());
    log::info!("");

    log::info!(
        "  評価:     {} {}",
        detail.rating(),
        detail.stars().if_supports_color(Stdout, |t| t.yellow()),
    );
    log::info!("  評価数:   {}", detail.rating_count());
    log::info!("  ジャンル: {}", detail.genres());
    log::info!("  配信日:   {}", detail.release_date());
    log::info!("  入手:     {}", detail.store_url());
    log::info!("  アイコン: {}", detail.artwork_url());

    if !detail.screenshots().is_empty() {
        log::info!("");
        log::info!("{}", "スクリーンショット".if_supports_color(Stdout, |t| t.bold()));
        for url in detail.screenshots() {
            log::info!("  {}", url);
        }
    }

    log::info!("");
    log::info!("{}", "説明".if_supports_color(Stdout, |t| t.bold()));
    for line in detail.description().lines() {
        log::info!("  {}", line);
    }
    Ok(())
}
