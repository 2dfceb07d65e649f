use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dev_store_lib::{
    AlwaysConfirm, Confirm, DeleteOutcome, DeveloperSortKey, SortState, TagEditor,
};

use super::{Context, print_developer};
use crate::error::CliError;
use crate::prompt::StdinConfirm;

/// Show saved developers, filtered by tag and sorted.
pub(crate) fn run_list(
    ctx: &Context,
    sort: Option<DeveloperSortKey>,
    reverse: bool,
    tag: Option<String>,
) -> Result<(), CliError> {
    let mut state = ctx.open_state();

    if state.collection().is_empty() {
        log::info!(
            "{}",
            "No developers saved yet.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Add one with 'dev-store add-url <url>' or 'dev-store find'.");
        return Ok(());
    }

    let mut order = match sort {
        Some(key) => SortState::new(key),
        None => SortState::default(),
    };
    if reverse {
        order.toggle(order.key());
    }
    state.set_sort(order);
    state.set_tag_filter(tag);

    let visible = state.visible();
    log::info!(
        "{} {}",
        "Saved developers".if_supports_color(Stdout, |t| t.bold()),
        format!(
            "({} of {}, by {} {})",
            visible.len(),
            state.collection().len(),
            sort_label(order.key()),
            order.direction(),
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
    if let Some(tag) = state.tag_filter() {
        log::info!("Tag: {}", format!("#{tag}").if_supports_color(Stdout, |t| t.cyan()));
    }
    log::info!("");

    if visible.is_empty() {
        log::info!(
            "{}",
            "No developers match this tag.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    for developer in visible {
        print_developer(developer);
    }
    Ok(())
}

fn sort_label(key: DeveloperSortKey) -> &'static str {
    match key {
        DeveloperSortKey::Name => "name",
        DeveloperSortKey::DateAdded => "date added",
    }
}

/// List every tag in use.
pub(crate) fn run_tags(ctx: &Context) -> Result<(), CliError> {
    let state = ctx.open_state();
    let tags = state.collection().all_tags();
    if tags.is_empty() {
        log::info!("{}", "No tags yet.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }
    for tag in tags {
        let count = state.collection().filtered(Some(&tag)).len();
        log::info!(
            "{} {}",
            format!("#{tag}").if_supports_color(Stdout, |t| t.cyan()),
            format!("({count})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Delete a developer, asking first unless `yes` is set.
pub(crate) fn run_delete(ctx: &Context, id: u64, yes: bool) -> Result<(), CliError> {
    let mut state = ctx.open_state();
    let confirm: &dyn Confirm = if yes { &AlwaysConfirm } else { &StdinConfirm };

    match state.delete_developer(id, confirm) {
        DeleteOutcome::Deleted => {
            log::info!(
                "{} Deleted developer {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
            );
            Ok(())
        }
        DeleteOutcome::Declined => {
            log::info!("{}", "Skipped".if_supports_color(Stdout, |t| t.dimmed()));
            Ok(())
        }
        DeleteOutcome::NotFound => {
            log::info!(
                "{}",
                format!("Developer {id} is not saved").if_supports_color(Stdout, |t| t.dimmed()),
            );
            Ok(())
        }
    }
}

/// Add and remove tags on one developer, then print the resulting set.
pub(crate) fn run_tag(ctx: &Context, id: u64, add: &[String], remove: &[String]) -> Result<(), CliError> {
    let mut state = ctx.open_state();
    let developer = state
        .collection()
        .get(id)
        .ok_or(CliError::UnknownDeveloper(id))?;
    let name = developer.name.clone();
    let mut editor = TagEditor::for_developer(developer);

    for tag in remove {
        if !editor.remove(tag) {
            log::warn!("{} has no tag {:?}", name, tag);
        }
    }
    for tag in add {
        if let Err(rejection) = editor.add(tag) {
            log::warn!("{}", rejection);
        }
    }

    if !add.is_empty() || !remove.is_empty() {
        state.collection_mut().set_tags(id, editor.tags().to_vec());
    }

    log::info!("{}", name.if_supports_color(Stdout, |t| t.bold()));
    if editor.tags().is_empty() {
        log::info!("  {}", "(no tags)".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        for tag in editor.tags() {
            log::info!("  {}", format!("#{tag}").if_supports_color(Stdout, |t| t.cyan()));
        }
    }
    Ok(())
}
