use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dev_store_lib::{AlwaysConfirm, Confirm, ImportOutcome, export_file_name, export_json};

use super::Context;
use crate::error::CliError;
use crate::prompt::StdinConfirm;

/// Write the collection to `output`, or to a dated file in the current directory.
pub(crate) fn run_export(ctx: &Context, output: Option<PathBuf>) -> Result<(), CliError> {
    let state = ctx.open_state();
    let developers = state.collection().as_slice();
    let document = export_json(developers)?;

    let path = output.unwrap_or_else(|| default_export_path(Utc::now()));
    std::fs::write(&path, document)?;

    log::info!(
        "{} Exported {} developers to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        developers.len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Export file in the current directory, named for the UTC date of `now`.
fn default_export_path(now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(export_file_name(now.date_naive()))
}

/// Replace the collection with an export file after confirmation.
pub(crate) fn run_import(ctx: &Context, file: &Path, yes: bool) -> Result<(), CliError> {
    let text = std::fs::read_to_string(file).map_err(|e| {
        log::warn!("ファイルの読み込みに失敗しました。");
        CliError::Io(e)
    })?;

    let mut state = ctx.open_state();
    let confirm: &dyn Confirm = if yes { &AlwaysConfirm } else { &StdinConfirm };

    match state.import(&text, confirm)? {
        ImportOutcome::Imported(count) => log::info!(
            "{} Imported {} developers from {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            count,
            file.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        ImportOutcome::Declined => {
            log::info!("{}", "Skipped".if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_export_name_uses_utc_date() {
        // 08:30 on the 2nd in Tokyo, still the 1st in UTC
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        assert_eq!(
            default_export_path(now),
            PathBuf::from("dev_store_export_2024-03-01.json")
        );
    }
}
