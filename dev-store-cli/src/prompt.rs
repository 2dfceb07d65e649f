use std::io::Write;

use dev_store_lib::Confirm;

/// Asks on stdout and reads a `y`/`n` answer from stdin. Anything other than
/// `y` (including a read failure) declines.
pub(crate) struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if let Err(e) = std::io::stdout().flush() {
            log::warn!("Could not show prompt: {}", e);
            return false;
        }

        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(_) => input.trim().eq_ignore_ascii_case("y"),
            Err(e) => {
                log::warn!("Could not read answer: {}", e);
                false
            }
        }
    }
}
