use std::time::Instant;

use spinach::{Color, Spinner};

use crate::logging::format_elapsed_time;

/// Runs `step` behind a spinner showing `running`.
///
/// Once the step succeeds, the spinner is replaced by `done` and the elapsed time. No spinner is shown when `quiet` is set.
pub fn run_step<T, E>(
    quiet: bool,
    running: &str,
    done: impl FnOnce(&T) -> String,
    step: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let spinner = (!quiet).then(|| {
        Spinner::new(&format!(" {}", running))
            .symbols(vec!["◐", "◓", "◑", "◒"])
            .start()
    });

    let start_time = Instant::now();
    let result = step();
    let elapsed_time = format_elapsed_time(start_time.elapsed(), &Default::default());

    if let Some(spinner) = spinner {
        match &result {
            Ok(value) => {
                spinner
                    .text(&format!(" {} {}", done(value), elapsed_time))
                    .symbol("●")
                    .color(Color::Green)
                    .stop();
            }
            Err(_) => {
                spinner.text(&format!(" {} failed", running)).failure();
            }
        }
    }

    result
}
