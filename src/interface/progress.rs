use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::planner::constants::{DEFAULT_PROCESSING_DELAY, PROCESSING_MESSAGE};

/// Terminal view settings.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Pause shown as a spinner before the plan is rendered. Zero disables it.
    pub processing_delay: Duration,
    /// Style banners and callouts. `colored` still drops escapes when stdout is not a terminal.
    pub color: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
            color: true,
        }
    }
}

/// Block for the configured delay while a spinner ticks.
pub fn show_processing(options: &ViewOptions) {
    if options.processing_delay.is_zero() {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(PROCESSING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));

    thread::sleep(options.processing_delay);

    spinner.finish_and_clear();
}
