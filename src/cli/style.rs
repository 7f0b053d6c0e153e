use indicatif::{ProgressFinish, ProgressStyle};

/// Spinner reporting a single parsed option.
pub fn option() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .tick_strings(&["-", "\\", "|", "/", "✔"])
        .on_finish(ProgressFinish::AndLeave)
}

pub mod files {
    use super::*;

    pub fn running() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .progress_chars("=> ")
            .on_finish(ProgressFinish::AndLeave)
    }

    pub fn finished() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {len} files: {msg}")
            .on_finish(ProgressFinish::AndLeave)
    }
}
