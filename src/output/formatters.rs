//! Formatting utilities for terminal output

/// Remaining-mistake dots, filled for each guess still allowed
#[must_use]
pub fn mistake_dots(mistakes: u32, max_mistakes: u32) -> String {
    let left = max_mistakes.saturating_sub(mistakes) as usize;
    let used = (max_mistakes as usize).saturating_sub(left);
    format!("{}{}", "●".repeat(left), "○".repeat(used))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center `text` in a cell of `width` characters, truncating if needed
#[must_use]
pub fn tile_cell(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:^width$}")
}
