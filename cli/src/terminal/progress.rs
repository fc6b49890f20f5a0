use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Span carrying the scan's progress bar. The bar is shown while the span is
/// entered and advanced with `pb_inc` once per probe result.
pub fn scan_span(total: usize) -> Span {
    let span = info_span!("sweep", indicatif.pb_show = true);
    span.pb_set_style(&scan_style());
    span.pb_set_length(total as u64);
    span.pb_set_message("probing hosts");
    span
}

fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:32.green/bright_black}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICK_STRINGS)
        .progress_chars("█▉ ")
}
