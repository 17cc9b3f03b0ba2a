use quiz_core::Elapsed;

#[must_use]
pub fn format_elapsed(value: Elapsed) -> String {
    value.to_string()
}

/// Timer label shown in the test header.
#[must_use]
pub fn format_timer(value: Elapsed) -> String {
    format!("Time: {value}")
}
