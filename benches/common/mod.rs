//! Shared inputs for the enumeration benchmarks.

/// A log-like text of `lines` lines.
pub fn log_text(lines: usize) -> String {
    let templates = [
        "2024-01-01T12:00:00Z INFO user=alice action=login ip=192.168.1.100",
        "2024-01-01T12:00:01Z WARN user=bob action=retry attempts=3",
        "2024-01-01T12:00:02Z ERROR user=carol action=upload size=1048576 code=E42",
        "2024-01-01T12:00:03Z INFO user=dave action=logout",
    ];
    let mut text = String::with_capacity(lines * 72);
    for i in 0..lines {
        text.push_str(templates[i % templates.len()]);
        text.push('\n');
    }
    text
}

/// Patterns exercising each engine path.
pub fn patterns() -> Vec<(&'static str, &'static str)> {
    vec![
        ("digits", r"\d+"),
        ("key_value", r"(?<key>\w+)=(?<value>\S+)"),
        ("line_start", r"^\S+"),
        ("backreference", r"(\w)\1"),
        ("lookbehind", r"(?<=user=)\w+"),
    ]
}
