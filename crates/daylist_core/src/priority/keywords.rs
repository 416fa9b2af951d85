//! Fixed phrase and pattern tables for the scorer.

use crate::model::priority::Priority;

/// Lower-case phrase -> minimum priority when the phrase occurs anywhere in
/// the combined text. Substring match, so `test` also fires on `latest`.
pub const PRIORITY_KEYWORDS: &[(&str, Priority)] = &[
    ("critical", Priority::Critical),
    ("urgent", Priority::Urgent),
    ("asap", Priority::Urgent),
    ("as soon as possible", Priority::Urgent),
    ("deadline", Priority::Urgent),
    ("important", Priority::High),
    ("priority", Priority::High),
    ("high priority", Priority::Urgent),
    ("emergency", Priority::Critical),
    ("time sensitive", Priority::Urgent),
    ("due today", Priority::Urgent),
    ("due tomorrow", Priority::High),
    ("meeting", Priority::High),
    ("presentation", Priority::High),
    ("interview", Priority::Urgent),
    ("exam", Priority::Urgent),
    ("test", Priority::High),
    ("project", Priority::Medium),
    ("review", Priority::Medium),
    ("call", Priority::Medium),
    ("email", Priority::Low),
    ("research", Priority::Low),
    ("read", Priority::Low),
    ("later", Priority::Low),
    ("someday", Priority::Low),
    ("maybe", Priority::Low),
];

/// Case-insensitive time-urgency patterns, as `(name, regex)`.
pub const TIME_PATTERNS: &[(&str, &str)] = &[
    ("today", r"(?i)today"),
    ("tomorrow", r"(?i)tomorrow"),
    ("this week", r"(?i)this week"),
    ("end of day", r"(?i)end of day"),
    ("eod", r"(?i)eod"),
    ("by <number>", r"(?i)by \d+"),
    ("due", r"(?i)due"),
    ("deadline", r"(?i)deadline"),
];

