//! Priority scoring over task name + description.

use super::keywords::{PRIORITY_KEYWORDS, TIME_PATTERNS};
use crate::model::priority::Priority;
use once_cell::sync::Lazy;
use regex::Regex;

/// Score of text that carries no urgency signal.
pub const BASELINE_PRIORITY: Priority = Priority::Medium;

/// Floor applied by time, punctuation and emphasis signals.
const SIGNAL_PRIORITY: Priority = Priority::High;

static TIME_PATTERN_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TIME_PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).expect("valid time pattern regex")))
        .collect()
});
static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{3,}\b").expect("valid emphasis regex"));

/// One rule that matched during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrioritySignal {
    /// Keyword phrase found in the lower-cased text.
    Keyword {
        phrase: &'static str,
        priority: Priority,
    },
    /// Time-urgency pattern, by name.
    TimePattern(&'static str),
    /// At least one `!`.
    Exclamation,
    /// An all-caps word of 3+ letters in the original-case text.
    Emphasis,
}

impl PrioritySignal {
    /// Minimum priority this signal enforces.
    pub fn floor(self) -> Priority {
        match self {
            Self::Keyword { priority, .. } => priority,
            Self::TimePattern(_) | Self::Exclamation | Self::Emphasis => SIGNAL_PRIORITY,
        }
    }
}

/// Final score plus every signal that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityReport {
    pub priority: Priority,
    /// Keywords in table order, then time patterns, exclamation, emphasis.
    pub signals: Vec<PrioritySignal>,
}

/// Scores task text into `1..=5`.
///
/// Pure and deterministic; see [`explain`] for the rules.
pub fn score(name: &str, description: &str) -> Priority {
    explain(name, description).priority
}

/// Scores task text and reports which rules fired.
///
/// # Contract
/// - Starts at `BASELINE_PRIORITY`.
/// - Keywords match as substrings of the lower-cased combined text.
/// - Time patterns, `!` and all-caps words each raise the score to at least `High`.
/// - All-caps detection runs on the original-case text.
/// - Each rule only raises the running score, so rule order is irrelevant.
pub fn explain(name: &str, description: &str) -> PriorityReport {
    let text = format!("{name} {description}");
    let lowered = text.to_lowercase();
    let mut signals = Vec::new();

    signals.extend(
        PRIORITY_KEYWORDS
            .iter()
            .filter(|(phrase, _)| lowered.contains(phrase))
            .map(|(phrase, priority)| PrioritySignal::Keyword {
                phrase: *phrase,
                priority: *priority,
            }),
    );
    signals.extend(
        TIME_PATTERN_RES
            .iter()
            .filter(|(_, re)| re.is_match(&lowered))
            .map(|(name, _)| PrioritySignal::TimePattern(*name)),
    );
    if text.contains('!') {
        signals.push(PrioritySignal::Exclamation);
    }
    if EMPHASIS_RE.is_match(&text) {
        signals.push(PrioritySignal::Emphasis);
    }

    let raw = signals
        .iter()
        .map(|signal| i32::from(signal.floor().value()))
        .fold(i32::from(BASELINE_PRIORITY.value()), i32::max);

    PriorityReport {
        priority: Priority::clamped(raw),
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::{explain, score, PrioritySignal, BASELINE_PRIORITY};
    use crate::model::priority::Priority;
    use crate::priority::{PRIORITY_KEYWORDS, TIME_PATTERNS};

    #[test]
    fn plain_text_scores_baseline() {
        assert_eq!(score("Buy milk", ""), Priority::Medium);
        assert_eq!(score("", ""), BASELINE_PRIORITY);
    }

    #[test]
    fn keywords_raise_priority() {
        assert!(score("URGENT: finish report", "") >= Priority::Urgent);
        assert_eq!(score("fix the emergency", ""), Priority::Critical);
        assert_eq!(score("Prep", "it is high priority"), Priority::Urgent);
    }

    #[test]
    fn low_keywords_never_lower_the_baseline() {
        assert_eq!(score("read an email maybe someday", ""), Priority::Medium);
    }

    #[test]
    fn keywords_match_inside_larger_words() {
        let report = explain("check latest numbers", "");
        assert!(report.signals.contains(&PrioritySignal::Keyword {
            phrase: "test",
            priority: Priority::High,
        }));
        assert_eq!(report.priority, Priority::High);
    }

    #[test]
    fn time_patterns_raise_to_high() {
        assert!(score("Meeting today at 3pm", "") >= Priority::High);
        assert_eq!(score("Pay rent", "by 5pm"), Priority::High);
        assert_eq!(score("Water plants", "before EOD"), Priority::High);
        assert_eq!(score("Book flights", "by next monday"), Priority::Medium);
    }

    #[test]
    fn exclamation_raises_to_high() {
        let loud = score("Call mom!!!", "");
        let quiet = score("Call mom", "");
        assert!(loud >= Priority::High);
        assert!(quiet <= loud);
        assert_eq!(quiet, Priority::Medium);
    }

    #[test]
    fn all_caps_word_counts_only_in_original_case() {
        let report = explain("Fix the NAS", "");
        assert!(report.signals.contains(&PrioritySignal::Emphasis));
        assert_eq!(report.priority, Priority::High);

        assert!(!explain("Fix the nas", "").signals.contains(&PrioritySignal::Emphasis));
        assert!(!explain("Fix the NAs", "").signals.contains(&PrioritySignal::Emphasis));
    }

    #[test]
    fn asap_in_caps_reports_keyword_and_emphasis() {
        let report = explain("Submit report ASAP", "");
        assert_eq!(report.priority, Priority::Urgent);
        assert_eq!(
            report.signals,
            vec![
                PrioritySignal::Keyword {
                    phrase: "asap",
                    priority: Priority::Urgent,
                },
                PrioritySignal::Emphasis,
            ]
        );
    }

    #[test]
    fn description_contributes_to_score() {
        assert_eq!(score("Groceries", "critical: baby formula"), Priority::Critical);
    }

    #[test]
    fn score_is_always_in_range() {
        let samples = [
            "",
            "!!!",
            "CRITICAL EMERGENCY URGENT ASAP due today deadline!!!",
            "someday maybe later",
            "ünïcödé ТЕКСТ 日本語",
        ];
        for sample in samples {
            let value = score(sample, sample).value();
            assert!((1..=5).contains(&value), "out of range for {sample:?}");
        }
    }

    #[test]
    fn appending_any_signal_never_lowers_the_score() {
        let bases = ["Buy milk", "Read a book", "Call mom", "Fix NAS", "email bob later"];
        let mut additions: Vec<&str> = PRIORITY_KEYWORDS.iter().map(|(phrase, _)| *phrase).collect();
        additions.extend(TIME_PATTERNS.iter().map(|(name, _)| *name));
        additions.extend(["by 9", "!", "WOW"]);

        for base in bases {
            let before = score(base, "");
            for addition in &additions {
                let after = score(&format!("{base} {addition}"), "");
                assert!(after >= before, "`{addition}` lowered `{base}`");
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = explain("Prepare presentation", "due tomorrow!");
        let second = explain("Prepare presentation", "due tomorrow!");
        assert_eq!(first, second);
        assert_eq!(first.priority, Priority::High);
    }
}
