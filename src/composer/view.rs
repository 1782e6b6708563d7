use std::fmt::Write;

use crate::domain::{Draft, SpamStatus};

pub const PAGE_TITLE: &str = "Spam Detection App";
pub const PAGE_BLURB: &str =
    "Write an email in the email composer below and :send it. See if the email is classified as spam or ham!";

const RED_BG: &str = "\x1b[30;41m";
const GREEN_BG: &str = "\x1b[30;42m";
const RESET: &str = "\x1b[0m";

/// Header printed once when the composer is mounted.
pub fn render_page_header() -> String {
    format!("{PAGE_TITLE}\n{PAGE_BLURB}\n")
}

pub fn render_status(status: SpamStatus, color: bool) -> String {
    if !color {
        return format!("[{}] {status}", status.style_tag());
    }
    let paint = match status {
        SpamStatus::Spam => RED_BG,
        SpamStatus::Ham => GREEN_BG,
    };
    format!("{paint} {status} {RESET}")
}

pub fn render_form(draft: &Draft, status: SpamStatus, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "New Message  {}", render_status(status, color));
    let _ = writeln!(out, "  {}", field_or_placeholder(&draft.recipient, "To:"));
    let _ = writeln!(out, "  {}", field_or_placeholder(&draft.subject, "Subject:"));
    if draft.body.is_empty() {
        let _ = writeln!(out, "  Message");
    } else {
        for line in draft.body.lines() {
            let _ = writeln!(out, "  | {line}");
        }
    }
    out.push_str("  [Send]\n");
    out
}

fn field_or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        format!("{placeholder} {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_shows_placeholders_and_ham() {
        let rendered = render_form(&Draft::default(), SpamStatus::Ham, false);
        assert!(rendered.starts_with("New Message  [tab ham] status: HAM\n"));
        assert!(rendered.contains("  To:\n"));
        assert!(rendered.contains("  Subject:\n"));
        assert!(rendered.contains("  Message\n"));
        assert!(rendered.ends_with("[Send]\n"));
    }

    #[test]
    fn filled_form_shows_values() {
        let draft = Draft {
            recipient: "ann@example.com".into(),
            subject: "Offer".into(),
            body: "Buy now!!!\nLimited time".into(),
        };
        let rendered = render_form(&draft, SpamStatus::Spam, false);
        assert!(rendered.contains("[tab spam] status: SPAM"));
        assert!(rendered.contains("To: ann@example.com"));
        assert!(rendered.contains("Subject: Offer"));
        assert!(rendered.contains("| Buy now!!!\n  | Limited time\n"));
    }

    #[test]
    fn colored_badge_wraps_label() {
        let badge = render_status(SpamStatus::Spam, true);
        assert!(badge.contains("status: SPAM"));
        assert!(badge.starts_with(RED_BG));
        assert!(badge.ends_with(RESET));
    }
}
