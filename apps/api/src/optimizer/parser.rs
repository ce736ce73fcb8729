//! Bullet parser — splits a rewrite reply into bullet points and feedback lines.
//!
//! The reply is scanned line by line in one of two states. Lines start out as
//! bullets; the first line mentioning "feedback" inside `**` emphasis switches
//! to feedback for the rest of the reply. Lines that fit neither are dropped.

const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];
const EMPHASIS_MARKER: &str = "**";
const OPTIONAL_BULLET_PREFIX: &str = "optional bullet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Bullets,
    Feedback,
}

/// Bullets and feedback extracted from one model reply, in reply order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBullets {
    pub bullet_points: Vec<String>,
    pub feedback: Vec<String>,
}

pub fn parse_bullet_reply(reply: &str) -> ParsedBullets {
    let mut parsed = ParsedBullets::default();
    let mut state = ScanState::Bullets;

    for line in reply.trim().lines() {
        let line = line.trim();

        if state == ScanState::Bullets && is_feedback_header(line) {
            state = ScanState::Feedback;
            continue;
        }

        let content = strip_bullet_marker(line);
        if content.is_empty() {
            continue;
        }

        match state {
            ScanState::Bullets => {
                if !content.to_lowercase().starts_with(OPTIONAL_BULLET_PREFIX) {
                    parsed.bullet_points.push(content.to_string());
                }
            }
            ScanState::Feedback => parsed.feedback.push(content.to_string()),
        }
    }

    parsed
}

fn is_feedback_header(line: &str) -> bool {
    line.to_lowercase().contains("feedback") && line.contains(EMPHASIS_MARKER)
}

/// Strips at most one leading marker.
fn strip_bullet_marker(line: &str) -> &str {
    line.strip_prefix(&BULLET_MARKERS[..]).unwrap_or(line).trim()
}
