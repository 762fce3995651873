//! Result rendering
//!
//! Every menu action produces a [`Response`]; rendering turns it into the
//! lines written to stdout in the configured [`OutputFormat`].

use crate::config::OutputFormat;
use event_scheduler_core::Event;
use serde_json::json;

/// Outcome of a single menu action
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Added(Event),
    Deleted(Event),
    Next(Event),
    Found(Event),
    Listing(Vec<Event>),
    /// A recoverable failure: `message` is shown in text mode, `error` in
    /// JSON mode
    Rejected {
        message: &'static str,
        error: String,
    },
}

impl Response {
    pub fn rejected(message: &'static str, error: impl ToString) -> Self {
        Response::Rejected {
            message,
            error: error.to_string(),
        }
    }
}

pub fn render(format: OutputFormat, response: &Response) -> String {
    match format {
        OutputFormat::Text => render_text(response),
        OutputFormat::Json => render_json(response),
    }
}

fn render_text(response: &Response) -> String {
    match response {
        Response::Added(_) => "Event added successfully.".to_string(),
        Response::Deleted(_) => "Event deleted successfully.".to_string(),
        Response::Next(event) => format!("Next upcoming event:\n{}", event),
        Response::Found(event) => format!("Event found: {}", event.details),
        Response::Listing(events) => {
            let mut lines = vec!["All scheduled events:".to_string()];
            lines.extend(events.iter().map(ToString::to_string));
            lines.join("\n")
        }
        Response::Rejected { message, .. } => message.to_string(),
    }
}

fn render_json(response: &Response) -> String {
    let value = match response {
        Response::Added(event) => json!({ "status": "added", "event": event }),
        Response::Deleted(event) => json!({ "status": "deleted", "event": event }),
        Response::Next(event) => json!({ "next": event }),
        Response::Found(event) => json!({ "event": event }),
        Response::Listing(events) => json!(events),
        Response::Rejected { error, .. } => json!({ "error": error }),
    };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_scheduler_core::Timestamp;

    fn event(raw: u64, details: &str) -> Event {
        Event::new(Timestamp::from_u64(raw).unwrap(), details)
    }

    #[test]
    fn test_text_listing() {
        let response = Response::Listing(vec![event(1, "a"), event(2, "b")]);
        assert_eq!(
            render(OutputFormat::Text, &response),
            "All scheduled events:\nEvent at 1: a\nEvent at 2: b"
        );
    }

    #[test]
    fn test_text_next_and_found() {
        assert_eq!(
            render(OutputFormat::Text, &Response::Next(event(5, "sync"))),
            "Next upcoming event:\nEvent at 5: sync"
        );
        assert_eq!(
            render(OutputFormat::Text, &Response::Found(event(5, "sync"))),
            "Event found: sync"
        );
    }

    #[test]
    fn test_json_shapes() {
        let parse = |response: &Response| -> serde_json::Value {
            serde_json::from_str(&render(OutputFormat::Json, response)).unwrap()
        };

        assert_eq!(
            parse(&Response::Added(event(3, "x"))),
            json!({ "status": "added", "event": { "timestamp": 3, "details": "x" } })
        );
        assert_eq!(parse(&Response::Listing(vec![])), json!([]));
        assert_eq!(
            parse(&Response::rejected("No events scheduled.", "No events scheduled")),
            json!({ "error": "No events scheduled" })
        );
    }
}
