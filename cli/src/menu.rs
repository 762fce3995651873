//! Interactive menu session
//!
//! Reads commands line by line, translates them into calls against an
//! [`EventIndex`], and writes rendered results. Every failure is reported
//! and the loop continues; only option 6 or end of input ends the session.

use crate::config::CliConfig;
use crate::input::{ChoiceError, MenuChoice};
use crate::render::{render, Response};
use event_scheduler_core::{EventIndex, Timestamp, TimestampError};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "\n--- Event Scheduling System ---
1. Add an Event
2. Delete an Event
3. View Next Upcoming Event
4. Search for an Event
5. View All Events
6. Exit";

const GOODBYE: &str = "Exiting Event Scheduler. Goodbye!";
const INVALID_TIMESTAMP: &str = "Invalid timestamp. Please enter a valid positive integer.";

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    index: EventIndex,
    input: R,
    output: W,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: CliConfig) -> Self {
        Self {
            index: EventIndex::new(),
            input,
            output,
            config,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        info!(format = ?self.config.format, "session started");

        loop {
            if self.config.show_menu {
                writeln!(self.output, "{}", MENU)?;
            }
            let Some(line) = self.ask("Choose an option: ")? else {
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                Err(ChoiceError::NotANumber(_)) => {
                    self.respond(Response::rejected(
                        "Invalid input. Please enter a valid number.",
                        "invalid menu input",
                    ))?;
                    Flow::Continue
                }
                Err(err @ ChoiceError::OutOfRange(_)) => {
                    self.respond(Response::rejected(
                        "Invalid option. Please choose a number between 1 and 6.",
                        err,
                    ))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "{}", GOODBYE)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_event(),
            MenuChoice::Delete => self.delete_event(),
            MenuChoice::Next => {
                let response = match self.index.minimum() {
                    Ok(next) => Response::Next(next.into()),
                    Err(err) => Response::rejected("No events scheduled.", err),
                };
                self.respond(response)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Search => self.search_event(),
            MenuChoice::List => {
                self.respond(Response::Listing(self.index.traverse_in_order()))?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add_event(&mut self) -> io::Result<Flow> {
        let Some(line) = self.ask("Enter event timestamp (unique positive integer): ")? else {
            return Ok(Flow::Exit);
        };
        let timestamp = match line.parse::<Timestamp>() {
            Ok(timestamp) => timestamp,
            Err(err) => {
                let message = match err {
                    TimestampError::NonPositive(_) => {
                        "Error: Timestamp must be a positive integer greater than zero."
                    }
                    TimestampError::NotANumber(_) => INVALID_TIMESTAMP,
                };
                self.respond(Response::rejected(message, err))?;
                return Ok(Flow::Continue);
            }
        };

        let Some(details) = self.ask("Enter event details: ")? else {
            return Ok(Flow::Exit);
        };

        let response = match self.index.insert(timestamp, details.as_str()) {
            Ok(()) => Response::Added((timestamp, details.as_str()).into()),
            Err(err) => Response::rejected(
                "Event with the same timestamp already exists. Event not added.",
                err,
            ),
        };
        self.respond(response)?;
        Ok(Flow::Continue)
    }

    fn delete_event(&mut self) -> io::Result<Flow> {
        let Some(timestamp) = self.ask_timestamp("Enter the timestamp of the event to delete: ")?
        else {
            return Ok(Flow::Exit);
        };

        if let Some(timestamp) = timestamp {
            let response = match self.index.delete(timestamp) {
                Ok(event) => Response::Deleted(event),
                Err(err) => Response::rejected("Error: No event found with this timestamp.", err),
            };
            self.respond(response)?;
        }
        Ok(Flow::Continue)
    }

    fn search_event(&mut self) -> io::Result<Flow> {
        let Some(timestamp) = self.ask_timestamp("Enter timestamp of the event to search: ")?
        else {
            return Ok(Flow::Exit);
        };

        if let Some(timestamp) = timestamp {
            let response = match self.index.search(timestamp) {
                Ok(details) => Response::Found((timestamp, details).into()),
                Err(err) => Response::rejected("No event found with the given timestamp.", err),
            };
            self.respond(response)?;
        }
        Ok(Flow::Continue)
    }

    /// Prompt for a timestamp used as a lookup key
    ///
    /// Outer `None` means input ended; inner `None` means the value was
    /// invalid and has already been reported.
    fn ask_timestamp(&mut self, prompt: &str) -> io::Result<Option<Option<Timestamp>>> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(None);
        };
        match line.parse::<Timestamp>() {
            Ok(timestamp) => Ok(Some(Some(timestamp))),
            Err(err) => {
                let message = match err {
                    TimestampError::NonPositive(_) => "Error: Timestamp must be a positive integer.",
                    TimestampError::NotANumber(_) => INVALID_TIMESTAMP,
                };
                self.respond(Response::rejected(message, err))?;
                Ok(Some(None))
            }
        }
    }

    /// Write a prompt and read one line, `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn respond(&mut self, response: Response) -> io::Result<()> {
        if let Response::Rejected { error, .. } = &response {
            debug!(%error, "action rejected");
        }
        writeln!(self.output, "{}", render(self.config.format, &response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use serde_json::json;
    use std::io::Cursor;

    fn run_script(script: &str, format: OutputFormat) -> (String, EventIndex) {
        let config = CliConfig {
            format,
            show_menu: false,
        };
        let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new(), config);
        session.run().unwrap();
        let index = session.index().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (output, index)
    }

    fn text(script: &str) -> String {
        run_script(script, OutputFormat::Text).0
    }

    #[test]
    fn test_add_list_and_exit() {
        let output = text("1\n30\nA\n1\n20\nB\n1\n10\nC\n5\n6\n");

        assert_eq!(output.matches("Event added successfully.").count(), 3);
        assert!(output.contains(
            "All scheduled events:\nEvent at 10: C\nEvent at 20: B\nEvent at 30: A\n"
        ));
        assert!(output.ends_with("Exiting Event Scheduler. Goodbye!\n"));
    }

    #[test]
    fn test_duplicate_timestamp_reported() {
        let (output, index) = run_script("1\n5\nfirst\n1\n5\nsecond\n6\n", OutputFormat::Text);

        assert!(output.contains("Event with the same timestamp already exists. Event not added."));
        assert_eq!(index.search(Timestamp::new(5).unwrap()), Ok("first"));
    }

    #[test]
    fn test_invalid_timestamps_rejected_before_index() {
        let output = text("1\n0\n1\nabc\n2\n-4\n4\nxyz\n6\n");

        assert!(output.contains("Error: Timestamp must be a positive integer greater than zero."));
        assert!(output.contains("Error: Timestamp must be a positive integer.\n"));
        assert_eq!(output.matches(INVALID_TIMESTAMP).count(), 2);
        assert!(!output.contains("Enter event details"));
    }

    #[test]
    fn test_next_search_and_delete() {
        let output = text("3\n1\n40\nreview\n1\n15\nplan\n3\n4\n40\n4\n41\n2\n15\n2\n15\n3\n6\n");

        assert!(output.contains("No events scheduled."));
        assert!(output.contains("Next upcoming event:\nEvent at 15: plan"));
        assert!(output.contains("Event found: review"));
        assert!(output.contains("No event found with the given timestamp."));
        assert!(output.contains("Event deleted successfully."));
        assert!(output.contains("Error: No event found with this timestamp."));
        assert!(output.contains("Next upcoming event:\nEvent at 40: review"));
    }

    #[test]
    fn test_bad_menu_input_keeps_looping() {
        let output = text("hello\n9\n6\n");

        assert!(output.contains("Invalid input. Please enter a valid number."));
        assert!(output.contains("Invalid option. Please choose a number between 1 and 6."));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (output, index) = run_script("1\n7\n", OutputFormat::Text);

        assert!(output.ends_with("Goodbye!\n"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_menu_banner_shown_by_default() {
        let mut session = Session::new(Cursor::new(&b"6\n"[..]), Vec::new(), CliConfig::default());
        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();

        assert!(output.contains("--- Event Scheduling System ---"));
        assert!(output.contains("6. Exit"));
    }

    #[test]
    fn test_json_output() {
        let (output, _) = run_script("1\n8\ndeploy\n5\n4\n9\n6\n", OutputFormat::Json);

        // Prompts carry no brackets, so each result starts at the first one
        let values: Vec<serde_json::Value> = output
            .lines()
            .filter_map(|line| line.find(['{', '[']).map(|start| &line[start..]))
            .map(|body| serde_json::from_str(body).unwrap())
            .collect();

        assert_eq!(
            values,
            vec![
                json!({ "status": "added", "event": { "timestamp": 8, "details": "deploy" } }),
                json!([{ "timestamp": 8, "details": "deploy" }]),
                json!({ "error": "No event found with timestamp 9" }),
            ]
        );
    }
}
