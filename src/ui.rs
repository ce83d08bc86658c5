//! Interactive terminal calculator
//!
//! Commands are read line by line from stdin. Remote calls run concurrently
//! with input handling and their results are printed when they arrive.

use std::{io::Write, sync::Arc};

use error_stack::Result;
use futures::{future::BoxFuture, stream::FuturesUnordered, FutureExt, StreamExt};
use time::macros::format_description;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    select, signal,
};
use tracing::{debug, error, info};

use crate::{
    api::{
        data::{HistoryEntry, Operation},
        RemoteCalculator, RemoteError,
    },
    client::{
        calculation::{CalculationController, CalculationResponse, SubmitOutcome},
        history::{format_entry, HistoryLoader, HistoryState, NO_HISTORY_MESSAGE},
        validate::Field,
    },
    utils::IntoReportExt,
};

pub const LOADING_TEXT: &str = "Calculating...";
pub const HISTORY_LOADING_TEXT: &str = "Loading history...";

pub const HELP_TEXT: &str = "\
Commands:
  a <number>      set first number
  b <number>      set second number
  op <operation>  select operation: add, subtract, multiply, divide or + - * /
  + - * /         select operation
  =               calculate
  show            show calculator
  history         show calculation history
  help            show this text
  quit            exit";

#[derive(thiserror::Error, Debug)]
pub enum UiError {
    #[error("Reading input failed")]
    Input,
    #[error("Writing output failed")]
    Output,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    SetFirst(String),
    SetSecond(String),
    SelectOperation(Operation),
    Calculate,
    ShowCalculator,
    ShowHistory,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl UiCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "a" | "first" => Self::SetFirst(rest.to_string()),
            "b" | "second" => Self::SetSecond(rest.to_string()),
            "op" | "operation" => match rest.parse() {
                Ok(operation) => Self::SelectOperation(operation),
                Err(_) => Self::Unknown(line.to_string()),
            },
            "=" | "calc" | "calculate" => Self::Calculate,
            "show" => Self::ShowCalculator,
            "history" => Self::ShowHistory,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => match line.parse() {
                Ok(operation) => Self::SelectOperation(operation),
                Err(_) => Self::Unknown(line.to_string()),
            },
        }
    }
}

/// Result of a remote call started by the UI.
pub enum UiEvent {
    Calculation(CalculationResponse),
    History(Result<Vec<HistoryEntry>, RemoteError>),
}

pub enum Flow {
    Continue,
    Spawn(BoxFuture<'static, UiEvent>),
    Quit,
}

pub struct TerminalUi<W: Write> {
    calculator: CalculationController,
    history: HistoryLoader,
    show_history_on_start: bool,
    out: W,
}

impl<W: Write> TerminalUi<W> {
    pub fn new(client: Arc<dyn RemoteCalculator>, show_history_on_start: bool, out: W) -> Self {
        Self {
            calculator: CalculationController::new(client.clone()),
            history: HistoryLoader::new(client),
            show_history_on_start,
            out,
        }
    }

    /// Read commands until quit, end of input or Ctrl-C. After end of input
    /// the requests still in flight are awaited and their results printed.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), UiError> {
        let mut lines = input.lines();
        let mut input_open = true;
        let mut in_flight = FuturesUnordered::<BoxFuture<'static, UiEvent>>::new();
        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        if let Some(fetch) = self.history.start() {
            in_flight.push(async move { UiEvent::History(fetch.run().await) }.boxed());
        }

        self.write_text(HELP_TEXT)?;
        self.write_text(&render_calculator(&self.calculator))?;
        self.prompt()?;

        loop {
            select! {
                result = &mut ctrl_c => {
                    if let Err(e) = result {
                        error!("Failed to listen CTRL+C. Error: {}", e);
                    }
                    break;
                }
                Some(event) = in_flight.next(), if !in_flight.is_empty() => {
                    self.handle_event(event)?;
                }
                line = lines.next_line(), if input_open => {
                    match line.into_error(UiError::Input)? {
                        Some(line) => match self.handle_command(UiCommand::parse(&line))? {
                            Flow::Continue => (),
                            Flow::Spawn(future) => in_flight.push(future),
                            Flow::Quit => break,
                        },
                        None => {
                            debug!("End of input, {} requests in flight", in_flight.len());
                            input_open = false;
                        }
                    }
                }
            }

            if input_open {
                self.prompt()?;
            } else if in_flight.is_empty() {
                break;
            }
        }

        info!("Calculator closed, {} requests unfinished", in_flight.len());
        Ok(())
    }

    pub fn handle_command(&mut self, command: UiCommand) -> Result<Flow, UiError> {
        match command {
            UiCommand::SetFirst(text) => self.calculator.set_first(text),
            UiCommand::SetSecond(text) => self.calculator.set_second(text),
            UiCommand::SelectOperation(operation) => {
                self.calculator.select_operation(operation);
                self.write_text(&render_operations(self.calculator.operation()))?;
            }
            UiCommand::Calculate => match self.calculator.begin_submit() {
                SubmitOutcome::Invalid(_) => {
                    self.write_text(&render_calculator(&self.calculator))?;
                }
                SubmitOutcome::Started(pending) => {
                    debug!("Calculation request {:?} started", pending.token());
                    self.write_text(LOADING_TEXT)?;
                    let future = async move { UiEvent::Calculation(pending.run().await) };
                    return Ok(Flow::Spawn(future.boxed()));
                }
            },
            UiCommand::ShowCalculator => {
                self.write_text(&render_calculator(&self.calculator))?;
            }
            UiCommand::ShowHistory => {
                self.write_text(&render_history(self.history.state()))?;
            }
            UiCommand::Help => self.write_text(HELP_TEXT)?,
            UiCommand::Quit => return Ok(Flow::Quit),
            UiCommand::Empty => (),
            UiCommand::Unknown(text) => {
                self.write_text(&format!(
                    "Unknown command: {text}. Type help to list commands."
                ))?;
            }
        }

        Ok(Flow::Continue)
    }

    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), UiError> {
        match event {
            UiEvent::Calculation(response) => {
                if self.calculator.complete(response) {
                    if let Some(text) = self.calculator.display() {
                        self.write_text(&text)?;
                    }
                }
            }
            UiEvent::History(result) => {
                self.history.finish(result);
                if self.show_history_on_start {
                    self.write_text(&render_history(self.history.state()))?;
                }
            }
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), UiError> {
        writeln!(self.out, "{text}").into_error(UiError::Output)?;
        self.out.flush().into_error(UiError::Output)
    }

    fn prompt(&mut self) -> Result<(), UiError> {
        write!(self.out, "> ").into_error(UiError::Output)?;
        self.out.flush().into_error(UiError::Output)
    }
}

/// Operation list with the active operation in brackets.
pub fn render_operations(active: Operation) -> String {
    let operations: Vec<String> = Operation::ALL
        .iter()
        .map(|operation| {
            let label = format!("{} {}", operation.symbol(), operation.as_str());
            if *operation == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    format!("Operation: {}", operations.join(" "))
}

pub fn render_calculator(calculator: &CalculationController) -> String {
    let field_line = |label: &str, text: &str, field: Field| {
        let mut line = format!("{label} {text}");
        if let Some(message) = calculator.field_error(field) {
            line.push_str(&format!("  <- {message}"));
        }
        line
    };

    let mut lines = vec![
        field_line("First number: ", &calculator.input().first, Field::First),
        field_line("Second number:", &calculator.input().second, Field::Second),
        render_operations(calculator.operation()),
    ];

    if calculator.request_state().is_loading() {
        lines.push(LOADING_TEXT.to_string());
    } else if let Some(text) = calculator.display() {
        lines.push(text);
    }

    lines.join("\n")
}

pub fn render_history(state: &HistoryState) -> String {
    let mut lines = vec!["Calculation history".to_string()];
    match state {
        HistoryState::Loading => lines.push(HISTORY_LOADING_TEXT.to_string()),
        HistoryState::Empty => lines.push(NO_HISTORY_MESSAGE.to_string()),
        HistoryState::Failure { message } => lines.push(format!("Error: {message}")),
        HistoryState::Success { entries } => {
            for (i, entry) in entries.iter().enumerate() {
                lines.push(render_history_row(i + 1, entry));
            }
        }
    }
    lines.join("\n")
}

fn render_history_row(number: usize, entry: &HistoryEntry) -> String {
    let timestamp_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let row = format!("{number}. {}", format_entry(entry));
    match entry
        .created_at
        .and_then(|time| time.format(timestamp_format).ok())
    {
        Some(time) => format!("{row}  ({time})"),
        None => row,
    }
}
