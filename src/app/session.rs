use crate::app::render;
use crate::core::catalog::Catalog;
use crate::core::parser::FieldParser;
use crate::domain::ports::{LineSource, OutputFormat};
use crate::utils::error::{AdvisorError, Result};
use std::io::{BufRead, Write};

const MENU_HINT: &str = "Please enter a menu option (1, 2, 3, or 9).";
const INVALID_OPTION: &str = "Invalid option. Please enter 1, 2, 3, or 9.";
const LOAD_FIRST: &str = "Please load data first using option 1.";
const INPUT_CLOSED: &str = "Input closed. Exiting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> std::result::Result<Self, &'static str> {
        if input.is_empty() {
            return Err(MENU_HINT);
        }
        if !input.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(INVALID_OPTION);
        }
        match input.parse::<u32>() {
            Ok(1) => Ok(MenuChoice::Load),
            Ok(2) => Ok(MenuChoice::List),
            Ok(3) => Ok(MenuChoice::Show),
            Ok(9) => Ok(MenuChoice::Exit),
            _ => Err(INVALID_OPTION),
        }
    }
}

/// Interactive menu loop. Owns the catalog and the "data loaded" flag; the
/// catalog itself never writes to the console.
pub struct Session<R, W, S> {
    input: R,
    output: W,
    source: S,
    catalog: Catalog,
    data_loaded: bool,
}

impl<R: BufRead, W: Write, S: LineSource> Session<R, W, S> {
    pub fn new(input: R, output: W, source: S, parser: FieldParser) -> Self {
        Self {
            input,
            output,
            source,
            catalog: Catalog::with_parser(parser),
            data_loaded: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.data_loaded
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Loads `file` and reports the outcome to the user. An unreadable file is
    /// reported, not returned: only console I/O failures are errors here.
    pub fn load_file(&mut self, file: &str) -> Result<()> {
        match self.catalog.load(&self.source, file) {
            Ok(report) => {
                self.data_loaded = true;
                writeln!(self.output, "Data loaded successfully from {}", file)?;
                render::write_warnings(&mut self.output, &report)?;
            }
            Err(AdvisorError::SourceUnavailable { path, .. }) => {
                self.data_loaded = false;
                writeln!(self.output, "Error: Could not open file: {}", path)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice_line) = self.read_line()? else {
                return self.input_closed();
            };

            let choice = match MenuChoice::parse(choice_line.trim()) {
                Ok(choice) => choice,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };
            tracing::debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Load => {
                    writeln!(self.output, "Enter the file name to load: ")?;
                    let Some(file) = self.read_line()? else {
                        return self.input_closed();
                    };
                    let file = file.trim();
                    if file.is_empty() {
                        writeln!(self.output, "Error: file name cannot be empty.")?;
                        continue;
                    }
                    self.load_file(file)?;
                }
                MenuChoice::List => {
                    if !self.data_loaded {
                        writeln!(self.output, "{}", LOAD_FIRST)?;
                        continue;
                    }
                    writeln!(self.output)?;
                    render::write_list(&mut self.output, &self.catalog.list(), OutputFormat::Text)?;
                    writeln!(self.output)?;
                }
                MenuChoice::Show => {
                    if !self.data_loaded {
                        writeln!(self.output, "{}", LOAD_FIRST)?;
                        continue;
                    }
                    writeln!(self.output, "Enter a course ID (e.g., CSCI300): ")?;
                    let Some(query) = self.read_line()? else {
                        return self.input_closed();
                    };
                    let lookup = self.catalog.lookup(&query);
                    writeln!(self.output)?;
                    render::write_lookup(&mut self.output, &lookup, OutputFormat::Text)?;
                }
                MenuChoice::Exit => {
                    writeln!(self.output, "Thank you for using the Course Advising Assistant. Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Course Advising Assistant")?;
        writeln!(self.output, "----------------------------------------")?;
        writeln!(self.output, "  1. Load Data Structure")?;
        writeln!(self.output, "  2. Print Course List")?;
        writeln!(self.output, "  3. Print Course")?;
        writeln!(self.output, "  9. Exit")?;
        writeln!(self.output)?;
        writeln!(self.output, "What would you like to do? ")?;
        self.output.flush()?;
        Ok(())
    }

    fn input_closed(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", INPUT_CLOSED)?;
        Ok(())
    }

    // EOF 時回傳 None，並去除行尾（包含 Windows 的 '\r'）
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
