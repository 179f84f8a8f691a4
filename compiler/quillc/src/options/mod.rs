//! Command-line options shared by all commands.

use quill_diagnostic::emitter::ColorMode;

use crate::DriverError;

/// File read when a command is given no paths.
pub const DEFAULT_INPUT: &str = "input.txt";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    /// Print only diagnostics.
    pub quiet: bool,
    /// `parse`: print the parse tree.
    pub tree: bool,
    pub files: Vec<String>,
}

impl Options {
    /// Parse the arguments following the command name. Flags may appear
    /// anywhere; everything else is a file path.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut options = Options::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(value).ok_or_else(|| {
                    DriverError::Usage(format!(
                        "invalid color mode '{value}' (expected auto, always or never)"
                    ))
                })?;
            } else if arg == "--quiet" || arg == "-q" {
                options.quiet = true;
            } else if arg == "--tree" {
                options.tree = true;
            } else if arg.starts_with('-') && arg.len() > 1 {
                return Err(DriverError::Usage(format!("unknown option '{arg}'")));
            } else {
                options.files.push(arg.clone());
            }
        }
        if options.files.is_empty() {
            options.files.push(DEFAULT_INPUT.to_string());
        }
        Ok(options)
    }

    /// The one input file of a single-file command.
    pub fn single_file(&self, command: &str) -> Result<&str, DriverError> {
        match self.files.as_slice() {
            [path] => Ok(path),
            _ => Err(DriverError::Usage(format!(
                "`quill {command}` takes one file (use `quill check` for several)"
            ))),
        }
    }

    /// Resolve the color mode against the environment.
    pub fn use_colors(&self) -> bool {
        let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        self.color.should_use_colors(is_tty, no_color)
    }
}
