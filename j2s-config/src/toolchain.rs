//! External program selection for each pipeline stage.

use std::fmt;

use serde::Deserialize;

/// A program plus the leading arguments used to invoke one tool.
///
/// Deserializes from either a bare program name (`"javac"`) or an argv
/// prefix (`["java", "-jar", "/opt/baksmali.jar"]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawToolCommand")]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    /// A tool invoked by program name alone.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// A tool invoked with leading arguments before the stage's own flags.
    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToolCommand {
    Program(String),
    Argv(Vec<String>),
}

impl TryFrom<RawToolCommand> for ToolCommand {
    type Error = String;

    fn try_from(raw: RawToolCommand) -> Result<Self, Self::Error> {
        let mut argv = match raw {
            RawToolCommand::Program(program) => vec![program],
            RawToolCommand::Argv(argv) => argv,
        };
        if argv.is_empty() || argv[0].trim().is_empty() {
            return Err("tool command must name a program".to_string());
        }
        let program = argv.remove(0);
        Ok(Self {
            program,
            args: argv,
        })
    }
}

/// The `[toolchain]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Java compiler.
    pub javac: ToolCommand,
    /// Bytecode packager producing the dex bundle.
    pub dx: ToolCommand,
    /// Dex disassembler.
    pub baksmali: ToolCommand,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            javac: ToolCommand::new("javac"),
            dx: ToolCommand::new("dx"),
            baksmali: ToolCommand::new("baksmali"),
        }
    }
}
