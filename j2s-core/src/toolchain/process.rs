use std::{
    ffi::OsString,
    io::ErrorKind,
    path::Path,
    process::Command,
};

use java2smali_config::{ToolCommand, ToolchainConfig};
use tracing::debug;

use super::{CompileRequest, LANGUAGE_LEVEL, PackageRequest, Sources, Tool, Toolchain};
use crate::{DiagnosticLog, Error, Result};

/// Toolchain backed by external processes.
///
/// Compiler output is captured. The packager and disassembler inherit the
/// terminal, and their exit status is only logged.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    javac: ToolCommand,
    dx: ToolCommand,
    baksmali: ToolCommand,
}

impl ProcessToolchain {
    pub fn new(config: &ToolchainConfig) -> Self {
        Self {
            javac: config.javac.clone(),
            dx: config.dx.clone(),
            baksmali: config.baksmali.clone(),
        }
    }

    fn command(tool: &ToolCommand, args: Vec<OsString>) -> Command {
        let mut cmd = Command::new(tool.program());
        cmd.args(tool.args()).args(args);
        cmd
    }
}

impl Default for ProcessToolchain {
    fn default() -> Self {
        Self::new(&ToolchainConfig::default())
    }
}

impl Toolchain for ProcessToolchain {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<DiagnosticLog> {
        let mut cmd = Self::command(&self.javac, compile_args(request));
        debug!(command = ?cmd, "Running compiler");

        let output = cmd
            .output()
            .map_err(|e| spawn_error(Tool::Compiler, &self.javac, e))?;
        debug!(status = %output.status, "Compiler exited");

        Ok(DiagnosticLog::from_output(&output.stdout, &output.stderr))
    }

    fn package(&self, request: &PackageRequest<'_>) -> Result<()> {
        let mut cmd = Self::command(&self.dx, package_args(request));
        debug!(command = ?cmd, "Running packager");

        let status = cmd
            .status()
            .map_err(|e| spawn_error(Tool::Packager, &self.dx, e))?;
        debug!(%status, "Packager exited");
        Ok(())
    }

    fn disassemble(&self, bundle: &Path, output_dir: &Path) -> Result<()> {
        let mut cmd = Self::command(&self.baksmali, disassemble_args(bundle, output_dir));
        debug!(command = ?cmd, "Running disassembler");

        let status = cmd
            .status()
            .map_err(|e| spawn_error(Tool::Disassembler, &self.baksmali, e))?;
        debug!(%status, "Disassembler exited");
        Ok(())
    }
}

fn spawn_error(tool: Tool, command: &ToolCommand, source: std::io::Error) -> Box<Error> {
    let program = command.program().to_string();
    if source.kind() == ErrorKind::NotFound {
        Box::new(Error::ToolchainMissing { tool, program })
    } else {
        Box::new(Error::ToolInvocation {
            tool,
            program,
            source,
        })
    }
}

/// Compiler arguments: fixed language level, then the sources.
pub fn compile_args(request: &CompileRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-source".into(),
        LANGUAGE_LEVEL.into(),
        "-target".into(),
        LANGUAGE_LEVEL.into(),
    ];
    match request.sources {
        Sources::File(file) => args.push(file.into()),
        Sources::Manifest(manifest) => {
            let mut arg = OsString::from("@");
            arg.push(manifest);
            args.push(arg);
        }
    }
    if let Some(dir) = request.output_dir {
        args.push("-d".into());
        args.push(dir.into());
    }
    args
}

/// Packager arguments: relaxed strictness and no warnings, optionally
/// without optimization.
pub fn package_args(request: &PackageRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--dex".into(), "--no-strict".into()];
    if !request.optimize {
        args.push("--no-optimize".into());
    }
    args.push("--no-warning".into());
    args.push("--output".into());
    args.push(request.output.into());
    args.push(request.input.into());
    args
}

/// Disassembler arguments.
pub fn disassemble_args(bundle: &Path, output_dir: &Path) -> Vec<OsString> {
    vec!["d".into(), bundle.into(), "-o".into(), output_dir.into()]
}
