use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the command did what was asked, or the user cancelled
/// - `Failure` (1): nothing was done, e.g. a key was not found or the file type is unsupported
/// - `Error` (2): the command failed, e.g. an unreadable config or an unparseable locale file
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
