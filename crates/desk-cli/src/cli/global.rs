use clap::ValueEnum;

/// How responses are written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON for reading.
    Json,
    /// One JSON document per line for piping.
    Raw,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_pretty(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Flags shared by every `circdesk` subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
