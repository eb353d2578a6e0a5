use clap::{Parser, ValueEnum};

/// Extract normalized VM resource figures from Multipass-style status JSON
#[derive(Parser, Debug)]
#[command(
    name = "vmspec",
    about = "Extract normalized VM resource figures from Multipass-style status JSON",
    version,
    long_about = "vmspec reads a VM manager's status document (the output of \
                  `multipass info --format json` or a compatible command) on stdin, \
                  locates one VM record and prints its CPU count, memory size and \
                  disk size as three space-separated integers, with memory and disk \
                  normalized to MiB.\n\n\
                  Example:\n  \
                  multipass info --format json | vmspec primary"
)]
pub struct CliArgs {
    /// Name of the VM to report. When the name is absent but the document
    /// contains at least one VM, the first one is used instead.
    #[arg(value_name = "VM_NAME")]
    pub vm_name: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "plain",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose logging (debug level)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Plain,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => super::output::OutputFormat::Plain,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}
