use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the logkeys log file
    pub input: PathBuf,

    /// Path to create the JSON stats file
    pub output: PathBuf,

    /// Write JSON without whitespace
    pub compact: bool,

    /// Print the ranked key summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from("keystats.json"),
            compact: false,
            print_summary: true,
        }
    }
}
