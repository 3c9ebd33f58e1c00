use crate::error::{MarkovError, MkResult};
use crate::model::frequency::check_window_size;
use clap::Args;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Default)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Clips,
}

#[derive(Args, Debug, Clone)]
pub struct ExportParams {
    /// Directory holding the chat export JSON files
    #[arg(short, long, default_value = "./exports/input")]
    pub input: String,

    /// Directory users.json is written to
    #[arg(short, long, default_value = "./exports")]
    pub output: String,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            input: "./exports/input".to_string(),
            output: "./exports".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateParams {
    /// users.json produced by `export`
    #[arg(short, long, default_value = "./exports/users.json")]
    pub input: String,

    #[arg(short, long, default_value = "./exports")]
    pub output: String,

    /// Inclusion filter, repeatable: uid:<id>, u:<name>, rid:<role id>, r:<role name>
    #[arg(short = 'f', long = "filter")]
    pub filters: Vec<String>,

    #[arg(short = 't', long = "type", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(long, default_value = "2,3")]
    pub window_sizes: String,

    /// Print a summary table of the generated models
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            input: "./exports/users.json".to_string(),
            output: "./exports".to_string(),
            filters: Vec::new(),
            format: OutputFormat::Json,
            window_sizes: "2,3".to_string(),
            report: false,
        }
    }
}

impl GenerateParams {
    pub fn get_window_sizes(&self) -> MkResult<Vec<usize>> {
        parse_window_sizes(&self.window_sizes)
    }
}

/// Parses a comma-separated list of window sizes such as `2,3`.
pub fn parse_window_sizes(s: &str) -> MkResult<Vec<usize>> {
    let mut sizes = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        let n: usize = part.parse().map_err(|_| {
            MarkovError::Validation(format!("Invalid window size '{}' in '{}'", part, s))
        })?;
        check_window_size(n)?;
        sizes.push(n);
    }
    Ok(sizes)
}
