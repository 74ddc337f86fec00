use clap::ValueEnum;
use shotdiff_operations::operations::{CompareInput, CompareOutput};

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

pub(crate) trait OutputFormatter {
    fn format(&self, input: &CompareInput, output: &CompareOutput) -> Result<String>;
}

impl OutputFormat {
    pub(crate) fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(super::PlainTextFormatter),
            Self::Json => Box::new(super::JsonFormatter),
        }
    }
}
