//! Command-line options for qerr.

use clap::{Args, Subcommand};
use query_error::Band;

/// What to print.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List registered error kinds, ordered by code
    List(ListOptions),

    /// Show one error kind, looked up by numeric code or dotted key
    Show {
        /// A code such as `2080` or a key such as `admin.clustering.no_such_node`
        #[arg(value_name = "CODE_OR_KEY")]
        query: String,
    },

    /// List the numeric bands and how many kinds each holds
    Bands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListOptions {
    /// Only list kinds in this band, e.g. `admin` or `couchbase-view-index`
    #[arg(long, value_name = "BAND")]
    pub band: Option<Band>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_band(mut self, band: Option<Band>) -> Self {
        self.band = band;
        self
    }
}
