use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repage")]
#[command(about = "PDF page selection and reordering tool with MCP server support")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server (primary mode)
    Mcp,

    /// Show the page count of a PDF
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Copy the selected pages to a new PDF, in selector order
    #[command(alias = "extract")]
    Select {
        /// PDF file to select from
        path: PathBuf,

        /// Page selector (e.g. "1-3,5,2n" or "all")
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Reorder pages with a named preset
    Sort {
        /// PDF file to reorder
        path: PathBuf,

        /// Preset name: REVERSE_ORDER, DUPLEX_SORT, BOOKLET_SORT,
        /// SIDE_STITCH_BOOKLET_SORT, ODD_EVEN_SPLIT, REMOVE_FIRST,
        /// REMOVE_LAST, REMOVE_FIRST_AND_LAST, or CUSTOM_PAGE_ORDER
        preset: String,

        /// Page selector, required with CUSTOM_PAGE_ORDER
        #[arg(short, long)]
        pages: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Drop the selected pages and keep the rest, in order
    Remove {
        /// PDF file to remove pages from
        path: PathBuf,

        /// Page selector for the pages to drop (e.g. "3,7,9")
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}
