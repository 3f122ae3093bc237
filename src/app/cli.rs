use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replace tabs with spaces on source files"
)]
pub struct Cli {
    /// Operate on matching files in subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Number of spaces to replace one tab
    #[arg(short = 'n', long, default_value_t = 4)]
    pub spaces: usize,

    /// Replace only at the beginning of the line
    #[arg(short, long)]
    pub start_only: bool,

    /// Replace spaces with tabs instead
    #[arg(short = 't', long)]
    pub spaces_to_tabs: bool,

    /// File extension (without dot) used to select files
    #[arg(short, long, default_value = "py")]
    pub extension: String,

    /// Target file, or directory when --recursive is set
    pub filename: PathBuf,
}
