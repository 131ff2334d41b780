use clap::Parser;
use std::path::PathBuf;

use pdfimages::ImageFormat;

#[derive(Parser, Debug)]
#[command(name = "pdfimages-rs", version, about = "Extract images from PDF files with pdfimages")]
pub struct CliArgs {
    /// Input PDF file (single file mode)
    pub input: Option<PathBuf>,

    /// Existing directory the images are written to (single file mode)
    pub output: Option<PathBuf>,

    /// Directory containing PDF files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output root for batch mode; one subdirectory is created per PDF
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with extraction parameters; flags given here override it
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Location of the pdfimages executable
    #[arg(long, value_name = "PATH")]
    pub pdfimages: Option<PathBuf>,

    /// Alternate xpdfrc config file
    #[arg(long, value_name = "FILE")]
    pub cfg: Option<PathBuf>,

    /// First page to scan
    #[arg(short = 'f', long)]
    pub first_page: Option<u64>,

    /// Last page to scan
    #[arg(short = 'l', long)]
    pub last_page: Option<u64>,

    /// Image output format (pnm, jpeg or raw)
    #[arg(long, value_enum)]
    pub format: Option<ImageFormat>,

    /// Owner password for the PDF file
    #[arg(long)]
    pub opw: Option<String>,

    /// User password for the PDF file
    #[arg(long)]
    pub upw: Option<String>,

    /// Kill pdfimages after this many seconds (per document)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Batch mode: keep going when a document fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Print the composed command line and exit
    #[arg(long, default_value_t = false)]
    pub print_command: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
