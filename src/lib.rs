#![doc = r#"
pdfimages — a typed wrapper around the Xpdf/Poppler `pdfimages` tool.

`pdfimages` reads a PDF file, scans one or more pages, and writes one PPM, PGM, PBM or JPEG
file for each image it finds. It extracts the raw image data without any additional
transforms: rotation, clipping, color inversion and the like done by the content stream are
ignored.

This crate does not parse PDFs or decode images. It turns typed options into command-line
flags, resolves the executable once, and runs it as a subprocess, optionally with a
cancellation or timeout signal.

Requirements
------------
- `pdfimages` (Xpdf or Poppler) on `PATH`, or a custom path passed with
  [`with_custom_path`].

Quick start
-----------
```rust,no_run
use pdfimages::{Command, with_page_range, with_save_dct_as_jpeg};

fn main() -> pdfimages::Result<()> {
    let cmd = Command::new([with_page_range(1, 3), with_save_dct_as_jpeg()])?;
    println!("{cmd}"); // /usr/bin/pdfimages -f 1 -l 3 -j <inpath> <outdir>

    // The output directory must already exist.
    cmd.run("./example.pdf", "./images")
}
```

Cancellation and timeouts
-------------------------
```rust,no_run
use std::time::Duration;
use pdfimages::{CancelToken, Command, Error, with_save_raw};

fn main() -> pdfimages::Result<()> {
    let cmd = Command::new([with_save_raw()])?;
    let token = CancelToken::with_timeout(Duration::from_secs(30));

    match cmd.run_with_cancel("./big.pdf", "./images", &token) {
        Ok(()) => {}
        Err(e) if e.is_cancellation() => eprintln!("gave up: {e}"),
        Err(Error::NonZeroExit { status, stderr, .. }) => eprintln!("{status}: {stderr}"),
        Err(other) => return Err(other),
    }
    Ok(())
}
```

Parameters from a config file
-----------------------------
```rust,no_run
use std::path::Path;
use pdfimages::{extract_directory, ExtractParams};

fn main() -> pdfimages::Result<()> {
    let params = ExtractParams::from_json_file(Path::new("extract.json"))?;
    let report = extract_directory(Path::new("/data/pdfs"), Path::new("/out"), &params, true)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Useful modules
--------------
- [`core`] — the command builder/runner, options, cancellation and parameters.
- [`api`] — high-level, ergonomic entry points.
- [`types`] — shared enums (`ImageFormat`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Types
pub use crate::core::cancel::CancelToken;
pub use crate::core::command::{Command, DEFAULT_EXECUTABLE};
pub use crate::core::options::{
    CommandOption, with_custom_config, with_custom_path, with_owner_password, with_page_from,
    with_page_range, with_page_to, with_save_dct_as_jpeg, with_save_raw, with_user_password,
};
pub use crate::core::params::ExtractParams;
pub use error::{Error, Result};
pub use types::ImageFormat;

// High-level API re-exports
pub use api::{
    BatchReport, extract_directory, extract_images, extract_images_with_cancel, iterate_pdf_files,
};
