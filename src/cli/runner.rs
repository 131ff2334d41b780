use tracing::info;
use tracing_subscriber::EnvFilter;

use pdfimages::{Command, ExtractParams, extract_directory, extract_images};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load `--params` (if any) and apply the individual flags on top of it.
fn resolve_params(args: &CliArgs) -> Result<ExtractParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => ExtractParams::from_json_file(path)?,
        None => ExtractParams::default(),
    };

    if let Some(path) = &args.pdfimages {
        params.executable = Some(path.clone());
    }
    if let Some(path) = &args.cfg {
        params.config_file = Some(path.clone());
    }
    if let Some(first) = args.first_page {
        params.first_page = Some(first);
    }
    if let Some(last) = args.last_page {
        params.last_page = Some(last);
    }
    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(pw) = &args.opw {
        params.owner_password = Some(pw.clone());
    }
    if let Some(pw) = &args.upw {
        params.user_password = Some(pw.clone());
    }
    if let Some(secs) = args.timeout {
        if secs == 0 {
            return Err(AppError::ZeroTimeout { secs }.into());
        }
        params.timeout_secs = Some(secs);
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = resolve_params(&args)?;

    if args.print_command {
        let cmd = Command::from_params(&params)?;
        println!("{}", cmd);
        return Ok(());
    }

    if let Some(input_dir) = &args.input_dir {
        if args.input.is_some() {
            return Err(AppError::Conflict {
                first: "--input-dir",
                second: "INPUT",
            }
            .into());
        }
        let output_dir = args.output_dir.as_ref().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch extraction from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = extract_directory(input_dir, output_dir, &params, args.continue_on_error)?;

        info!("Batch extraction complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
        println!(
            "processed={} skipped={} errors={}",
            report.processed, report.skipped, report.errors
        );
    } else {
        let input = args.input.as_ref().ok_or(AppError::MissingArgument {
            arg: "INPUT".to_string(),
        })?;
        let output = args.output.as_ref().ok_or(AppError::MissingArgument {
            arg: "OUTPUT".to_string(),
        })?;

        extract_images(input, output, &params)?;
        info!("Successfully extracted: {:?} -> {:?}", input, output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pdfimages::ImageFormat;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("pdfimages-rs").chain(argv.iter().copied()))
    }

    #[test]
    fn flags_override_params_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{ "format": "raw", "first_page": 2, "last_page": 9 }"#,
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let args = parse(&["--params", path, "-l", "4", "--format", "jpeg"]);
        let params = resolve_params(&args).unwrap();

        assert_eq!(params.first_page, Some(2));
        assert_eq!(params.last_page, Some(4));
        assert_eq!(params.format, ImageFormat::Jpeg);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let args = parse(&["--timeout", "0", "in.pdf", "out"]);
        assert!(resolve_params(&args).is_err());
    }

    #[test]
    fn positionals_parse() {
        let args = parse(&["--opw", "secret", "doc.pdf", "images"]);
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("doc.pdf")));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("images")));
        assert_eq!(args.opw.as_deref(), Some("secret"));
    }
}
