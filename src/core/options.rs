//! Construction options for [`Command`](super::command::Command).
//!
//! Each option is a value that mutates the command being built. Options are applied in the
//! order given; nothing is deduplicated or checked for conflicts, the tool's own argument
//! parser decides what a repeated flag means.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::command::Command;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOption {
    /// Replace the executable name looked up on `PATH`
    CustomPath(PathBuf),
    /// `-cfg <file>`: read this file instead of `~/.xpdfrc` or the system-wide config
    CustomConfig(PathBuf),
    /// `-f <n>`: first page to scan
    PageFrom(u64),
    /// `-l <n>`: last page to scan
    PageTo(u64),
    /// `-f <from> -l <to>`
    PageRange { from: u64, to: u64 },
    /// `-j`: write DCT-encoded images as JPEG files
    SaveDctAsJpeg,
    /// `-raw`: write every image in its PDF-native format
    SaveRaw,
    /// `-opw <password>`: bypasses all security restrictions
    OwnerPassword(String),
    /// `-upw <password>`
    UserPassword(String),
}

impl CommandOption {
    pub(crate) fn apply(&self, cmd: &mut Command) {
        match self {
            CommandOption::CustomPath(path) => cmd.path = path.clone(),
            CommandOption::CustomConfig(path) => {
                cmd.push_arg("-cfg");
                cmd.push_arg(path.as_os_str());
            }
            CommandOption::PageFrom(from) => {
                cmd.push_arg("-f");
                cmd.push_arg(from.to_string());
            }
            CommandOption::PageTo(to) => {
                cmd.push_arg("-l");
                cmd.push_arg(to.to_string());
            }
            CommandOption::PageRange { from, to } => {
                CommandOption::PageFrom(*from).apply(cmd);
                CommandOption::PageTo(*to).apply(cmd);
            }
            CommandOption::SaveDctAsJpeg => cmd.push_arg("-j"),
            CommandOption::SaveRaw => cmd.push_arg("-raw"),
            CommandOption::OwnerPassword(password) => {
                cmd.push_arg("-opw");
                cmd.push_arg(password);
            }
            CommandOption::UserPassword(password) => {
                cmd.push_arg("-upw");
                cmd.push_arg(password);
            }
        }
    }
}

/// Use a custom location (or name) for the `pdfimages` executable.
pub fn with_custom_path(path: impl Into<PathBuf>) -> CommandOption {
    CommandOption::CustomPath(path.into())
}

/// Read `path` in place of `~/.xpdfrc` or the system-wide config file.
pub fn with_custom_config(path: impl Into<PathBuf>) -> CommandOption {
    CommandOption::CustomConfig(path.into())
}

/// First page to scan.
pub fn with_page_from(from: u64) -> CommandOption {
    CommandOption::PageFrom(from)
}

/// Last page to scan.
pub fn with_page_to(to: u64) -> CommandOption {
    CommandOption::PageTo(to)
}

/// Range of pages to scan; emits both the first-page and last-page flags.
pub fn with_page_range(from: u64, to: u64) -> CommandOption {
    CommandOption::PageRange { from, to }
}

/// Save DCT images as JPEG. All non-DCT images are still written as PBM (monochrome),
/// PGM (grayscale) or PPM (color). Inline images are always written as PBM/PGM/PPM.
pub fn with_save_dct_as_jpeg() -> CommandOption {
    CommandOption::SaveDctAsJpeg
}

/// Write all images in PDF-native formats. Most of these are not standard image formats,
/// which makes this mostly useful as input to a tool that generates PDF files.
pub fn with_save_raw() -> CommandOption {
    CommandOption::SaveRaw
}

/// Owner password for the document.
pub fn with_owner_password(password: impl Into<String>) -> CommandOption {
    CommandOption::OwnerPassword(password.into())
}

/// User password for the document.
pub fn with_user_password(password: impl Into<String>) -> CommandOption {
    CommandOption::UserPassword(password.into())
}
