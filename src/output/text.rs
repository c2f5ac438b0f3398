//! Plain text output writer.

use super::prepare_output_path;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write text content (include-order listings, DOT source) to a file
///
/// **Public** - main entry point for text output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_text(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing {}", output_path.display());

    prepare_output_path(output_path)?;

    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    info!(
        "Written successfully ({} bytes, {:.2} KB)",
        content.len(),
        content.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_text_roundtrip() {
        let temp_file = NamedTempFile::new().unwrap();
        write_text(". a.h\n.. b.h\n", temp_file.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(temp_file.path()).unwrap(),
            ". a.h\n.. b.h\n"
        );
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/order.txt");

        write_text("x\n", &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
