use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Input from {} is not valid UTF-8: {source}", describe(.path.as_deref()))]
    InvalidEncoding {
        path: Option<PathBuf>,
        source: std::string::FromUtf8Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "standard input".to_string(),
    }
}

/// Read a whole document from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(IoError::NotFound(path.to_path_buf()));
            }
            let bytes = fs::read(path)?;
            decode(bytes, Some(path))
        }
        None => read_from(std::io::stdin().lock()),
    }
}

/// Read a whole document from any reader, e.g. a locked stdin.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(bytes, None)
}

fn decode(bytes: Vec<u8>, path: Option<&Path>) -> Result<String, IoError> {
    String::from_utf8(bytes).map_err(|source| IoError::InvalidEncoding {
        path: path.map(Path::to_path_buf),
        source,
    })
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
///
/// Nothing is appended; the content is written exactly as given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), IoError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.md");
        fs::write(&file, "# Notes").unwrap();

        assert_eq!(read_input(Some(file.as_path())).unwrap(), "# Notes");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("missing.md");

        let err = read_input(Some(file.as_path())).unwrap_err();
        assert!(matches!(err, IoError::NotFound(ref p) if p == &file));
    }

    #[test]
    fn test_read_invalid_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("binary.md");
        fs::write(&file, [0x66u8, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_input(Some(file.as_path())).unwrap_err();
        assert!(matches!(err, IoError::InvalidEncoding { path: Some(_), .. }));
        assert!(err.to_string().contains("binary.md"));
    }

    #[test]
    fn test_read_from_reader() {
        let text = read_from("**hi**".as_bytes()).unwrap();
        assert_eq!(text, "**hi**");
    }

    #[test]
    fn test_read_invalid_utf8_from_reader() {
        let err = read_from(&[0xc3u8, 0x28][..]).unwrap_err();
        assert!(err.to_string().contains("standard input"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("out").join("plain.txt");

        write_output(Some(file.as_path()), "plain text").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "plain text");
    }
}
