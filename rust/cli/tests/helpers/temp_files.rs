use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

#[derive(Debug)]
pub struct TempFileManager {
    base_dir: TempDir,
}

#[allow(dead_code)]
impl TempFileManager {
    pub fn new() -> std::io::Result<Self> {
        let base_dir = tempfile::Builder::new().prefix("showdown-cli").tempdir()?;
        Ok(Self { base_dir })
    }

    pub fn create_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn create_compressed(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        let mut encoder = zstd::stream::write::Encoder::new(file, 0)?;
        encoder.write_all(content.as_bytes())?;
        encoder.finish()?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.base_dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.base_dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn create_compressed_writes_zstd_content() {
        let manager = TempFileManager::new().expect("create temp dir");
        let expected = "4H 4C 6S 7S KD 2C 3S 9S 9D TD\n";

        let path = manager
            .create_compressed("in/hands.txt.zst", expected)
            .expect("create compressed");
        let file = File::open(&path).expect("open compressed");
        let mut decoder = zstd::stream::read::Decoder::new(file).expect("decoder");
        let mut actual = String::new();
        decoder.read_to_string(&mut actual).expect("decompress");

        assert_eq!(actual, expected);
    }

    #[test]
    fn path_joins_base_directory() {
        let manager = TempFileManager::new().expect("create temp dir");
        let nested = manager.path("nested/output.txt");

        assert!(nested.starts_with(manager.root()));
        assert_eq!(nested.file_name().unwrap().to_string_lossy(), "output.txt");
    }
}
