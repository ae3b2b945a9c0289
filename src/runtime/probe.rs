//! Existence probe module

use std::fs;

/// Answers "is there something at this path?"
pub trait FileProbe {
    fn exists(&self, path: &str) -> bool;
}

/// Probe backed by the real filesystem
///
/// Directories count as existing, same as files. Metadata errors
/// (permissions, dangling links) read as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn exists(&self, path: &str) -> bool {
        fs::metadata(path).is_ok()
    }
}

impl<F: Fn(&str) -> bool> FileProbe for F {
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_probe() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("home.php");
        fs::write(&file, "<h1>home</h1>").unwrap();

        let probe = DiskProbe;
        assert!(probe.exists(file.to_str().unwrap()));
        assert!(probe.exists(dir.path().to_str().unwrap()));
        assert!(!probe.exists(dir.path().join("missing.php").to_str().unwrap()));
    }

    #[test]
    fn test_closure_probe() {
        let probe = |p: &str| p == "/www/home.php";
        assert!(probe.exists("/www/home.php"));
        assert!(!probe.exists("/www/other.php"));
    }
}
