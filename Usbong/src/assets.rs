//! Image and audio asset lookup
//!
//! Node names reference assets by bare name (`imageDisplay~cat~A cat`,
//! `@bg=forest`, `@audioName=intro`). Resolving those names to files is
//! delegated to an [`AssetProbe`] so the tree can run against a real
//! directory or a test double.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Image extensions recognized in `res/`, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

const IMAGES_DIR: &str = "res";
const AUDIO_DIR: &str = "audio";

/// Resolves asset names to files.
pub trait AssetProbe {
    /// Find an image by name (without extension)
    fn find_image(&self, name: &str) -> Option<PathBuf>;

    /// Find an audio file by name, preferring the language-specific folder
    fn find_audio(&self, name: &str, language: &str) -> Option<PathBuf>;
}

/// Probe that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetProbe for NoAssets {
    fn find_image(&self, _name: &str) -> Option<PathBuf> {
        None
    }

    fn find_audio(&self, _name: &str, _language: &str) -> Option<PathBuf> {
        None
    }
}

/// Probe scanning the `res/` and `audio/` folders of an unpacked tree.
#[derive(Debug, Clone)]
pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    /// Create a probe rooted at a tree directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Tree directory this probe scans
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn files_in(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
}

impl AssetProbe for FsAssetProbe {
    fn find_image(&self, name: &str) -> Option<PathBuf> {
        let dir = self.root.join(IMAGES_DIR);
        if name.is_empty() || !dir.is_dir() {
            return None;
        }
        let wanted: Vec<String> = IMAGE_EXTENSIONS
            .iter()
            .map(|ext| format!("{name}.{ext}").to_lowercase())
            .collect();
        files_in(&dir).find(|path| {
            path.file_name()
                .map(|f| f.to_string_lossy().to_lowercase())
                .is_some_and(|f| wanted.contains(&f))
        })
    }

    fn find_audio(&self, name: &str, language: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let base = self.root.join(AUDIO_DIR);
        [base.join(language), base]
            .into_iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| {
                files_in(&dir).find(|path| path.file_stem().is_some_and(|s| s == name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_image_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let res = temp.path().join("res");
        fs::create_dir_all(&res).unwrap();
        fs::write(res.join("Cat.PNG"), b"png").unwrap();
        fs::write(res.join("dog.txt"), b"txt").unwrap();

        let probe = FsAssetProbe::new(temp.path());
        assert_eq!(probe.find_image("cat"), Some(res.join("Cat.PNG")));
        assert_eq!(probe.find_image("dog"), None);
        assert_eq!(probe.find_image(""), None);
    }

    #[test]
    fn test_find_audio_prefers_language_folder() {
        let temp = TempDir::new().unwrap();
        let audio = temp.path().join("audio");
        fs::create_dir_all(audio.join("Filipino")).unwrap();
        fs::write(audio.join("intro.mp3"), b"a").unwrap();
        fs::write(audio.join("Filipino").join("intro.mp3"), b"b").unwrap();

        let probe = FsAssetProbe::new(temp.path());
        assert_eq!(
            probe.find_audio("intro", "Filipino"),
            Some(audio.join("Filipino").join("intro.mp3"))
        );
        assert_eq!(probe.find_audio("intro", "English"), Some(audio.join("intro.mp3")));
        assert_eq!(probe.find_audio("Intro", "English"), None);
    }

    #[test]
    fn test_no_assets() {
        assert!(NoAssets.find_image("cat").is_none());
        assert!(NoAssets.find_audio("cat", "English").is_none());
    }
}
