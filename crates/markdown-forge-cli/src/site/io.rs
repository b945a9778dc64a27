use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(PathBuf),
    #[error("Invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to scan content: {0}")]
    Scan(#[from] glob::GlobError),
    #[error("Path is not relative to the content root: {0}")]
    NotRelative(#[from] relative_path::FromPathError),
    #[error("{path} is outside the content root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Read a file below `root`.
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a file below `root`, creating parent directories as needed.
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Finds every `.md` file below `content_root`, as sorted root-relative paths.
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !content_root.is_dir() {
        return Err(IoError::InvalidDir(content_root.to_path_buf()));
    }

    let root = glob::Pattern::escape(&content_root.to_string_lossy());
    let mut files = Vec::new();
    for entry in glob::glob(&format!("{root}/**/*.md"))? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        files.push(relative_to_root(&path, content_root)?);
    }
    files.sort();
    Ok(files)
}

/// Strips `root` from a path produced by globbing below it.
///
/// `glob` yields `./content/index.md` as `content/index.md`, so a leading `.`
/// on the root is ignored when it is not matched literally.
fn relative_to_root(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    let normalised: PathBuf = root
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    let relative = path
        .strip_prefix(root)
        .or_else(|_| path.strip_prefix(&normalised))
        .map_err(|_| IoError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    Ok(RelativePathBuf::from_path(relative)?)
}

/// Deletes `dir` if present and recreates it empty.
pub fn reset_dir(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        log::info!("Deleting {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Recursively copies the contents of `source` into `dest`, returning the
/// number of files copied.
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<usize, IoError> {
    if !source.is_dir() {
        return Err(IoError::InvalidDir(source.to_path_buf()));
    }
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}
