use include_dir::{Dir, include_dir};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// A bundled file, addressed by its path relative to the scaffold root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
}

/// All bundled scaffold files, sorted by path.
pub fn scaffold_files() -> Vec<ScaffoldFile> {
    let mut files: Vec<ScaffoldFile> = SCAFFOLD_DIR
        .files()
        .filter_map(|file| {
            Some(ScaffoldFile {
                path: file.path().to_string_lossy().to_string(),
                content: file.contents_utf8()?.to_string(),
            })
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

pub fn scaffold_file_content(path: &str) -> Option<String> {
    SCAFFOLD_DIR.get_file(path).and_then(|file| file.contents_utf8()).map(|s| s.to_string())
}
