//! Bounded listing of the project's documentation root.
//!
//! The only I/O the build performs: one non-recursive directory listing.
//! A missing or unreadable root degrades to an empty listing instead of
//! an error, which in turn means zero doc nodes and zero doc-chain edges.

use std::fs;
use std::path::PathBuf;

/// A Markdown file found directly under the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    /// Node id: `"doc:"` plus the file stem (name minus final extension).
    pub id: String,
    /// Plain file name, used as the node label and the sort key.
    pub file_name: String,
    /// Full path of the file.
    pub path: PathBuf,
}

/// Lists the immediate `*.md` files under `root`, sorted ascending by
/// file name. Returns an empty list for an empty, missing, or unreadable
/// root. The single sorted order feeds both doc nodes and the doc chain.
pub fn list_doc_files(root: &str) -> Vec<DocFile> {
    if root.is_empty() {
        return Vec::new();
    }
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut files: Vec<DocFile> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                return None;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let stem = path.file_stem()?.to_string_lossy().into_owned();
            Some(DocFile {
                id: format!("doc:{}", stem),
                file_name,
                path,
            })
        })
        .collect();

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    files
}
