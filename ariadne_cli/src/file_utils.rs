use std::path::{Path, PathBuf};

pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// Expands every directory argument into the JSON files below it. Files are kept as given.
pub fn collect_fragment_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(
                read_folder(input)?
                    .into_iter()
                    .filter(|path| path.extension().is_some_and(|extension| extension == "json")),
            );
        } else {
            files.push(input.clone());
        }
    }

    Ok(files)
}
