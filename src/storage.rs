use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::canvas::{Canvas, BLANK, MAX_COLS, MAX_ROWS};
use crate::input::is_printable;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file could not be created: {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input file could not be opened: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Builds `<dir>/<name>.txt`, reducing the user-supplied name to its final
/// path component so it cannot point outside the storage directory.
pub fn canvas_path(dir: &Path, name: &str) -> PathBuf {
    let stem = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("untitled");

    dir.join(format!("{}.txt", stem))
}

/// Writes the canvas as exactly MAX_ROWS lines of exactly MAX_COLS
/// characters, trailing blanks included. The canvas is not touched.
pub fn save(canvas: &Canvas, path: &Path) -> Result<(), StorageError> {
    let mut contents = String::with_capacity(MAX_ROWS * (MAX_COLS + 1));
    for row in 0..MAX_ROWS {
        contents.push_str(&canvas.row_text(row));
        contents.push('\n');
    }

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    fs::write(path, contents).map_err(|source| StorageError::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a canvas from a row-per-line text file. On open failure the
/// canvas is left untouched. On success the canvas is blanked first, then
/// filled with up to MAX_ROWS lines of up to MAX_COLS characters; longer
/// lines and extra lines are truncated silently. Characters outside the
/// visible ASCII range are stored as blanks.
pub fn load(canvas: &mut Canvas, path: &Path) -> Result<(), StorageError> {
    let contents = fs::read_to_string(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    canvas.clear();

    for (row, line) in contents.lines().take(MAX_ROWS).enumerate() {
        for (col, ch) in line.chars().take(MAX_COLS).enumerate() {
            canvas.set(row, col, if is_printable(ch) { ch } else { BLANK });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Canvas {
        let mut canvas = Canvas::new();
        for i in 0..MAX_ROWS {
            canvas.set(i, i, '\\');
        }
        canvas
    }

    #[test]
    fn save_writes_exact_grid_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");

        save(&diagonal(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), MAX_ROWS);
        assert!(lines.iter().all(|line| line.chars().count() == MAX_COLS));
        assert_eq!(contents.len(), MAX_ROWS * (MAX_COLS + 1));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        let original = diagonal();

        save(&original, &path).unwrap();

        let mut loaded = Canvas::new();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn overlong_lines_truncate_without_spilling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.txt");
        fs::write(&path, format!("{}\nsecond\n", "x".repeat(MAX_COLS + 10))).unwrap();

        let mut canvas = Canvas::new();
        load(&mut canvas, &path).unwrap();

        assert_eq!(canvas.row_text(0), "x".repeat(MAX_COLS));
        assert!(canvas.row_text(1).starts_with("second"));
        assert_eq!(canvas.get(1, 6), BLANK);
    }

    #[test]
    fn short_files_leave_remaining_rows_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.txt");
        fs::write(&path, "a\nb\nc\nd\ne\n").unwrap();

        let mut canvas = Canvas::new();
        canvas.replace(BLANK, '!');
        load(&mut canvas, &path).unwrap();

        assert_eq!(canvas.get(4, 0), 'e');
        for row in 5..MAX_ROWS {
            assert_eq!(canvas.row_text(row), " ".repeat(MAX_COLS));
        }
    }

    #[test]
    fn failed_load_leaves_canvas_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = diagonal();
        let before = canvas.clone();

        let result = load(&mut canvas, &dir.path().join("missing.txt"));

        assert!(matches!(result, Err(StorageError::Open { .. })));
        assert_eq!(canvas, before);
    }

    #[test]
    fn save_into_unwritable_target_reports_create_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes creation fail.
        let path = dir.path().join("blocked.txt");
        fs::create_dir(&path).unwrap();

        let result = save(&Canvas::new(), &path);
        assert!(matches!(result, Err(StorageError::Create { .. })));
    }

    #[test]
    fn control_characters_load_as_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabs.txt");
        fs::write(&path, "a\tb\n").unwrap();

        let mut canvas = Canvas::new();
        load(&mut canvas, &path).unwrap();

        assert_eq!(canvas.get(0, 0), 'a');
        assert_eq!(canvas.get(0, 1), BLANK);
        assert_eq!(canvas.get(0, 2), 'b');
    }

    #[test]
    fn canvas_path_cannot_escape_the_storage_directory() {
        let dir = Path::new("SavedFiles");

        assert_eq!(canvas_path(dir, "art"), dir.join("art.txt"));
        assert_eq!(canvas_path(dir, "../../etc/passwd"), dir.join("passwd.txt"));
        assert_eq!(canvas_path(dir, "/tmp/abs"), dir.join("abs.txt"));
        assert_eq!(canvas_path(dir, ""), dir.join("untitled.txt"));
        assert_eq!(canvas_path(dir, ".."), dir.join("untitled.txt"));
    }
}
