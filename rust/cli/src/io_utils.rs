//! File and stdin helpers used by the commands.

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input, trimmed. `None` on EOF or read errors.
///
/// ```rust
/// use std::io::Cursor;
/// # use shoggoth_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  bet 20 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("bet 20".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a UTF-8 text file, dropping a leading BOM.
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the parent directory of `path` when missing.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes `contents` next to `path` and renames it over, so a crash never
/// leaves a half-written file behind.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    ensure_parent_dir(path)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
