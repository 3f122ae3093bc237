use crate::app::error::RewriteError;
use crate::app::models::RuntimeConfig;
use crate::app::scanner::is_writable;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Applies the replacement pair to one line of text.
///
/// With `start_only`, replacement is confined to the prefix ending at the
/// first character that is neither a space nor a tab; the rest of the line
/// is appended untouched. A line with no such character is replaced whole.
pub fn rewrite_line(line: &str, from: &str, to: &str, start_only: bool) -> String {
    if !start_only {
        return line.replace(from, to);
    }

    for (i, c) in line.char_indices() {
        if c != ' ' && c != '\t' {
            let (prefix, rest) = line.split_at(i + c.len_utf8());
            return prefix.replace(from, to) + rest;
        }
    }

    line.replace(from, to)
}

/// Rewrites one file through a temporary sibling, then swaps it into place.
///
/// The swap is remove-then-rename, so a crash between the two steps leaves
/// the content only under the temporary name. See DESIGN.md.
pub fn rewrite_file(path: &Path, config: &RuntimeConfig) -> Result<(), RewriteError> {
    // Advisory: the rewrite lands in a fresh sibling first, so a read-only
    // target does not actually block it.
    if !is_writable(path) {
        log::warn!("No rights for write to '{}'", path.display());
    }

    let tmp = temp_path(path);
    stream_rewrite(path, &tmp, config)?;

    fs::remove_file(path).map_err(io_err("remove", path))?;
    fs::rename(&tmp, path).map_err(io_err("rename", &tmp))?;

    Ok(())
}

/// Streams `path` line by line into `tmp`, applying the replacement pair.
///
/// On failure the original is untouched and the partially written
/// temporary file is left on disk.
fn stream_rewrite(path: &Path, tmp: &Path, config: &RuntimeConfig) -> Result<(), RewriteError> {
    let mut writer = BufWriter::new(File::create(tmp).map_err(io_err("write", tmp))?);
    let mut reader = BufReader::new(File::open(path).map_err(io_err("read", path))?);

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(io_err("read", path))? == 0 {
            break;
        }
        let rewritten = rewrite_line(
            &line,
            &config.replace_from,
            &config.replace_to,
            config.start_only,
        );
        writer
            .write_all(rewritten.as_bytes())
            .map_err(io_err("write", tmp))?;
    }

    writer.flush().map_err(io_err("write", tmp))
}

/// Picks a sibling name not currently in use: `<file>.new` first, then
/// `<file>.<4 hex chars>` with a fresh random token until one is free.
fn temp_path(path: &Path) -> PathBuf {
    let mut candidate = sibling(path, "new");
    while candidate.exists() {
        let token = Uuid::new_v4().simple().to_string();
        candidate = sibling(path, &token[..4]);
    }
    candidate
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn io_err<'a>(op: &'static str, path: &'a Path) -> impl Fn(io::Error) -> RewriteError + 'a {
    move |source| RewriteError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config(from: &str, to: &str, start_only: bool) -> RuntimeConfig {
        RuntimeConfig {
            recursive: false,
            start_only,
            extension: "py".to_string(),
            target: PathBuf::new(),
            replace_from: from.to_string(),
            replace_to: to.to_string(),
        }
    }

    #[test]
    fn replaces_every_tab() {
        assert_eq!(
            rewrite_line("\ta\tb\t\n", "\t", "    ", false),
            "    a    b    \n"
        );
    }

    #[test]
    fn start_only_leaves_the_rest_of_the_line_alone() {
        assert_eq!(
            rewrite_line("\tif x:\t# note\n", "\t", "    ", true),
            "    if x:\t# note\n"
        );
    }

    #[test]
    fn start_only_converts_a_whitespace_only_line() {
        assert_eq!(rewrite_line("\t\t\n", "\t", "  ", true), "    \n");
    }

    #[test]
    fn start_only_converts_an_unterminated_whitespace_line() {
        assert_eq!(rewrite_line("\t\t", "\t", "  ", true), "    ");
    }

    #[test]
    fn start_only_without_leading_whitespace_is_a_no_op() {
        assert_eq!(rewrite_line("x\ty\n", "\t", "    ", true), "x\ty\n");
    }

    #[test]
    fn spaces_to_tabs_collapses_runs() {
        assert_eq!(rewrite_line("    x\n", "    ", "\t", false), "\tx\n");
    }

    #[test]
    fn round_trip_is_lossy_when_spaces_pre_exist() {
        let original = "    a\tb\n";
        let spaced = rewrite_line(original, "\t", "    ", false);
        let back = rewrite_line(&spaced, "    ", "\t", false);
        assert_eq!(back, "\ta\tb\n");
        assert_ne!(back, original);
    }

    #[test]
    fn temp_path_avoids_existing_siblings() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("foo.py");
        fs::write(&file, "x\n").unwrap();
        fs::write(dir.path().join("foo.py.new"), "taken\n").unwrap();

        let tmp = temp_path(&file);
        assert_ne!(tmp, dir.path().join("foo.py.new"));
        assert!(!tmp.exists());
        let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("foo.py."));
        assert_eq!(name.len(), "foo.py.".len() + 4);
    }

    #[test]
    fn rewrite_file_replaces_content_in_place() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("sample.py");
        fs::write(&file, "def f():\n\treturn 1\n").unwrap();

        rewrite_file(&file, &config("\t", "    ", false)).unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "def f():\n    return 1\n"
        );
        assert!(!dir.path().join("sample.py.new").exists());
    }

    #[test]
    fn rewrite_file_keeps_a_missing_trailing_newline() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("sample.py");
        fs::write(&file, "a\tb").unwrap();

        rewrite_file(&file, &config("\t", "    ", false)).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "a    b");
    }

    #[test]
    fn rewrite_file_fails_on_a_missing_target() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.py");

        let result = rewrite_file(&missing, &config("\t", "    ", false));

        assert!(result.is_err());
        // The temporary is created before the read fails and stays behind.
        assert!(dir.path().join("gone.py.new").exists());
    }
}
