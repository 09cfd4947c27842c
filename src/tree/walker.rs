//! Recursive directory walker with tree-style output

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorSpec, WriteColor};

use super::config::WalkerConfig;

/// Walks a directory tree and prints one line per surviving entry,
/// drawing `├── `/`└── ` connectors the way `tree` does.
///
/// The root directory itself is not printed; output starts with its
/// children. Entries are emitted in the order the OS returns them.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and write the rendered tree to `out`.
    ///
    /// `root` must be an existing directory; callers resolve it first.
    /// I/O errors (unreadable directories, broken pipes) propagate.
    pub fn walk<W: WriteColor>(&self, root: &Path, out: &mut W) -> io::Result<()> {
        self.walk_dir(root, "", 0, out)
    }

    fn walk_dir<W: WriteColor>(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        out: &mut W,
    ) -> io::Result<()> {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let entries = self.read_entries(dir)?;
        let last = entries.len().saturating_sub(1);

        for (index, path) in entries.iter().enumerate() {
            let is_last = index == last;
            let connector = if is_last { "└── " } else { "├── " };
            let is_dir = path.is_dir();

            write!(out, "{}{}", prefix, connector)?;
            if is_dir {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            if self.config.full_paths {
                write!(out, "{}", path.display())?;
            } else {
                write!(out, "{}", entry_name(path))?;
            }
            if is_dir {
                out.reset()?;
            }
            writeln!(out)?;

            if is_dir {
                // Continuation bar under a non-last sibling, blank padding
                // under the last one.
                let extension = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{}{}", prefix, extension);
                self.walk_dir(path, &child_prefix, depth + 1, out)?;
            }
        }

        Ok(())
    }

    /// List `dir` and apply the hidden/type filters, preserving the
    /// underlying listing order.
    fn read_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !self.config.show_hidden && entry_name(&path).starts_with('.') {
                continue;
            }
            if self.config.dirs_only && !path.is_dir() {
                continue;
            }
            if self.config.files_only && !path.is_file() {
                continue;
            }
            entries.push(path);
        }
        Ok(entries)
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::{self, File};

    use tempfile::TempDir;
    use termcolor::NoColor;

    fn render(root: &Path, config: WalkerConfig) -> String {
        let mut out = NoColor::new(Vec::new());
        TreeWalker::new(config)
            .walk(root, &mut out)
            .expect("walk should succeed");
        String::from_utf8(out.into_inner()).expect("output should be UTF-8")
    }

    #[test]
    fn last_sibling_gets_terminal_glyph() {
        let dir = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let output = render(dir.path(), WalkerConfig::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("└── ")).count(),
            1,
            "exactly one terminal glyph: {output}"
        );
        assert!(lines.last().unwrap().starts_with("└── "));
        assert!(lines[..2].iter().all(|l| l.starts_with("├── ")));
    }

    #[test]
    fn entries_follow_directory_listing_order() {
        let dir = TempDir::new().unwrap();
        for name in ["beta", "alpha", "gamma", "delta"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let expected: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();

        let output = render(dir.path(), WalkerConfig::default());
        let printed: Vec<String> = output
            .lines()
            .map(|l| l.trim_start_matches("├── ").trim_start_matches("└── ").to_string())
            .collect();
        assert_eq!(printed, expected);
    }

    #[test]
    fn hidden_entries_excluded_by_default() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("visible.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();

        let output = render(dir.path(), WalkerConfig::default());
        assert!(output.contains("visible.txt"));
        assert!(!output.contains(".hidden"));

        let all = render(
            dir.path(),
            WalkerConfig {
                show_hidden: true,
                ..Default::default()
            },
        );
        assert!(all.contains(".hidden"));
    }

    #[test]
    fn dirs_only_drops_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("file.txt")).unwrap();

        let output = render(
            dir.path(),
            WalkerConfig {
                dirs_only: true,
                ..Default::default()
            },
        );
        assert!(output.contains("sub"));
        assert!(!output.contains("file.txt"));
    }

    #[test]
    fn files_only_drops_dirs_and_never_recurses() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub/nested.txt")).unwrap();
        File::create(dir.path().join("top.txt")).unwrap();

        let output = render(
            dir.path(),
            WalkerConfig {
                files_only: true,
                ..Default::default()
            },
        );
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("top.txt"));
        assert!(!output.contains("nested.txt"));
    }

    #[test]
    fn depth_zero_lists_only_top_level() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub/deep.txt")).unwrap();
        File::create(dir.path().join("top.txt")).unwrap();

        let output = render(
            dir.path(),
            WalkerConfig {
                max_depth: Some(0),
                ..Default::default()
            },
        );
        assert!(output.contains("sub"));
        assert!(output.contains("top.txt"));
        assert!(!output.contains("deep.txt"));
    }

    #[test]
    fn nested_entries_get_padded_prefix() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("only")).unwrap();
        File::create(dir.path().join("only/leaf.txt")).unwrap();

        let output = render(dir.path(), WalkerConfig::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["└── only", "    └── leaf.txt"]);
    }

    #[test]
    fn full_paths_prints_absolute_paths() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("file.txt")).unwrap();

        let output = render(
            dir.path(),
            WalkerConfig {
                full_paths: true,
                ..Default::default()
            },
        );
        let expected = dir.path().join("file.txt");
        assert!(
            output.contains(&expected.display().to_string()),
            "should print full path: {output}"
        );
    }
}
