//! Writing generated files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Configuration;
use crate::error::{IconfontError, Result};
use crate::generate::{AggregatorOutput, GeneratedIcon};
use crate::templates::TemplateStore;

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IconfontError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    fs::write(path, contents).map_err(|e| IconfontError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// Create `dir` if missing and delete the files directly inside it.
///
/// Subdirectories are left alone. Returns the number of files removed.
pub fn clear_directory(dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir).map_err(|e| IconfontError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut removed = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| IconfontError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to read output directory: {}", e),
        })?;
        if entry.file_type().is_file() {
            fs::remove_file(entry.path()).map_err(|e| IconfontError::Io {
                path: entry.path().to_path_buf(),
                message: format!("Failed to remove stale file: {}", e),
            })?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Writes one run's component files into [`Configuration::icon_dir`].
pub struct ComponentWriter<'a> {
    config: &'a Configuration,
    dir: PathBuf,
}

impl<'a> ComponentWriter<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            dir: config.icon_dir(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Clear the icon directory before a run.
    pub fn prepare(&self) -> Result<usize> {
        clear_directory(self.dir())
    }

    /// Copy the `getIconColor` helper (plus its `.d.ts` for untyped output).
    pub fn write_helper(&self, templates: &TemplateStore) -> Result<Vec<PathBuf>> {
        let mut names = vec![format!("helper.{}", self.config.script_extension())];
        if !self.config.use_typed_output {
            names.push("helper.d.ts".to_string());
        }

        let mut written = Vec::with_capacity(names.len());
        for name in names {
            let path = self.dir().join(&name);
            write_file(&path, templates.get(&name)?)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Write `<ComponentName>.<ext>` (and `.d.ts` when present).
    pub fn write_icon(&self, icon: &GeneratedIcon) -> Result<PathBuf> {
        let path = self.dir().join(format!(
            "{}.{}",
            icon.component_name,
            self.config.component_extension()
        ));
        write_file(&path, &icon.source_text)?;

        if let Some(declaration) = &icon.type_declaration {
            write_file(
                &self.dir().join(format!("{}.d.ts", icon.component_name)),
                declaration,
            )?;
        }
        Ok(path)
    }

    /// Write `index.<ext>` (and `index.d.ts` when present).
    pub fn write_aggregator(&self, output: &AggregatorOutput) -> Result<PathBuf> {
        let path = self
            .dir()
            .join(format!("index.{}", self.config.component_extension()));
        write_file(&path, &output.source_text)?;

        if let Some(declaration) = &output.type_declaration {
            write_file(&self.dir().join("index.d.ts"), declaration)?;
        }
        Ok(path)
    }
}
