use std::path::{Path, PathBuf};

use modelzip_core::error::{Error, Result};
use rayon::prelude::*;

/// One `(formula, input, output)` triple discovered while walking the
/// batch directory tree.
pub struct Instance {
    pub formula: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Walks `model_dir`'s immediate subdirectories `<model>/<inst>/`; for
/// each, requires a matching `<formula_dir>/<inst>.cnf` and creates
/// `<output_dir>/<inst>/`. Every file inside `<model>/<inst>/` becomes one
/// instance, writing to `<output_dir>/<inst>/<file-name>` (§11).
///
/// A missing formula file for a given instance aborts the whole walk
/// immediately rather than skipping it, matching the no-best-effort
/// batch contract in §7/§11.
pub fn discover(formula_dir: &Path, model_dir: &Path, output_dir: &Path) -> Result<Vec<Instance>> {
    let mut instances = Vec::new();

    let subdirs = std::fs::read_dir(model_dir)
        .map_err(|e| Error::ArgumentError(format!("cannot read model directory: {}", e)))?;

    for entry in subdirs {
        let entry = entry.map_err(|e| Error::ArgumentError(format!("cannot read directory entry: {}", e)))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let inst_name = entry.file_name();
        let formula_path = formula_dir.join(&inst_name).with_extension("cnf");
        if !formula_path.is_file() {
            return Err(Error::ArgumentError(format!(
                "missing formula file for instance `{}`: expected {}",
                inst_name.to_string_lossy(),
                formula_path.display()
            )));
        }

        let inst_output_dir = output_dir.join(&inst_name);
        std::fs::create_dir_all(&inst_output_dir)
            .map_err(|e| Error::ArgumentError(format!("cannot create output directory: {}", e)))?;

        let files = std::fs::read_dir(&path)
            .map_err(|e| Error::ArgumentError(format!("cannot read instance directory: {}", e)))?;
        for file_entry in files {
            let file_entry = file_entry.map_err(|e| Error::ArgumentError(format!("cannot read directory entry: {}", e)))?;
            let file_path = file_entry.path();
            if !file_path.is_file() {
                continue;
            }
            let output_path = inst_output_dir.join(file_entry.file_name());
            instances.push(Instance {
                formula: formula_path.clone(),
                input: file_path,
                output: output_path,
            });
        }
    }

    Ok(instances)
}

/// Processes every discovered instance in parallel via `rayon`; each
/// instance runs an independent core engine invocation with no shared
/// mutable state (§5). The first failure short-circuits the batch.
pub fn run_batch<T, F>(instances: Vec<Instance>, per_instance: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Instance) -> Result<T> + Sync + Send,
{
    instances.par_iter().map(per_instance).collect()
}
