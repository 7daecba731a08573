// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};
use crate::rewrite::{is_contract_identifier, rewrite_source, TemplateConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BumpOutcome {
    pub path: PathBuf,
    pub contract: String,
    /// False when the file was already in canonical form.
    pub changed: bool,
}

/// Contract name for a source file: its file name without the extension.
pub fn contract_name(path: &Path) -> TemplateResult<String> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !is_contract_identifier(&stem) {
        return Err(TemplateError::InvalidContractName {
            path: path.to_path_buf(),
            stem,
        });
    }
    Ok(stem)
}

/// Rewrite one file in place. Unchanged files are not written.
pub fn bump_file(path: &Path, config: &TemplateConfig) -> TemplateResult<BumpOutcome> {
    let contract = contract_name(path)?;
    let io_err = |source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let source = fs::read_to_string(path).map_err(io_err)?;
    let rewritten = rewrite_source(&source, config, &contract);
    let changed = rewritten != source;
    if changed {
        fs::write(path, rewritten).map_err(io_err)?;
        info!(path = %path.display(), %contract, "verifier rewritten");
    } else {
        debug!(path = %path.display(), "already canonical");
    }

    Ok(BumpOutcome {
        path: path.to_path_buf(),
        contract,
        changed,
    })
}

/// Rewrite each file in order. The first failure stops the run; files
/// already rewritten stay rewritten.
pub fn bump_all<P: AsRef<Path>>(paths: &[P], config: &TemplateConfig) -> TemplateResult<Vec<BumpOutcome>> {
    paths.iter().map(|p| bump_file(p.as_ref(), config)).collect()
}
