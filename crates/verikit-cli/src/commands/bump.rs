use std::path::{Path, PathBuf};

use anyhow::Result;
use verikit_templater::bump_all;

use crate::config;
use crate::output;

pub fn run(config_path: &Path, files: Vec<PathBuf>) -> Result<()> {
    let templater = config::load_templater(config_path)?;
    let files = if files.is_empty() {
        templater.files.iter().map(PathBuf::from).collect()
    } else {
        files
    };

    let outcomes = bump_all(&files, &templater).map_err(|e| {
        output::fail_with_hint(
            &e.to_string(),
            "generate the verifiers with `snarkjs zkey export solidityverifier` first; files already rewritten are kept",
        )
    })?;

    if output::is_json() {
        let items: Vec<_> = outcomes
            .iter()
            .map(|o| {
                serde_json::json!({
                    "path": o.path.display().to_string(),
                    "contract": o.contract,
                    "changed": o.changed,
                })
            })
            .collect();
        return output::json_output(serde_json::Value::Array(items));
    }

    for o in &outcomes {
        if o.changed {
            output::success(&format!("{} → contract {}", o.path.display(), o.contract));
        } else {
            output::info(&format!("{} unchanged", o.path.display()));
        }
    }
    Ok(())
}
