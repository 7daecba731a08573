use std::path::Path;

use anyhow::Result;
use verikit_driver::config::RuntimeConfig;

use crate::config::{self, mask, Config};
use crate::output;

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(output::fail_with_hint(
            &format!("{} already exists", path.display()),
            "use --force to overwrite",
        ));
    }
    config::save(path, &Config::starter())?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "written": path.display().to_string() }))
    } else {
        output::success(&format!("wrote {}", path.display()));
        output::info("start anvil and compile the circuits, then run `verikit run`");
        Ok(())
    }
}

pub fn show(path: &Path) -> Result<()> {
    let mut config = config::load(path).map_err(|e| {
        output::fail_with_hint(&format!("{e:#}"), "run `verikit config init` to create a starter config")
    })?;
    if let RuntimeConfig::Foundry { private_key, .. } = &mut config.suite.runtime {
        *private_key = mask(private_key);
    }

    if output::is_json() {
        return output::json_output(serde_json::to_value(&config)?);
    }

    output::label("config", &path.display().to_string());
    output::label("runtime", config.suite.runtime.kind());
    if let RuntimeConfig::Foundry { rpc_url, private_key } = &config.suite.runtime {
        output::label("rpc_url", rpc_url);
        output::label("private_key", private_key);
    }
    let verikit_driver::config::EngineConfig::Snarkjs { binary } = &config.suite.engine;
    output::label("engine", &format!("snarkjs ({binary})"));
    output::label("scenarios", &config.suite.scenarios.len().to_string());
    for s in &config.suite.scenarios {
        let expect = if s.expect.verdict() { "accept" } else { "reject" };
        output::info(&format!("  {} [{}, {}]", s.name, s.proof_system, expect));
    }
    output::label("pragma", &config.templater.pragma);
    output::label("verifier sources", &config.templater.files.join(", "));
    Ok(())
}
