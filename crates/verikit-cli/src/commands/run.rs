use std::path::Path;

use anyhow::Result;
use verikit_driver::config::ConfiguredRuntime;
use verikit_driver::run_suite;

use crate::config;
use crate::output;

pub async fn run(config_path: &Path, only: Option<&str>) -> Result<()> {
    let config = config::load(config_path).map_err(|e| {
        output::fail_with_hint(&format!("{e:#}"), "run `verikit config init` to create a starter config")
    })?;
    tracing::debug!(config = %config_path.display(), scenarios = config.suite.scenarios.len(), "suite config loaded");
    let scenarios = config.suite.select(only)?;
    if scenarios.is_empty() {
        output::warn(&format!("no scenarios in {}", config_path.display()));
        return Ok(());
    }
    let engine = config.suite.engine.build();

    let pb = output::spinner(&format!(
        "running {} scenario(s) on {}...",
        scenarios.len(),
        config.suite.runtime.kind()
    ));
    let report = match config.suite.runtime.build() {
        ConfiguredRuntime::Soroban(mut rt) => run_suite(&engine, &mut rt, &scenarios).await,
        ConfiguredRuntime::Foundry(mut rt) => run_suite(&engine, &mut rt, &scenarios).await,
    };
    pb.finish_and_clear();

    if output::is_json() {
        let items: Vec<_> = report
            .results
            .iter()
            .map(|(name, result)| match result {
                Ok(r) => serde_json::json!({
                    "name": name,
                    "passed": true,
                    "proof_system": r.proof_system,
                    "address": r.address,
                    "verdict": r.verdict,
                }),
                Err(e) => serde_json::json!({
                    "name": name,
                    "passed": false,
                    "error": e.to_string(),
                }),
            })
            .collect();
        output::json_output(serde_json::json!({
            "passed": report.passed(),
            "failed": report.failed(),
            "scenarios": items,
        }))?;
    } else {
        for (name, result) in &report.results {
            match result {
                Ok(r) => output::success(&format!("✓ {name} (verifier returned {})", r.verdict)),
                Err(e) => output::error_msg(&format!("✗ {name}: {e}")),
            }
        }
        output::label("passed", &report.passed().to_string());
        if report.failed() > 0 {
            output::label("failed", &report.failed().to_string());
        }
    }

    if !report.is_success() {
        anyhow::bail!("{} of {} scenario(s) failed", report.failed(), report.results.len());
    }
    Ok(())
}
