use anyhow::Result;
use verikit_calldata::field::to_decimal;
use verikit_calldata::{FieldElement, ProofSystem, VerifierInput};

use crate::output;

fn list(values: &[FieldElement]) -> String {
    values.iter().map(to_decimal).collect::<Vec<_>>().join(", ")
}

/// Labelled lines for the human-readable view.
fn rows(input: &VerifierInput) -> Vec<(&'static str, String)> {
    let mut rows = vec![("system", input.proof_system().as_str().to_string())];
    match input {
        VerifierInput::Groth16 { a, b, c, public_inputs } => {
            rows.push(("a", list(a)));
            rows.push(("b[0]", list(&b[0])));
            rows.push(("b[1]", list(&b[1])));
            rows.push(("c", list(c)));
            rows.push(("public inputs", list(public_inputs)));
        }
        VerifierInput::Plonk { proof, public_inputs } => {
            rows.push(("proof", proof.clone()));
            rows.push(("public inputs", list(public_inputs)));
        }
    }
    rows
}

pub fn run(system: ProofSystem, calldata: &str) -> Result<()> {
    let input = system.adapt(calldata).map_err(|e| {
        output::fail_with_hint(
            &format!("cannot adapt {system} calldata: {e}"),
            "pass the output of `snarkjs zkey export soliditycalldata` verbatim",
        )
    })?;

    if output::is_json() {
        return output::json_output(input.to_json());
    }

    for (key, value) in rows(&input) {
        output::label(key, &value);
    }
    Ok(())
}
