//! Bindings for running the solver from JavaScript.

use wasm_bindgen::prelude::*;

use crate::Lab;

/// Parse `input` and return `[visited cells, loop-inducing obstructions]`.
///
/// Failures are thrown as a JavaScript `Error` carrying the message of the underlying [`Error`](crate::Error).
#[wasm_bindgen]
pub fn solve(input: &str) -> Result<Box<[u32]>, JsValue> {
    let answers = input.parse::<Lab>()
        .and_then(|lab| Ok([lab.patrol()?.visited.len(), lab.count_loop_inducing_obstructions()?]))
        .map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))?;

    Ok(answers.map(|answer| answer as u32).into())
}
