//! services/web/src/bin/openapi.rs
//!
//! Dumps the OpenAPI document for the invitation endpoints.
//!
//! Usage: `openapi [OUTPUT]`. Writes to `openapi.json` when no path is given,
//! or to stdout when the path is `-`.

use std::io::Write;
use utoipa::OpenApi;
use web_lib::web::rest::ApiDoc;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let document = ApiDoc::openapi().to_pretty_json()?;

    if output == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        std::fs::write(&output, document)?;
        eprintln!("Wrote invitation API document to {}", output);
    }
    Ok(())
}
