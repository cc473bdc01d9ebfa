//! Print the OpenAPI document as pretty JSON.

use color_eyre::eyre::Result;
use user_service::ApiDoc;
use utoipa::OpenApi;

#[expect(clippy::print_stdout, reason = "the document is written to stdout")]
fn main() -> Result<()> {
    color_eyre::install()?;
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
