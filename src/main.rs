// climb: evaluates the built-in reference expression and prints the result

use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use climb::interpreter::evaluate;
use climb::parser::parse;
use climb::REFERENCE_EXPRESSION;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the result.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let expr = parse(REFERENCE_EXPRESSION)
        .with_context(|| format!("failed to parse '{}'", REFERENCE_EXPRESSION))?;

    let result = evaluate(&expr)
        .with_context(|| format!("failed to evaluate '{}'", REFERENCE_EXPRESSION))?;

    println!("{}", result);

    Ok(())
}
