use anyhow::{Context, Result};
use chuckle::action::JokeAction;
use serde_json::Value;

pub fn parse_args(args: Option<&str>) -> Result<Value> {
    match args {
        Some(raw) => serde_json::from_str(raw).context("--args must be valid JSON"),
        None => Ok(Value::Object(Default::default())),
    }
}

pub async fn execute(action: &JokeAction, args: Option<String>) -> Result<()> {
    let args = parse_args(args.as_deref())?;
    tracing::debug!(%args, "invoking action");
    let result = action.invoke(&args).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
