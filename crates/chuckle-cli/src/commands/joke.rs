use anyhow::Result;
use chuckle::models::query::{Category, JokeQuery, Language};
use chuckle::providers::base::JokeProvider;

pub async fn execute(
    provider: &dyn JokeProvider,
    language: Language,
    category: Category,
) -> Result<()> {
    let joke = provider
        .get_joke(&JokeQuery::new(language, category))
        .await?;
    println!("{}", joke);
    Ok(())
}
