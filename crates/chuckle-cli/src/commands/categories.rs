use anyhow::Result;
use chuckle::models::query::{Category, Language};
use console::style;
use strum::IntoEnumIterator;

pub fn execute() -> Result<()> {
    println!("{}", style("Categories").bold());
    for category in Category::iter() {
        println!("  {}", category);
    }
    println!("{}", style("Languages").bold());
    for language in Language::iter() {
        println!("  {}", language);
    }
    Ok(())
}
