//! update-words: merge words.json into words.txt in the current directory

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
