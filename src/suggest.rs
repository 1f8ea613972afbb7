use clap::Args;
use lexitrie::Trie;
use serde::Serialize;
use tracing::debug;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[arg(name = "PREFIX")]
    prefix: String,
    /// Stop after this many suggestions.
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Serialize, Debug)]
struct Suggestions<'a> {
    prefix: &'a str,
    suggestions: &'a [String],
}

pub async fn execute_suggest(args: SuggestArgs, trie: &Trie, json: bool) -> anyhow::Result<()> {
    let mut suggestions = trie.suggest_word(&args.prefix)?;
    debug!("{} suggestions for {:?}", suggestions.len(), args.prefix);
    if let Some(limit) = args.limit {
        suggestions.truncate(limit);
    }

    println!("{}", render(&args.prefix, &suggestions, json)?);
    Ok(())
}

fn render(prefix: &str, suggestions: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&Suggestions {
            prefix,
            suggestions,
        })?);
    }
    Ok(suggestions.join("\n"))
}
