use clap::Args;
use lexitrie::Trie;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only print how many words are stored.
    #[arg(short, long)]
    count: bool,
}

pub async fn execute_list(args: ListArgs, trie: &Trie, json: bool) -> anyhow::Result<()> {
    println!("{}", render(&trie.all_words(), args.count, json)?);
    Ok(())
}

fn render(words: &[String], count: bool, json: bool) -> anyhow::Result<String> {
    Ok(match (count, json) {
        (true, true) => serde_json::json!({ "count": words.len() }).to_string(),
        (true, false) => words.len().to_string(),
        (false, true) => serde_json::to_string_pretty(words)?,
        (false, false) => words.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let trie: Trie = ["Bar", "baz", "foo"].into_iter().collect();
        let words = trie.all_words();

        assert_eq!(render(&words, false, false).unwrap(), "bar\nbaz\nfoo");
        assert_eq!(render(&words, true, false).unwrap(), "3");
        assert_eq!(render(&words, true, true).unwrap(), r#"{"count":3}"#);
        assert_eq!(
            serde_json::from_str::<Vec<String>>(&render(&words, false, true).unwrap()).unwrap(),
            vec!["bar", "baz", "foo"]
        );
    }

    #[tokio::test]
    async fn test_execute_list() {
        let trie: Trie = ["thud"].into_iter().collect();
        let args = ListArgs { count: true };
        assert!(execute_list(args, &trie, false).await.is_ok());
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], false, false).unwrap(), "");
        assert_eq!(render(&[], true, false).unwrap(), "0");
    }
}
