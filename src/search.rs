use clap::Args;
use lexitrie::Trie;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[arg(name = "WORD", required = true)]
    words: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct SearchResult<'a> {
    word: &'a str,
    found: bool,
}

pub async fn execute_search(args: SearchArgs, trie: &Trie, json: bool) -> anyhow::Result<()> {
    println!("{}", render(&search(&args.words, trie), json)?);
    Ok(())
}

fn search<'a>(words: &'a [String], trie: &Trie) -> Vec<SearchResult<'a>> {
    words
        .iter()
        .map(|word| SearchResult {
            word,
            found: trie.search_word(word),
        })
        .collect()
}

fn render(results: &[SearchResult<'_>], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(results)?);
    }

    Ok(results
        .iter()
        .map(|r| format!("{}\t{}", r.word, if r.found { "found" } else { "missing" }))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_and_render() {
        let trie: Trie = ["foo", "foobar"].into_iter().collect();
        let words = vec!["FOO".to_string(), "fooba".to_string()];
        let results = search(&words, &trie);

        assert_eq!(
            results,
            vec![
                SearchResult {
                    word: "FOO",
                    found: true
                },
                SearchResult {
                    word: "fooba",
                    found: false
                },
            ]
        );
        assert_eq!(render(&results, false).unwrap(), "FOO\tfound\nfooba\tmissing");

        let json: serde_json::Value =
            serde_json::from_str(&render(&results, true).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "word": "FOO", "found": true },
                { "word": "fooba", "found": false },
            ])
        );
    }

    #[tokio::test]
    async fn test_execute_search() {
        let trie: Trie = ["foo"].into_iter().collect();
        let args = SearchArgs {
            words: vec!["Foo".into(), "bar".into()],
        };
        assert!(execute_search(args, &trie, true).await.is_ok());
    }
}
