#[cfg(test)]
mod tests {
    use tido::libs::parser::{parse_command, parse_task_id, tokenize};

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("add buy milk"), vec!["add", "buy", "milk"]);
        assert_eq!(tokenize("  view  "), vec!["view"]);
        assert_eq!(tokenize("complete\t1"), vec!["complete", "1"]);
    }

    #[test]
    fn test_tokenize_respects_quotes() {
        assert_eq!(tokenize("add \"buy milk\""), vec!["add", "buy milk"]);
        assert_eq!(tokenize("update 1 \"new description\""), vec!["update", "1", "new description"]);
        // Quotes glue to adjacent text within the same token
        assert_eq!(tokenize("add pre\"quoted part\"post"), vec!["add", "prequoted partpost"]);
    }

    #[test]
    fn test_tokenize_empty_quotes_yield_empty_token() {
        assert_eq!(tokenize("add \"\""), vec!["add", ""]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize("add \"buy milk"), vec!["add", "buy milk"]);
    }

    #[test]
    fn test_parse_command_splits_name_and_args() {
        let (command, args) = parse_command("update 2 \"walk the dog\"").unwrap();
        assert_eq!(command, "update");
        assert_eq!(args, vec!["2", "walk the dog"]);
    }

    #[test]
    fn test_parse_command_ignores_blank_lines() {
        assert!(parse_command("").is_none());
        assert!(parse_command("   \t  ").is_none());
    }

    #[test]
    fn test_parse_task_id_accepts_positive_integers() {
        assert_eq!(parse_task_id("1"), Some(1));
        assert_eq!(parse_task_id("42"), Some(42));
        assert_eq!(parse_task_id("10"), Some(10));
    }

    #[test]
    fn test_parse_task_id_rejects_malformed_tokens() {
        assert_eq!(parse_task_id("0"), None);
        assert_eq!(parse_task_id("007"), None);
        assert_eq!(parse_task_id("-3"), None);
        assert_eq!(parse_task_id("+3"), None);
        assert_eq!(parse_task_id("1a"), None);
        assert_eq!(parse_task_id("abc"), None);
        assert_eq!(parse_task_id(""), None);
        assert_eq!(parse_task_id("1.5"), None);
        // Larger than u64 can hold
        assert_eq!(parse_task_id("999999999999999999999"), None);
    }
}
