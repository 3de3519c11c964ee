//! Tests for completion/excmd_source

use super::*;

#[tokio::test]
async fn test_single_word_filters_by_prefix() {
    let source = ExcmdSource::with_defaults(20);

    source.filter("tab").await.unwrap();

    assert_eq!(source.state(), SourceState::Normal);
    assert_eq!(source.options(), vec!["tabclose", "tabopen"]);
    assert!(source.completion().is_none());
}

#[tokio::test]
async fn test_empty_input_lists_all_commands() {
    let source = ExcmdSource::with_defaults(100);

    source.filter("").await.unwrap();

    assert_eq!(source.options().len(), DEFAULT_EXCMDS.len());
}

#[tokio::test]
async fn test_argument_hides_source() {
    let source = ExcmdSource::with_defaults(20);
    source.filter("open").await.unwrap();

    source.filter("open example").await.unwrap();

    assert_eq!(source.state(), SourceState::Hidden);
    assert!(source.options().is_empty());
}

#[tokio::test]
async fn test_results_are_capped() {
    let source = ExcmdSource::with_defaults(3);

    source.filter("").await.unwrap();

    assert_eq!(source.options(), vec!["back", "bind", "buffer"]);
}

#[tokio::test]
async fn test_next_selects_completion() {
    let source = ExcmdSource::new(vec!["set".into(), "source".into()], 20);
    source.filter("s").await.unwrap();

    source.next();
    assert_eq!(source.completion().as_deref(), Some("set"));
    source.next();
    assert_eq!(source.completion().as_deref(), Some("source"));
    source.prev();
    assert_eq!(source.completion().as_deref(), Some("set"));

    source.clear_completion();
    assert!(source.completion().is_none());
}
