#[cfg(test)]
mod tests {
    use crate::detail::DetailState;
    use crate::errors::{FetchError, LookupError};
    use crate::lookup_interface::{
        display_detail_state, display_lookup_error, display_suggestions, handle_page_command,
        handle_search_command, CommandOutcome,
    };
    use crate::matcher::SuggestionRule;
    use crate::navigation::CanonicalKey;
    use crate::session::{PageKind, PageSession};
    use crate::tests::common::{pikachu_and_pichu, starter_source, test_config, FakeSource};
    use pretty_assertions::assert_eq;

    fn output(outcome: CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Output(text) => text,
            other => panic!("expected text output, got {:?}", other),
        }
    }

    #[test]
    fn test_search_lists_numbered_rows_with_sprites() {
        let text = handle_search_command(&pikachu_and_pichu(), "pi", SuggestionRule::HOME);
        assert_eq!(
            text,
            "Suggestions for 'pi':\n\
             \x20 1. pikachu https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png\n\
             \x20 2. pichu https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/172.png\n"
        );
    }

    #[test]
    fn test_search_messages_for_blank_and_unmatched_queries() {
        assert_eq!(
            display_suggestions("  ", &[]),
            "Start typing a name to see suggestions."
        );
        let text = handle_search_command(&pikachu_and_pichu(), "chu", SuggestionRule::DETAIL);
        assert_eq!(text, "No suggestions for 'chu'.");
    }

    #[test]
    fn test_detail_state_messages() {
        let key = CanonicalKey::new("missingno").unwrap();
        assert_eq!(display_detail_state(Some(&key), &DetailState::Loading), "Loading...");
        assert_eq!(
            display_detail_state(
                Some(&key),
                &DetailState::Failed(FetchError::NotFound("missingno".into()))
            ),
            "No Pokemon named 'missingno' was found."
        );
        assert_eq!(
            display_detail_state(
                Some(&key),
                &DetailState::Failed(FetchError::Status {
                    status: 500,
                    url: "https://pokeapi.co/api/v2/pokemon/missingno".into()
                })
            ),
            "Could not load 'missingno': Unexpected status 500 from https://pokeapi.co/api/v2/pokemon/missingno"
        );
    }

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(
            display_lookup_error(&LookupError::StaleResponse { token: 1, current: 2 }),
            "That request was superseded by a newer one."
        );
        assert_eq!(
            display_lookup_error(&LookupError::MissingParameter("p2")),
            "Error: Missing parameter: p2"
        );
    }

    #[tokio::test]
    async fn test_type_then_pick_opens_detail() {
        let source = starter_source().into_arc();
        let mut page = PageSession::home(source, &test_config());

        let listed = output(handle_page_command(&mut page, "type pik").await);
        assert!(listed.contains("1. pikachu"));

        let opened = output(handle_page_command(&mut page, "pick 1").await);
        assert!(opened.starts_with("/pokemon/pikachu\n--- Pokemon Details ---\npikachu (#025)"));
        assert_eq!(page.query(), "");
    }

    #[tokio::test]
    async fn test_go_with_unknown_name_reports_not_found() {
        let source = FakeSource::new().into_arc();
        let mut page = PageSession::home(source, &test_config());

        let text = output(handle_page_command(&mut page, "go MissingNo").await);
        assert_eq!(text, "/pokemon/missingno\nNo Pokemon named 'missingno' was found.");
    }

    #[tokio::test]
    async fn test_open_route_and_bad_input() {
        let source = starter_source().into_arc();
        let mut page = PageSession::detail(source, &test_config());

        let opened = output(handle_page_command(&mut page, "open /pokemon/bulbasaur").await);
        assert!(opened.contains("bulbasaur (#001)"));

        let bad_route = output(handle_page_command(&mut page, "open /compare").await);
        assert_eq!(bad_route, "'/compare' is not a detail route.");

        let bad_pick = output(handle_page_command(&mut page, "pick zero").await);
        assert_eq!(bad_pick, "Invalid suggestion number. Please use a number.");

        let empty_pick = output(handle_page_command(&mut page, "pick 0").await);
        assert_eq!(empty_pick, "No suggestion at that position.");
    }

    #[tokio::test]
    async fn test_page_and_quit_commands() {
        let source = starter_source().into_arc();
        let mut page = PageSession::home(source, &test_config());

        assert_eq!(
            handle_page_command(&mut page, "page detail").await,
            CommandOutcome::SwitchPage(PageKind::Detail)
        );
        assert_eq!(handle_page_command(&mut page, "QUIT").await, CommandOutcome::Quit);
        assert!(output(handle_page_command(&mut page, "dance").await).starts_with("Unknown command"));
    }
}
