#[cfg(test)]
mod tests {
    use crate::errors::FetchError;
    use crate::loader::{build_listing, load_listing, parse_resource_id, CatalogLoader, IndexPolicy};
    use crate::tests::common::{resource, starter_source, FakeSource};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{CatalogEntry, NamedResource, ResourceList};

    #[rstest]
    #[case("https://pokeapi.co/api/v2/pokemon/25/", Some(25))]
    #[case("https://pokeapi.co/api/v2/pokemon/10143/", Some(10143))]
    #[case("https://pokeapi.co/api/v2/pokemon/", None)]
    #[case("https://pokeapi.co/api/v2/pokemon/pikachu/", None)]
    #[case("", None)]
    fn test_parse_resource_id(#[case] url: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_resource_id(url), expected);
    }

    #[test]
    fn test_positional_and_url_indices_differ_after_gaps() {
        let list = ResourceList {
            count: 3,
            results: vec![resource("bulbasaur", 1), resource("charmander", 4), resource("pikachu", 25)],
        };

        let positional = build_listing(&list, IndexPolicy::Positional);
        let by_url = build_listing(&list, IndexPolicy::ResourceUrl);

        assert_eq!(
            positional.entries(),
            &[
                CatalogEntry::new("bulbasaur", 1),
                CatalogEntry::new("charmander", 2),
                CatalogEntry::new("pikachu", 3),
            ]
        );
        assert_eq!(
            by_url.iter().map(|e| e.sequence_index).collect::<Vec<_>>(),
            vec![1, 4, 25]
        );
    }

    #[test]
    fn test_unparsable_url_falls_back_to_position() {
        let list = ResourceList {
            count: 2,
            results: vec![
                resource("bulbasaur", 1),
                NamedResource {
                    name: "oddity".into(),
                    url: "not a url".into(),
                },
            ],
        };
        let listing = build_listing(&list, IndexPolicy::ResourceUrl);
        assert_eq!(listing.entries()[1], CatalogEntry::new("oddity", 2));
    }

    #[tokio::test]
    async fn test_load_listing_preserves_order_and_respects_limit() {
        let source = starter_source();
        let listing = load_listing(&source, 3, IndexPolicy::Positional).await.unwrap();

        let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "charmander"]);
    }

    #[tokio::test]
    async fn test_load_listing_surfaces_fetch_errors() {
        let source = FakeSource::new();
        let result = load_listing(&source, 1000, IndexPolicy::Positional).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_loader_fetches_once_per_session() {
        let source = starter_source().into_arc();
        let loader = CatalogLoader::new(source.clone(), 1000, IndexPolicy::Positional);

        assert!(loader.loaded().is_none());
        let first_len = loader.listing().await.len();
        let second_len = loader.listing().await.len();

        assert_eq!(first_len, 6);
        assert_eq!(second_len, 6);
        assert_eq!(source.listing_calls(), 1);
        assert!(loader.loaded().is_some());
    }

    #[tokio::test]
    async fn test_failed_load_degrades_to_empty_without_retry() {
        let source = FakeSource::new().into_arc();
        let loader = CatalogLoader::new(source.clone(), 1000, IndexPolicy::Positional);

        assert!(loader.listing().await.is_empty());
        assert!(loader.listing().await.is_empty());
        assert_eq!(source.listing_calls(), 1);
    }
}
