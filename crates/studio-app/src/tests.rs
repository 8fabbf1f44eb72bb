#[cfg(test)]
mod tests {
    use crate::handle::*;
    use studio_core::generation::GenerationOutcome;
    use studio_core::ports::KvStore;
    use studio_platform::storage::MemoryStore;
    use studio_types::asset::{Asset, AssetKind};
    use studio_types::config::{StorageBackendType, StudioConfig};
    use studio_types::studio::{AspectRatio, Studio};

    // ─── Config persistence ──────────────────────────────────

    #[test]
    fn test_restore_config_absent_is_default() {
        let store = MemoryStore::new();
        assert_eq!(restore_config(&store), StudioConfig::default());
    }

    #[test]
    fn test_save_then_restore_config() {
        let store = MemoryStore::new();
        let mut config = StudioConfig::default();
        config.archive.capacity = 24;
        config.storage.backend = StorageBackendType::Memory;
        save_config(&store, &config);
        assert!(store.contains(CONFIG_STORAGE_KEY).unwrap());
        assert_eq!(restore_config(&store), config);
    }

    #[test]
    fn test_restore_corrupt_config_is_default() {
        let store = MemoryStore::new();
        store.set(CONFIG_STORAGE_KEY, "{{{").unwrap();
        assert_eq!(restore_config(&store), StudioConfig::default());
    }

    // ─── Request / outcome shapes ────────────────────────────

    #[test]
    fn test_generate_args_camel_case() {
        let args: GenerateArgs = serde_json::from_str(
            r#"{"studio":"Image","prompt":"a temple","modifier":"Madhubani","aspectRatio":"3:4","quantity":2}"#,
        )
        .unwrap();
        let request = args.into_request();
        assert_eq!(request.studio, Studio::Image);
        assert_eq!(request.aspect_ratio, Some(AspectRatio::Portrait));
        assert_eq!(request.quantity, 2);
        assert!(request.expanded_prompt().contains("Madhubani"));
    }

    #[test]
    fn test_generate_args_defaults() {
        let args: GenerateArgs =
            serde_json::from_str(r#"{"studio":"Wish","prompt":"a dream"}"#).unwrap();
        let request = args.into_request();
        assert_eq!(request.quantity, 1);
        assert!(request.modifier.is_none());
        assert!(request.aspect_ratio.is_none());
    }

    #[test]
    fn test_generate_args_bad_ratio_rejected() {
        let result: Result<GenerateArgs, _> =
            serde_json::from_str(r#"{"studio":"Image","prompt":"x","aspectRatio":"2:1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_outcome_view_shape() {
        let outcome = GenerationOutcome {
            assets: vec![Asset::from_parts("a", AssetKind::Anime, "u", "p", 5)],
            credits_spent: 10,
            interrupted: false,
        };
        let json = serde_json::to_value(OutcomeView::from(outcome)).unwrap();
        assert_eq!(json["creditsSpent"], 10);
        assert_eq!(json["interrupted"], false);
        assert_eq!(json["assets"][0]["type"], "ANIME");
    }
}
