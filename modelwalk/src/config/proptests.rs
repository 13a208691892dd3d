//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, SegmentCacheConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn segment_cache_strategy() -> impl Strategy<Value = SegmentCacheConfig> {
    prop_oneof![
        Just(SegmentCacheConfig::Unbounded),
        (1usize..100_000).prop_map(|capacity| SegmentCacheConfig::Lru { capacity }),
    ]
}

// Strategy for generating valid configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[A-Z_]{1,20}"),
        prop::option::of("[@+!~]{1,3}"),
        prop::option::of(segment_cache_strategy()),
        prop::option::of(1usize..100_000),
    )
        .prop_map(|(virtual_root_key, view_marker, segment_cache, path_cache_capacity)| Config {
            virtual_root_key,
            view_marker,
            segment_cache,
            path_cache_capacity,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields keep the lower value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.virtual_root_key.as_ref(), high.virtual_root_key.as_ref().or(low.virtual_root_key.as_ref()));
        prop_assert_eq!(result.view_marker.as_ref(), high.view_marker.as_ref().or(low.view_marker.as_ref()));
        prop_assert_eq!(result.segment_cache, high.segment_cache.or(low.segment_cache));
        prop_assert_eq!(result.path_cache_capacity, high.path_cache_capacity.or(low.path_cache_capacity));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Generated configs validate and survive a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        ConfigValidator::validate(&config).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
