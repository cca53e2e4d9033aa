//! Behavioural tests for outfit generation
//!
//! Random wardrobes are built from a seeded generator so every run sees the
//! same inputs; selection is driven by separate seeded generators.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use wardrobe_common::models::PATTERN_PATTERNED;
use wardrobe_common::outfit::{check_outfit, generate, is_valid_outfit, OutfitRejection, OutfitRequest, Slot};
use wardrobe_common::{ClothingItem, WeatherReading};

const CATEGORIES: &[&str] = &[
    "shirt", "t-shirt", "blouse", "pants", "jeans", "skirt", "shoes", "jacket", "hat", "scarf",
];
const STYLES: &[&str] = &["casual", "formal", "sporty"];
const COLORS: &[&str] = &["red", "blue", "black", "white", "green"];
const SEASONS: &[&str] = &["summer", "winter", "all", "spring"];

fn item(id: i64, category: &str, style: &str, color: &str, pattern: &str) -> ClothingItem {
    ClothingItem {
        id,
        user_id: 1,
        name: format!("{} {}", color, category),
        category: category.to_string(),
        style: style.to_string(),
        color_primary: Some(color.to_string()),
        pattern: pattern.to_string(),
        ..Default::default()
    }
}

fn random_wardrobe(rng: &mut StdRng) -> Vec<ClothingItem> {
    let size = rng.gen_range(0..25);
    (0..size)
        .map(|id| {
            let mut piece = item(
                id,
                CATEGORIES.choose(rng).unwrap(),
                STYLES.choose(rng).unwrap(),
                COLORS.choose(rng).unwrap(),
                if rng.gen_bool(0.3) { PATTERN_PATTERNED } else { "solid" },
            );
            piece.season = vec![SEASONS.choose(rng).unwrap().to_string()];
            piece
        })
        .collect()
}

fn random_weather(rng: &mut StdRng) -> Option<WeatherReading> {
    if rng.gen_bool(0.25) {
        None
    } else {
        Some(WeatherReading::new(rng.gen_range(-10.0..40.0), "clear"))
    }
}

#[test]
fn test_never_more_outfits_than_limit() {
    let mut inputs = StdRng::seed_from_u64(2024);
    let mut picks = StdRng::seed_from_u64(99);

    for limit in 0..8 {
        for _ in 0..40 {
            let wardrobe = random_wardrobe(&mut inputs);
            let mut request = OutfitRequest::new("casual").with_limit(limit);
            request.weather = random_weather(&mut inputs);

            let outfits = generate(&wardrobe, &request, &mut picks);
            assert!(outfits.len() <= limit, "{} outfits for limit {}", outfits.len(), limit);
        }
    }
}

#[test]
fn test_at_most_one_item_per_slot() {
    let mut inputs = StdRng::seed_from_u64(7);
    let mut picks = StdRng::seed_from_u64(8);

    for _ in 0..200 {
        let wardrobe = random_wardrobe(&mut inputs);
        let mut request = OutfitRequest::new("formal");
        request.weather = random_weather(&mut inputs);

        for outfit in generate(&wardrobe, &request, &mut picks) {
            let mut seen = HashSet::new();
            for piece in &outfit.items {
                let slot = Slot::for_category(&piece.category).expect("unslotted item in outfit");
                assert!(seen.insert(slot), "slot {:?} used twice", slot);
            }
        }
    }
}

#[test]
fn test_outerwear_only_in_cold_weather() {
    let mut inputs = StdRng::seed_from_u64(31);
    let mut picks = StdRng::seed_from_u64(32);

    for _ in 0..200 {
        let wardrobe = random_wardrobe(&mut inputs);
        let mut request = OutfitRequest::new("casual");
        request.weather = random_weather(&mut inputs);
        let cold = request.weather.as_ref().is_some_and(|w| w.temperature < 15.0);
        let has_jacket = wardrobe.iter().any(|i| i.category == "jacket");

        for outfit in generate(&wardrobe, &request, &mut picks) {
            let wears_jacket = outfit.items.iter().any(|i| i.category == "jacket");
            if wears_jacket {
                assert!(cold && has_jacket);
            }
            if cold && has_jacket {
                assert!(wears_jacket, "cold outfit missing available outerwear");
            }
        }
    }
}

#[test]
fn test_no_basics_means_no_outfits() {
    let wardrobe = vec![
        item(1, "jacket", "casual", "black", "solid"),
        item(2, "hat", "casual", "red", "solid"),
        item(3, "scarf", "casual", "blue", PATTERN_PATTERNED),
    ];
    let request = OutfitRequest::new("casual").with_weather(WeatherReading::new(0.0, "snow"));

    let mut picks = StdRng::seed_from_u64(1);
    assert!(generate(&wardrobe, &request, &mut picks).is_empty());
    assert!(generate(&[], &OutfitRequest::default(), &mut picks).is_empty());
}

#[test]
fn test_same_color_pair_kept_once_as_fallback() {
    let wardrobe = vec![
        item(1, "shirt", "casual", "red", "solid"),
        item(2, "jeans", "casual", "red", "solid"),
    ];

    let mut ordered = wardrobe.clone();
    ordered.sort_by_key(|i| i.id);
    assert_eq!(
        check_outfit(&ordered),
        Err(OutfitRejection::ColorClash("red".to_string()))
    );

    let mut picks = StdRng::seed_from_u64(5);
    let outfits = generate(&wardrobe, &OutfitRequest::new("casual"), &mut picks);

    assert_eq!(outfits.len(), 1);
    let ids: Vec<i64> = outfits[0].items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(outfits[0].occasion, "casual");
    assert_eq!(outfits[0].weather_suitability, 1.0);
}

#[test]
fn test_pattern_clash_never_reinstated_after_fallback() {
    let wardrobe = vec![
        item(1, "shirt", "casual", "red", PATTERN_PATTERNED),
        item(2, "blouse", "casual", "green", PATTERN_PATTERNED),
        item(3, "skirt", "casual", "blue", PATTERN_PATTERNED),
    ];

    let mut picks = StdRng::seed_from_u64(17);
    let outfits = generate(&wardrobe, &OutfitRequest::new("casual").with_limit(10), &mut picks);

    // Every candidate clashes, so only the first survives as the fallback
    assert_eq!(outfits.len(), 1);
    assert!(!is_valid_outfit(&outfits[0].items));
    assert_eq!(outfits[0].items[1].id, 3);
}

#[test]
fn test_valid_outfits_fill_the_limit() {
    let wardrobe = vec![
        item(1, "shirt", "formal", "white", "solid"),
        item(2, "pants", "formal", "grey", "solid"),
        item(3, "shoes", "formal", "black", "solid"),
    ];

    let mut picks = StdRng::seed_from_u64(23);
    let outfits = generate(&wardrobe, &OutfitRequest::new("formal").with_limit(4), &mut picks);

    assert_eq!(outfits.len(), 4);
    for outfit in &outfits {
        let ids: Vec<i64> = outfit.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

#[test]
fn test_hot_weather_with_only_winter_items_still_dresses() {
    let mut top = item(1, "t-shirt", "casual", "white", "solid");
    top.season = vec!["winter".to_string()];
    let mut bottom = item(2, "jeans", "casual", "blue", "solid");
    bottom.season = vec!["winter".to_string()];
    let wardrobe = vec![top, bottom];

    let request = OutfitRequest::new("casual").with_weather(WeatherReading::new(30.0, "clear"));
    let mut picks = StdRng::seed_from_u64(3);
    let outfits = generate(&wardrobe, &request, &mut picks);

    assert_eq!(outfits.len(), request.limit);
    assert!(outfits.iter().all(|o| o.items.len() == 2));
}

#[test]
fn test_seeded_generation_is_repeatable() {
    let mut inputs = StdRng::seed_from_u64(404);
    let wardrobe: Vec<ClothingItem> = (0..6).flat_map(|_| random_wardrobe(&mut inputs)).collect();
    let request = OutfitRequest::new("casual").with_weather(WeatherReading::new(12.0, "rain"));

    let first = generate(&wardrobe, &request, &mut StdRng::seed_from_u64(77));
    let second = generate(&wardrobe, &request, &mut StdRng::seed_from_u64(77));
    assert_eq!(first, second);
}
