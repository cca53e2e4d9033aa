//! Per-slot item selection and outfit assembly

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::rules::check_outfit;
use super::slots::{Slot, WardrobeSlots};
use super::{Outfit, OutfitRequest};
use crate::models::{ClothingItem, WeatherReading};

/// Above this temperature only summer items are preferred
pub const SUMMER_MIN_TEMPERATURE: f64 = 25.0;
/// Below this temperature only winter items are preferred
pub const WINTER_MAX_TEMPERATURE: f64 = 10.0;
/// Outerwear is added only below this temperature
pub const OUTERWEAR_MAX_TEMPERATURE: f64 = 15.0;

fn suits_temperature(item: &ClothingItem, temperature: f64) -> bool {
    if temperature > SUMMER_MIN_TEMPERATURE {
        item.has_season("summer")
    } else if temperature < WINTER_MAX_TEMPERATURE {
        item.has_season("winter")
    } else {
        (WINTER_MAX_TEMPERATURE..=SUMMER_MIN_TEMPERATURE).contains(&temperature)
    }
}

/// Pick one item from a slot's candidates.
///
/// Candidates whose style equals `occasion` are preferred, falling back to
/// the whole slot when none match. With a weather reading the survivors are
/// narrowed by season; an empty result there falls back to the
/// occasion-filtered set. The final pick is uniform over what is left.
///
/// Returns `None` only when `candidates` is empty.
pub fn select_item<'a, R: Rng + ?Sized>(
    candidates: &[&'a ClothingItem],
    occasion: &str,
    weather: Option<&WeatherReading>,
    rng: &mut R,
) -> Option<&'a ClothingItem> {
    let mut pool: Vec<&'a ClothingItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.style == occasion)
        .collect();
    if pool.is_empty() {
        pool = candidates.to_vec();
    }

    if let Some(weather) = weather {
        let seasonal: Vec<&'a ClothingItem> = pool
            .iter()
            .copied()
            .filter(|item| suits_temperature(item, weather.temperature))
            .collect();
        if !seasonal.is_empty() {
            return seasonal.choose(rng).copied();
        }
    }

    pool.choose(rng).copied()
}

/// What the accumulator did with an offered outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted,
    /// Rejected by the rules but kept because nothing was accepted yet
    Fallback,
    Rejected,
}

/// Running result list for one generation run.
///
/// Valid outfits are always kept. A rejected outfit with at least one item
/// is kept only while the list is still empty, so small wardrobes get one
/// answer instead of none.
#[derive(Debug, Default)]
pub struct OutfitAccumulator {
    outfits: Vec<Outfit>,
}

impl OutfitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, outfit: Outfit) -> Offer {
        match check_outfit(&outfit.items) {
            Ok(()) => {
                self.outfits.push(outfit);
                Offer::Accepted
            }
            Err(reason) if self.outfits.is_empty() && !outfit.items.is_empty() => {
                debug!(%reason, "Keeping rejected outfit as fallback");
                self.outfits.push(outfit);
                Offer::Fallback
            }
            Err(reason) => {
                debug!(%reason, "Outfit rejected");
                Offer::Rejected
            }
        }
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    pub fn into_outfits(self) -> Vec<Outfit> {
        self.outfits
    }
}

fn wants_outerwear(weather: Option<&WeatherReading>) -> bool {
    weather.is_some_and(|w| w.temperature < OUTERWEAR_MAX_TEMPERATURE)
}

/// Generate up to `request.limit` outfits from `items`.
///
/// The loop always runs `limit` times; rejected candidates simply leave the
/// result shorter. A wardrobe without tops, bottoms and shoes yields no
/// outfits. Repeated calls with a fresh random source may differ.
pub fn generate<R: Rng + ?Sized>(
    items: &[ClothingItem],
    request: &OutfitRequest,
    rng: &mut R,
) -> Vec<Outfit> {
    let slots = WardrobeSlots::partition(items);
    let weather = request.weather.as_ref();
    let with_outerwear = wants_outerwear(weather);

    // A jacket on its own is not an outfit, not even as a fallback
    if slots.lacks_basics() {
        debug!(items = items.len(), "No tops, bottoms or shoes to build outfits from");
        return Vec::new();
    }

    let mut accumulator = OutfitAccumulator::new();
    for _ in 0..request.limit {
        let mut outfit = Outfit::new(request.occasion.clone());

        for slot in Slot::ALL {
            if slot == Slot::Outerwear && !with_outerwear {
                continue;
            }
            if let Some(item) = select_item(slots.get(slot), &request.occasion, weather, rng) {
                outfit.items.push(item.clone());
            }
        }

        accumulator.offer(outfit);
    }

    debug!(
        occasion = %request.occasion,
        requested = request.limit,
        produced = accumulator.len(),
        "Outfit generation finished"
    );

    accumulator.into_outfits()
}
