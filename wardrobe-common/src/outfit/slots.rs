//! Coarse clothing slots

use crate::models::ClothingItem;

/// A coarse clothing role; an outfit holds at most one item per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
    Outerwear,
}

impl Slot {
    /// Slots in outfit assembly order
    pub const ALL: [Slot; 4] = [Slot::Top, Slot::Bottom, Slot::Shoes, Slot::Outerwear];

    /// Map a category label onto its slot, if it has one
    pub fn for_category(category: &str) -> Option<Slot> {
        match category {
            "shirt" | "t-shirt" | "blouse" => Some(Slot::Top),
            "pants" | "jeans" | "skirt" => Some(Slot::Bottom),
            "shoes" => Some(Slot::Shoes),
            "jacket" => Some(Slot::Outerwear),
            _ => None,
        }
    }
}

/// A wardrobe split by slot. Items whose category has no slot are dropped.
#[derive(Debug, Default)]
pub struct WardrobeSlots<'a> {
    pub tops: Vec<&'a ClothingItem>,
    pub bottoms: Vec<&'a ClothingItem>,
    pub shoes: Vec<&'a ClothingItem>,
    pub outerwear: Vec<&'a ClothingItem>,
}

impl<'a> WardrobeSlots<'a> {
    pub fn partition(items: &'a [ClothingItem]) -> Self {
        let mut slots = Self::default();
        for item in items {
            if let Some(slot) = Slot::for_category(&item.category) {
                slots.get_mut(slot).push(item);
            }
        }
        slots
    }

    pub fn get(&self, slot: Slot) -> &[&'a ClothingItem] {
        match slot {
            Slot::Top => &self.tops,
            Slot::Bottom => &self.bottoms,
            Slot::Shoes => &self.shoes,
            Slot::Outerwear => &self.outerwear,
        }
    }

    fn get_mut(&mut self, slot: Slot) -> &mut Vec<&'a ClothingItem> {
        match slot {
            Slot::Top => &mut self.tops,
            Slot::Bottom => &mut self.bottoms,
            Slot::Shoes => &mut self.shoes,
            Slot::Outerwear => &mut self.outerwear,
        }
    }

    /// True when no top, bottom or shoe is available
    pub fn lacks_basics(&self) -> bool {
        self.tops.is_empty() && self.bottoms.is_empty() && self.shoes.is_empty()
    }
}
