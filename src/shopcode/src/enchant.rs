//! Enchantment reference data
//!
//! Static lookup tables for enchantment display names across both
//! historical naming schemes: numeric ids (pre-1.13) and namespaced
//! `minecraft:` ids (1.13+). Unknown identifiers pass through unchanged
//! so new enchantments still render, just without a friendly name.

// ============================================================================
// Numeric ids (pre-1.13)
// ============================================================================

/// Enchantment known by its legacy numeric id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericEnchantment {
    pub id: u16,
    pub name: &'static str,
}

/// Legacy numeric enchantment ids. The id space is sparse by design.
pub const NUMERIC_ENCHANTMENTS: &[NumericEnchantment] = &[
    NumericEnchantment {
        id: 0,
        name: "Protection",
    },
    NumericEnchantment {
        id: 1,
        name: "Fire Protection",
    },
    NumericEnchantment {
        id: 2,
        name: "Feather Falling",
    },
    NumericEnchantment {
        id: 3,
        name: "Blast Protection",
    },
    NumericEnchantment {
        id: 4,
        name: "Projectile Protection",
    },
    NumericEnchantment {
        id: 5,
        name: "Respiration",
    },
    NumericEnchantment {
        id: 6,
        name: "Aqua Affinity",
    },
    NumericEnchantment {
        id: 7,
        name: "Thorns",
    },
    NumericEnchantment {
        id: 8,
        name: "Depth Strider",
    },
    NumericEnchantment {
        id: 9,
        name: "Frost Walker",
    },
    NumericEnchantment {
        id: 10,
        name: "Curse of Binding",
    },
    NumericEnchantment {
        id: 16,
        name: "Sharpness",
    },
    NumericEnchantment {
        id: 17,
        name: "Smite",
    },
    NumericEnchantment {
        id: 18,
        name: "Bane of Arthropods",
    },
    NumericEnchantment {
        id: 19,
        name: "Knockback",
    },
    NumericEnchantment {
        id: 20,
        name: "Fire Aspect",
    },
    NumericEnchantment {
        id: 21,
        name: "Looting",
    },
    NumericEnchantment {
        id: 22,
        name: "Sweeping Edge",
    },
    NumericEnchantment {
        id: 32,
        name: "Efficiency",
    },
    NumericEnchantment {
        id: 33,
        name: "Silk Touch",
    },
    NumericEnchantment {
        id: 34,
        name: "Unbreaking",
    },
    NumericEnchantment {
        id: 35,
        name: "Fortune",
    },
    NumericEnchantment {
        id: 48,
        name: "Power",
    },
    NumericEnchantment {
        id: 49,
        name: "Punch",
    },
    NumericEnchantment {
        id: 50,
        name: "Flame",
    },
    NumericEnchantment {
        id: 51,
        name: "Infinity",
    },
    NumericEnchantment {
        id: 61,
        name: "Luck of the Sea",
    },
    NumericEnchantment {
        id: 62,
        name: "Lure",
    },
    NumericEnchantment {
        id: 70,
        name: "Mending",
    },
    NumericEnchantment {
        id: 71,
        name: "Curse of Vanishing",
    },
];

/// Get an enchantment display name by legacy numeric id
pub fn enchantment_by_id(id: u16) -> Option<&'static str> {
    NUMERIC_ENCHANTMENTS
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name)
}

// ============================================================================
// Namespaced ids (1.13+)
// ============================================================================

/// Enchantment known by its namespaced id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedEnchantment {
    pub key: &'static str,
    pub name: &'static str,
}

/// Namespaced enchantment ids. Note the internal names that differ from
/// the display names: `binding_curse`, `vanishing_curse`, and `sweeping`.
pub const NAMESPACED_ENCHANTMENTS: &[NamespacedEnchantment] = &[
    NamespacedEnchantment {
        key: "minecraft:protection",
        name: "Protection",
    },
    NamespacedEnchantment {
        key: "minecraft:fire_protection",
        name: "Fire Protection",
    },
    NamespacedEnchantment {
        key: "minecraft:feather_falling",
        name: "Feather Falling",
    },
    NamespacedEnchantment {
        key: "minecraft:blast_protection",
        name: "Blast Protection",
    },
    NamespacedEnchantment {
        key: "minecraft:projectile_protection",
        name: "Projectile Protection",
    },
    NamespacedEnchantment {
        key: "minecraft:respiration",
        name: "Respiration",
    },
    NamespacedEnchantment {
        key: "minecraft:aqua_affinity",
        name: "Aqua Affinity",
    },
    NamespacedEnchantment {
        key: "minecraft:thorns",
        name: "Thorns",
    },
    NamespacedEnchantment {
        key: "minecraft:depth_strider",
        name: "Depth Strider",
    },
    NamespacedEnchantment {
        key: "minecraft:frost_walker",
        name: "Frost Walker",
    },
    NamespacedEnchantment {
        key: "minecraft:binding_curse",
        name: "Curse of Binding",
    },
    NamespacedEnchantment {
        key: "minecraft:soul_speed",
        name: "Soul Speed",
    },
    NamespacedEnchantment {
        key: "minecraft:swift_sneak",
        name: "Swift Sneak",
    },
    NamespacedEnchantment {
        key: "minecraft:sharpness",
        name: "Sharpness",
    },
    NamespacedEnchantment {
        key: "minecraft:smite",
        name: "Smite",
    },
    NamespacedEnchantment {
        key: "minecraft:bane_of_arthropods",
        name: "Bane of Arthropods",
    },
    NamespacedEnchantment {
        key: "minecraft:knockback",
        name: "Knockback",
    },
    NamespacedEnchantment {
        key: "minecraft:fire_aspect",
        name: "Fire Aspect",
    },
    NamespacedEnchantment {
        key: "minecraft:looting",
        name: "Looting",
    },
    NamespacedEnchantment {
        key: "minecraft:sweeping",
        name: "Sweeping Edge",
    },
    NamespacedEnchantment {
        key: "minecraft:efficiency",
        name: "Efficiency",
    },
    NamespacedEnchantment {
        key: "minecraft:silk_touch",
        name: "Silk Touch",
    },
    NamespacedEnchantment {
        key: "minecraft:unbreaking",
        name: "Unbreaking",
    },
    NamespacedEnchantment {
        key: "minecraft:fortune",
        name: "Fortune",
    },
    NamespacedEnchantment {
        key: "minecraft:power",
        name: "Power",
    },
    NamespacedEnchantment {
        key: "minecraft:punch",
        name: "Punch",
    },
    NamespacedEnchantment {
        key: "minecraft:flame",
        name: "Flame",
    },
    NamespacedEnchantment {
        key: "minecraft:infinity",
        name: "Infinity",
    },
    NamespacedEnchantment {
        key: "minecraft:luck_of_the_sea",
        name: "Luck of the Sea",
    },
    NamespacedEnchantment {
        key: "minecraft:lure",
        name: "Lure",
    },
    NamespacedEnchantment {
        key: "minecraft:mending",
        name: "Mending",
    },
    NamespacedEnchantment {
        key: "minecraft:vanishing_curse",
        name: "Curse of Vanishing",
    },
    NamespacedEnchantment {
        key: "minecraft:riptide",
        name: "Riptide",
    },
    NamespacedEnchantment {
        key: "minecraft:channeling",
        name: "Channeling",
    },
    NamespacedEnchantment {
        key: "minecraft:impaling",
        name: "Impaling",
    },
    NamespacedEnchantment {
        key: "minecraft:loyalty",
        name: "Loyalty",
    },
    NamespacedEnchantment {
        key: "minecraft:multishot",
        name: "Multishot",
    },
    NamespacedEnchantment {
        key: "minecraft:piercing",
        name: "Piercing",
    },
    NamespacedEnchantment {
        key: "minecraft:quick_charge",
        name: "Quick Charge",
    },
    NamespacedEnchantment {
        key: "minecraft:breach",
        name: "Breach",
    },
];

/// Get an enchantment display name by namespaced id
pub fn enchantment_by_key(key: &str) -> Option<&'static str> {
    NAMESPACED_ENCHANTMENTS
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.name)
}

/// Resolve any stringified enchantment identifier to a display name.
///
/// Numeric strings hit the legacy table, everything else the namespaced
/// table. Unknown identifiers are returned unchanged.
pub fn enchantment_name(identifier: &str) -> &str {
    if let Ok(id) = identifier.parse::<u16>() {
        if let Some(name) = enchantment_by_id(id) {
            return name;
        }
    }
    enchantment_by_key(identifier).unwrap_or(identifier)
}

// ============================================================================
// Levels
// ============================================================================

/// Roman numerals for enchantment levels 1-10
pub const ROMAN_NUMERALS: &[&str] = &["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Format an enchantment level.
///
/// Levels 1-10 render as Roman numerals; anything else falls back to the
/// decimal form.
pub fn level_numeral(level: i64) -> String {
    if (1..=10).contains(&level) {
        ROMAN_NUMERALS[(level - 1) as usize].to_string()
    } else {
        level.to_string()
    }
}
