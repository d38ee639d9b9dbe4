//! Particle kind registry
//!
//! Every material is a `ParticleKind` plus one row of static metadata in
//! `KIND_DATA`. Ids are stable `u8`s so they can cross the JS boundary
//! unchanged (the renderer and brush UI only ever see the number).

use serde::{Deserialize, Serialize};

pub type KindId = u8;

/// Material category - decides which behavior runs for a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Empty,
    StaticSolid,
    DynamicSolid,
    Liquid,
    Gas,
}

impl Category {
    /// Liquids and gases can be displaced by denser movers.
    #[inline]
    pub fn is_fluid(self) -> bool {
        matches!(self, Category::Liquid | Category::Gas)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ParticleKind {
    Empty = 0,
    Sand = 1,
    WetSand = 2,
    Dirt = 3,
    Grass = 4,
    Water = 5,
    Silt = 6,
    Oil = 7,
    Steam = 8,
}

pub const KIND_COUNT: usize = 9;

pub const ALL_KINDS: [ParticleKind; KIND_COUNT] = [
    ParticleKind::Empty,
    ParticleKind::Sand,
    ParticleKind::WetSand,
    ParticleKind::Dirt,
    ParticleKind::Grass,
    ParticleKind::Water,
    ParticleKind::Silt,
    ParticleKind::Oil,
    ParticleKind::Steam,
];

/// Static per-kind metadata.
#[derive(Debug, Clone, Copy)]
pub struct KindProps {
    pub name: &'static str,
    /// Base color, ABGR packed (little-endian bytes are RGBA for canvas upload)
    pub color: u32,
    /// Percent chance a brush cell actually receives this kind
    pub brush_density: u8,
    pub category: Category,
    pub density: f32,
    /// Max horizontal reach per tick (liquids and gases)
    pub dispersion: u8,
    pub default_temp: f32,
    /// (boiling point, gas form) for liquids that can evaporate
    pub boils_to: Option<(f32, ParticleKind)>,
    /// (condensation point, liquid form) for gases that can condense
    pub condenses_to: Option<(f32, ParticleKind)>,
    pub slides_diagonally: bool,
}

const fn abgr(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

pub const AMBIENT_TEMP: f32 = 20.0;

/// Indexed by `ParticleKind as usize`.
pub static KIND_DATA: [KindProps; KIND_COUNT] = [
    // Empty
    KindProps {
        name: "Empty",
        color: abgr(255, 255, 255),
        brush_density: 100,
        category: Category::Empty,
        density: 0.0,
        dispersion: 0,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: false,
    },
    // Sand
    KindProps {
        name: "Sand",
        color: abgr(194, 178, 128),
        brush_density: 50,
        category: Category::DynamicSolid,
        density: 1.6,
        dispersion: 0,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: true,
    },
    // Wet sand
    KindProps {
        name: "Wet Sand",
        color: abgr(144, 128, 78),
        brush_density: 50,
        category: Category::DynamicSolid,
        density: 1.9,
        dispersion: 0,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: false,
    },
    // Dirt
    KindProps {
        name: "Dirt",
        color: abgr(133, 94, 66),
        brush_density: 90,
        category: Category::StaticSolid,
        density: 1.7,
        dispersion: 0,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: false,
    },
    // Grass
    KindProps {
        name: "Grass",
        color: abgr(40, 140, 40),
        brush_density: 90,
        category: Category::StaticSolid,
        density: 1.1,
        dispersion: 0,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: false,
    },
    // Water
    KindProps {
        name: "Water",
        color: abgr(60, 120, 180),
        brush_density: 70,
        category: Category::Liquid,
        density: 1.0,
        dispersion: 6,
        default_temp: AMBIENT_TEMP,
        boils_to: Some((100.0, ParticleKind::Steam)),
        condenses_to: None,
        slides_diagonally: true,
    },
    // Silt
    KindProps {
        name: "Silt",
        color: abgr(115, 105, 90),
        brush_density: 50,
        category: Category::DynamicSolid,
        density: 1.4,
        dispersion: 0,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: true,
    },
    // Oil
    KindProps {
        name: "Oil",
        color: abgr(90, 30, 30),
        brush_density: 70,
        category: Category::Liquid,
        density: 0.8,
        dispersion: 4,
        default_temp: AMBIENT_TEMP,
        boils_to: None,
        condenses_to: None,
        slides_diagonally: true,
    },
    // Steam
    KindProps {
        name: "Steam",
        color: abgr(200, 210, 220),
        brush_density: 40,
        category: Category::Gas,
        density: 0.05,
        dispersion: 4,
        default_temp: 110.0,
        boils_to: None,
        condenses_to: Some((90.0, ParticleKind::Water)),
        slides_diagonally: true,
    },
];

impl ParticleKind {
    #[inline]
    pub fn id(self) -> KindId {
        self as KindId
    }

    /// Look up a kind from its wire id. Unknown ids yield `None`.
    #[inline]
    pub fn from_id(id: KindId) -> Option<Self> {
        ALL_KINDS.get(id as usize).copied()
    }

    #[inline]
    pub fn props(self) -> &'static KindProps {
        &KIND_DATA[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.props().name
    }

    #[inline]
    pub fn category(self) -> Category {
        self.props().category
    }

    #[inline]
    pub fn density(self) -> f32 {
        self.props().density
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == ParticleKind::Empty
    }
}

#[derive(Serialize)]
struct KindManifestEntry {
    id: KindId,
    key: ParticleKind,
    name: &'static str,
    color: u32,
    brush_density: u8,
    category: Category,
    density: f32,
}

#[derive(Serialize)]
struct KindManifest {
    format_version: u32,
    kinds: Vec<KindManifestEntry>,
}

/// Registry as JSON, for building a brush palette.
pub fn kind_manifest_json() -> String {
    let kinds = ALL_KINDS
        .iter()
        .map(|&kind| {
            let p = kind.props();
            KindManifestEntry {
                id: kind.id(),
                key: kind,
                name: p.name,
                color: p.color,
                brush_density: p.brush_density,
                category: p.category,
                density: p.density,
            }
        })
        .collect();
    let out = KindManifest { format_version: 1, kinds };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_the_table() {
        for (idx, kind) in ALL_KINDS.iter().enumerate() {
            assert_eq!(kind.id() as usize, idx);
            assert_eq!(ParticleKind::from_id(idx as u8), Some(*kind));
        }
        assert_eq!(ParticleKind::from_id(KIND_COUNT as u8), None);
        assert_eq!(ParticleKind::from_id(255), None);
    }

    #[test]
    fn sand_sinks_through_water_and_oil_floats() {
        let sand = ParticleKind::Sand.density();
        let water = ParticleKind::Water.density();
        let oil = ParticleKind::Oil.density();
        let steam = ParticleKind::Steam.density();
        assert!(sand > water);
        assert!(water > oil);
        assert!(oil > steam);
    }

    #[test]
    fn phase_forms_point_at_the_right_category() {
        let (_, gas) = ParticleKind::Water.props().boils_to.unwrap();
        assert_eq!(gas.category(), Category::Gas);
        let (_, liquid) = ParticleKind::Steam.props().condenses_to.unwrap();
        assert_eq!(liquid.category(), Category::Liquid);
    }

    #[test]
    fn wet_sand_does_not_slide_but_sand_does() {
        assert!(ParticleKind::Sand.props().slides_diagonally);
        assert!(!ParticleKind::WetSand.props().slides_diagonally);
    }

    #[test]
    fn manifest_lists_every_kind() {
        let json = kind_manifest_json();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["kinds"].as_array().unwrap().len(), KIND_COUNT);
        assert_eq!(v["kinds"][3]["key"], "dirt");
        assert_eq!(v["kinds"][2]["name"], "Wet Sand");
    }
}
