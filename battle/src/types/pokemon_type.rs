//! Creature types and the effectiveness chart

/// Creature types (18, in canonical chart order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 types in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Get type effectiveness against a single defending type
    pub fn effectiveness(&self, defender: Type) -> f64 {
        effectiveness(*self, defender)
    }

    /// Get type effectiveness against multiple defending types (multiplied)
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f64 {
        defenders
            .iter()
            .map(|t| self.effectiveness(*t))
            .product()
    }

    /// Position in the canonical ordering, also the chart index
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a type name.
    ///
    /// Accepts English names in any case and the Japanese names used by
    /// the bundled species data.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s) || t.japanese_name() == s)
    }

    /// Japanese type name
    pub fn japanese_name(&self) -> &'static str {
        match self {
            Type::Normal => "ノーマル",
            Type::Fire => "ほのお",
            Type::Water => "みず",
            Type::Electric => "でんき",
            Type::Grass => "くさ",
            Type::Ice => "こおり",
            Type::Fighting => "かくとう",
            Type::Poison => "どく",
            Type::Ground => "じめん",
            Type::Flying => "ひこう",
            Type::Psychic => "エスパー",
            Type::Bug => "むし",
            Type::Rock => "いわ",
            Type::Ghost => "ゴースト",
            Type::Dragon => "ドラゴン",
            Type::Dark => "あく",
            Type::Steel => "はがね",
            Type::Fairy => "フェアリー",
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up the multiplier for `attack` hitting a single `defend` type
///
/// Not symmetric: `effectiveness(Water, Fire)` is 2.0 while
/// `effectiveness(Fire, Water)` is 0.5.
pub fn effectiveness(attack: Type, defend: Type) -> f64 {
    TYPE_CHART[attack.index()][defend.index()]
}

/// Effectiveness multipliers, indexed `[attack][defend]`
///
/// Every cell is one of 0.0 (immune), 0.5 (resisted), 1.0 or 2.0 (weak).
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[f64; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_effectiveness_super_effective() {
        assert_eq!(Type::Fire.effectiveness(Type::Grass), 2.0);
        assert_eq!(Type::Water.effectiveness(Type::Fire), 2.0);
        assert_eq!(Type::Electric.effectiveness(Type::Water), 2.0);
        assert_eq!(Type::Fighting.effectiveness(Type::Normal), 2.0);
    }

    #[test]
    fn test_type_effectiveness_not_very_effective() {
        assert_eq!(Type::Fire.effectiveness(Type::Water), 0.5);
        assert_eq!(Type::Grass.effectiveness(Type::Fire), 0.5);
        assert_eq!(Type::Electric.effectiveness(Type::Grass), 0.5);
    }

    #[test]
    fn test_type_effectiveness_immune() {
        assert_eq!(Type::Normal.effectiveness(Type::Ghost), 0.0);
        assert_eq!(Type::Ghost.effectiveness(Type::Normal), 0.0);
        assert_eq!(Type::Electric.effectiveness(Type::Ground), 0.0);
        assert_eq!(Type::Ground.effectiveness(Type::Flying), 0.0);
        assert_eq!(Type::Psychic.effectiveness(Type::Dark), 0.0);
        assert_eq!(Type::Dragon.effectiveness(Type::Fairy), 0.0);
    }

    #[test]
    fn test_type_effectiveness_multi() {
        // Fire vs Grass/Steel = 4x
        assert_eq!(Type::Fire.effectiveness_multi(&[Type::Grass, Type::Steel]), 4.0);
        // Fire vs Water/Rock = 0.25x
        assert_eq!(Type::Fire.effectiveness_multi(&[Type::Water, Type::Rock]), 0.25);
        // Electric vs Water/Flying = 4x
        assert_eq!(Type::Electric.effectiveness_multi(&[Type::Water, Type::Flying]), 4.0);
        // Ground vs Flying/Steel = 0x (immune)
        assert_eq!(Type::Ground.effectiveness_multi(&[Type::Flying, Type::Steel]), 0.0);
    }

    #[test]
    fn test_same_type_pairs() {
        assert_eq!(effectiveness(Type::Fire, Type::Fire), 0.5);
        assert_eq!(effectiveness(Type::Water, Type::Water), 0.5);
        assert_eq!(effectiveness(Type::Normal, Type::Normal), 1.0);
        assert_eq!(effectiveness(Type::Ghost, Type::Ghost), 2.0);
        assert_eq!(effectiveness(Type::Dragon, Type::Dragon), 2.0);
        assert_eq!(effectiveness(Type::Steel, Type::Steel), 0.5);
    }

    #[test]
    fn test_chart_is_asymmetric() {
        assert_eq!(effectiveness(Type::Water, Type::Fire), 2.0);
        assert_eq!(effectiveness(Type::Fire, Type::Water), 0.5);
        assert_eq!(effectiveness(Type::Ghost, Type::Normal), 0.0);
        assert_eq!(effectiveness(Type::Fairy, Type::Dragon), 2.0);
    }

    #[test]
    fn test_chart_values_are_known_multipliers() {
        for attack in Type::all() {
            for defend in Type::all() {
                let value = effectiveness(*attack, *defend);
                assert!(
                    [0.0, 0.5, 1.0, 2.0].contains(&value),
                    "{attack} vs {defend} = {value}"
                );
            }
        }
    }

    #[test]
    fn test_type_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_name("ほのお"), Some(Type::Fire));
        assert_eq!(Type::from_name("フェアリー"), Some(Type::Fairy));
        assert_eq!(Type::from_name(" Psychic "), Some(Type::Psychic));
        assert_eq!(Type::from_name("unknown"), None);
        assert_eq!(Type::from_name(""), None);
    }

    #[test]
    fn test_type_as_str() {
        assert_eq!(Type::Fire.as_str(), "Fire");
        assert_eq!(Type::Psychic.as_str(), "Psychic");
        assert_eq!(Type::Normal.as_str(), "Normal");
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
        for (i, t) in Type::all().iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }
}
