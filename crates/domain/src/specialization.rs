//! Specialization table - the fixed archetype list players pick from.
//!
//! Read-only at runtime. Each entry trades a +2 in one attribute for a
//! -1 in another.

use crate::attributes::Attribute;

/// A named archetype with its attribute bonus pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialization {
    /// Stable identifier used on the wire and in persisted sheets.
    pub id: &'static str,
    /// Display name shown on the dashboard.
    pub name: &'static str,
    /// Attribute deltas applied on top of the base block.
    pub bonus: &'static [(Attribute, i32)],
}

static TABLE: &[Specialization] = &[
    Specialization {
        id: "socorrista",
        name: "Socorrista",
        bonus: &[(Attribute::Intellect, 2), (Attribute::Vigor, -1)],
    },
    Specialization {
        id: "mecanico",
        name: "Mecânico",
        bonus: &[(Attribute::Intellect, 2), (Attribute::Presence, -1)],
    },
    Specialization {
        id: "cacador",
        name: "Caçador",
        bonus: &[(Attribute::Perception, 2), (Attribute::Presence, -1)],
    },
    Specialization {
        id: "lutador",
        name: "Lutador",
        bonus: &[(Attribute::Vigor, 2), (Attribute::Intellect, -1)],
    },
    Specialization {
        id: "atleta",
        name: "Atleta",
        bonus: &[(Attribute::Agility, 2), (Attribute::Perception, -1)],
    },
    Specialization {
        id: "dancarino",
        name: "Dançarino",
        bonus: &[(Attribute::Agility, 2), (Attribute::Vigor, -1)],
    },
    Specialization {
        id: "pastor",
        name: "Pastor",
        bonus: &[(Attribute::Presence, 2), (Attribute::Agility, -1)],
    },
    Specialization {
        id: "nativo",
        name: "Nativo",
        bonus: &[(Attribute::Perception, 2), (Attribute::Intellect, -1)],
    },
    Specialization {
        id: "guarda",
        name: "Guarda",
        bonus: &[(Attribute::Presence, 2), (Attribute::Perception, -1)],
    },
    Specialization {
        id: "vendedor",
        name: "Vendedor",
        bonus: &[(Attribute::Presence, 2), (Attribute::Perception, -1)],
    },
    Specialization {
        id: "farmaceutico",
        name: "Farmacêutico",
        bonus: &[(Attribute::Intellect, 2), (Attribute::Agility, -1)],
    },
];

/// All specializations, in dashboard order.
pub fn all() -> &'static [Specialization] {
    TABLE
}

/// Look up a specialization by id. Unknown ids return `None`.
pub fn get(id: &str) -> Option<&'static Specialization> {
    TABLE.iter().find(|s| s.id == id)
}
