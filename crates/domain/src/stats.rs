//! Derived stat calculation.
//!
//! Derived values are never persisted; every read and mutate path
//! recomputes them from the base block and the chosen specializations
//! so stale persisted numbers cannot drift.

use serde::Serialize;

use crate::attributes::Attributes;
use crate::specialization;

/// Action point ceiling, flat for every sheet.
pub const PA_MAX: i32 = 5;

/// Derived maxima plus the effective attribute block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    pub pv_max: i32,
    pub ps_max: i32,
    pub pa_max: i32,
    pub final_attrs: Attributes,
}

/// Combine the base block with each known specialization's deltas.
///
/// Unknown specialization ids are ignored. Summation is commutative,
/// so the order of `spec_ids` does not matter.
pub fn calculate_stats<S: AsRef<str>>(base: &Attributes, spec_ids: &[S]) -> DerivedStats {
    let mut final_attrs = *base;
    for id in spec_ids {
        if let Some(spec) = specialization::get(id.as_ref()) {
            for &(attr, delta) in spec.bonus {
                final_attrs.add(attr, delta);
            }
        }
    }
    DerivedStats {
        pv_max: 10 + final_attrs.vigor,
        ps_max: 10 + final_attrs.presence,
        pa_max: PA_MAX,
        final_attrs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_worked_example() {
        // Flat 2s with socorrista + cacador + atleta.
        let base = Attributes::new(2, 2, 2, 2, 2);
        let specs = ["socorrista", "cacador", "atleta"];
        let stats = calculate_stats(&base, &specs);
        assert_eq!(stats.final_attrs.vigor, 1); // 2 - 1 (socorrista)
        assert_eq!(stats.final_attrs.agility, 4); // 2 + 2 (atleta)
        assert_eq!(stats.final_attrs.intellect, 4); // 2 + 2 (socorrista)
        assert_eq!(stats.final_attrs.perception, 3); // 2 + 2 - 1
        assert_eq!(stats.final_attrs.presence, 1); // 2 - 1 (cacador)
        assert_eq!(stats.pv_max, 11);
        assert_eq!(stats.ps_max, 11);
        assert_eq!(stats.pa_max, 5);
    }

    #[test]
    fn order_independent() {
        let base = Attributes::new(1, 2, 3, 2, 2);
        let forward = calculate_stats(&base, &["lutador", "pastor", "nativo"]);
        let reverse = calculate_stats(&base, &["nativo", "pastor", "lutador"]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn unknown_spec_ids_are_ignored() {
        let base = Attributes::new(2, 2, 2, 2, 2);
        let with_junk = calculate_stats(&base, &["guarda", "piloto", "astronauta"]);
        let clean = calculate_stats(&base, &["guarda"]);
        assert_eq!(with_junk, clean);
    }

    #[test]
    fn pa_max_is_flat() {
        let stats = calculate_stats(&Attributes::new(5, 5, 0, 0, 0), &[] as &[&str]);
        assert_eq!(stats.pa_max, 5);
        assert_eq!(stats.pv_max, 15);
        assert_eq!(stats.ps_max, 10);
    }
}
