//! Context weight of an item for a given champion, role and chaos setting.

use crate::catalog::{Entity, Item, Role};

/// Multiplier applied to fun items when chaos mode is on.
pub const CHAOS_FUN_MULTIPLIER: f64 = 2.2;

/// Multiplier applied to fun items when chaos mode is off.
pub const CALM_FUN_MULTIPLIER: f64 = 0.85;

/// Selection weight of `item` for this request.
///
/// `1 × role factor × champion factor × chaos factor`, multiplied in that
/// order so results are bit-identical across implementations.
pub fn item_weight(item: &Item, entity: &Entity, role: Role, chaos: bool) -> f64 {
    let mut weight = 1.0;
    weight *= item.role_factor(role);
    weight *= item.entity_factor(&entity.id);

    if item.is_fun() {
        weight *= if chaos {
            CHAOS_FUN_MULTIPLIER
        } else {
            CALM_FUN_MULTIPLIER
        };
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemKind, tags};

    fn ahri() -> Entity {
        Entity {
            id: "ahri".into(),
            name: "Ahri".into(),
            roles: vec![Role::Mid],
        }
    }

    #[test]
    fn plain_item_weighs_one() {
        let item = Item::new("riftless", "Plain", ItemKind::Core);
        assert_eq!(item_weight(&item, &ahri(), Role::Top, false), 1.0);
        assert_eq!(item_weight(&item, &ahri(), Role::Top, true), 1.0);
    }

    #[test]
    fn role_and_champion_factors_multiply() {
        let item = Item::new("ludens", "Luden's Companion", ItemKind::Core)
            .with_role_affinity(Role::Mid, 1.4)
            .with_entity_affinity("ahri", 2.0);

        assert_eq!(item_weight(&item, &ahri(), Role::Mid, false), 1.4 * 2.0);
        assert_eq!(item_weight(&item, &ahri(), Role::Top, false), 2.0);
    }

    #[test]
    fn chaos_boosts_and_calm_damps_fun_items() {
        let fun = Item::new("heartsteel", "Heartsteel", ItemKind::Fun)
            .with_tag(tags::FUN)
            .with_role_affinity(Role::Top, 1.2);

        assert_eq!(item_weight(&fun, &ahri(), Role::Top, true), 1.2 * 2.2);
        assert_eq!(item_weight(&fun, &ahri(), Role::Top, false), 1.2 * 0.85);
        assert_eq!(item_weight(&fun, &ahri(), Role::Mid, true), 2.2);
    }

    #[test]
    fn fun_tag_on_core_item_counts() {
        let tagged = Item::new("odd", "Odd Core", ItemKind::Core).with_tag(tags::FUN);
        assert_eq!(item_weight(&tagged, &ahri(), Role::Mid, true), CHAOS_FUN_MULTIPLIER);
    }
}
