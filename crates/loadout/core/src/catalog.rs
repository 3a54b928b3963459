//! Static catalog model: roles, champions, items and game definitions.
//!
//! These types are read-only once a [`crate::registry::GameRegistry`] has been
//! built from them. Optional affinities are kept as maps with explicit
//! lookup-with-default accessors so the weight function stays total.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Well-known item tags.
pub mod tags {
    /// Marks the starter mandated for the jungle role.
    pub const JUNGLE_STARTER: &str = "JUNGLE_STARTER";
    /// Marks the starter mandated for the support role.
    pub const SUPPORT_STARTER: &str = "SUPPORT_STARTER";
    /// Marks items favored by chaos mode.
    pub const FUN: &str = "FUN";
}

/// Play-style slot a champion is built for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// Exact upper-case tag lookup, as written in identifiers.
    ///
    /// Unlike `FromStr`, which accepts any casing for user input, this only
    /// matches the canonical tag so an identifier replays to itself.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::iter().find(|role| AsRef::<str>::as_ref(role) == tag)
    }
}

/// Slot category of an item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ItemKind {
    Starter,
    Boots,
    Core,
    Fun,
}

/// Identifier of a supported game catalog (e.g. `"lol"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A selectable champion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    /// Roles the champion is usually played in. Informational only.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Entity {
    pub fn plays(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// A catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub role_affinity: BTreeMap<Role, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub entity_affinity: BTreeMap<String, f64>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            tags: Vec::new(),
            role_affinity: BTreeMap::new(),
            entity_affinity: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_role_affinity(mut self, role: Role, multiplier: f64) -> Self {
        self.role_affinity.insert(role, multiplier);
        self
    }

    #[must_use]
    pub fn with_entity_affinity(mut self, entity_id: impl Into<String>, multiplier: f64) -> Self {
        self.entity_affinity.insert(entity_id.into(), multiplier);
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Fun items are favored in chaos mode and damped otherwise.
    pub fn is_fun(&self) -> bool {
        self.kind == ItemKind::Fun || self.has_tag(tags::FUN)
    }

    /// Role multiplier, `1.0` when the item declares none for `role`.
    pub fn role_factor(&self, role: Role) -> f64 {
        self.role_affinity.get(&role).copied().unwrap_or(1.0)
    }

    /// Champion multiplier, `1.0` when the item declares none for `entity_id`.
    pub fn entity_factor(&self, entity_id: &str) -> f64 {
        self.entity_affinity.get(entity_id).copied().unwrap_or(1.0)
    }
}

/// A role that must open with the unique starter carrying `tag`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterRule {
    pub role: Role,
    pub tag: String,
}

impl StarterRule {
    pub fn new(role: Role, tag: impl Into<String>) -> Self {
        Self {
            role,
            tag: tag.into(),
        }
    }
}

/// Everything the engine needs to know about one game.
///
/// Item order is significant: candidate pools are filtered from `items`
/// without reordering, and sampling depends on that order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameDefinition {
    pub id: GameId,
    pub roles: Vec<Role>,
    pub entities: Vec<Entity>,
    pub items: Vec<Item>,
    #[serde(default)]
    pub starter_rules: Vec<StarterRule>,
}

impl GameDefinition {
    pub fn entity(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == entity_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn supports_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// The starter rule governing `role`, if any.
    pub fn starter_rule(&self, role: Role) -> Option<&StarterRule> {
        self.starter_rules.iter().find(|rule| rule.role == role)
    }

    /// Whether `item` is reserved by any starter rule of this game.
    pub fn is_mandatory_starter(&self, item: &Item) -> bool {
        self.starter_rules.iter().any(|rule| item.has_tag(&rule.tag))
    }

    /// Items of `kind`, in catalog order.
    pub fn items_of(&self, kind: ItemKind) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_text_round_trips() {
        assert_eq!(Role::Mid.to_string(), "MID");
        assert_eq!("adc".parse::<Role>().unwrap(), Role::Adc);
        assert_eq!("SUPPORT".parse::<Role>().unwrap(), Role::Support);
        assert!("bottom".parse::<Role>().is_err());
    }

    #[test]
    fn tag_lookup_is_case_sensitive() {
        assert_eq!(Role::from_tag("JUNGLE"), Some(Role::Jungle));
        assert_eq!(Role::from_tag("ADC"), Some(Role::Adc));
        assert_eq!(Role::from_tag("jungle"), None);
        assert_eq!(Role::from_tag("Mid"), None);
        assert_eq!(Role::from_tag(""), None);
    }

    #[test]
    fn definition_lookups_by_id() {
        let game = GameDefinition {
            id: GameId::from("mini"),
            roles: vec![Role::Mid],
            entities: vec![Entity {
                id: "ahri".into(),
                name: "Ahri".into(),
                roles: vec![Role::Mid],
            }],
            items: vec![Item::new("ring", "Ring", ItemKind::Starter)],
            starter_rules: Vec::new(),
        };

        assert_eq!(game.item("ring").map(|i| i.kind), Some(ItemKind::Starter));
        assert!(game.item("missing").is_none());
        assert_eq!(game.entity("ahri").map(|e| e.name.as_str()), Some("Ahri"));
        assert!(game.entity("teemo").is_none());
    }

    #[test]
    fn affinity_lookups_default_to_one() {
        let item = Item::new("ludens", "Luden's Companion", ItemKind::Core)
            .with_role_affinity(Role::Mid, 1.4)
            .with_entity_affinity("ahri", 2.0);

        assert_eq!(item.role_factor(Role::Mid), 1.4);
        assert_eq!(item.role_factor(Role::Top), 1.0);
        assert_eq!(item.entity_factor("ahri"), 2.0);
        assert_eq!(item.entity_factor("garen"), 1.0);
    }

    #[test]
    fn fun_by_kind_or_tag() {
        assert!(Item::new("riftmaker", "Riftmaker", ItemKind::Fun).is_fun());
        assert!(
            Item::new("odd", "Odd Core", ItemKind::Core)
                .with_tag(tags::FUN)
                .is_fun()
        );
        assert!(!Item::new("ie", "Infinity Edge", ItemKind::Core).is_fun());
    }

    #[test]
    fn item_deserializes_with_optional_fields_missing() {
        let item: Item =
            serde_json::from_str(r#"{"id":"boots","name":"Boots","kind":"BOOTS"}"#).unwrap();
        assert_eq!(item.kind, ItemKind::Boots);
        assert!(item.tags.is_empty());
        assert_eq!(item.role_factor(Role::Adc), 1.0);
    }
}
