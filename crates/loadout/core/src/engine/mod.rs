//! Slot-assembly state machine.
//!
//! The [`SlotAssembler`] turns a request context and a draw source into an
//! ordered item list. It walks the [`AssemblyPhase`]s in a fixed order:
//!
//! 1. **SelectStarter**: roles with a [`crate::catalog::StarterRule`] get their
//!    tagged starter without drawing; every other role samples among the
//!    starters no rule reserves.
//! 2. **SelectBoots**: one gate draw, always taken; below [`BOOTS_CHANCE`]
//!    and with boots in the catalog, a boots item is sampled.
//! 3. **FillSlots**: sample CORE/FUN items not yet chosen until
//!    [`MAX_SLOTS`] is reached or the pool runs dry.
//!
//! No phase is revisited, so the number of draws consumed is a deterministic
//! function of the request and the catalog.

mod phase;

pub use phase::AssemblyPhase;

use std::collections::HashSet;

use crate::build::ItemSlots;
use crate::catalog::{Entity, GameDefinition, Item, ItemKind, Role};
use crate::error::CatalogError;
use crate::rng::DrawSource;
use crate::sampler::{Weighted, pick_weighted};
use crate::weights::item_weight;

/// Maximum number of items in a build.
pub const MAX_SLOTS: usize = 6;

/// Probability that a build includes boots.
pub const BOOTS_CHANCE: f64 = 0.7;

/// Read-only inputs of one assembly run.
#[derive(Clone, Copy, Debug)]
pub struct AssemblyContext<'a> {
    pub game: &'a GameDefinition,
    pub entity: &'a Entity,
    pub role: Role,
    pub chaos: bool,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(game: &'a GameDefinition, entity: &'a Entity, role: Role, chaos: bool) -> Self {
        Self {
            game,
            entity,
            role,
            chaos,
        }
    }

    fn weigh(&self, items: impl Iterator<Item = &'a Item>) -> Vec<Weighted<&'a Item>> {
        items
            .map(|item| Weighted::new(item, item_weight(item, self.entity, self.role, self.chaos)))
            .collect()
    }
}

/// Drives one build through the assembly phases.
pub struct SlotAssembler<'a, R: DrawSource + ?Sized> {
    ctx: AssemblyContext<'a>,
    rng: &'a mut R,
    phase: AssemblyPhase,
    slots: ItemSlots,
    picked: HashSet<&'a str>,
}

impl<'a, R: DrawSource + ?Sized> SlotAssembler<'a, R> {
    pub fn new(ctx: AssemblyContext<'a>, rng: &'a mut R) -> Self {
        Self {
            ctx,
            rng,
            phase: AssemblyPhase::SelectStarter,
            slots: ItemSlots::new(),
            picked: HashSet::new(),
        }
    }

    pub fn phase(&self) -> AssemblyPhase {
        self.phase
    }

    pub fn slots(&self) -> &[Item] {
        &self.slots
    }

    /// Runs every remaining phase and returns the finished slots.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog cannot supply a starter.
    pub fn run(mut self) -> Result<ItemSlots, CatalogError> {
        while !self.phase.is_terminal() {
            self.step()?;
        }
        Ok(self.slots)
    }

    /// Executes the current phase and advances to the next one.
    pub fn step(&mut self) -> Result<AssemblyPhase, CatalogError> {
        let phase = self.phase;
        match phase {
            AssemblyPhase::SelectStarter => self.select_starter()?,
            AssemblyPhase::SelectBoots => self.select_boots(),
            AssemblyPhase::FillSlots => self.fill_slots(),
            AssemblyPhase::Complete => {}
        }

        let next = phase.next();
        tracing::trace!(
            "assembly {} -> {} ({} slots)",
            phase.as_str(),
            next.as_str(),
            self.slots.len()
        );
        self.phase = next;
        Ok(next)
    }

    fn push(&mut self, item: &'a Item) {
        self.picked.insert(item.id.as_str());
        self.slots.push(item.clone());
    }

    fn select_starter(&mut self) -> Result<(), CatalogError> {
        let game = self.ctx.game;

        let starter = if let Some(rule) = game.starter_rule(self.ctx.role) {
            game.items_of(ItemKind::Starter)
                .find(|item| item.has_tag(&rule.tag))
                .ok_or_else(|| CatalogError::MissingMandatoryStarter {
                    game: game.id.clone(),
                    role: self.ctx.role,
                    tag: rule.tag.clone(),
                })?
        } else {
            let pool = self.ctx.weigh(
                game.items_of(ItemKind::Starter)
                    .filter(|item| !game.is_mandatory_starter(item)),
            );
            pick_weighted(&mut *self.rng, &pool)
                .copied()
                .ok_or_else(|| CatalogError::NoGenericStarter {
                    game: game.id.clone(),
                })?
        };

        self.push(starter);
        Ok(())
    }

    fn select_boots(&mut self) {
        // The gate draw is consumed even when the catalog has no boots.
        if self.rng.next_f64() >= BOOTS_CHANCE {
            return;
        }

        let pool = self.ctx.weigh(self.ctx.game.items_of(ItemKind::Boots));
        if let Some(boots) = pick_weighted(&mut *self.rng, &pool).copied() {
            self.push(boots);
        }
    }

    fn fill_slots(&mut self) {
        let game = self.ctx.game;

        while !self.slots.is_full() {
            let candidates = self.ctx.weigh(
                game.items
                    .iter()
                    .filter(|item| matches!(item.kind, ItemKind::Core | ItemKind::Fun))
                    .filter(|item| !self.picked.contains(item.id.as_str())),
            );

            match pick_weighted(&mut *self.rng, &candidates).copied() {
                Some(item) => self.push(item),
                None => break,
            }
        }
    }
}
