//! Build generator: the two public entry points of the core.
//!
//! [`BuildGenerator::generate`] produces a build from request parameters and
//! [`BuildGenerator::generate_from_identifier`] replays one from a shareable
//! identifier. Replay is exact because generation is a pure function of
//! (seed, champion, role, chaos, catalog contents).

use chrono::Utc;

use crate::build::{BuildInput, BuildPreview, BuildResult};
use crate::catalog::{GameId, Role};
use crate::codec::{PublicPayload, decode_identifier, encode_identifier};
use crate::engine::{AssemblyContext, SlotAssembler};
use crate::error::{GenerateError, NotFoundError};
use crate::registry::CatalogOracle;
use crate::rng::{SeededRng, fresh_seed};

/// Generates and replays builds against a read-only catalog.
pub struct BuildGenerator<'a, C: CatalogOracle + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogOracle + ?Sized> BuildGenerator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Generates a build for `input`.
    ///
    /// The explicit seed is used when it is non-blank after trimming;
    /// otherwise a fresh seed is synthesized. The returned result carries the
    /// seed that actually fed the RNG.
    ///
    /// # Errors
    ///
    /// - [`NotFoundError`] for an unknown game, champion, or a role the game
    ///   does not offer
    /// - [`crate::error::CatalogError`] when the catalog cannot satisfy the
    ///   starter rules
    pub fn generate(&self, input: &BuildInput) -> Result<BuildResult, GenerateError> {
        let seed = match input.seed.as_deref().map(str::trim) {
            Some(seed) if !seed.is_empty() => seed.to_string(),
            _ => fresh_seed(),
        };
        let mut rng = SeededRng::from_seed(&seed);

        let game = self
            .catalog
            .game(&input.game_id)
            .ok_or_else(|| NotFoundError::UnknownGame(input.game_id.clone()))?;

        if !game.supports_role(input.role) {
            return Err(NotFoundError::UnknownRole {
                game: game.id.clone(),
                role: input.role.to_string(),
            }
            .into());
        }

        let entity = game
            .entity(&input.entity_id)
            .ok_or_else(|| NotFoundError::UnknownEntity {
                game: game.id.clone(),
                entity: input.entity_id.clone(),
            })?;

        if !entity.plays(input.role) {
            tracing::debug!("{} is off-role as {}", entity.id, input.role);
        }

        let ctx = AssemblyContext::new(game, entity, input.role, input.chaos);
        let items = SlotAssembler::new(ctx, &mut rng).run()?;

        let identifier = encode_identifier(&PublicPayload {
            version: PublicPayload::CURRENT_VERSION.into(),
            game_id: game.id.to_string(),
            seed: seed.clone(),
            entity_id: entity.id.clone(),
            role: input.role.to_string(),
            chaos: input.chaos,
        });

        tracing::debug!(
            "generated {} build for {} ({}, chaos={}) seed={:?} items={}",
            game.id,
            entity.id,
            input.role,
            input.chaos,
            seed,
            items.len()
        );

        Ok(BuildResult {
            version: PublicPayload::CURRENT_VERSION,
            game_id: game.id.clone(),
            seed,
            identifier,
            entity_id: entity.id.clone(),
            entity_name: entity.name.clone(),
            role: input.role,
            chaos: input.chaos,
            items,
            created_at: Utc::now(),
            favorite: false,
        })
    }

    /// Replays the build encoded in `identifier`.
    ///
    /// Returns `Ok(None)` when the identifier does not decode or names a game
    /// this catalog does not support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`]; a role text that names no known role is
    /// reported as [`NotFoundError::UnknownRole`].
    pub fn generate_from_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<BuildResult>, GenerateError> {
        let Some(payload) = self.decode_supported(identifier) else {
            return Ok(None);
        };

        let role = parse_role(&payload)?;
        let input = BuildInput {
            game_id: GameId::new(payload.game_id),
            entity_id: payload.entity_id,
            role,
            chaos: payload.chaos,
            seed: Some(payload.seed),
        };

        self.generate(&input).map(Some)
    }

    /// Reads what an identifier describes without generating the build.
    pub fn preview_from_identifier(&self, identifier: &str) -> Option<BuildPreview> {
        let payload = self.decode_supported(identifier)?;
        let role = parse_role(&payload).ok()?;

        Some(BuildPreview {
            game_id: GameId::new(payload.game_id),
            entity_id: payload.entity_id,
            role,
            chaos: payload.chaos,
        })
    }

    fn decode_supported(&self, identifier: &str) -> Option<PublicPayload> {
        let payload = decode_identifier(identifier)?;

        if !self.catalog.supports(&GameId::new(payload.game_id.as_str())) {
            tracing::debug!("identifier names unsupported game {:?}", payload.game_id);
            return None;
        }
        if !payload.is_current_version() {
            tracing::warn!(
                "identifier uses payload version {} (current {}); replaying anyway",
                payload.version,
                PublicPayload::CURRENT_VERSION
            );
        }

        Some(payload)
    }
}

/// Identifier roles must be the exact upper-case tag.
fn parse_role(payload: &PublicPayload) -> Result<Role, NotFoundError> {
    Role::from_tag(&payload.role).ok_or_else(|| NotFoundError::UnknownRole {
        game: GameId::new(payload.game_id.as_str()),
        role: payload.role.clone(),
    })
}
