//! Deterministic build generation shared by every loadout front end.
//!
//! `loadout-core` turns a text seed plus (game, champion, role, chaos) into an
//! ordered item build and a shareable identifier that replays it exactly.
//! Generation is a pure function of the seed, the request and the catalog
//! contents: all randomness flows through [`rng::SeededRng`], and the catalog
//! is only ever read through [`registry::CatalogOracle`].
pub mod build;
pub mod catalog;
pub mod codec;
pub mod engine;
pub mod error;
pub mod generator;
pub mod registry;
pub mod rng;
pub mod sampler;
pub mod weights;

pub use build::{BuildInput, BuildPreview, BuildResult, ItemSlots};
pub use catalog::{Entity, GameDefinition, GameId, Item, ItemKind, Role, StarterRule, tags};
pub use codec::{PublicPayload, decode_identifier, encode_identifier};
pub use engine::{AssemblyContext, AssemblyPhase, BOOTS_CHANCE, MAX_SLOTS, SlotAssembler};
pub use error::{CatalogError, ErrorSeverity, GenerateError, LoadoutError, NotFoundError};
pub use generator::BuildGenerator;
pub use registry::{CatalogOracle, GameRegistry};
pub use rng::{DrawSource, Mulberry32, SeedMixer, SeededRng, fresh_seed};
pub use sampler::{Weighted, pick_weighted, select};
pub use weights::{CALM_FUN_MULTIPLIER, CHAOS_FUN_MULTIPLIER, item_weight};
