//! Session registry mapping [`SessionId`]s to their matches.
//!
//! # Design
//!
//! - **Catalog**: One immutable catalog shared by every session
//! - **Sessions**: Each session owns exactly one [`Match`]; sessions never
//!   observe each other
//! - **Seeding**: With a base seed, session `n` uses `seed + n` so a whole
//!   run is reproducible while sessions stay independent
//!
//! The registry takes `&mut self` for every mutating call, which serializes
//! access to a match. Hosts that share a registry across threads wrap it in
//! a mutex.

use std::collections::HashMap;
use std::sync::Arc;

use arena_core::{
    CatalogOracle, CombatAction, GameConfig, Match, MatchPhase, Participant, RoundReport,
};

use crate::error::{Result, RuntimeError};
use crate::session::SessionId;
use crate::snapshot::{CatalogListing, FighterSnapshot, MatchSnapshot};

/// Setup-form submission naming a fighter and the records it is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterSpec {
    pub name: String,
    pub class: String,
    pub weapon: String,
    pub armor: String,
}

impl FighterSpec {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        weapon: impl Into<String>,
        armor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            weapon: weapon.into(),
            armor: armor.into(),
        }
    }
}

pub struct SessionRegistry {
    catalog: Arc<dyn CatalogOracle>,
    config: GameConfig,
    seed: Option<u64>,
    next_id: u64,
    sessions: HashMap<SessionId, Match>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    ///
    /// Fails if `config` is unusable by the match engine.
    pub fn new(catalog: Arc<dyn CatalogOracle>, config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            seed: None,
            next_id: 0,
            sessions: HashMap::new(),
        })
    }

    /// Makes every session opened from now on reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn open_session(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;

        let arena = match self.seed {
            Some(seed) => Match::seeded(&self.config, seed.wrapping_add(id.0)),
            None => Match::new(&self.config),
        };
        self.sessions.insert(id, arena);

        tracing::info!("{} opened", id);
        id
    }

    /// Drops a session and its match. Returns false if it did not exist.
    pub fn close_session(&mut self, id: SessionId) -> bool {
        let closed = self.sessions.remove(&id).is_some();
        if closed {
            tracing::info!("{} closed", id);
        }
        closed
    }

    /// Starts the setup flow, discarding a finished fight.
    pub fn begin_setup(&mut self, id: SessionId) -> Result<()> {
        let arena = self.session_mut(id)?;
        if arena.phase() == MatchPhase::InProgress {
            tracing::warn!("{} setup refused: fight in progress", id);
            return Err(RuntimeError::FightInProgress);
        }
        arena.start_game();
        Ok(())
    }

    /// Builds the hero from catalog names.
    ///
    /// Starts the setup flow if it has not been started yet.
    pub fn choose_hero(&mut self, id: SessionId, spec: FighterSpec) -> Result<()> {
        let hero = self.build_fighter(&spec, "Hero")?;
        let arena = self.session_mut(id)?;
        if arena.phase() == MatchPhase::InProgress {
            tracing::warn!("{} hero change refused: fight in progress", id);
            return Err(RuntimeError::FightInProgress);
        }
        if !arena.is_game_on() {
            arena.start_game();
        }
        arena.set_hero(hero);
        Ok(())
    }

    /// Builds the enemy from catalog names. Requires a hero.
    pub fn choose_enemy(&mut self, id: SessionId, spec: FighterSpec) -> Result<()> {
        let enemy = self.build_fighter(&spec, "Enemy")?;
        let arena = self.session_mut(id)?;
        if arena.phase() == MatchPhase::InProgress {
            tracing::warn!("{} enemy change refused: fight in progress", id);
            return Err(RuntimeError::FightInProgress);
        }
        if !arena.is_game_on() || arena.hero().is_none() {
            tracing::warn!("{} enemy refused: no hero chosen", id);
            return Err(RuntimeError::HeroNotChosen);
        }
        arena.set_enemy(enemy);
        Ok(())
    }

    pub fn attack(&mut self, id: SessionId) -> Result<RoundReport> {
        self.play(id, CombatAction::Attack)
    }

    pub fn use_skill(&mut self, id: SessionId) -> Result<RoundReport> {
        self.play(id, CombatAction::UseSkill)
    }

    pub fn skip_turn(&mut self, id: SessionId) -> Result<RoundReport> {
        self.play(id, CombatAction::PassTurn)
    }

    pub fn play(&mut self, id: SessionId, action: CombatAction) -> Result<RoundReport> {
        let arena = self.session_mut(id)?;
        Ok(arena.play_round(action))
    }

    pub fn end_fight(&mut self, id: SessionId) -> Result<String> {
        Ok(self.session_mut(id)?.end_game())
    }

    pub fn snapshot(&self, id: SessionId) -> Result<MatchSnapshot> {
        let arena = self.session(id)?;
        Ok(MatchSnapshot {
            session: id,
            phase: arena.phase(),
            game_on: arena.is_game_on(),
            hero: arena.hero().map(FighterSnapshot::from),
            enemy: arena.enemy().map(FighterSnapshot::from),
            outcome: arena.outcome(),
        })
    }

    pub fn catalog_listing(&self) -> CatalogListing {
        let owned = |names: Vec<&str>| -> Vec<String> {
            names.into_iter().map(str::to_owned).collect()
        };
        CatalogListing {
            classes: owned(self.catalog.class_names()),
            weapons: owned(self.catalog.weapon_names()),
            armors: owned(self.catalog.armor_names()),
        }
    }

    fn build_fighter(&self, spec: &FighterSpec, fallback_name: &str) -> Result<Participant> {
        let class = self.catalog.require_class(&spec.class)?;
        let weapon = self.catalog.require_weapon(&spec.weapon)?;
        let armor = self.catalog.require_armor(&spec.armor)?;

        let name = match spec.name.trim() {
            "" => fallback_name,
            name => name,
        };
        Ok(Participant::new(name, class, weapon, armor))
    }

    fn session(&self, id: SessionId) -> Result<&Match> {
        self.sessions
            .get(&id)
            .ok_or(RuntimeError::UnknownSession(id))
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut Match> {
        self.sessions
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownSession(id))
    }
}
