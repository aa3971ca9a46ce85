//! Scene configuration table.
//!
//! Maps scene id → actor id → maneuver kind → [`ManeuverSpec`]. The JSON
//! form uses scene ids and actor ids as object keys and snake_case kind
//! names:
//!
//! ```json
//! { "0006": { "2": { "left_turn": { "angle": 7.0, "frames_per_maneuver": 25 } } } }
//! ```
//!
//! Entries keep their source order. [`SceneTable::resolve`] validates a
//! scene's entries and hands back the ordered list the runner consumes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swerve_core::{AbsoluteFrame, ActorId, ConfigError, SceneId};
use swerve_maneuver::{ManeuverKind, ManeuverSpec, ManeuverWindow, TurnStyle};

/// Maneuvers for one actor, keyed by kind.
pub type ActorManeuvers = IndexMap<ManeuverKind, ManeuverSpec>;

/// Actors of one scene.
pub type SceneManeuvers = IndexMap<ActorId, ActorManeuvers>;

/// One validated maneuver ready to drive.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedManeuver {
    /// Scene the maneuver belongs to.
    pub scene: SceneId,
    /// Target actor.
    pub actor: ActorId,
    /// Maneuver kind.
    pub kind: ManeuverKind,
    /// Validated specification.
    pub spec: ManeuverSpec,
}

impl ResolvedManeuver {
    /// The absolute-frame window of this maneuver.
    pub fn window(&self) -> ManeuverWindow {
        self.spec.window()
    }
}

/// The full configuration table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneTable {
    scenes: IndexMap<SceneId, SceneManeuvers>,
}

impl SceneTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference scene `0006`: actor 2 turns left and shifts lanes.
    ///
    /// The turn is [`TurnStyle::PerCall`]: once saturated it adds
    /// `max_rotation` to the heading each frame and holds x.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        let scene = SceneId::from("0006");
        table.insert(
            scene.clone(),
            ActorId(2),
            ManeuverKind::LeftTurn,
            ManeuverSpec {
                angle: 7.0,
                x_offset: -1.5,
                y_offset: 0.0,
                z_offset: 3.0,
                max_rotation: -1.0,
                frames_per_maneuver: 25,
                maneuver_starting_frame: AbsoluteFrame(0),
                maneuver_ending_frame: None,
                turn_style: TurnStyle::PerCall,
            },
        );
        table.insert(
            scene,
            ActorId(2),
            ManeuverKind::LeftLaneShift,
            ManeuverSpec {
                angle: 0.7,
                x_offset: 0.0,
                y_offset: 0.0,
                z_offset: 0.6,
                max_rotation: -0.6,
                frames_per_maneuver: 10,
                maneuver_starting_frame: AbsoluteFrame(0),
                maneuver_ending_frame: None,
                turn_style: TurnStyle::default(),
            },
        );
        table
    }

    /// Parse a table from JSON.
    ///
    /// Only the syntax and field types are checked here; call
    /// [`resolve`](Self::resolve) to validate specs.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Add or replace one entry. Returns the previous spec.
    pub fn insert(
        &mut self,
        scene: SceneId,
        actor: ActorId,
        kind: ManeuverKind,
        spec: ManeuverSpec,
    ) -> Option<ManeuverSpec> {
        self.scenes
            .entry(scene)
            .or_default()
            .entry(actor)
            .or_default()
            .insert(kind, spec)
    }

    /// Look up one entry.
    pub fn get(&self, scene: &SceneId, actor: ActorId, kind: ManeuverKind) -> Option<&ManeuverSpec> {
        self.scenes.get(scene)?.get(&actor)?.get(&kind)
    }

    /// Every actor entry of `scene`.
    pub fn scene(&self, scene: &SceneId) -> Option<&SceneManeuvers> {
        self.scenes.get(scene)
    }

    /// Scene ids in table order.
    pub fn scene_ids(&self) -> impl Iterator<Item = &SceneId> {
        self.scenes.keys()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns `true` if the table holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Validate every entry of `scene` and return them ordered by
    /// (starting frame, actor, kind).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownScene`] if the scene is absent, or
    /// [`ConfigError::Maneuver`] wrapping the first failing entry's
    /// validation error.
    pub fn resolve(&self, scene: &SceneId) -> Result<Vec<ResolvedManeuver>, ConfigError> {
        let actors = self
            .scenes
            .get(scene)
            .ok_or_else(|| ConfigError::UnknownScene {
                scene: scene.clone(),
            })?;

        let mut resolved = Vec::new();
        for (&actor, maneuvers) in actors {
            for (&kind, spec) in maneuvers {
                spec.validate().map_err(|reason| ConfigError::Maneuver {
                    scene: scene.clone(),
                    actor,
                    kind: kind.name().to_string(),
                    reason: Box::new(reason),
                })?;
                resolved.push(ResolvedManeuver {
                    scene: scene.clone(),
                    actor,
                    kind,
                    spec: spec.clone(),
                });
            }
        }
        resolved.sort_by_key(|m| (m.spec.maneuver_starting_frame, m.actor, m.kind));
        Ok(resolved)
    }
}
