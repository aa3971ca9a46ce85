//! Static maneuver configuration.
//!
//! [`ManeuverSpec`] mirrors one entry of the scene configuration table.
//! [`validate()`](ManeuverSpec::validate) runs at resolution time so the
//! profile functions never see a malformed spec.

use serde::{Deserialize, Serialize};
use swerve_core::{AbsoluteFrame, ConfigError};

/// How a turn converts the spec into per-frame motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnStyle {
    /// Heading delta `angle * frame`, saturating at `sign(angle) *
    /// |max_rotation|`; translation `offset * frame` on every axis,
    /// regardless of saturation.
    #[default]
    RateAccumulated,
    /// Full per-call angle and offsets each invocation. Once `|angle|`
    /// reaches `|max_rotation|`, heading advances by `max_rotation` and
    /// x-translation freezes while y/z keep creeping.
    PerCall,
}

/// Immutable configuration for one (scene, actor, kind) maneuver.
///
/// `angle` and the offsets are per-frame quanta. `max_rotation` is a
/// signed clamp bound; profiles clamp magnitude, and the sign convention
/// is kind-specific.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManeuverSpec {
    /// Rotation quantum.
    #[serde(default)]
    pub angle: f32,
    /// Longitudinal translation quantum.
    #[serde(default)]
    pub x_offset: f32,
    /// Vertical translation quantum.
    #[serde(default)]
    pub y_offset: f32,
    /// Lateral translation quantum.
    #[serde(default)]
    pub z_offset: f32,
    /// Signed rotation clamp bound.
    #[serde(default)]
    pub max_rotation: f32,
    /// Duration of one instance, in maneuver frames. Must be positive.
    pub frames_per_maneuver: u32,
    /// First absolute frame of the window.
    #[serde(default)]
    pub maneuver_starting_frame: AbsoluteFrame,
    /// Exclusive end of the window; `None` means start + duration.
    #[serde(default)]
    pub maneuver_ending_frame: Option<AbsoluteFrame>,
    /// Turn variant. Ignored by non-turn kinds.
    #[serde(default)]
    pub turn_style: TurnStyle,
}

/// Half-open absolute-frame window `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManeuverWindow {
    /// First frame inside the window.
    pub start: AbsoluteFrame,
    /// First frame past the window.
    pub end: AbsoluteFrame,
}

impl ManeuverWindow {
    /// Returns `true` if `frame` lies in `[start, end)`.
    pub fn contains(&self, frame: AbsoluteFrame) -> bool {
        self.start <= frame && frame < self.end
    }

    /// Returns `true` once `frame` has reached the end.
    pub fn is_past(&self, frame: AbsoluteFrame) -> bool {
        frame >= self.end
    }
}

impl ManeuverSpec {
    /// A spec with the given duration and everything else zeroed.
    pub fn with_duration(frames_per_maneuver: u32) -> Self {
        Self {
            angle: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            z_offset: 0.0,
            max_rotation: 0.0,
            frames_per_maneuver,
            maneuver_starting_frame: AbsoluteFrame(0),
            maneuver_ending_frame: None,
            turn_style: TurnStyle::default(),
        }
    }

    /// The absolute-frame window this maneuver is active in.
    pub fn window(&self) -> ManeuverWindow {
        let start = self.maneuver_starting_frame;
        let end = self.maneuver_ending_frame.unwrap_or(AbsoluteFrame(
            start.0.saturating_add(u64::from(self.frames_per_maneuver)),
        ));
        ManeuverWindow { start, end }
    }

    /// Check structural invariants.
    ///
    /// Rejects a zero duration, non-finite parameters, and empty windows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames_per_maneuver == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        let params = [
            ("angle", self.angle),
            ("x_offset", self.x_offset),
            ("y_offset", self.y_offset),
            ("z_offset", self.z_offset),
            ("max_rotation", self.max_rotation),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }
        let window = self.window();
        if window.end <= window.start {
            return Err(ConfigError::InvalidManeuverWindow {
                start: window.start,
                end: window.end,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_duration() {
        let mut spec = ManeuverSpec::with_duration(25);
        spec.maneuver_starting_frame = AbsoluteFrame(10);
        let w = spec.window();
        assert_eq!(w.start, AbsoluteFrame(10));
        assert_eq!(w.end, AbsoluteFrame(35));
        assert!(w.contains(AbsoluteFrame(10)));
        assert!(w.contains(AbsoluteFrame(34)));
        assert!(!w.contains(AbsoluteFrame(35)));
        assert!(!w.contains(AbsoluteFrame(9)));
        assert!(w.is_past(AbsoluteFrame(35)));
    }

    #[test]
    fn explicit_end_overrides_duration() {
        let mut spec = ManeuverSpec::with_duration(5);
        spec.maneuver_ending_frame = Some(AbsoluteFrame(40));
        assert_eq!(spec.window().end, AbsoluteFrame(40));
    }

    #[test]
    fn zero_duration_rejected() {
        assert_eq!(
            ManeuverSpec::with_duration(0).validate(),
            Err(ConfigError::ZeroDuration)
        );
    }

    #[test]
    fn ending_before_start_rejected() {
        let mut spec = ManeuverSpec::with_duration(5);
        spec.maneuver_starting_frame = AbsoluteFrame(20);
        spec.maneuver_ending_frame = Some(AbsoluteFrame(12));
        match spec.validate() {
            Err(ConfigError::InvalidManeuverWindow { start, end }) => {
                assert_eq!(start, AbsoluteFrame(20));
                assert_eq!(end, AbsoluteFrame(12));
            }
            other => panic!("expected InvalidManeuverWindow, got {other:?}"),
        }
    }

    #[test]
    fn empty_window_rejected() {
        let mut spec = ManeuverSpec::with_duration(5);
        spec.maneuver_starting_frame = AbsoluteFrame(3);
        spec.maneuver_ending_frame = Some(AbsoluteFrame(3));
        assert!(matches!(
            spec.validate(),
            Err(ConfigError::InvalidManeuverWindow { .. })
        ));
    }

    #[test]
    fn nan_parameter_rejected() {
        let mut spec = ManeuverSpec::with_duration(5);
        spec.max_rotation = f32::NAN;
        match spec.validate() {
            Err(ConfigError::NonFiniteParameter { name, .. }) => assert_eq!(name, "max_rotation"),
            other => panic!("expected NonFiniteParameter, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let spec: ManeuverSpec = serde_json::from_str(
            r#"{ "angle": 0.7, "z_offset": 0.6, "max_rotation": -0.6, "frames_per_maneuver": 10 }"#,
        )
        .unwrap();
        assert_eq!(spec.x_offset, 0.0);
        assert_eq!(spec.maneuver_starting_frame, AbsoluteFrame(0));
        assert_eq!(spec.maneuver_ending_frame, None);
        assert_eq!(spec.turn_style, TurnStyle::RateAccumulated);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn turn_style_parses_snake_case() {
        let style: TurnStyle = serde_json::from_str("\"per_call\"").unwrap();
        assert_eq!(style, TurnStyle::PerCall);
    }
}
