//! Widget model for the in-game HUD.
//!
//! [`UiModel`] is plain state: a heart indicator bar, score and coin labels,
//! a new-high-score banner, and a root visibility flag. The observers in
//! [`crate::ui_sync`] mutate it in response to publisher notifications; what
//! a renderer does with the model is outside this crate.

use bevy::prelude::Resource;
use log::info;
use serde::Serialize;

/// RGBA colour used by score and coin labels by default.
pub const NORMAL_TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// RGBA colour applied to the score label once the high score is beaten.
pub const RECORD_TEXT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// A single health indicator instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Indicator {
    /// Whether the indicator is shown.
    pub visible: bool,
}

/// Bar of health indicators cloned from a retained, hidden template.
///
/// Rebuilding destroys every prior instance and instantiates fresh visible
/// copies; the template itself is never shown and never destroyed.
#[derive(Clone, Debug, Default, Serialize)]
pub struct IndicatorBar {
    template: Indicator,
    active: Vec<Indicator>,
}

impl Default for Indicator {
    fn default() -> Self {
        // The template spawns hidden; clones are made visible on rebuild.
        Self { visible: false }
    }
}

impl IndicatorBar {
    /// Replaces all active indicators with `count` visible template clones.
    pub fn rebuild(&mut self, count: u32) {
        self.active.clear();
        for _ in 0..count {
            let mut instance = self.template;
            instance.visible = true;
            self.active.push(instance);
        }
    }

    /// Currently instantiated indicators, template excluded.
    #[must_use]
    pub fn active(&self) -> &[Indicator] {
        &self.active
    }
}

/// A text label with a colour, e.g. the score or coin readout.
#[derive(Clone, Debug, Serialize)]
pub struct TextLabel {
    /// Rendered text content.
    pub text: String,
    /// RGBA colour of the text.
    pub color: [f32; 4],
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: NORMAL_TEXT_COLOR,
        }
    }
}

/// The "new high score" banner.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Banner {
    /// Whether the banner is shown.
    pub visible: bool,
}

/// Aggregate HUD state synchronised with the game-state publishers.
#[derive(Resource, Clone, Debug, Serialize)]
pub struct UiModel {
    /// Whether the HUD as a whole is shown.
    pub root_visible: bool,
    /// Health indicator bar.
    pub hearts: IndicatorBar,
    /// Score readout.
    pub score: TextLabel,
    /// Coin count readout.
    pub coins: TextLabel,
    /// Banner shown once the high score is beaten.
    pub new_high_banner: Banner,
}

impl Default for UiModel {
    fn default() -> Self {
        // Banner and indicator template start hidden; the root is shown.
        Self {
            root_visible: true,
            hearts: IndicatorBar::default(),
            score: TextLabel::default(),
            coins: TextLabel::default(),
            new_high_banner: Banner::default(),
        }
    }
}

impl UiModel {
    /// Rebuilds the heart bar to show exactly `count` indicators.
    pub fn apply_health(&mut self, count: u32) {
        self.hearts.rebuild(count);
    }

    /// Updates the coin readout.
    pub fn set_coins(&mut self, count: u32) {
        self.coins.text = count.to_string();
    }

    /// Updates the score readout.
    pub fn set_score(&mut self, score: u64) {
        self.score.text = score.to_string();
    }

    /// Shows the high-score banner and recolours the score readout.
    /// Idempotent across repeated notifications.
    pub fn mark_high_score(&mut self) {
        self.new_high_banner.visible = true;
        self.score.color = RECORD_TEXT_COLOR;
    }

    /// Hides the entire HUD at game end.
    pub fn hide(&mut self) {
        info!("hiding HUD");
        self.root_visible = false;
    }
}
