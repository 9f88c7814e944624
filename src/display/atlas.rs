//! Glyph atlas: the terminal stand-in for textures.  Every sprite is looked
//! up by a logical key and yields a stable string for the renderer.

use std::collections::HashMap;

use crate::entities::DecorationKind;
use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Frog,
    FrogJump,
    Ground,
    Soil,
    Sprout,
    Mushroom,
    Rock,
    Bush,
    Fly,
    FlySpinA,
    FlySpinB,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 11] = [
        SpriteKey::Frog,
        SpriteKey::FrogJump,
        SpriteKey::Ground,
        SpriteKey::Soil,
        SpriteKey::Sprout,
        SpriteKey::Mushroom,
        SpriteKey::Rock,
        SpriteKey::Bush,
        SpriteKey::Fly,
        SpriteKey::FlySpinA,
        SpriteKey::FlySpinB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpriteKey::Frog => "frog",
            SpriteKey::FrogJump => "frog_jump",
            SpriteKey::Ground => "ground",
            SpriteKey::Soil => "soil",
            SpriteKey::Sprout => "sprout",
            SpriteKey::Mushroom => "mushroom",
            SpriteKey::Rock => "rock",
            SpriteKey::Bush => "bush",
            SpriteKey::Fly => "fly",
            SpriteKey::FlySpinA => "fly_spin_a",
            SpriteKey::FlySpinB => "fly_spin_b",
        }
    }

    pub fn from_name(name: &str) -> Option<SpriteKey> {
        SpriteKey::ALL.into_iter().find(|key| key.name() == name)
    }

    fn default_glyph(self) -> &'static str {
        match self {
            SpriteKey::Frog => "(°°)",
            SpriteKey::FrogJump => "\\°°/",
            SpriteKey::Ground => "▀",
            SpriteKey::Soil => "▒",
            SpriteKey::Sprout => "ѱ",
            SpriteKey::Mushroom => "♠",
            SpriteKey::Rock => "▲",
            SpriteKey::Bush => "♣♣",
            SpriteKey::Fly => ">o<",
            SpriteKey::FlySpinA => "x",
            SpriteKey::FlySpinB => "+",
        }
    }
}

impl From<DecorationKind> for SpriteKey {
    fn from(kind: DecorationKind) -> Self {
        match kind {
            DecorationKind::Sprout => SpriteKey::Sprout,
            DecorationKind::Mushroom => SpriteKey::Mushroom,
            DecorationKind::Rock => SpriteKey::Rock,
            DecorationKind::Bush => SpriteKey::Bush,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    glyphs: HashMap<SpriteKey, String>,
}

impl Default for GlyphAtlas {
    fn default() -> Self {
        let glyphs = SpriteKey::ALL
            .into_iter()
            .map(|key| (key, key.default_glyph().to_string()))
            .collect();
        GlyphAtlas { glyphs }
    }
}

impl GlyphAtlas {
    /// Default glyphs with the named entries replaced.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self> {
        let mut atlas = GlyphAtlas::default();
        for (name, glyph) in overrides {
            let key = SpriteKey::from_name(name).ok_or_else(|| {
                GameError::InvalidConfig(format!("unknown sprite `{name}` in glyphs"))
            })?;
            if glyph.is_empty() {
                return Err(GameError::InvalidConfig(format!(
                    "glyph for `{name}` must not be empty"
                )));
            }
            atlas.glyphs.insert(key, glyph.clone());
        }
        Ok(atlas)
    }

    pub fn glyph(&self, key: SpriteKey) -> &str {
        self.glyphs
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_glyph())
    }
}
