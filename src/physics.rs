//! Platformer physics collaborator.
//!
//! The update step never integrates gravity or resolves ground contact
//! itself; it asks a `Physics` implementation.  `PlatformerPhysics` is the
//! one the game ships with; tests substitute scripted doubles.

use crate::entities::{Body, GroundTile, Player};

/// Vertical slack when deciding whether the player rests on a tile.
const REST_TOLERANCE: f32 = 0.5;

pub trait Physics {
    /// Apply gravity, integrate one frame of velocity, and resolve contact
    /// with the ground.  Returns the moved player.
    fn update(&self, player: &Player, ground: &[GroundTile]) -> Player;

    /// True iff the player stands on a ground tile with no vertical velocity.
    fn can_jump(&self, player: &Player, ground: &[GroundTile]) -> bool;

    /// Exact rectangle intersection.  Touching edges do not overlap.
    fn overlaps(&self, a: &Body, b: &Body) -> bool {
        a.left() < b.right() && a.right() > b.left() && a.bottom() < b.top() && a.top() > b.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformerPhysics {
    pub gravity: f32,
}

impl PlatformerPhysics {
    pub fn new(gravity: f32) -> Self {
        PlatformerPhysics { gravity }
    }
}

impl Physics for PlatformerPhysics {
    fn update(&self, player: &Player, ground: &[GroundTile]) -> Player {
        let mut body = player.body;
        body.vy -= self.gravity;
        body.integrate();

        // Only a falling body lands; a rising one passes through tile tops.
        if body.vy <= 0.0 {
            let landing = ground
                .iter()
                .filter(|tile| self.overlaps(&body, &tile.body))
                .map(|tile| tile.body.top())
                .fold(None, |best: Option<f32>, top| Some(best.map_or(top, |b| b.max(top))));
            if let Some(top) = landing {
                body.set_bottom(top);
                body.vy = 0.0;
            }
        }

        Player {
            body,
            ..player.clone()
        }
    }

    fn can_jump(&self, player: &Player, ground: &[GroundTile]) -> bool {
        let body = &player.body;
        body.vy == 0.0
            && ground.iter().any(|tile| {
                body.left() < tile.body.right()
                    && body.right() > tile.body.left()
                    && (body.bottom() - tile.body.top()).abs() <= REST_TOLERANCE
            })
    }
}
