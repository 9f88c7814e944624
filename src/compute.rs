//! Game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`.  Side effects are limited
//! to the injected collaborators: the RNG, the `Physics` implementation, and
//! the `Audio` sink.

use rand::Rng;
use tracing::{debug, info};

use crate::audio::{Audio, Sound};
use crate::config::GameConfig;
use crate::entities::{
    Body, Bug, BugKind, Decoration, DecorationKind, DyingBug, GameState, GroundTile, Motion,
    Player, SpawnTimer,
};
use crate::physics::Physics;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.  Also used to restart a session.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let ground_top = config.ground_top();

    let player = Player {
        body: Body::from_corner(
            config.player_left,
            ground_top,
            config.player_width,
            config.player_height,
        ),
        motion: Motion::Grounded,
    };

    let ground = (0..config.tile_count())
        .map(|i| GroundTile {
            body: Body::from_corner(
                i as f32 * config.tile_size,
                0.0,
                config.tile_size,
                config.tile_size,
            ),
        })
        .collect();

    let decorations = (0..config.decoration_count)
        .map(|_| {
            let left = rng.gen_range(0.0..config.width);
            new_decoration(&config, left, 0.0, rng)
        })
        .collect();

    let spawn_timer = SpawnTimer {
        remaining: config.spawn_interval.sample(rng) as f32,
    };

    info!(
        tiles = config.tile_count(),
        decorations = config.decoration_count,
        first_spawn = spawn_timer.remaining,
        "game set up"
    );

    GameState {
        player,
        ground,
        decorations,
        bugs: Vec::new(),
        dying_bugs: Vec::new(),
        score: 0,
        spawn_timer,
        frame: 0,
        config,
    }
}

fn new_decoration(config: &GameConfig, left: f32, vx: f32, rng: &mut impl Rng) -> Decoration {
    let kind = DecorationKind::ALL[rng.gen_range(0..DecorationKind::ALL.len())];
    let mut body = Body::from_corner(
        left,
        config.ground_top(),
        config.decoration_size,
        config.decoration_size,
    );
    body.vx = vx;
    Decoration { kind, body }
}

/// Horizontal velocity of the scenery for the player's current motion.
pub fn scroll_velocity(state: &GameState) -> f32 {
    match state.player.motion {
        Motion::Grounded => 0.0,
        Motion::Airborne => -state.config.scroll_speed,
    }
}

fn set_scroll(ground: &mut [GroundTile], decorations: &mut [Decoration], vx: f32) {
    for tile in ground.iter_mut() {
        tile.body.vx = vx;
    }
    for decoration in decorations.iter_mut() {
        decoration.body.vx = vx;
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

/// Grounded → Airborne.  A no-op unless the physics reports the frog can jump.
pub fn attempt_jump(
    state: &GameState,
    physics: &impl Physics,
    audio: &mut impl Audio,
) -> GameState {
    if !physics.can_jump(&state.player, &state.ground) {
        return state.clone();
    }

    audio.play(Sound::Jump);
    debug!(frame = state.frame, "jump");

    let mut next = state.clone();
    next.player.body.vy = next.config.jump_speed;
    next.player.motion = Motion::Airborne;
    let vx = -next.config.scroll_speed;
    set_scroll(&mut next.ground, &mut next.decorations, vx);
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  `dt` is the elapsed time in
/// seconds and only drives the spawn timer; movement is per frame.
pub fn tick(
    state: &GameState,
    dt: f32,
    physics: &impl Physics,
    audio: &mut impl Audio,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = state.clone();

    // ── 1. Player physics ─────────────────────────────────────────────────────
    next.player = physics.update(&next.player, &next.ground);

    // ── 2. Landing ────────────────────────────────────────────────────────────
    land(&mut next, physics);

    // ── 3. Scenery ────────────────────────────────────────────────────────────
    scroll_ground(&mut next.ground, next.config.conveyor_length());
    scroll_decorations(&mut next, rng);

    // ── 4. Bugs ───────────────────────────────────────────────────────────────
    let scroll = scroll_velocity(&next);
    integrate_bugs(&mut next.bugs, &mut next.dying_bugs, scroll);
    purge_bugs(&mut next);

    // ── 5. Collisions ─────────────────────────────────────────────────────────
    resolve_collisions(&mut next, physics, audio, rng);

    // ── 6. Spawning ───────────────────────────────────────────────────────────
    advance_spawn_timer(&mut next, dt, rng);

    next.frame += 1;
    next
}

/// Airborne → Grounded once the physics reports the frog can jump again.
fn land(state: &mut GameState, physics: &impl Physics) {
    if state.player.motion == Motion::Airborne && physics.can_jump(&state.player, &state.ground) {
        state.player.motion = Motion::Grounded;
        set_scroll(&mut state.ground, &mut state.decorations, 0.0);
        debug!(frame = state.frame, "landed");
    }
}

/// Move every tile by its velocity and wrap the ones that left the screen
/// to the far end of the conveyor.
pub fn scroll_ground(ground: &mut [GroundTile], conveyor_length: f32) {
    for tile in ground.iter_mut() {
        tile.body.integrate();
        if tile.body.right() < 0.0 {
            tile.body.x += conveyor_length;
        }
    }
}

fn scroll_decorations(state: &mut GameState, rng: &mut impl Rng) {
    for decoration in state.decorations.iter_mut() {
        decoration.body.integrate();
    }

    let before = state.decorations.len();
    state.decorations.retain(|d| d.body.right() >= 0.0);
    let gone = before - state.decorations.len();

    let vx = scroll_velocity(state);
    for _ in 0..gone {
        let left = state.config.width + state.config.decoration_respawn.sample(rng);
        let replacement = new_decoration(&state.config, left, vx, rng);
        state.decorations.push(replacement);
    }
}

/// Integrate every bug by one frame.  While the world scrolls, the scroll
/// delta is added to each bug's velocity for the integration and taken off
/// again afterwards, so the bugs drift with the ground without their own
/// speed changing.
pub fn integrate_bugs(bugs: &mut [Bug], dying_bugs: &mut [DyingBug], scroll: f32) {
    for bug in bugs.iter_mut() {
        bug.body.vx += scroll;
    }
    for dying in dying_bugs.iter_mut() {
        dying.bug.body.vx += scroll;
    }

    for bug in bugs.iter_mut() {
        bug.body.integrate();
    }
    for dying in dying_bugs.iter_mut() {
        dying.bug.body.integrate();
        dying.angle += dying.spin;
    }

    for bug in bugs.iter_mut() {
        bug.body.vx -= scroll;
    }
    for dying in dying_bugs.iter_mut() {
        dying.bug.body.vx -= scroll;
    }
}

fn purge_bugs(state: &mut GameState) {
    let width = state.config.width;
    let height = state.config.height;
    state.bugs.retain(|bug| bug.body.right() >= 0.0);
    state
        .dying_bugs
        .retain(|dying| dying.bug.body.left() <= width && dying.bug.body.bottom() <= height);
}

fn resolve_collisions(
    state: &mut GameState,
    physics: &impl Physics,
    audio: &mut impl Audio,
    rng: &mut impl Rng,
) {
    let player = state.player.body;
    let (hit, alive): (Vec<Bug>, Vec<Bug>) = std::mem::take(&mut state.bugs)
        .into_iter()
        .partition(|bug| physics.overlaps(&player, &bug.body));
    state.bugs = alive;

    for bug in hit {
        audio.play(Sound::Hit);
        state.score += bug.value;
        debug!(kind = ?bug.kind, value = bug.value, score = state.score, "bug squashed");
        state.dying_bugs.push(spin_away(bug, &state.config, rng));
    }
}

/// Turn a struck bug into a dying one with a random launch angle and spin.
pub fn spin_away(mut bug: Bug, config: &GameConfig, rng: &mut impl Rng) -> DyingBug {
    let angle = config.death_angle.sample(rng).to_radians();
    bug.body.vx = config.death_speed * angle.cos();
    bug.body.vy = config.death_speed * angle.sin();

    let magnitude = config.death_spin.sample(rng);
    let spin = if rng.gen_bool(0.5) { magnitude } else { -magnitude };

    DyingBug {
        bug,
        spin,
        angle: 0.0,
    }
}

/// Count the timer down by `dt`; on expiry spawn one fly at the right edge
/// and re-arm from the configured interval.
pub fn advance_spawn_timer(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    state.spawn_timer.remaining -= dt;
    if state.spawn_timer.remaining > 0.0 {
        return;
    }

    let config = &state.config;
    let centre_y = config.bug_spawn_height.sample(rng) as f32;
    let mut body = Body::from_corner(
        config.width,
        centre_y - config.bug_height / 2.0,
        config.bug_width,
        config.bug_height,
    );
    body.vx = -config.bug_speed;
    state.bugs.push(Bug::new(BugKind::Fly, body));

    state.spawn_timer.remaining = config.spawn_interval.sample(rng) as f32;
    debug!(
        y = centre_y,
        next_in = state.spawn_timer.remaining,
        "bug spawned"
    );
}
