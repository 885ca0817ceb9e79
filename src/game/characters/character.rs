// Player character controller: movement, actions, collision and animation

use glam::IVec2;

use crate::core::math::{clamp, pixels_for_tick};
use crate::core::Rect;
use crate::engine::audio::{tracks, AudioSink, NullAudio};
use crate::engine::physics::{CollisionMap, CollisionResolver, Direction};
use crate::engine::renderer::{Renderer, SheetId};
use crate::game::combat::{AttackMessage, AttackSink, Target};

use super::animation::{AnimationId, AnimationSequencer};
use super::cooldown::CooldownBank;
use super::effect::Effect;
use super::state::{ActionState, Facing};
use super::stats::CharacterStats;
use super::CharacterError;

/// A controllable platformer character.
///
/// The character borrows the collision map it lives in; all state changes go
/// through the intent methods (`move_toward`, `jump`, `roll`, `attack`,
/// `take_damage`) and the per-tick `update`.
pub struct Character<'m> {
    name: String,
    stats: CharacterStats,
    resolver: CollisionResolver<'m>,

    /// Collision box; the sprite sits `hitbox_margin_x` to its left
    hitbox: Rect,
    facing: Facing,
    /// Pixels per tick, positive is up
    velocity_y: f32,
    health: i32,

    grounded: bool,
    wall_adjacent: bool,
    can_jump: bool,
    action: ActionState,

    /// Move intent for the coming tick; consumed by `update`
    move_intent: Option<Facing>,
    recoil_direction: Facing,
    cooldowns: CooldownBank,
    animation: AnimationSequencer,
    effects: Vec<Effect>,
    camera: IVec2,
    audio: Box<dyn AudioSink>,
}

impl<'m> Character<'m> {
    /// Create a character whose sprite's top-left corner is at `spawn`
    pub fn new(
        name: &str,
        spawn: IVec2,
        stats: CharacterStats,
        map: &'m CollisionMap,
    ) -> Result<Self, CharacterError> {
        stats.validate()?;

        let resolver = CollisionResolver::new(map.obstacles(), stats.step_up_margin);
        let hitbox = Rect::from_corner(
            IVec2::new(spawn.x + stats.hitbox_margin_x, spawn.y),
            stats.hitbox_size,
        );
        if resolver.is_blocked(&hitbox) {
            return Err(CharacterError::SpawnObstructed {
                x: spawn.x,
                y: spawn.y,
            });
        }

        let grounded = resolver.grounded_beneath(&hitbox);
        let wall_adjacent = resolver.wall_adjacent(&hitbox);
        let facing = Facing::default();
        let animation = AnimationSequencer::new(AnimationId::idle(facing), stats.animation_frame_time);

        log::info!(
            "Spawned {} at ({}, {}) with {} health{}",
            name,
            spawn.x,
            spawn.y,
            stats.max_health,
            if grounded { "" } else { " (airborne)" }
        );

        Ok(Self {
            name: name.to_string(),
            health: stats.max_health,
            stats,
            resolver,
            hitbox,
            facing,
            velocity_y: 0.0,
            grounded,
            wall_adjacent,
            can_jump: grounded,
            action: ActionState::Idle,
            move_intent: None,
            recoil_direction: facing,
            cooldowns: CooldownBank::new(),
            animation,
            effects: Vec::new(),
            camera: IVec2::ZERO,
            audio: Box::new(NullAudio),
        })
    }

    /// Route sound cues to `audio`
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Ask to run one tick's worth toward `facing`. Must be repeated every
    /// tick to keep running. Ignored while rolling, attacking or dead.
    pub fn move_toward(&mut self, facing: Facing) {
        if !self.action.can_act() {
            return;
        }
        self.facing = facing;
        self.move_intent = Some(facing);
    }

    /// Jump from the ground, or off a wall while airborne.
    ///
    /// Returns false (and changes nothing) when the jump is not allowed.
    pub fn jump(&mut self) -> bool {
        if !self.action.can_act() || !self.can_jump || self.cooldowns.jump.is_active() {
            return false;
        }

        if self.grounded {
            self.set_action(ActionState::Jumping);
        } else {
            if !self.resolver.wall_adjacent(&self.hitbox) {
                return false;
            }
            let previous = self.animation.current();
            let fallback = if previous.is_wall_jump() {
                AnimationId::jump(self.facing)
            } else {
                previous
            };
            self.animation
                .play(AnimationId::wall_jump(self.facing), fallback);
            self.set_action(ActionState::WallJumping);
        }

        self.velocity_y = self.stats.jump_impulse;
        self.grounded = false;
        self.can_jump = false;
        self.cooldowns.jump.start(self.stats.jump_cooldown);
        self.audio.play_track(tracks::JUMP, 1.0, false);
        true
    }

    /// Start a roll in the facing direction. Grants invincibility.
    pub fn roll(&mut self) -> bool {
        if !self.action.can_act() {
            return false;
        }

        self.cooldowns.roll.start(self.stats.roll_time);
        self.cooldowns.invincible.start(self.stats.invincible_time);
        self.set_action(ActionState::Rolling);
        self.animation.play(
            AnimationId::roll(self.facing),
            AnimationId::idle(self.facing),
        );
        self.audio.play_track(tracks::ROLL, 1.0, false);
        true
    }

    /// Swing at whatever is in front of the character and report it to `sink`
    pub fn attack(&mut self, sink: &mut dyn AttackSink) -> bool {
        if !self.action.can_act() {
            return false;
        }

        self.cooldowns.attack.start(self.stats.attack_time);
        self.set_action(ActionState::Attacking);
        self.animation.play(
            AnimationId::attack(self.facing),
            AnimationId::idle(self.facing),
        );

        let hitbox = self.attack_hitbox();
        let sheet = match self.facing {
            Facing::Right => SheetId::AttackEffectRight,
            Facing::Left => SheetId::AttackEffectLeft,
        };
        let mut effect = Effect::new(
            sheet,
            hitbox,
            0,
            self.stats.attack_effect_frames,
            self.stats.attack_effect_frame_time,
        );
        effect.set_camera(self.camera);
        self.effects.push(effect);

        sink.add_message(AttackMessage {
            target: Target::Enemy,
            damage: self.stats.attack_damage,
            hitbox,
            knockback: self.facing,
        });
        self.audio.play_track(tracks::ATTACK, 1.0, false);
        true
    }

    fn attack_hitbox(&self) -> Rect {
        let position = self.position();
        let x = match self.facing {
            Facing::Right => position.x,
            Facing::Left => position.x - self.stats.attack_reach_left,
        };
        Rect::from_corner(
            IVec2::new(x, position.y - self.stats.attack_rise),
            self.stats.attack_effect_size,
        )
    }

    /// Apply damage from a source on the right (`from_right`) or the left.
    ///
    /// Ignored while invincible or dead. Returns whether the hit landed.
    pub fn take_damage(&mut self, amount: i32, from_right: bool) -> bool {
        if self.action.is_dead() || self.cooldowns.invincible.is_active() {
            return false;
        }

        self.health = (self.health - amount.max(0)).max(0);
        self.recoil_direction = if from_right { Facing::Left } else { Facing::Right };
        self.cooldowns.recoil.start(self.stats.recoil_time);
        self.cooldowns.invincible.start(self.stats.invincible_time);
        log::debug!("{} took {} damage, {} health left", self.name, amount, self.health);

        if self.health == 0 {
            self.die();
        }
        true
    }

    fn die(&mut self) {
        self.set_action(ActionState::Dead);
        self.move_intent = None;
        self.animation
            .play(AnimationId::death(self.facing), AnimationId::DeathIdle);
        log::info!("{} died", self.name);
    }

    /// Advance the character by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);

        // Timers first, so an action ending this tick frees the character now
        let expired = self.cooldowns.tick(dt);
        if expired.attack && self.action == ActionState::Attacking {
            self.set_action(ActionState::Idle);
        }
        if expired.roll && self.action == ActionState::Rolling {
            self.set_action(ActionState::Idle);
        }

        // Horizontal motion
        let intent = self.move_intent.take().filter(|_| self.action.can_act());
        if self.action == ActionState::Rolling {
            let speed = self.stats.run_speed * self.stats.roll_speed_modifier;
            self.move_axis(self.facing.direction(), pixels_for_tick(speed, dt));
        } else if let Some(facing) = intent {
            self.move_axis(facing.direction(), pixels_for_tick(self.stats.run_speed, dt));
        }

        // Vertical motion
        if self.resolver.ceiling_above(&self.hitbox) {
            self.velocity_y = self.velocity_y.min(self.stats.ceiling_nudge);
        }
        if self.grounded {
            self.velocity_y = 0.0;
        } else {
            self.velocity_y -= self.stats.gravity * dt;
        }
        let max = self.stats.max_vertical_speed;
        self.velocity_y = clamp(self.velocity_y, -max, max);
        if self.velocity_y < 0.0 {
            self.move_axis(Direction::Down, (-self.velocity_y) as i32);
        } else {
            self.move_axis(Direction::Up, self.velocity_y as i32);
        }

        // Knockback fades out over the recoil window
        if self.cooldowns.recoil.is_active() {
            let strength = self.cooldowns.recoil.fraction_of(self.stats.recoil_time);
            let amount = pixels_for_tick(self.stats.recoil_speed * strength, dt);
            self.move_axis(self.recoil_direction.direction(), amount);
        }

        self.grounded = self.resolver.grounded_beneath(&self.hitbox);
        if self.action.can_act() {
            self.select_free_state(intent.is_some());
        }

        self.wall_adjacent = self.resolver.wall_adjacent(&self.hitbox);
        if !self.action.is_dead()
            && !self.can_jump
            && self.wall_adjacent
            && !self.cooldowns.jump.is_active()
        {
            self.can_jump = true;
        }

        for effect in &mut self.effects {
            effect.set_camera(self.camera);
            effect.update(dt);
        }
        self.effects.retain(|effect| !effect.is_expired());

        self.animation.tick(dt);
    }

    /// Pick idle/moving/airborne state and animation when no action is running
    fn select_free_state(&mut self, moving: bool) {
        if self.grounded {
            if moving {
                self.set_action(ActionState::Moving);
                self.animation.change_state(AnimationId::moving(self.facing));
            } else {
                self.set_action(ActionState::Idle);
                self.animation.change_state(AnimationId::idle(self.facing));
            }
            self.can_jump = true;
        } else if self.animation.current().is_wall_jump() {
            // The wall-jump animation runs to completion before normal air animation
            self.set_action(ActionState::WallJumping);
        } else {
            self.set_action(ActionState::Jumping);
            self.animation.change_state(AnimationId::jump(self.facing));
        }
    }

    fn move_axis(&mut self, direction: Direction, amount: i32) {
        self.hitbox = self
            .resolver
            .resolve_axis_move(self.hitbox, direction, amount);
    }

    fn set_action(&mut self, action: ActionState) {
        if self.action != action {
            log::debug!(
                "{}: {} -> {}",
                self.name,
                self.action.name(),
                action.name()
            );
            self.action = action;
        }
    }

    /// Draw the character and its effects, shifted by the camera offset
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_frame(
            SheetId::Player,
            self.position() - self.camera,
            self.animation.frame(),
        );
        for effect in &self.effects {
            effect.render(renderer);
        }
    }

    /// Set the camera offset used for rendering
    pub fn set_camera(&mut self, camera: IVec2) {
        self.camera = camera;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-left corner of the sprite
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.hitbox.x - self.stats.hitbox_margin_x, self.hitbox.y)
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    #[allow(dead_code)]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[allow(dead_code)]
    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        !self.action.is_dead()
    }

    #[allow(dead_code)]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[allow(dead_code)]
    pub fn is_wall_adjacent(&self) -> bool {
        self.wall_adjacent
    }

    #[allow(dead_code)]
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn action(&self) -> ActionState {
        self.action
    }

    #[allow(dead_code)]
    pub fn animation(&self) -> &AnimationSequencer {
        &self.animation
    }

    #[allow(dead_code)]
    pub fn cooldowns(&self) -> &CooldownBank {
        &self.cooldowns
    }

    #[allow(dead_code)]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    #[allow(dead_code)]
    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }
}
