// Transient visual effects (the double-jump dust cloud)

use crate::engine::assets::AssetManager;
use crate::game::characters::{
    AnimationClip, AnimationKey, AnimationLibrary, AnimationPlayback, AnimationPlayer,
    AnimationRegistry, Repeat,
};
use glam::Vec2;
use log::{debug, warn};
use std::rc::Rc;

/// Something that can put a one-shot effect into the world
pub trait EffectSpawner {
    /// Spawn a dust cloud with its bottom edge at `feet`, drawn at `depth`
    ///
    /// Does nothing when the effect's frames or clip are not loaded.
    fn spawn_dust_cloud(&mut self, feet: Vec2, depth: i32);
}

/// Dust cloud assets and timing
#[derive(Debug, Clone)]
pub struct DustCloudConfig {
    /// Texture keys, one per frame
    pub frame_keys: &'static [&'static str],
    /// File of each frame, relative to the asset root
    pub frame_paths: &'static [&'static str],
    pub clip_key: &'static str,
    pub fps: f32,
    /// Distance below the feet of the cloud's bottom anchor: half the 64 px character frame
    /// minus a 30 px lift
    pub y_offset: f32,
}

pub const DUST_CLOUD: DustCloudConfig = DustCloudConfig {
    frame_keys: &["dust1", "dust2", "dust3", "dust4"],
    frame_paths: &[
        "sprites/fx/dust/FX052_01.png",
        "sprites/fx/dust/FX052_02.png",
        "sprites/fx/dust/FX052_03.png",
        "sprites/fx/dust/FX052_04.png",
    ],
    clip_key: "dust_cloud",
    fps: 16.0,
    y_offset: 64.0 * 0.5 - 30.0,
};

impl Default for DustCloudConfig {
    fn default() -> Self {
        DUST_CLOUD
    }
}

impl DustCloudConfig {
    pub fn key(&self) -> AnimationKey {
        AnimationKey::new(self.clip_key)
    }

    /// Load every frame texture, skipping the ones that fail
    pub fn load_frames(&self, assets: &mut AssetManager) -> usize {
        self.frame_keys
            .iter()
            .zip(self.frame_paths)
            .filter(|(key, path)| assets.try_load_texture(key, path).is_some())
            .count()
    }

    /// Register the clip from whichever frames are loaded
    ///
    /// Returns false, registering nothing, when no frame is available.
    pub fn register(&self, registry: &mut impl AnimationRegistry, assets: &AssetManager) -> bool {
        let frames: Vec<&str> = self
            .frame_keys
            .iter()
            .copied()
            .filter(|key| assets.exists(key))
            .collect();

        if frames.is_empty() {
            warn!("No dust cloud frames loaded, double-jump effect disabled");
            return false;
        }

        let clip = AnimationClip::from_textures(self.key(), &frames, self.fps, Repeat::Once)
            .with_hide_on_complete(true);
        registry.register(clip);
        true
    }
}

/// One live effect
#[derive(Debug)]
pub struct Effect {
    /// Bottom-center anchor in world pixels
    pub position: Vec2,
    pub depth: i32,
    pub animation: AnimationPlayer,
}

/// Live effects; each is removed once its one-shot clip completes
#[derive(Debug)]
pub struct EffectPool {
    library: Rc<AnimationLibrary>,
    config: DustCloudConfig,
    effects: Vec<Effect>,
}

impl EffectPool {
    pub fn new(library: Rc<AnimationLibrary>, config: DustCloudConfig) -> Self {
        Self {
            library,
            config,
            effects: Vec::new(),
        }
    }

    /// Whether the dust cloud can be shown at all
    pub fn dust_available(&self) -> bool {
        self.library
            .get(&self.config.key())
            .is_some_and(|clip| !clip.frames.is_empty())
    }

    /// Advance every effect and drop the finished ones
    pub fn update(&mut self, dt: f32) {
        self.effects.retain_mut(|effect| !effect.animation.update(dt));
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl EffectSpawner for EffectPool {
    fn spawn_dust_cloud(&mut self, feet: Vec2, depth: i32) {
        if !self.dust_available() {
            return;
        }

        let mut animation = AnimationPlayer::new(Rc::clone(&self.library));
        animation.play(&self.config.key(), false);

        let position = Vec2::new(feet.x, feet.y + self.config.y_offset);
        debug!("Dust cloud at ({:.0}, {:.0})", position.x, position.y);
        self.effects.push(Effect {
            position,
            depth,
            animation,
        });
    }
}
