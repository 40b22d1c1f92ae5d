// Character animation system

use super::action::AnimationKey;
use log::debug;
use std::collections::HashMap;
use std::rc::Rc;

/// How often a clip plays through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Loop until something else is played
    Forever,
    /// Play once and hold the last frame
    Once,
}

/// One frame of a clip: a texture and a frame index within it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub texture: String,
    pub index: u32,
}

impl Frame {
    pub fn new(texture: &str, index: u32) -> Self {
        Self {
            texture: texture.to_string(),
            index,
        }
    }
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Key the clip is registered under (e.g. "walk_left")
    pub key: AnimationKey,
    /// Frames in playback order
    pub frames: Vec<Frame>,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub repeat: Repeat,
    /// Whether the sprite is hidden once a `Repeat::Once` clip completes
    pub hide_on_complete: bool,
}

impl AnimationClip {
    /// Create a clip from frames of one sprite sheet
    pub fn new(key: AnimationKey, texture: &str, indices: Vec<u32>, fps: f32, repeat: Repeat) -> Self {
        let frames = indices.into_iter().map(|i| Frame::new(texture, i)).collect();
        Self::from_frames(key, frames, fps, repeat)
    }

    /// Create a clip whose frames are whole textures, one per frame
    pub fn from_textures(key: AnimationKey, textures: &[&str], fps: f32, repeat: Repeat) -> Self {
        let frames = textures.iter().map(|t| Frame::new(t, 0)).collect();
        Self::from_frames(key, frames, fps, repeat)
    }

    pub fn from_frames(key: AnimationKey, frames: Vec<Frame>, fps: f32, repeat: Repeat) -> Self {
        Self {
            key,
            frames,
            frame_duration: 1.0 / fps,
            repeat,
            hide_on_complete: false,
        }
    }

    /// Create a looping animation
    pub fn looping(key: AnimationKey, texture: &str, indices: Vec<u32>, fps: f32) -> Self {
        Self::new(key, texture, indices, fps, Repeat::Forever)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(key: AnimationKey, texture: &str, indices: Vec<u32>, fps: f32) -> Self {
        Self::new(key, texture, indices, fps, Repeat::Once)
    }

    pub fn with_hide_on_complete(mut self, hide: bool) -> Self {
        self.hide_on_complete = hide;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sheet indices of all frames, in order
    pub fn indices(&self) -> Vec<u32> {
        self.frames.iter().map(|f| f.index).collect()
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frames.len() as f32 * self.frame_duration
    }
}

/// Anything clips can be registered into
pub trait AnimationRegistry {
    /// Register a clip; an existing clip with the same key is replaced
    fn register(&mut self, clip: AnimationClip);
}

/// Playback surface the controller drives
pub trait AnimationPlayback {
    /// Whether a clip is registered under `key`
    fn exists(&self, key: &AnimationKey) -> bool;

    /// Key of the clip currently assigned, if any
    fn current_key(&self) -> Option<&AnimationKey>;

    /// Start playing `key`; with `ignore_if_playing` a clip that is already playing is left alone
    fn play(&mut self, key: &AnimationKey, ignore_if_playing: bool);
}

/// All registered clips, shared by every sprite that plays them
#[derive(Debug, Default)]
pub struct AnimationLibrary {
    clips: HashMap<AnimationKey, AnimationClip>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &AnimationKey) -> Option<&AnimationClip> {
        self.clips.get(key)
    }

    pub fn exists(&self, key: &AnimationKey) -> bool {
        self.clips.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl AnimationRegistry for AnimationLibrary {
    fn register(&mut self, clip: AnimationClip) {
        if self.clips.insert(clip.key.clone(), clip).is_some() {
            debug!("Replaced existing animation clip");
        }
    }
}

/// Manages animation playback for one sprite
#[derive(Debug)]
pub struct AnimationPlayer {
    library: Rc<AnimationLibrary>,
    /// Currently assigned clip
    current: Option<AnimationKey>,
    /// Position within the clip's frame list
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
    visible: bool,
    /// Sprite is mirrored horizontally
    flip_horizontal: bool,
}

impl AnimationPlayer {
    pub fn new(library: Rc<AnimationLibrary>) -> Self {
        Self {
            library,
            current: None,
            current_frame: 0,
            frame_timer: 0.0,
            playing: false,
            visible: true,
            flip_horizontal: false,
        }
    }

    /// Advance the current clip by `dt` seconds
    ///
    /// Returns true on the update where a `Repeat::Once` clip completes.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }

        let Some(clip) = self.current.as_ref().and_then(|key| self.library.get(key)) else {
            return false;
        };
        if clip.frames.is_empty() {
            return false;
        }

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frames.len() {
                match clip.repeat {
                    Repeat::Forever => self.current_frame = 0,
                    Repeat::Once => {
                        // Stay on last frame
                        self.current_frame = clip.frames.len() - 1;
                        self.playing = false;
                        self.visible = !clip.hide_on_complete;
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Position within the current clip
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Frame to draw, if a clip is assigned
    pub fn frame(&self) -> Option<&Frame> {
        self.current_clip()?.frames.get(self.current_frame)
    }

    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.current.as_ref().and_then(|key| self.library.get(key))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Check if a one-shot clip has finished
    pub fn is_finished(&self) -> bool {
        match self.current_clip() {
            Some(clip) => clip.repeat == Repeat::Once && !self.playing,
            None => true,
        }
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.library
    }
}

impl AnimationPlayback for AnimationPlayer {
    fn exists(&self, key: &AnimationKey) -> bool {
        self.library.exists(key)
    }

    fn current_key(&self) -> Option<&AnimationKey> {
        self.current.as_ref()
    }

    fn play(&mut self, key: &AnimationKey, ignore_if_playing: bool) {
        if !self.library.exists(key) {
            debug!("Ignoring play of unregistered animation \"{}\"", key);
            return;
        }
        if ignore_if_playing && self.playing && self.current.as_ref() == Some(key) {
            return;
        }

        self.current = Some(key.clone());
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        self.visible = true;
    }
}
