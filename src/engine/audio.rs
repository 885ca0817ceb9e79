// Audio sink seam: gameplay code fires sound cues, a backend plays them

/// Fire-and-forget sound playback
pub trait AudioSink {
    /// Start playing a track. `volume` is in [0, 1].
    fn play_track(&mut self, id: &str, volume: f32, looping: bool);
}

/// Sound cues emitted by the character controller
pub mod tracks {
    pub const JUMP: &str = "sfx/jump.wav";
    pub const ROLL: &str = "sfx/roll.wav";
    pub const ATTACK: &str = "sfx/kick.wav";
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_track(&mut self, _id: &str, _volume: f32, _looping: bool) {}
}

/// Logs every cue at debug level (used until a real backend exists)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_track(&mut self, id: &str, volume: f32, looping: bool) {
        log::debug!("play track {} (volume {:.2}, looping: {})", id, volume, looping);
    }
}
