use crate::core::{Category, Demo, Result, Transcript};

/// The interface the client already speaks.
pub trait MediaPlayer {
    fn play(&self, format: &str, file: &str) -> String;
}

/// The incompatible interface of the newer players.
pub trait AdvancedMediaPlayer {
    fn play_file(&self, file: &str) -> String;
}

pub struct VlcPlayer;
pub struct Mp4Player;

impl AdvancedMediaPlayer for VlcPlayer {
    fn play_file(&self, file: &str) -> String {
        format!("Playing vlc file. Name: {}", file)
    }
}

impl AdvancedMediaPlayer for Mp4Player {
    fn play_file(&self, file: &str) -> String {
        format!("Playing mp4 file. Name: {}", file)
    }
}

/// Only knows mp3 natively; anything else is reported as unsupported.
pub struct AudioPlayer;

impl MediaPlayer for AudioPlayer {
    fn play(&self, format: &str, file: &str) -> String {
        if format.eq_ignore_ascii_case("mp3") {
            format!("Playing mp3 file. Name: {}", file)
        } else {
            format!("Invalid media. {} format not supported", format)
        }
    }
}

/// Bridges the client interface onto an advanced player.
pub struct MediaAdapter {
    inner: Box<dyn AdvancedMediaPlayer>,
}

impl MediaAdapter {
    pub fn new(inner: Box<dyn AdvancedMediaPlayer>) -> Self {
        Self { inner }
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, _format: &str, file: &str) -> String {
        self.inner.play_file(file)
    }
}

pub struct AdapterDemo;

impl Demo for AdapterDemo {
    fn name(&self) -> &'static str {
        "adapter"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Advanced media players adapted to the basic player interface"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let audio = AudioPlayer;
        transcript.note(audio.play("mp3", "morning_tune.mp3"));

        let mp4 = MediaAdapter::new(Box::new(Mp4Player));
        transcript.note(mp4.play("mp4", "alone.mp4"));

        let vlc = MediaAdapter::new(Box::new(VlcPlayer));
        transcript.note(vlc.play("vlc", "far_far_away.vlc"));

        // No adapter in the path: the basic player cannot handle vlc.
        transcript.note(audio.play("vlc", "far_far_away.vlc"));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_player_supports_only_mp3() {
        let player = AudioPlayer;
        assert_eq!(
            player.play("mp3", "a.mp3"),
            "Playing mp3 file. Name: a.mp3"
        );
        assert_eq!(
            player.play("avi", "b.avi"),
            "Invalid media. avi format not supported"
        );
    }

    #[test]
    fn test_adapter_delegates_to_advanced_player() {
        let adapter = MediaAdapter::new(Box::new(VlcPlayer));
        assert_eq!(
            adapter.play("vlc", "clip.vlc"),
            "Playing vlc file. Name: clip.vlc"
        );
    }

    #[test]
    fn test_demo_covers_both_paths() {
        let mut transcript = Transcript::new();
        AdapterDemo.run(&mut transcript).unwrap();
        assert_eq!(transcript.lines().len(), 4);
        assert!(transcript.contains("Invalid media. vlc format not supported"));
    }
}
