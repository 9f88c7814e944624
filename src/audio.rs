//! Audio collaborator.  Fire-and-forget cues; the terminal build rings the
//! bell once per cue.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Jump,
    Hit,
}

pub trait Audio {
    fn play(&mut self, sound: Sound);
}

/// Collects cues during a frame and rings the terminal bell when flushed.
#[derive(Debug, Default)]
pub struct TerminalBell {
    pending: Vec<Sound>,
    muted: bool,
}

impl TerminalBell {
    pub fn new(muted: bool) -> Self {
        TerminalBell {
            pending: Vec::new(),
            muted,
        }
    }

    pub fn pending(&self) -> &[Sound] {
        &self.pending
    }

    /// Emit one BEL per queued cue.  Several bells in one frame collapse
    /// into one audible ring on most terminals, which is fine.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        if !self.muted {
            for _ in self.pending.drain(..) {
                out.queue(Print('\x07'))?;
            }
        }
        self.pending.clear();
        Ok(())
    }
}

impl Audio for TerminalBell {
    fn play(&mut self, sound: Sound) {
        tracing::trace!(?sound, "sound cue");
        self.pending.push(sound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_rings_once_per_cue() {
        let mut bell = TerminalBell::new(false);
        bell.play(Sound::Jump);
        bell.play(Sound::Hit);
        let mut out = Vec::new();
        bell.flush(&mut out).unwrap();
        assert_eq!(out, b"\x07\x07");
        assert!(bell.pending().is_empty());
    }

    #[test]
    fn muted_bell_drops_cues() {
        let mut bell = TerminalBell::new(true);
        bell.play(Sound::Hit);
        let mut out = Vec::new();
        bell.flush(&mut out).unwrap();
        assert!(out.is_empty());
        assert!(bell.pending().is_empty());
    }
}
