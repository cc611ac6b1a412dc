use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    sync::mpsc::{self, Sender},
    thread,
};

use anyhow::{Context, Result};
use rodio::{source::Source, Decoder, OutputStream, Sink};
use tracing::warn;

/// Handle to a looping playback resource. Started at most once; the owner
/// pairs acquisition with an unconditional stop-and-rewind on release.
pub trait Playback: Send {
    fn start(&mut self) -> Result<()>;
    fn stop_and_rewind(&mut self);
}

enum TrackCommand {
    StopAndRewind,
}

/// Looping track played on a dedicated thread. The thread owns the
/// `OutputStream`, which is not `Send`; the handle talks to it over a
/// channel.
pub struct LoopingTrack {
    path: PathBuf,
    volume: f32,
    tx: Option<Sender<TrackCommand>>,
}

impl LoopingTrack {
    pub fn new(path: PathBuf, volume: f32) -> Self {
        Self {
            path,
            volume,
            tx: None,
        }
    }
}

impl Playback for LoopingTrack {
    fn start(&mut self) -> Result<()> {
        if self.tx.is_some() {
            return Ok(());
        }
        let file = File::open(&self.path)
            .with_context(|| format!("opening music file {}", self.path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("decoding music file {}", self.path.display()))?;
        let looped = decoder.repeat_infinite();
        let volume = self.volume;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let Ok((_stream, handle)) = OutputStream::try_default() else {
                warn!("audio output unavailable; overlay music disabled");
                return;
            };
            let sink = match Sink::try_new(&handle) {
                Ok(sink) => sink,
                Err(err) => {
                    warn!(?err, "failed to create audio sink");
                    return;
                }
            };
            sink.set_volume(volume.clamp(0.0, 2.0));
            sink.append(looped);
            // Park until stop-and-rewind arrives or the handle is dropped.
            let _ = rx.recv();
            sink.stop();
        });
        self.tx = Some(tx);
        Ok(())
    }

    fn stop_and_rewind(&mut self) {
        // Stopping drops the decoded source; a later start would decode
        // from the beginning of the file, i.e. the track is rewound.
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(TrackCommand::StopAndRewind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_reports_missing_file() {
        let mut track = LoopingTrack::new(PathBuf::from("/nonexistent/ward-console.ogg"), 0.7);
        assert!(track.start().is_err());
    }

    #[test]
    fn stop_without_start_is_a_no_op() {
        let mut track = LoopingTrack::new(PathBuf::from("/nonexistent/ward-console.ogg"), 0.7);
        track.stop_and_rewind();
        track.stop_and_rewind();
    }
}
