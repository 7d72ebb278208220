use super::{AudioBackend, Cue};
use crate::constants::{ALARM_SOUND_PATH, TICK_SOUND_PATH, TOCK_SOUND_PATH};
use crate::error::{Result, TimerError};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decoded clip that can be cloned cheaply for every playback
type Clip = Buffered<Decoder<BufReader<File>>>;

/// The three timer sounds; each is `None` if it failed to load
pub struct SoundBank {
    tick: Option<Clip>,
    tock: Option<Clip>,
    alarm: Option<Clip>,
}

impl SoundBank {
    pub fn empty() -> Self {
        Self {
            tick: None,
            tock: None,
            alarm: None,
        }
    }

    /// Load every sound under `resource_root`
    ///
    /// A missing or undecodable file only disables its own cue.
    pub fn load(resource_root: &Path) -> Self {
        let mut bank = Self::empty();
        for cue in Cue::ALL {
            let path = resource_root.join(sound_path(cue));
            match load_clip(&path) {
                Ok(clip) => {
                    log::info!("Loaded {} sound from {}", cue, path.display());
                    *bank.slot(cue) = Some(clip);
                }
                Err(e) => log::error!("Error loading {} sound: {}", cue, e),
            }
        }
        bank
    }

    pub fn get(&self, cue: Cue) -> Option<&Clip> {
        match cue {
            Cue::Tick => self.tick.as_ref(),
            Cue::Tock => self.tock.as_ref(),
            Cue::Alarm => self.alarm.as_ref(),
        }
    }

    pub fn loaded_count(&self) -> usize {
        Cue::ALL.iter().filter(|cue| self.get(**cue).is_some()).count()
    }

    fn slot(&mut self, cue: Cue) -> &mut Option<Clip> {
        match cue {
            Cue::Tick => &mut self.tick,
            Cue::Tock => &mut self.tock,
            Cue::Alarm => &mut self.alarm,
        }
    }
}

fn sound_path(cue: Cue) -> &'static str {
    match cue {
        Cue::Tick => TICK_SOUND_PATH,
        Cue::Tock => TOCK_SOUND_PATH,
        Cue::Alarm => ALARM_SOUND_PATH,
    }
}

fn load_clip(path: &Path) -> Result<Clip> {
    let file = File::open(path).map_err(|e| TimerError::resource(path, e))?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| TimerError::resource(path, e))?;
    Ok(decoder.buffered())
}

/// Playback through the default output device
///
/// Every short cue gets a fresh sink so overlapping cues mix instead of
/// queueing behind each other. The alarm has a sink of its own so Reset can
/// stop it without cutting a tick mid-way.
pub struct RodioBackend {
    // Dropping the stream closes the device, keep it alive with the backend
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds: SoundBank,
    effects: Vec<Sink>,
    alarm: Option<Sink>,
}

impl RodioBackend {
    pub fn open(sounds: SoundBank) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().map_err(|e| {
            TimerError::ResourceLoad {
                resource: "default audio output".to_string(),
                reason: e.to_string(),
            }
        })?;
        log::info!(
            "Audio output opened ({} of {} sounds loaded)",
            sounds.loaded_count(),
            Cue::ALL.len()
        );

        Ok(Self {
            _stream: stream,
            handle,
            sounds,
            effects: Vec::new(),
            alarm: None,
        })
    }

    fn new_sink(&self) -> Result<Sink> {
        Sink::try_new(&self.handle).map_err(|e| TimerError::Playback(e.to_string()))
    }

    fn clip(&self, cue: Cue) -> Result<Clip> {
        self.sounds
            .get(cue)
            .cloned()
            .ok_or_else(|| TimerError::Playback(format!("{} sound not loaded", cue)))
    }
}

impl AudioBackend for RodioBackend {
    fn has_clip(&self, cue: Cue) -> bool {
        self.sounds.get(cue).is_some()
    }

    fn play(&mut self, cue: Cue) -> Result<()> {
        let clip = self.clip(cue)?;
        prune_finished(&mut self.effects);
        let sink = self.new_sink()?;
        sink.append(clip);
        self.effects.push(sink);
        Ok(())
    }

    fn start_loop(&mut self, cue: Cue) -> Result<()> {
        let clip = self.clip(cue)?;
        self.stop_loop();
        let sink = self.new_sink()?;
        sink.append(clip.repeat_infinite());
        self.alarm = Some(sink);
        Ok(())
    }

    fn stop_loop(&mut self) {
        if let Some(sink) = self.alarm.take() {
            sink.stop();
        }
    }

    fn is_looping(&self) -> bool {
        self.alarm.as_ref().is_some_and(|sink| !sink.empty())
    }

    fn stop_all(&mut self) {
        for sink in self.effects.drain(..) {
            sink.stop();
        }
        self.stop_loop();
    }
}

/// Drop sinks whose cue has finished playing
fn prune_finished(sinks: &mut Vec<Sink>) {
    sinks.retain(|sink| !sink.empty());
}
