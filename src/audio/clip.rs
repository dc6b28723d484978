use super::backend::AudioFrame;
use crate::error::CaptureError;
use chrono::{DateTime, Utc};
use std::io::Cursor;
use std::time::Duration;

/// Encoding tag carried by every clip.
pub const CLIP_MIME: &str = "audio/wav";

/// One finished capture: frames concatenated in arrival order and
/// encoded as an in-memory WAV. Immutable once built.
#[derive(Debug, Clone)]
pub struct Clip {
    bytes: Vec<u8>,
    duration: Duration,
    sample_rate: u32,
    channels: u16,
    captured_at: DateTime<Utc>,
}

impl Clip {
    /// Concatenate `frames` (arrival order) into a single WAV clip.
    pub fn from_frames(
        frames: &[AudioFrame],
        sample_rate: u32,
        channels: u16,
    ) -> Result<Self, CaptureError> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)
                .map_err(|e| CaptureError::Encode(e.to_string()))?;
            for frame in frames {
                for &sample in &frame.samples {
                    writer
                        .write_sample(sample)
                        .map_err(|e| CaptureError::Encode(e.to_string()))?;
                }
            }
            writer
                .finalize()
                .map_err(|e| CaptureError::Encode(e.to_string()))?;
        }

        let sample_count: usize = frames.iter().map(|f| f.samples.len()).sum();
        let duration = Duration::from_secs_f64(
            sample_count as f64 / (sample_rate as f64 * channels as f64),
        );

        Ok(Self {
            bytes: cursor.into_inner(),
            duration,
            sample_rate,
            channels,
            captured_at: Utc::now(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn mime(&self) -> &'static str {
        CLIP_MIME
    }
}

/// Client-side checks a clip must pass before any network spend.
/// Both exist to reject empty/silent captures early.
#[derive(Debug, Clone)]
pub struct AcceptanceGates {
    /// Minimum elapsed audio duration
    pub min_duration: Duration,
    /// Minimum encoded clip size
    pub min_bytes: usize,
}

impl Default for AcceptanceGates {
    fn default() -> Self {
        Self {
            min_duration: Duration::from_millis(1000),
            min_bytes: 4096,
        }
    }
}

impl AcceptanceGates {
    /// Duration gate first, then size gate.
    pub fn check(&self, clip: &Clip) -> Result<(), CaptureError> {
        if clip.duration() < self.min_duration {
            return Err(CaptureError::TooShort {
                actual_ms: clip.duration().as_millis() as u64,
                min_ms: self.min_duration.as_millis() as u64,
            });
        }
        if clip.len() < self.min_bytes {
            return Err(CaptureError::TooQuiet {
                actual_bytes: clip.len(),
                min_bytes: self.min_bytes,
            });
        }
        Ok(())
    }
}
