use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::noise::{NoiseSource, PerlinNoise};
use super::param::ParamValue;
use super::SampleSequence;

/// Largest accepted frequency count. Every way of setting the count clamps
/// to it, so a stray "1e12" from a text field cannot exhaust memory.
pub const MAX_FREQUENCY_COUNT: usize = 100_000;

/*
Waveform Strategies
===================

Each strategy turns the config into `frequency_count + 1` samples. The
frequency count is the number of segments across the plot, not a pitch: it
sets horizontal resolution only.

RANDOM
    Every sample is drawn independently and uniformly from
    [-amplitude/2, amplitude/2]. Unseeded, so two calls never match.

SINE
    A phase accumulator starts at 0 and grows by `scale` per sample:

        sample[i] = sin(phase) * amplitude,   phase += scale

    `scale` is radians per sample. Note the peak is ±amplitude, twice the
    swing of the other strategies.

NOISE
    Walks along the x axis of a coherent noise field at a fixed (y, z):

        x += scale
        sample[i] = -amplitude/2 + noise(x, y, z) * amplitude

    The walk steps before sampling, so the first sample reads x = scale.
    Moving y or z slides the walk onto a neighbouring slice of the field,
    which changes the shape smoothly rather than re-rolling it.
*/

/// Which strategy a generator uses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveKind {
    #[default]
    Random,
    Sine,
    Noise,
}

/// Parameters shared by all strategies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub kind: WaveKind,
    /// Peak-to-peak height for random and noise, peak height for sine.
    pub amplitude: f64,
    /// Phase (sine) or noise x step per sample.
    pub scale: f64,
    /// Sample count minus one, at most [`MAX_FREQUENCY_COUNT`].
    #[cfg_attr(feature = "serde", serde(deserialize_with = "clamped_frequency_count"))]
    frequency_count: usize,
    /// Noise field y coordinate.
    pub noise_y: f64,
    /// Noise field z coordinate.
    pub noise_z: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: WaveKind::Random,
            amplitude: 100.0,
            scale: 0.1,
            frequency_count: 40,
            noise_y: 0.0,
            noise_z: 0.0,
        }
    }
}

#[cfg(feature = "serde")]
fn clamped_frequency_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    usize::deserialize(deserializer).map(|count| count.min(MAX_FREQUENCY_COUNT))
}

impl GeneratorConfig {
    pub fn new(kind: WaveKind, amplitude: f64, scale: f64, frequency_count: usize) -> Self {
        Self {
            kind,
            amplitude,
            scale,
            frequency_count: frequency_count.min(MAX_FREQUENCY_COUNT),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: WaveKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn frequency_count(&self) -> usize {
        self.frequency_count
    }

    /// Set the segment count, clamped to [`MAX_FREQUENCY_COUNT`].
    pub fn set_frequency_count(&mut self, frequency_count: usize) {
        self.frequency_count = frequency_count.min(MAX_FREQUENCY_COUNT);
    }

    /// Number of samples each generation produces.
    pub fn sample_count(&self) -> usize {
        self.frequency_count + 1
    }

    /// Produce a fresh sequence with the configured strategy.
    pub fn generate(&self, rng: &mut impl Rng, noise: &impl NoiseSource) -> SampleSequence {
        match self.kind {
            WaveKind::Random => random_samples(self, rng),
            WaveKind::Sine => sine_samples(self),
            WaveKind::Noise => noise_samples(self, noise),
        }
    }
}

/// Uniform samples in `[-amplitude/2, amplitude/2]`.
pub fn random_samples(config: &GeneratorConfig, rng: &mut impl Rng) -> SampleSequence {
    let max = config.amplitude / 2.0;
    let min = -max;
    (0..config.sample_count())
        .map(|_| min + rng.gen::<f64>() * (max - min))
        .collect()
}

/// `sin(phase) * amplitude` with phase accumulating by `scale` from zero.
pub fn sine_samples(config: &GeneratorConfig) -> SampleSequence {
    let mut phase = 0.0f64;
    (0..config.sample_count())
        .map(|_| {
            let sample = phase.sin() * config.amplitude;
            phase += config.scale;
            sample
        })
        .collect()
}

/// Coherent noise walk along x, starting one `scale` step from the origin.
pub fn noise_samples(config: &GeneratorConfig, noise: &impl NoiseSource) -> SampleSequence {
    let min = config.amplitude / -2.0;
    let mut x = 0.0f64;
    (0..config.sample_count())
        .map(|_| {
            x += config.scale;
            min + noise.noise(x, config.noise_y, config.noise_z) * config.amplitude
        })
        .collect()
}

/// Receiver for generated sequences, normally the animated renderer.
pub trait WaveSink {
    /// Take a new sequence. `do_reset` skips any animation from the old one.
    fn set_data(&mut self, samples: SampleSequence, do_reset: bool);

    /// Drop every stored sequence.
    fn reset(&mut self);
}

/// A detached generator: pushes go nowhere.
impl WaveSink for () {
    fn set_data(&mut self, _samples: SampleSequence, _do_reset: bool) {}

    fn reset(&mut self) {}
}

impl<T: WaveSink + ?Sized> WaveSink for &mut T {
    fn set_data(&mut self, samples: SampleSequence, do_reset: bool) {
        (**self).set_data(samples, do_reset)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Waveform generator bound to a sink.
///
/// # Example
/// ```
/// use saavy_wave::wave::{GeneratorConfig, WaveData, WaveKind};
///
/// let mut wave = WaveData::new(GeneratorConfig::default(), ());
/// wave.set_kind(WaveKind::Sine)
///     .set_amplitude("40")
///     .set_scale("0")
///     .set_frequency_count("8")
///     .generate(false);
///
/// assert_eq!(wave.samples().len(), 9);
/// assert!(wave.samples().iter().all(|&s| s == 0.0));
/// ```
pub struct WaveData<K: WaveSink = (), N: NoiseSource = PerlinNoise> {
    config: GeneratorConfig,
    samples: SampleSequence,
    sink: K,
    noise: N,
    rng: StdRng,
}

impl<K: WaveSink> WaveData<K, PerlinNoise> {
    pub fn new(config: GeneratorConfig, sink: K) -> Self {
        Self {
            config,
            samples: SampleSequence::from(Vec::new()),
            sink,
            noise: PerlinNoise::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl<K: WaveSink, N: NoiseSource> WaveData<K, N> {
    /// Swap the coherent noise source used by [`WaveKind::Noise`].
    pub fn with_noise<M: NoiseSource>(self, noise: M) -> WaveData<K, M> {
        WaveData {
            config: self.config,
            samples: self.samples,
            sink: self.sink,
            noise,
            rng: self.rng,
        }
    }

    pub fn set_kind(&mut self, kind: WaveKind) -> &mut Self {
        self.config.kind = kind;
        self
    }

    pub fn set_amplitude(&mut self, value: impl ParamValue) -> &mut Self {
        self.config.amplitude = value.to_param();
        self
    }

    pub fn set_scale(&mut self, value: impl ParamValue) -> &mut Self {
        self.config.scale = value.to_param();
        self
    }

    pub fn set_noise_y(&mut self, value: impl ParamValue) -> &mut Self {
        self.config.noise_y = value.to_param();
        self
    }

    pub fn set_noise_z(&mut self, value: impl ParamValue) -> &mut Self {
        self.config.noise_z = value.to_param();
        self
    }

    /// Change the sample count driver.
    ///
    /// The sink is reset: an in-flight transition assumes both sequences have
    /// the same length, so it cannot survive a count change. NaN and negative
    /// values become 0; fractions truncate.
    pub fn set_frequency_count(&mut self, value: impl ParamValue) -> &mut Self {
        let previous = self.config.frequency_count;
        self.config.set_frequency_count(value.to_param() as usize);
        log::debug!(
            "frequency count {previous} -> {}, resetting sink",
            self.config.frequency_count
        );
        self.sink.reset();
        self
    }

    /// Replace the current sequence; optionally push it to the sink as well.
    pub fn generate(&mut self, do_push: bool) -> &mut Self {
        self.samples = self.config.generate(&mut self.rng, &self.noise);
        if do_push {
            self.push();
        }
        self
    }

    /// Send the current sequence to the sink as an animated update.
    pub fn push(&mut self) -> &mut Self {
        self.sink.set_data(self.samples.clone(), false);
        self
    }

    pub fn samples(&self) -> &SampleSequence {
        &self.samples
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn kind(&self) -> WaveKind {
        self.config.kind
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn into_sink(self) -> K {
        self.sink
    }
}
