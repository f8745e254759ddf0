//! Waveform sample generation.
//!
//! A [`WaveData`] owns a [`GeneratorConfig`] and produces fresh
//! [`SampleSequence`]s from one of three strategies. Generated sequences can be
//! pushed into any [`WaveSink`], normally the animated renderer.

/// Generator configuration, strategies, and the sink binding.
pub mod generator;
/// Coherent noise sources.
pub mod noise;
/// Text and numeric parameter parsing for setters.
pub mod param;

use std::ops::Deref;
use std::rc::Rc;

pub use generator::{GeneratorConfig, WaveData, WaveKind, WaveSink};
pub use noise::{NoiseSource, PerlinNoise};
pub use param::{parse_param, ParamValue};

/// Immutable, cheaply cloneable run of samples.
///
/// One sample per horizontal plot position. Clones share storage, so handing
/// the same sequence to a renderer and keeping it in the generator is free.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence(Rc<[f64]>);

impl SampleSequence {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for SampleSequence {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for SampleSequence {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples.into())
    }
}

impl From<&[f64]> for SampleSequence {
    fn from(samples: &[f64]) -> Self {
        Self(samples.into())
    }
}

impl<const N: usize> From<[f64; N]> for SampleSequence {
    fn from(samples: [f64; N]) -> Self {
        Self(Rc::from(&samples[..]))
    }
}

impl FromIterator<f64> for SampleSequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
