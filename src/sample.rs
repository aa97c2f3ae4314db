//! PK-indexed coordinate samples and the tables built from them.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::InterpError;

/// A geographic position at a kilometric point along the route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub pk: f64,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
}

impl Sample {
    pub fn new(pk: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            pk,
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64, f64)> for Sample {
    fn from((pk, latitude, longitude): (f64, f64, f64)) -> Self {
        Self::new(pk, latitude, longitude)
    }
}

/// Source samples ordered by strictly increasing PK.
///
/// Stored column-wise so that each coordinate can be handed to a
/// one-dimensional interpolant as a plain slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct SampleTable {
    pk: Vec<f64>,
    latitude: Vec<f64>,
    longitude: Vec<f64>,
}

impl SampleTable {
    /// Build a table, checking that every value is finite and that PK
    /// values are strictly increasing.
    ///
    /// The minimum number of samples depends on the interpolation method
    /// and is checked when the interpolant is built.
    ///
    /// # Errors
    /// * [`InterpError::InvalidInput`] on a non-finite value, or on a PK
    ///   that is not greater than its predecessor
    pub fn new(samples: Vec<Sample>) -> Result<Self, InterpError> {
        for (i, s) in samples.iter().enumerate() {
            if !(s.pk.is_finite() && s.latitude.is_finite() && s.longitude.is_finite()) {
                return Err(InterpError::invalid(format!(
                    "sample {i} has a non-finite value"
                )));
            }
        }

        if let Some((i, (a, b))) = samples
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| b.pk <= a.pk)
        {
            return Err(InterpError::invalid(format!(
                "PK values must be strictly increasing, but sample {} has PK {} after {}",
                i + 1,
                b.pk,
                a.pk
            )));
        }

        let n = samples.len();
        let mut table = Self {
            pk: Vec::with_capacity(n),
            latitude: Vec::with_capacity(n),
            longitude: Vec::with_capacity(n),
        };
        for s in samples {
            table.pk.push(s.pk);
            table.latitude.push(s.latitude);
            table.longitude.push(s.longitude);
        }

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.pk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pk.is_empty()
    }

    pub fn pk(&self) -> &[f64] {
        &self.pk
    }

    pub fn latitude(&self) -> &[f64] {
        &self.latitude
    }

    pub fn longitude(&self) -> &[f64] {
        &self.longitude
    }

    /// PK range `(min, max)` covered by the table, if it has any samples.
    pub fn pk_range(&self) -> Option<(f64, f64)> {
        Some((*self.pk.first()?, *self.pk.last()?))
    }

    pub fn get(&self, i: usize) -> Option<Sample> {
        Some(Sample::new(
            *self.pk.get(i)?,
            self.latitude[i],
            self.longitude[i],
        ))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        (0..self.len()).map(|i| Sample::new(self.pk[i], self.latitude[i], self.longitude[i]))
    }

    pub fn to_vec(&self) -> Vec<Sample> {
        self.iter().collect()
    }
}

impl TryFrom<Vec<Sample>> for SampleTable {
    type Error = InterpError;

    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

impl From<SampleTable> for Vec<Sample> {
    fn from(table: SampleTable) -> Self {
        table.to_vec()
    }
}

/// Samples evaluated on a uniform PK grid, in grid order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpolatedTable {
    samples: Vec<Sample>,
}

impl InterpolatedTable {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a InterpolatedTable {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
