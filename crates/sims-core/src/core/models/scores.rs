use crate::core::validation::is_valid_score;
use serde::Serialize;
use std::collections::TryReserveError;
use thiserror::Error;

/// Value inserted by [`ScoreList::finalize`] when no score was entered.
pub const DEFAULT_SCORE: f64 = 0.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Score {0} is outside the allowed range [0, 100]")]
    OutOfRange(f64),
    #[error("Failed to grow score list: {0}")]
    Allocation(#[from] TryReserveError),
}

/// An insertion-ordered list of scores with an incrementally maintained total.
///
/// Every stored value lies in `[0, 100]`. The total is only ever touched by
/// [`append`](Self::append) and [`replace_all`](Self::replace_all), which keep it in sync.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreList {
    values: Vec<f64>,
    total: f64,
}

/// A score paired with the score-name preset at the same position, if there is one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledScore<'a> {
    pub label: Option<&'a str>,
    pub value: f64,
}

impl ScoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `values`, failing on the first out-of-range value.
    pub fn from_values(values: &[f64]) -> Result<Self, ScoreError> {
        let mut list = Self::new();
        list.replace_all(values)?;
        Ok(list)
    }

    pub fn append(&mut self, value: f64) -> Result<(), ScoreError> {
        if !is_valid_score(value) {
            return Err(ScoreError::OutOfRange(value));
        }
        self.values.try_reserve(1)?;
        self.values.push(value);
        self.total += value;
        Ok(())
    }

    /// Replaces the whole list. On error the previous contents are left untouched.
    pub fn replace_all(&mut self, values: &[f64]) -> Result<(), ScoreError> {
        if let Some(&bad) = values.iter().find(|v| !is_valid_score(**v)) {
            return Err(ScoreError::OutOfRange(bad));
        }

        let mut fresh = Vec::new();
        fresh.try_reserve_exact(values.len())?;
        fresh.extend_from_slice(values);

        self.total = fresh.iter().sum();
        self.values = fresh;
        Ok(())
    }

    /// Applies the zero-default policy: an empty list receives a single
    /// [`DEFAULT_SCORE`] entry. Returns whether the default was applied.
    pub fn finalize(&mut self) -> bool {
        if !self.values.is_empty() {
            return false;
        }
        self.values.push(DEFAULT_SCORE);
        self.total = DEFAULT_SCORE;
        true
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labelled<'a, S: AsRef<str>>(&self, score_names: &'a [S]) -> Vec<LabelledScore<'a>> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| LabelledScore {
                label: score_names.get(i).map(AsRef::as_ref),
                value,
            })
            .collect()
    }
}
