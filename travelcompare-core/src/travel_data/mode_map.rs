//! A fixed-size map with exactly one slot per [`TravelMode`].

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::TravelMode;

/// One value of `T` for each travel mode.
///
/// Unlike a `HashMap`, every mode is always present, so lookups cannot fail.
///
/// # Examples
///
/// ```
/// use travelcompare_core::{ModeMap, TravelMode};
///
/// let labels = ModeMap::from_fn(TravelMode::label);
/// assert_eq!(labels[TravelMode::Walk], "On foot");
/// assert_eq!(labels.iter().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeMap<T> {
    /// Value for [`TravelMode::Drive`].
    pub drive: T,
    /// Value for [`TravelMode::Transit`].
    pub transit: T,
    /// Value for [`TravelMode::TwoWheeler`].
    pub two_wheeler: T,
    /// Value for [`TravelMode::Bicycle`].
    pub bicycle: T,
    /// Value for [`TravelMode::Walk`].
    pub walk: T,
}

impl<T> ModeMap<T> {
    /// Build a map by evaluating `f` once per mode, in [`TravelMode::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(TravelMode) -> T) -> Self {
        Self {
            drive: f(TravelMode::Drive),
            transit: f(TravelMode::Transit),
            two_wheeler: f(TravelMode::TwoWheeler),
            bicycle: f(TravelMode::Bicycle),
            walk: f(TravelMode::Walk),
        }
    }

    /// Borrow the value for `mode`.
    #[must_use]
    pub const fn get(&self, mode: TravelMode) -> &T {
        match mode {
            TravelMode::Drive => &self.drive,
            TravelMode::Transit => &self.transit,
            TravelMode::TwoWheeler => &self.two_wheeler,
            TravelMode::Bicycle => &self.bicycle,
            TravelMode::Walk => &self.walk,
        }
    }

    /// Mutably borrow the value for `mode`.
    pub const fn get_mut(&mut self, mode: TravelMode) -> &mut T {
        match mode {
            TravelMode::Drive => &mut self.drive,
            TravelMode::Transit => &mut self.transit,
            TravelMode::TwoWheeler => &mut self.two_wheeler,
            TravelMode::Bicycle => &mut self.bicycle,
            TravelMode::Walk => &mut self.walk,
        }
    }

    /// Iterate `(mode, value)` pairs in [`TravelMode::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TravelMode, &T)> {
        TravelMode::ALL.into_iter().map(|mode| (mode, self.get(mode)))
    }

    /// Iterate the values in [`TravelMode::ALL`] order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    /// Apply `f` to every value, producing a new map.
    pub fn map_ref<U>(&self, mut f: impl FnMut(&T) -> U) -> ModeMap<U> {
        ModeMap::from_fn(|mode| f(self.get(mode)))
    }
}

impl<T> Index<TravelMode> for ModeMap<T> {
    type Output = T;

    fn index(&self, mode: TravelMode) -> &Self::Output {
        self.get(mode)
    }
}

impl<T> FromIterator<(TravelMode, T)> for ModeMap<Option<T>> {
    /// Collect mode/value pairs; modes that never appear stay `None`.
    /// A later pair for the same mode replaces an earlier one.
    fn from_iter<I: IntoIterator<Item = (TravelMode, T)>>(iter: I) -> Self {
        let mut map = Self::from_fn(|_| None);
        for (mode, value) in iter {
            *map.get_mut(mode) = Some(value);
        }
        map
    }
}
