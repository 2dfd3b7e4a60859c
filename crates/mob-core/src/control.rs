//! Control resources and the enum-indexed containers built on them.
//!
//! A [`Control`] is one of a small, closed set of mutually exclusive
//! capabilities an entity exhibits at once: only one goal may drive movement,
//! only one may steer the head, and so on.
//!
//! Both per-entity tables in the selector (who owns each control, which
//! controls are disabled) are [`ControlMap`]s: a fixed `[T; Control::COUNT]`
//! array indexed by the control's ordinal.  No hashing, no allocation, and the
//! whole table fits in a cache line.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::CoreError;

// ── Control ───────────────────────────────────────────────────────────────────

/// A mutually exclusive control resource.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Control {
    /// Locomotion: pathing, wandering, fleeing.
    Move = 0,
    /// Head / look direction.
    Look = 1,
    /// Jumping and swimming upward.
    Jump = 2,
    /// Attack-target selection.
    Target = 3,
}

impl Control {
    /// Number of variants.  Every `ControlMap` has exactly this many slots.
    pub const COUNT: usize = 4;

    /// All variants in ordinal order.
    pub const ALL: [Control; Control::COUNT] =
        [Control::Move, Control::Look, Control::Jump, Control::Target];

    /// Dense ordinal in `0..Control::COUNT`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`][Self::index].
    pub fn from_index(index: usize) -> Result<Control, CoreError> {
        Control::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::ControlOutOfRange(index))
    }

    /// Lower-case label, used in logs and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Control::Move   => "move",
            Control::Look   => "look",
            Control::Jump   => "jump",
            Control::Target => "target",
        }
    }

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Control {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownControl(s.to_owned()))
    }
}

// ── ControlSet ────────────────────────────────────────────────────────────────

/// A set of controls stored as a bit mask.
///
/// `Copy` and one byte wide, so goals can hand it out by value and the
/// selector can snapshot it per entry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ControlSet(u8);

impl ControlSet {
    pub const EMPTY: ControlSet = ControlSet(0);

    /// Every control.
    pub const ALL: ControlSet = ControlSet((1 << Control::COUNT) - 1);

    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builder-style insert, usable in `const` contexts via chained calls.
    #[inline]
    pub const fn with(self, control: Control) -> Self {
        ControlSet(self.0 | (1 << control as u8))
    }

    /// Add `control`.  Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, control: Control) -> bool {
        let absent = !self.contains(control);
        self.0 |= control.bit();
        absent
    }

    /// Remove `control`.  Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, control: Control) -> bool {
        let present = self.contains(control);
        self.0 &= !control.bit();
        present
    }

    #[inline]
    pub fn contains(self, control: Control) -> bool {
        self.0 & control.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn union(self, other: ControlSet) -> ControlSet {
        ControlSet(self.0 | other.0)
    }

    #[inline]
    pub fn intersects(self, other: ControlSet) -> bool {
        self.0 & other.0 != 0
    }

    /// `true` if every control in `self` is also in `other`.
    #[inline]
    pub fn is_subset(self, other: ControlSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate members in ordinal order.
    pub fn iter(self) -> impl Iterator<Item = Control> {
        Control::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for ControlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ControlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(c.as_str())?;
        }
        f.write_str("}")
    }
}

impl FromIterator<Control> for ControlSet {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        let mut set = ControlSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl<const N: usize> From<[Control; N]> for ControlSet {
    fn from(controls: [Control; N]) -> Self {
        controls.into_iter().collect()
    }
}

impl From<Control> for ControlSet {
    fn from(control: Control) -> Self {
        ControlSet(control.bit())
    }
}

// Serialized as a list of control names, e.g. `["move", "jump"]`.
#[cfg(feature = "serde")]
impl serde::Serialize for ControlSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ControlSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let controls = <Vec<Control> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(controls.into_iter().collect())
    }
}

// ── ControlMap ────────────────────────────────────────────────────────────────

/// A dense table with one `T` per [`Control`], indexed by ordinal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ControlMap<T> {
    slots: [T; Control::COUNT],
}

impl<T> ControlMap<T> {
    /// Build a map by calling `f` once per control, in ordinal order.
    pub fn from_fn(mut f: impl FnMut(Control) -> T) -> Self {
        Self { slots: std::array::from_fn(|i| f(Control::ALL[i])) }
    }

    /// `(control, &value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Control, &T)> {
        Control::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }
}

impl<T: Clone> ControlMap<T> {
    /// Overwrite every slot with `value`.
    pub fn fill(&mut self, value: T) {
        self.slots.fill(value);
    }
}

impl<T: Default> Default for ControlMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Control> for ControlMap<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, control: Control) -> &T {
        &self.slots[control.index()]
    }
}

impl<T> IndexMut<Control> for ControlMap<T> {
    #[inline(always)]
    fn index_mut(&mut self, control: Control) -> &mut T {
        &mut self.slots[control.index()]
    }
}
