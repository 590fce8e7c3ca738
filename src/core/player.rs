//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A match always has exactly two seats. Seat 0 paints with the `a`/`A`
//! symbols, seat 1 with `b`/`B`.
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `PlayerId`. Used for hands, counts,
//! gauges and per-round moves.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::UnknownSeat;

/// Number of seats in a match.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Deserialization refuses indices that name no seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first seat.
    pub const P0: PlayerId = PlayerId(0);

    /// The second seat.
    pub const P1: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Seat index out of range");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Lowercase board symbol for this seat's normal ink.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    /// Resolve a lowercase or uppercase seat letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Self::P0),
            'b' => Some(Self::P1),
            _ => None,
        }
    }

    /// Iterate over both seats in order.
    ///
    /// ```
    /// use tableturf_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::P0, PlayerId::P1]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = UnknownSeat;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(UnknownSeat(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tableturf_engine::core::{PlayerId, PlayerPair};
///
/// let mut gauge: PlayerPair<u32> = PlayerPair::new(|_| 0);
/// gauge[PlayerId::P1] += 3;
///
/// assert_eq!(gauge[PlayerId::P0], 0);
/// assert_eq!(gauge[PlayerId::P1], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P0), factory(PlayerId::P1)],
        }
    }

    /// Create a pair from explicit values, seat 0 first.
    pub fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Transform each seat's value.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerPair<U> {
        PlayerPair::new(|p| f(p, &self.data[p.index()]))
    }

    /// Fallible variant of [`PlayerPair::map`]; stops at the first error in seat order.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(PlayerId, &T) -> Result<U, E>,
    ) -> Result<PlayerPair<U>, E> {
        let first = f(PlayerId::P0, &self.data[0])?;
        let second = f(PlayerId::P1, &self.data[1])?;
        Ok(PlayerPair::from_array([first, second]))
    }

    /// Consume the pair into its array form.
    pub fn into_array(self) -> [T; PLAYER_COUNT] {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
