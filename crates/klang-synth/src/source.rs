//! A positioned collection of sound components.

use crate::component::SoundComponent;
use crate::position::{Vec3, distance_attenuation};

/// A sounding object: components plus a position-derived gain.
///
/// The attenuation factor is cached and refreshed only when the source or
/// listener position actually changes; the per-sample path multiplies by
/// the cached value and never recomputes distances.
///
/// Removal is two-phase. [`SoundSource::mark_for_deletion`] flags the
/// source without silencing it; the mixer physically drops it once the flag
/// is set *and* every component has expired, so a marked bell still rings
/// out its tail.
#[derive(Debug, Clone)]
pub struct SoundSource {
    components: Vec<SoundComponent>,
    position: Vec3,
    listener: Vec3,
    attenuation: f64,
    marked_for_deletion: bool,
}

impl SoundSource {
    /// Creates an empty source with source and listener at the origin.
    ///
    /// Coincident positions mean an attenuation of exactly 1.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            position: Vec3::ZERO,
            listener: Vec3::ZERO,
            attenuation: 1.0,
            marked_for_deletion: false,
        }
    }

    /// Adds a component to the source.
    pub fn add_component(&mut self, component: SoundComponent) {
        self.components.push(component);
    }

    /// Attenuated sum of every component at the given time.
    ///
    /// Expired-but-unreaped components still contribute, and a marked
    /// source keeps sounding; only the cleanup pass changes membership.
    #[inline]
    pub fn generate(&mut self, time: f64) -> f64 {
        let mut sum = 0.0;
        for component in &mut self.components {
            sum += component.generate(time);
        }
        self.attenuation * sum
    }

    /// Moves the source, refreshing the cached attenuation when the
    /// position actually changes.
    pub fn set_position(&mut self, position: Vec3) {
        if position != self.position {
            self.position = position;
            self.update_attenuation();
        }
    }

    /// Moves the listener, refreshing the cached attenuation when the
    /// position actually changes.
    pub fn set_listener_position(&mut self, listener: Vec3) {
        if listener != self.listener {
            self.listener = listener;
            self.update_attenuation();
        }
    }

    fn update_attenuation(&mut self) {
        self.attenuation = distance_attenuation(self.position, self.listener);
    }

    /// Drops every component whose lifetime window has closed.
    pub fn remove_expired_components(&mut self, time: f64) {
        self.components.retain(|c| !c.is_expired(time));
    }

    /// Flags the source for removal once it falls silent.
    ///
    /// Marking never stops playback; it only arms [`SoundSource::can_be_removed`].
    pub fn mark_for_deletion(&mut self) {
        self.marked_for_deletion = true;
    }

    /// True when the source is marked *and* has no components left.
    pub fn can_be_removed(&self) -> bool {
        self.marked_for_deletion && self.components.is_empty()
    }

    /// The components currently owned by the source.
    pub fn components(&self) -> &[SoundComponent] {
        &self.components
    }

    /// Source position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Listener position this source attenuates against.
    pub fn listener_position(&self) -> Vec3 {
        self.listener
    }

    /// The cached attenuation factor.
    pub fn attenuation(&self) -> f64 {
        self.attenuation
    }

    /// Whether the source has been marked for deletion.
    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}

impl Default for SoundSource {
    fn default() -> Self {
        Self::new()
    }
}
