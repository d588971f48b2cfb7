// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call control buttons.
//!
//! A [`ButtonDescriptor`] says *what* one button shows for the current call
//! state; its [`ButtonKey`] says *which slot* it occupies. The accept button
//! and the end button share [`ButtonKey::AcceptOrEnd`], so answering a call
//! morphs the accept button into the end button instead of replacing it.
//!
//! [`classify_buttons`] derives the rows from a [`CallPhase`](crate::call::CallPhase);
//! [`present`] turns a descriptor into the content a rendering layer draws.

mod classify;
mod content;

pub use classify::{ButtonRows, VideoShape, classify_buttons, sound_output};
pub use content::{
    AccessibilityTraits, Appearance, ButtonColor, ButtonContent, ButtonImage, ButtonLabels,
    ButtonPresentation, present,
};

use crate::element::ElementKey;

/// Stable identity of a button slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ButtonKey {
    /// Standalone accept slot. Accepting is normally routed through
    /// [`AcceptOrEnd`](Self::AcceptOrEnd) so the slot survives answering.
    Accept,
    /// Accept while ringing, end once connected.
    AcceptOrEnd,
    /// Decline an incoming call.
    Decline,
    /// Camera on/off toggle.
    EnableCamera,
    /// Front/back camera switch.
    SwitchCamera,
    /// Audio route control.
    SoundOutput,
    /// Microphone mute toggle.
    Mute,
}

impl ElementKey for ButtonKey {
    fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::AcceptOrEnd => "acceptOrEnd",
            Self::Decline => "decline",
            Self::EnableCamera => "enableCamera",
            Self::SwitchCamera => "switchCamera",
            Self::SoundOutput => "soundOutput",
            Self::Mute => "mute",
        }
    }
}

/// Icon variant of the audio route button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundOutput {
    /// Built-in receiver.
    Builtin,
    /// Loudspeaker (drawn filled).
    Speaker,
    /// Generic bluetooth device.
    Bluetooth,
    /// AirPods.
    AirPods,
    /// AirPods Pro.
    AirPodsPro,
    /// AirPods Max.
    AirPodsMax,
    /// Wired headphones.
    Headphones,
}

/// Which flavour of red "end" button is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndKind {
    /// Cancel an outgoing call that has not been answered.
    Outgoing,
    /// Decline an incoming call.
    Decline,
    /// Hang up a connected call.
    End,
}

/// What a single button shows for the current call state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonDescriptor {
    /// Green accept button.
    Accept,
    /// Red end/decline/cancel button.
    End(EndKind),
    /// Camera toggle.
    EnableCamera {
        /// Camera or screencast is running.
        is_active: bool,
        /// The toggle can be pressed.
        is_enabled: bool,
        /// The camera is starting up.
        is_loading: bool,
        /// The running source is a screencast.
        is_screencast: bool,
    },
    /// Camera switch.
    SwitchCamera {
        /// The switch can be pressed.
        is_enabled: bool,
    },
    /// Audio route control.
    SoundOutput(SoundOutput),
    /// Mute toggle.
    Mute {
        /// The microphone is muted.
        is_muted: bool,
    },
}

impl ButtonDescriptor {
    /// Returns the slot this descriptor occupies.
    #[must_use]
    pub const fn key(&self) -> ButtonKey {
        match self {
            Self::Accept | Self::End(EndKind::Outgoing | EndKind::End) => ButtonKey::AcceptOrEnd,
            Self::End(EndKind::Decline) => ButtonKey::Decline,
            Self::EnableCamera { .. } => ButtonKey::EnableCamera,
            Self::SwitchCamera { .. } => ButtonKey::SwitchCamera,
            Self::SoundOutput(_) => ButtonKey::SoundOutput,
            Self::Mute { .. } => ButtonKey::Mute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_and_end_share_a_slot() {
        assert_eq!(ButtonDescriptor::Accept.key(), ButtonKey::AcceptOrEnd);
        assert_eq!(
            ButtonDescriptor::End(EndKind::End).key(),
            ButtonKey::AcceptOrEnd
        );
        assert_eq!(
            ButtonDescriptor::End(EndKind::Outgoing).key(),
            ButtonKey::AcceptOrEnd
        );
        assert_eq!(
            ButtonDescriptor::End(EndKind::Decline).key(),
            ButtonKey::Decline
        );
    }

    #[test]
    fn keys_ignore_display_data() {
        assert_eq!(
            ButtonDescriptor::Mute { is_muted: true }.key(),
            ButtonDescriptor::Mute { is_muted: false }.key()
        );
        assert_eq!(
            ButtonDescriptor::SoundOutput(SoundOutput::Speaker).key(),
            ButtonDescriptor::SoundOutput(SoundOutput::AirPodsMax).key()
        );
    }
}
