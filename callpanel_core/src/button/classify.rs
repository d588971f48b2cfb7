// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call state → button rows.
//!
//! Derivation is a two-step lookup:
//!
//! 1. The call is reduced to a `(PhaseKind, VideoShape)` pair, which selects a
//!    static row of abstract slots from a decision table.
//! 2. Each slot is filled with display data (mute state, audio route icon,
//!    camera flags) from the full call state.
//!
//! Ringing and active phases read the video state differently (ringing
//! consults `is_available`, keeps the camera toggle disabled, and lists the
//! camera switch after the toggle); those differences are kept per phase.

use alloc::vec::Vec;

use crate::call::{BluetoothKind, CallMode, CallPhase, PhaseKind, SpeakerMode, VideoState};

use super::{ButtonDescriptor, EndKind, SoundOutput};

/// The video situation the decision table is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VideoShape {
    /// The call cannot carry video.
    Unavailable,
    /// Video is possible but no track is presented.
    Idle,
    /// A camera track is presented.
    Live,
    /// A screencast track is presented.
    Screencast,
}

impl VideoShape {
    /// Classifies the video state as seen by the given phase.
    ///
    /// Only ringing phases consult `is_available`; an active call without a
    /// video track is always [`Idle`](Self::Idle).
    #[must_use]
    pub const fn for_phase(kind: PhaseKind, video: &VideoState) -> Self {
        if kind.is_ringing() && !video.is_available {
            Self::Unavailable
        } else if !video.has_video {
            Self::Idle
        } else if video.screencast_active() {
            Self::Screencast
        } else {
            Self::Live
        }
    }
}

/// Abstract button slot in the decision table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    SoundOutput,
    Camera,
    SwitchCamera,
    /// Sound output when a route menu exists, mute otherwise.
    RouteOrMute,
    Mute,
    Decline,
    Accept,
    Cancel,
    End,
}

/// The decision table: which slots appear, in order, for a phase and video shape.
const fn slots(kind: PhaseKind, shape: VideoShape) -> &'static [Slot] {
    use PhaseKind::{Active, IncomingRinging, OutgoingRinging};
    use Slot as S;
    use VideoShape::{Idle, Live, Screencast, Unavailable};

    match (kind, shape) {
        (IncomingRinging, Unavailable) => &[S::SoundOutput, S::Mute, S::Decline, S::Accept],
        (IncomingRinging, Idle) => &[S::SoundOutput, S::Camera, S::Mute, S::Decline, S::Accept],
        (IncomingRinging, Live) => &[
            S::Camera,
            S::SwitchCamera,
            S::RouteOrMute,
            S::Decline,
            S::Accept,
        ],
        (IncomingRinging, Screencast) => &[S::Camera, S::RouteOrMute, S::Decline, S::Accept],

        (OutgoingRinging, Unavailable) => &[S::SoundOutput, S::Mute, S::Cancel],
        (OutgoingRinging, Idle) => &[S::SoundOutput, S::Camera, S::Mute, S::Cancel],
        (OutgoingRinging, Live) => &[S::Camera, S::SwitchCamera, S::RouteOrMute, S::Cancel],
        (OutgoingRinging, Screencast) => &[S::Camera, S::RouteOrMute, S::Cancel],

        (Active, Live) => &[S::SwitchCamera, S::Camera, S::RouteOrMute, S::End],
        (Active, Screencast) => &[S::Camera, S::RouteOrMute, S::End],
        (Active, Unavailable | Idle) => &[S::SoundOutput, S::Camera, S::Mute, S::Cancel],
    }
}

/// Ordered button rows for one call state.
///
/// The top row holds small auxiliary buttons and the bottom row the large
/// action buttons. The current table only fills the bottom row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonRows {
    /// Small buttons, left to right.
    pub top: Vec<ButtonDescriptor>,
    /// Large buttons, left to right.
    pub bottom: Vec<ButtonDescriptor>,
}

impl ButtonRows {
    /// Returns all descriptors, top row first.
    pub fn iter(&self) -> impl Iterator<Item = &ButtonDescriptor> {
        self.top.iter().chain(self.bottom.iter())
    }

    /// Returns the total number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.top.len() + self.bottom.len()
    }

    /// Returns whether both rows are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }
}

/// Maps an audio route to the icon variant of the route button.
#[must_use]
pub const fn sound_output(mode: SpeakerMode) -> SoundOutput {
    match mode {
        SpeakerMode::None | SpeakerMode::Builtin => SoundOutput::Builtin,
        SpeakerMode::Speaker => SoundOutput::Speaker,
        SpeakerMode::Headphones => SoundOutput::Headphones,
        SpeakerMode::Bluetooth(BluetoothKind::Generic) => SoundOutput::Bluetooth,
        SpeakerMode::Bluetooth(BluetoothKind::AirPods) => SoundOutput::AirPods,
        SpeakerMode::Bluetooth(BluetoothKind::AirPodsPro) => SoundOutput::AirPodsPro,
        SpeakerMode::Bluetooth(BluetoothKind::AirPodsMax) => SoundOutput::AirPodsMax,
    }
}

/// Derives the button rows for a call state.
///
/// This is a pure function of its inputs: equal inputs always produce equal
/// rows, and no key appears twice.
#[must_use]
pub fn classify_buttons(phase: &CallPhase, is_muted: bool) -> ButtonRows {
    let kind = phase.kind();
    let mode = phase.mode();
    let shape = VideoShape::for_phase(kind, &mode.video);

    let bottom = slots(kind, shape)
        .iter()
        .map(|&slot| fill(slot, kind, mode, is_muted))
        .collect();

    ButtonRows {
        top: Vec::new(),
        bottom,
    }
}

/// Fills one abstract slot with display data.
fn fill(slot: Slot, kind: PhaseKind, mode: &CallMode, is_muted: bool) -> ButtonDescriptor {
    let video = &mode.video;
    let camera_active = video.camera_active();
    let screencast_active = video.screencast_active();

    match slot {
        Slot::SoundOutput => ButtonDescriptor::SoundOutput(sound_output(mode.speaker_mode)),
        Slot::Mute => ButtonDescriptor::Mute { is_muted },
        Slot::RouteOrMute => {
            if mode.has_audio_route_menu {
                ButtonDescriptor::SoundOutput(sound_output(mode.speaker_mode))
            } else {
                ButtonDescriptor::Mute { is_muted }
            }
        }
        Slot::Camera => ButtonDescriptor::EnableCamera {
            is_active: camera_active || screencast_active,
            // The toggle cannot be used before the call connects.
            is_enabled: !kind.is_ringing() && video.can_change_status,
            is_loading: video.is_initializing_camera,
            is_screencast: screencast_active,
        },
        Slot::SwitchCamera => ButtonDescriptor::SwitchCamera {
            is_enabled: camera_active && !video.is_initializing_camera,
        },
        Slot::Decline => ButtonDescriptor::End(EndKind::Decline),
        Slot::Accept => ButtonDescriptor::Accept,
        Slot::Cancel => ButtonDescriptor::End(EndKind::Outgoing),
        Slot::End => ButtonDescriptor::End(EndKind::End),
    }
}
