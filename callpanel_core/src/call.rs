// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-state model consumed by the classifiers.
//!
//! A [`CallPhase`] is the coarse lifecycle state of a call. Every phase
//! carries the same [`CallMode`] payload: the active audio route, whether a
//! route picker is available, and the [`VideoState`].

/// The kind of bluetooth device an audio route points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BluetoothKind {
    /// Any bluetooth headset without a dedicated icon.
    #[default]
    Generic,
    /// AirPods.
    AirPods,
    /// AirPods Pro.
    AirPodsPro,
    /// AirPods Max.
    AirPodsMax,
}

/// The audio route currently used by the call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpeakerMode {
    /// No route reported yet.
    #[default]
    None,
    /// The built-in receiver.
    Builtin,
    /// The loudspeaker.
    Speaker,
    /// Wired headphones.
    Headphones,
    /// A bluetooth device.
    Bluetooth(BluetoothKind),
}

/// Video capabilities and activity of the call.
///
/// `is_camera_active` and `is_screencast_active` only mean something while
/// `has_video` is set; use [`camera_active`](Self::camera_active) and
/// [`screencast_active`](Self::screencast_active) to read them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VideoState {
    /// Whether video can be used in this call at all.
    pub is_available: bool,
    /// Whether the local camera is capturing.
    pub is_camera_active: bool,
    /// Whether the local screen is being shared.
    pub is_screencast_active: bool,
    /// Whether the camera toggle may be used.
    pub can_change_status: bool,
    /// Whether a video track is currently presented.
    pub has_video: bool,
    /// Whether the camera is still starting up.
    pub is_initializing_camera: bool,
}

impl VideoState {
    /// Returns whether the camera is active, gated on a live video track.
    #[must_use]
    pub const fn camera_active(&self) -> bool {
        self.has_video && self.is_camera_active
    }

    /// Returns whether screen sharing is active, gated on a live video track.
    #[must_use]
    pub const fn screencast_active(&self) -> bool {
        self.has_video && self.is_screencast_active
    }
}

/// Route, route-menu and video payload shared by every phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CallMode {
    /// Current audio route.
    pub speaker_mode: SpeakerMode,
    /// Whether a multi-option audio route picker is available.
    pub has_audio_route_menu: bool,
    /// Video state.
    pub video: VideoState,
}

/// Coarse call lifecycle state with its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallPhase {
    /// The call is ringing on this device.
    IncomingRinging(CallMode),
    /// The call is ringing on the remote side.
    OutgoingRinging(CallMode),
    /// The call is connected.
    Active(CallMode),
}

impl CallPhase {
    /// Returns the payload carried by this phase.
    #[must_use]
    pub const fn mode(&self) -> &CallMode {
        match self {
            Self::IncomingRinging(mode) | Self::OutgoingRinging(mode) | Self::Active(mode) => mode,
        }
    }

    /// Returns the payload-free kind of this phase.
    #[must_use]
    pub const fn kind(&self) -> PhaseKind {
        match self {
            Self::IncomingRinging(_) => PhaseKind::IncomingRinging,
            Self::OutgoingRinging(_) => PhaseKind::OutgoingRinging,
            Self::Active(_) => PhaseKind::Active,
        }
    }
}

/// Payload-free phase tag, used for transition detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// See [`CallPhase::IncomingRinging`].
    IncomingRinging,
    /// See [`CallPhase::OutgoingRinging`].
    OutgoingRinging,
    /// See [`CallPhase::Active`].
    Active,
}

impl PhaseKind {
    /// Returns whether the call is still ringing on either side.
    #[must_use]
    pub const fn is_ringing(self) -> bool {
        matches!(self, Self::IncomingRinging | Self::OutgoingRinging)
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomingRinging => "incoming",
            Self::OutgoingRinging => "outgoing",
            Self::Active => "active",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_is_gated_on_has_video() {
        let video = VideoState {
            is_available: true,
            is_camera_active: true,
            is_screencast_active: true,
            has_video: false,
            ..VideoState::default()
        };
        assert!(!video.camera_active(), "camera ignored without video");
        assert!(!video.screencast_active(), "screencast ignored without video");

        let live = VideoState {
            has_video: true,
            ..video
        };
        assert!(live.camera_active());
        assert!(live.screencast_active());
    }

    #[test]
    fn phase_exposes_kind_and_mode() {
        let mode = CallMode {
            speaker_mode: SpeakerMode::Speaker,
            ..CallMode::default()
        };
        let phase = CallPhase::OutgoingRinging(mode);
        assert_eq!(phase.kind(), PhaseKind::OutgoingRinging);
        assert_eq!(phase.mode().speaker_mode, SpeakerMode::Speaker);
        assert!(phase.kind().is_ringing());
        assert!(!PhaseKind::Active.is_ringing());
    }
}
