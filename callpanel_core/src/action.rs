// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic actions raised by button presses.

use crate::button::ButtonKey;

/// What the user asked for by pressing a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallAction {
    /// Answer a ringing call, or hang up a connected one.
    AcceptOrEnd,
    /// Reject an incoming call.
    Decline,
    /// Flip the microphone mute state.
    ToggleMute,
    /// Cycle or pick the audio route.
    ToggleSpeaker,
    /// Turn the camera on or off.
    ToggleVideo,
    /// Switch between front and back cameras.
    SwitchCamera,
}

impl CallAction {
    /// Returns the action bound to a button slot.
    #[must_use]
    pub const fn for_key(key: ButtonKey) -> Self {
        match key {
            ButtonKey::Accept | ButtonKey::AcceptOrEnd => Self::AcceptOrEnd,
            ButtonKey::Decline => Self::Decline,
            ButtonKey::EnableCamera => Self::ToggleVideo,
            ButtonKey::SwitchCamera => Self::SwitchCamera,
            ButtonKey::SoundOutput => Self::ToggleSpeaker,
            ButtonKey::Mute => Self::ToggleMute,
        }
    }
}

/// Receives the actions of pressed buttons.
///
/// All methods default to no-ops, so hosts only implement what they wire up.
pub trait CallActions {
    /// Answer or hang up.
    fn accept_or_end(&mut self) {}

    /// Reject the incoming call.
    fn decline(&mut self) {}

    /// Flip mute.
    fn toggle_mute(&mut self) {}

    /// Change the audio route.
    fn toggle_speaker(&mut self) {}

    /// Flip the camera.
    fn toggle_video(&mut self) {}

    /// Switch cameras.
    fn switch_camera(&mut self) {}

    /// Dispatches `action` to the matching method.
    fn dispatch(&mut self, action: CallAction) {
        match action {
            CallAction::AcceptOrEnd => self.accept_or_end(),
            CallAction::Decline => self.decline(),
            CallAction::ToggleMute => self.toggle_mute(),
            CallAction::ToggleSpeaker => self.toggle_speaker(),
            CallAction::ToggleVideo => self.toggle_video(),
            CallAction::SwitchCamera => self.switch_camera(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    impl CallActions for Log {
        fn accept_or_end(&mut self) {
            self.0.push("accept_or_end");
        }
        fn toggle_mute(&mut self) {
            self.0.push("toggle_mute");
        }
    }

    #[test]
    fn accept_slot_routes_to_accept_or_end() {
        assert_eq!(CallAction::for_key(ButtonKey::Accept), CallAction::AcceptOrEnd);
        assert_eq!(
            CallAction::for_key(ButtonKey::AcceptOrEnd),
            CallAction::AcceptOrEnd
        );
        assert_eq!(
            CallAction::for_key(ButtonKey::EnableCamera),
            CallAction::ToggleVideo
        );
    }

    #[test]
    fn dispatch_skips_unimplemented_methods() {
        let mut log = Log::default();
        log.dispatch(CallAction::ToggleMute);
        log.dispatch(CallAction::Decline);
        log.dispatch(CallAction::AcceptOrEnd);
        assert_eq!(log.0, ["toggle_mute", "accept_or_end"]);
    }
}
