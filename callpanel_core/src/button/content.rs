// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button presentation: appearance, icon, label, and accessibility data.

use alloc::string::{String, ToString};

use super::{ButtonDescriptor, EndKind, SoundOutput};

/// Solid fill colour of an action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonColor {
    /// Accept.
    Green,
    /// Decline, cancel, end.
    Red,
}

/// Background treatment of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Appearance {
    /// Solid colour.
    Color(ButtonColor),
    /// Blurred backdrop; filled when the toggle is on.
    Blurred {
        /// Whether the button is drawn in its "on" state.
        is_filled: bool,
    },
}

/// Icon drawn on a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonImage {
    /// Handset, accept.
    Accept,
    /// Handset, decline.
    End,
    /// Handset, hang up or cancel.
    Cancel,
    /// Camera.
    Camera,
    /// Screen sharing.
    Screencast,
    /// Camera switch.
    FlipCamera,
    /// Loudspeaker.
    Speaker,
    /// Bluetooth headset.
    Bluetooth,
    /// AirPods.
    AirPods,
    /// AirPods Pro.
    AirPodsPro,
    /// AirPods Max.
    AirPodsMax,
    /// Wired headphones.
    Headphones,
    /// Microphone.
    Mute,
}

/// Visual content of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ButtonContent {
    /// Background treatment.
    pub appearance: Appearance,
    /// Icon.
    pub image: ButtonImage,
    /// Whether the button reacts to presses.
    pub is_enabled: bool,
    /// Whether a progress indicator spins over the icon.
    pub has_progress: bool,
}

impl ButtonContent {
    /// Creates enabled content without a progress indicator.
    #[must_use]
    pub const fn new(appearance: Appearance, image: ButtonImage) -> Self {
        Self {
            appearance,
            image,
            is_enabled: true,
            has_progress: false,
        }
    }
}

/// Accessibility traits beyond the implicit "button" trait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessibilityTraits {
    /// The toggle is on.
    pub selected: bool,
    /// The button cannot be pressed.
    pub not_enabled: bool,
}

/// Everything a rendering layer needs to draw one button.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ButtonPresentation {
    /// Visual content.
    pub content: ButtonContent,
    /// Caption under the button.
    pub text: String,
    /// Accessibility label.
    pub accessibility_label: String,
    /// Accessibility value (the audio route name, for route buttons).
    pub accessibility_value: String,
    /// Accessibility traits.
    pub traits: AccessibilityTraits,
}

/// Pre-resolved button captions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLabels {
    /// "Accept".
    pub accept: String,
    /// "Decline".
    pub decline: String,
    /// "End".
    pub end: String,
    /// "Camera".
    pub camera: String,
    /// "Flip".
    pub flip: String,
    /// "Speaker".
    pub speaker: String,
    /// "Audio", used when a non-builtin route is selected.
    pub audio: String,
    /// "Mute".
    pub mute: String,
    /// Accessibility value for wired headphones.
    pub headphones: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            accept: "Accept".to_string(),
            decline: "Decline".to_string(),
            end: "End".to_string(),
            camera: "Camera".to_string(),
            flip: "Flip".to_string(),
            speaker: "Speaker".to_string(),
            audio: "Audio".to_string(),
            mute: "Mute".to_string(),
            headphones: "Headphones".to_string(),
        }
    }
}

/// Builds the presentation for a descriptor.
#[must_use]
pub fn present(descriptor: &ButtonDescriptor, labels: &ButtonLabels) -> ButtonPresentation {
    let mut traits = AccessibilityTraits::default();
    let mut value = String::new();

    let (content, text) = match *descriptor {
        ButtonDescriptor::Accept => (
            ButtonContent::new(Appearance::Color(ButtonColor::Green), ButtonImage::Accept),
            labels.accept.clone(),
        ),
        ButtonDescriptor::End(kind) => {
            let (image, text) = match kind {
                EndKind::Outgoing | EndKind::End => (ButtonImage::Cancel, &labels.end),
                EndKind::Decline => (ButtonImage::End, &labels.decline),
            };
            (
                ButtonContent::new(Appearance::Color(ButtonColor::Red), image),
                text.clone(),
            )
        }
        ButtonDescriptor::EnableCamera {
            is_active,
            is_enabled,
            is_loading,
            is_screencast,
        } => {
            traits.not_enabled = !is_enabled;
            traits.selected = is_active;
            (
                ButtonContent {
                    appearance: Appearance::Blurred {
                        is_filled: is_active,
                    },
                    image: if is_screencast {
                        ButtonImage::Screencast
                    } else {
                        ButtonImage::Camera
                    },
                    is_enabled,
                    has_progress: is_loading,
                },
                labels.camera.clone(),
            )
        }
        ButtonDescriptor::SwitchCamera { is_enabled } => {
            traits.not_enabled = !is_enabled;
            (
                ButtonContent {
                    is_enabled,
                    ..ButtonContent::new(
                        Appearance::Blurred { is_filled: false },
                        ButtonImage::FlipCamera,
                    )
                },
                labels.flip.clone(),
            )
        }
        ButtonDescriptor::SoundOutput(output) => {
            let (image, is_filled, text) = match output {
                SoundOutput::Builtin => (ButtonImage::Speaker, false, &labels.speaker),
                SoundOutput::Speaker => (ButtonImage::Speaker, true, &labels.speaker),
                SoundOutput::Bluetooth => {
                    value = "Bluetooth".to_string();
                    (ButtonImage::Bluetooth, false, &labels.audio)
                }
                SoundOutput::AirPods => {
                    value = "Airpods".to_string();
                    (ButtonImage::AirPods, false, &labels.audio)
                }
                SoundOutput::AirPodsPro => {
                    value = "Airpods Pro".to_string();
                    (ButtonImage::AirPodsPro, false, &labels.audio)
                }
                SoundOutput::AirPodsMax => {
                    value = "Airpods Max".to_string();
                    (ButtonImage::AirPodsMax, false, &labels.audio)
                }
                SoundOutput::Headphones => {
                    value = labels.headphones.clone();
                    (ButtonImage::Headphones, false, &labels.audio)
                }
            };
            traits.selected = is_filled;
            (
                ButtonContent::new(Appearance::Blurred { is_filled }, image),
                text.clone(),
            )
        }
        ButtonDescriptor::Mute { is_muted } => {
            traits.selected = is_muted;
            (
                ButtonContent::new(
                    Appearance::Blurred {
                        is_filled: is_muted,
                    },
                    ButtonImage::Mute,
                ),
                labels.mute.clone(),
            )
        }
    };

    let accessibility_label = if text.is_empty() {
        labels.end.clone()
    } else {
        text.clone()
    };

    ButtonPresentation {
        content,
        text,
        accessibility_label,
        accessibility_value: value,
        traits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_is_green() {
        let p = present(&ButtonDescriptor::Accept, &ButtonLabels::default());
        assert_eq!(p.content.appearance, Appearance::Color(ButtonColor::Green));
        assert_eq!(p.content.image, ButtonImage::Accept);
        assert_eq!(p.text, "Accept");
        assert_eq!(p.accessibility_label, "Accept");
    }

    #[test]
    fn decline_and_end_differ_in_icon_and_text() {
        let labels = ButtonLabels::default();
        let decline = present(&ButtonDescriptor::End(EndKind::Decline), &labels);
        let end = present(&ButtonDescriptor::End(EndKind::End), &labels);
        let cancel = present(&ButtonDescriptor::End(EndKind::Outgoing), &labels);
        assert_eq!(decline.content.image, ButtonImage::End);
        assert_eq!(decline.text, "Decline");
        assert_eq!(end.content.image, ButtonImage::Cancel);
        assert_eq!(end, cancel, "cancel and end render identically");
    }

    #[test]
    fn empty_end_caption_falls_back_for_accessibility() {
        let labels = ButtonLabels {
            decline: String::new(),
            ..ButtonLabels::default()
        };
        let p = present(&ButtonDescriptor::End(EndKind::Decline), &labels);
        assert!(p.text.is_empty());
        assert_eq!(p.accessibility_label, "End");
    }

    #[test]
    fn camera_traits_follow_flags() {
        let p = present(
            &ButtonDescriptor::EnableCamera {
                is_active: true,
                is_enabled: false,
                is_loading: true,
                is_screencast: true,
            },
            &ButtonLabels::default(),
        );
        assert_eq!(p.content.image, ButtonImage::Screencast);
        assert!(p.content.has_progress);
        assert!(!p.content.is_enabled);
        assert_eq!(
            p.traits,
            AccessibilityTraits {
                selected: true,
                not_enabled: true,
            }
        );
    }

    #[test]
    fn speaker_is_filled_and_selected() {
        let p = present(
            &ButtonDescriptor::SoundOutput(SoundOutput::Speaker),
            &ButtonLabels::default(),
        );
        assert_eq!(p.content.appearance, Appearance::Blurred { is_filled: true });
        assert!(p.traits.selected);
        assert_eq!(p.text, "Speaker");
        assert!(p.accessibility_value.is_empty());
    }

    #[test]
    fn bluetooth_routes_use_audio_caption_and_value() {
        let p = present(
            &ButtonDescriptor::SoundOutput(SoundOutput::AirPodsPro),
            &ButtonLabels::default(),
        );
        assert_eq!(p.content.image, ButtonImage::AirPodsPro);
        assert_eq!(p.text, "Audio");
        assert_eq!(p.accessibility_value, "Airpods Pro");

        let headphones = present(
            &ButtonDescriptor::SoundOutput(SoundOutput::Headphones),
            &ButtonLabels::default(),
        );
        assert_eq!(headphones.accessibility_value, "Headphones");
    }

    #[test]
    fn mute_fill_tracks_state() {
        let labels = ButtonLabels::default();
        let on = present(&ButtonDescriptor::Mute { is_muted: true }, &labels);
        let off = present(&ButtonDescriptor::Mute { is_muted: false }, &labels);
        assert_eq!(on.content.appearance, Appearance::Blurred { is_filled: true });
        assert!(on.traits.selected);
        assert!(!off.traits.selected);
    }
}
