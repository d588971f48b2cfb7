// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status toasts.
//!
//! Toasts are driven by a [`ToastConditions`] bitmask rather than the call
//! phase. Each set bit yields exactly one [`ToastDescriptor`], and the
//! resulting list is always ordered camera, microphone, mute, battery.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::{BitOr, BitOrAssign};

use kurbo::Size;

use crate::element::ElementKey;

/// Stable identity of a toast slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToastKey {
    /// The remote camera is off.
    Camera,
    /// The remote microphone is off.
    Microphone,
    /// The local microphone is muted.
    Mute,
    /// The remote battery is low.
    Battery,
}

impl ElementKey for ToastKey {
    fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Microphone => "microphone",
            Self::Mute => "mute",
            Self::Battery => "battery",
        }
    }
}

/// Set of conditions that each raise one toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToastConditions(u32);

impl ToastConditions {
    /// The remote camera is off.
    pub const CAMERA: Self = Self(1 << 0);
    /// The remote microphone is off.
    pub const MICROPHONE: Self = Self(1 << 1);
    /// The local microphone is muted.
    pub const MUTE: Self = Self(1 << 2);
    /// The remote battery is low.
    pub const BATTERY: Self = Self(1 << 3);

    /// No conditions.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from raw bits, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & 0b1111)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns whether every condition in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no condition is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets the conditions in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears the conditions in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for ToastConditions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ToastConditions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// What a single toast says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastDescriptor {
    /// "Camera is off".
    CameraOff,
    /// "Microphone is off" for the remote party.
    MicrophoneOff,
    /// "Your microphone is off".
    YourMicrophoneOff,
    /// "Battery is low".
    BatteryLow,
}

impl ToastDescriptor {
    /// Returns the slot this descriptor occupies.
    #[must_use]
    pub const fn key(self) -> ToastKey {
        match self {
            Self::CameraOff => ToastKey::Camera,
            Self::MicrophoneOff => ToastKey::Microphone,
            Self::YourMicrophoneOff => ToastKey::Mute,
            Self::BatteryLow => ToastKey::Battery,
        }
    }

    /// Returns the icon shown next to the text.
    #[must_use]
    pub const fn image(self) -> ToastImage {
        match self {
            Self::CameraOff => ToastImage::Camera,
            Self::MicrophoneOff | Self::YourMicrophoneOff => ToastImage::Microphone,
            Self::BatteryLow => ToastImage::Battery,
        }
    }
}

/// Derives the toast list for a condition set.
///
/// The order is fixed: camera, microphone, mute, battery.
#[must_use]
pub fn classify_toasts(conditions: ToastConditions) -> Vec<ToastDescriptor> {
    [
        (ToastConditions::CAMERA, ToastDescriptor::CameraOff),
        (ToastConditions::MICROPHONE, ToastDescriptor::MicrophoneOff),
        (ToastConditions::MUTE, ToastDescriptor::YourMicrophoneOff),
        (ToastConditions::BATTERY, ToastDescriptor::BatteryLow),
    ]
    .into_iter()
    .filter(|&(bit, _)| conditions.contains(bit))
    .map(|(_, descriptor)| descriptor)
    .collect()
}

/// Icon drawn in a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastImage {
    /// Crossed-out camera.
    Camera,
    /// Crossed-out microphone.
    Microphone,
    /// Low battery.
    Battery,
}

/// Pre-resolved toast texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastLabels {
    /// The remote camera is off.
    pub camera_off: String,
    /// The remote microphone is off.
    pub microphone_off: String,
    /// The local microphone is off.
    pub your_microphone_off: String,
    /// The remote battery is low.
    pub battery_low: String,
}

impl Default for ToastLabels {
    fn default() -> Self {
        Self {
            camera_off: "Camera is off".to_string(),
            microphone_off: "Microphone is off".to_string(),
            your_microphone_off: "Your microphone is off".to_string(),
            battery_low: "Battery is low".to_string(),
        }
    }
}

impl ToastLabels {
    /// Returns the text for a descriptor.
    #[must_use]
    pub fn text(&self, descriptor: ToastDescriptor) -> &str {
        match descriptor {
            ToastDescriptor::CameraOff => &self.camera_off,
            ToastDescriptor::MicrophoneOff => &self.microphone_off,
            ToastDescriptor::YourMicrophoneOff => &self.your_microphone_off,
            ToastDescriptor::BatteryLow => &self.battery_low,
        }
    }
}

/// Visual content of a toast.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToastContent {
    /// Icon.
    pub image: ToastImage,
    /// Text.
    pub text: String,
}

/// Builds the content for a descriptor.
#[must_use]
pub fn present(descriptor: ToastDescriptor, labels: &ToastLabels) -> ToastContent {
    ToastContent {
        image: descriptor.image(),
        text: labels.text(descriptor).to_string(),
    }
}

/// Font size class for toast text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Regular size.
    #[default]
    Regular,
    /// Reduced size for narrow screens.
    Small,
}

/// Measures toast text.
///
/// Implemented by the host; the engine never lays out glyphs itself.
pub trait TextMeasure {
    /// Returns the size `text` occupies in `style` when wrapped to
    /// `max_width`.
    fn measure(&mut self, text: &str, style: TextStyle, max_width: f64) -> Size;
}
