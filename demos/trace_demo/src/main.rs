// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted call walkthrough that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a [`ButtonPanel`] and a [`ToastPanel`] through an incoming call
//! that is answered, muted, switched to video, and hung up. Events go to both
//! a [`PrettyPrintSink`] and a [`RecorderSink`]; the recording is exported as
//! JSON at the end.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Size;

use callpanel_core::action::CallActions;
use callpanel_core::button::{ButtonKey, ButtonLabels, ButtonPresentation};
use callpanel_core::call::{CallMode, CallPhase, SpeakerMode, VideoState};
use callpanel_core::command::Command;
use callpanel_core::element::ElementId;
use callpanel_core::panel::{ButtonPanel, PanelUpdate, ToastPanel};
use callpanel_core::presenter::{Presenter, RecordingPresenter};
use callpanel_core::toast::{TextMeasure, TextStyle, ToastConditions, ToastLabels};
use callpanel_core::trace::{
    ElementEvent, PassBeginEvent, PassSummary, PhaseTransitionEvent, TraceSink, Tracer,
};

use callpanel_debug::pretty::PrettyPrintSink;
use callpanel_debug::recorder::RecorderSink;

const WIDTH: f64 = 390.0;
const BOTTOM_INSET: f64 = 34.0;

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TraceSink,
    second: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.first.on_pass_begin(e);
        self.second.on_pass_begin(e);
    }

    fn on_phase_transition(&mut self, e: &PhaseTransitionEvent) {
        self.first.on_phase_transition(e);
        self.second.on_phase_transition(e);
    }

    fn on_element(&mut self, e: &ElementEvent) {
        self.first.on_element(e);
        self.second.on_element(e);
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        self.first.on_pass_summary(s);
        self.second.on_pass_summary(s);
    }
}

/// Fixed-pitch text measurement: 8pt per character, 19pt lines.
struct FixedPitch;

impl TextMeasure for FixedPitch {
    fn measure(&mut self, text: &str, style: TextStyle, max_width: f64) -> Size {
        let advance = match style {
            TextStyle::Regular => 8.0,
            TextStyle::Small => 7.0,
        };
        let natural = text.chars().count() as f64 * advance;
        let lines = (natural / max_width).ceil().max(1.0);
        Size::new(natural.min(max_width), lines * 19.0)
    }
}

/// Prints every dispatched action.
struct PrintActions;

impl CallActions for PrintActions {
    fn accept_or_end(&mut self) {
        println!("  hanging up");
    }

    fn toggle_mute(&mut self) {
        println!("  toggling mute");
    }
}

/// Ids of elements that started an exit animation in `commands`.
fn exiting<K, C>(commands: &[Command<K, C>]) -> Vec<ElementId> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::AnimateOut { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

fn apply(
    presenter: &mut RecordingPresenter<ButtonKey, ButtonPresentation>,
    update: &PanelUpdate<ButtonKey, ButtonPresentation>,
) {
    presenter.apply(&update.commands);
    println!(
        "  buttons: {} commands, height {:.1}",
        update.commands.len(),
        update.height
    );
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::stderr();
    let mut recorder = RecorderSink::new();

    // -- panels ------------------------------------------------------------
    let mut buttons = ButtonPanel::new(ButtonLabels::default());
    let mut toasts = ToastPanel::new(ToastLabels::default());
    let mut presenter = RecordingPresenter::new();
    let mut measure = FixedPitch;

    let mut mode = CallMode {
        speaker_mode: SpeakerMode::Builtin,
        has_audio_route_menu: false,
        video: VideoState {
            is_available: true,
            can_change_status: true,
            ..VideoState::default()
        },
    };

    {
        let mut tee = Tee {
            first: &mut pretty,
            second: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        // 1. Ringing
        println!("incoming call");
        let update = buttons.update_layout(
            &CallPhase::IncomingRinging(mode),
            WIDTH,
            BOTTOM_INSET,
            true,
            &mut tracer,
        );
        apply(&mut presenter, &update);
        toasts.update_layout(
            ToastConditions::empty(),
            WIDTH,
            true,
            &mut measure,
            &mut tracer,
        );

        // 2. Answer
        println!("answered");
        let update = buttons.update_layout(
            &CallPhase::Active(mode),
            WIDTH,
            BOTTOM_INSET,
            true,
            &mut tracer,
        );
        apply(&mut presenter, &update);
        for id in exiting(&update.commands) {
            if let Some(dispose) = buttons.finish_exit(id, &mut tracer) {
                presenter.apply(&[dispose]);
            }
        }

        // 3. Mute, with the remote side's camera off
        println!("muted");
        buttons.set_muted(true);
        if let Some(update) = buttons.refresh(true, &mut tracer) {
            apply(&mut presenter, &update);
        }
        let update = toasts.update_layout(
            ToastConditions::MUTE | ToastConditions::CAMERA,
            WIDTH,
            true,
            &mut measure,
            &mut tracer,
        );
        println!(
            "  toasts: {} commands, height {:.1}",
            update.commands.len(),
            update.height
        );

        // 4. Video on, speaker route
        println!("video on");
        mode.speaker_mode = SpeakerMode::Speaker;
        mode.video.has_video = true;
        mode.video.is_camera_active = true;
        let update = buttons.update_layout(
            &CallPhase::Active(mode),
            WIDTH,
            BOTTOM_INSET,
            true,
            &mut tracer,
        );
        apply(&mut presenter, &update);
        if let Some(frame) = buttons.video_button_frame() {
            println!("  camera toggle at {frame:?}");
        }

        // 5. Unmute clears the mute toast
        println!("unmuted");
        buttons.set_muted(false);
        if let Some(update) = buttons.refresh(true, &mut tracer) {
            apply(&mut presenter, &update);
        }
        let update = toasts.update_layout(
            ToastConditions::CAMERA,
            WIDTH,
            true,
            &mut measure,
            &mut tracer,
        );
        for id in exiting(&update.commands) {
            toasts.finish_exit(id, &mut tracer);
        }

        // 6. Hang up
        if let Some(id) = buttons.store().get(ButtonKey::AcceptOrEnd) {
            buttons.press(id, &mut PrintActions);
        }
    }

    println!(
        "presenter received {} commands in {} batches",
        presenter.commands().len(),
        presenter.batches()
    );

    // -- export JSON ---------------------------------------------------------
    let path = "callpanel_trace.json";
    let file = File::create(path).expect("failed to create callpanel_trace.json");
    let mut writer = BufWriter::new(file);
    callpanel_debug::json::export(recorder.events(), &mut writer)
        .expect("failed to write trace JSON");

    println!("Wrote {path} ({} events)", recorder.events().len());
}
