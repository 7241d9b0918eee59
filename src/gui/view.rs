use std::path::PathBuf;
use std::time::{Duration, Instant};

use gpui::prelude::FluentBuilder;
use gpui::{
    div, img, px, AnyElement, AppContext, ClickEvent, Context, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, ObjectFit, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, StyledImage, Subscription, Window,
};
use gpui_component::{
    button::{Button, ButtonVariants},
    input::{Input, InputState},
    scroll::ScrollbarAxis,
    select::{Select, SelectEvent, SelectItem, SelectState},
    switch::Switch,
    ActiveTheme, Disableable, IndexPath, Selectable, Sizable, StyledExt,
};

use super::actions::*;
use super::controller::BoothController;
use crate::assets;
use crate::camera::CameraSummary;
use crate::flow::BoothStep;
use crate::state::{character_by_id, CharacterKind, FacingMode, CHARACTER_CATALOG};

/// How often the view repaints while a live preview is running.
const PREVIEW_TICK: Duration = Duration::from_millis(100);

/// Fallback tile colors for backdrops whose asset file is absent
/// (development builds without the art pack).
const TILE_COLORS: [u32; 8] = [
    0xE84393, 0x4C9EF4, 0x3FD68F, 0xF6C343, 0xA855F7, 0xF05D70, 0x2DD4BF, 0xF97316,
];

#[derive(Clone)]
struct CameraOption {
    summary: CameraSummary,
    position: usize,
}

impl SelectItem for CameraOption {
    type Value = usize;

    fn title(&self) -> SharedString {
        self.summary.label.clone().into()
    }

    fn value(&self) -> &Self::Value {
        &self.position
    }
}

pub struct MainView {
    controller: BoothController,
    focus_handle: FocusHandle,
    status_text: SharedString,
    camera_options: Vec<CameraOption>,
    camera_select: Entity<SelectState<Vec<CameraOption>>>,
    caption_input: Entity<InputState>,
    subscriptions: Vec<Subscription>,
    last_saved: Option<PathBuf>,
    /// Countdown deadline; the shutter fires once this passes
    shutter_at: Option<Instant>,
}

impl MainView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>, controller: BoothController) -> Self {
        let focus_handle = cx.focus_handle();
        let status_text: SharedString = controller.status_message().into();

        let camera_options: Vec<CameraOption> = controller
            .camera_summaries()
            .into_iter()
            .enumerate()
            .map(|(position, summary)| CameraOption { summary, position })
            .collect();

        let preferred = controller.preferred_camera();
        let initial_ix = camera_options
            .iter()
            .position(|option| Some(&option.summary.device_id) == preferred.as_ref())
            .map(|idx| IndexPath::default().row(idx));
        let camera_select = {
            let options = camera_options.clone();
            let window = &mut *window;
            cx.new(move |cx| SelectState::new(options, initial_ix, window, cx))
        };

        let caption_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Say something about this photo")
                .clean_on_escape()
        });

        let mut view = Self {
            controller,
            focus_handle,
            status_text,
            camera_options,
            camera_select,
            caption_input,
            subscriptions: Vec::new(),
            last_saved: None,
            shutter_at: None,
        };

        view.register_camera_subscription(cx);
        view.spawn_preview_tick(cx);
        view
    }

    fn refresh_status(&mut self) {
        self.status_text = self.controller.status_message().into();
    }

    fn register_camera_subscription(&mut self, cx: &mut Context<Self>) {
        let subscription = cx.subscribe(
            &self.camera_select,
            |this, _, event: &SelectEvent<Vec<CameraOption>>, cx| {
                if let SelectEvent::Confirm(Some(position)) = event {
                    if let Some(option) = this.camera_options.get(*position).cloned() {
                        if let Err(err) = this.controller.select_camera(&option.summary) {
                            this.status_text = format!("{err:#}").into();
                        } else {
                            this.refresh_status();
                        }
                        cx.notify();
                    }
                }
            },
        );
        self.subscriptions.push(subscription);
    }

    /// Keep repainting while the preview worker produces frames; without
    /// this the live feed only advances on input events.
    fn spawn_preview_tick(&mut self, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(PREVIEW_TICK).await;
                if this.update(cx, |_, cx| cx.notify()).is_err() {
                    break;
                }
            }
        })
        .detach();
    }

    /// Push the caption input's current text into the store. Called on every
    /// interaction that leaves the caption step.
    fn commit_caption(&mut self, cx: &mut Context<Self>) {
        let value = self.caption_input.read(cx).value();
        self.controller.set_caption(value.to_string());
    }

    /// Arm the countdown, or fire the shutter straight away when the
    /// countdown is configured off.
    fn request_capture(&mut self) {
        let secs = self.controller.countdown_secs();
        if secs == 0 {
            self.fire_shutter();
        } else if self.shutter_at.is_none() {
            self.shutter_at = Some(Instant::now() + Duration::from_secs(secs as u64));
            self.status_text = "Get ready…".into();
        }
    }

    fn fire_shutter(&mut self) {
        if let Err(err) = self.controller.capture_photo() {
            self.status_text = format!("{err:#}").into();
        } else {
            self.refresh_status();
        }
    }

    /// Seconds left on the countdown, if one is armed.
    fn countdown_remaining(&self) -> Option<u64> {
        self.shutter_at
            .map(|at| at.saturating_duration_since(Instant::now()).as_secs() + 1)
    }

    // ============================================================================
    // Keyboard Shortcut Action Handlers
    // ============================================================================

    fn next_step(&mut self, _: &NextStep, _window: &mut Window, cx: &mut Context<Self>) {
        self.commit_caption(cx);
        self.controller.go_next();
        cx.notify();
    }

    fn previous_step(&mut self, _: &PreviousStep, _window: &mut Window, cx: &mut Context<Self>) {
        self.commit_caption(cx);
        self.controller.go_back();
        cx.notify();
    }

    fn capture_photo(&mut self, _: &CapturePhoto, _window: &mut Window, cx: &mut Context<Self>) {
        self.request_capture();
        cx.notify();
    }

    fn save_photo(&mut self, _: &SavePhoto, _window: &mut Window, cx: &mut Context<Self>) {
        self.commit_caption(cx);
        match self.controller.save_photo() {
            Ok(path) => {
                self.last_saved = Some(path);
                self.refresh_status();
            }
            Err(err) => self.status_text = format!("{err:#}").into(),
        }
        cx.notify();
    }

    fn start_over(&mut self, _: &StartOver, window: &mut Window, cx: &mut Context<Self>) {
        self.controller.start_over();
        self.last_saved = None;
        self.shutter_at = None;
        self.caption_input
            .update(cx, |state, cx| state.set_value("", window, cx));
        self.refresh_status();
        cx.notify();
    }

    // ============================================================================
    // Step surfaces
    // ============================================================================

    fn render_step_header(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.controller.current_step();
        let active_bg = cx.theme().tab_active;

        let mut chips = div().flex().items_center().gap_2();
        for (idx, step) in BoothStep::all_steps().into_iter().enumerate() {
            let is_active = step == active;
            chips = chips.child(
                Button::new(("step-chip", idx))
                    .ghost()
                    .selected(is_active)
                    .when(is_active, move |b| b.bg(active_bg))
                    .label(format!("{} · {}", step.number(), step.title()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.commit_caption(cx);
                        this.controller.go_to(step);
                        cx.notify();
                    })),
            );
        }

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(chips)
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(active.description()),
            )
    }

    fn render_nav_buttons(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let step = self.controller.current_step();

        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                Button::new("nav-back")
                    .ghost()
                    .label("← Back")
                    .disabled(step.is_first())
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.commit_caption(cx);
                        this.controller.go_back();
                        cx.notify();
                    })),
            )
            .child(
                Button::new("nav-next")
                    .primary()
                    .label(if step.next() == Some(BoothStep::Final) {
                        "To your photo →"
                    } else {
                        "Next →"
                    })
                    .disabled(step.is_last())
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.commit_caption(cx);
                        this.controller.go_next();
                        cx.notify();
                    })),
            )
    }

    fn render_preview_panel(&mut self, height: f32, cx: &mut Context<Self>) -> AnyElement {
        let preview_content = if let Some((path, generation)) = self.controller.preview_frame() {
            img(path)
                .id(("preview-img", generation as usize))
                .object_fit(ObjectFit::Contain)
                .w_full()
                .h(px(height))
                .rounded_lg()
                .into_any_element()
        } else {
            div()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap_3()
                .h(px(height))
                .child(
                    div()
                        .text_3xl()
                        .text_color(cx.theme().muted_foreground.opacity(0.4))
                        .child("🎥"),
                )
                .child(
                    div()
                        .text_base()
                        .font_semibold()
                        .child("No live preview yet"),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Pick a camera above to see yourself here"),
                )
                .into_any_element()
        };

        div()
            .border_2()
            .border_dashed()
            .border_color(cx.theme().border)
            .rounded_lg()
            .bg(cx.theme().background.opacity(0.3))
            .overflow_hidden()
            .child(preview_content)
            .into_any_element()
    }

    fn render_camera_step(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let selection = self.controller.selection();
        let camera = selection.lock().camera.clone();

        let device_row = div()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .flex_1()
                    .child(
                        Select::new(&self.camera_select)
                            .small()
                            .placeholder("Choose camera")
                            .menu_width(px(360.0)),
                    ),
            )
            .child(
                Button::new("refresh-cameras")
                    .ghost()
                    .label("Rescan")
                    .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                        this.camera_options = this
                            .controller
                            .camera_summaries()
                            .into_iter()
                            .enumerate()
                            .map(|(position, summary)| CameraOption { summary, position })
                            .collect();
                        let options = this.camera_options.clone();
                        this.camera_select = cx
                            .new(move |cx| SelectState::new(options, None, window, cx));
                        this.register_camera_subscription(cx);
                        this.refresh_status();
                        cx.notify();
                    })),
            );

        let facing_row = {
            let facing = camera
                .as_ref()
                .map(|c| c.facing_mode)
                .unwrap_or(FacingMode::User);

            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(div().font_semibold().child("Facing mode"))
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(facing.label()),
                        ),
                )
                .child(
                    Switch::new("facing-switch")
                        .checked(facing == FacingMode::Environment)
                        .disabled(camera.is_none())
                        .on_click(cx.listener(|this, _checked: &bool, _window, cx| {
                            this.controller.toggle_facing_mode();
                            cx.notify();
                        })),
                )
        };

        let negotiated = div()
            .text_sm()
            .text_color(cx.theme().muted_foreground)
            .child(match &camera {
                Some(info) => format!(
                    "Active: {} · {}x{}",
                    info.device_id, info.width, info.height
                ),
                None => "No camera selected yet".to_string(),
            });

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .bg(cx.theme().group_box)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .p_5()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(div().text_lg().font_semibold().child("Capture device"))
                    .child(device_row)
                    .child(facing_row)
                    .child(negotiated),
            )
            .child(self.render_preview_panel(300.0, cx))
    }

    fn render_background_step(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let selected_id = self.controller.selection().lock().background_id;

        let mut grid = div().flex().flex_wrap().gap_3();

        // Tile 0 clears the backdrop (sentinel "none selected")
        grid = grid.child(self.render_backdrop_tile(0, selected_id, cx));
        for id in 1..=assets::BACKGROUND_TILE_COUNT {
            grid = grid.child(self.render_backdrop_tile(id, selected_id, cx));
        }

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(div().text_lg().font_semibold().child("Pick a backdrop"))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Your photo will be placed in front of it"),
            )
            .child(grid)
    }

    fn render_backdrop_tile(
        &mut self,
        id: u32,
        selected_id: u32,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let is_selected = id == selected_id;

        let face: AnyElement = match assets::background_path(id) {
            Some(path) if path.exists() => img(path)
                .object_fit(ObjectFit::Cover)
                .w(px(148.0))
                .h(px(100.0))
                .rounded_md()
                .into_any_element(),
            Some(_) => {
                let color = TILE_COLORS[(id as usize - 1) % TILE_COLORS.len()];
                div()
                    .w(px(148.0))
                    .h(px(100.0))
                    .rounded_md()
                    .bg(gpui::rgb(color))
                    .into_any_element()
            }
            None => div()
                .w(px(148.0))
                .h(px(100.0))
                .rounded_md()
                .bg(cx.theme().muted)
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(cx.theme().muted_foreground)
                .child("None")
                .into_any_element(),
        };

        div()
            .id(("backdrop-tile", id as usize))
            .cursor_pointer()
            .p_1()
            .rounded_lg()
            .border_2()
            .border_color(if is_selected {
                cx.theme().primary
            } else {
                cx.theme().border
            })
            .hover(|s| s.border_color(cx.theme().primary_hover))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.set_background(id);
                this.refresh_status();
                cx.notify();
            }))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(face)
                    .child(
                        div()
                            .flex()
                            .justify_center()
                            .text_sm()
                            .child(assets::background_label(id)),
                    ),
            )
            .into_any_element()
    }

    fn render_character_step(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let selected_id = self.controller.selection().lock().character_id;

        let mut grid = div().flex().flex_wrap().gap_3();
        for character in &CHARACTER_CATALOG {
            let id = character.id;
            let is_selected = id == selected_id;

            let face: AnyElement = match assets::character_path(id) {
                Some(path) if path.exists() => img(path)
                    .object_fit(ObjectFit::Contain)
                    .w(px(96.0))
                    .h(px(96.0))
                    .into_any_element(),
                _ => div()
                    .w(px(96.0))
                    .h(px(96.0))
                    .rounded_md()
                    .bg(cx.theme().muted)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_2xl()
                    .child(character.name.chars().next().unwrap_or('?').to_string())
                    .into_any_element(),
            };

            grid = grid.child(
                div()
                    .id(("character-tile", id as usize))
                    .cursor_pointer()
                    .p_2()
                    .rounded_lg()
                    .border_2()
                    .border_color(if is_selected {
                        cx.theme().primary
                    } else {
                        cx.theme().border
                    })
                    .hover(|s| s.border_color(cx.theme().primary_hover))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.controller.set_character(id);
                        cx.notify();
                    }))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_1()
                            .child(face)
                            .child(div().text_sm().font_semibold().child(character.name))
                            .child(
                                div()
                                    .px_2()
                                    .py_1()
                                    .rounded_full()
                                    .bg(match character.kind {
                                        CharacterKind::SpeechBubble => {
                                            cx.theme().accent.opacity(0.25)
                                        }
                                        CharacterKind::Normal => cx.theme().muted,
                                    })
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(character.kind.label()),
                            ),
                    ),
            );
        }

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().text_lg().font_semibold().child("Pick a character"))
                    .child(
                        Button::new("clear-character")
                            .ghost()
                            .label("No character")
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.set_character(0);
                                cx.notify();
                            })),
                    ),
            )
            .child(grid)
    }

    fn render_text_step(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .bg(cx.theme().group_box)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .p_5()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(div().text_lg().font_semibold().child("Caption"))
                    .child(Input::new(&self.caption_input).cleanable(true))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(
                                "Shown over your photo and used to name the saved file",
                            ),
                    ),
            )
    }

    fn render_final_step(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let (background_id, character_id, caption) = {
            let selection = self.controller.selection();
            let guard = selection.lock();
            (
                guard.background_id,
                guard.character_id,
                guard.caption_text.clone(),
            )
        };
        let still = self.controller.captured_still();
        let has_still = still.is_some();

        // Layered composition: backdrop, photo (or live feed), character,
        // caption - the same order the saved composite uses.
        let mut stage = div()
            .relative()
            .w(px(640.0))
            .h(px(480.0))
            .rounded_lg()
            .overflow_hidden()
            .bg(cx.theme().muted);

        if let Some(path) = assets::background_path(background_id).filter(|p| p.exists()) {
            stage = stage.child(
                img(path)
                    .object_fit(ObjectFit::Cover)
                    .absolute()
                    .inset_0()
                    .w_full()
                    .h_full(),
            );
        } else if background_id > 0 {
            let color = TILE_COLORS[(background_id as usize - 1) % TILE_COLORS.len()];
            stage = stage.child(div().absolute().inset_0().bg(gpui::rgb(color)));
        }

        if let Some(path) = still.clone() {
            stage = stage.child(
                img(path)
                    .id("final-still")
                    .object_fit(ObjectFit::Contain)
                    .absolute()
                    .inset_0()
                    .w_full()
                    .h_full(),
            );
        } else if let Some((path, generation)) = self.controller.preview_frame() {
            stage = stage.child(
                img(path)
                    .id(("final-live", generation as usize))
                    .object_fit(ObjectFit::Contain)
                    .absolute()
                    .inset_0()
                    .w_full()
                    .h_full(),
            );
        }

        if let Some(path) = assets::character_path(character_id).filter(|p| p.exists()) {
            stage = stage.child(
                img(path)
                    .object_fit(ObjectFit::Contain)
                    .absolute()
                    .inset_0()
                    .w_full()
                    .h_full(),
            );
        }

        if !caption.is_empty() {
            stage = stage.child(
                div()
                    .absolute()
                    .bottom(px(16.0))
                    .left(px(0.0))
                    .right(px(0.0))
                    .flex()
                    .justify_center()
                    .child(
                        div()
                            .px_4()
                            .py_2()
                            .rounded_full()
                            .bg(gpui::black().opacity(0.55))
                            .text_lg()
                            .font_semibold()
                            .text_color(gpui::white())
                            .child(caption.clone()),
                    ),
            );
        }

        if let Some(remaining) = self.countdown_remaining() {
            stage = stage.child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(gpui::black().opacity(0.35))
                    .child(
                        div()
                            .text_3xl()
                            .font_semibold()
                            .text_color(gpui::white())
                            .child(format!("{remaining}")),
                    ),
            );
        }

        let shutter_row = div()
            .flex()
            .items_center()
            .gap_3()
            .when(!has_still, |row| {
                row.child(
                    Button::new("capture")
                        .primary()
                        .label("Capture 📸")
                        .disabled(self.shutter_at.is_some())
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.request_capture();
                            cx.notify();
                        })),
                )
            })
            .when(has_still, |row| {
                row.child(
                    Button::new("retake")
                        .ghost()
                        .label("Retake")
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.retake();
                            this.refresh_status();
                            cx.notify();
                        })),
                )
                .child(
                    Button::new("save")
                        .primary()
                        .label("Save photo")
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.commit_caption(cx);
                            match this.controller.save_photo() {
                                Ok(path) => {
                                    this.last_saved = Some(path);
                                    this.refresh_status();
                                }
                                Err(err) => this.status_text = format!("{err:#}").into(),
                            }
                            cx.notify();
                        })),
                )
            })
            .when(self.last_saved.is_some(), |row| {
                row.child(
                    Button::new("reveal")
                        .ghost()
                        .label("Show in folder")
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            if let Some(path) = this.last_saved.clone() {
                                if let Err(err) = this.controller.reveal_photo(&path) {
                                    this.status_text = format!("{err:#}").into();
                                }
                            }
                            cx.notify();
                        })),
                )
            })
            .child(
                Button::new("start-over")
                    .danger()
                    .label("Start over")
                    .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                        this.controller.start_over();
                        this.last_saved = None;
                        this.caption_input
                            .update(cx, |state, cx| state.set_value("", window, cx));
                        this.refresh_status();
                        cx.notify();
                    })),
            );

        let selection_summary = {
            let character = character_by_id(character_id)
                .map(|c| c.name)
                .unwrap_or("no character");
            format!(
                "{} · {}",
                assets::background_label(background_id),
                character
            )
        };

        let save_dir_row = div()
            .flex()
            .items_center()
            .gap_2()
            .text_sm()
            .text_color(cx.theme().muted_foreground)
            .child(selection_summary)
            .child("·")
            .child(format!("Saving to {}", self.controller.save_dir().display()))
            .child(
                Button::new("choose-save-dir")
                    .ghost()
                    .xsmall()
                    .label("Change…")
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        if let Err(err) = this.controller.choose_save_dir() {
                            this.status_text = format!("{err:#}").into();
                        } else {
                            this.refresh_status();
                        }
                        cx.notify();
                    })),
            );

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .child(stage)
            .child(shutter_row)
            .child(save_dir_row)
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let step = self.controller.current_step();

        div()
            .flex()
            .flex_wrap()
            .justify_between()
            .gap_2()
            .text_sm()
            .text_color(cx.theme().muted_foreground)
            .child(format!(
                "Step {} of {} · {}",
                step.number(),
                BoothStep::total_steps(),
                step.path()
            ))
            .child(div().child(
                "Keys: ←/→ steps · Space shutter · Cmd+S save · Cmd+R start over",
            ))
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.status_text = self.controller.status_message().into();

        // The preview tick repaints continuously, so an armed countdown is
        // checked here rather than on a dedicated timer.
        if let Some(at) = self.shutter_at {
            if Instant::now() >= at {
                self.shutter_at = None;
                self.fire_shutter();
            }
        }

        let content = match self.controller.current_step() {
            BoothStep::CameraSetup => self.render_camera_step(cx).into_any_element(),
            BoothStep::Background => self.render_background_step(cx).into_any_element(),
            BoothStep::Character => self.render_character_step(cx).into_any_element(),
            BoothStep::Text => self.render_text_step(cx).into_any_element(),
            BoothStep::Final => self.render_final_step(cx).into_any_element(),
        };

        div()
            .track_focus(&self.focus_handle) // Enable focus tracking for keyboard shortcuts
            .key_context("main_view") // Set key context for action dispatch
            .on_action(cx.listener(Self::next_step))
            .on_action(cx.listener(Self::previous_step))
            .on_action(cx.listener(Self::capture_photo))
            .on_action(cx.listener(Self::save_photo))
            .on_action(cx.listener(Self::start_over))
            .flex()
            .flex_col()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .gap_4()
            .p_5()
            .child(self.render_step_header(cx))
            .child(
                div()
                    .pr(px(6.0))
                    .child(content)
                    .scrollable(ScrollbarAxis::Vertical)
                    .flex_grow(),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.render_nav_buttons(cx))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(self.status_text.clone()),
                    )
                    .child(self.render_footer(cx)),
            )
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Drop for MainView {
    fn drop(&mut self) {
        self.controller.shutdown();
    }
}
