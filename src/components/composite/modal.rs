//! Modal Component
//!
//! A dialog drawn over a dimmed backdrop. Visibility is owned by the parent:
//! the modal reads `open` on every render and asks for a close through
//! `on_close`. Scroll locking and the Escape listener live in a
//! [`ModalLifecycle`] entity that the parent keeps alive between renders.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, Context, Empty, Entity, InteractiveElement,
    IntoElement, MouseButton, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{h_flex, tooltip::Tooltip, v_flex, Icon, IconName};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::components::primitives::button::Button;
use crate::constants::{
    MODAL_SECTION_PADDING, MODAL_VIEWPORT_PADDING, MODAL_WIDTH_LG, MODAL_WIDTH_MD, MODAL_WIDTH_SM,
    MODAL_WIDTH_XL,
};
use crate::i18n::{t, Locale};
use crate::overlay::{
    CloseHandler, DismissPolicy, ModalLifecycle, OverlayDocument, PointerTarget, Transition,
};
use crate::states::UiSettings;
use crate::theme::typography::Typography;

/// Modal panel width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
    #[serde(rename = "xl")]
    ExtraLarge,
}

impl ModalSize {
    /// Maximum panel width in pixels
    pub fn max_width(self) -> f32 {
        match self {
            ModalSize::Small => MODAL_WIDTH_SM,
            ModalSize::Medium => MODAL_WIDTH_MD,
            ModalSize::Large => MODAL_WIDTH_LG,
            ModalSize::ExtraLarge => MODAL_WIDTH_XL,
        }
    }
}

/// Display options of a modal; unset values come from [`UiSettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalConfig {
    pub title: Option<SharedString>,
    pub size: Option<ModalSize>,
    pub close_on_backdrop: Option<bool>,
}

impl ModalConfig {
    /// Title to render in the header, if any
    pub fn visible_title(&self) -> Option<&SharedString> {
        self.title.as_ref().filter(|title| !title.is_empty())
    }

    pub fn size(&self, settings: &UiSettings) -> ModalSize {
        self.size.unwrap_or_else(|| settings.modal_size())
    }

    pub fn dismiss_policy(&self, settings: &UiSettings) -> DismissPolicy {
        DismissPolicy::new(
            self.close_on_backdrop
                .unwrap_or_else(|| settings.close_on_backdrop()),
        )
    }
}

/// What an open modal draws, resolved before any element is built
#[derive(Debug, Clone, PartialEq)]
pub struct ModalPlan {
    pub title: Option<SharedString>,
    pub size: ModalSize,
    pub policy: DismissPolicy,
    pub footer: bool,
}

impl ModalPlan {
    /// `None` while the modal is closed: nothing is drawn at all
    pub fn resolve(
        open: bool,
        config: &ModalConfig,
        has_footer: bool,
        settings: &UiSettings,
    ) -> Option<Self> {
        open.then(|| Self {
            title: config.visible_title().cloned(),
            size: config.size(settings),
            policy: config.dismiss_policy(settings),
            footer: has_footer,
        })
    }
}

/// Create the lifecycle entity a parent view keeps for one modal
pub fn modal_lifecycle<V: 'static>(cx: &mut Context<V>) -> Entity<ModalLifecycle<App>> {
    let document = OverlayDocument::document(cx);
    cx.new(|_| ModalLifecycle::new(document))
}

fn dismiss(
    lifecycle: &Entity<ModalLifecycle<App>>,
    target: PointerTarget,
    policy: DismissPolicy,
    cx: &mut App,
) {
    let handler = lifecycle.read(cx).dismiss_handler(target, policy);
    if let Some(handler) = handler {
        handler(cx);
    }
}

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    lifecycle: Entity<ModalLifecycle<App>>,
    open: bool,
    config: ModalConfig,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<CloseHandler<App>>,
}

impl Modal {
    /// Create a closed modal driven by `lifecycle`
    pub fn new(lifecycle: &Entity<ModalLifecycle<App>>) -> Self {
        Self {
            lifecycle: lifecycle.clone(),
            open: false,
            config: ModalConfig::default(),
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Set whether the modal is open (owned by the caller)
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set the close request handler
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.config.size = Some(size);
        self
    }

    /// Whether a click on the backdrop requests a close
    pub fn close_on_backdrop(mut self, close_on_backdrop: bool) -> Self {
        self.config.close_on_backdrop = Some(close_on_backdrop);
        self
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer element
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer.push(footer.into_any_element());
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let missing_handler = self.on_close.is_none();
        let on_close = self
            .on_close
            .unwrap_or_else(|| Rc::new(|_: &mut App| {}));

        let open = self.open;
        let transition = self
            .lifecycle
            .update(cx, |lifecycle, _| lifecycle.sync(open, on_close));
        if transition == Transition::Opened && missing_handler {
            warn!("Modal opened without an on_close handler; it can only be closed by its owner");
        }
        if transition.is_change() {
            // Views drawn before this modal saw the previous scroll lock state.
            window.on_next_frame(|window, _| window.refresh());
        }

        let settings = UiSettings::global(cx);
        let has_footer = !self.footer.is_empty();
        let Some(plan) = ModalPlan::resolve(open, &self.config, has_footer, &settings) else {
            return Empty.into_any_element();
        };

        let palette = settings.palette();
        let locale = settings.locale();
        let policy = plan.policy;

        let header = plan.title.map(|title| {
            let lifecycle = self.lifecycle.clone();
            let close_label = t(locale, "modal-close");
            h_flex()
                .items_center()
                .justify_between()
                .p(px(MODAL_SECTION_PADDING))
                .border_b_1()
                .border_color(palette.border)
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XL))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(palette.text)
                        .child(title),
                )
                .child(
                    div()
                        .id("modal-close")
                        .flex()
                        .items_center()
                        .justify_center()
                        .size(px(24.0))
                        .rounded_sm()
                        .cursor_pointer()
                        .text_color(palette.text_subtle)
                        .hover(|s| s.text_color(palette.text_subtle_hover))
                        .tooltip(move |window, cx| {
                            Tooltip::new(close_label.clone()).build(window, cx)
                        })
                        .on_click(move |_event: &ClickEvent, _window, cx| {
                            dismiss(&lifecycle, PointerTarget::CloseButton, policy, cx);
                        })
                        .child(Icon::new(IconName::Close)),
                )
        });

        let panel_lifecycle = self.lifecycle.clone();
        let panel = v_flex()
            .id("modal-panel")
            .relative()
            .w_full()
            .max_w(px(plan.size.max_width()))
            .bg(palette.surface)
            .rounded_lg()
            .shadow_xl()
            .occlude()
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                dismiss(&panel_lifecycle, PointerTarget::Panel, policy, cx);
                cx.stop_propagation();
            })
            .children(header)
            .child(
                v_flex()
                    .p(px(MODAL_SECTION_PADDING))
                    .gap_4()
                    .text_color(palette.text)
                    .children(self.children),
            )
            .when(plan.footer, |el| {
                el.child(
                    h_flex()
                        .items_center()
                        .justify_end()
                        .gap_3()
                        .p(px(MODAL_SECTION_PADDING))
                        .border_t_1()
                        .border_color(palette.border)
                        .children(self.footer),
                )
            });

        let backdrop_lifecycle = self.lifecycle.clone();
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .p(px(MODAL_VIEWPORT_PADDING))
            .bg(palette.backdrop)
            .occlude()
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                dismiss(&backdrop_lifecycle, PointerTarget::Backdrop, policy, cx);
            })
            .child(panel)
            .into_any_element()
    }
}

/// Standard Cancel / Confirm footer
#[derive(IntoElement)]
pub struct ModalFooter {
    on_cancel: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
    on_confirm: Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>,
    cancel_text: Option<SharedString>,
    confirm_text: Option<SharedString>,
    loading: bool,
}

impl ModalFooter {
    pub fn new(
        on_cancel: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
        on_confirm: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            on_cancel: Box::new(on_cancel),
            on_confirm: Box::new(on_confirm),
            cancel_text: None,
            confirm_text: None,
            loading: false,
        }
    }

    /// Override the localized "Cancel" label
    pub fn cancel_text(mut self, text: impl Into<SharedString>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Override the localized "Confirm" label
    pub fn confirm_text(mut self, text: impl Into<SharedString>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Put the confirm button in its loading state and disable cancel
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Build the (cancel, confirm) buttons
    fn into_buttons(self, locale: Locale) -> (Button, Button) {
        let cancel_text = self
            .cancel_text
            .unwrap_or_else(|| t(locale, "modal-cancel"));
        let confirm_text = self
            .confirm_text
            .unwrap_or_else(|| t(locale, "modal-confirm"));

        let cancel = Button::ghost("modal-footer-cancel", cancel_text)
            .disabled(self.loading)
            .on_click(self.on_cancel);
        let confirm = Button::primary("modal-footer-confirm", confirm_text)
            .loading(self.loading)
            .on_click(self.on_confirm);
        (cancel, confirm)
    }
}

impl RenderOnce for ModalFooter {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (cancel, confirm) = self.into_buttons(UiSettings::global(cx).locale());
        h_flex().gap_3().child(cancel).child(confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::primitives::button::ButtonVariant;
    use crate::overlay::Document;

    #[derive(Default)]
    struct Host {
        close_requests: usize,
    }

    fn on_close() -> CloseHandler<Host> {
        Rc::new(|host: &mut Host| host.close_requests += 1)
    }

    fn noop_footer() -> ModalFooter {
        ModalFooter::new(|_, _, _| {}, |_, _, _| {})
    }

    #[test]
    fn sizes_map_to_fixed_widths() {
        assert_eq!(ModalSize::Small.max_width(), 384.0);
        assert_eq!(ModalSize::Medium.max_width(), 448.0);
        assert_eq!(ModalSize::Large.max_width(), 512.0);
        assert_eq!(ModalSize::ExtraLarge.max_width(), 576.0);
    }

    #[test]
    fn config_falls_back_to_settings() {
        let mut settings = UiSettings::default();
        settings.set_modal_size(ModalSize::Large);
        settings.set_close_on_backdrop(false);

        let config = ModalConfig::default();
        assert_eq!(config.size(&settings), ModalSize::Large);
        assert_eq!(config.dismiss_policy(&settings), DismissPolicy::new(false));

        let config = ModalConfig {
            size: Some(ModalSize::Small),
            close_on_backdrop: Some(true),
            ..ModalConfig::default()
        };
        assert_eq!(config.size(&settings), ModalSize::Small);
        assert_eq!(config.dismiss_policy(&settings), DismissPolicy::new(true));
    }

    #[test]
    fn defaults_close_on_backdrop() {
        let config = ModalConfig::default();
        let policy = config.dismiss_policy(&UiSettings::default());
        assert!(policy.dismisses(PointerTarget::Backdrop));
        assert!(!policy.dismisses(PointerTarget::Panel));
    }

    #[test]
    fn empty_title_renders_no_header() {
        let mut config = ModalConfig::default();
        assert!(config.visible_title().is_none());

        config.title = Some("".into());
        assert!(config.visible_title().is_none());

        config.title = Some("Confirm".into());
        assert_eq!(config.visible_title(), Some(&SharedString::from("Confirm")));
    }

    #[test]
    fn footer_uses_localized_defaults() {
        let (cancel, confirm) = noop_footer().into_buttons(Locale::KoKR);
        assert_eq!(cancel.label().to_string(), "취소");
        assert_eq!(confirm.label().to_string(), "확인");
        assert_eq!(cancel.config().variant, ButtonVariant::Ghost);
        assert_eq!(confirm.config().variant, ButtonVariant::Primary);
        assert!(cancel.config().is_interactive());
        assert!(confirm.config().is_interactive());
    }

    #[test]
    fn footer_texts_override_defaults() {
        let (cancel, confirm) = noop_footer()
            .cancel_text("Back")
            .confirm_text("Delete")
            .into_buttons(Locale::KoKR);
        assert_eq!(cancel.label().to_string(), "Back");
        assert_eq!(confirm.label().to_string(), "Delete");
    }

    #[test]
    fn closed_modal_plans_nothing_and_registers_nothing() {
        let config = ModalConfig {
            title: Some("Delete item".into()),
            ..ModalConfig::default()
        };
        assert_eq!(ModalPlan::resolve(false, &config, true, &UiSettings::default()), None);

        let document = Document::<Host>::new();
        let mut lifecycle = ModalLifecycle::new(document.clone());
        assert_eq!(lifecycle.sync(false, on_close()), Transition::Unchanged);
        assert!(document.keys().is_empty());
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn header_and_footer_follow_content() {
        let settings = UiSettings::default();

        let bare = ModalPlan::resolve(true, &ModalConfig::default(), false, &settings)
            .expect("open modal has a plan");
        assert_eq!(bare.title, None);
        assert!(!bare.footer);
        assert_eq!(bare.size, ModalSize::Medium);

        let config = ModalConfig {
            title: Some("Delete item".into()),
            size: Some(ModalSize::ExtraLarge),
            ..ModalConfig::default()
        };
        let full =
            ModalPlan::resolve(true, &config, true, &settings).expect("open modal has a plan");
        assert_eq!(full.title, Some(SharedString::from("Delete item")));
        assert!(full.footer);
        assert_eq!(full.size, ModalSize::ExtraLarge);
    }

    #[test]
    fn panel_press_never_closes_but_backdrop_does() {
        let document = Document::<Host>::new();
        let mut lifecycle = ModalLifecycle::new(document);
        let plan = ModalPlan::resolve(true, &ModalConfig::default(), false, &UiSettings::default())
            .expect("open modal has a plan");
        let mut host = Host::default();

        lifecycle.sync(true, on_close());
        assert!(!lifecycle.pointer_down(PointerTarget::Panel, plan.policy, &mut host));
        assert_eq!(host.close_requests, 0);

        assert!(lifecycle.pointer_down(PointerTarget::Backdrop, plan.policy, &mut host));
        assert_eq!(host.close_requests, 1);
    }

    #[test]
    fn strict_modal_ignores_backdrop() {
        let config = ModalConfig {
            close_on_backdrop: Some(false),
            ..ModalConfig::default()
        };
        let plan = ModalPlan::resolve(true, &config, false, &UiSettings::default())
            .expect("open modal has a plan");

        assert!(!plan.policy.dismisses(PointerTarget::Backdrop));
        assert!(!plan.policy.dismisses(PointerTarget::Panel));
        assert!(plan.policy.dismisses(PointerTarget::CloseButton));
    }

    #[test]
    fn footer_loading_disables_both_buttons() {
        let (cancel, confirm) = noop_footer()
            .cancel_text("Back")
            .confirm_text("Delete")
            .loading(true)
            .into_buttons(Locale::EnUS);

        assert!(!cancel.config().is_interactive());
        assert!(!cancel.config().shows_spinner());
        assert!(!confirm.config().is_interactive());
        assert!(confirm.config().shows_spinner());
    }
}
