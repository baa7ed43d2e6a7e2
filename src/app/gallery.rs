//! Gallery - Root View Showing Every Widget
//!
//! The root view also hosts the document: it forwards key presses to
//! [`OverlayDocument`] and stops page scrolling while a modal holds the lock.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, FocusHandle, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled, Window,
};
use gpui_component::{h_flex, v_flex, ThemeMode};
use tracing::{debug, error, info};

use crate::components::composite::modal::{modal_lifecycle, Modal, ModalFooter, ModalSize};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::i18n::{t, Locale};
use crate::overlay::{ModalLifecycle, OverlayDocument};
use crate::states::UiSettings;
use crate::theme::typography::Typography;

/// Main gallery view
pub struct Gallery {
    focus_handle: FocusHandle,
    email: Entity<TextInput>,
    name: Entity<TextInput>,
    confirm_modal: Entity<ModalLifecycle<App>>,
    strict_modal: Entity<ModalLifecycle<App>>,
    confirm_open: bool,
    strict_open: bool,
    saving: bool,
}

impl Gallery {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let locale = UiSettings::global(cx).locale();

        let email = text_input("email", "", "name@example.com", cx);
        email.update(cx, |input, _| {
            input.set_label(Some(t(locale, "gallery-email-label")));
            input.set_helper_text(Some(t(locale, "gallery-email-helper")));
            input.set_full_width(true);
        });

        let name = text_input("name", "", "", cx);
        name.update(cx, |input, _| {
            input.set_label(Some(t(locale, "gallery-name-label")));
            input.on_change(|value, _cx| debug!(len = value.len(), "Name changed"));
        });

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            focus_handle,
            email,
            name,
            confirm_modal: modal_lifecycle(cx),
            strict_modal: modal_lifecycle(cx),
            confirm_open: false,
            strict_open: false,
            saving: false,
        }
    }

    fn validate_email(&mut self, locale: Locale, cx: &mut Context<Self>) {
        self.email.update(cx, |input, cx| {
            let error = (!input.value().contains('@')).then(|| t(locale, "gallery-email-error"));
            input.set_error(error);
            cx.notify();
        });
    }

    fn update_settings(&mut self, cx: &mut Context<Self>, update: impl FnOnce(&mut UiSettings)) {
        let mut settings = UiSettings::global(cx);
        update(&mut settings);
        if let Err(e) = settings.save() {
            error!(error = %e, "Failed to save settings");
        }
        cx.set_global(settings);
        cx.notify();
    }

    fn section(title: SharedString, text_color: gpui::Rgba) -> gpui::Div {
        v_flex().gap_3().child(
            div()
                .text_size(px(Typography::TEXT_LG))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(text_color)
                .child(title),
        )
    }

    fn render_buttons(
        &self,
        locale: Locale,
        text_color: gpui::Rgba,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let dark = matches!(UiSettings::global(cx).theme(), ThemeMode::Dark);
        let theme_label: SharedString = if dark { "Light".into() } else { "Dark".into() };
        let locale_label = match locale {
            Locale::EnUS => Locale::KoKR.display_name(),
            Locale::KoKR => Locale::EnUS.display_name(),
        };

        Self::section(t(locale, "gallery-buttons"), text_color)
            .child(
                h_flex()
                    .gap_2()
                    .child(Button::primary("btn-primary", "Primary"))
                    .child(Button::secondary("btn-secondary", "Secondary"))
                    .child(Button::outline("btn-outline", "Outline"))
                    .child(Button::ghost("btn-ghost", "Ghost"))
                    .child(Button::danger("btn-danger", "Danger")),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Button::new("btn-sm", "Small").size(ButtonSize::Small))
                    .child(Button::new("btn-md", "Medium"))
                    .child(Button::new("btn-lg", "Large").size(ButtonSize::Large))
                    .child(Button::new("btn-disabled", "Disabled").disabled(true))
                    .child(Button::new("btn-loading", "Saving").loading(true)),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(Button::outline("btn-theme", theme_label).on_click(cx.listener(
                        |this, _: &ClickEvent, _, cx| {
                            this.update_settings(cx, |settings| {
                                let next = if matches!(settings.theme(), ThemeMode::Dark) {
                                    ThemeMode::Light
                                } else {
                                    ThemeMode::Dark
                                };
                                settings.set_theme(next);
                            });
                        },
                    )))
                    .child(Button::outline("btn-locale", locale_label).on_click(cx.listener(
                        move |this, _: &ClickEvent, _, cx| {
                            this.update_settings(cx, |settings| {
                                let next = match settings.locale() {
                                    Locale::EnUS => Locale::KoKR,
                                    Locale::KoKR => Locale::EnUS,
                                };
                                settings.set_locale(next);
                            });
                        },
                    ))),
            )
            .child(Button::new("btn-full", "Full width").full_width(true))
    }

    fn render_inputs(
        &self,
        locale: Locale,
        text_color: gpui::Rgba,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        Self::section(t(locale, "gallery-inputs"), text_color)
            .child(self.email.clone())
            .child(self.name.clone())
            .child(
                h_flex().child(Button::secondary("btn-validate", "Validate").on_click(
                    cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.validate_email(locale, cx)
                    }),
                )),
            )
    }

    fn render_modal_triggers(
        &self,
        locale: Locale,
        text_color: gpui::Rgba,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        Self::section(t(locale, "gallery-modals"), text_color).child(
            h_flex()
                .gap_2()
                .child(
                    Button::primary("btn-open-modal", t(locale, "gallery-open-modal")).on_click(
                        cx.listener(|this, _: &ClickEvent, _, cx| {
                            this.confirm_open = true;
                            cx.notify();
                        }),
                    ),
                )
                .child(
                    Button::outline("btn-open-strict", t(locale, "gallery-open-strict-modal"))
                        .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                            this.strict_open = true;
                            cx.notify();
                        })),
                ),
        )
    }

    fn render_confirm_modal(&self, locale: Locale, cx: &mut Context<Self>) -> Modal {
        let this = cx.entity().downgrade();
        Modal::new(&self.confirm_modal)
            .open(self.confirm_open)
            .title(t(locale, "gallery-modal-title"))
            .on_close(move |cx| {
                let _ = this.update(cx, |this, cx| {
                    this.confirm_open = false;
                    this.saving = false;
                    cx.notify();
                });
            })
            .child(t(locale, "gallery-modal-body"))
            .footer(
                ModalFooter::new(
                    cx.listener(|this, _: &ClickEvent, _, cx| {
                        this.confirm_open = false;
                        this.saving = false;
                        cx.notify();
                    }),
                    cx.listener(|this, _: &ClickEvent, _, cx| {
                        if this.saving {
                            info!("Confirmed");
                            this.confirm_open = false;
                            this.saving = false;
                        } else {
                            this.saving = true;
                        }
                        cx.notify();
                    }),
                )
                .loading(self.saving),
            )
    }

    fn render_strict_modal(&self, locale: Locale, cx: &mut Context<Self>) -> Modal {
        let this = cx.entity().downgrade();
        Modal::new(&self.strict_modal)
            .open(self.strict_open)
            .title(t(locale, "gallery-modal-title"))
            .size(ModalSize::Small)
            .close_on_backdrop(false)
            .on_close(move |cx| {
                let _ = this.update(cx, |this, cx| {
                    this.strict_open = false;
                    cx.notify();
                });
            })
            .child(t(locale, "gallery-strict-modal-body"))
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = UiSettings::global(cx);
        let palette = settings.palette();
        let locale = settings.locale();
        let scroll_locked = OverlayDocument::scroll_locked(cx);

        let page = v_flex()
            .id("gallery-page")
            .size_full()
            .p_6()
            .gap_8()
            .when(!scroll_locked, |el| el.overflow_y_scroll())
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(palette.text)
                    .child(t(locale, "gallery-title")),
            )
            .child(self.render_buttons(locale, palette.text, cx))
            .child(self.render_inputs(locale, palette.text, cx))
            .child(self.render_modal_triggers(locale, palette.text, cx));

        div()
            .id("gallery")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .bg(palette.surface)
            .on_key_down(|event: &KeyDownEvent, _window, cx| {
                OverlayDocument::dispatch_key(&event.keystroke.key, cx);
            })
            .child(page)
            .child(self.render_confirm_modal(locale, cx))
            .child(self.render_strict_modal(locale, cx))
    }
}
