//! Button Component

use std::time::Duration;

use gpui::{
    div, percentage, prelude::*, px, svg, Animation, AnimationExt, App, ClickEvent, ElementId,
    FocusHandle, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba, SharedString,
    StatefulInteractiveElement, Styled, Transformation, Window,
};

use crate::constants::SPINNER_ICON;
use crate::i18n::t;
use crate::states::UiSettings;
use crate::theme::colors::Palette;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary accent
    #[default]
    Primary,
    /// Filled with the secondary accent
    Secondary,
    /// Transparent with a primary border
    Outline,
    /// Transparent, text only
    Ghost,
    /// Filled with the error color
    Danger,
}

/// Colors for one button variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub bg: Rgba,
    pub text: Rgba,
    pub hover_bg: Rgba,
    pub hover_text: Rgba,
    pub border: Option<Rgba>,
}

impl ButtonVariant {
    /// Look up the colors of this variant in `palette`
    pub fn colors(self, palette: &Palette) -> ButtonColors {
        match self {
            ButtonVariant::Primary => ButtonColors {
                bg: palette.primary,
                text: palette.on_accent,
                hover_bg: palette.primary_dark,
                hover_text: palette.on_accent,
                border: None,
            },
            ButtonVariant::Secondary => ButtonColors {
                bg: palette.secondary,
                text: palette.on_accent,
                hover_bg: palette.secondary_dark,
                hover_text: palette.on_accent,
                border: None,
            },
            ButtonVariant::Outline => ButtonColors {
                bg: palette.transparent,
                text: palette.primary,
                hover_bg: palette.primary,
                hover_text: palette.on_accent,
                border: Some(palette.primary),
            },
            ButtonVariant::Ghost => ButtonColors {
                bg: palette.transparent,
                text: palette.primary,
                hover_bg: palette.ghost_hover,
                hover_text: palette.primary,
                border: None,
            },
            ButtonVariant::Danger => ButtonColors {
                bg: palette.error,
                text: palette.on_accent,
                hover_bg: palette.error_dark,
                hover_text: palette.on_accent,
                border: None,
            },
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// Padding, font size and corner radius for one button size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    pub radius: f32,
}

impl ButtonSize {
    pub fn metrics(self) -> ButtonMetrics {
        match self {
            ButtonSize::Small => ButtonMetrics {
                padding_x: 12.0,
                padding_y: 6.0,
                font_size: Typography::TEXT_SM,
                radius: Typography::RADIUS_MD,
            },
            ButtonSize::Medium => ButtonMetrics {
                padding_x: 16.0,
                padding_y: 8.0,
                font_size: Typography::TEXT_BASE,
                radius: Typography::RADIUS_LG,
            },
            ButtonSize::Large => ButtonMetrics {
                padding_x: 24.0,
                padding_y: 12.0,
                font_size: Typography::TEXT_LG,
                radius: Typography::RADIUS_LG,
            },
        }
    }
}

/// Display options of a button, independent of its label and handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonConfig {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
    pub loading: bool,
    pub disabled: bool,
}

impl ButtonConfig {
    /// A loading button is never interactive, whatever `disabled` says
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn shows_spinner(&self) -> bool {
        self.loading
    }

    pub fn opacity(&self) -> f32 {
        if self.is_interactive() { 1.0 } else { 0.5 }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    config: ButtonConfig,
    focus_handle: Option<FocusHandle>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            config: ButtonConfig::default(),
            focus_handle: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    /// Stretch the button to the width of its container
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.config.full_width = full_width;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Track focus with a handle owned by the parent view
    pub fn track_focus(mut self, focus_handle: &FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle.clone());
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Label shown when not loading
    pub fn label(&self) -> &SharedString {
        &self.label
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let settings = UiSettings::global(cx);
        let config = self.config;
        let colors = config.variant.colors(&settings.palette());
        let metrics = config.size.metrics();

        let label = if config.shows_spinner() {
            t(settings.locale(), "button-loading")
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(px(metrics.padding_x))
            .py(px(metrics.padding_y))
            .bg(colors.bg)
            .text_color(colors.text)
            .text_size(px(metrics.font_size))
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded(px(metrics.radius))
            .opacity(config.opacity())
            .when(config.full_width, |el| el.w_full())
            .when_some(colors.border, |el, border| el.border_2().border_color(border))
            .when_some(self.focus_handle, |el, handle| el.track_focus(&handle))
            .when(config.shows_spinner(), |el| {
                el.child(
                    svg()
                        .path(SPINNER_ICON)
                        .size(px(16.0))
                        .text_color(colors.text)
                        .with_animation(
                            "button-spinner",
                            Animation::new(Duration::from_secs(1)).repeat(),
                            |icon, delta| {
                                icon.with_transformation(Transformation::rotate(percentage(
                                    delta,
                                )))
                            },
                        ),
                )
            })
            .child(label);

        if config.is_interactive() {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(colors.hover_bg).text_color(colors.hover_text));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_forces_non_interactive() {
        for disabled in [false, true] {
            let config = ButtonConfig {
                loading: true,
                disabled,
                ..ButtonConfig::default()
            };
            assert!(!config.is_interactive());
            assert!(config.shows_spinner());
            assert_eq!(config.opacity(), 0.5);
        }
    }

    #[test]
    fn disabled_without_loading_has_no_spinner() {
        let config = ButtonConfig {
            disabled: true,
            ..ButtonConfig::default()
        };
        assert!(!config.is_interactive());
        assert!(!config.shows_spinner());
    }

    #[test]
    fn builder_sets_config() {
        let button = Button::danger("delete", "Delete")
            .size(ButtonSize::Large)
            .full_width(true)
            .loading(true);

        let config = button.config();
        assert_eq!(config.variant, ButtonVariant::Danger);
        assert_eq!(config.size, ButtonSize::Large);
        assert!(config.full_width);
        assert!(!config.is_interactive());
    }

    #[test]
    fn default_button_is_interactive_primary_medium() {
        let button = Button::new("ok", "OK");
        let config = button.config();
        assert_eq!(config.variant, ButtonVariant::Primary);
        assert_eq!(config.size, ButtonSize::Medium);
        assert!(config.is_interactive());
    }

    #[test]
    fn only_outline_has_a_border() {
        let palette = Palette::light();
        assert_eq!(ButtonVariant::Outline.colors(&palette).border, Some(palette.primary));
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
            ButtonVariant::Danger,
        ] {
            assert_eq!(variant.colors(&palette).border, None);
        }
    }

    #[test]
    fn sizes_grow_monotonically() {
        let small = ButtonSize::Small.metrics();
        let medium = ButtonSize::Medium.metrics();
        let large = ButtonSize::Large.metrics();
        assert!(small.font_size < medium.font_size && medium.font_size < large.font_size);
        assert!(small.padding_x < medium.padding_x && medium.padding_x < large.padding_x);
    }
}
