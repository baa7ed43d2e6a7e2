//! TextInput Component
//!
//! A labeled single-line text field. Presentation (label, error, helper text)
//! is described by [`InputConfig`]; the entity owns the value and focus handle.

use gpui::{
    div, prelude::*, px, App, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::constants::INPUT_MIN_WIDTH;
use crate::states::UiSettings;

/// Message rendered below the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    Error(SharedString),
    Helper(SharedString),
}

/// Presentation options of a text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputConfig {
    pub label: Option<SharedString>,
    pub error: Option<SharedString>,
    pub helper_text: Option<SharedString>,
    pub full_width: bool,
    pub disabled: bool,
}

fn non_empty(text: &Option<SharedString>) -> Option<&SharedString> {
    text.as_ref().filter(|text| !text.is_empty())
}

impl InputConfig {
    /// Label text, if one should be rendered
    pub fn visible_label(&self) -> Option<&SharedString> {
        non_empty(&self.label)
    }

    pub fn has_error(&self) -> bool {
        non_empty(&self.error).is_some()
    }

    /// The single message shown under the field; an error hides the helper text
    pub fn message(&self) -> Option<InputMessage> {
        if let Some(error) = non_empty(&self.error) {
            return Some(InputMessage::Error(error.clone()));
        }
        non_empty(&self.helper_text).map(|helper| InputMessage::Helper(helper.clone()))
    }
}

/// Apply a key press to `value`, returning whether it changed
fn apply_key(value: &mut String, key: &str, key_char: Option<&str>) -> bool {
    match key {
        "backspace" => value.pop().is_some(),
        _ => match key_char {
            Some(text) if !text.is_empty() && !text.chars().any(char::is_control) => {
                value.push_str(text);
                true
            }
            _ => false,
        },
    }
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    config: InputConfig,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            config: InputConfig::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_label(&mut self, label: Option<impl Into<SharedString>>) {
        self.config.label = label.map(Into::into);
    }

    pub fn set_error(&mut self, error: Option<impl Into<SharedString>>) {
        self.config.error = error.map(Into::into);
    }

    pub fn set_helper_text(&mut self, helper_text: Option<impl Into<SharedString>>) {
        self.config.helper_text = helper_text.map(Into::into);
    }

    pub fn set_full_width(&mut self, full_width: bool) {
        self.config.full_width = full_width;
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.config.disabled {
            return;
        }

        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        if apply_key(&mut self.value, &keystroke.key, keystroke.key_char.as_deref()) {
            if let Some(ref handler) = self.on_change {
                handler(&self.value, cx);
            }
            cx.notify();
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = UiSettings::global(cx).palette();
        let is_focused = self.focus_handle.is_focused(window);
        let has_error = self.config.has_error();

        let border_color = if has_error {
            palette.error
        } else if is_focused {
            palette.focus_ring
        } else {
            palette.input_border
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            palette.input_placeholder
        } else {
            palette.text
        };

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .px_4()
            .py_2()
            .bg(palette.input_bg)
            .border_1()
            .border_color(border_color)
            .rounded_lg()
            .text_color(text_color)
            .text_sm()
            .min_w(px(INPUT_MIN_WIDTH))
            .when(self.config.full_width, |el| el.w_full())
            .when(self.config.disabled, |el| el.opacity(0.5))
            .when(!self.config.disabled, |el| {
                el.cursor_text()
                    .on_click(cx.listener(|this, _, window, _cx| {
                        window.focus(&this.focus_handle);
                    }))
                    .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                        this.handle_key_down(event, cx);
                    }))
            })
            .child(display_text);

        div()
            .flex()
            .flex_col()
            .when(self.config.full_width, |el| el.w_full())
            .when_some(self.config.visible_label().cloned(), |el, label| {
                el.child(
                    div()
                        .mb_1()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(palette.text)
                        .child(label),
                )
            })
            .child(field)
            .when_some(self.config.message(), |el, message| {
                let (text, color) = match message {
                    InputMessage::Error(text) => (text, palette.error),
                    InputMessage::Helper(text) => (text, palette.text_muted),
                };
                el.child(div().mt_1().text_sm().text_color(color).child(text))
            })
    }
}

/// Create a simple text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(error: Option<&'static str>, helper: Option<&'static str>) -> InputConfig {
        InputConfig {
            error: error.map(SharedString::from),
            helper_text: helper.map(SharedString::from),
            ..InputConfig::default()
        }
    }

    #[test]
    fn error_suppresses_helper_text() {
        let config = config(Some("Required"), Some("Your work email"));
        assert!(config.has_error());
        assert_eq!(config.message(), Some(InputMessage::Error("Required".into())));
    }

    #[test]
    fn helper_text_shown_without_error() {
        let config = config(None, Some("Your work email"));
        assert!(!config.has_error());
        assert_eq!(config.message(), Some(InputMessage::Helper("Your work email".into())));
    }

    #[test]
    fn empty_error_counts_as_absent() {
        let config = config(Some(""), Some("Your work email"));
        assert!(!config.has_error());
        assert_eq!(config.message(), Some(InputMessage::Helper("Your work email".into())));
    }

    #[test]
    fn no_message_without_error_or_helper() {
        assert_eq!(config(None, None).message(), None);
        assert_eq!(config(None, Some("")).message(), None);
    }

    #[test]
    fn label_only_when_present() {
        let mut config = InputConfig::default();
        assert!(config.visible_label().is_none());

        config.label = Some("".into());
        assert!(config.visible_label().is_none());

        config.label = Some("Email".into());
        assert_eq!(config.visible_label(), Some(&SharedString::from("Email")));
    }

    #[test]
    fn typing_and_backspace() {
        let mut value = String::new();
        assert!(apply_key(&mut value, "a", Some("a")));
        assert!(apply_key(&mut value, "space", Some(" ")));
        assert!(apply_key(&mut value, "b", Some("B")));
        assert_eq!(value, "a B");

        assert!(apply_key(&mut value, "backspace", None));
        assert_eq!(value, "a ");
    }

    #[test]
    fn non_text_keys_are_ignored() {
        let mut value = String::from("x");
        assert!(!apply_key(&mut value, "left", None));
        assert!(!apply_key(&mut value, "enter", Some("\n")));
        assert_eq!(value, "x");

        value.clear();
        assert!(!apply_key(&mut value, "backspace", None));
    }
}
