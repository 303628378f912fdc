//! Mouse routing tests
//!
//! Verifies the hit-test layer resolves clicks to the same targets the
//! renderer draws, and that the resulting messages land where the dots
//! point.

mod common;

use common::loaded_model;
use showcase::keymap::{
    default_bindings, Command, Keybinding, KeyCode, Keymap, Keystroke, Modifiers,
};
use showcase::messages::{CarouselMsg, Msg, UiMsg};
use showcase::update::update;
use showcase::view::geometry::{
    dot_rect, help_modal_rect, next_button_rect, prev_button_rect,
};
use showcase::view::{hit_test_ui, HitTarget, Point};

fn keymap() -> Keymap {
    Keymap::with_bindings(default_bindings())
}

fn center(rect: showcase::view::Rect) -> Point {
    let (x, y) = rect.center();
    Point::new(x as f64, y as f64)
}

#[test]
fn test_buttons_hit() {
    let model = loaded_model(3);
    let keymap = keymap();
    let (w, h) = model.window_size;

    let prev = hit_test_ui(&model, &keymap, center(prev_button_rect(w, h)));
    assert_eq!(prev, Some(HitTarget::PrevButton));

    let next = hit_test_ui(&model, &keymap, center(next_button_rect(w, h)));
    assert_eq!(next, Some(HitTarget::NextButton));
}

#[test]
fn test_each_dot_resolves_to_its_slide() {
    let model = loaded_model(5);
    let keymap = keymap();
    let (w, h) = model.window_size;

    for i in 0..5 {
        let target = hit_test_ui(&model, &keymap, center(dot_rect(w, h, i, 5)));
        assert_eq!(target, Some(HitTarget::Dot { slide_index: i }));
    }
}

#[test]
fn test_dot_click_lands_on_the_dots_slide() {
    let mut model = loaded_model(5);
    let keymap = keymap();
    let (w, h) = model.window_size;

    let Some(HitTarget::Dot { slide_index }) =
        hit_test_ui(&model, &keymap, center(dot_rect(w, h, 3, 5)))
    else {
        panic!("expected a dot hit");
    };
    update(&mut model, Msg::go_to(slide_index));
    assert_eq!(model.carousel.current(), 3);
}

#[test]
fn test_stage_click_has_no_action() {
    let mut model = loaded_model(3);

    let target = hit_test_ui(&model, &keymap(), Point::new(400.0, 200.0));
    assert_eq!(target, Some(HitTarget::Stage));

    // A stage click produces no message; the carousel stays put
    assert_eq!(model.carousel.current(), 0);
    update(&mut model, Msg::Carousel(CarouselMsg::Next));
    assert_eq!(model.carousel.current(), 1);
}

#[test]
fn test_open_modal_blocks_everything_below() {
    let mut model = loaded_model(3);
    update(&mut model, Msg::Ui(UiMsg::ToggleHelp));
    let (w, h) = model.window_size;

    // The prev button is covered by the overlay while the modal is open
    let target = hit_test_ui(&model, &keymap(), center(prev_button_rect(w, h)));
    assert!(matches!(target, Some(HitTarget::Modal { .. })));
}

#[test]
fn test_click_outside_panel_closes_the_modal() {
    let mut model = loaded_model(3);
    update(&mut model, Msg::Ui(UiMsg::ToggleHelp));
    let keymap = keymap();
    let (w, h) = model.window_size;

    let panel = help_modal_rect(w, h, keymap.bindings_for_display().len());
    let outside = Point::new((panel.x - 10.0) as f64, 10.0);

    match hit_test_ui(&model, &keymap, outside) {
        Some(HitTarget::Modal { inside: false }) => {
            update(&mut model, Msg::Ui(UiMsg::CloseModal));
        }
        other => panic!("expected an outside modal hit, got {:?}", other),
    }
    assert!(!model.ui.has_modal());
}

#[test]
fn test_click_inside_panel_keeps_the_modal() {
    let mut model = loaded_model(3);
    update(&mut model, Msg::Ui(UiMsg::ToggleHelp));
    let keymap = keymap();
    let (w, h) = model.window_size;

    let panel = help_modal_rect(w, h, keymap.bindings_for_display().len());
    let target = hit_test_ui(&model, &keymap, center(panel));
    assert_eq!(target, Some(HitTarget::Modal { inside: true }));
}

#[test]
fn test_hit_panel_matches_drawn_panel_with_user_bindings() {
    // A user keymap grows the help panel; clicks inside the taller drawn
    // panel must still resolve as inside hits.
    let mut model = loaded_model(3);
    update(&mut model, Msg::Ui(UiMsg::ToggleHelp));
    let (w, h) = model.window_size;

    let mut keymap = keymap();
    for (i, command) in [Command::NextSlide, Command::PrevSlide, Command::Quit]
        .into_iter()
        .enumerate()
    {
        keymap.add_binding(Keybinding::new(
            Keystroke::new(Modifiers::CTRL, KeyCode::Char((b'a' + i as u8) as char)),
            command,
        ));
    }
    assert!(keymap.bindings_for_display().len() > default_bindings().len());

    let drawn = help_modal_rect(w, h, keymap.bindings_for_display().len());

    // Bottom edge of the drawn panel, below where the default-sized
    // panel would end
    let low_inside = Point::new(
        (drawn.x + drawn.width / 2.0) as f64,
        (drawn.y + drawn.height - 2.0) as f64,
    );
    let default_panel = help_modal_rect(w, h, default_bindings().len());
    assert!(drawn.contains(low_inside.x as f32, low_inside.y as f32));
    assert!(!default_panel.contains(low_inside.x as f32, low_inside.y as f32));

    assert_eq!(
        hit_test_ui(&model, &keymap, low_inside),
        Some(HitTarget::Modal { inside: true })
    );
}
