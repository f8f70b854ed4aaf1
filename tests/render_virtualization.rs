//! Virtualized painting through `HexView::paint`.

mod common;

use common::{Fixture, VIEW_HEIGHT, text_grid};
use hexpane::{
    DisplayList, DrawCommand, HexViewOptions, PointerButton, Rect, Rgba, Theme,
};

#[test]
fn renders_gutter_hex_and_glyphs() {
    let fx = Fixture::new(b"Hello, hexpane!\n\x00\x01ABC");
    let list = fx.paint();
    insta::assert_snapshot!(text_grid(&list), @r"
    0000h 48 65 6C 6C 6F 2C 20 68 65 78 70 61 6E 65 21 0A Hello, hexpane!.
    0010h 00 01 41 42 43                                  ..ABC
    ");
}

#[test]
fn renders_custom_layout_options() {
    let options = HexViewOptions {
        bytes_per_line: 8,
        address_suffix: None,
        placeholder: '\u{B7}',
        ..HexViewOptions::default()
    };
    let fx = Fixture::with_options(b"\x07bell\x00ok!", options);
    insta::assert_snapshot!(text_grid(&fx.paint()), @r"
    0000 07 62 65 6C 6C 00 6F 6B ·bell·ok
    0008 21                      !
    ");
}

#[test]
fn large_buffer_paints_one_page() {
    common::init_logging();
    let mut fx = Fixture::new(&vec![0x5A; 1 << 20]);
    assert_eq!(fx.view.line_count(), 65_536);
    fx.view.set_scroll_offset(0, 30_000);

    let mut list = DisplayList::new();
    let stats = fx.view.paint(&mut list, None);
    assert_eq!((stats.start_line, stats.end_line), (30_000, 30_011));
    assert_eq!(stats.bytes, 11 * 16);

    // Five decimal digits of line count, hex label of the byte offset
    let (_, _, label) = list.texts_with(Rgba::GRAY).next().unwrap();
    assert_eq!(label, "75300h");
}

#[test]
fn caret_rect_repaints_a_single_line() {
    let mut fx = Fixture::new(&[0; 16 * 20]);
    fx.view
        .on_pointer_down(fx.hex_point(3, 9), PointerButton::Primary);
    let caret = fx.view.cursor_rect().unwrap();

    let mut list = DisplayList::new();
    let stats = fx.view.paint(&mut list, Some(caret));
    assert_eq!(stats.lines(), 1);
    assert_eq!(stats.start_line, 3);
    assert!(stats.caret_drawn);
}

#[test]
fn paint_is_idempotent() {
    let mut fx = Fixture::new(&[0x33; 100]);
    fx.drag_hex((1, 4), (4, 20));
    let first = fx.paint();
    let second = fx.paint();
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn scrolled_selection_stays_right_of_gutter() {
    let mut fx = Fixture::new(&[0; 16 * 8]);
    fx.view.on_resize(300, VIEW_HEIGHT);
    fx.view.set_scroll_offset(120, 0);
    fx.drag_hex((0, 30), (3, 40));

    let list = fx.paint();
    let hex_origin = fx.view.layout().hex_origin_x();
    let fills: Vec<_> = list.fills_with(Theme::default().selection).collect();
    assert!(!fills.is_empty());
    assert!(fills.iter().all(|r| r.x >= hex_origin && r.right() <= 300));
}

#[test]
fn rules_frame_the_panes() {
    let mut fx = Fixture::new(&[0; 64]);
    fx.view.on_resize(300, VIEW_HEIGHT);
    fx.view.set_scroll_offset(40, 0);

    let list = fx.paint();
    let rules: Vec<_> = list.lines_with(Rgba::GRAY).collect();
    assert_eq!(rules.len(), 2);
    // The gutter rule does not scroll; the text pane rule does
    assert_eq!(rules[0].0.x, 40 + 4);
    let ascii = fx.view.layout().ascii_origin_x();
    assert_eq!(rules[1].0.x, ascii - 40 - 4);
    assert_eq!(rules[1].1.y, VIEW_HEIGHT as i32);
}

#[test]
fn pane_content_is_clipped_at_hex_origin() {
    let fx = Fixture::new(&[0xEE; 48]);
    let list = fx.paint();
    assert_eq!(list.clip_depth(), 0);

    let hex_origin = fx.view.layout().hex_origin_x();
    for command in list.commands() {
        if let DrawCommand::Text { text, clip, .. } = command {
            let clip = clip.expect("paint always clips");
            if text.ends_with('h') {
                assert_eq!(clip, Rect::new(0, 0, 640, VIEW_HEIGHT));
            } else {
                assert_eq!(clip.x, hex_origin);
            }
        }
    }
}
