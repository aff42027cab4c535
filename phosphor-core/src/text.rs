//! Text layout into the framebuffer
//!
//! Renders strings as fixed-width bitmap glyphs, one page row per 6x8
//! glyph and two adjacent page rows per 8x16 glyph. Rendering only mutates
//! the framebuffer; making it visible is a separate refresh.

use crate::config::WrapMode;
use crate::error::OutOfBounds;
use crate::font::{self, TextSize};
use crate::framebuffer::Framebuffer;

/// Render `text` starting at pixel column `x` on page row `page`.
///
/// The cursor advances by the glyph width per character. A glyph that would
/// cross the right edge triggers the wrap policy before it is drawn: `Wrap`
/// restarts at column 0 on the next glyph row, `Reject` fails with
/// [`OutOfBounds`]. An exact fit against the edge triggers neither.
/// Characters already placed are kept when rendering fails partway.
pub fn draw_str<const WIDTH: usize, const PAGES: usize>(
    frame: &mut Framebuffer<WIDTH, PAGES>,
    x: usize,
    page: usize,
    text: &str,
    size: TextSize,
    wrap: WrapMode,
) -> Result<(), OutOfBounds> {
    let glyph_width = size.width();
    let glyph_pages = size.pages();
    if glyph_width > WIDTH {
        return Err(OutOfBounds);
    }

    let mut x = x;
    let mut page = page;
    for ch in text.chars() {
        if x + glyph_width > WIDTH {
            match wrap {
                WrapMode::Wrap => {
                    x = 0;
                    page += glyph_pages;
                }
                WrapMode::Reject => return Err(OutOfBounds),
            }
        }
        if page + glyph_pages > PAGES {
            return Err(OutOfBounds);
        }

        match size {
            TextSize::Small => {
                let glyph = font::glyph_6x8(ch);
                frame.page_mut(page)[x..x + 6].copy_from_slice(glyph);
            }
            TextSize::Large => {
                let glyph = font::glyph_8x16(ch);
                frame.page_mut(page)[x..x + 8].copy_from_slice(&glyph[..8]);
                frame.page_mut(page + 1)[x..x + 8].copy_from_slice(&glyph[8..]);
            }
        }
        x += glyph_width;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FONT_6X8, FONT_8X16};

    #[test]
    fn small_glyphs_land_on_one_page() {
        let mut frame = Framebuffer::<32, 2>::new();
        draw_str(&mut frame, 2, 1, "Hi", TextSize::Small, WrapMode::Reject).unwrap();

        assert_eq!(&frame.page(1)[2..8], &FONT_6X8['H' as usize - 32]);
        assert_eq!(&frame.page(1)[8..14], &FONT_6X8['i' as usize - 32]);
        // Page 0 untouched
        assert!(frame.page(0).iter().all(|&b| b == 0));
    }

    #[test]
    fn large_glyphs_span_two_pages() {
        let mut frame = Framebuffer::<16, 4>::new();
        draw_str(&mut frame, 0, 1, "A", TextSize::Large, WrapMode::Reject).unwrap();

        let glyph = &FONT_8X16['A' as usize - 32];
        assert_eq!(&frame.page(1)[..8], &glyph[..8]);
        assert_eq!(&frame.page(2)[..8], &glyph[8..]);
        assert!(frame.page(0).iter().all(|&b| b == 0));
        assert!(frame.page(3).iter().all(|&b| b == 0));
    }

    #[test]
    fn exact_fit_does_not_trigger_the_edge_policy() {
        // Two 6-wide glyphs exactly fill a 12-column panel
        let mut frame = Framebuffer::<12, 1>::new();
        draw_str(&mut frame, 0, 0, "ok", TextSize::Small, WrapMode::Reject).unwrap();
        assert_eq!(&frame.page(0)[6..12], &FONT_6X8['k' as usize - 32]);
    }

    #[test]
    fn one_glyph_past_the_edge_wraps_to_column_zero() {
        let mut frame = Framebuffer::<12, 3>::new();
        draw_str(&mut frame, 0, 0, "abc", TextSize::Small, WrapMode::Wrap).unwrap();

        assert_eq!(&frame.page(0)[0..6], &FONT_6X8['a' as usize - 32]);
        assert_eq!(&frame.page(0)[6..12], &FONT_6X8['b' as usize - 32]);
        assert_eq!(&frame.page(1)[0..6], &FONT_6X8['c' as usize - 32]);
    }

    #[test]
    fn wrap_advances_by_the_glyph_page_height() {
        // 8-wide panel: every large glyph wraps to a fresh pair of pages
        let mut frame = Framebuffer::<8, 4>::new();
        draw_str(&mut frame, 0, 0, "AB", TextSize::Large, WrapMode::Wrap).unwrap();

        assert_eq!(&frame.page(2)[..8], &FONT_8X16['B' as usize - 32][..8]);
        assert_eq!(&frame.page(3)[..8], &FONT_8X16['B' as usize - 32][8..]);
    }

    #[test]
    fn reject_keeps_prior_characters_and_skips_the_offender() {
        let mut frame = Framebuffer::<12, 1>::new();
        let result = draw_str(&mut frame, 0, 0, "abc", TextSize::Small, WrapMode::Reject);

        assert_eq!(result, Err(OutOfBounds));
        assert_eq!(&frame.page(0)[0..6], &FONT_6X8['a' as usize - 32]);
        assert_eq!(&frame.page(0)[6..12], &FONT_6X8['b' as usize - 32]);
    }

    #[test]
    fn wrapping_below_the_last_page_is_out_of_range() {
        let mut frame = Framebuffer::<12, 1>::new();
        let result = draw_str(&mut frame, 0, 0, "abc", TextSize::Small, WrapMode::Wrap);
        assert_eq!(result, Err(OutOfBounds));

        let mut tall = Framebuffer::<12, 2>::new();
        let result = draw_str(&mut tall, 0, 1, "AB", TextSize::Large, WrapMode::Wrap);
        assert_eq!(result, Err(OutOfBounds));
    }

    #[test]
    fn empty_string_is_a_no_op() {
        let mut frame = Framebuffer::<12, 1>::new();
        let snapshot = frame.clone();
        draw_str(&mut frame, 0, 0, "", TextSize::Small, WrapMode::Reject).unwrap();
        assert_eq!(frame, snapshot);
    }
}
