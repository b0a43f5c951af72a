use crate::coords::Rect;
use crate::scene::RoundedRectCmd;
use crate::surface::Frame;

/// Rasterizes a `DrawCmd::RoundedRect`.
///
/// Coverage comes from the rounded-box signed distance evaluated at each
/// pixel center, giving a ~1 px anti-aliased edge. The border, when present,
/// is a ring inset from the outer edge by its width.
pub(crate) fn render(frame: &mut Frame, cmd: &RoundedRectCmd) {
    let r = cmd.rect.normalized();
    if r.is_empty() {
        return;
    }

    let half_w = r.size.x * 0.5;
    let half_h = r.size.y * 0.5;
    let radius = cmd.radius.max(0.0).min(half_w.min(half_h));
    let center = r.center();

    let border_width = cmd
        .border
        .as_ref()
        .map(|b| b.width.max(0.0))
        .unwrap_or(0.0);

    // Pixel bounds, padded one pixel for the AA fringe and clipped to the frame.
    let clip = Rect::new(0.0, 0.0, frame.width() as f32, frame.height() as f32);
    let Some(bounds) = Rect::new(
        r.origin.x - 1.0,
        r.origin.y - 1.0,
        r.size.x + 2.0,
        r.size.y + 2.0,
    )
    .intersect(clip) else {
        return;
    };

    let x0 = bounds.min().x.floor() as i32;
    let y0 = bounds.min().y.floor() as i32;
    let x1 = bounds.max().x.ceil() as i32;
    let y1 = bounds.max().y.ceil() as i32;

    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f32 + 0.5 - center.x;
            let py = y as f32 + 0.5 - center.y;

            let d = rounded_box_distance(px, py, half_w, half_h, radius);
            let fill = (0.5 - d).clamp(0.0, 1.0);
            if fill > 0.0 {
                frame.blend_pixel(x, y, cmd.color, fill);
            }

            if let Some(border) = &cmd.border {
                // Ring between the outer edge and the edge shrunk by the width.
                let inner = (0.5 - (d + border_width)).clamp(0.0, 1.0);
                let ring = fill - inner;
                if ring > 0.0 {
                    frame.blend_pixel(x, y, border.color, ring);
                }
            }
        }
    }
}

/// Signed distance from a point (relative to the box center) to a rounded
/// box with half-extents `(hw, hh)` and corner radius `radius`. Negative
/// inside.
#[inline]
fn rounded_box_distance(px: f32, py: f32, hw: f32, hh: f32, radius: f32) -> f32 {
    let qx = px.abs() - (hw - radius);
    let qy = py.abs() - (hh - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::Border;

    fn cmd(rect: Rect, radius: f32, border: Option<Border>) -> RoundedRectCmd {
        RoundedRectCmd::new(rect, radius, Color::white(), border)
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn interior_pixel_is_fully_covered() {
        let mut frame = Frame::new(20, 20);
        render(&mut frame, &cmd(Rect::new(2.0, 2.0, 16.0, 16.0), 4.0, None));
        assert_eq!(frame.pixel(10, 10), Color::white());
    }

    #[test]
    fn rounded_corner_pixel_stays_empty() {
        let mut frame = Frame::new(20, 20);
        render(&mut frame, &cmd(Rect::new(2.0, 2.0, 16.0, 16.0), 6.0, None));
        // (2, 2) is the rect corner; with a 6 px radius it lies well outside
        // the corner arc.
        assert_eq!(frame.pixel(2, 2).a, 0.0);
    }

    #[test]
    fn zero_radius_fills_the_corner() {
        let mut frame = Frame::new(20, 20);
        render(&mut frame, &cmd(Rect::new(2.0, 2.0, 16.0, 16.0), 0.0, None));
        assert_eq!(frame.pixel(2, 2), Color::white());
        assert_eq!(frame.pixel(17, 17), Color::white());
    }

    #[test]
    fn outside_the_rect_is_untouched() {
        let mut frame = Frame::new(20, 20);
        render(&mut frame, &cmd(Rect::new(2.0, 2.0, 16.0, 16.0), 0.0, None));
        assert_eq!(frame.pixel(0, 0).a, 0.0);
        assert_eq!(frame.pixel(19, 10).a, 0.0);
    }

    // ── border ────────────────────────────────────────────────────────────

    #[test]
    fn border_ring_covers_the_edge_not_the_middle() {
        let mut frame = Frame::new(24, 24);
        let border = Border::new(2.0, Color::black());
        render(
            &mut frame,
            &cmd(Rect::new(2.0, 2.0, 20.0, 20.0), 0.0, Some(border)),
        );
        // Edge pixel sits inside the 2 px ring.
        assert_eq!(frame.pixel(3, 12), Color::black());
        // Center keeps the fill.
        assert_eq!(frame.pixel(12, 12), Color::white());
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn empty_rect_is_a_no_op() {
        let mut frame = Frame::new(8, 8);
        render(&mut frame, &cmd(Rect::new(4.0, 4.0, 0.0, 10.0), 2.0, None));
        assert_eq!(frame.pixel(4, 4).a, 0.0);
    }

    #[test]
    fn rect_fully_off_frame_is_a_no_op() {
        let mut frame = Frame::new(8, 8);
        render(&mut frame, &cmd(Rect::new(100.0, 100.0, 10.0, 10.0), 2.0, None));
        assert_eq!(frame.pixel(7, 7).a, 0.0);
    }
}
