//! Rendering of a plot panel into a ratatui buffer.
//!
//! Layout, from the outside in: an optional title row on top, an optional
//! color bar strip on the right, the vertical axis on the left (tic labels
//! and a stacked axis label), the horizontal axis below the tile (above it
//! when x1 runs down), and the bordered tile holding the views.

use super::{Panel, PlotPanel};
use crate::axis::{format_tic, AxisFormat, AxisTics};
use crate::theme::ThemeColors;
use crate::views::{DrawContext, Projector};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

/// Narrowest tile worth drawing views into.
const MIN_TILE: u16 = 2;

impl Widget for &PlotPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = ThemeColors::from_theme(self.theme);
        buf.set_style(area, Style::default().bg(colors.bg).fg(colors.text));
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Title
        let mut rest = area;
        if let Some(title) = self.title() {
            put_centered(buf, area.x, area.width, area.y, title, colors.title);
            rest.y += 1;
            rest.height -= 1;
        }

        // Color bar strip
        let bar_width = self.layout.color_bar.width;
        let bar = self
            .color_bar
            .as_ref()
            .filter(|_| rest.width > bar_width + 2 * MIN_TILE + 2);
        if bar.is_some() {
            rest.width -= bar_width + 1;
        }

        // Horizontal axis rows
        let h_rows = 1 + u16::from(self.h_label.is_some());
        if rest.height < h_rows + MIN_TILE + 2 {
            return;
        }
        let on_top = self.orientation.h_axis_on_top();
        let tile_height = rest.height - h_rows - 2;

        // Vertical axis tics come first: their labels size the left margin
        let (vmin, vmax) = self.v_limits();
        let axis = &self.layout.axis;
        let v_count = (tile_height / axis.v_tic_spacing.max(1)) as usize;
        let v_tics = AxisTics::new(vmin, vmax, v_count.clamp(1, axis.max_v_tics));
        let v_labels = tic_labels(&v_tics, self.v_tic_format.as_ref());
        let label_width = v_labels
            .iter()
            .map(|s| s.width())
            .max()
            .unwrap_or(0)
            .min(axis.max_label_width) as u16;
        let v_label_width = u16::from(self.v_label.is_some()) * 2;
        let left = v_label_width + label_width + 1;
        if rest.width < left + MIN_TILE + 2 {
            return;
        }

        let frame = Rect {
            x: rest.x + left,
            y: if on_top { rest.y + h_rows } else { rest.y },
            width: rest.width - left,
            height: tile_height + 2,
        };
        let block = Block::bordered().border_style(Style::default().fg(colors.border));
        let tile = block.inner(frame);
        block.render(frame, buf);

        let (hmin, hmax) = self.h_limits();
        let h_count = (tile.width / axis.h_tic_spacing.max(1)) as usize;
        let h_tics = AxisTics::new(hmin, hmax, h_count.clamp(1, axis.max_h_tics));
        let vp = if self.orientation.vertical_up() {
            Projector::new(vmax, vmin)
        } else {
            Projector::new(vmin, vmax)
        };
        let ctx = DrawContext {
            tile,
            orientation: self.orientation,
            hp: Projector::new(hmin, hmax),
            vp,
            h_tics,
            v_tics,
            colors: &colors,
        };
        tracing::trace!(?tile, hmin, hmax, vmin, vmax, "rendering plot panel");

        for view in &self.views {
            view.borrow().draw(&ctx, buf);
        }

        // Vertical axis: tic marks on the left border, labels right-aligned
        for (value, label) in v_tics.values().zip(&v_labels) {
            let Some(row) = ctx.row_of(value) else {
                continue;
            };
            put_glyph(buf, frame.x, row, '┤', colors.border);
            let text = clip(label, label_width as usize);
            let x = frame.x - 1 - text.width() as u16;
            put_text(buf, x, row, &text, colors.tic);
        }
        if let Some(ref label) = self.v_label {
            let count = label.chars().count().min(tile.height as usize) as u16;
            let top = tile.y + (tile.height - count) / 2;
            for (i, c) in label.chars().take(count as usize).enumerate() {
                put_glyph(buf, rest.x, top + i as u16, c, colors.label);
            }
        }

        // Horizontal axis: tic marks on the near border, labels centered
        let (mark_row, mark, label_row, name_row) = if on_top {
            let tics = frame.y - 1;
            (frame.y, '┬', tics, tics.checked_sub(1))
        } else {
            let tics = frame.bottom();
            (tics - 1, '┴', tics, Some(tics + 1))
        };
        let mut free_from = rest.x;
        let h_labels = tic_labels(&h_tics, self.h_tic_format.as_ref());
        for (value, label) in h_tics.values().zip(&h_labels) {
            let Some(col) = ctx.column_of(value) else {
                continue;
            };
            put_glyph(buf, col, mark_row, mark, colors.border);
            let width = label.width() as u16;
            let x = col.saturating_sub(width / 2).max(rest.x);
            if x < free_from || x + width > rest.right() {
                continue;
            }
            put_text(buf, x, label_row, label, colors.tic);
            free_from = x + width + 1;
        }
        if let (Some(label), Some(row)) = (self.h_label.as_deref(), name_row) {
            put_centered(buf, tile.x, tile.width, row, label, colors.label);
        }

        if let Some(bar) = bar {
            let strip = Rect {
                x: rest.right() + 1,
                y: frame.y,
                width: bar_width,
                height: frame.height,
            };
            bar.borrow().draw(strip, buf, &colors, &self.layout.color_bar);
        }
    }
}

/// Tic labels in the given format, or in a default format when none is set.
fn tic_labels(tics: &AxisTics, format: Option<&AxisFormat>) -> Vec<String> {
    match format {
        Some(format) => tics.values().map(|v| format.format(v)).collect(),
        None => {
            let decimals = tics.decimals();
            tics.values().map(|v| format_tic(v, decimals)).collect()
        },
    }
}

fn clip(text: &str, width: usize) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + c.to_string().width() > width {
            break;
        }
        out.push(c);
    }
    out
}

fn put_glyph(buf: &mut Buffer, x: u16, y: u16, c: char, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(c).set_fg(color);
    }
}

fn put_text(buf: &mut Buffer, x: u16, y: u16, text: &str, color: Color) {
    for (i, c) in text.chars().enumerate() {
        put_glyph(buf, x.saturating_add(i as u16), y, c, color);
    }
}

fn put_centered(buf: &mut Buffer, x: u16, width: u16, y: u16, text: &str, color: Color) {
    let text = clip(text, width as usize);
    let offset = (width - text.width() as u16) / 2;
    put_text(buf, x + offset, y, &text, color);
}
