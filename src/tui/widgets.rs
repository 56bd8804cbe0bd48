//! Custom widgets for the terminal UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Header badge showing how many alerts are on record
pub struct AlertBadge {
    count: usize,
    blink: bool,
}

impl AlertBadge {
    pub fn new(count: usize) -> Self {
        Self { count, blink: false }
    }

    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    pub fn text(&self) -> String {
        if self.count == 0 {
            "NO ALERTS".to_string()
        } else {
            format!("⚠ ALERTS: {}", self.count)
        }
    }
}

impl Widget for AlertBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut style = if self.count == 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };
        if self.blink && self.count > 0 {
            style = style.add_modifier(Modifier::SLOW_BLINK);
        }

        buf.set_stringn(area.x, area.y, self.text(), area.width as usize, style);
    }
}

/// Double-line framed box for the terminal lockout
pub struct LockoutBox {
    title: String,
    content: Vec<String>,
}

impl LockoutBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }
}

impl Widget for LockoutBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let style = Style::default().fg(Color::Red);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(area.x, bottom, "╚", style);
        buf.set_string(right, bottom, "╝", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        let title = format!(" {} ", self.title);
        let inner_width = area.width.saturating_sub(2) as usize;
        let title_width = title.chars().count().min(inner_width);
        let title_x = area.x + 1 + ((inner_width - title_width) / 2) as u16;
        buf.set_stringn(title_x, area.y, &title, title_width, style.add_modifier(Modifier::BOLD));

        let text_width = area.width.saturating_sub(4) as usize;
        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(area.x + 2, y, line, text_width, Style::default().fg(Color::White));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn badge_text_reflects_count() {
        assert_eq!(AlertBadge::new(0).text(), "NO ALERTS");
        assert_eq!(AlertBadge::new(3).text(), "⚠ ALERTS: 3");
    }

    #[test]
    fn lockout_box_draws_frame_and_content() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        LockoutBox::new("LOCKED")
            .content(vec!["CONTACT SECURITY".to_string()])
            .render(area, &mut buf);

        assert!(row(&buf, 0).starts_with('╔'));
        assert!(row(&buf, 0).contains(" LOCKED "));
        assert!(row(&buf, 1).contains("CONTACT SECURITY"));
        assert!(row(&buf, 4).starts_with('╚'));
    }

    #[test]
    fn tiny_area_is_left_alone() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        LockoutBox::new("A VERY LONG TITLE").render(area, &mut buf);
        assert_eq!(row(&buf, 0), "   ");
    }
}
