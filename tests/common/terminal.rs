//! Frame capture helpers over ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use rag_console::App;

pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal")
}

/// Draw one frame of `app` and return what ended up on screen
pub fn draw_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal.draw(|f| app.draw(f)).expect("Failed to draw app");
    terminal.backend().buffer().clone()
}

/// Rows of `area`, one string per row, cells concatenated
pub fn region_rows(buffer: &Buffer, area: Rect) -> Vec<String> {
    (area.y..area.y.saturating_add(area.height))
        .map(|y| {
            (area.x..area.x.saturating_add(area.width))
                .filter_map(|x| buffer.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect()
        })
        .collect()
}

pub fn buffer_region_to_string(buffer: &Buffer, area: Rect) -> String {
    region_rows(buffer, area).join("\n")
}

pub fn buffer_to_string(buffer: &Buffer) -> String {
    buffer_region_to_string(buffer, buffer.area)
}

pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    region_rows(buffer, buffer.area)
        .iter()
        .any(|row| row.contains(text))
}

/// Fails with the whole screen printed when `expected` is not on any row
pub fn assert_screen_contains(buffer: &Buffer, expected: &str) {
    assert!(
        buffer_contains(buffer, expected),
        "Screen does not contain {:?}:\n{}",
        expected,
        buffer_to_string(buffer)
    );
}

/// One screen row with trailing blanks removed
pub fn screen_row(buffer: &Buffer, y: u16) -> String {
    let row = Rect::new(buffer.area.x, y, buffer.area.width, 1);
    buffer_region_to_string(buffer, row).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_region_capture() {
        let mut terminal = create_test_terminal_sized(20, 5);
        terminal
            .draw(|f| {
                f.render_widget(Paragraph::new("Line 1\nLine 2\nLine 3"), f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        assert_eq!(
            buffer_region_to_string(buffer, Rect::new(0, 0, 6, 2)),
            "Line 1\nLine 2"
        );
        assert_eq!(screen_row(buffer, 2), "Line 3");
        assert!(buffer_contains(buffer, "ne 2"));
        assert!(!buffer_contains(buffer, "Line 4"));
    }
}
