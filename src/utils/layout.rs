use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Widest the form card gets on large terminals.
pub const CARD_WIDTH: u16 = 64;

/// Center a `width` x `height` box inside `area`, shrinking to fit.
pub fn center_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Header / content / footer split used by every screen.
pub fn create_standard_layout(
    area: Rect,
    header_height: u16,
    footer_height: u16,
) -> (Rect, Rect, Rect) {
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);
    (header, content, footer)
}

/// Horizontal split by percentages.
pub fn create_split_layout(area: Rect, percentages: &[u16]) -> Vec<Rect> {
    Layout::horizontal(percentages.iter().map(|p| Constraint::Percentage(*p)))
        .split(area)
        .to_vec()
}

/// The content column: centered, at most [`CARD_WIDTH`] wide.
pub fn card_area(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// Stack rows of fixed `heights` in the card column, centered vertically.
///
/// Rows that do not fit are squeezed by the layout solver rather than dropped,
/// so the returned vector always has one entry per height.
pub fn stack_rows(area: Rect, heights: &[u16]) -> Vec<Rect> {
    Layout::vertical(heights.iter().map(|h| Constraint::Length(*h)))
        .flex(Flex::Center)
        .split(card_area(area))
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = center_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_center_popup_shrinks_to_fit() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = center_popup(area, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 30), 5, 2);
        assert_eq!(header.height, 5);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 23);
    }

    #[test]
    fn test_card_area_caps_width() {
        assert_eq!(card_area(Rect::new(0, 0, 200, 10)).width, CARD_WIDTH);
        assert_eq!(card_area(Rect::new(0, 0, 40, 10)).width, 40);
    }

    #[test]
    fn test_stack_rows_centers_block() {
        let rows = stack_rows(Rect::new(0, 0, 100, 21), &[3, 1, 3]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].y, 7);
        assert_eq!(rows[1].y, 10);
        assert_eq!(rows[2].height, 3);
        assert_eq!(rows[0].width, CARD_WIDTH);
    }
}
