/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: u32,
    /// The page currently shown. Its button is rendered but not clickable.
    pub current: bool,
}

impl PageButton {
    pub fn is_enabled(&self) -> bool {
        !self.current
    }
}

/// Buttons for pages `1..=min(total_pages, max_buttons)`.
///
/// The cap is absolute: with 37 pages and a cap of 10 only pages 1 to 10
/// get a button, whatever the current page is.
pub fn page_buttons(current: u32, total_pages: u32, max_buttons: u32) -> Vec<PageButton> {
    (1..=total_pages.min(max_buttons))
        .map(|page| PageButton {
            page,
            current: page == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_at_ten_buttons() {
        let buttons = page_buttons(3, 37, 10);
        assert_eq!(buttons.len(), 10);
        assert_eq!(buttons.first().map(|b| b.page), Some(1));
        assert_eq!(buttons.last().map(|b| b.page), Some(10));

        let disabled: Vec<u32> = buttons
            .iter()
            .filter(|b| !b.is_enabled())
            .map(|b| b.page)
            .collect();
        assert_eq!(disabled, vec![3]);
    }

    #[test]
    fn test_fewer_pages_than_cap() {
        let buttons = page_buttons(1, 4, 10);
        assert_eq!(buttons.len(), 4);
        assert!(buttons[0].current);
        assert!(buttons[1..].iter().all(PageButton::is_enabled));
    }

    #[test]
    fn test_no_pages_no_buttons() {
        assert!(page_buttons(1, 0, 10).is_empty());
    }

    #[test]
    fn test_current_page_beyond_cap_has_no_disabled_button() {
        let buttons = page_buttons(12, 37, 10);
        assert_eq!(buttons.len(), 10);
        assert!(buttons.iter().all(PageButton::is_enabled));
    }
}
