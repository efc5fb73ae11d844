//! Layout and type tokens shared by the screens and widgets.

/// Every spacing step is a multiple of this.
const GRID: f32 = 4.0;

pub const SPACE_XXS: f32 = GRID / 2.0;
pub const SPACE_XS: f32 = GRID;
pub const SPACE_SM: f32 = GRID * 2.0;
pub const SPACE_MD: f32 = GRID * 3.0;
pub const SPACE_LG: f32 = GRID * 4.0;
pub const SPACE_XL: f32 = GRID * 6.0;
pub const SPACE_2XL: f32 = GRID * 8.0;

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 22.0;

/// Relative line heights.
pub const LINE_HEIGHT_TIGHT: f32 = 1.2;
pub const LINE_HEIGHT_NORMAL: f32 = 1.45;
pub const LINE_HEIGHT_LOOSE: f32 = 1.6;

/// Section titles and card titles.
pub const FONT_HEADING: iced::Font = iced::Font {
    weight: iced::font::Weight::Semibold,
    ..iced::Font::DEFAULT
};

pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_XL: f32 = 16.0;
pub const RADIUS_FULL: f32 = 9999.0;

// Posters keep TMDB's 2:3 aspect ratio.
pub const POSTER_WIDTH: f32 = 150.0;
pub const POSTER_HEIGHT: f32 = POSTER_WIDTH * 1.5;
pub const DETAIL_POSTER_WIDTH: f32 = 200.0;
pub const DETAIL_POSTER_HEIGHT: f32 = DETAIL_POSTER_WIDTH * 1.5;

pub const DIALOG_WIDTH: f32 = 720.0;
pub const DIALOG_MAX_HEIGHT: f32 = 560.0;

pub const SEARCH_BAR_WIDTH: f32 = 520.0;
pub const SEARCH_BAR_HEIGHT: f32 = 36.0;

pub const NAV_RAIL_WIDTH: f32 = 80.0;
pub const NAV_ICON_SIZE: f32 = 22.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Filter chips and page buttons.
pub const CHIP_HEIGHT: f32 = 32.0;
pub const CHIP_RADIUS: f32 = RADIUS_MD;
