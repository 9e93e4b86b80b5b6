mod cards;
mod columns;
mod format;
mod header;
mod host;
mod overlays;

pub(super) use columns::draw_main;
pub(super) use header::{draw_footer, draw_header};
pub(super) use overlays::{draw_help_popup, draw_resize_notice};
