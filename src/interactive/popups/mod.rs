pub mod help;
pub mod upload;

use ratatui::{layout::Rect, Frame};

use crate::formatting::theme::Palette;
use crate::interactive::app::{Popup, WellTuneApp};
use crate::session::ScreenId;

/// Draw the upload modal and any popup on top of everything
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &WellTuneApp, p: &Palette) {
    if app.screen() == ScreenId::Discover {
        if let Some(form) = &app.feed.upload {
            upload::draw(frame, area, form, p);
        }
    }

    let Some(popup) = app.popup else { return };
    match popup {
        Popup::Help => help::draw(frame, area, app.screen(), p),
    }
}
