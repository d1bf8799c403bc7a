// UI components - one module per panel
//
// Components are render-only: they read app/card state and draw, feeding
// nothing back except scroll dimensions (updated each frame).

pub mod card_panel;
pub mod status_bar;
pub mod title_bar;
