pub mod app;
pub mod cart_view;
pub mod configurator_view;
pub mod email_capture;
pub mod frame_grid;
pub mod header;
pub mod lead_form;
pub mod preview_canvas;
pub mod qualification_view;
pub mod success_panel;
