pub mod qr_top_sheet;
