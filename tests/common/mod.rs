#![allow(dead_code)]

use std::io::Write;
pub use tradefair::domain::asset::{PickSlot, Position, TradeAsset};

pub const SHEET_HEADER: &str = "side,name,position,value,tier,pick_round,pick_position,pick\n";
pub const ROSTER_HEADER: &str = "team,name,position,value,tier\n";

pub fn player(name: &str, position: Position, value: f64, tier: u8) -> TradeAsset {
    TradeAsset::player(name, position, value, Some(tier))
}

pub fn wr(value: f64, tier: u8) -> TradeAsset {
    player("Receiver", Position::Wr, value, tier)
}

pub fn rb(value: f64, tier: u8) -> TradeAsset {
    player("Back", Position::Rb, value, tier)
}

pub fn early_first(value: f64) -> TradeAsset {
    TradeAsset::pick("1st (Early)", value, Some(1), Some(PickSlot::Early))
}

pub fn write_temp_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_trade_sheet(rows: &str) -> tempfile::NamedTempFile {
    write_temp_file(&format!("{SHEET_HEADER}{rows}"), ".csv")
}

pub fn write_roster_sheet(rows: &str) -> tempfile::NamedTempFile {
    write_temp_file(&format!("{ROSTER_HEADER}{rows}"), ".csv")
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    write_temp_file(content, ".ini")
}
