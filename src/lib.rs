//! Z配列の構築と, Z配列による部分列検索

pub mod verify;
pub mod z;
pub mod zsearch;
