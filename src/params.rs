// src/params.rs
use std::path::PathBuf;

// Source page
pub const PAGE_URL: &str =
    "https://yokaiwatch.fandom.com/wiki/List_of_Yo-kai_by_Medallium_Number_(Yo-kai_Watch)";
pub const YOKAI_TABLE_SELECTOR: &str = "table.main.roundy";

// Output
pub const DEFAULT_OUT_FILE: &str = "yokai/ykw1.json";
pub const GAME_ID: &str = "ykw1";
pub const IMAGE_DIR: &str = "././assets/yokai/";
pub const IMAGE_EXT: &str = ".png";

// Column layout (0-based cell offsets within a data row)
pub const ID_CELL: usize = 0;
pub const NAME_CELL: usize = 2;
pub const RANK_CELL: usize = 3;
pub const TRIBE_CELL: usize = 4;
// The boss table drops one column, shifting the tribe icon left.
pub const BOSS_TRIBE_CELL: usize = 3;

// Special tables, 1-indexed by occurrence order on the page.
pub const LEGENDARY_TABLE: usize = 9;
pub const BOSS_TABLE: usize = 11;

#[derive(Clone, Debug)]
pub struct Params {
    pub url: String,      // page to scrape
    pub out: PathBuf,     // output JSON file
    pub quiet: bool,      // suppress stdout progress
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: s!(PAGE_URL),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            quiet: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
